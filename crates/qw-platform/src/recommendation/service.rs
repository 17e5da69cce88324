//! Recommendation Heuristics
//!
//! Up to four suggestions derived from current mock state plus the wall
//! clock. No persistence, no learning: the same state and clock always
//! produce the same list.
//!
//! 1. The center with the minimum current wait (always present).
//! 2. The user's preferred center, if different from (1).
//! 3. An upcoming preferred time window for the current weekday.
//! 4. The historically shortest-wait visit from the user's history.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::center::entity::ServiceCenter;
use crate::user::entity::User;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Suggestion category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationKind {
    ShortestWait,
    PreferredCenter,
    PreferredWindow,
    HistoricalBest,
}

/// One suggestion entry with a fixed-format human-readable reason
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub kind: RecommendationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_id: Option<String>,
    pub reason: String,
}

/// Compute the suggestion list for a user against the current center state
pub fn recommend(user: &User, centers: &[ServiceCenter], now: DateTime<Utc>) -> Vec<Recommendation> {
    let mut recommendations = Vec::with_capacity(4);

    // 1. Shortest current wait
    let shortest = centers.iter().min_by_key(|c| c.current_wait_minutes);
    let shortest_id = shortest.map(|c| c.id.clone());
    if let Some(center) = shortest {
        recommendations.push(Recommendation {
            kind: RecommendationKind::ShortestWait,
            center_id: Some(center.id.clone()),
            reason: format!(
                "{} currently has the shortest wait at {} minutes",
                center.name, center.current_wait_minutes
            ),
        });
    }

    // 2. Preferred center, when it isn't already the shortest-wait pick
    if let Some(preferred_id) = &user.preferences.preferred_center_id {
        if shortest_id.as_deref() != Some(preferred_id.as_str()) {
            if let Some(center) = centers.iter().find(|c| &c.id == preferred_id) {
                recommendations.push(Recommendation {
                    kind: RecommendationKind::PreferredCenter,
                    center_id: Some(center.id.clone()),
                    reason: format!(
                        "You usually visit {}; its current wait is {} minutes",
                        center.name, center.current_wait_minutes
                    ),
                });
            }
        }
    }

    // 3. An upcoming preferred window today
    let today = now.weekday().num_days_from_monday() as u8;
    let hour = now.hour() as u8;
    if let Some(window) = user
        .preferences
        .preferred_windows
        .iter()
        .find(|w| w.day_of_week == today && w.end_hour > hour)
    {
        recommendations.push(Recommendation {
            kind: RecommendationKind::PreferredWindow,
            center_id: None,
            reason: format!(
                "Your preferred {} window {:02}:00-{:02}:00 is still open today",
                DAY_NAMES[window.day_of_week as usize % 7],
                window.start_hour,
                window.end_hour
            ),
        });
    }

    // 4. Historically fastest visit
    if let Some(best) = user.visit_history.iter().min_by_key(|v| v.wait_minutes) {
        recommendations.push(Recommendation {
            kind: RecommendationKind::HistoricalBest,
            center_id: Some(best.center_id.clone()),
            reason: format!(
                "Your fastest visit was {} minutes at {}",
                best.wait_minutes, best.center_name
            ),
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::entity::{PreferredWindow, UserPreferences, VisitRecord};
    use chrono::TimeZone;

    fn centers() -> Vec<ServiceCenter> {
        vec![
            ServiceCenter::new("c-1", "Downtown", 10, 5),
            ServiceCenter::new("c-2", "Airport", 25, 12),
            ServiceCenter::new("c-3", "Mall", 4, 2),
        ]
    }

    fn full_profile_user(now: DateTime<Utc>) -> User {
        User::new("demo@example.com", "password123", "Demo")
            .with_preferences(UserPreferences {
                preferred_center_id: Some("c-2".to_string()),
                preferred_windows: vec![PreferredWindow {
                    day_of_week: now.weekday().num_days_from_monday() as u8,
                    start_hour: 0,
                    end_hour: 23,
                }],
            })
            .with_visit_history(vec![
                VisitRecord {
                    center_id: "c-1".to_string(),
                    center_name: "Downtown".to_string(),
                    date: "2026-07-02".to_string(),
                    wait_minutes: 6,
                },
                VisitRecord {
                    center_id: "c-2".to_string(),
                    center_name: "Airport".to_string(),
                    date: "2026-07-20".to_string(),
                    wait_minutes: 19,
                },
            ])
    }

    #[test]
    fn test_full_profile_yields_four_entries() {
        let now = Utc.with_ymd_and_hms(2026, 8, 19, 10, 0, 0).unwrap();
        let recs = recommend(&full_profile_user(now), &centers(), now);
        assert_eq!(recs.len(), 4);
    }

    #[test]
    fn test_exactly_one_shortest_wait_entry() {
        let now = Utc::now();
        let recs = recommend(&full_profile_user(now), &centers(), now);
        let shortest: Vec<_> = recs
            .iter()
            .filter(|r| r.kind == RecommendationKind::ShortestWait)
            .collect();
        assert_eq!(shortest.len(), 1);
        assert_eq!(shortest[0].center_id.as_deref(), Some("c-3"));
        assert!(shortest[0].reason.contains("shortest wait at 4 minutes"));
    }

    #[test]
    fn test_never_more_than_four() {
        let now = Utc::now();
        let recs = recommend(&full_profile_user(now), &centers(), now);
        assert!(recs.len() <= 4);
    }

    #[test]
    fn test_bare_user_gets_only_shortest_wait() {
        let user = User::new("a@b.c", "pw", "A");
        let recs = recommend(&user, &centers(), Utc::now());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].kind, RecommendationKind::ShortestWait);
    }

    #[test]
    fn test_preferred_center_skipped_when_it_is_shortest() {
        let now = Utc::now();
        let mut user = full_profile_user(now);
        user.preferences.preferred_center_id = Some("c-3".to_string());
        let recs = recommend(&user, &centers(), now);
        assert!(recs
            .iter()
            .all(|r| r.kind != RecommendationKind::PreferredCenter));
    }

    #[test]
    fn test_window_on_other_day_not_suggested() {
        let now = Utc.with_ymd_and_hms(2026, 8, 19, 10, 0, 0).unwrap();
        let mut user = full_profile_user(now);
        let other_day = (now.weekday().num_days_from_monday() as u8 + 1) % 7;
        user.preferences.preferred_windows = vec![PreferredWindow {
            day_of_week: other_day,
            start_hour: 9,
            end_hour: 17,
        }];
        let recs = recommend(&user, &centers(), now);
        assert!(recs
            .iter()
            .all(|r| r.kind != RecommendationKind::PreferredWindow));
    }

    #[test]
    fn test_passed_window_not_suggested() {
        let now = Utc.with_ymd_and_hms(2026, 8, 19, 20, 0, 0).unwrap();
        let mut user = full_profile_user(now);
        user.preferences.preferred_windows = vec![PreferredWindow {
            day_of_week: now.weekday().num_days_from_monday() as u8,
            start_hour: 9,
            end_hour: 11, // already over at 20:00
        }];
        let recs = recommend(&user, &centers(), now);
        assert!(recs
            .iter()
            .all(|r| r.kind != RecommendationKind::PreferredWindow));
    }

    #[test]
    fn test_historical_best_picks_minimum() {
        let now = Utc::now();
        let recs = recommend(&full_profile_user(now), &centers(), now);
        let best = recs
            .iter()
            .find(|r| r.kind == RecommendationKind::HistoricalBest)
            .unwrap();
        assert!(best.reason.contains("6 minutes at Downtown"));
    }

    #[test]
    fn test_no_centers_yields_no_shortest_entry() {
        let user = User::new("a@b.c", "pw", "A");
        let recs = recommend(&user, &[], Utc::now());
        assert!(recs.is_empty());
    }
}
