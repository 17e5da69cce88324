//! User Entity
//!
//! Mock account record. Credentials are stored in plaintext because the
//! backing store is an in-process map standing in for a database; this is
//! demo data, not an identity system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Subscription plan tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanTier {
    Free,
    Plus,
    Pro,
}

impl Default for PlanTier {
    fn default() -> Self {
        Self::Free
    }
}

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::User
    }
}

/// A weekly time window the user prefers to visit in.
/// Days are numbered 0 = Monday .. 6 = Sunday; hours are 24h clock.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferredWindow {
    pub day_of_week: u8,
    pub start_hour: u8,
    pub end_hour: u8,
}

/// Stored user preferences consumed by the recommendation heuristics
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_center_id: Option<String>,
    #[serde(default)]
    pub preferred_windows: Vec<PreferredWindow>,
}

/// One historical visit
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    pub center_id: String,
    pub center_name: String,
    pub date: String,
    pub wait_minutes: u32,
}

/// User account record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    /// Plaintext in the mock store
    pub password: String,
    pub name: String,
    pub plan: PlanTier,
    pub verified: bool,
    pub role: UserRole,
    #[serde(default)]
    pub preferences: UserPreferences,
    #[serde(default)]
    pub visit_history: Vec<VisitRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new unverified free-tier user
    pub fn new(email: impl Into<String>, password: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.into().to_lowercase(),
            password: password.into(),
            name: name.into(),
            plan: PlanTier::Free,
            verified: false,
            role: UserRole::User,
            preferences: UserPreferences::default(),
            visit_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_plan(mut self, plan: PlanTier) -> Self {
        self.plan = plan;
        self
    }

    pub fn with_preferences(mut self, preferences: UserPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_visit_history(mut self, history: Vec<VisitRecord>) -> Self {
        self.visit_history = history;
        self
    }

    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    /// Plaintext comparison against the mock store
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
