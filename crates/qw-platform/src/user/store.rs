//! User Store
//!
//! In-process map from lowercase email to user record, substituting for a
//! database. Email is the only uniqueness constraint.

use dashmap::DashMap;

use super::entity::{PlanTier, User, UserPreferences};
use crate::shared::error::{PlatformError, Result};

#[derive(Default)]
pub struct UserStore {
    /// Keyed by lowercase email
    users: DashMap<String, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Insert a new user; fails on duplicate email
    pub fn insert(&self, user: User) -> Result<User> {
        let key = user.email.clone();
        if self.users.contains_key(&key) {
            return Err(PlatformError::duplicate("User", "email", key));
        }
        self.users.insert(key, user.clone());
        Ok(user)
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.get(&email.to_lowercase()).map(|u| u.clone())
    }

    pub fn find_by_id(&self, id: &str) -> Option<User> {
        self.users
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| entry.value().clone())
    }

    /// Validate email + password; the login path
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let user = self
            .find_by_email(email)
            .ok_or(PlatformError::InvalidCredentials)?;
        if !user.password_matches(password) {
            return Err(PlatformError::InvalidCredentials);
        }
        Ok(user)
    }

    /// Update profile fields; returns the updated record
    pub fn update_profile(
        &self,
        id: &str,
        name: Option<String>,
        plan: Option<PlanTier>,
        preferences: Option<UserPreferences>,
    ) -> Result<User> {
        for mut entry in self.users.iter_mut() {
            let user = entry.value_mut();
            if user.id == id {
                if let Some(name) = name {
                    user.name = name;
                }
                if let Some(plan) = plan {
                    user.plan = plan;
                }
                if let Some(preferences) = preferences {
                    user.preferences = preferences;
                }
                user.updated_at = chrono::Utc::now();
                return Ok(user.clone());
            }
        }
        Err(PlatformError::not_found("User", id))
    }

    /// Change password after verifying the current one
    pub fn update_password(&self, id: &str, current: &str, new_password: &str) -> Result<()> {
        for mut entry in self.users.iter_mut() {
            let user = entry.value_mut();
            if user.id == id {
                if !user.password_matches(current) {
                    return Err(PlatformError::InvalidCredentials);
                }
                user.password = new_password.to_string();
                user.updated_at = chrono::Utc::now();
                return Ok(());
            }
        }
        Err(PlatformError::not_found("User", id))
    }

    /// All users, for the dev debug listing
    pub fn all(&self) -> Vec<User> {
        self.users.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_email_rejected() {
        let store = UserStore::new();
        store.insert(User::new("a@b.c", "pw", "A")).unwrap();
        let err = store.insert(User::new("A@B.C", "pw2", "B")).unwrap_err();
        assert!(matches!(err, PlatformError::Duplicate { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_authenticate() {
        let store = UserStore::new();
        store
            .insert(User::new("demo@example.com", "password123", "Demo"))
            .unwrap();

        assert!(store.authenticate("demo@example.com", "password123").is_ok());
        assert!(matches!(
            store.authenticate("demo@example.com", "wrong"),
            Err(PlatformError::InvalidCredentials)
        ));
        assert!(matches!(
            store.authenticate("nobody@example.com", "password123"),
            Err(PlatformError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_update_profile() {
        let store = UserStore::new();
        let user = store.insert(User::new("a@b.c", "pw", "Old Name")).unwrap();

        let updated = store
            .update_profile(&user.id, Some("New Name".to_string()), Some(PlanTier::Pro), None)
            .unwrap();
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.plan, PlanTier::Pro);
        assert!(updated.updated_at >= user.updated_at);
    }

    #[test]
    fn test_update_password_requires_current() {
        let store = UserStore::new();
        let user = store.insert(User::new("a@b.c", "old", "A")).unwrap();

        assert!(matches!(
            store.update_password(&user.id, "bad", "new"),
            Err(PlatformError::InvalidCredentials)
        ));
        store.update_password(&user.id, "old", "new").unwrap();
        assert!(store.authenticate("a@b.c", "new").is_ok());
    }

    #[test]
    fn test_find_by_id() {
        let store = UserStore::new();
        let user = store.insert(User::new("a@b.c", "pw", "A")).unwrap();
        assert_eq!(store.find_by_id(&user.id).unwrap().email, "a@b.c");
        assert!(store.find_by_id("missing").is_none());
    }
}
