use crate::UserRole;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account that can log in and own projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Stored lowercase; lookups are case-insensitive
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: &str, name: String, role: UserRole, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: Self::normalize_email(email),
            name,
            role,
            password_hash,
            created_at: Utc::now(),
        }
    }

    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
