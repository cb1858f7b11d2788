//! Saved cover design owned by a single user.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved canvas design.
///
/// `canvas_json` is stored exactly as the client sent it; the store never
/// parses it. `preview_url` points into the public uploads mount once a
/// preview image has been supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverProject {
    pub id: Uuid,
    pub user_id: Uuid,
    pub project_name: String,
    pub canvas_json: String,
    pub preview_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CoverProject {
    /// Create a new project owned by `user_id`
    pub fn new(user_id: Uuid, project_name: String, canvas_json: String) -> Self {
        let now = Self::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            project_name,
            canvas_json,
            preview_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields and advance `updated_at`.
    ///
    /// A `None` preview keeps whatever preview the project already had.
    pub fn apply_update(
        &mut self,
        project_name: String,
        canvas_json: String,
        preview_url: Option<String>,
    ) {
        self.project_name = project_name;
        self.canvas_json = canvas_json;
        if preview_url.is_some() {
            self.preview_url = preview_url;
        }
        self.updated_at = Self::next_updated_at(self.updated_at, Self::now());
    }

    /// `updated_at` must strictly advance, even when two saves land in the
    /// same millisecond or the wall clock steps backwards.
    pub fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
        let floor = previous + Duration::milliseconds(1);
        if now >= floor { now } else { floor }
    }

    /// Timestamps are persisted at millisecond precision, so truncate here to
    /// keep in-memory and stored values identical.
    fn now() -> DateTime<Utc> {
        let now = Utc::now();
        DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
    }
}
