use cover_core::CoverProject;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Project DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: String,
    pub user_id: String,
    pub project_name: String,
    pub canvas_json: String,
    pub preview_url: Option<String>,
    /// RFC 3339, millisecond precision
    pub created_at: String,
    pub updated_at: String,
}

fn rfc3339_millis(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<CoverProject> for ProjectDto {
    fn from(p: CoverProject) -> Self {
        Self {
            id: p.id.to_string(),
            user_id: p.user_id.to_string(),
            project_name: p.project_name,
            canvas_json: p.canvas_json,
            preview_url: p.preview_url,
            created_at: rfc3339_millis(p.created_at),
            updated_at: rfc3339_millis(p.updated_at),
        }
    }
}
