//! Persistence for saved cover projects.
//!
//! Every read and write is scoped to an owner. Ids are
//! compared as opaque text, so a malformed id is simply not found.

use crate::{DbError, Result as DbErrorResult};

use cover_core::CoverProject;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, project_name, canvas_json, preview_url, created_at, updated_at
    FROM cover_projects
"#;

#[derive(Debug, FromRow)]
struct CoverProjectRow {
    id: String,
    user_id: String,
    project_name: String,
    canvas_json: String,
    preview_url: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<CoverProjectRow> for CoverProject {
    type Error = DbError;

    fn try_from(r: CoverProjectRow) -> DbErrorResult<Self> {
        Ok(CoverProject {
            id: parse_uuid(&r.id, "cover_projects.id")?,
            user_id: parse_uuid(&r.user_id, "cover_projects.user_id")?,
            project_name: r.project_name,
            canvas_json: r.canvas_json,
            preview_url: r.preview_url,
            created_at: parse_millis(r.created_at, "cover_projects.created_at")?,
            updated_at: parse_millis(r.updated_at, "cover_projects.updated_at")?,
        })
    }
}

fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn parse_millis(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub struct CoverProjectRepository {
    pool: SqlitePool,
}

impl CoverProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &CoverProject) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO cover_projects (
                    id, user_id, project_name, canvas_json, preview_url, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(project.user_id.to_string())
        .bind(&project.project_name)
        .bind(&project.canvas_json)
        .bind(&project.preview_url)
        .bind(project.created_at.timestamp_millis())
        .bind(project.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Find a project only if `user_id` owns it
    pub async fn find_owned(
        &self,
        id: &str,
        user_id: Uuid,
    ) -> DbErrorResult<Option<CoverProject>> {
        let row = sqlx::query_as::<_, CoverProjectRow>(&format!(
            "{SELECT_COLUMNS} WHERE id = ? AND user_id = ?"
        ))
        .bind(id)
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CoverProject::try_from).transpose()
    }

    /// All projects owned by `user_id`, most recently updated first
    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Vec<CoverProject>> {
        let rows = sqlx::query_as::<_, CoverProjectRow>(&format!(
            "{SELECT_COLUMNS} WHERE user_id = ? ORDER BY updated_at DESC, id"
        ))
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(CoverProject::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Write the mutable fields back. Returns false when no row owned by
    /// `project.user_id` matched.
    pub async fn update(&self, project: &CoverProject) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE cover_projects
                SET project_name = ?, canvas_json = ?, preview_url = ?, updated_at = ?
                WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(&project.project_name)
        .bind(&project.canvas_json)
        .bind(&project.preview_url)
        .bind(project.updated_at.timestamp_millis())
        .bind(project.id.to_string())
        .bind(project.user_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Returns false when no row owned by `user_id` matched.
    pub async fn delete(&self, id: &str, user_id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM cover_projects WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
