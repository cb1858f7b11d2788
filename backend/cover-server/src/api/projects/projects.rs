//! Cover project REST API handlers
//!
//! Every handler is scoped to the authenticated user. Projects owned by
//! someone else behave exactly like missing ones.

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, DeleteResponse, ProjectDto,
    ProjectListResponse, ProjectResponse, SaveProjectRequest, SaveProjectResponse,
};

use cover_core::{
    CoverProject, ImageFormat, PreviewImage, validate_canvas_json, validate_project_name,
};
use cover_db::CoverProjectRepository;

use axum::{
    Json,
    extract::{Path, State},
};

pub const PROJECT_CREATED_MESSAGE: &str = "Проект сохранён";
pub const PROJECT_UPDATED_MESSAGE: &str = "Проект обновлён";
pub const PROJECT_DELETED_MESSAGE: &str = "Проект удалён";

#[track_caller]
fn project_not_found(id: &str) -> ApiError {
    ApiError::not_found(format!("Project {} not found", id))
}

/// Remove a preview written for a save whose database write did not commit
async fn discard_preview(state: &AppState, id: &str, format: Option<ImageFormat>) {
    let Some(format) = format else {
        return;
    };
    if let Err(e) = state.previews.remove_format(id, format).await {
        log::warn!("Uncommitted preview for project {} remains: {}", id, e);
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/projects
///
/// The caller's projects, most recently updated first
pub async fn list_projects(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> ApiResult<Json<ProjectListResponse>> {
    let repo = CoverProjectRepository::new(state.pool.clone());
    let projects = repo.find_by_user(user.id).await?;

    Ok(Json(ProjectListResponse {
        projects: projects.into_iter().map(ProjectDto::from).collect(),
    }))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let repo = CoverProjectRepository::new(state.pool.clone());
    let project = repo
        .find_owned(&id, user.id)
        .await?
        .ok_or_else(|| project_not_found(&id))?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// POST /api/projects/save
///
/// Creates a project when `project_id` is absent, otherwise replaces the
/// named project's content. Input is validated before any lookup.
pub async fn save_project(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(req): Json<SaveProjectRequest>,
) -> ApiResult<Json<SaveProjectResponse>> {
    validate_project_name(&req.project_name, state.validation.max_project_name_length)?;
    validate_canvas_json(&req.canvas_json, state.validation.max_canvas_json_bytes)?;

    let preview = req
        .preview_image
        .as_deref()
        .filter(|data| !data.trim().is_empty())
        .map(|data| PreviewImage::parse(data, state.max_preview_bytes))
        .transpose()?;

    let repo = CoverProjectRepository::new(state.pool.clone());

    match req.project_id.filter(|id| !id.is_empty()) {
        None => {
            let mut project = CoverProject::new(user.id, req.project_name, req.canvas_json);
            let project_id = project.id.to_string();

            if let Some(ref image) = preview {
                project.preview_url = Some(state.previews.save(&project_id, image).await?);
            }

            if let Err(e) = repo.create(&project).await {
                discard_preview(&state, &project_id, preview.as_ref().map(|image| image.format))
                    .await;
                return Err(e.into());
            }

            log::info!("User {} created project {}", user.id, project.id);

            Ok(Json(SaveProjectResponse {
                success: true,
                project: project.into(),
                message: PROJECT_CREATED_MESSAGE.to_string(),
            }))
        }
        Some(id) => {
            let mut project = repo
                .find_owned(&id, user.id)
                .await?
                .ok_or_else(|| project_not_found(&id))?;

            let preview_url = match preview {
                Some(ref image) => Some(state.previews.save(&id, image).await?),
                None => None,
            };
            // Only a file the stored row does not reference may be discarded
            let written = preview
                .as_ref()
                .map(|image| image.format)
                .filter(|_| preview_url != project.preview_url);

            project.apply_update(req.project_name, req.canvas_json, preview_url);

            let updated = match repo.update(&project).await {
                Ok(updated) => updated,
                Err(e) => {
                    discard_preview(&state, &id, written).await;
                    return Err(e.into());
                }
            };
            if !updated {
                // Deleted between the lookup and the write
                discard_preview(&state, &id, written).await;
                return Err(project_not_found(&id));
            }

            if let Some(ref image) = preview {
                if let Err(e) = state.previews.prune_other_formats(&id, image.format).await {
                    log::warn!("Project {} updated but stale previews remain: {}", id, e);
                }
            }

            log::info!("User {} updated project {}", user.id, project.id);

            Ok(Json(SaveProjectResponse {
                success: true,
                project: project.into(),
                message: PROJECT_UPDATED_MESSAGE.to_string(),
            }))
        }
    }
}

/// DELETE /api/projects/{id}
///
/// Removes the row and any stored preview
pub async fn delete_project(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let repo = CoverProjectRepository::new(state.pool.clone());

    if !repo.delete(&id, user.id).await? {
        return Err(project_not_found(&id));
    }

    if let Err(e) = state.previews.remove(&id).await {
        log::warn!("Project {} deleted but its preview remains: {}", id, e);
    }

    log::info!("User {} deleted project {}", user.id, id);

    Ok(Json(DeleteResponse {
        success: true,
        message: PROJECT_DELETED_MESSAGE.to_string(),
    }))
}
