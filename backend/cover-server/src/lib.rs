pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod seed;
pub mod uploads;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, me},
        login_request::LoginRequest,
        login_response::LoginResponse,
        me_response::MeResponse,
        user_dto::UserDto,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::AuthenticatedUser,
    projects::{
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{delete_project, get_project, list_projects, save_project},
        save_project_request::SaveProjectRequest,
        save_project_response::SaveProjectResponse,
    },
};
pub use app_state::AppState;
pub use uploads::PreviewStore;

pub use crate::routes::build_router;
