use crate::ProjectDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SaveProjectResponse {
    pub success: bool,
    pub project: ProjectDto,
    pub message: String,
}
