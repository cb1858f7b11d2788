pub mod project_dto;
pub mod project_list_response;
pub mod project_response;
pub mod projects;
pub mod save_project_request;
pub mod save_project_response;
