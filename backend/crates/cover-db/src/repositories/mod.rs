pub mod cover_project_repository;
pub mod user_repository;
