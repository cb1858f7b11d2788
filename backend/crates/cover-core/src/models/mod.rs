pub mod cover_project;
pub mod user;
pub mod user_role;
