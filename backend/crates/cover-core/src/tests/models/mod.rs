mod cover_project;
mod user;
mod user_role;
