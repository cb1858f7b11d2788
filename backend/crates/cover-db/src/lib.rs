pub mod database;
pub mod error;
pub mod repositories;

pub use database::{MIGRATOR, connect, connect_in_memory};
pub use error::{DbError, Result};
pub use repositories::cover_project_repository::CoverProjectRepository;
pub use repositories::user_repository::UserRepository;
