pub mod error;
pub mod models;
pub mod preview_image;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::cover_project::CoverProject;
pub use models::user::User;
pub use models::user_role::UserRole;
pub use preview_image::{ImageFormat, PreviewImage};
pub use validation::{validate_canvas_json, validate_project_name};

#[cfg(test)]
mod tests;
