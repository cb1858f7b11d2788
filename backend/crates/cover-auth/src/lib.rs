pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_service;
pub mod password;

pub use bearer::extract_bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_service::{IssuedToken, JwtService};
pub use password::{DEFAULT_HASH_COST, hash_password, verify_password};
