use serde::Serialize;

/// Response for DELETE endpoints
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
