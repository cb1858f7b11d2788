use serde::Deserialize;

/// Body of POST /api/projects/save
#[derive(Debug, Deserialize)]
pub struct SaveProjectRequest {
    /// Present to update an existing project, absent to create one
    #[serde(default)]
    pub project_id: Option<String>,

    pub project_name: String,

    /// Client document, stored verbatim
    pub canvas_json: String,

    /// Data URL or bare base64 image
    #[serde(default)]
    pub preview_image: Option<String>,
}
