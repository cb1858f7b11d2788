use cover_core::CoverProject;

use uuid::Uuid;

pub const TEST_CANVAS_JSON: &str = r#"{"elements":[{"type":"text","content":"Test"}]}"#;

/// Creates a test CoverProject with sensible defaults
pub fn create_test_project(user_id: Uuid) -> CoverProject {
    CoverProject::new(
        user_id,
        "TEST_Project".to_string(),
        TEST_CANVAS_JSON.to_string(),
    )
}

/// Creates a test CoverProject with a preview already attached
pub fn create_test_project_with_preview(user_id: Uuid) -> CoverProject {
    let mut project = create_test_project(user_id);
    project.preview_url = Some(format!("/api/uploads/covers/{}.png", project.id));
    project
}
