use crate::CoverProject;

use chrono::{Duration, Utc};
use uuid::Uuid;

#[test]
fn test_new_project_has_matching_timestamps_and_no_preview() {
    let owner = Uuid::new_v4();
    let project = CoverProject::new(owner, "Album".to_string(), "{}".to_string());

    assert_eq!(project.user_id, owner);
    assert_eq!(project.created_at, project.updated_at);
    assert!(project.preview_url.is_none());
}

#[test]
fn test_new_projects_get_distinct_ids() {
    let owner = Uuid::new_v4();
    let a = CoverProject::new(owner, "A".to_string(), "{}".to_string());
    let b = CoverProject::new(owner, "B".to_string(), "{}".to_string());

    assert_ne!(a.id, b.id);
}

#[test]
fn test_apply_update_replaces_fields_and_advances_updated_at() {
    let mut project = CoverProject::new(Uuid::new_v4(), "Old".to_string(), "{}".to_string());
    let id = project.id;
    let before = project.updated_at;

    project.apply_update(
        "New".to_string(),
        r#"{"currentFilter":"sepia"}"#.to_string(),
        None,
    );

    assert_eq!(project.id, id);
    assert_eq!(project.project_name, "New");
    assert_eq!(project.canvas_json, r#"{"currentFilter":"sepia"}"#);
    assert!(project.updated_at > before);
}

#[test]
fn test_apply_update_without_preview_keeps_existing_preview() {
    let mut project = CoverProject::new(Uuid::new_v4(), "P".to_string(), "{}".to_string());
    project.preview_url = Some("/api/uploads/covers/x.png".to_string());

    project.apply_update("P".to_string(), "{}".to_string(), None);

    assert_eq!(
        project.preview_url.as_deref(),
        Some("/api/uploads/covers/x.png")
    );
}

#[test]
fn test_apply_update_with_preview_replaces_it() {
    let mut project = CoverProject::new(Uuid::new_v4(), "P".to_string(), "{}".to_string());
    project.preview_url = Some("/api/uploads/covers/x.png".to_string());

    project.apply_update(
        "P".to_string(),
        "{}".to_string(),
        Some("/api/uploads/covers/x.jpg".to_string()),
    );

    assert_eq!(
        project.preview_url.as_deref(),
        Some("/api/uploads/covers/x.jpg")
    );
}

#[test]
fn test_next_updated_at_uses_now_when_later() {
    let previous = Utc::now() - Duration::seconds(10);
    let now = Utc::now();

    assert_eq!(CoverProject::next_updated_at(previous, now), now);
}

#[test]
fn test_next_updated_at_bumps_when_clock_has_not_moved() {
    let previous = Utc::now();

    let next = CoverProject::next_updated_at(previous, previous);

    assert_eq!(next, previous + Duration::milliseconds(1));
}

#[test]
fn test_next_updated_at_bumps_when_clock_went_backwards() {
    let previous = Utc::now();
    let now = previous - Duration::seconds(5);

    let next = CoverProject::next_updated_at(previous, now);

    assert!(next > previous);
}
