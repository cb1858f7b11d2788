use crate::PreviewStore;

use cover_core::{ImageFormat, PreviewImage};

const RED_PIXEL_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";

#[tokio::test]
async fn test_save_writes_file_and_returns_public_url() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreviewStore::new(dir.path());
    let image = PreviewImage::parse(RED_PIXEL_PNG, 1024).unwrap();

    let url = store.save("abc", &image).await.unwrap();

    assert_eq!(url, "/api/uploads/covers/abc.png");
    let written = std::fs::read(dir.path().join("covers").join("abc.png")).unwrap();
    assert_eq!(written, image.bytes);
}

#[tokio::test]
async fn test_save_leaves_no_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreviewStore::new(dir.path());
    let image = PreviewImage::parse(RED_PIXEL_PNG, 1024).unwrap();

    store.save("abc", &image).await.unwrap();

    let names: Vec<String> = std::fs::read_dir(store.covers_dir())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["abc.png".to_string()]);
}

#[tokio::test]
async fn test_save_in_new_format_keeps_old_file_until_pruned() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreviewStore::new(dir.path());
    let png = PreviewImage::parse(RED_PIXEL_PNG, 1024).unwrap();
    store.save("abc", &png).await.unwrap();

    let gif = PreviewImage {
        format: ImageFormat::Gif,
        bytes: b"GIF89a-not-really".to_vec(),
    };
    let url = store.save("abc", &gif).await.unwrap();

    assert_eq!(url, "/api/uploads/covers/abc.gif");
    assert!(store.path_for("abc", ImageFormat::Png).exists());
    assert!(store.path_for("abc", ImageFormat::Gif).exists());

    assert_eq!(store.prune_other_formats("abc", ImageFormat::Gif).await.unwrap(), 1);
    assert!(!store.path_for("abc", ImageFormat::Png).exists());
    assert!(store.path_for("abc", ImageFormat::Gif).exists());
}

#[tokio::test]
async fn test_remove_format_leaves_other_formats() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreviewStore::new(dir.path());
    let png = PreviewImage::parse(RED_PIXEL_PNG, 1024).unwrap();
    let gif = PreviewImage {
        format: ImageFormat::Gif,
        bytes: b"GIF89a-not-really".to_vec(),
    };
    store.save("abc", &png).await.unwrap();
    store.save("abc", &gif).await.unwrap();

    assert!(store.remove_format("abc", ImageFormat::Gif).await.unwrap());
    assert!(!store.path_for("abc", ImageFormat::Gif).exists());
    assert!(store.path_for("abc", ImageFormat::Png).exists());
}

#[tokio::test]
async fn test_remove_deletes_stored_preview() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreviewStore::new(dir.path());
    let image = PreviewImage::parse(RED_PIXEL_PNG, 1024).unwrap();
    store.save("abc", &image).await.unwrap();

    assert!(store.remove("abc").await.unwrap());
    assert!(!store.path_for("abc", ImageFormat::Png).exists());
}

#[tokio::test]
async fn test_remove_without_preview_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreviewStore::new(dir.path());

    assert!(!store.remove("missing").await.unwrap());
}
