//! On-disk storage for project preview images.
//!
//! Files live at `<root>/covers/<project_id>.<ext>` and are served publicly
//! from `/api/uploads`.

use crate::error::{Result as ServerErrorResult, ServerError};

use cover_core::{ImageFormat, PreviewImage};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use tokio::fs;
use uuid::Uuid;

pub const COVERS_DIR: &str = "covers";
pub const PUBLIC_PREFIX: &str = "/api/uploads";

#[derive(Debug, Clone)]
pub struct PreviewStore {
    root: PathBuf,
}

impl PreviewStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn covers_dir(&self) -> PathBuf {
        self.root.join(COVERS_DIR)
    }

    pub fn path_for(&self, project_id: &str, format: ImageFormat) -> PathBuf {
        self.covers_dir()
            .join(format!("{}.{}", project_id, format.extension()))
    }

    pub async fn ensure_dirs(&self) -> ServerErrorResult<()> {
        let dir = self.covers_dir();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| ServerError::Io { path: dir, source: e })
    }

    /// Store `image` as the preview of `project_id` and return its public URL.
    ///
    /// The file is written under a temporary name and renamed into place.
    /// Previews stored in other formats are left untouched until
    /// [`PreviewStore::prune_other_formats`] is called.
    pub async fn save(&self, project_id: &str, image: &PreviewImage) -> ServerErrorResult<String> {
        self.ensure_dirs().await?;

        let file_name = image.file_name(project_id);
        let target = self.covers_dir().join(&file_name);
        let temp = self
            .covers_dir()
            .join(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

        if let Err(e) = fs::write(&temp, &image.bytes).await {
            return Err(ServerError::Io {
                path: temp,
                source: e,
            });
        }
        if let Err(e) = fs::rename(&temp, &target).await {
            let _ = fs::remove_file(&temp).await;
            return Err(ServerError::Io {
                path: target,
                source: e,
            });
        }

        debug!(
            "Stored preview {} ({} bytes)",
            target.display(),
            image.bytes.len()
        );

        Ok(format!("{}/{}/{}", PUBLIC_PREFIX, COVERS_DIR, file_name))
    }

    /// Remove the stored preview of `project_id` in `format` only.
    pub async fn remove_format(
        &self,
        project_id: &str,
        format: ImageFormat,
    ) -> ServerErrorResult<bool> {
        remove_if_exists(&self.path_for(project_id, format)).await
    }

    /// Remove previews of `project_id` stored in any format but `keep`.
    /// Returns how many files were deleted.
    pub async fn prune_other_formats(
        &self,
        project_id: &str,
        keep: ImageFormat,
    ) -> ServerErrorResult<usize> {
        let mut removed = 0;
        for format in ImageFormat::ALL {
            if format != keep && remove_if_exists(&self.path_for(project_id, format)).await? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Remove every stored preview of `project_id`. Returns whether a file
    /// was deleted.
    pub async fn remove(&self, project_id: &str) -> ServerErrorResult<bool> {
        let mut removed = false;
        for format in ImageFormat::ALL {
            removed |= remove_if_exists(&self.path_for(project_id, format)).await?;
        }
        Ok(removed)
    }
}

async fn remove_if_exists(path: &Path) -> ServerErrorResult<bool> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ServerError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
