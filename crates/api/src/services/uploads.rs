//! Event image storage.
//!
//! Uploaded images land in a flat directory served under `/uploads`; the
//! database stores only the generated filename, never a path.

use rand::Rng;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tokio::io::AsyncWriteExt;

/// Extensions accepted for event images.
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Store for event images on the local filesystem.
#[derive(Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write an uploaded image to disk and return the stored filename.
    ///
    /// The filename is derived from the client-supplied name but made
    /// unique with a millisecond timestamp and a random suffix, so two
    /// uploads of `banner.png` never collide.
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, UploadError> {
        let ext = extension_of(original_name)
            .ok_or_else(|| UploadError::UnsupportedType(original_name.to_string()))?;
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(UploadError::UnsupportedType(ext));
        }

        let filename = unique_filename(original_name, &ext);

        tokio::fs::create_dir_all(&self.dir).await?;
        let mut file = tokio::fs::File::create(self.dir.join(&filename)).await?;
        file.write_all(bytes).await?;
        file.flush().await?;

        Ok(filename)
    }

    /// Directory the store writes to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// `<sanitized stem>-<unix millis>-<random>.<ext>`
fn unique_filename(original_name: &str, ext: &str) -> String {
    let stem = Path::new(original_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let stem: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let suffix: u32 = rand::thread_rng().gen();

    format!("{}-{}-{}.{}", stem, millis, suffix, ext)
}
