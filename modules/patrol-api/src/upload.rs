use std::path::{Path, PathBuf};

use uuid::Uuid;

/// A request-scoped upload written to the system temp directory. The file
/// exists for the duration of the provider call and is removed on drop,
/// on both the success and the failure path.
pub struct TempUpload {
    path: PathBuf,
}

impl TempUpload {
    pub fn write(file_name: &str, bytes: &[u8]) -> std::io::Result<Self> {
        let name = sanitize_file_name(file_name);
        let path = std::env::temp_dir().join(format!("patrol-upload-{}-{name}", Uuid::new_v4()));
        std::fs::write(&path, bytes)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove temp upload");
        }
    }
}

/// Keep only the final path component and drop characters that could
/// escape the temp directory.
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_then_removes_on_drop() {
        let upload = TempUpload::write("cover.png", b"fake image bytes").unwrap();
        let path = upload.path().to_path_buf();
        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), b"fake image bytes");

        drop(upload);
        assert!(!path.exists());
    }

    #[test]
    fn sanitizes_path_traversal_attempts() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("art work!.png"), "artwork.png");
        assert_eq!(sanitize_file_name("///"), "upload");
    }
}
