//! Atomic output writes.
//!
//! Rendered prompts are written to a temporary file in the target's
//! directory, synced, then renamed over the target, so a reader never sees
//! a partially written prompt. Source and destination share a directory, so
//! the rename stays on one filesystem.

use crate::error::{InputsError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, creating parent directories.
///
/// # Example
///
/// ```no_run
/// use review_inputs::fs::atomic_write_file;
///
/// atomic_write_file("out/prompt.md", "Review $filename\n")?;
/// # Ok::<(), review_inputs::error::InputsError>(())
/// ```
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            InputsError::IoError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        InputsError::IoError(format!("failed to replace '{}': {}", path.display(), e))
    })
}

/// Temp file path next to the target: `.{filename}.tmp`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            InputsError::UserError(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        InputsError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            InputsError::IoError(format!("failed to write temporary file: {}", e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("prompt.md");

        atomic_write_file(&file_path, "hello world").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "hello world");
    }

    #[test]
    fn test_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("prompt.md");
        fs::write(&file_path, "original content").unwrap();

        atomic_write_file(&file_path, "new content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new content");
    }

    #[test]
    fn test_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested").join("dirs").join("prompt.md");

        atomic_write_file(&file_path, "nested content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "nested content");
    }

    #[test]
    fn test_empty_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.md");

        atomic_write_file(&file_path, "").unwrap();

        assert!(fs::read(&file_path).unwrap().is_empty());
    }

    #[test]
    fn test_temp_file_removed() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("prompt.md");

        atomic_write_file(&file_path, "content").unwrap();

        assert!(!temp_dir.path().join(".prompt.md.tmp").exists());
    }

    #[test]
    fn test_temp_path_for() {
        let temp = temp_path_for(Path::new("/some/path/prompt.md")).unwrap();
        assert_eq!(temp, Path::new("/some/path/.prompt.md.tmp"));
    }

    #[test]
    fn test_write_into_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("occupied");
        fs::create_dir(&dir).unwrap();

        let err = atomic_write_file(&dir, "content").unwrap_err();
        assert!(matches!(err, InputsError::IoError(_)));
    }
}
