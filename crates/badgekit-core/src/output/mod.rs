//! Output module - page files, output directory policy and run manifest

mod manifest;

pub use manifest::{Manifest, ManifestPage, MANIFEST_FILE};

use crate::compose::Page;
use crate::config::OutputConfig;
use crate::error::{BadgekitError, Result};
use std::path::{Path, PathBuf};

/// Check the output directory policy and create the directory
///
/// An existing directory is reused only with `force`; files already in
/// it are left alone unless a page overwrites them.
pub fn prepare_output_dir(dir: &Path, force: bool) -> Result<()> {
    ensure_output_available(dir, force)?;
    std::fs::create_dir_all(dir).map_err(|e| BadgekitError::OutputWriteError {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Fail if `dir` exists and `force` is not set, without touching disk
pub fn ensure_output_available(dir: &Path, force: bool) -> Result<()> {
    if dir.exists() && !force {
        return Err(BadgekitError::OutputExists {
            path: dir.to_path_buf(),
        });
    }
    Ok(())
}

/// Writes numbered page files into one directory
#[derive(Debug, Clone)]
pub struct PageWriter {
    dir: PathBuf,
    stem: String,
    extension: String,
}

impl PageWriter {
    pub fn new(dir: impl Into<PathBuf>, config: &OutputConfig) -> Self {
        Self {
            dir: dir.into(),
            stem: config.page_stem.clone(),
            extension: config.extension.clone(),
        }
    }

    /// `{dir}/{stem}{number}.{extension}`
    pub fn page_path(&self, number: usize) -> PathBuf {
        self.dir
            .join(format!("{}{}.{}", self.stem, number, self.extension))
    }

    /// Write one page atomically, returning its path
    pub fn write(&self, page: &Page) -> Result<PathBuf> {
        let path = self.page_path(page.number);
        write_atomic(&path, page.content.as_bytes())?;
        log::debug!("wrote {}", path.display());
        Ok(path)
    }
}

/// Write a file atomically using NamedTempFile + persist
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let write_error = |reason: String| BadgekitError::OutputWriteError {
        path: path.to_path_buf(),
        reason,
    };

    let parent = path
        .parent()
        .ok_or_else(|| write_error("path has no parent directory".to_string()))?;

    let mut temp_file = NamedTempFile::new_in(parent)
        .map_err(|e| write_error(format!("Failed to create temp file: {}", e)))?;

    temp_file
        .write_all(content)
        .map_err(|e| write_error(format!("Failed to write temp file: {}", e)))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| write_error(format!("Failed to sync temp file: {}", e)))?;

    temp_file
        .persist(path)
        .map_err(|e| write_error(format!("Failed to persist temp file: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn page(number: usize, content: &str) -> Page {
        Page {
            number,
            filled: 1,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_page_path_default_naming() {
        let writer = PageWriter::new("/out", &OutputConfig::default());
        assert_eq!(writer.page_path(3), PathBuf::from("/out/page_3.svg"));
    }

    #[test]
    fn test_page_path_custom_naming() {
        let config = OutputConfig {
            page_stem: "sheet-".to_string(),
            extension: "xml".to_string(),
            manifest: false,
        };
        let writer = PageWriter::new("/out", &config);
        assert_eq!(writer.page_path(12), PathBuf::from("/out/sheet-12.xml"));
    }

    #[test]
    fn test_write_page() {
        let temp = TempDir::new().unwrap();
        let writer = PageWriter::new(temp.path(), &OutputConfig::default());

        let path = writer.write(&page(1, "<svg/>")).unwrap();

        assert_eq!(path, temp.path().join("page_1.svg"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<svg/>");
    }

    #[test]
    fn test_write_page_overwrites() {
        let temp = TempDir::new().unwrap();
        let writer = PageWriter::new(temp.path(), &OutputConfig::default());

        writer.write(&page(1, "old")).unwrap();
        writer.write(&page(1, "new")).unwrap();

        let content = std::fs::read_to_string(writer.page_path(1)).unwrap();
        assert_eq!(content, "new");
        // No temp files left behind
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let writer = PageWriter::new(temp.path().join("missing"), &OutputConfig::default());
        let err = writer.write(&page(1, "x")).unwrap_err();
        assert!(matches!(err, BadgekitError::OutputWriteError { .. }));
    }

    #[test]
    fn test_prepare_output_dir_creates_nested() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a/b/c");
        prepare_output_dir(&dir, false).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_prepare_output_dir_existing_requires_force() {
        let temp = TempDir::new().unwrap();
        let err = prepare_output_dir(temp.path(), false).unwrap_err();
        assert!(matches!(err, BadgekitError::OutputExists { .. }));
        assert!(err.to_string().contains("--force"));

        assert!(prepare_output_dir(temp.path(), true).is_ok());
    }

    #[test]
    fn test_prepare_output_dir_force_keeps_files() {
        let temp = TempDir::new().unwrap();
        let keep = temp.path().join("notes.txt");
        std::fs::write(&keep, "keep me").unwrap();

        prepare_output_dir(temp.path(), true).unwrap();
        assert!(keep.exists());
    }
}
