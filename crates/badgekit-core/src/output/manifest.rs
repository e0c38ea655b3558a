//! manifest.json - record of one generation run

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";

/// manifest.json schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub schema_version: String,
    pub template: PathBuf,
    pub data: PathBuf,
    pub prefix: String,
    pub capacity: usize,
    pub records: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub pages: Vec<ManifestPage>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestPage {
    pub number: usize,
    pub file: PathBuf,
    pub filled: usize,
    #[serde(default)]
    pub converted: Option<PathBuf>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Manifest {
    /// Write manifest.json into `dir` atomically
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(MANIFEST_FILE);
        let content = serde_json::to_string_pretty(self)?;
        super::write_atomic(&path, content.as_bytes())?;
        Ok(path)
    }

    /// Pages whose conversion failed
    pub fn failed_conversions(&self) -> impl Iterator<Item = &ManifestPage> {
        self.pages.iter().filter(|p| p.error.is_some())
    }
}
