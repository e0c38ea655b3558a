use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConverterSource {
    /// Named by the `BADGEKIT_CONVERTER` environment variable
    Environment,
    /// Bare candidate name found in PATH
    System,
    /// Candidate given as a fixed install path
    InstallPath,
}

impl fmt::Display for ConverterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConverterSource::Environment => write!(f, "environment"),
            ConverterSource::System => write!(f, "system PATH"),
            ConverterSource::InstallPath => write!(f, "install path"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConverterInfo {
    pub path: PathBuf,
    pub source: ConverterSource,
    /// First line printed by `--version`, if any
    pub version: Option<String>,
}
