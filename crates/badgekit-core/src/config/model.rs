use crate::error::{BadgekitError, Result};
use crate::template::{ScanScope, DEFAULT_PREFIX};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "badgekit.toml";

/// badgekit.toml schema
///
/// Every section is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub scan: ScanScope,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            scan: ScanScope::Document,
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Page files are named `{page_stem}{n}.{extension}`
    #[serde(default = "default_page_stem")]
    pub page_stem: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Write manifest.json after a run
    #[serde(default = "default_true")]
    pub manifest: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            page_stem: default_page_stem(),
            extension: default_extension(),
            manifest: true,
        }
    }
}

fn default_page_stem() -> String {
    "page_".to_string()
}

fn default_extension() -> String {
    "svg".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Converter binaries probed in order; bare names are looked up in PATH
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,
    /// Extension of converted files
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            candidates: default_candidates(),
            format: default_format(),
        }
    }
}

fn default_candidates() -> Vec<String> {
    vec![
        "inkscape".to_string(),
        "/Applications/Inkscape.app/Contents/MacOS/inkscape".to_string(),
    ]
}

fn default_format() -> String {
    "pdf".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl Config {
    /// badgekit.toml を読み込む
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => BadgekitError::FileNotFound {
                kind: "Config".to_string(),
                path: path.to_path_buf(),
            },
            _ => BadgekitError::ConfigParseError(e.to_string()),
        })?;

        let config: Self =
            toml::from_str(&content).map_err(|e| BadgekitError::ConfigInvalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `badgekit.toml` from `dir` if present, defaults otherwise
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.is_file() {
            log::debug!("loading config from {}", path.display());
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject values no run could use
    pub fn validate(&self) -> Result<()> {
        if self.template.prefix.is_empty() {
            return Err(invalid("template.prefix", "must not be empty"));
        }
        if self.output.extension.is_empty() {
            return Err(invalid("output.extension", "must not be empty"));
        }
        if self.output.page_stem.contains(['/', '\\']) {
            return Err(invalid("output.page_stem", "must not contain path separators"));
        }
        if self.convert.format.is_empty() {
            return Err(invalid("convert.format", "must not be empty"));
        }
        if self.convert.format == self.output.extension {
            return Err(invalid(
                "convert.format",
                "must differ from output.extension",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> BadgekitError {
    BadgekitError::ConfigInvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
