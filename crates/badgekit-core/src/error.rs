use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BadgekitError {
    // Input errors
    #[error("FILE_NOT_FOUND: {kind} file not found: {}", path.display())]
    FileNotFound { kind: String, path: PathBuf },

    // Template errors
    #[error("TEMPLATE_INVALID: {0}")]
    Template(#[from] crate::template::error::TemplateError),

    // Table errors
    #[error("TABLE_INVALID: {0}")]
    TableInvalid(String),

    #[error(
        "DATA_MISMATCH: required template tags missing from data: {}. Data must contain columns for all tags used in template",
        missing.join(", ")
    )]
    DataMismatch { missing: Vec<String> },

    // Output errors
    #[error("OUTPUT_EXISTS: output directory exists: {}. Use --force to overwrite", path.display())]
    OutputExists { path: PathBuf },

    #[error("OUTPUT_WRITE_ERROR: failed to write '{}': {reason}", path.display())]
    OutputWriteError { path: PathBuf, reason: String },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID: failed to parse badgekit.toml: {0}")]
    ConfigInvalid(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Converter errors
    #[error("CONVERTER_EXEC_FAILED: {0}")]
    ConverterExecFailed(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for BadgekitError {
    fn from(err: serde_json::Error) -> Self {
        BadgekitError::Generic(format!("JSON error: {}", err))
    }
}

impl BadgekitError {
    /// Read an input file, mapping a missing file to [`BadgekitError::FileNotFound`]
    pub(crate) fn read_input(kind: &str, path: &std::path::Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => BadgekitError::FileNotFound {
                kind: kind.to_string(),
                path: path.to_path_buf(),
            },
            _ => BadgekitError::IoError(e),
        })
    }
}

pub type Result<T> = std::result::Result<T, BadgekitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_mismatch_lists_missing_fields() {
        let err = BadgekitError::DataMismatch {
            missing: vec!["AFFILIATION".to_string(), "NAME".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("DATA_MISMATCH:"));
        assert!(msg.contains("AFFILIATION, NAME"));
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = BadgekitError::read_input("Template", std::path::Path::new("/no/such/file.svg"))
            .unwrap_err();
        assert!(matches!(err, BadgekitError::FileNotFound { .. }));
        assert!(err.to_string().contains("Template file not found"));
    }
}
