use crate::info::ConverterInfo;
use badgekit_core::{BadgekitError, Result};
use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

/// Options for converting one page
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConvertOptions {
    /// Convert `input` to a sibling file with extension `format`
    pub fn sibling(input: impl Into<PathBuf>, format: &str) -> Self {
        let input = input.into();
        let output = input.with_extension(format);
        Self { input, output }
    }
}

/// Result of one converter invocation
#[derive(Debug, Clone)]
pub struct ExecResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run the converter on one page
///
/// Executes: `<converter> <input> --export-filename <output>`
///
/// # Errors
///
/// Returns [`BadgekitError::ConverterExecFailed`] if the process cannot be
/// started. A converter that runs and exits non-zero is not an error here;
/// check [`ExecResult::success`].
pub fn convert_page(converter: &ConverterInfo, options: &ConvertOptions) -> Result<ExecResult> {
    let start = Instant::now();

    let output = Command::new(&converter.path)
        .arg(&options.input)
        .arg("--export-filename")
        .arg(&options.output)
        .output()
        .map_err(|e| {
            BadgekitError::ConverterExecFailed(format!(
                "Failed to execute {}: {}",
                converter.path.display(),
                e
            ))
        })?;

    let duration_ms = start.elapsed().as_millis() as u64;
    let exit_code = output.status.code().unwrap_or(-1);

    log::debug!(
        "{} -> {} exited with {} in {}ms",
        options.input.display(),
        options.output.display(),
        exit_code,
        duration_ms
    );

    Ok(ExecResult {
        exit_code,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration_ms,
    })
}
