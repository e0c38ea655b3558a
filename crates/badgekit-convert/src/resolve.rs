use crate::info::{ConverterInfo, ConverterSource};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Environment variable naming an explicit converter binary
pub const CONVERTER_ENV: &str = "BADGEKIT_CONVERTER";

/// Options for locating the converter
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Explicit binary, tried before any candidate
    pub override_path: Option<PathBuf>,
    /// Candidates in probe order; bare names are looked up in PATH
    pub candidates: Vec<String>,
}

impl ResolveOptions {
    /// Candidates plus the override from `BADGEKIT_CONVERTER`, if set
    pub fn from_env(candidates: Vec<String>) -> Self {
        Self {
            override_path: std::env::var_os(CONVERTER_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            candidates,
        }
    }
}

/// Result of converter resolution
#[derive(Debug, Clone)]
pub enum ResolveResult {
    Resolved(ConverterInfo),
    NotFound { searched_locations: Vec<String> },
}

impl ResolveResult {
    pub fn info(&self) -> Option<&ConverterInfo> {
        match self {
            ResolveResult::Resolved(info) => Some(info),
            ResolveResult::NotFound { .. } => None,
        }
    }
}

/// Run `<path> --version`
///
/// Returns `None` if the binary cannot be started. The exit status is not
/// checked; a binary that runs at all counts as present.
fn probe(path: &Path) -> Option<Option<String>> {
    let output = Command::new(path)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .ok()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = stdout
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string);

    Some(version)
}

/// Candidates containing a path separator are install paths, others are
/// command names
fn is_install_path(candidate: &str) -> bool {
    candidate.contains('/') || candidate.contains('\\')
}

fn try_path(path: PathBuf, source: ConverterSource) -> Option<ConverterInfo> {
    if !path.is_file() {
        return None;
    }
    let version = probe(&path)?;
    Some(ConverterInfo {
        path,
        source,
        version,
    })
}

fn try_candidate(candidate: &str) -> Option<ConverterInfo> {
    if is_install_path(candidate) {
        try_path(PathBuf::from(candidate), ConverterSource::InstallPath)
    } else {
        // Use `which` to find the candidate in PATH
        let path = which::which(candidate).ok()?;
        try_path(path, ConverterSource::System)
    }
}

/// Locate the converter
///
/// Resolution priority:
/// 1. `override_path` (from `BADGEKIT_CONVERTER`)
/// 2. Each candidate, in order
/// 3. NotFound, listing every location searched
pub fn resolve_converter(options: &ResolveOptions) -> ResolveResult {
    let mut searched_locations = Vec::new();

    if let Some(path) = &options.override_path {
        searched_locations.push(format!("${} ({})", CONVERTER_ENV, path.display()));
        if let Some(info) = try_path(path.clone(), ConverterSource::Environment) {
            log::debug!("converter from {}: {}", CONVERTER_ENV, info.path.display());
            return ResolveResult::Resolved(info);
        }
    }

    for candidate in &options.candidates {
        if is_install_path(candidate) {
            searched_locations.push(candidate.clone());
        } else {
            searched_locations.push(format!("{} (PATH)", candidate));
        }

        if let Some(info) = try_candidate(candidate) {
            log::debug!("converter from {}: {}", info.source, info.path.display());
            return ResolveResult::Resolved(info);
        }
    }

    ResolveResult::NotFound { searched_locations }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use badgekit_testkit::{with_isolated_converter_env, write_fake_converter};
    use tempfile::TempDir;

    #[test]
    fn test_is_install_path() {
        assert!(is_install_path("/usr/bin/inkscape"));
        assert!(is_install_path("C:\\Program Files\\Inkscape\\bin\\inkscape.exe"));
        assert!(!is_install_path("inkscape"));
    }

    #[test]
    fn test_not_found_lists_locations() {
        with_isolated_converter_env(None, |_bin_dir| {
            let options = ResolveOptions::from_env(vec![
                "inkscape".to_string(),
                "/no/such/Inkscape.app/Contents/MacOS/inkscape".to_string(),
            ]);

            match resolve_converter(&options) {
                ResolveResult::NotFound { searched_locations } => {
                    assert_eq!(
                        searched_locations,
                        vec![
                            "inkscape (PATH)".to_string(),
                            "/no/such/Inkscape.app/Contents/MacOS/inkscape".to_string(),
                        ]
                    );
                }
                other => panic!("Expected NotFound, got {:?}", other),
            }
        });
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_from_path() {
        with_isolated_converter_env(None, |bin_dir| {
            write_fake_converter(bin_dir, "inkscape");

            let result = resolve_converter(&ResolveOptions::from_env(vec!["inkscape".to_string()]));

            let info = result.info().expect("converter should resolve");
            assert_eq!(info.source, ConverterSource::System);
            assert_eq!(info.path, bin_dir.join("inkscape"));
            assert_eq!(info.version.as_deref(), Some("Inkscape 1.3 (fake)"));
        });
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_install_path() {
        let temp = TempDir::new().unwrap();
        let bin = write_fake_converter(temp.path(), "inkscape");
        let options = ResolveOptions {
            override_path: None,
            candidates: vec!["/no/such/inkscape".to_string(), bin.display().to_string()],
        };

        let info = resolve_converter(&options).info().cloned().unwrap();
        assert_eq!(info.source, ConverterSource::InstallPath);
        assert_eq!(info.path, bin);
    }

    #[test]
    #[cfg(unix)]
    fn test_env_override_wins() {
        let temp = TempDir::new().unwrap();
        let bin = write_fake_converter(temp.path(), "my-converter");

        with_isolated_converter_env(Some(&bin), |bin_dir| {
            write_fake_converter(bin_dir, "inkscape");

            let result = resolve_converter(&ResolveOptions::from_env(vec!["inkscape".to_string()]));

            let info = result.info().unwrap();
            assert_eq!(info.source, ConverterSource::Environment);
            assert_eq!(info.path, bin);
        });
    }

    #[test]
    #[cfg(unix)]
    fn test_broken_override_falls_through() {
        with_isolated_converter_env(Some(Path::new("/no/such/converter")), |bin_dir| {
            write_fake_converter(bin_dir, "inkscape");

            let result = resolve_converter(&ResolveOptions::from_env(vec!["inkscape".to_string()]));

            assert_eq!(result.info().unwrap().source, ConverterSource::System);
        });
    }

    #[test]
    fn test_directory_is_not_a_converter() {
        let temp = TempDir::new().unwrap();
        let options = ResolveOptions {
            override_path: Some(temp.path().to_path_buf()),
            candidates: vec![],
        };
        assert!(resolve_converter(&options).info().is_none());
    }
}
