//! Global context for CLI commands

use anyhow::Result;
use badgekit_core::config::{Config, ScanScope};
use std::env;
use std::path::PathBuf;

/// Global context containing the effective configuration
pub struct Context {
    pub config: Config,
    pub verbose: bool,
}

impl Context {
    /// Load configuration
    ///
    /// `config_path` must exist when given; otherwise `badgekit.toml` in
    /// the current directory is used if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read, parsed or
    /// validated.
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::from_file(path)?,
            None => Config::discover(env::current_dir()?)?,
        };

        Ok(Self { config, verbose })
    }

    /// Apply template flags given on the command line, then re-validate
    pub fn override_template(
        &mut self,
        prefix: Option<String>,
        scan: Option<ScanScope>,
    ) -> Result<()> {
        if let Some(prefix) = prefix {
            self.config.template.prefix = prefix;
        }
        if let Some(scan) = scan {
            self.config.template.scan = scan;
        }
        self.config.validate()?;
        Ok(())
    }
}
