//! Configuration - optional `badgekit.toml`

mod model;

pub use model::{BuildConfig, Config, ConvertConfig, OutputConfig, TemplateConfig, CONFIG_FILE};
pub use crate::template::ScanScope;
