//! Badge page generation from an SVG template and tab-separated data.
//!
//! ```no_run
//! use badgekit_core::compose::compose;
//! use badgekit_core::config::{OutputConfig, ScanScope};
//! use badgekit_core::output::{prepare_output_dir, PageWriter};
//! use badgekit_core::table::Table;
//! use badgekit_core::template::Template;
//! use std::path::Path;
//!
//! # fn main() -> badgekit_core::Result<()> {
//! let template = Template::from_file("badge.svg", "PXTAG_", ScanScope::Document)?;
//! let table = Table::from_file("attendees.tsv")?;
//!
//! let out = Path::new("badges");
//! prepare_output_dir(out, false)?;
//! let pages = compose(&template, &table, &PageWriter::new(out, &OutputConfig::default()))?;
//! println!("Generated {} pages", pages);
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod compose;
pub mod config;
pub mod error;
pub mod output;
pub mod table;
pub mod template;

// Re-export commonly used types
pub use error::{BadgekitError, Result};
