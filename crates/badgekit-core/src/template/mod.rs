//! Template module - placeholder discovery for badge templates
//!
//! A badge template is an SVG (or any well-formed XML) document containing
//! positional placeholder tokens:
//!
//! ```text
//! PXTAG_NAME1   PXTAG_AFFILIATION1
//! PXTAG_NAME2   PXTAG_AFFILIATION2
//! ```
//!
//! ## Syntax
//!
//! - Token: `<prefix><FIELD><N>`
//! - `<prefix>`: literal string, `PXTAG_` by default
//! - `<FIELD>`: uppercase ASCII letters, matched against table columns
//! - `<N>`: 1-based badge position on the page
//!
//! The highest `<N>` anywhere in the template is the page capacity: the
//! number of records placed on each generated page.

pub mod analyze;
pub mod error;
pub mod scan;

pub use analyze::{analyze, Analysis, Template};
pub use error::TemplateError;
pub use scan::{scan, Placeholder, ScanScope, DEFAULT_PREFIX};

#[cfg(test)]
mod tests;
