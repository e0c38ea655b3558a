//! External converter discovery and execution for badgekit.
//!
//! Generated SVG pages can be turned into PDF by an external vector
//! converter (Inkscape by default). The converter is optional: when none
//! is found, only the SVG pages are produced.
//!
//! # Resolution Flow
//!
//! ```text
//! resolve_converter()
//!     ↓
//! 1. $BADGEKIT_CONVERTER, if set
//!     ↓ (missing or not runnable)
//! 2. Each configured candidate, in order
//!     → bare name: which::which(name)
//!     → path: must exist
//!     → `<bin> --version` must start
//!     ↓ (none left)
//! 3. NotFound with searched locations
//! ```
//!
//! # Example
//!
//! ```no_run
//! use badgekit_convert::{ConvertOptions, ResolveOptions, ResolveResult, convert_page, resolve_converter};
//!
//! # fn main() -> badgekit_core::Result<()> {
//! let options = ResolveOptions::from_env(vec!["inkscape".to_string()]);
//!
//! if let ResolveResult::Resolved(info) = resolve_converter(&options) {
//!     let result = convert_page(&info, &ConvertOptions::sibling("out/page_1.svg", "pdf"))?;
//!     println!("Exit code: {}", result.exit_code);
//! }
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod exec;
pub mod info;
pub mod resolve;

// Re-export commonly used types
pub use exec::{ConvertOptions, ExecResult, convert_page};
pub use info::{ConverterInfo, ConverterSource};
pub use resolve::{CONVERTER_ENV, ResolveOptions, ResolveResult, resolve_converter};

// Type alias for convenience
pub type Result<T> = badgekit_core::Result<T>;
