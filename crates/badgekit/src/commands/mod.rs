//! CLI command implementations

pub mod converter;
pub mod generate;
pub mod inspect;
