//! Tests for template analysis
//!
//! Organized into focused submodules: scanning and whole-template analysis.

use super::*;

// Test helper functions
mod helpers;

// Scanning tests
mod scanning;
