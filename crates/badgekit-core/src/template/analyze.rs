//! Template analysis: field set and page capacity

use crate::template::error::TemplateError;
use crate::template::scan::{placeholder_regex, scan_with, Placeholder, ScanScope};
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Result of scanning a template for placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Distinct field names, sorted
    pub fields: BTreeSet<String>,
    /// Highest placeholder index across the whole template
    pub capacity: usize,
    /// Indices used by each field
    pub indices: BTreeMap<String, BTreeSet<usize>>,
    /// Total number of placeholder occurrences
    pub occurrences: usize,
}

/// Analyze template text, scanning the whole document
///
/// # Errors
///
/// Returns an error if:
/// - The text is not well-formed markup
/// - No placeholder with `prefix` exists
/// - A placeholder index lies outside `1..=capacity`
pub fn analyze(text: &str, prefix: &str) -> Result<Analysis, TemplateError> {
    let pattern = placeholder_regex(prefix)?;
    analyze_with(&pattern, text, prefix, ScanScope::Document)
}

fn analyze_with(
    pattern: &Regex,
    text: &str,
    prefix: &str,
    scope: ScanScope,
) -> Result<Analysis, TemplateError> {
    check_well_formed(text)?;
    let placeholders = scan_with(pattern, text, scope)?;
    summarize(prefix, &placeholders)
}

/// Structural parse check against XML
fn check_well_formed(text: &str) -> Result<(), TemplateError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };

    roxmltree::Document::parse_with_options(text, options)
        .map(|_| ())
        .map_err(|e| TemplateError::MalformedMarkup {
            message: e.to_string(),
        })
}

fn summarize(prefix: &str, placeholders: &[Placeholder]) -> Result<Analysis, TemplateError> {
    let capacity = placeholders
        .iter()
        .map(|p| p.index)
        .max()
        .ok_or_else(|| TemplateError::NoPlaceholders {
            prefix: prefix.to_string(),
        })?;

    let mut indices: BTreeMap<String, BTreeSet<usize>> = BTreeMap::new();
    for placeholder in placeholders {
        indices
            .entry(placeholder.field.clone())
            .or_default()
            .insert(placeholder.index);
    }

    // Bounded rule: each field's indices must lie in 1..=capacity.
    // Gaps are allowed.
    for (field, used) in &indices {
        if let Some(&index) = used.iter().find(|&&i| i == 0 || i > capacity) {
            return Err(TemplateError::IndexOutOfRange {
                field: field.clone(),
                index,
                capacity,
            });
        }
    }

    Ok(Analysis {
        fields: indices.keys().cloned().collect(),
        capacity,
        indices,
        occurrences: placeholders.len(),
    })
}

/// An analyzed badge template, immutable for the duration of a run
#[derive(Debug, Clone)]
pub struct Template {
    content: String,
    prefix: String,
    scope: ScanScope,
    analysis: Analysis,
    pattern: Regex,
}

impl Template {
    /// Analyze template text and wrap it
    pub fn parse(
        content: impl Into<String>,
        prefix: &str,
        scope: ScanScope,
    ) -> Result<Self, TemplateError> {
        let content = content.into();
        let pattern = placeholder_regex(prefix)?;
        let analysis = analyze_with(&pattern, &content, prefix, scope)?;

        log::debug!(
            "template: {} field(s), capacity {}, {} placeholder(s)",
            analysis.fields.len(),
            analysis.capacity,
            analysis.occurrences
        );

        Ok(Self {
            content,
            prefix: prefix.to_string(),
            scope,
            analysis,
            pattern,
        })
    }

    /// Read and analyze a template file
    ///
    /// # Errors
    ///
    /// Returns [`crate::BadgekitError::FileNotFound`] if the file does not exist,
    /// or a template error if analysis fails.
    pub fn from_file(
        path: impl AsRef<Path>,
        prefix: &str,
        scope: ScanScope,
    ) -> crate::error::Result<Self> {
        let content = crate::error::BadgekitError::read_input("Template", path.as_ref())?;
        Ok(Self::parse(content, prefix, scope)?)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn scope(&self) -> ScanScope {
        self.scope
    }

    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    pub fn fields(&self) -> &BTreeSet<String> {
        &self.analysis.fields
    }

    /// Number of records placed on each page
    pub fn capacity(&self) -> usize {
        self.analysis.capacity
    }

    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }
}
