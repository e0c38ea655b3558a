//! Placeholder token scanning

use crate::template::error::TemplateError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Prefix used when none is configured
pub const DEFAULT_PREFIX: &str = "PXTAG_";

/// Which parts of the template are searched for placeholders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanScope {
    /// Whole template text, including attribute values
    #[default]
    Document,
    /// Only text outside `<...>` markup tags
    Text,
}

/// A single placeholder occurrence in the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Uppercase field name (`NAME` in `PXTAG_NAME3`)
    pub field: String,
    /// 1-based badge position (`3` in `PXTAG_NAME3`)
    pub index: usize,
    /// Byte range of the whole token in the template
    pub span: Range<usize>,
}

/// Build the placeholder pattern for a prefix
///
/// The prefix is escaped, so any characters are matched literally.
pub(crate) fn placeholder_regex(prefix: &str) -> Result<Regex, TemplateError> {
    if prefix.is_empty() {
        return Err(TemplateError::InvalidPrefix {
            prefix: prefix.to_string(),
        });
    }

    Regex::new(&format!("{}([A-Z]+)([0-9]+)", regex::escape(prefix))).map_err(|_| {
        TemplateError::InvalidPrefix {
            prefix: prefix.to_string(),
        }
    })
}

/// Find every placeholder with the given prefix
pub fn scan(text: &str, prefix: &str, scope: ScanScope) -> Result<Vec<Placeholder>, TemplateError> {
    let pattern = placeholder_regex(prefix)?;
    scan_with(&pattern, text, scope)
}

pub(crate) fn scan_with(
    pattern: &Regex,
    text: &str,
    scope: ScanScope,
) -> Result<Vec<Placeholder>, TemplateError> {
    let tags = match scope {
        ScanScope::Document => Vec::new(),
        ScanScope::Text => markup_tag_spans(text),
    };

    let mut found = Vec::new();
    for caps in pattern.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if inside_any(&tags, whole.start()) {
            continue;
        }

        let index = caps[2]
            .parse::<usize>()
            .map_err(|_| TemplateError::InvalidIndex {
                token: whole.as_str().to_string(),
            })?;

        found.push(Placeholder {
            field: caps[1].to_string(),
            index,
            span: whole.range(),
        });
    }

    Ok(found)
}

/// Byte ranges of `<...>` markup tags, in document order
///
/// An unterminated tag runs to the end of the text.
fn markup_tag_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(open) = text[pos..].find('<') {
        let start = pos + open;
        let end = match text[start..].find('>') {
            Some(close) => start + close + 1,
            None => text.len(),
        };
        spans.push(start..end);
        pos = end;
    }

    spans
}

fn inside_any(spans: &[Range<usize>], pos: usize) -> bool {
    let idx = spans.partition_point(|s| s.end <= pos);
    spans.get(idx).is_some_and(|s| s.start <= pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_tag_spans() {
        let spans = markup_tag_spans("<a x=\"1\">hi</a>");
        assert_eq!(spans, vec![0..9, 11..15]);
    }

    #[test]
    fn test_markup_tag_spans_unterminated() {
        let spans = markup_tag_spans("text <open");
        assert_eq!(spans, vec![5..10]);
    }

    #[test]
    fn test_inside_any() {
        let spans = vec![0..9, 11..15];
        assert!(inside_any(&spans, 0));
        assert!(inside_any(&spans, 8));
        assert!(!inside_any(&spans, 9));
        assert!(!inside_any(&spans, 10));
        assert!(inside_any(&spans, 11));
        assert!(!inside_any(&spans, 15));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert_eq!(
            placeholder_regex("").unwrap_err(),
            TemplateError::InvalidPrefix {
                prefix: String::new()
            }
        );
    }
}
