//! Template error types

use std::fmt;

/// Template analysis errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Template text is not well-formed markup
    MalformedMarkup {
        /// Parser message, including the position of the failure
        message: String,
    },

    /// No placeholder with the configured prefix exists in the template
    NoPlaceholders {
        /// The prefix that was searched for
        prefix: String,
    },

    /// A placeholder uses an index outside `1..=capacity`
    IndexOutOfRange {
        /// Field name of the offending placeholder
        field: String,
        /// The index it uses
        index: usize,
        /// Highest index found in the template
        capacity: usize,
    },

    /// A placeholder index does not fit in a machine integer
    InvalidIndex {
        /// The full placeholder token
        token: String,
    },

    /// Placeholder prefix cannot be used for scanning
    InvalidPrefix {
        /// The rejected prefix
        prefix: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MalformedMarkup { message } => {
                write!(f, "Invalid SVG template: {}", message)
            }
            TemplateError::NoPlaceholders { prefix } => {
                write!(f, "No tags found with prefix {}", prefix)
            }
            TemplateError::IndexOutOfRange {
                field,
                index,
                capacity,
            } => {
                write!(
                    f,
                    "Tag {} uses number {} outside of sequence 1 to {}",
                    field, index, capacity
                )
            }
            TemplateError::InvalidIndex { token } => {
                write!(f, "Tag {} has a number that is too large", token)
            }
            TemplateError::InvalidPrefix { prefix } => {
                write!(f, "Invalid tag prefix '{}': prefix must not be empty", prefix)
            }
        }
    }
}

impl std::error::Error for TemplateError {}
