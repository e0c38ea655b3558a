//! Table module - tab-separated attendee data
//!
//! The first row holds column names. Every following row is one record,
//! read positionally against the header:
//!
//! - Header cells that are blank are dropped, together with the cells at the
//!   same position in every data row
//! - Cells are whitespace-trimmed
//! - Rows shorter than the header are padded with empty strings
//! - Rows longer than the header are truncated
//! - Rows whose cells are all blank are skipped
//!
//! Quoted cells (`"a\tb"`, `"say ""hi"""`) follow the usual delimited-text
//! convention and may contain tabs and newlines.

mod split;

use crate::error::{BadgekitError, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// One attendee: column name to cell value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: HashMap<String, String>,
}

impl Record {
    /// Value of a column, if the record has it
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Recoverable problem found while reading a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableWarning {
    /// A data row did not reach every header column and was padded
    ShortRow {
        /// 1-based row number, the header being row 1
        row: usize,
        /// Header columns present in the row
        found: usize,
        /// Header columns expected
        expected: usize,
    },
    /// A header name repeated; the later cell is ignored
    DuplicateColumn {
        name: String,
        /// 1-based header position of the ignored cell
        column: usize,
    },
}

impl fmt::Display for TableWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableWarning::ShortRow {
                row,
                found,
                expected,
            } => write!(
                f,
                "Row {} has {} columns, expected {}. Row will be padded with empty strings.",
                row, found, expected
            ),
            TableWarning::DuplicateColumn { name, column } => write!(
                f,
                "Column {} repeats header {}. Only the first {} column is used.",
                column, name, name
            ),
        }
    }
}

/// Attendee table: ordered header and ordered records
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    records: Vec<Record>,
    warnings: Vec<TableWarning>,
}

impl Table {
    /// Parse tab-separated text
    ///
    /// # Errors
    ///
    /// Returns [`BadgekitError::TableInvalid`] if the text has no header
    /// row or every header cell is blank.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut rows = split::split_rows(text).into_iter();

        let header = rows
            .next()
            .ok_or_else(|| BadgekitError::TableInvalid("Empty header row in data file".to_string()))?;

        let mut warnings = Vec::new();

        // Keep (position, name) for non-blank header cells, first of each name
        let mut retained: Vec<(usize, String)> = Vec::new();
        for (pos, cell) in header.iter().enumerate() {
            let name = cell.trim();
            if name.is_empty() {
                continue;
            }
            if retained.iter().any(|(_, seen)| seen == name) {
                let warning = TableWarning::DuplicateColumn {
                    name: name.to_string(),
                    column: pos + 1,
                };
                log::warn!("{}", warning);
                warnings.push(warning);
                continue;
            }
            retained.push((pos, name.to_string()));
        }

        if retained.is_empty() {
            return Err(BadgekitError::TableInvalid(
                "Empty header row in data file".to_string(),
            ));
        }

        let mut records = Vec::new();

        for (offset, row) in rows.enumerate() {
            let row_number = offset + 2;

            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }

            let found = retained.iter().filter(|(pos, _)| *pos < row.len()).count();
            if found < retained.len() {
                let warning = TableWarning::ShortRow {
                    row: row_number,
                    found,
                    expected: retained.len(),
                };
                log::warn!("{}", warning);
                warnings.push(warning);
            }

            records.push(
                retained
                    .iter()
                    .map(|(pos, name)| {
                        let value = row.get(*pos).map(|c| c.trim()).unwrap_or_default();
                        (name.clone(), value.to_string())
                    })
                    .collect(),
            );
        }

        let columns = retained.into_iter().map(|(_, name)| name).collect();

        Ok(Self {
            columns,
            records,
            warnings,
        })
    }

    /// Read and parse a table file
    ///
    /// # Errors
    ///
    /// Returns [`BadgekitError::FileNotFound`] if the file does not exist.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = BadgekitError::read_input("Data", path.as_ref())?;
        Self::parse(&content)
    }

    /// Header columns, in file order, blank ones removed
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Problems recovered from while reading
    pub fn warnings(&self) -> &[TableWarning] {
        &self.warnings
    }
}
