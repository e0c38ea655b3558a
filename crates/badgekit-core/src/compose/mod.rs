//! Compose module - fill template placeholders with table records
//!
//! Records are split into batches of `template.capacity()`. Batch `k`
//! becomes page `k + 1`; record `i` of the batch fills every placeholder
//! with index `i + 1`. The final batch is padded with empty records, so
//! trailing positions on the last page render as empty strings.
//!
//! Column names are matched against template fields case-insensitively.


use crate::error::{BadgekitError, Result};
use crate::output::PageWriter;
use crate::table::{Record, Table};
use crate::template::Template;
use regex::{Captures, Regex};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Number of pages needed for `records` records at `capacity` per page
pub fn page_count(records: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    records.div_ceil(capacity)
}

/// Recoverable mismatch between template and table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionWarning {
    /// Table columns that no placeholder references
    UnusedColumns(Vec<String>),
}

impl fmt::Display for CompositionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionWarning::UnusedColumns(columns) => {
                write!(f, "Data columns missing from template: {}", columns.join(", "))
            }
        }
    }
}

/// One finished page of markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    /// Number of positions filled with real records
    pub filled: usize,
    /// Substituted template text
    pub content: String,
}

/// Validated pairing of a template and a table
#[derive(Debug)]
pub struct Compositor<'a> {
    template: &'a Template,
    table: &'a Table,
    /// Template field -> table column holding its values
    columns: BTreeMap<String, String>,
    /// Template pattern, widened with columns whose names are not `[A-Z]+`
    pattern: Regex,
    warnings: Vec<CompositionWarning>,
}

impl<'a> Compositor<'a> {
    /// Check that every template field has a table column
    ///
    /// # Errors
    ///
    /// Returns [`BadgekitError::DataMismatch`] listing every template field
    /// without a matching column. Nothing is rendered in that case.
    pub fn new(template: &'a Template, table: &'a Table) -> Result<Self> {
        let mut columns = BTreeMap::new();
        let mut unused = Vec::new();

        for column in table.columns() {
            let field = column.to_uppercase();
            if template.fields().contains(&field) {
                // First column wins if two differ only by case
                columns.entry(field).or_insert_with(|| column.clone());
            } else {
                unused.push(column.clone());
            }
        }

        let missing: Vec<String> = template
            .fields()
            .iter()
            .filter(|field| !columns.contains_key(*field))
            .cloned()
            .collect();

        if !missing.is_empty() {
            return Err(BadgekitError::DataMismatch { missing });
        }

        let pattern = substitution_pattern(template, table)?;

        // Columns referenced only through their literal name are in use too
        if pattern.captures_len() > 3 {
            let literal: BTreeSet<&str> = pattern
                .captures_iter(template.content())
                .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
                .collect();
            unused.retain(|column| !literal.contains(column.as_str()));
        }

        let mut warnings = Vec::new();
        if !unused.is_empty() {
            let warning = CompositionWarning::UnusedColumns(unused);
            log::warn!("{}", warning);
            warnings.push(warning);
        }

        Ok(Self {
            template,
            table,
            columns,
            pattern,
            warnings,
        })
    }

    pub fn warnings(&self) -> &[CompositionWarning] {
        &self.warnings
    }

    /// `ceil(records / capacity)`
    pub fn page_count(&self) -> usize {
        page_count(self.table.records().len(), self.template.capacity())
    }

    /// Render one page, `index` being 0-based
    ///
    /// Returns `None` past the last page.
    pub fn render_page(&self, index: usize) -> Option<Page> {
        if index >= self.page_count() {
            return None;
        }

        let capacity = self.template.capacity();
        let start = index * capacity;
        let end = (start + capacity).min(self.table.records().len());
        let batch = &self.table.records()[start..end];

        let content = self
            .pattern
            .replace_all(self.template.content(), |caps: &Captures<'_>| {
                self.value_for(batch, caps).to_string()
            })
            .into_owned();

        Some(Page {
            number: index + 1,
            filled: batch.len(),
            content,
        })
    }

    /// Render every page in order
    pub fn pages(&self) -> impl Iterator<Item = Page> + '_ {
        (0..self.page_count()).filter_map(move |i| self.render_page(i))
    }

    /// Value substituted for one token
    ///
    /// Positions past the end of `batch` are padding and render empty.
    /// Tokens without a known column or with an unusable index are
    /// blanked, so no placeholder survives into a page.
    fn value_for<'r>(&self, batch: &'r [Record], caps: &Captures<'_>) -> &'r str {
        // Literal column names, when present, take the first group
        let (column, index) = match (caps.get(1), caps.len()) {
            (Some(literal), 4) => (Some(literal.as_str()), &caps[3]),
            (None, 4) => (caps.get(2).and_then(|f| self.column_for(f.as_str())), &caps[3]),
            _ => (self.column_for(&caps[1]), &caps[2]),
        };
        let Some(column) = column else {
            return "";
        };
        let Ok(position) = index.parse::<usize>() else {
            return "";
        };

        position
            .checked_sub(1)
            .and_then(|i| batch.get(i))
            .and_then(|record| record.get(column))
            .unwrap_or("")
    }
}

impl Compositor<'_> {
    fn column_for(&self, field: &str) -> Option<&str> {
        self.columns.get(field).map(String::as_str)
    }
}

/// Pattern used to substitute a page
///
/// Columns such as `FIRST_NAME` or `name` never match `[A-Z]+`, so they
/// are matched by their literal name ahead of the generic field group.
/// Longer names come first, so `NAME_X` wins over `NAME`.
/// Groups: 1 literal column, 2 field, 3 index. Without such columns this
/// is the template pattern itself (1 field, 2 index).
fn substitution_pattern(template: &Template, table: &Table) -> Result<Regex> {
    let mut literal: Vec<&str> = table
        .columns()
        .iter()
        .map(String::as_str)
        .filter(|column| !column.chars().all(|c| c.is_ascii_uppercase()))
        .collect();

    if literal.is_empty() {
        return Ok(template.pattern().clone());
    }

    literal.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let alternation = literal
        .iter()
        .map(|column| regex::escape(column))
        .collect::<Vec<_>>()
        .join("|");

    let source = format!(
        "{}(?:({})|([A-Z]+))([0-9]+)",
        regex::escape(template.prefix()),
        alternation
    );
    Regex::new(&source).map_err(|e| BadgekitError::Generic(format!("invalid column pattern: {}", e)))
}

/// Validate, render and write every page
///
/// Returns the number of pages written. Validation happens before any
/// file is touched.
pub fn compose(template: &Template, table: &Table, writer: &PageWriter) -> Result<usize> {
    let compositor = Compositor::new(template, table)?;
    let total = compositor.page_count();

    for page in compositor.pages() {
        log::info!("Adding page {}/{}...", page.number, total);
        writer.write(&page)?;
    }

    Ok(total)
}
