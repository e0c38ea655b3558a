//! Inspect command - report the tags a template declares

use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::Result;
use badgekit_core::config::ScanScope;
use badgekit_core::template::Template;
use colored::Colorize;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Inspect command JSON output schema
#[derive(Debug, Serialize)]
struct InspectOutput {
    schema_version: String,
    template: String,
    prefix: String,
    scan: ScanScope,
    fields: BTreeSet<String>,
    capacity: usize,
    occurrences: usize,
    indices: BTreeMap<String, BTreeSet<usize>>,
}

/// Print the fields and badge capacity found in a template
///
/// Fails the same way `generate` does on a malformed template or one
/// without tags.
pub fn run(
    template: PathBuf,
    prefix: Option<String>,
    scan: Option<ScanScope>,
    json: bool,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let mut ctx = Context::new(config, verbose)?;
    ctx.override_template(prefix, scan)?;

    let parsed = Template::from_file(
        &template,
        &ctx.config.template.prefix,
        ctx.config.template.scan,
    )?;
    let analysis = parsed.analysis();

    let output = InspectOutput {
        schema_version: "1.0".to_string(),
        template: template.display().to_string(),
        prefix: parsed.prefix().to_string(),
        scan: parsed.scope(),
        fields: analysis.fields.clone(),
        capacity: analysis.capacity,
        occurrences: analysis.occurrences,
        indices: analysis.indices.clone(),
    };

    if json {
        return print_json(&output);
    }

    print_text(&format!(
        "{} {}",
        "Template:".bold(),
        output.template
    ))?;
    print_text(&format!("  Prefix:          {}", output.prefix))?;
    print_text(&format!(
        "  Badges per page: {}",
        output.capacity.to_string().green()
    ))?;
    print_text(&format!("  Tag occurrences: {}", output.occurrences))?;
    print_text(&format!("  {}", "Fields:".bold()))?;
    for (field, indices) in &output.indices {
        let missing = (1..=output.capacity)
            .filter(|i| !indices.contains(i))
            .count();
        if missing == 0 {
            print_text(&format!("    {} {}", "✓".green(), field))?;
        } else {
            // Badges without this field just stay blank for it
            print_text(&format!(
                "    {} {} (absent from {} of {} badges)",
                "!".yellow(),
                field,
                missing,
                output.capacity
            ))?;
        }
    }

    if ctx.verbose {
        print_text(&format!("  Scan scope: {:?}", output.scan))?;
    }

    Ok(())
}
