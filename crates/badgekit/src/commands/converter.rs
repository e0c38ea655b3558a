//! Converter command - show which converter `generate` would use

use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::Result;
use badgekit_convert::{ConverterInfo, ResolveOptions, ResolveResult, resolve_converter};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

/// Converter command JSON output schema
#[derive(Debug, Serialize)]
struct ConverterOutput {
    found: bool,
    enabled: bool,
    format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    converter: Option<ConverterInfo>,
    searched_locations: Vec<String>,
}

/// Resolve the converter and report the result
///
/// Always exits 0; a missing converter only disables conversion.
pub fn run(json: bool, config: Option<PathBuf>, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let convert = &ctx.config.convert;

    let result = resolve_converter(&ResolveOptions::from_env(convert.candidates.clone()));

    let output = match result {
        ResolveResult::Resolved(info) => ConverterOutput {
            found: true,
            enabled: convert.enabled,
            format: convert.format.clone(),
            converter: Some(info),
            searched_locations: Vec::new(),
        },
        ResolveResult::NotFound { searched_locations } => ConverterOutput {
            found: false,
            enabled: convert.enabled,
            format: convert.format.clone(),
            converter: None,
            searched_locations,
        },
    };

    if json {
        return print_json(&output);
    }

    match &output.converter {
        Some(info) => {
            print_text(&format!(
                "{} Converter found: {}",
                "✓".green().bold(),
                info.path.display()
            ))?;
            print_text(&format!("  Source:  {}", info.source))?;
            print_text(&format!(
                "  Version: {}",
                info.version.as_deref().unwrap_or("unknown")
            ))?;
            print_text(&format!("  Output:  {}", output.format.to_uppercase()))?;
        }
        None => {
            print_text(&format!(
                "{} No converter found, pages will stay SVG",
                "!".yellow()
            ))?;
            if ctx.verbose {
                print_text("  Searched:")?;
                for location in &output.searched_locations {
                    print_text(&format!("    - {}", location))?;
                }
            }
        }
    }

    if !output.enabled {
        print_text(&format!(
            "{} Conversion is disabled in configuration",
            "→".cyan()
        ))?;
    }

    Ok(())
}
