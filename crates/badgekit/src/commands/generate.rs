//! Generate command - fill the template with attendee data, one page per batch

use crate::context::Context;
use anyhow::{Result, anyhow};
use badgekit_convert::{ConvertOptions, ResolveOptions, ResolveResult, convert_page, resolve_converter};
use badgekit_core::compose::Compositor;
use badgekit_core::config::{ConvertConfig, ScanScope};
use badgekit_core::output::{
    Manifest, ManifestPage, PageWriter, ensure_output_available, prepare_output_dir,
};
use badgekit_core::table::Table;
use badgekit_core::template::Template;
use chrono::Utc;
use colored::Colorize;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments of `badgekit generate`
pub struct GenerateArgs {
    pub template: PathBuf,
    pub data: PathBuf,
    pub output: PathBuf,
    pub prefix: Option<String>,
    pub force: bool,
    pub no_convert: bool,
    pub scan: Option<ScanScope>,
    pub sequential: bool,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

/// A page file on disk
struct WrittenPage {
    number: usize,
    filled: usize,
    path: PathBuf,
}

/// Outcome of converting one page
struct Conversion {
    output: Option<PathBuf>,
    error: Option<String>,
}

/// Generate badge pages
///
/// Nothing is written until the template, the data and their pairing have
/// all been validated.
pub fn run(args: GenerateArgs) -> Result<()> {
    let mut ctx = Context::new(args.config, args.verbose)?;
    ctx.override_template(args.prefix, args.scan)?;
    if args.no_convert {
        ctx.config.convert.enabled = false;
    }
    if args.sequential {
        ctx.config.build.parallel = false;
    }
    let verbose = ctx.verbose;
    let config = &ctx.config;
    log::debug!("effective config: {:?}", config);

    // Step 1: Output directory policy
    ensure_output_available(&args.output, args.force)?;

    // Step 2: Read template
    if verbose {
        println!("{} Reading template: {}", "→".cyan(), args.template.display());
    }
    let template = Template::from_file(&args.template, &config.template.prefix, config.template.scan)?;
    if verbose {
        let fields: Vec<&str> = template.fields().iter().map(String::as_str).collect();
        println!("{} Found tags: {}", "→".cyan(), fields.join(", "));
        println!("{} Badges per page: {}", "→".cyan(), template.capacity());
    }

    // Step 3: Read data
    if verbose {
        println!("{} Reading data: {}", "→".cyan(), args.data.display());
    }
    let table = Table::from_file(&args.data)?;
    for warning in table.warnings() {
        eprintln!("{} {}", "!".yellow(), warning);
    }
    if verbose {
        println!(
            "{} Found {} records with columns: {}",
            "→".cyan(),
            table.records().len(),
            table.columns().join(", ")
        );
    }

    // Step 4: Pair template fields with data columns
    let compositor = Compositor::new(&template, &table)?;
    for warning in compositor.warnings() {
        eprintln!("{} {}", "!".yellow(), warning);
    }

    // Step 5: Create output directory
    prepare_output_dir(&args.output, args.force)?;
    if verbose {
        println!("{} Generating badges in: {}", "→".cyan(), args.output.display());
    }

    let start_time = Instant::now();
    let start_utc = Utc::now();

    // Step 6: Render and write pages
    let writer = PageWriter::new(&args.output, &config.output);
    let total = compositor.page_count();

    let write_page = |index: usize| -> Result<WrittenPage> {
        let page = compositor
            .render_page(index)
            .ok_or_else(|| anyhow!("page {} is out of range", index + 1))?;
        if verbose {
            println!("\tAdding page {}/{}...", page.number, total);
        }
        let path = writer.write(&page)?;
        Ok(WrittenPage {
            number: page.number,
            filled: page.filled,
            path,
        })
    };

    let written: Vec<WrittenPage> = if config.build.parallel {
        (0..total).into_par_iter().map(write_page).collect::<Result<_>>()?
    } else {
        (0..total).map(write_page).collect::<Result<_>>()?
    };

    // Step 7: Convert pages (optional, failures do not abort)
    let conversions = if config.convert.enabled {
        convert_pages(&config.convert, &written, verbose)
    } else {
        if verbose {
            println!("{} PDF conversion disabled", "→".cyan());
        }
        Vec::new()
    };

    let duration_ms = start_time.elapsed().as_millis() as u64;

    // Step 8: Record the run
    let manifest = {
        let mut warnings: Vec<String> = table.warnings().iter().map(ToString::to_string).collect();
        warnings.extend(compositor.warnings().iter().map(ToString::to_string));

        Manifest {
            schema_version: "1.0".to_string(),
            template: args.template.clone(),
            data: args.data.clone(),
            prefix: template.prefix().to_string(),
            capacity: template.capacity(),
            records: table.records().len(),
            started_at: start_utc,
            finished_at: Utc::now(),
            duration_ms,
            pages: written
                .iter()
                .enumerate()
                .map(|(i, page)| {
                    let conversion = conversions.get(i);
                    ManifestPage {
                        number: page.number,
                        file: page.path.clone(),
                        filled: page.filled,
                        converted: conversion.and_then(|c| c.output.clone()),
                        error: conversion.and_then(|c| c.error.clone()),
                    }
                })
                .collect(),
            warnings,
        }
    };
    if config.output.manifest {
        let path = manifest.save(&args.output)?;
        if verbose {
            println!("{} Wrote {}", "→".cyan(), path.display());
        }
    }

    // Step 9: Success message
    println!(
        "{} Generated {} pages in {} ({}ms)",
        "✓".green().bold(),
        total,
        args.output.display(),
        duration_ms
    );

    let failed = manifest.failed_conversions().count();
    if failed > 0 {
        eprintln!("{} {} page(s) could not be converted", "!".yellow(), failed);
    }

    Ok(())
}

/// Convert every written page, one result per page in order
///
/// Returns an empty list when no converter is installed.
fn convert_pages(config: &ConvertConfig, pages: &[WrittenPage], verbose: bool) -> Vec<Conversion> {
    let info = match resolve_converter(&ResolveOptions::from_env(config.candidates.clone())) {
        ResolveResult::Resolved(info) => info,
        ResolveResult::NotFound { searched_locations } => {
            if verbose {
                println!(
                    "{} No converter found ({}), skipping PDF conversion",
                    "→".cyan(),
                    searched_locations.join(", ")
                );
            }
            return Vec::new();
        }
    };

    if verbose {
        println!(
            "{} Converting with {} ({})",
            "→".cyan(),
            info.path.display(),
            info.source
        );
    }

    pages
        .iter()
        .map(|page| {
            let options = ConvertOptions::sibling(&page.path, &config.format);
            let outcome = convert_page(&info, &options);
            if let Ok(result) = &outcome {
                log::debug!("converter stdout: {}", result.stdout.trim());
            }
            match outcome {
                Ok(result) if result.success() => Conversion {
                    output: Some(options.output),
                    error: None,
                },
                Ok(result) => {
                    let reason = format!("exit code {}: {}", result.exit_code, result.stderr.trim());
                    eprintln!(
                        "{} Failed to convert {} to {}: {}",
                        "✗".red().bold(),
                        page.path.display(),
                        config.format.to_uppercase(),
                        reason
                    );
                    Conversion {
                        output: None,
                        error: Some(reason),
                    }
                }
                Err(e) => {
                    eprintln!(
                        "{} Failed to convert {} to {}: {}",
                        "✗".red().bold(),
                        page.path.display(),
                        config.format.to_uppercase(),
                        e
                    );
                    Conversion {
                        output: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect()
}
