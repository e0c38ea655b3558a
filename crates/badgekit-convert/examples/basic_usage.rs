//! Basic usage example for badgekit-convert
//!
//! Locates a converter and converts one SVG file to PDF.
//!
//! Run with: cargo run --example basic_usage -- page_1.svg

use badgekit_convert::{
    ConvertOptions, ResolveOptions, ResolveResult, convert_page, resolve_converter,
};

fn main() -> badgekit_core::Result<()> {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "page_1.svg".to_string());

    println!("Step 1: Resolving converter...");

    let options = ResolveOptions::from_env(vec![
        "inkscape".to_string(),
        "/Applications/Inkscape.app/Contents/MacOS/inkscape".to_string(),
    ]);

    let info = match resolve_converter(&options) {
        ResolveResult::Resolved(info) => {
            println!("✓ Resolved from {}:", info.source);
            println!("  Path: {:?}", info.path);
            if let Some(version) = &info.version {
                println!("  Version: {}", version);
            }
            info
        }
        ResolveResult::NotFound { searched_locations } => {
            println!("✗ No converter found");
            println!("  Searched locations:");
            for loc in searched_locations {
                println!("    - {}", loc);
            }
            return Ok(());
        }
    };

    println!("\nStep 2: Converting {}...", input);

    let result = convert_page(&info, &ConvertOptions::sibling(&input, "pdf"))?;
    println!("Exit code: {} ({}ms)", result.exit_code, result.duration_ms);

    Ok(())
}
