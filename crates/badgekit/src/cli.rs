//! CLI command structure using clap

use badgekit_core::config::ScanScope;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "badgekit")]
#[command(version, about = "Generate badge pages from an SVG template and TSV data", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: ./badgekit.toml when present)
    #[arg(long, global = true, env = "BADGEKIT_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate badge pages
    Generate {
        /// SVG template file
        template: PathBuf,

        /// TSV data file
        data: PathBuf,

        /// Output directory
        output: PathBuf,

        /// Tag prefix (default: PXTAG_)
        #[arg(long)]
        prefix: Option<String>,

        /// Overwrite existing output directory
        #[arg(short, long)]
        force: bool,

        /// Skip PDF conversion even if a converter is available
        #[arg(long)]
        no_convert: bool,

        /// Where to look for tags in the template
        #[arg(long, value_enum)]
        scan: Option<ScanArg>,

        /// Render pages one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Show the tags found in a template
    Inspect {
        /// SVG template file
        template: PathBuf,

        /// Tag prefix (default: PXTAG_)
        #[arg(long)]
        prefix: Option<String>,

        /// Where to look for tags in the template
        #[arg(long, value_enum)]
        scan: Option<ScanArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which PDF converter would be used
    Converter {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ScanArg {
    /// Whole document, attribute values included
    Document,
    /// Only text outside markup tags
    Text,
}

impl From<ScanArg> for ScanScope {
    fn from(arg: ScanArg) -> Self {
        match arg {
            ScanArg::Document => ScanScope::Document,
            ScanArg::Text => ScanScope::Text,
        }
    }
}
