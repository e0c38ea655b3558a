mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Library diagnostics are opt-in through RUST_LOG
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Commands::Generate {
            template,
            data,
            output,
            prefix,
            force,
            no_convert,
            scan,
            sequential,
        } => commands::generate::run(commands::generate::GenerateArgs {
            template,
            data,
            output,
            prefix,
            force,
            no_convert,
            scan: scan.map(Into::into),
            sequential,
            config: cli.config,
            verbose: cli.verbose,
        }),
        Commands::Inspect {
            template,
            prefix,
            scan,
            json,
        } => commands::inspect::run(
            template,
            prefix,
            scan.map(Into::into),
            json,
            cli.config,
            cli.verbose,
        ),
        Commands::Converter { json } => commands::converter::run(json, cli.config, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
