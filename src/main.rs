use anyhow::Result;
use clap::Parser;
use s3ls::cli::global::{Command, CommandLineArgs};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    init_tracing(&args);

    match args.command {
        Command::List(list_args) => s3ls::cli::commands::list::run(list_args).await,
    }
}

/// Logs go to stderr so stdout stays a clean, machine-consumable object
/// listing. `RUST_LOG` overrides the verbosity flags when set.
fn init_tracing(args: &CommandLineArgs) {
    let default_level = if args.global_args.quiet {
        "error"
    } else {
        match args.global_args.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
