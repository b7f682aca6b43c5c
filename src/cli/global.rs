use clap::{Args, Parser, Subcommand};

use crate::cli::commands::list::ListArgs;

#[derive(Parser, Debug)]
#[command(
    name = "s3ls",
    version,
    about = "List object inventories from S3-compatible storage endpoints"
)]
pub struct CommandLineArgs {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global_args: GlobalArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the objects stored in a bucket
    List(ListArgs),
}

#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Increase log verbosity (-v info, -vv debug); logs go to stderr
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}
