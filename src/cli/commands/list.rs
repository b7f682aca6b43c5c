use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use tracing::info;

use crate::{listing, s3};

/// Arguments for the `s3ls list` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Bucket to inventory
    #[arg(value_name = "BUCKET", env = "S3_BUCKET")]
    pub bucket: String,

    #[command(flatten)]
    pub connection: S3ConnectionArgs,

    /// Only list keys starting with this prefix (filtered server-side)
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Output layout for the listing
    #[arg(long, value_enum, default_value_t = ListFormat::Flat)]
    pub format: ListFormat,
}

/// Connection parameters for an S3-compatible endpoint.
///
/// Everything here can come from the environment as well, so CI jobs can run
/// `s3ls list` with no flags at all. Flags win over environment variables.
#[derive(Args, Debug, Clone)]
pub struct S3ConnectionArgs {
    /// Endpoint to connect to, as host:port
    #[arg(long, env = "S3_HOSTNAME", value_name = "HOST:PORT")]
    pub hostname: String,

    /// Access key for the endpoint
    #[arg(long, env = "S3_ACCESSKEY", hide_env_values = true)]
    pub access_key: String,

    /// Secret key for the endpoint
    #[arg(long, env = "S3_SECRETKEY", hide_env_values = true)]
    pub secret_key: String,

    /// Connect over TLS (S3_SECURE=true)
    #[arg(long, env = "S3_SECURE")]
    pub secure: bool,
}

impl S3ConnectionArgs {
    pub fn endpoint_url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{scheme}://{}", self.hostname)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFormat {
    /// One object key per line, streamed as the service yields them
    #[default]
    Flat,
    /// Keys rendered as a directory tree, split on `/`
    Tree,
}

/// Run the `s3ls list` subcommand.
///
/// The bucket must exist before any listing is attempted; a missing bucket is
/// fatal. Connectivity and credential failures propagate from the SDK
/// unrecovered.
pub async fn run(args: ListArgs) -> Result<()> {
    if args.bucket.trim().is_empty() {
        bail!("Bucket name must not be empty");
    }

    let endpoint_url = args.connection.endpoint_url();
    let client =
        s3::connect(&endpoint_url, &args.connection.access_key, &args.connection.secret_key)
            .await;

    list_with_client(&client, &args).await
}

/// Existence check and listing against an already-built client.
async fn list_with_client(client: &aws_sdk_s3::Client, args: &ListArgs) -> Result<()> {
    if !s3::bucket_exists(client, &args.bucket).await? {
        bail!("Bucket {} does not exist on {}", args.bucket, args.connection.endpoint_url());
    }

    let count = match args.format {
        ListFormat::Flat => {
            s3::visit_bucket_objects(client, &args.bucket, args.prefix.as_deref(), |key| {
                println!("{key}");
                Ok(())
            })
            .await?
        }
        ListFormat::Tree => {
            // Tree output needs the whole key set before rendering.
            let mut keys = Vec::new();
            let count =
                s3::visit_bucket_objects(client, &args.bucket, args.prefix.as_deref(), |key| {
                    keys.push(key);
                    Ok(())
                })
                .await?;

            let root = args.prefix.as_deref().unwrap_or(&args.bucket);
            print!("{}", listing::render_tree(root, args.prefix.as_deref(), &keys));
            count
        }
    };

    info!(count, bucket = %args.bucket, "Listing complete");
    Ok(())
}
