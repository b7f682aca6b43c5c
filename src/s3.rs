use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::{config::Credentials, Client};
use tracing::debug;

/// Region handed to the SDK when the endpoint does not care about one.
/// MinIO and other S3-compatible services accept any value, but the client
/// refuses to build without it.
const DEFAULT_REGION: &str = "us-east-1";

/// Build an S3 client for an S3-compatible endpoint with static credentials.
///
/// Path-style addressing is forced because S3-compatible deployments rarely
/// resolve bucket subdomains.
pub async fn connect(endpoint_url: &str, access_key: &str, secret_key: &str) -> Client {
    let credentials = Credentials::new(access_key, secret_key, None, None, "s3ls");

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(DEFAULT_REGION))
        .endpoint_url(endpoint_url)
        .credentials_provider(credentials)
        .load()
        .await;

    debug!(endpoint = endpoint_url, "Building S3 client");
    let config = aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(true).build();
    Client::from_conf(config)
}

/// Check whether the given bucket exists on the service.
///
/// A `NotFound` service error maps to `Ok(false)`; every other failure
/// (unreachable endpoint, rejected credentials) propagates.
pub async fn bucket_exists(client: &Client, bucket: &str) -> Result<bool> {
    match client.head_bucket().bucket(bucket).send().await {
        Ok(_) => Ok(true),
        Err(err) => {
            if err.as_service_error().is_some_and(|service_err| service_err.is_not_found()) {
                return Ok(false);
            }
            Err(err).with_context(|| format!("Failed to check bucket {bucket}"))
        }
    }
}

/// Visit every object key in the given bucket, optionally filtered by prefix.
///
/// Keys are fed to the visitor one at a time, in the order the service yields
/// them; pagination is handled by the SDK's `ListObjectsV2` paginator and
/// nothing is buffered beyond the page in flight. Returns the number of
/// objects visited.
pub async fn visit_bucket_objects<F>(
    client: &Client,
    bucket: &str,
    prefix: Option<&str>,
    mut visitor: F,
) -> Result<u64>
where
    F: FnMut(String) -> Result<()>,
{
    let mut pages = client
        .list_objects_v2()
        .bucket(bucket)
        .set_prefix(prefix.map(str::to_string))
        .into_paginator()
        .send();

    let mut count = 0u64;
    while let Some(page) = pages.next().await {
        let page = page.with_context(|| format!("Failed to list objects in bucket {bucket}"))?;

        let contents = page.contents.unwrap_or_default();
        debug!(page_len = contents.len(), bucket, "Fetched listing page");

        for object in contents {
            let key = object.key.unwrap_or_default();
            if key.is_empty() {
                continue;
            }

            visitor(key)?;
            count += 1;
        }
    }

    debug!(count, bucket, "Finished listing bucket");
    Ok(count)
}
