use clap::Parser;

use s3ls::cli::{
    commands::list::ListFormat,
    global::{Command, CommandLineArgs},
};

const ENV_VARS: [&str; 5] =
    ["S3_BUCKET", "S3_HOSTNAME", "S3_ACCESSKEY", "S3_SECRETKEY", "S3_SECURE"];

/// Run `f` with the S3 environment variables set to `vars` and everything
/// else from that family cleared, so ambient CI configuration cannot leak in.
fn with_s3_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let mut all: Vec<(&str, Option<&str>)> = ENV_VARS.iter().map(|var| (*var, None)).collect();
    for &(var, value) in vars {
        if let Some(entry) = all.iter_mut().find(|(name, _)| *name == var) {
            entry.1 = Some(value);
        }
    }
    temp_env::with_vars(all, f);
}

fn parse_list(argv: &[&str]) -> anyhow::Result<s3ls::cli::commands::list::ListArgs> {
    let args = CommandLineArgs::try_parse_from(argv)?;
    match args.command {
        Command::List(list_args) => Ok(list_args),
    }
}

#[test]
fn parse_list_from_flags() -> anyhow::Result<()> {
    with_s3_env(&[], || {
        let list_args = parse_list(&[
            "s3ls",
            "list",
            "artifacts",
            "--hostname",
            "minio.local:9000",
            "--access-key",
            "ak",
            "--secret-key",
            "sk",
        ])
        .expect("flags alone must be enough");

        assert_eq!(list_args.bucket, "artifacts");
        assert_eq!(list_args.connection.hostname, "minio.local:9000");
        assert_eq!(list_args.connection.endpoint_url(), "http://minio.local:9000");
        assert!(!list_args.connection.secure);
        assert_eq!(list_args.format, ListFormat::Flat);
        assert!(list_args.prefix.is_none());
    });
    Ok(())
}

#[test]
fn parse_list_from_environment() {
    with_s3_env(
        &[
            ("S3_BUCKET", "artifacts"),
            ("S3_HOSTNAME", "minio.local:9000"),
            ("S3_ACCESSKEY", "ak"),
            ("S3_SECRETKEY", "sk"),
        ],
        || {
            let list_args = parse_list(&["s3ls", "list"]).expect("environment must be enough");

            assert_eq!(list_args.bucket, "artifacts");
            assert_eq!(list_args.connection.hostname, "minio.local:9000");
            assert_eq!(list_args.connection.access_key, "ak");
            assert_eq!(list_args.connection.secret_key, "sk");
        },
    );
}

#[test]
fn flags_win_over_environment() {
    with_s3_env(
        &[
            ("S3_BUCKET", "artifacts"),
            ("S3_HOSTNAME", "stale.example:9000"),
            ("S3_ACCESSKEY", "ak"),
            ("S3_SECRETKEY", "sk"),
        ],
        || {
            let list_args =
                parse_list(&["s3ls", "list", "--hostname", "fresh.example:9000"])
                    .expect("flag override must parse");

            assert_eq!(list_args.connection.hostname, "fresh.example:9000");
        },
    );
}

#[test]
fn secure_switches_endpoint_scheme() {
    with_s3_env(&[], || {
        let list_args = parse_list(&[
            "s3ls",
            "list",
            "artifacts",
            "--hostname",
            "minio.local:9000",
            "--access-key",
            "ak",
            "--secret-key",
            "sk",
            "--secure",
        ])
        .expect("secure flag must parse");

        assert_eq!(list_args.connection.endpoint_url(), "https://minio.local:9000");
    });
}

#[test]
fn parse_prefix_and_tree_format() {
    with_s3_env(&[], || {
        let list_args = parse_list(&[
            "s3ls",
            "list",
            "artifacts",
            "--hostname",
            "minio.local:9000",
            "--access-key",
            "ak",
            "--secret-key",
            "sk",
            "--prefix",
            "success/master/",
            "--format",
            "tree",
        ])
        .expect("prefix and format must parse");

        assert_eq!(list_args.prefix.as_deref(), Some("success/master/"));
        assert_eq!(list_args.format, ListFormat::Tree);
    });
}

#[test]
fn missing_connection_configuration_is_a_usage_error() {
    with_s3_env(&[], || {
        let result = parse_list(&["s3ls", "list", "artifacts"]);
        assert!(result.is_err(), "hostname and credentials are required");
    });
}
