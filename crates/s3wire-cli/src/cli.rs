use clap::{Args, Parser, Subcommand, ValueEnum};
use s3wire_core::Protocol;
use s3wire_issuer::{
    DEFAULT_ALLOWED_TYPES, DEFAULT_DOWNLOAD_TTL_SECS, DEFAULT_MAX_SIZE_BYTES,
    DEFAULT_UPLOAD_TTL_SECS,
};
use std::fmt::{Display, Formatter};

pub const DOMAIN_ENV: &str = "S3WIRE_DOMAIN";
pub const HOSTING_BUCKET_ENV: &str = "S3WIRE_HOSTING_BUCKET";
pub const REGION_ENV: &str = "S3WIRE_REGION";

pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProtocolArg {
    Http,
    Https,
}

impl Display for ProtocolArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProtocolArg::Http => write!(f, "http"),
            ProtocolArg::Https => write!(f, "https"),
        }
    }
}

impl From<ProtocolArg> for Protocol {
    fn from(value: ProtocolArg) -> Self {
        match value {
            ProtocolArg::Http => Protocol::Http,
            ProtocolArg::Https => Protocol::Https,
        }
    }
}

/// Arguments shared by both flows.
#[derive(Debug, Args)]
pub struct SiteArgs {
    /// Public domain the hosting bucket is served from.
    #[arg(long, env = DOMAIN_ENV)]
    pub domain: String,

    /// Bucket the rendered landing page is published to.
    #[arg(long, env = HOSTING_BUCKET_ENV)]
    pub hosting_bucket: String,

    /// AWS region.
    #[arg(long, env = REGION_ENV, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Protocol of the composed share URL.
    #[arg(long, value_enum, default_value_t = ProtocolArg::Https)]
    pub protocol: ProtocolArg,
}

#[derive(Debug, Parser)]
#[command(name = "s3wire", version, about = "Issue short-lived share links for S3 transfers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Issue a download link for an existing object.
    Download {
        #[command(flatten)]
        site: SiteArgs,

        /// Bucket holding the file to share.
        #[arg(long)]
        source_bucket: String,

        /// Full key of the file inside the source bucket.
        #[arg(long)]
        source_key: String,

        /// Link lifetime in seconds.
        #[arg(long, default_value_t = DEFAULT_DOWNLOAD_TTL_SECS)]
        ttl: u64,
    },

    /// Issue an upload link to a fresh destination.
    Upload {
        #[command(flatten)]
        site: SiteArgs,

        /// Bucket the uploaded file will land in.
        #[arg(long)]
        storage_bucket: String,

        /// Link lifetime in seconds.
        #[arg(long, default_value_t = DEFAULT_UPLOAD_TTL_SECS)]
        ttl: u64,

        /// Advisory size limit in bytes, shown on the page.
        #[arg(long, default_value_t = DEFAULT_MAX_SIZE_BYTES)]
        max_size: u64,

        /// Advisory comma-separated MIME filter, shown on the page.
        #[arg(long, default_value = DEFAULT_ALLOWED_TYPES)]
        allowed_types: String,

        /// Destination filename; defaults to upload-{id}.
        #[arg(long)]
        filename: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn download_defaults() {
        let cli = Cli::try_parse_from([
            "s3wire",
            "download",
            "--domain",
            "dl.example.com",
            "--hosting-bucket",
            "dl.example.com",
            "--source-bucket",
            "docs",
            "--source-key",
            "report.pdf",
        ])
        .unwrap();

        match cli.command {
            Command::Download { site, ttl, .. } => {
                assert_eq!(ttl, 21_600);
                assert_eq!(site.region, "us-east-1");
                assert_eq!(site.protocol, ProtocolArg::Https);
            }
            _ => panic!("expected download subcommand"),
        }
    }

    #[test]
    fn upload_defaults() {
        let cli = Cli::try_parse_from([
            "s3wire",
            "upload",
            "--domain",
            "up.example.com",
            "--hosting-bucket",
            "up.example.com",
            "--storage-bucket",
            "inbox-store",
        ])
        .unwrap();

        match cli.command {
            Command::Upload {
                ttl,
                max_size,
                allowed_types,
                filename,
                ..
            } => {
                assert_eq!(ttl, 86_400);
                assert_eq!(max_size, 100 * 1024 * 1024);
                assert_eq!(allowed_types, "*/*");
                assert!(filename.is_none());
            }
            _ => panic!("expected upload subcommand"),
        }
    }

    #[test]
    fn missing_required_argument_fails() {
        let result = Cli::try_parse_from([
            "s3wire",
            "download",
            "--domain",
            "dl.example.com",
            "--hosting-bucket",
            "dl.example.com",
            "--source-bucket",
            "docs",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn protocol_is_restricted() {
        let result = Cli::try_parse_from([
            "s3wire",
            "download",
            "--domain",
            "dl.example.com",
            "--hosting-bucket",
            "dl.example.com",
            "--source-bucket",
            "docs",
            "--source-key",
            "report.pdf",
            "--protocol",
            "gopher",
        ]);
        assert!(result.is_err());
    }
}
