mod cli;

use crate::cli::{Cli, Command};
use clap::error::ErrorKind;
use clap::Parser;
use jiff::Timestamp;
use s3wire_core::expiry::{format_utc_minutes, format_utc_seconds};
use s3wire_core::{FlowKind, ObjectCoordinate, RandomIdGenerator};
use s3wire_issuer::page::format_size_mb;
use s3wire_issuer::{DownloadParams, IssuedLink, LinkIssuer, SiteConfig, UploadParams};
use s3wire_storage::{load_client, S3ObjectSigner, S3PagePublisher};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Download {
            site,
            source_bucket,
            source_key,
            ttl,
        } => {
            let issuer = issuer(&site).await?;
            let params = DownloadParams::builder()
                .source(ObjectCoordinate::new(source_bucket, source_key))
                .ttl_secs(ttl)
                .build();
            let link = issuer.issue_download(params).await?;
            report(&link, &[]);
        }
        Command::Upload {
            site,
            storage_bucket,
            ttl,
            max_size,
            allowed_types,
            filename,
        } => {
            let issuer = issuer(&site).await?;
            let builder = UploadParams::builder()
                .storage_bucket(storage_bucket)
                .ttl_secs(ttl)
                .max_size_bytes(max_size)
                .allowed_types(allowed_types.clone());
            let params = match filename {
                Some(filename) => builder.filename(filename).build(),
                None => builder.build(),
            };
            let link = issuer.issue_upload(params).await?;
            report(
                &link,
                &[
                    ("max size", format_size_mb(max_size)),
                    ("allowed types", allowed_types),
                ],
            );
        }
    }

    Ok(())
}

type S3LinkIssuer = LinkIssuer<S3ObjectSigner, S3PagePublisher, RandomIdGenerator>;

async fn issuer(site: &cli::SiteArgs) -> anyhow::Result<S3LinkIssuer> {
    let client = load_client(&site.region).await?;
    let signer = Arc::new(S3ObjectSigner::new(client.clone()));
    let publisher = Arc::new(S3PagePublisher::new(client, site.hosting_bucket.clone()));
    let generator = Arc::new(RandomIdGenerator::default());
    let config = SiteConfig::builder()
        .domain(site.domain.clone())
        .protocol(site.protocol.into())
        .build();
    Ok(LinkIssuer::new(signer, publisher, generator, config))
}

/// Prints the result block for a freshly issued link.
fn report(link: &IssuedLink, extra: &[(&str, String)]) {
    let rule = "=".repeat(60);
    println!("{rule}");
    println!("{} link created", link.flow);
    println!("{rule}");
    println!("short url:     {}", link.share_url);
    println!("expires:       {}", expiry_display(link.flow, link.expires_at));
    println!("id:            {}", link.short_id);
    println!("object:        {}", link.object);
    for (label, value) in extra {
        println!("{:<14} {}", format!("{label}:"), value);
    }
    println!("{rule}");
}

/// The report echoes the expiry exactly as the landing page displays it:
/// minute precision for download pages, second precision for upload pages.
fn expiry_display(flow: FlowKind, expires_at: Timestamp) -> String {
    match flow {
        FlowKind::Download => format_utc_minutes(expires_at),
        FlowKind::Upload => format_utc_seconds(expires_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_expiry_format_matches_each_page() {
        let ts: Timestamp = "2026-08-23T18:05:42Z".parse().unwrap();
        assert_eq!(expiry_display(FlowKind::Download, ts), "2026-08-23 18:05 UTC");
        assert_eq!(expiry_display(FlowKind::Upload, ts), "2026-08-23 18:05:42 UTC");
    }
}
