use s3wire_core::{ObjectCoordinate, Protocol};
use typed_builder::TypedBuilder;

/// Default ttl for download links: 6 hours.
pub const DEFAULT_DOWNLOAD_TTL_SECS: u64 = 21_600;

/// Default ttl for upload links: 24 hours.
pub const DEFAULT_UPLOAD_TTL_SECS: u64 = 86_400;

/// Default advisory size limit for uploads: 100 MiB.
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 100 * 1024 * 1024;

/// Default advisory MIME filter for uploads.
pub const DEFAULT_ALLOWED_TYPES: &str = "*/*";

/// Where published pages are reachable from.
#[derive(Debug, Clone, TypedBuilder)]
pub struct SiteConfig {
    /// Public domain of the hosting bucket (e.g. `dl.example.com`).
    #[builder(setter(into))]
    pub domain: String,
    #[builder(default = Protocol::Https)]
    pub protocol: Protocol,
}

/// Parameters for issuing a download link.
#[derive(Debug, Clone, TypedBuilder)]
pub struct DownloadParams {
    /// Source object; must exist before a link is issued.
    pub source: ObjectCoordinate,
    #[builder(default = DEFAULT_DOWNLOAD_TTL_SECS)]
    pub ttl_secs: u64,
}

/// Parameters for issuing an upload link.
#[derive(Debug, Clone, TypedBuilder)]
pub struct UploadParams {
    /// Bucket the uploaded file will land in, under `inbox/`.
    #[builder(setter(into))]
    pub storage_bucket: String,
    /// Destination filename; defaults to `upload-{id}`.
    #[builder(default, setter(strip_option, into))]
    pub filename: Option<String>,
    #[builder(default = DEFAULT_UPLOAD_TTL_SECS)]
    pub ttl_secs: u64,
    #[builder(default = DEFAULT_MAX_SIZE_BYTES)]
    pub max_size_bytes: u64,
    #[builder(default = DEFAULT_ALLOWED_TYPES.to_string(), setter(into))]
    pub allowed_types: String,
}

/// Upload limits carried in the rendered page for the client to honor.
///
/// Simple presigning cannot bind size or content-type conditions into the
/// URL, so these are advisory by design, enforced only by the
/// page-embedded client script.
#[derive(Debug, Clone)]
pub struct AdvisoryConstraints {
    pub max_size_bytes: u64,
    pub allowed_types: String,
}
