use crate::error::{IssueError, Result};
use crate::page;
use crate::params::{AdvisoryConstraints, DownloadParams, SiteConfig, UploadParams};
use jiff::Timestamp;
use s3wire_core::expiry::expires_at;
use s3wire_core::{page_key, share_url, FlowKind, IdGenerator, ObjectCoordinate, ShortId};
use s3wire_storage::{ObjectSigner, PagePublisher};
use std::sync::Arc;
use tracing::{debug, info};

/// A successfully issued link.
///
/// Everything durable about the link lives in the published page; this is
/// just what the caller needs to report.
#[derive(Debug, Clone)]
pub struct IssuedLink {
    pub flow: FlowKind,
    pub short_id: ShortId,
    pub share_url: String,
    pub signed_url: String,
    pub expires_at: Timestamp,
    pub object: ObjectCoordinate,
}

/// The issuance pipeline, generic over the signer, the hosting store, and
/// the id generator.
///
/// Both flows run the same sequence; only the presigning verb, the page
/// template, and the path prefix differ. Each step blocks until the call
/// it depends on completes, and any failure is terminal: no partial
/// publish can occur because publishing is the last effectful step.
#[derive(Debug, Clone)]
pub struct LinkIssuer<S, P, G> {
    signer: Arc<S>,
    publisher: Arc<P>,
    generator: Arc<G>,
    site: SiteConfig,
}

impl<S, P, G> LinkIssuer<S, P, G>
where
    S: ObjectSigner,
    P: PagePublisher,
    G: IdGenerator,
{
    pub fn new(signer: Arc<S>, publisher: Arc<P>, generator: Arc<G>, site: SiteConfig) -> Self {
        Self {
            signer,
            publisher,
            generator,
            site,
        }
    }

    /// Issues a download link for an existing object.
    ///
    /// The source is verified first so that no link is ever published for
    /// an object that cannot be fetched.
    pub async fn issue_download(&self, params: DownloadParams) -> Result<IssuedLink> {
        let short_id = self.generator.generate();
        debug!(id = %short_id, source = %params.source, "issuing download link");

        if !self.signer.exists(&params.source).await? {
            return Err(IssueError::SourceMissing(params.source));
        }

        let issued_at = Timestamp::now();
        let signed_url = self.signer.presign_get(&params.source, params.ttl_secs).await?;
        let expiry = expires_at(issued_at, params.ttl_secs);

        let page = page::render_download_page(&signed_url, params.source.filename(), expiry)?;
        self.finish(FlowKind::Download, short_id, signed_url, expiry, params.source, page)
            .await
    }

    /// Issues an upload link to a fresh destination under `inbox/`.
    pub async fn issue_upload(&self, params: UploadParams) -> Result<IssuedLink> {
        let short_id = self.generator.generate();
        let filename = params
            .filename
            .unwrap_or_else(|| format!("upload-{}", short_id));
        let destination =
            ObjectCoordinate::new(params.storage_bucket, format!("inbox/{}", filename));
        debug!(id = %short_id, destination = %destination, "issuing upload link");

        let issued_at = Timestamp::now();
        let signed_url = self.signer.presign_put(&destination, params.ttl_secs).await?;
        let expiry = expires_at(issued_at, params.ttl_secs);

        let constraints = AdvisoryConstraints {
            max_size_bytes: params.max_size_bytes,
            allowed_types: params.allowed_types,
        };
        let page = page::render_upload_page(&signed_url, &constraints, expiry)?;
        self.finish(FlowKind::Upload, short_id, signed_url, expiry, destination, page)
            .await
    }

    /// Shared tail of both flows: publish the rendered page under the
    /// id-keyed path, then compose the shareable URL.
    async fn finish(
        &self,
        flow: FlowKind,
        short_id: ShortId,
        signed_url: String,
        expiry: Timestamp,
        object: ObjectCoordinate,
        page: Vec<u8>,
    ) -> Result<IssuedLink> {
        let key = page_key(flow, &short_id);
        self.publisher.publish(&key, page).await?;

        let share_url = share_url(self.site.protocol, &self.site.domain, flow, &short_id);
        info!(%flow, id = %short_id, url = %share_url, "issued link");

        Ok(IssuedLink {
            flow,
            short_id,
            share_url,
            signed_url,
            expires_at: expiry,
            object,
        })
    }
}
