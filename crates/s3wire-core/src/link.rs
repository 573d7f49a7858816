use crate::short_id::ShortId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Which of the two symmetric flows a link belongs to.
///
/// The flow decides the presigning verb (GET or PUT), the landing page
/// template, and the path prefix the page is published under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Download,
    Upload,
}

impl FlowKind {
    /// Path prefix for published pages and share URLs.
    pub fn prefix(&self) -> &'static str {
        match self {
            FlowKind::Download => "s",
            FlowKind::Upload => "u",
        }
    }
}

impl Display for FlowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowKind::Download => write!(f, "download"),
            FlowKind::Upload => write!(f, "upload"),
        }
    }
}

/// Protocol of the composed share URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

impl Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::Http => write!(f, "http"),
            Protocol::Https => write!(f, "https"),
        }
    }
}

/// Composes the canonical shareable URL for a published page.
///
/// Pure string composition: `{protocol}://{domain}/{prefix}/{id}/`.
pub fn share_url(protocol: Protocol, domain: &str, flow: FlowKind, id: &ShortId) -> String {
    format!(
        "{}://{}/{}/{}/",
        protocol,
        domain.trim_end_matches('/'),
        flow.prefix(),
        id
    )
}

/// Hosting-store key the rendered page is published under.
pub fn page_key(flow: FlowKind, id: &ShortId) -> String {
    format!("{}/{}/index.html", flow.prefix(), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ShortId {
        ShortId::new(s).unwrap()
    }

    #[test]
    fn share_url_layout() {
        let url = share_url(Protocol::Https, "dl.example.com", FlowKind::Download, &id("aB3xY9"));
        assert_eq!(url, "https://dl.example.com/s/aB3xY9/");

        let url = share_url(Protocol::Http, "up.example.com", FlowKind::Upload, &id("Zz0Qq1"));
        assert_eq!(url, "http://up.example.com/u/Zz0Qq1/");
    }

    #[test]
    fn share_url_trims_trailing_domain_slash() {
        let url = share_url(Protocol::Https, "dl.example.com/", FlowKind::Download, &id("abc123"));
        assert_eq!(url, "https://dl.example.com/s/abc123/");
    }

    #[test]
    fn share_url_is_deterministic() {
        let a = share_url(Protocol::Https, "dl.example.com", FlowKind::Download, &id("abc123"));
        let b = share_url(Protocol::Https, "dl.example.com", FlowKind::Download, &id("abc123"));
        assert_eq!(a, b);
    }

    #[test]
    fn page_key_layout() {
        assert_eq!(page_key(FlowKind::Download, &id("abc123")), "s/abc123/index.html");
        assert_eq!(page_key(FlowKind::Upload, &id("abc123")), "u/abc123/index.html");
    }
}
