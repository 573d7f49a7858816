use crate::params::AdvisoryConstraints;
use jiff::Timestamp;
use s3wire_core::error::Result;
use s3wire_core::expiry::{format_utc_minutes, format_utc_seconds};
use s3wire_core::Template;

const DOWNLOAD_TEMPLATE: Template = Template::new(include_str!("../templates/download.html"));
const UPLOAD_TEMPLATE: Template = Template::new(include_str!("../templates/upload.html"));

/// Renders the download landing page.
pub fn render_download_page(
    signed_url: &str,
    filename: &str,
    expires_at: Timestamp,
) -> Result<Vec<u8>> {
    let expiration = format_utc_minutes(expires_at);
    let page = DOWNLOAD_TEMPLATE.render(&[
        ("FILENAME", filename),
        ("EXPIRATION_TIME", &expiration),
        ("PRESIGNED_URL", signed_url),
    ])?;
    Ok(page.into_bytes())
}

/// Renders the upload landing page with its advisory limits.
pub fn render_upload_page(
    signed_url: &str,
    constraints: &AdvisoryConstraints,
    expires_at: Timestamp,
) -> Result<Vec<u8>> {
    let expiry = format_utc_seconds(expires_at);
    let max_size = constraints.max_size_bytes.to_string();
    let max_size_display = format_size_mb(constraints.max_size_bytes);
    let page = UPLOAD_TEMPLATE.render(&[
        ("PRESIGNED_URL", signed_url),
        ("MAX_FILE_SIZE", &max_size),
        ("MAX_FILE_SIZE_DISPLAY", &max_size_display),
        ("ALLOWED_TYPES", &constraints.allowed_types),
        ("EXPIRY_DATE", &expiry),
    ])?;
    Ok(page.into_bytes())
}

/// Human-readable size shown on upload pages, MiB-based (`50.0 MB`).
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_page_embeds_all_fields() {
        let expires: Timestamp = "2026-08-23T18:05:00Z".parse().unwrap();
        let url = "https://docs.s3.amazonaws.com/report.pdf?X-Amz-Expires=3600&X-Amz-Signature=aa";
        let page = render_download_page(url, "report.pdf", expires).unwrap();
        let page = String::from_utf8(page).unwrap();

        assert!(page.contains("report.pdf"));
        assert!(page.contains("2026-08-23 18:05 UTC"));
        assert!(page.replace("&amp;", "&").contains(url));
        assert!(!page.contains("{PRESIGNED_URL}"));
        assert!(!page.contains("{FILENAME}"));
        assert!(!page.contains("{EXPIRATION_TIME}"));
    }

    #[test]
    fn download_page_escapes_hostile_filenames() {
        let expires: Timestamp = "2026-08-23T18:05:00Z".parse().unwrap();
        let page = render_download_page("https://x/y", "<img src=x>.pdf", expires).unwrap();
        let page = String::from_utf8(page).unwrap();

        assert!(page.contains("&lt;img src=x&gt;.pdf"));
        assert!(!page.contains("<img src=x>"));
    }

    #[test]
    fn upload_page_shows_advisory_limits() {
        let expires: Timestamp = "2026-08-24T00:00:00Z".parse().unwrap();
        let constraints = AdvisoryConstraints {
            max_size_bytes: 52_428_800,
            allowed_types: "image/*".to_string(),
        };
        let page = render_upload_page("https://x/y?a=1&b=2", &constraints, expires).unwrap();
        let page = String::from_utf8(page).unwrap();

        assert!(page.contains("50.0 MB"));
        assert!(page.contains("image/*"));
        assert!(page.contains("52428800"));
        assert!(page.contains("2026-08-24 00:00:00 UTC"));
        assert!(page.replace("&amp;", "&").contains("https://x/y?a=1&b=2"));
        assert!(!page.contains("{MAX_FILE_SIZE}"));
        assert!(!page.contains("{ALLOWED_TYPES}"));
        assert!(!page.contains("{EXPIRY_DATE}"));
    }

    #[test]
    fn size_display_is_mib_based() {
        assert_eq!(format_size_mb(52_428_800), "50.0 MB");
        assert_eq!(format_size_mb(100 * 1024 * 1024), "100.0 MB");
        assert_eq!(format_size_mb(1_572_864), "1.5 MB");
    }
}
