use std::path::Path;

use anyhow::{bail, Context, Result};
use bytes::Bytes;

use shopdesk_core::media::FileUpload;
use shopdesk_core::models::DiscountKind;

/// Declared media type for a picked file, from its extension. Unknown
/// extensions map to a generic type the collection's allow-list rejects.
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Read a picked file into an in-memory upload.
pub fn read_upload(path: &Path) -> Result<FileUpload> {
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.bin")
        .to_string();

    Ok(FileUpload {
        file_name,
        content_type: content_type_for(path).to_string(),
        content: Bytes::from(content),
    })
}

/// Parse a `from:to` position pair for media moves.
pub fn parse_move(raw: &str) -> Result<(usize, usize)> {
    let Some((from, to)) = raw.split_once(':') else {
        bail!("Expected from:to positions, got '{}'", raw);
    };
    let from = from
        .trim()
        .parse()
        .with_context(|| format!("Invalid position '{}'", from))?;
    let to = to
        .trim()
        .parse()
        .with_context(|| format!("Invalid position '{}'", to))?;
    Ok((from, to))
}

/// Parse a discount kind argument.
pub fn parse_discount_kind(raw: &str) -> Result<DiscountKind> {
    match raw.to_ascii_lowercase().as_str() {
        "percent" => Ok(DiscountKind::Percent),
        "fixed" => Ok(DiscountKind::Fixed),
        other => bail!("Unknown discount kind '{}' (expected percent or fixed)", other),
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn content_type_covers_the_image_allow_list() {
        assert_eq!(content_type_for(&PathBuf::from("a.JPG")), "image/jpeg");
        assert_eq!(content_type_for(&PathBuf::from("a.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(&PathBuf::from("b.png")), "image/png");
        assert_eq!(content_type_for(&PathBuf::from("c.webp")), "image/webp");
    }

    #[test]
    fn content_type_falls_back_for_non_images() {
        assert_eq!(
            content_type_for(&PathBuf::from("doc.pdf")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(&PathBuf::from("no-extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn parse_move_accepts_position_pairs() {
        assert_eq!(parse_move("2:0").unwrap(), (2, 0));
        assert_eq!(parse_move(" 1 : 3 ").unwrap(), (1, 3));
    }

    #[test]
    fn parse_move_rejects_malformed_input() {
        assert!(parse_move("2").is_err());
        assert!(parse_move("a:b").is_err());
        assert!(parse_move("1:").is_err());
    }

    #[test]
    fn parse_discount_kind_accepts_both_kinds() {
        assert!(matches!(
            parse_discount_kind("percent").unwrap(),
            DiscountKind::Percent
        ));
        assert!(matches!(
            parse_discount_kind("FIXED").unwrap(),
            DiscountKind::Fixed
        ));
        assert!(parse_discount_kind("bogus").is_err());
    }
}
