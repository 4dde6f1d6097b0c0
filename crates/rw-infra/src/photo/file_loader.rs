use std::path::Path;

use anyhow::Context;
use rw_core::{MimeType, PhotoFile};

/// Read a photo from disk, the way a file picker hands one over.
///
/// The MIME type comes from the file's content when it is a known image
/// format, otherwise from its extension.
pub async fn load_photo_file(path: &Path) -> anyhow::Result<PhotoFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read photo file: {}", path.display()))?;
    let mime_type = sniff_mime_type(&bytes, path);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(PhotoFile::new(file_name, mime_type, bytes))
}

fn sniff_mime_type(bytes: &[u8], path: &Path) -> MimeType {
    if let Ok(format) = image::guess_format(bytes) {
        return MimeType::new(format.to_mime_type());
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => MimeType::new("application/pdf"),
        Some("txt") => MimeType::new("text/plain"),
        Some("json") => MimeType::new("application/json"),
        _ => MimeType::octet_stream(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn png_content_is_detected_regardless_of_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("photo.dat");
        let mut png = Vec::new();
        image::DynamicImage::ImageRgb8(image::RgbImage::new(4, 4))
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        std::fs::write(&path, &png).unwrap();

        let file = load_photo_file(&path).await.unwrap();

        assert_eq!(file.file_name, "photo.dat");
        assert_eq!(file.mime_type.as_str(), "image/png");
        assert_eq!(file.size_bytes(), png.len());
    }

    #[tokio::test]
    async fn non_image_keeps_non_image_type() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let file = load_photo_file(&path).await.unwrap();

        assert!(!file.mime_type.is_image());
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_photo_file(&dir.path().join("nope.png")).await.is_err());
    }
}
