use anyhow::{Context, Result};
use image::{imageops::FilterType, ColorType, GenericImageView};
use rw_core::photo::PreviewImage;
use rw_core::ports::PreviewRendererPort;
use rw_core::{MimeType, PhotoFile};

/// Decodes the selected photo and renders a WebP preview bounded by `max_edge`.
pub struct ImagePreviewRenderer {
    max_edge: u32,
}

impl ImagePreviewRenderer {
    pub fn new(max_edge: u32) -> Self {
        Self { max_edge }
    }
}

impl PreviewRendererPort for ImagePreviewRenderer {
    fn render(&self, file: &PhotoFile) -> Result<PreviewImage> {
        let decoded = image::load_from_memory(&file.bytes)
            .with_context(|| format!("decode {} for preview", file.file_name))?;
        let (original_width, original_height) = decoded.dimensions();
        let (target_width, target_height) =
            calculate_target_size(original_width, original_height, self.max_edge);

        let resized = if target_width == original_width && target_height == original_height {
            decoded
        } else {
            image::DynamicImage::ImageRgba8(image::imageops::resize(
                &decoded,
                target_width,
                target_height,
                FilterType::Triangle,
            ))
        };

        let rgba = resized.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut bytes = Vec::new();
        let encoder = image::codecs::webp::WebPEncoder::new_lossless(&mut bytes);
        encoder
            .encode(rgba.as_raw(), width, height, ColorType::Rgba8.into())
            .context("encode preview to webp")?;

        Ok(PreviewImage {
            bytes: bytes.into(),
            mime_type: MimeType::new("image/webp"),
            width,
            height,
        })
    }
}

fn calculate_target_size(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width <= max_edge && height <= max_edge {
        return (width, height);
    }

    if width >= height {
        let scaled_height = ((height as f64) * (max_edge as f64) / (width as f64)).round() as u32;
        (max_edge, scaled_height.max(1))
    } else {
        let scaled_width = ((width as f64) * (max_edge as f64) / (height as f64)).round() as u32;
        (scaled_width.max(1), max_edge)
    }
}
