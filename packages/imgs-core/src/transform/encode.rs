use crate::errors::RenderError;
use crate::transform::params::OutputFormat;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::DynamicImage;
use std::io::Cursor;

/// Encodes an image into the given format
pub fn encode_image(img: &DynamicImage, format: OutputFormat) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());

    match format {
        OutputFormat::Png => {
            let encoder = PngEncoder::new(&mut buf);
            img.write_with_encoder(encoder)
                .map_err(|e| RenderError::ProcessingFailed(format!("PNG encode failed: {e}")))?;
        }
        OutputFormat::WebP => {
            // image only ships a lossless WebP encoder
            let encoder = WebPEncoder::new_lossless(&mut buf);
            img.write_with_encoder(encoder)
                .map_err(|e| RenderError::ProcessingFailed(format!("WebP encode failed: {e}")))?;
        }
    }

    Ok(buf.into_inner())
}
