use crate::constants::PREHEAD_ALIGN;
use crate::errors::RenderError;
use crate::producer::Imgs;
use crate::transform::OutputFormat;
use crate::variant::ImageVariant;

/// Pads a cover image with zeros up to the next 128-byte boundary.
///
/// An already aligned buffer still gains one full block of padding, so the
/// result is always strictly longer than the input.
pub fn prehead(cover: &[u8]) -> Vec<u8> {
    let pad = PREHEAD_ALIGN - cover.len() % PREHEAD_ALIGN;
    let mut out = Vec::with_capacity(cover.len() + pad);
    out.extend_from_slice(cover);
    out.resize(cover.len() + pad, 0);
    out
}

/// Padded zip cover for a vault extension (`png` or `webp`).
///
/// Other extensions (e.g. `bin`) carry no cover and yield `None`.
pub fn prehead_for(ext: &str) -> Result<Option<Vec<u8>>, RenderError> {
    let variant = match OutputFormat::from_str(ext) {
        Some(OutputFormat::Png) => ImageVariant::ZipPng,
        Some(OutputFormat::WebP) => ImageVariant::ZipWebp,
        None => return Ok(None),
    };
    let cover = Imgs::get(variant)?;
    Ok(Some(prehead(&cover)))
}
