use async_trait::async_trait;
use bytes::Bytes;

use super::Producer;
use crate::errors::{ProducerError, RenderError};
use crate::render::render_variant;
use crate::transform::RenderParams;
use crate::variant::ImageVariant;

/// Renders the built-in cover icons
#[derive(Debug, Clone, Default)]
pub struct IconProducer {
    params: RenderParams,
}

impl IconProducer {
    pub fn new(params: RenderParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }
}

#[async_trait]
impl Producer for IconProducer {
    fn name(&self) -> &'static str {
        "icon"
    }

    async fn produce(&self, variant: ImageVariant) -> Result<Bytes, ProducerError> {
        let bytes = render_variant(variant, &self.params)?;
        Ok(Bytes::from(bytes))
    }
}

/// Default-size cover icons, one function per variant
pub struct Imgs;

impl Imgs {
    pub fn get(variant: ImageVariant) -> Result<Vec<u8>, RenderError> {
        render_variant(variant, &RenderParams::default())
    }

    pub fn zip_png() -> Result<Vec<u8>, RenderError> {
        Self::get(ImageVariant::ZipPng)
    }

    pub fn zip_webp() -> Result<Vec<u8>, RenderError> {
        Self::get(ImageVariant::ZipWebp)
    }

    pub fn aes_png() -> Result<Vec<u8>, RenderError> {
        Self::get(ImageVariant::AesPng)
    }

    pub fn aes_webp() -> Result<Vec<u8>, RenderError> {
        Self::get(ImageVariant::AesWebp)
    }

    pub fn cloud_png() -> Result<Vec<u8>, RenderError> {
        Self::get(ImageVariant::CloudPng)
    }

    pub fn cloud_webp() -> Result<Vec<u8>, RenderError> {
        Self::get(ImageVariant::CloudWebp)
    }
}
