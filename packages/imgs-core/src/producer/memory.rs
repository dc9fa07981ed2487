use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;

use super::Producer;
use crate::embed::decode_chunks;
use crate::errors::ProducerError;
use crate::variant::ImageVariant;

/// Serves pre-built buffers
#[derive(Debug, Clone, Default)]
pub struct MemoryProducer {
    entries: HashMap<ImageVariant, Bytes>,
}

impl MemoryProducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, variant: ImageVariant, bytes: impl Into<Bytes>) -> Self {
        self.insert(variant, bytes);
        self
    }

    pub fn insert(&mut self, variant: ImageVariant, bytes: impl Into<Bytes>) {
        self.entries.insert(variant, bytes.into());
    }

    /// Adds a variant from base64 chunks as emitted by the embed generator
    pub fn insert_chunks(
        &mut self,
        variant: ImageVariant,
        chunks: &[&str],
    ) -> Result<(), ProducerError> {
        let bytes = decode_chunks(chunks).map_err(|e| ProducerError::Decode(e.to_string()))?;
        self.insert(variant, bytes);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl Producer for MemoryProducer {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn produce(&self, variant: ImageVariant) -> Result<Bytes, ProducerError> {
        self.entries
            .get(&variant)
            .cloned()
            .ok_or(ProducerError::Missing { variant })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_producer_returns_inserted_bytes() {
        let producer = MemoryProducer::new().with(ImageVariant::AesWebp, vec![1u8, 2, 3]);

        let bytes = producer.produce(ImageVariant::AesWebp).await.unwrap();
        assert_eq!(bytes.as_ref(), &[1, 2, 3]);
    }

    #[tokio::test]
    async fn test_memory_producer_missing_variant() {
        let producer = MemoryProducer::new();

        let err = producer.produce(ImageVariant::CloudPng).await.unwrap_err();
        assert!(matches!(
            err,
            ProducerError::Missing {
                variant: ImageVariant::CloudPng
            }
        ));
        assert_eq!(err.to_string(), "no data for variant cloud_png");
    }

    #[tokio::test]
    async fn test_insert_chunks() {
        let mut producer = MemoryProducer::new();
        producer
            .insert_chunks(ImageVariant::ZipPng, &["iVBO", "Rw=="])
            .unwrap();

        let bytes = producer.produce(ImageVariant::ZipPng).await.unwrap();
        assert_eq!(bytes.as_ref(), &[0x89, 0x50, 0x4E, 0x47]);
        assert!(producer.insert_chunks(ImageVariant::ZipWebp, &["!!"]).is_err());
        assert_eq!(producer.len(), 1);
    }
}
