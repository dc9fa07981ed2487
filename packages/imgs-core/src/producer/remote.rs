use async_trait::async_trait;
use bytes::Bytes;

use super::Producer;
use crate::errors::ProducerError;
use crate::storage::StorageClient;
use crate::variant::ImageVariant;

/// Fetches variant files from an object store.
///
/// Each variant is read from `<base_url>/<prefix><file_name>`.
#[derive(Debug, Clone)]
pub struct StorageProducer {
    client: StorageClient,
    prefix: String,
}

impl StorageProducer {
    pub fn new(client: StorageClient) -> Self {
        Self {
            client,
            prefix: String::new(),
        }
    }

    /// Reads objects below `prefix`, e.g. `icons/`
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let trimmed = prefix.trim_matches('/');
        self.prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("{trimmed}/")
        };
        self
    }

    pub fn key_for(&self, variant: ImageVariant) -> String {
        format!("{}{}", self.prefix, variant.file_name())
    }
}

#[async_trait]
impl Producer for StorageProducer {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn produce(&self, variant: ImageVariant) -> Result<Bytes, ProducerError> {
        let key = self.key_for(variant);
        tracing::info!(key = %key, "fetching object from store");
        self.client.get_object(&key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        let client = StorageClient::new("https://store.example.com".to_string(), None);
        let producer = StorageProducer::new(client);
        assert_eq!(producer.key_for(ImageVariant::CloudWebp), "cloud.webp");

        let producer = producer.with_prefix("/covers/v1/");
        assert_eq!(producer.key_for(ImageVariant::AesPng), "covers/v1/aes.png");
    }
}
