//! Sources of variant bytes.

pub mod icon;
pub mod memory;
pub mod remote;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::ProducerError;
use crate::variant::ImageVariant;

pub use icon::{IconProducer, Imgs};
pub use memory::MemoryProducer;
pub use remote::StorageProducer;

/// Supplies the raw bytes for a variant
#[async_trait]
pub trait Producer: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    async fn produce(&self, variant: ImageVariant) -> Result<Bytes, ProducerError>;
}

#[async_trait]
impl<P: Producer + ?Sized> Producer for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn produce(&self, variant: ImageVariant) -> Result<Bytes, ProducerError> {
        (**self).produce(variant).await
    }
}
