pub mod constants;
pub mod embed;
pub mod errors;
pub mod prehead;
pub mod producer;
pub mod render;
pub mod runner;
pub mod storage;
pub mod transform;
pub mod validation;
pub mod variant;

// public API
pub use constants::{DEFAULT_ICON_SIZE, MAX_DIMENSION, MIN_DIMENSION, PREHEAD_ALIGN};
pub use errors::{EmbedError, ImgsError, OutputError, ProducerError, RenderError, RunError};
pub use prehead::{prehead, prehead_for};
pub use producer::{IconProducer, Imgs, MemoryProducer, Producer, StorageProducer};
pub use render::{render_icon, render_variant};
pub use runner::{write_output, FailurePolicy, RunReport, Runner, WrittenFile};
pub use storage::{AccessCredentials, StorageClient};
pub use transform::{encode_image, OutputFormat, RenderParams};
pub use variant::{IconKind, ImageVariant};
