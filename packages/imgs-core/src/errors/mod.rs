mod types;

pub use types::{EmbedError, ImgsError, OutputError, ProducerError, RenderError, RunError};
