/// Maximum icon edge length
pub const MAX_DIMENSION: u32 = 4096;

/// Minimum icon edge length
pub const MIN_DIMENSION: u32 = 16;

/// Upper bound for pixel buffers allocated while rendering
pub const MAX_PIXELS: u64 = 64_000_000;

/// Default icon edge length
pub const DEFAULT_ICON_SIZE: u32 = 128;

/// Supersampling factor used when rasterising icons
pub const SUPERSAMPLE: u32 = 4;

/// Prehead block alignment in bytes
pub const PREHEAD_ALIGN: usize = 128;

/// Largest body accepted from the object store (16 MiB)
pub const MAX_INPUT_SIZE: u64 = 16 * 1024 * 1024;

/// Max base64 characters per chunk in generated sources
pub const EMBED_CHUNK_SIZE: usize = 160;
