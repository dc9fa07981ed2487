use crate::constants::{MAX_DIMENSION, MIN_DIMENSION};
use crate::errors::RenderError;

/// Validates an icon edge length
pub fn validate_size(size: u32) -> Result<(), RenderError> {
    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&size) {
        return Err(RenderError::InvalidParams(format!(
            "size must be {MIN_DIMENSION}-{MAX_DIMENSION}, got {size}"
        )));
    }
    Ok(())
}
