use crate::constants::DEFAULT_ICON_SIZE;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Png,
    WebP,
}

impl OutputFormat {
    /// Parses a format name or file extension
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::WebP => "image/webp",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::WebP => "webp",
        }
    }
}

/// Icon rendering parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderParams {
    /// Edge length of the square icon in pixels
    pub size: u32,
}

impl RenderParams {
    pub fn new(size: Option<u32>) -> Self {
        Self {
            size: size.unwrap_or(DEFAULT_ICON_SIZE),
        }
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self::new(None)
    }
}
