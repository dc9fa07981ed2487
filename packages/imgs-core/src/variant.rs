use std::fmt;

use crate::transform::OutputFormat;

/// Cover icon motif
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Zip,
    Aes,
    Cloud,
}

impl IconKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Aes => "aes",
            Self::Cloud => "cloud",
        }
    }
}

/// One of the six produced images.
///
/// The declaration order is the processing order of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageVariant {
    ZipPng,
    ZipWebp,
    AesPng,
    AesWebp,
    CloudPng,
    CloudWebp,
}

impl ImageVariant {
    /// All variants in processing order
    pub const ALL: [ImageVariant; 6] = [
        Self::ZipPng,
        Self::ZipWebp,
        Self::AesPng,
        Self::AesWebp,
        Self::CloudPng,
        Self::CloudWebp,
    ];

    /// Producer name, e.g. `zip_png`
    pub fn name(&self) -> &'static str {
        match self {
            Self::ZipPng => "zip_png",
            Self::ZipWebp => "zip_webp",
            Self::AesPng => "aes_png",
            Self::AesWebp => "aes_webp",
            Self::CloudPng => "cloud_png",
            Self::CloudWebp => "cloud_webp",
        }
    }

    /// Output file name, e.g. `zip.png`
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::ZipPng => "zip.png",
            Self::ZipWebp => "zip.webp",
            Self::AesPng => "aes.png",
            Self::AesWebp => "aes.webp",
            Self::CloudPng => "cloud.png",
            Self::CloudWebp => "cloud.webp",
        }
    }

    pub fn kind(&self) -> IconKind {
        match self {
            Self::ZipPng | Self::ZipWebp => IconKind::Zip,
            Self::AesPng | Self::AesWebp => IconKind::Aes,
            Self::CloudPng | Self::CloudWebp => IconKind::Cloud,
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            Self::ZipPng | Self::AesPng | Self::CloudPng => OutputFormat::Png,
            Self::ZipWebp | Self::AesWebp | Self::CloudWebp => OutputFormat::WebP,
        }
    }

    pub fn content_type(&self) -> &'static str {
        self.format().content_type()
    }

    /// Looks up a variant by producer name (`zip_png`) or file name (`zip.png`)
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s || v.file_name() == s)
    }
}

impl fmt::Display for ImageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_order() {
        let names: Vec<_> = ImageVariant::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(
            names,
            ["zip_png", "zip_webp", "aes_png", "aes_webp", "cloud_png", "cloud_webp"]
        );
    }

    #[test]
    fn test_file_names() {
        let files: Vec<_> = ImageVariant::ALL.iter().map(|v| v.file_name()).collect();
        assert_eq!(
            files,
            ["zip.png", "zip.webp", "aes.png", "aes.webp", "cloud.png", "cloud.webp"]
        );
    }

    #[test]
    fn test_file_extension_matches_format() {
        for v in ImageVariant::ALL {
            assert!(v.file_name().ends_with(v.format().extension()));
            assert!(v.file_name().starts_with(v.kind().as_str()));
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ImageVariant::from_name("aes_webp"), Some(ImageVariant::AesWebp));
        assert_eq!(ImageVariant::from_name("CLOUD.PNG"), Some(ImageVariant::CloudPng));
        assert_eq!(ImageVariant::from_name("zip.jpg"), None);
    }
}
