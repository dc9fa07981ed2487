//! Generates Rust sources that embed binary files as base64 chunks.
//!
//! The generated module exposes `pub struct GetBin;` with one function per
//! file. Each function joins its chunks and decodes them at call time.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::constants::EMBED_CHUNK_SIZE;
use crate::errors::EmbedError;
use crate::validation::{asset_name, validate_ident};

/// One file to embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub data: Vec<u8>,
}

impl Asset {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Result<Self, EmbedError> {
        let name = name.into();
        validate_ident(&name)?;
        Ok(Self { name, data })
    }

    /// Reads a file and names the asset after its stem
    pub fn from_path(path: &Path) -> Result<Self, EmbedError> {
        let name = asset_name(path)?;
        let data = std::fs::read(path).map_err(|source| EmbedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { name, data })
    }
}

/// Loads every path as an asset, rejecting duplicate names
pub fn load_assets(paths: &[PathBuf]) -> Result<Vec<Asset>, EmbedError> {
    let assets = paths
        .iter()
        .map(|p| Asset::from_path(p))
        .collect::<Result<Vec<_>, _>>()?;
    check_unique(&assets)?;
    Ok(assets)
}

/// Splits the base64 encoding of `data` into chunks
pub fn encode_chunks(data: &[u8]) -> Vec<String> {
    let encoded = STANDARD.encode(data);
    encoded
        .as_bytes()
        .chunks(EMBED_CHUNK_SIZE)
        // base64 output is ASCII
        .map(|c| String::from_utf8_lossy(c).into_owned())
        .collect()
}

/// Joins and decodes chunks produced by [`encode_chunks`]
pub fn decode_chunks(chunks: &[&str]) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(chunks.concat())
}

/// Renders the Rust module for `assets`
pub fn generate_module(assets: &[Asset]) -> Result<String, EmbedError> {
    check_unique(assets)?;

    let mut out = String::new();
    out.push_str("// @generated by `imgs embed`\n\n");
    out.push_str("use base64::Engine as _;\n\n");
    out.push_str("pub struct GetBin;\n\n");
    out.push_str("impl GetBin {\n");

    for (i, asset) in assets.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "    pub fn {}() -> Result<Vec<u8>, base64::DecodeError> {{\n",
            asset.name
        ));
        out.push_str("        const PARTS: &[&str] = &[\n");
        for chunk in encode_chunks(&asset.data) {
            out.push_str(&format!("            \"{chunk}\",\n"));
        }
        out.push_str("        ];\n");
        out.push_str("        base64::engine::general_purpose::STANDARD.decode(PARTS.concat())\n");
        out.push_str("    }\n");
    }

    out.push_str("}\n");

    tracing::debug!(assets = assets.len(), bytes = out.len(), "generated embed module");
    Ok(out)
}

fn check_unique(assets: &[Asset]) -> Result<(), EmbedError> {
    let mut seen = HashSet::new();
    for asset in assets {
        if !seen.insert(asset.name.as_str()) {
            return Err(EmbedError::DuplicateName(asset.name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_chunks_splits_at_chunk_size() {
        let data = vec![0xABu8; 300];
        let chunks = encode_chunks(&data);

        // 300 bytes -> 400 base64 chars
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), EMBED_CHUNK_SIZE);
        assert_eq!(chunks[2].len(), 400 - 2 * EMBED_CHUNK_SIZE);

        let parts: Vec<&str> = chunks.iter().map(String::as_str).collect();
        assert_eq!(decode_chunks(&parts).unwrap(), data);
    }

    #[test]
    fn test_empty_data_has_no_chunks() {
        assert!(encode_chunks(&[]).is_empty());
        assert!(decode_chunks(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_generate_module() {
        let assets = vec![
            Asset::new("zip_png", vec![0x89, 0x50, 0x4E, 0x47]).unwrap(),
            Asset::new("aes", b"hello".to_vec()).unwrap(),
        ];
        let src = generate_module(&assets).unwrap();

        assert!(src.contains("pub struct GetBin;"));
        assert!(src.contains("pub fn zip_png() -> Result<Vec<u8>, base64::DecodeError> {"));
        assert!(src.contains("\"iVBORw==\","));
        assert!(src.contains("pub fn aes()"));
        assert!(src.contains("\"aGVsbG8=\","));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let assets = vec![
            Asset::new("icon", vec![1]).unwrap(),
            Asset::new("icon", vec![2]).unwrap(),
        ];
        assert!(matches!(
            generate_module(&assets),
            Err(EmbedError::DuplicateName(name)) if name == "icon"
        ));
    }

    #[test]
    fn test_load_assets_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("cloud.png");
        let b = dir.path().join("cloud.webp");
        std::fs::write(&a, [1u8, 2, 3]).unwrap();
        std::fs::write(&b, [4u8]).unwrap();

        let loaded = load_assets(std::slice::from_ref(&a)).unwrap();
        assert_eq!(loaded[0].name, "cloud");
        assert_eq!(loaded[0].data, vec![1, 2, 3]);

        // both files share the stem `cloud`
        assert!(matches!(
            load_assets(&[a, b]),
            Err(EmbedError::DuplicateName(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Asset::from_path(Path::new("/nonexistent/zip.png"));
        assert!(matches!(result, Err(EmbedError::Read { .. })));
    }
}
