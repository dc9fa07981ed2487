use std::path::Path;

use crate::errors::EmbedError;

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "gen", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Derives a function name from a file path.
///
/// The extension is dropped and every character outside `[A-Za-z0-9_]`
/// becomes `_`. Names starting with a digit get a `_` prefix and keywords
/// get a `_` suffix.
pub fn asset_name(path: &Path) -> Result<String, EmbedError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| EmbedError::InvalidName(path.display().to_string()))?;

    let mut name: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    if KEYWORDS.contains(&name.as_str()) {
        name.push('_');
    }

    validate_ident(&name)?;
    Ok(name)
}

/// Checks that `name` is usable as a Rust function name
pub fn validate_ident(name: &str) -> Result<(), EmbedError> {
    if name.is_empty() || name == "_" {
        return Err(EmbedError::InvalidName(name.to_string()));
    }

    if name.len() > 255 {
        return Err(EmbedError::InvalidName(format!("{name} (max 255 chars)")));
    }

    let mut chars = name.chars();
    let first_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !first_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(EmbedError::InvalidName(name.to_string()));
    }

    if KEYWORDS.contains(&name) {
        return Err(EmbedError::InvalidName(format!("{name} is a keyword")));
    }

    Ok(())
}
