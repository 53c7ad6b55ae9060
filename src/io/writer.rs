// Document serialization.

use crate::convert::document::WconDocument;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Output path for a given pose input: same base name, `.wcon` extension.
pub fn wcon_output_path(input: &Path) -> PathBuf {
    input.with_extension("wcon")
}

/// Serializes the document as indented JSON and writes it in one shot.
pub fn write_document(doc: &WconDocument, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(doc)?;
    fs::write(path, json)?;
    Ok(())
}
