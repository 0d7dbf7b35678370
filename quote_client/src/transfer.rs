//! JSON import and export of the whole collection.
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use quote_common::net::EXPORT_FILE_NAME;
use quote_common::{Quote, Result};

/// Serializes the full collection, unfiltered.
pub fn export_json(quotes: &[Quote]) -> Result<String> {
    Ok(serde_json::to_string_pretty(quotes)?)
}

/// Writes the collection to `<dir>/quotes.json` and returns the path.
pub fn export_to_dir(quotes: &[Quote], dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, export_json(quotes)?)?;
    info!("Exported {} quotes to {}", quotes.len(), path.display());
    Ok(path)
}

/// Parses an imported file. The top level must be an array; records are not
/// validated and missing fields become empty strings.
pub fn parse_import(contents: &str) -> Result<Vec<Quote>> {
    Ok(serde_json::from_str(contents)?)
}

/// Reads and parses an import file.
pub fn read_import_file(path: &Path) -> Result<Vec<Quote>> {
    let contents = fs::read_to_string(path)?;
    parse_import(&contents)
}
