//! Loading character documents exported as JSON files.

use std::path::Path;

use anyhow::Context;
use wardrobe_domain::CharacterRecord;

/// Read a character document from a JSON file.
pub fn load_character_file(path: &Path) -> anyhow::Result<CharacterRecord> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read character file {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid character document in {}", path.display()))
}
