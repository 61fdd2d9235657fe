use anyhow::{bail, Context};
use pairup_core::{CardDescriptor, GameConfig};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const CATALOG_FILE: &str = "cards.json";
const CONFIG_FILE: &str = "game.json";

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

/// Reads the card catalog: a JSON array of `{name, image}` records. Names
/// are the match identity, so duplicates are rejected here rather than
/// producing a board with cross-matched pairs.
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<CardDescriptor>> {
    let catalog: Vec<CardDescriptor> = load_json(path)?;
    let mut seen = HashSet::new();
    for descriptor in &catalog {
        if descriptor.name.is_empty() {
            bail!("catalog {} has a card with an empty name", path.display());
        }
        if !seen.insert(descriptor.name.as_str()) {
            bail!(
                "catalog {} repeats card name {:?}",
                path.display(),
                descriptor.name
            );
        }
    }
    Ok(catalog)
}

/// Reads `game.json` from the assets directory when present; a missing file
/// yields the built-in defaults, and a partial file fills in the rest.
pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(GameConfig::default());
    }
    load_json(path)
}

pub fn default_catalog_path(dir: &Path) -> std::path::PathBuf {
    dir.join(CATALOG_FILE)
}
