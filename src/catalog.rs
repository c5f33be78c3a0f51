use std::path::Path;

use anyhow::Context;
use plateup_recipe::Catalog;
use rust_embed::RustEmbed;

use crate::config::CatalogConfig;

#[derive(RustEmbed)]
#[folder = "data/"]
struct Bundled;

const BUNDLED_CATALOG: &str = "recipes.json";

/// The catalog named by the configuration, or the bundled one.
pub fn load(config: &CatalogConfig) -> anyhow::Result<Catalog> {
    let catalog = match &config.path {
        Some(path) => from_path(path)?,
        None => bundled()?,
    };

    tracing::info!(recipes = catalog.len(), "recipe catalog ready");

    Ok(catalog)
}

pub fn bundled() -> anyhow::Result<Catalog> {
    let file = Bundled::get(BUNDLED_CATALOG).context("bundled recipe catalog is missing")?;

    Catalog::from_json(&file.data).context("bundled recipe catalog is invalid")
}

pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Catalog> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read recipe catalog {}", path.display()))?;

    Catalog::from_json(&bytes)
        .with_context(|| format!("recipe catalog {} is invalid", path.display()))
}
