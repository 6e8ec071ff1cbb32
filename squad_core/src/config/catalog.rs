//! Catalog loading

use super::ConfigError;
use crate::catalog::{Catalog, CatalogFile};
use std::path::Path;

/// Load a catalog from a TOML or JSON file (chosen by extension)
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let file: CatalogFile = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => super::load_json(path)?,
        _ => super::load_toml(path)?,
    };
    let catalog = Catalog::new(file)?;
    log::debug!(
        "Loaded catalog from {}: {} ships, {} pilots, {} upgrades",
        path.display(),
        catalog.ships().len(),
        catalog.pilots().len(),
        catalog.upgrades().len()
    );
    Ok(catalog)
}

/// Load a catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let file: CatalogFile = super::parse_toml(content)?;
    Ok(Catalog::new(file)?)
}

/// Load a catalog from a JSON string
pub fn parse_catalog_json(content: &str) -> Result<Catalog, ConfigError> {
    let file: CatalogFile = super::parse_json(content)?;
    Ok(Catalog::new(file)?)
}

/// The bundled starter catalog
pub fn default_catalog() -> Result<Catalog, ConfigError> {
    let toml = include_str!("../../config/catalog.toml");
    parse_catalog(toml)
}
