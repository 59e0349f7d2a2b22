// JSON-backed entity catalog.
//
// Maps the known company names and the industry -> companies grouping.
// The catalog is edited out-of-band (it's a plain JSON file); this module
// only loads it and resolves names to entities.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::entity::EntityKind;

pub const CATALOG_FILE: &str = "catalog.json";

/// The on-disk catalog shape.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub companies: Vec<String>,
    pub industries: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        let catalog: Catalog = serde_json::from_str(&content)
            .with_context(|| format!("parsing catalog {}", path.display()))?;
        info!(
            companies = catalog.companies.len(),
            industries = catalog.industries.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("writing catalog {}", path.display()))?;
        Ok(())
    }

    /// Resolve a name to an entity: companies take precedence, then
    /// industries. None when the catalog knows neither.
    pub fn resolve(&self, name: &str) -> Option<EntityKind> {
        if self.companies.iter().any(|c| c == name) {
            let industry = self
                .industries
                .iter()
                .find(|(_, companies)| companies.iter().any(|c| c == name))
                .map(|(industry, _)| industry.clone());
            return Some(EntityKind::Company {
                name: name.to_string(),
                industry,
            });
        }
        self.industries.get(name).map(|companies| EntityKind::Industry {
            name: name.to_string(),
            companies: companies.clone(),
        })
    }
}
