use crate::domain::model::PosSystem;
use crate::domain::ports::Storage;
use crate::utils::error::{EtlError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

pub const MAPPING_FILE: &str = "pos-mapping.yaml";

/// POS mapping configuration: `global.<system>.items.<slug> -> external id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PosMapping {
    #[serde(default)]
    pub global: GlobalMappings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalMappings {
    #[serde(default)]
    pub loyverse: SystemMapping,
    #[serde(default)]
    pub odoo: SystemMapping,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemMapping {
    #[serde(default)]
    pub items: BTreeMap<String, String>,
}

impl PosMapping {
    pub fn external_id(&self, system: PosSystem, slug: &str) -> Option<&str> {
        self.system(system).items.get(slug).map(String::as_str)
    }

    pub fn is_mapped(&self, system: PosSystem, slug: &str) -> bool {
        self.system(system).items.contains_key(slug)
    }

    fn system(&self, system: PosSystem) -> &SystemMapping {
        match system {
            PosSystem::Loyverse => &self.global.loyverse,
            PosSystem::Odoo => &self.global.odoo,
        }
    }
}

/// Loads the mapping file from storage. A missing or empty file degrades to
/// an empty mapping; malformed YAML is a configuration error since it would
/// poison every lookup.
pub async fn load_pos_mapping<S: Storage>(storage: &S) -> Result<PosMapping> {
    let bytes = match storage.read_file(MAPPING_FILE).await {
        Ok(bytes) => bytes,
        Err(EtlError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("POS mapping file not found: {}", MAPPING_FILE);
            return Ok(PosMapping::default());
        }
        Err(e) => return Err(e),
    };

    let mapping: Option<PosMapping> = serde_yaml::from_slice(&bytes)?;
    tracing::info!("Loaded POS mapping from {}", MAPPING_FILE);
    Ok(mapping.unwrap_or_default())
}
