use crate::core::{mapping, pos, report, scanner, ConfigProvider, Pipeline, Storage};
use crate::domain::model::{MenuItem, TransformResult};
use crate::utils::error::Result;
use std::path::Path;

pub const COMBINED_YAML_FILE: &str = "pos-menu-data.yaml";
pub const COMBINED_JSON_FILE: &str = "pos-menu-data.json";
pub const LOYVERSE_FILE: &str = "pos-menu-loyverse.yaml";
pub const ODOO_FILE: &str = "pos-menu-odoo.yaml";

const PRIOR_MENU_FILE: &str = "menudata.yaml";

pub struct MenuPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MenuPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    // Prior run output is read for parity with the site build but feeds
    // nothing downstream.
    async fn load_prior_menu_data(&self) {
        match self.storage.read_file(PRIOR_MENU_FILE).await {
            Ok(bytes) => match serde_yaml::from_slice::<Option<serde_yaml::Value>>(&bytes) {
                Ok(_) => tracing::info!("Loaded existing menu data from {}", PRIOR_MENU_FILE),
                Err(e) => tracing::warn!("Ignoring unreadable {}: {}", PRIOR_MENU_FILE, e),
            },
            Err(_) => tracing::debug!("No existing menu data at {}", PRIOR_MENU_FILE),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MenuPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<MenuItem>> {
        self.load_prior_menu_data().await;

        let items = scanner::scan_menu_items(Path::new(self.config.content_dir()))?;
        Ok(items.into_values().collect())
    }

    async fn transform(&self, items: Vec<MenuItem>) -> Result<TransformResult> {
        let mapping = mapping::load_pos_mapping(&self.storage).await?;

        let catalog = pos::to_pos_catalog(&items, &mapping);
        let report_markdown = report::render_mapping_report(&items, &mapping);

        Ok(TransformResult {
            catalog,
            report_markdown,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let yaml = serde_yaml::to_string(&result.catalog)?;
        self.storage
            .write_file(COMBINED_YAML_FILE, yaml.as_bytes())
            .await?;
        tracing::info!("Saved POS menu data to {}", COMBINED_YAML_FILE);

        let json = serde_json::to_string_pretty(&result.catalog)?;
        self.storage
            .write_file(COMBINED_JSON_FILE, json.as_bytes())
            .await?;
        tracing::info!("Saved POS menu data to {}", COMBINED_JSON_FILE);

        let loyverse_yaml = serde_yaml::to_string(&result.catalog.loyverse)?;
        self.storage
            .write_file(LOYVERSE_FILE, loyverse_yaml.as_bytes())
            .await?;
        tracing::info!("Saved loyverse menu data to {}", LOYVERSE_FILE);

        let odoo_yaml = serde_yaml::to_string(&result.catalog.odoo)?;
        self.storage
            .write_file(ODOO_FILE, odoo_yaml.as_bytes())
            .await?;
        tracing::info!("Saved odoo menu data to {}", ODOO_FILE);

        self.storage
            .write_file(report::REPORT_FILE, result.report_markdown.as_bytes())
            .await?;
        tracing::info!("Generated mapping report: {}", report::REPORT_FILE);

        Ok(format!("{}/{}", self.config.data_dir(), COMBINED_YAML_FILE))
    }
}
