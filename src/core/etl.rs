use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the conversion end to end. Returns the combined output path, or
    /// None when the content tree held no valid menu items (nothing written).
    pub async fn run(&self) -> Result<Option<String>> {
        tracing::info!("Starting menu conversion process...");

        let items = self.pipeline.extract().await?;
        if items.is_empty() {
            tracing::warn!("No menu items found");
            return Ok(None);
        }
        tracing::info!("Extracted {} menu items", items.len());

        let result = self.pipeline.transform(items).await?;
        tracing::info!(
            "Transformed {} loyverse and {} odoo records",
            result.catalog.loyverse.len(),
            result.catalog.odoo.len()
        );

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Menu conversion completed successfully");

        Ok(Some(output_path))
    }
}
