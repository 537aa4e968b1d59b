use clap::Parser;
use menu_etl::utils::{logger, validation::Validate};
use menu_etl::{CliConfig, EtlEngine, LocalStorage, MenuPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting menu-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.data_dir.clone());
    let pipeline = MenuPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(Some(output_path)) => {
            println!("✅ Menu conversion completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Ok(None) => {
            println!("⚠️  No menu items found, nothing written");
        }
        Err(e) => {
            tracing::error!("❌ Menu conversion failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
