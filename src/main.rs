use anyhow::Context;
use clap::Parser;
use small_cart::utils::{logger, validation::Validate};
use small_cart::{
    AddOutcome, CliConfig, ConfigProvider, HttpCatalogClient, ItemSpec, ShoppingCart, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting small-cart");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    match &config.config {
        Some(path) => {
            let file_config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file {}", path))?;
            let merged = config.overlay(file_config);
            merged
                .validate()
                .context("invalid configuration after applying command line flags")?;
            let items = merged.items.clone();
            run(&merged, items).await
        }
        None => run(&config, config.items.clone()).await,
    }
}

async fn run<P: ConfigProvider>(provider: &P, mut items: Vec<ItemSpec>) -> anyhow::Result<()> {
    if items.is_empty() {
        tracing::info!("No items given, using the sample basket");
        items = vec![ItemSpec::new("cornflakes", 2), ItemSpec::new("weetabix", 1)];
    }

    let catalog =
        HttpCatalogClient::from_config(provider).context("failed to build catalog client")?;
    let mut cart = ShoppingCart::with_currency_symbol(catalog, provider.currency_symbol());

    // Adds are awaited one at a time so merges see the previous item.
    for item in &items {
        match cart.add_item(&item.product_id, item.quantity).await {
            Ok(AddOutcome::Skipped(reason)) => {
                tracing::warn!("Skipped {} ({:?})", item.product_id, reason);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Could not add {}: {}", item.product_id, e);
                eprintln!("❌ {}", e);
                eprintln!("💡 {}", e.recovery_suggestion());
            }
        }
    }

    let stdout = std::io::stdout();
    cart.display_cart(&mut stdout.lock())
        .context("failed to print cart")?;

    Ok(())
}
