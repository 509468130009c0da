use beer_stock::{setup_tracing, BeerDto, BeerType, StockConfig, StockError, StockSystem};
use tracing::{error, info, warn, Instrument};

/// Runs a short restocking session against a fresh in-memory store and
/// prints the resulting catalog.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = StockConfig::from_env()?;
    setup_tracing(&config.log_filter);

    info!(store_buffer = config.store_buffer, "Starting beer stock");

    let system = StockSystem::new(&config);
    let service = &system.stock_service;

    let span = tracing::info_span!("catalog_setup");
    let brahma = async {
        info!("Registering beers");
        let brahma = service
            .create(BeerDto::new("Brahma", "Ambev", 50, 10, BeerType::Lager))
            .await?;
        service
            .create(BeerDto::new("Colorado Indica", "Colorado", 30, 5, BeerType::Ipa))
            .await?;
        Ok::<_, StockError>(brahma)
    }
    .instrument(span)
    .await?;

    match service
        .create(BeerDto::new("Brahma", "Ambev", 50, 0, BeerType::Lager))
        .await
    {
        Ok(_) => error!("Duplicate beer accepted"),
        Err(e) => warn!(error = %e, "Duplicate registration refused (expected)"),
    }

    let brahma_id = brahma.id.ok_or("store did not assign an id")?;

    let span = tracing::info_span!("restocking");
    async {
        for amount in [10, 80] {
            match service.increment(brahma_id, amount).await {
                Ok(beer) => info!(amount, quantity = beer.quantity, "Restocked"),
                Err(e) => warn!(amount, error = %e, "Restock refused"),
            }
        }
    }
    .instrument(span)
    .await;

    if let Err(e) = service.find_by_name("Skol").await {
        warn!(error = %e, "Lookup failed (expected)");
    }

    let catalog = service.list_all().await?;
    info!(beer_count = catalog.len(), "Final catalog");
    println!("{}", serde_json::to_string_pretty(&catalog)?);

    system.shutdown().await?;

    info!("Beer stock completed successfully");
    Ok(())
}
