//! Prints the cheapest listings for an item.
//!
//! `CSFLOAT_API_KEY=... cargo run --example listings -- "AK-47 | Redline (Field-Tested)"`

fn main() {
    let subscriber = tracing_subscriber::fmt().with_ansi(false).finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "AK-47 | Redline (Field-Tested)".to_string());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    runtime.block_on(async move {
        let client = match csfloat::ClientBuilder::from_env().and_then(|b| b.build()) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!("Creating Client: {}", e);
                return;
            }
        };

        let query = csfloat::ListingsQuery {
            sort_by: csfloat::SortBy::LowestPrice,
            limit: 5,
            ..csfloat::ListingsQuery::market_hash_name(name)
        };

        match client.get_listings(&query).await {
            Ok(listings) if listings.is_empty() => {
                tracing::warn!("No listings found");
            }
            Ok(listings) => {
                for listing in listings {
                    tracing::info!(
                        id = %listing.id,
                        float = ?listing.item.float_value,
                        "{} for {:.2}",
                        listing.item.market_hash_name,
                        listing.price as f64 / 100.0
                    );
                }
            }
            Err(e) => {
                tracing::error!("Loading Listings {:?}", e);
            }
        }
    });
}
