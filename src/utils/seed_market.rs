use crate::structs::order_structs::BuyOrder;
use crate::utils::constants::TOKEN_CONVERSION_RATE;
use crate::utils::id_generator::IdGenerator;
use crate::utils::store::{market_is_empty, save_order, StoreResult};
use chrono::Utc;
use redis::Client;
use rust_decimal::Decimal;

pub const PLATFORM_SELLER_ID: &str = "platform";

const SEED_TOKEN_COUNTS: [u32; 8] = [1, 3, 5, 10, 10, 20, 50, 100];

pub fn seed_listings(ids: &dyn IdGenerator) -> Vec<BuyOrder> {
    let now = Utc::now();
    SEED_TOKEN_COUNTS
        .iter()
        .map(|&token_count| BuyOrder {
            id: ids.next_id(),
            token_count,
            price_per_token: TOKEN_CONVERSION_RATE,
            total_price: TOKEN_CONVERSION_RATE * Decimal::from(token_count),
            seller_id: PLATFORM_SELLER_ID.to_string(),
            created_at: now,
            is_available: true,
        })
        .collect()
}

pub async fn seed_market(cache: &Client, ids: &dyn IdGenerator) -> StoreResult<()> {
    if !market_is_empty(cache).await? {
        tracing::info!("Market already has listings. Skipping seeding.");
        return Ok(());
    }

    let listings = seed_listings(ids);
    for order in &listings {
        save_order(cache, order).await?;
    }
    tracing::info!(count = listings.len(), "seeded market listings");
    Ok(())
}
