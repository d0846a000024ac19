use crate::structs::order_structs::{BuyOrder, HistoryKind, Transaction};
use crate::structs::user_structs::{UpiConfig, UserRecord};
use crate::traits::redis::Json;
use crate::utils::process_commission::Commission;
use crate::utils::purchase::PurchaseOutcome;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use serde::Serialize;
use std::error::Error;

pub type StoreResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

pub const MARKET_ORDERS: &str = "market:orders";

pub fn user_key(user_id: &str) -> String {
    format!("user:{user_id}")
}

pub fn referral_code_key(code: &str) -> String {
    format!("user_by_code:{code}")
}

pub fn referrals_key(user_id: &str) -> String {
    format!("referrals:{user_id}")
}

pub fn upi_key(user_id: &str) -> String {
    format!("upi:{user_id}")
}

pub fn commissions_key(user_id: &str) -> String {
    format!("commissions:{user_id}")
}

pub fn order_commissions_key(order_id: &str) -> String {
    format!("commissions:order:{order_id}")
}

pub fn history_key(kind: HistoryKind, user_id: &str) -> String {
    format!("history:{}:{user_id}", kind.as_str())
}

fn to_json<T: Serialize>(value: &T) -> StoreResult<String> {
    Ok(serde_json::to_string(value)?)
}

async fn connection(cache: &Client) -> StoreResult<MultiplexedConnection> {
    Ok(cache.get_multiplexed_async_connection().await?)
}

pub async fn get_user(cache: &Client, user_id: &str) -> StoreResult<Option<UserRecord>> {
    let mut conn = connection(cache).await?;
    let user: Option<Json<UserRecord>> = conn.get(user_key(user_id)).await?;
    Ok(user.map(Json::into_inner))
}

pub async fn find_user_by_referral_code(cache: &Client, code: &str) -> StoreResult<Option<UserRecord>> {
    let mut conn = connection(cache).await?;
    let user_id: Option<String> = conn.get(referral_code_key(code)).await?;
    match user_id {
        Some(id) => get_user(cache, &id).await,
        None => Ok(None),
    }
}

/// Claims `user.referral_code` for `user`; `false` when the code is already taken.
pub async fn reserve_referral_code(cache: &Client, user: &UserRecord) -> StoreResult<bool> {
    let mut conn = connection(cache).await?;
    Ok(conn.set_nx(referral_code_key(&user.referral_code), &user.id).await?)
}

/// Stores a freshly registered user and links them under their referrer.
pub async fn insert_user(cache: &Client, user: &UserRecord) -> StoreResult<()> {
    let mut conn = connection(cache).await?;
    let mut pipe = redis::pipe();
    pipe.atomic().set(user_key(&user.id), to_json(user)?).ignore();
    if let Some(referrer) = &user.referred_by {
        pipe.sadd(referrals_key(referrer), &user.id).ignore();
    }
    let _: () = pipe.query_async(&mut conn).await?;
    Ok(())
}

/// The buyer's level-1 referrer and that referrer's own referrer.
pub async fn load_referrers(
    cache: &Client,
    buyer: &UserRecord,
) -> StoreResult<(Option<UserRecord>, Option<UserRecord>)> {
    let Some(level1_id) = &buyer.referred_by else {
        return Ok((None, None));
    };
    let Some(level1) = get_user(cache, level1_id).await? else {
        tracing::warn!(buyer_id = %buyer.id, referrer_id = %level1_id, "referrer record missing");
        return Ok((None, None));
    };
    let level2 = match &level1.referred_by {
        Some(level2_id) => get_user(cache, level2_id).await?,
        None => None,
    };
    Ok((Some(level1), level2))
}

/// Direct referees and the referees of those.
pub async fn team_counts(cache: &Client, user_id: &str) -> StoreResult<(usize, usize)> {
    let mut conn = connection(cache).await?;
    let direct: Vec<String> = conn.smembers(referrals_key(user_id)).await?;
    let mut indirect = 0;
    for referee in &direct {
        let count: usize = conn.scard(referrals_key(referee)).await?;
        indirect += count;
    }
    Ok((direct.len(), indirect))
}

pub async fn get_upi(cache: &Client, user_id: &str) -> StoreResult<Option<UpiConfig>> {
    let mut conn = connection(cache).await?;
    let upi: Option<Json<UpiConfig>> = conn.get(upi_key(user_id)).await?;
    Ok(upi.map(Json::into_inner))
}

pub async fn save_upi(cache: &Client, user_id: &str, upi: &UpiConfig) -> StoreResult<()> {
    let mut conn = connection(cache).await?;
    let _: () = conn.set(upi_key(user_id), to_json(upi)?).await?;
    Ok(())
}

pub async fn market_is_empty(cache: &Client) -> StoreResult<bool> {
    let mut conn = connection(cache).await?;
    let len: usize = conn.hlen(MARKET_ORDERS).await?;
    Ok(len == 0)
}

pub async fn save_order(cache: &Client, order: &BuyOrder) -> StoreResult<()> {
    let mut conn = connection(cache).await?;
    let _: () = conn.hset(MARKET_ORDERS, &order.id, to_json(order)?).await?;
    Ok(())
}

pub async fn get_order(cache: &Client, order_id: &str) -> StoreResult<Option<BuyOrder>> {
    let mut conn = connection(cache).await?;
    let order: Option<Json<BuyOrder>> = conn.hget(MARKET_ORDERS, order_id).await?;
    Ok(order.map(Json::into_inner))
}

/// Listings still open for purchase, oldest first.
pub async fn available_orders(cache: &Client) -> StoreResult<Vec<BuyOrder>> {
    let mut conn = connection(cache).await?;
    let orders: Vec<Json<BuyOrder>> = conn.hvals(MARKET_ORDERS).await?;
    let mut orders: Vec<BuyOrder> = orders
        .into_iter()
        .map(Json::into_inner)
        .filter(|o| o.is_available)
        .collect();
    orders.sort_by_key(|o| o.created_at);
    Ok(orders)
}

pub async fn commissions_for(cache: &Client, user_id: &str) -> StoreResult<Vec<Commission>> {
    let mut conn = connection(cache).await?;
    let entries: Vec<Json<Commission>> = conn.lrange(commissions_key(user_id), 0, -1).await?;
    Ok(entries.into_iter().map(Json::into_inner).collect())
}

/// Newest first.
pub async fn history(cache: &Client, kind: HistoryKind, user_id: &str) -> StoreResult<Vec<Transaction>> {
    let mut conn = connection(cache).await?;
    let entries: Vec<Json<Transaction>> = conn.lrange(history_key(kind, user_id), 0, -1).await?;
    Ok(entries.into_iter().map(Json::into_inner).collect())
}

/// Writes every record a completed purchase touches in one MULTI/EXEC.
pub async fn save_purchase(cache: &Client, outcome: &PurchaseOutcome) -> StoreResult<()> {
    let mut conn = connection(cache).await?;
    let mut pipe = redis::pipe();
    pipe.atomic();

    pipe.set(user_key(&outcome.buyer.id), to_json(&outcome.buyer)?).ignore();
    pipe.hset(MARKET_ORDERS, &outcome.order.id, to_json(&outcome.order)?).ignore();
    for referrer in &outcome.credited_referrers {
        pipe.set(user_key(&referrer.id), to_json(referrer)?).ignore();
    }
    for commission in &outcome.commissions {
        let entry = to_json(commission)?;
        pipe.lpush(commissions_key(&commission.to_user_id), &entry).ignore();
        pipe.rpush(order_commissions_key(&commission.order_id), &entry).ignore();
    }
    for posting in &outcome.transactions {
        let kind = HistoryKind::for_transaction(posting.transaction.tx_type);
        pipe.lpush(history_key(kind, &posting.user_id), to_json(&posting.transaction)?).ignore();
    }

    let _: () = pipe.query_async(&mut conn).await?;
    Ok(())
}

pub async fn save_user_with_transaction(cache: &Client, user: &UserRecord, tx: &Transaction) -> StoreResult<()> {
    let mut conn = connection(cache).await?;
    let kind = HistoryKind::for_transaction(tx.tx_type);
    let _: () = redis::pipe()
        .atomic()
        .set(user_key(&user.id), to_json(user)?)
        .ignore()
        .lpush(history_key(kind, &user.id), to_json(tx)?)
        .ignore()
        .query_async(&mut conn)
        .await?;
    Ok(())
}
