use crate::structs::order_structs::BuyOrder;
use crate::utils::commission_calculator::{calculate_commission, CommissionBreakdown};
use crate::utils::constants::NEWBIE_REWARD_AMOUNT;
use crate::utils::jwt::AccessToken;
use crate::utils::newbie_discount::apply_newbie_discount;
use crate::utils::response::CommonResponse;
use crate::utils::store::{available_orders, get_user, load_referrers};
use crate::{extract_or_http_err_with_opt_msg, try_or_http_err, AppState};
use actix_web::{get, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::Serialize;

/// Open listings, each priced for the caller: commission on the full price
/// and what the caller would pay after the newbie rule.
#[utoipa::path(
    tag = "Market",
    security(
        ("bearer_token" = [])
    )
)]
#[get("/api/v1/market/orders")]
pub async fn market_orders(
    state: web::Data<AppState>,
    token: AccessToken,
) -> impl Responder {
    let buyer = extract_or_http_err_with_opt_msg!(get_user(&state.cache, token.user_id()).await, "No user");
    let (level1, level2) = try_or_http_err!(load_referrers(&state.cache, &buyer).await);
    let orders = try_or_http_err!(available_orders(&state.cache).await);

    let data: Vec<MarketOrder> = orders
        .into_iter()
        .map(|order| MarketOrder {
            commission: calculate_commission(
                order.total_price,
                level1.as_ref().map(|u| u.id.as_str()),
                level2.as_ref().map(|u| u.id.as_str()),
            ),
            final_price: apply_newbie_discount(
                order.total_price,
                NEWBIE_REWARD_AMOUNT,
                buyer.is_newbie,
                buyer.newbie_reward_claimed,
            ),
            order,
        })
        .collect();

    HttpResponse::Ok().json(CommonResponse::ok(data))
}

#[derive(Serialize)]
pub struct MarketOrder {
    #[serde(flatten)]
    order: BuyOrder,
    commission: CommissionBreakdown,
    final_price: Decimal,
}
