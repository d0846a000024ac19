pub mod commission_quote;
pub mod history;
pub mod market;
pub mod order_buy;
pub mod order_sell;
pub mod refresh;
pub mod register;
pub mod team_commissions;
pub mod team_stats;
pub mod user_deposit;
pub mod user_info;
pub mod user_upi;

pub mod prelude {
    pub use super::{
        commission_quote, history, market, order_buy, order_sell, refresh, register, team_commissions,
        team_stats, user_deposit, user_info, user_upi,
    };
}
