pub mod commission_calculator;
pub mod config;
pub mod constants;
pub mod deposit;
pub mod id_generator;
pub mod jwt;
pub mod limited_list;
pub mod logging;
pub mod money;
pub mod newbie_discount;
pub mod process_commission;
pub mod purchase;
pub mod referral_code;
pub mod response;
pub mod seed_market;
pub mod sell;
pub mod store;
pub mod team_stats;
pub mod validators;
