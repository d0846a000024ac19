use crate::utils::constants::RECENT_COMMISSIONS_LIMIT;
use crate::utils::limited_list::LimitedList;
use crate::utils::money::round2;
use crate::utils::process_commission::Commission;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TeamStats {
    pub level1_count: usize,
    pub level2_count: usize,
    pub today_earnings: Decimal,
    pub total_earnings: Decimal,
    pub recent_commissions: Vec<Commission>,
}

/// Aggregates the ledger entries paid to `user_id`. Entries addressed to other
/// users are ignored; `today` is a UTC calendar day.
pub fn build_team_stats(
    commissions: &[Commission],
    user_id: &str,
    level1_count: usize,
    level2_count: usize,
    today: NaiveDate,
) -> TeamStats {
    let mut mine: Vec<&Commission> = commissions.iter().filter(|c| c.to_user_id == user_id).collect();
    mine.sort_by_key(|c| c.created_at);

    let mut recent = LimitedList::new(RECENT_COMMISSIONS_LIMIT);
    let mut today_earnings = Decimal::ZERO;
    let mut total_earnings = Decimal::ZERO;

    for commission in mine {
        total_earnings += commission.amount;
        if commission.created_at.date_naive() == today {
            today_earnings += commission.amount;
        }
        recent.add(commission.clone());
    }

    TeamStats {
        level1_count,
        level2_count,
        today_earnings: round2(today_earnings),
        total_earnings: round2(total_earnings),
        recent_commissions: recent.newest_first(),
    }
}
