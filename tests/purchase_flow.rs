use chrono::Utc;
use crypto_trade::structs::order_structs::{BuyOrder, TransactionType};
use crypto_trade::structs::user_structs::UserRecord;
use crypto_trade::utils::id_generator::IdGenerator;
use crypto_trade::utils::process_commission::CommissionLevel;
use crypto_trade::utils::purchase::{complete_purchase, PurchaseError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicU64, Ordering};

struct SequenceIds {
    prefix: &'static str,
    next: AtomicU64,
}

impl SequenceIds {
    fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequenceIds {
    fn next_id(&self) -> String {
        format!("{}-{}", self.prefix, self.next.fetch_add(1, Ordering::Relaxed))
    }
}

fn user(id: &str, referred_by: Option<&str>, balance: Decimal) -> UserRecord {
    let mut user = UserRecord::new(
        id.into(),
        format!("User {id}"),
        format!("{id}@example.com"),
        "9876543210".into(),
        id.to_uppercase(),
        referred_by.map(str::to_string),
    );
    user.balance = balance;
    user
}

fn veteran(id: &str, referred_by: Option<&str>, balance: Decimal) -> UserRecord {
    let mut user = user(id, referred_by, balance);
    user.claim_newbie_reward();
    user
}

fn listing(id: &str, token_count: u32) -> BuyOrder {
    BuyOrder {
        id: id.into(),
        token_count,
        price_per_token: dec!(100),
        total_price: dec!(100) * Decimal::from(token_count),
        seller_id: "platform".into(),
        created_at: Utc::now(),
        is_available: true,
    }
}

#[test]
fn newbie_pays_discounted_price_while_referrers_earn_on_full_price() {
    let comm_ids = SequenceIds::new("comm");
    let tx_ids = SequenceIds::new("txn");
    let level2 = veteran("grand", None, dec!(5));
    let level1 = veteran("parent", Some("grand"), dec!(0));
    let buyer = user("buyer", Some("parent"), dec!(2000));
    let order = listing("order-1", 20);

    let outcome = complete_purchase(&comm_ids, &tx_ids, &buyer, &order, Some(&level1), Some(&level2)).unwrap();

    assert_eq!(outcome.final_price, dec!(1650));
    assert_eq!(outcome.discount, dec!(350));
    assert_eq!(outcome.breakdown.total, dec!(54));
    assert_eq!(outcome.breakdown.level1_amount, dec!(36));
    assert_eq!(outcome.breakdown.level2_amount, dec!(12));
    assert_eq!(outcome.breakdown.platform_amount, dec!(6));

    assert_eq!(outcome.buyer.balance, dec!(350));
    assert_eq!(outcome.buyer.token_balance, 20);
    assert!(outcome.buyer.newbie_reward_claimed);
    assert!(!outcome.buyer.is_newbie);
    assert!(!outcome.order.is_available);

    assert_eq!(outcome.commissions.len(), 2);
    assert_eq!(outcome.commissions[0].id, "comm-1");
    assert_eq!(outcome.commissions[0].level, CommissionLevel::One);
    assert_eq!(outcome.commissions[0].to_user_id, "parent");
    assert_eq!(outcome.commissions[1].level, CommissionLevel::Two);
    assert_eq!(outcome.commissions[1].to_user_id, "grand");

    let balances: Vec<(&str, Decimal)> = outcome
        .credited_referrers
        .iter()
        .map(|u| (u.id.as_str(), u.balance))
        .collect();
    assert_eq!(balances, vec![("parent", dec!(36)), ("grand", dec!(17))]);

    let kinds: Vec<(&str, TransactionType, Decimal)> = outcome
        .transactions
        .iter()
        .map(|t| (t.user_id.as_str(), t.transaction.tx_type, t.transaction.amount))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("buyer", TransactionType::Buy, dec!(1650)),
            ("buyer", TransactionType::Reward, dec!(350)),
            ("parent", TransactionType::Commission, dec!(36)),
            ("grand", TransactionType::Commission, dec!(12)),
        ]
    );
    assert_eq!(outcome.transactions[2].transaction.reference_id.as_deref(), Some("comm-1"));
}

#[test]
fn reward_is_consumed_by_the_first_purchase_only() {
    let comm_ids = SequenceIds::new("comm");
    let tx_ids = SequenceIds::new("txn");
    let buyer = user("buyer", None, dec!(5000));

    let first = complete_purchase(&comm_ids, &tx_ids, &buyer, &listing("order-1", 10), None, None).unwrap();
    assert_eq!(first.final_price, dec!(650));

    let second = complete_purchase(&comm_ids, &tx_ids, &first.buyer, &listing("order-2", 10), None, None).unwrap();
    assert_eq!(second.final_price, dec!(1000));
    assert_eq!(second.discount, Decimal::ZERO);
    assert_eq!(second.buyer.balance, dec!(3350));
    assert_eq!(second.buyer.token_balance, 20);
    assert!(second
        .transactions
        .iter()
        .all(|t| t.transaction.tx_type != TransactionType::Reward));
}

#[test]
fn small_order_only_pays_level1_above_threshold() {
    let comm_ids = SequenceIds::new("comm");
    let tx_ids = SequenceIds::new("txn");
    let level2 = veteran("grand", None, dec!(0));
    let level1 = veteran("parent", Some("grand"), dec!(0));
    let buyer = veteran("buyer", Some("parent"), dec!(1000));

    let outcome =
        complete_purchase(&comm_ids, &tx_ids, &buyer, &listing("order-1", 10), Some(&level1), Some(&level2)).unwrap();

    assert_eq!(outcome.breakdown.level2_amount, dec!(6));
    assert_eq!(outcome.commissions.len(), 1);
    assert_eq!(outcome.commissions[0].amount, dec!(18));
    assert_eq!(outcome.credited_referrers.len(), 1);
    assert_eq!(outcome.credited_referrers[0].id, "parent");
    assert_eq!(outcome.buyer.balance, Decimal::ZERO);
}

#[test]
fn unreferred_buyer_leaves_everything_to_the_platform() {
    let comm_ids = SequenceIds::new("comm");
    let tx_ids = SequenceIds::new("txn");
    let buyer = veteran("buyer", None, dec!(1000));

    let outcome = complete_purchase(&comm_ids, &tx_ids, &buyer, &listing("order-1", 10), None, None).unwrap();

    assert_eq!(outcome.breakdown.platform_amount, dec!(27));
    assert!(outcome.commissions.is_empty());
    assert!(outcome.credited_referrers.is_empty());
    assert_eq!(outcome.transactions.len(), 1);
}

#[test]
fn discount_larger_than_price_makes_order_free() {
    let comm_ids = SequenceIds::new("comm");
    let tx_ids = SequenceIds::new("txn");
    let buyer = user("buyer", None, dec!(0));

    let outcome = complete_purchase(&comm_ids, &tx_ids, &buyer, &listing("order-1", 2), None, None).unwrap();

    assert_eq!(outcome.final_price, Decimal::ZERO);
    assert_eq!(outcome.discount, dec!(200));
    assert_eq!(outcome.buyer.token_balance, 2);
    assert!(outcome.buyer.newbie_reward_claimed);
}

#[test]
fn balance_is_checked_against_discounted_price() {
    let comm_ids = SequenceIds::new("comm");
    let tx_ids = SequenceIds::new("txn");
    let order = listing("order-1", 10);

    let short = user("buyer", None, dec!(649.99));
    assert_eq!(
        complete_purchase(&comm_ids, &tx_ids, &short, &order, None, None).unwrap_err(),
        PurchaseError::InsufficientBalance {
            required: dec!(650),
            available: dec!(649.99),
        }
    );

    let exact = user("buyer", None, dec!(650));
    let outcome = complete_purchase(&comm_ids, &tx_ids, &exact, &order, None, None).unwrap();
    assert_eq!(outcome.buyer.balance, Decimal::ZERO);
}

#[test]
fn rejects_unavailable_own_and_empty_orders() {
    let comm_ids = SequenceIds::new("comm");
    let tx_ids = SequenceIds::new("txn");
    let buyer = veteran("buyer", None, dec!(10000));

    let mut sold = listing("order-1", 10);
    sold.is_available = false;
    assert_eq!(
        complete_purchase(&comm_ids, &tx_ids, &buyer, &sold, None, None).unwrap_err(),
        PurchaseError::OrderUnavailable
    );

    let mut own = listing("order-2", 10);
    own.seller_id = "buyer".into();
    assert_eq!(
        complete_purchase(&comm_ids, &tx_ids, &buyer, &own, None, None).unwrap_err(),
        PurchaseError::OwnOrder
    );

    let empty = listing("order-3", 0);
    assert_eq!(
        complete_purchase(&comm_ids, &tx_ids, &buyer, &empty, None, None).unwrap_err(),
        PurchaseError::InvalidTokenCount {
            count: 0,
            min: 1,
            max: 10_000,
        }
    );
}
