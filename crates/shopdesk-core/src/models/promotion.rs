//! Promotion models: coupons, offers, flash sales.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    Percent,
    Fixed,
}

/// Coupon code redeemable at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub id: i64,
    pub code: String,
    pub kind: DiscountKind,
    pub amount: Decimal,
    pub min_spend: Option<Decimal>,
    pub usage_limit: Option<u32>,
    pub used: u32,
    pub starts_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CouponDraft {
    pub code: String,
    pub kind: DiscountKind,
    pub amount: Decimal,
    pub min_spend: Option<Decimal>,
    pub usage_limit: Option<u32>,
    pub starts_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Storewide or per-product discount running for a time window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: i64,
    pub title: String,
    pub kind: DiscountKind,
    pub amount: Decimal,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub product_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfferDraft {
    pub title: String,
    pub kind: DiscountKind,
    pub amount: Decimal,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub product_ids: Vec<i64>,
}

/// Product listed in a flash sale at a fixed sale price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashSaleItem {
    pub product_id: i64,
    pub sale_price: Decimal,
}

/// Short time-boxed sale over a set of products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashSale {
    pub id: i64,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<FlashSaleItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlashSaleDraft {
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub items: Vec<FlashSaleItem>,
}
