//! Dealer models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wholesale buyer with a negotiated rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dealer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Percentage applied to dealer pricing
    pub rate: Decimal,
    pub active: bool,
}

/// Body of a dealer rate update.
#[derive(Debug, Clone, Serialize)]
pub struct DealerRateUpdate {
    pub rate: Decimal,
}
