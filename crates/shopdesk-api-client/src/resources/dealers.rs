//! Dealer endpoints.

use anyhow::Result;
use rust_decimal::Decimal;

use shopdesk_core::models::{Dealer, DealerRateUpdate, Page, PageQuery};

use crate::{api_prefix, ApiClient};

impl ApiClient {
    pub async fn list_dealers(&self, page: PageQuery) -> Result<Page<Dealer>> {
        self.get(&format!("{}/dealers", api_prefix()), &page.to_query())
            .await
    }

    pub async fn get_dealer(&self, dealer_id: i64) -> Result<Dealer> {
        self.get(&format!("{}/dealers/{}", api_prefix(), dealer_id), &[])
            .await
    }

    /// Update a dealer's negotiated rate.
    pub async fn update_dealer_rate(&self, dealer_id: i64, rate: Decimal) -> Result<Dealer> {
        let body = DealerRateUpdate { rate };
        self.put_json(&format!("{}/dealers/{}", api_prefix(), dealer_id), &body)
            .await
    }
}
