//! Promotion endpoints: coupons, offers, flash sales.

use anyhow::Result;

use shopdesk_core::models::{
    Coupon, CouponDraft, FlashSale, FlashSaleDraft, Offer, OfferDraft, Page, PageQuery,
};

use crate::{api_prefix, ApiClient};

impl ApiClient {
    pub async fn list_coupons(&self, page: PageQuery) -> Result<Page<Coupon>> {
        self.get(&format!("{}/coupons", api_prefix()), &page.to_query())
            .await
    }

    pub async fn create_coupon(&self, draft: &CouponDraft) -> Result<Coupon> {
        self.post_json(&format!("{}/coupons", api_prefix()), draft)
            .await
    }

    pub async fn update_coupon(&self, coupon_id: i64, draft: &CouponDraft) -> Result<Coupon> {
        self.put_json(&format!("{}/coupons/{}", api_prefix(), coupon_id), draft)
            .await
    }

    pub async fn delete_coupon(&self, coupon_id: i64) -> Result<()> {
        self.delete(&format!("{}/coupons/{}", api_prefix(), coupon_id))
            .await
    }

    pub async fn list_offers(&self, page: PageQuery) -> Result<Page<Offer>> {
        self.get(&format!("{}/offers", api_prefix()), &page.to_query())
            .await
    }

    pub async fn create_offer(&self, draft: &OfferDraft) -> Result<Offer> {
        self.post_json(&format!("{}/offers", api_prefix()), draft)
            .await
    }

    pub async fn update_offer(&self, offer_id: i64, draft: &OfferDraft) -> Result<Offer> {
        self.put_json(&format!("{}/offers/{}", api_prefix(), offer_id), draft)
            .await
    }

    pub async fn delete_offer(&self, offer_id: i64) -> Result<()> {
        self.delete(&format!("{}/offers/{}", api_prefix(), offer_id))
            .await
    }

    pub async fn list_flash_sales(&self, page: PageQuery) -> Result<Page<FlashSale>> {
        self.get(&format!("{}/flash-sales", api_prefix()), &page.to_query())
            .await
    }

    pub async fn create_flash_sale(&self, draft: &FlashSaleDraft) -> Result<FlashSale> {
        self.post_json(&format!("{}/flash-sales", api_prefix()), draft)
            .await
    }

    pub async fn update_flash_sale(
        &self,
        flash_sale_id: i64,
        draft: &FlashSaleDraft,
    ) -> Result<FlashSale> {
        self.put_json(
            &format!("{}/flash-sales/{}", api_prefix(), flash_sale_id),
            draft,
        )
        .await
    }

    pub async fn delete_flash_sale(&self, flash_sale_id: i64) -> Result<()> {
        self.delete(&format!("{}/flash-sales/{}", api_prefix(), flash_sale_id))
            .await
    }
}
