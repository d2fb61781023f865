//! Product endpoints.

use anyhow::Result;

use shopdesk_core::media::SavePayload;
use shopdesk_core::models::{Page, PageQuery, Product, ProductDraft};

use crate::forms::save_form;
use crate::{api_prefix, ApiClient};

impl ApiClient {
    /// List products with pagination and an optional name search.
    pub async fn list_products(
        &self,
        page: PageQuery,
        search: Option<&str>,
    ) -> Result<Page<Product>> {
        let mut query = page.to_query();
        if let Some(term) = search {
            query.push(("search", term.to_string()));
        }
        self.get(&format!("{}/products", api_prefix()), &query).await
    }

    pub async fn get_product(&self, product_id: i64) -> Result<Product> {
        self.get(&format!("{}/products/{}", api_prefix(), product_id), &[])
            .await
    }

    /// Create a product from its form fields and media payload.
    pub async fn create_product(
        &self,
        draft: &ProductDraft,
        media: &SavePayload,
    ) -> Result<Product> {
        let form = save_form(&draft.form_fields(), media)?;
        self.post_multipart(&format!("{}/products", api_prefix()), form)
            .await
    }

    /// Update a product, persisting the media grid's new sequence along with
    /// any uploads and removals.
    pub async fn update_product(
        &self,
        product_id: i64,
        draft: &ProductDraft,
        media: &SavePayload,
    ) -> Result<Product> {
        let form = save_form(&draft.form_fields(), media)?;
        self.post_multipart_update(&format!("{}/products/{}", api_prefix(), product_id), form)
            .await
    }

    pub async fn delete_product(&self, product_id: i64) -> Result<()> {
        self.delete(&format!("{}/products/{}", api_prefix(), product_id))
            .await
    }
}
