//! Catalog vocabulary endpoints: sizes, variants, categories, keywords,
//! product fields. Small unpaginated lists.

use anyhow::Result;

use shopdesk_core::models::{
    CatalogDraft, Category, CategoryDraft, Keyword, ProductField, Size, Variant,
};

use crate::{api_prefix, ApiClient};

impl ApiClient {
    pub async fn list_sizes(&self) -> Result<Vec<Size>> {
        self.get(&format!("{}/sizes", api_prefix()), &[]).await
    }

    pub async fn create_size(&self, name: &str) -> Result<Size> {
        let draft = CatalogDraft {
            name: name.to_string(),
        };
        self.post_json(&format!("{}/sizes", api_prefix()), &draft)
            .await
    }

    pub async fn delete_size(&self, size_id: i64) -> Result<()> {
        self.delete(&format!("{}/sizes/{}", api_prefix(), size_id))
            .await
    }

    pub async fn list_variants(&self) -> Result<Vec<Variant>> {
        self.get(&format!("{}/variants", api_prefix()), &[]).await
    }

    pub async fn create_variant(&self, name: &str) -> Result<Variant> {
        let draft = CatalogDraft {
            name: name.to_string(),
        };
        self.post_json(&format!("{}/variants", api_prefix()), &draft)
            .await
    }

    pub async fn delete_variant(&self, variant_id: i64) -> Result<()> {
        self.delete(&format!("{}/variants/{}", api_prefix(), variant_id))
            .await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.get(&format!("{}/categories", api_prefix()), &[]).await
    }

    pub async fn create_category(&self, name: &str, parent_id: Option<i64>) -> Result<Category> {
        let draft = CategoryDraft {
            name: name.to_string(),
            parent_id,
        };
        self.post_json(&format!("{}/categories", api_prefix()), &draft)
            .await
    }

    pub async fn delete_category(&self, category_id: i64) -> Result<()> {
        self.delete(&format!("{}/categories/{}", api_prefix(), category_id))
            .await
    }

    pub async fn list_keywords(&self) -> Result<Vec<Keyword>> {
        self.get(&format!("{}/keywords", api_prefix()), &[]).await
    }

    pub async fn create_keyword(&self, name: &str) -> Result<Keyword> {
        let draft = CatalogDraft {
            name: name.to_string(),
        };
        self.post_json(&format!("{}/keywords", api_prefix()), &draft)
            .await
    }

    pub async fn delete_keyword(&self, keyword_id: i64) -> Result<()> {
        self.delete(&format!("{}/keywords/{}", api_prefix(), keyword_id))
            .await
    }

    pub async fn list_product_fields(&self) -> Result<Vec<ProductField>> {
        self.get(&format!("{}/product-fields", api_prefix()), &[])
            .await
    }

    pub async fn create_product_field(&self, name: &str) -> Result<ProductField> {
        let draft = CatalogDraft {
            name: name.to_string(),
        };
        self.post_json(&format!("{}/product-fields", api_prefix()), &draft)
            .await
    }

    pub async fn delete_product_field(&self, field_id: i64) -> Result<()> {
        self.delete(&format!("{}/product-fields/{}", api_prefix(), field_id))
            .await
    }
}
