//! Product catalog models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::asset::RemoteAsset;
use super::catalog::{Keyword, ProductField, Size, Variant};

/// Product record as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub dealer_price: Option<Decimal>,
    pub quantity: i32,
    pub published: bool,
    pub category_id: Option<i64>,
    #[serde(default)]
    pub sizes: Vec<Size>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    #[serde(default)]
    pub fields: Vec<ProductField>,
    #[serde(default)]
    pub media: Vec<RemoteAsset>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of a product create/update form. Media travels separately in the
/// multipart body, built from the form's media collection.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub dealer_price: Option<Decimal>,
    pub quantity: i32,
    pub published: bool,
    pub category_id: Option<i64>,
    pub size_ids: Vec<i64>,
    pub variant_ids: Vec<i64>,
    pub keyword_ids: Vec<i64>,
}

impl ProductDraft {
    /// Scalar multipart fields for a save request. Optional fields are
    /// omitted entirely, repeated ids use the backend's `name[]` convention.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("name".to_string(), self.name.clone()),
            ("price".to_string(), self.price.to_string()),
            ("quantity".to_string(), self.quantity.to_string()),
            (
                "published".to_string(),
                if self.published { "1" } else { "0" }.to_string(),
            ),
        ];
        if let Some(description) = &self.description {
            fields.push(("description".to_string(), description.clone()));
        }
        if let Some(discount_price) = &self.discount_price {
            fields.push(("discount_price".to_string(), discount_price.to_string()));
        }
        if let Some(dealer_price) = &self.dealer_price {
            fields.push(("dealer_price".to_string(), dealer_price.to_string()));
        }
        if let Some(category_id) = self.category_id {
            fields.push(("category_id".to_string(), category_id.to_string()));
        }
        for id in &self.size_ids {
            fields.push(("sizes[]".to_string(), id.to_string()));
        }
        for id in &self.variant_ids {
            fields.push(("variants[]".to_string(), id.to_string()));
        }
        for id in &self.keyword_ids {
            fields.push(("keywords[]".to_string(), id.to_string()));
        }
        fields
    }
}
