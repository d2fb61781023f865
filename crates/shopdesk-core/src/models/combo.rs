//! Combo (bundle) product models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::asset::RemoteAsset;

/// Bundle of products sold under one listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboProduct {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub published: bool,
    #[serde(default)]
    pub product_ids: Vec<i64>,
    #[serde(default)]
    pub media: Vec<RemoteAsset>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of a combo create/update form.
#[derive(Debug, Clone, Default)]
pub struct ComboDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub published: bool,
    pub product_ids: Vec<i64>,
}

impl ComboDraft {
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("name".to_string(), self.name.clone()),
            ("price".to_string(), self.price.to_string()),
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
        for id in &self.product_ids {
            fields.push(("products[]".to_string(), id.to_string()));
        }
        fields
    }
}
