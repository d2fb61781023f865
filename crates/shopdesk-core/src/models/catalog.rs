//! Small catalog vocabularies: sizes, variants, categories, keywords, and
//! free-form product fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: i64,
    pub name: String,
}

/// Named attribute attached to products (e.g. "Material").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductField {
    pub id: i64,
    pub name: String,
}

/// Create/update body shared by the name-only vocabularies.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogDraft {
    pub name: String,
}

/// Create/update body for categories (may nest one level).
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub parent_id: Option<i64>,
}
