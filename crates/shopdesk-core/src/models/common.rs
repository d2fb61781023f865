//! Shared wire types for paginated list endpoints.

use serde::{Deserialize, Serialize};

/// One page of a list endpoint, in the backend's envelope shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub per_page: u32,
    pub current_page: u32,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        let seen = u64::from(self.current_page) * u64::from(self.per_page);
        seen >= self.total.max(0) as u64
    }
}

/// Pagination parameters for list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub per_page: u32,
}

impl PageQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    pub fn to_query(self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}
