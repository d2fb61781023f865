//! Server-side media asset descriptor.

use serde::{Deserialize, Serialize};

/// Asset already persisted on the backend: stable id, stable URL, and the
/// position the backend stores for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAsset {
    pub id: i64,
    pub url: String,
    pub orders: u32,
}
