use serde::{Deserialize, Serialize};

/// A catalog entry as served by the storefront backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub cost: f64,
    /// Aggregate rating out of five.
    pub rating: u8,
    pub image: String,
    #[serde(rename = "_id")]
    pub id: String,
}
