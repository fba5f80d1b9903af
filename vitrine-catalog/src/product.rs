use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::price::PriceCents;

/// Named add-on a product can carry (extra Wi-Fi point, static IP, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: PriceCents,
    #[serde(default)]
    pub description: String,
}

/// Catalog product as the provisioning API returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// List price shown when the product has no plans.
    #[serde(default)]
    pub price: PriceCents,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ProductOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
