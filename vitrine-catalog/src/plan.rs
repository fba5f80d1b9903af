use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::price::PriceCents;

/// A plan benefit. The API sends either a bare string or an object carrying
/// a `description` field (plus bookkeeping columns we ignore).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Benefit {
    Text(String),
    Structured { description: String },
}

impl Benefit {
    /// Display text, whichever shape the benefit arrived in.
    pub fn description(&self) -> &str {
        match self {
            Benefit::Text(text) => text,
            Benefit::Structured { description } => description,
        }
    }
}

/// Subscription plan belonging to a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: PriceCents,
    pub product_id: String,
    #[serde(default)]
    pub benefits: Vec<Benefit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
