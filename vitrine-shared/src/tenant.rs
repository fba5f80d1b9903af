use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pii::Masked;
use crate::theme::{resolve_theme, TenantTheme};

/// Tenant record as the provisioning API returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub cpf_cnpj: Option<Masked<String>>,
    /// JSON-encoded string or inline object; resolved via [`Tenant::theme`].
    #[serde(default)]
    pub theme: serde_json::Value,
    /// Themes the tenant saved, shown before the built-in presets.
    #[serde(default)]
    pub themes: Vec<TenantTheme>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tenant {
    /// Colors the storefront renders with.
    pub fn theme(&self) -> TenantTheme {
        resolve_theme(&self.theme)
    }

    /// Tenant name for commercial copy, falling back when blank.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            fallback
        } else {
            trimmed
        }
    }
}
