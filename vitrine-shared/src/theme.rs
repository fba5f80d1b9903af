use serde::{Deserialize, Serialize};

/// Storefront color theme.
///
/// Tenants carry at most a primary/secondary pair; the `name` only exists on
/// presets and on themes the tenant saved with a label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TenantTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub primary: String,
    pub secondary: String,
}

impl TenantTheme {
    pub fn new(name: &str, primary: &str, secondary: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        }
    }
}

/// Built-in presets offered when a tenant has no saved themes.
pub fn preset_themes() -> Vec<TenantTheme> {
    vec![
        TenantTheme::new("Padrão", "#1976d2", "#ff9800"),
        TenantTheme::new("Dark", "#22223b", "#4a4e69"),
        TenantTheme::new("Green", "#43a047", "#c8e6c9"),
    ]
}

/// The theme used when nothing else resolves.
pub fn default_theme() -> TenantTheme {
    preset_themes().remove(0)
}

/// Themes offered by the storefront switcher: the tenant's saved themes
/// first, then the active one, then the built-in presets.
pub fn theme_choices(saved: &[TenantTheme], active: &TenantTheme) -> Vec<TenantTheme> {
    let mut choices = saved.to_vec();
    choices.push(active.clone());
    choices.extend(preset_themes());
    choices
}

/// Resolve the `theme` attribute on a tenant record.
///
/// The provisioning API stores it either as a JSON-encoded string or as an
/// inline object. Anything unparseable (or missing) falls back to the first
/// preset so the storefront always has colors to render with.
pub fn resolve_theme(raw: &serde_json::Value) -> TenantTheme {
    match raw {
        serde_json::Value::String(encoded) => {
            serde_json::from_str(encoded).unwrap_or_else(|_| default_theme())
        }
        serde_json::Value::Object(_) => {
            serde_json::from_value(raw.clone()).unwrap_or_else(|_| default_theme())
        }
        _ => default_theme(),
    }
}
