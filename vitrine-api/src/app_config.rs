use serde::Deserialize;
use std::env;

use vitrine_combo::DiscountSchedule;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub business_rules: BusinessRules,
    pub whatsapp: WhatsAppConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Commercial knobs for the combo builder.
#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_duo_discount")]
    pub duo_discount: f64,
    #[serde(default = "default_trio_discount")]
    pub trio_discount: f64,
    /// Name used in the checkout message when the tenant has none.
    #[serde(default = "default_fallback_tenant_name")]
    pub fallback_tenant_name: String,
}

impl BusinessRules {
    pub fn discount_schedule(&self) -> DiscountSchedule {
        DiscountSchedule {
            duo_discount: self.duo_discount,
            trio_discount: self.trio_discount,
        }
    }
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            duo_discount: default_duo_discount(),
            trio_discount: default_trio_discount(),
            fallback_tenant_name: default_fallback_tenant_name(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WhatsAppConfig {
    /// Number the wa.me checkout link points at, digits only.
    #[serde(default = "default_whatsapp_phone")]
    pub phone: String,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            phone: default_whatsapp_phone(),
        }
    }
}

fn default_duo_discount() -> f64 {
    0.10
}

fn default_trio_discount() -> f64 {
    0.15
}

fn default_fallback_tenant_name() -> String {
    vitrine_combo::DEFAULT_TENANT_NAME.to_string()
}

fn default_whatsapp_phone() -> String {
    "5581989649188".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of VITRINE)
            // Eg.. `VITRINE_SERVER__PORT=1` would set the `server.port` key
            .add_source(config::Environment::with_prefix("VITRINE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
