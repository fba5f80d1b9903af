use crate::app_config::{BusinessRules, WhatsAppConfig};

/// Injected per-process state. The quote service keeps no session state;
/// everything request-specific arrives in the request body.
#[derive(Clone)]
pub struct AppState {
    pub business_rules: BusinessRules,
    pub whatsapp: WhatsAppConfig,
}
