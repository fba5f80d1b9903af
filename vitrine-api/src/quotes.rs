use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_catalog::{price, Benefit, Catalog};
use vitrine_combo::{checkout_message, whatsapp_link, ComboCart};
use vitrine_shared::{theme_choices, Tenant, TenantTheme};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub tenant: Tenant,
    #[serde(default)]
    pub catalog: Catalog,
    pub selections: Vec<SelectionRequest>,
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub product_id: String,
    pub plan_id: String,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub items: Vec<QuoteItemResponse>,
    pub total_cents: i64,
    pub total_display: String,
    pub discount_percent: u32,
    pub discounted_total_cents: i64,
    pub discounted_total_display: String,
    pub message: String,
    pub whatsapp_url: String,
    /// Colors the storefront renders with.
    pub theme: TenantTheme,
    /// Switcher options: tenant themes, then the active one, then presets.
    pub theme_choices: Vec<TenantTheme>,
}

#[derive(Debug, Serialize)]
pub struct QuoteItemResponse {
    pub product_id: String,
    pub plan_id: String,
    pub name: String,
    pub price_cents: i64,
    pub price_display: String,
    pub description: String,
    /// Benefit bullet points of the chosen plan.
    pub benefits: Vec<String>,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/quotes", post(create_quote))
}

/// POST /v1/quotes
/// Price a submitted combo snapshot. Stateless: the catalog and the ordered
/// selections arrive in the request; nothing is retained across calls.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    if req.selections.is_empty() {
        return Err(AppError::ValidationError("combo has no selections".into()));
    }

    let mut cart = ComboCart::with_schedule(state.business_rules.discount_schedule());
    for selection in &req.selections {
        // dangling references are pruned inside, with a warning
        cart.select_from(&req.catalog, &selection.product_id, &selection.plan_id);
    }
    if cart.is_empty() {
        return Err(AppError::ValidationError(
            "no selection matches the submitted catalog".into(),
        ));
    }

    let tenant_name = req
        .tenant
        .display_name(&state.business_rules.fallback_tenant_name);
    let message = checkout_message(&cart, tenant_name);
    let whatsapp_url = whatsapp_link(&state.whatsapp.phone, &message);

    let theme = req.tenant.theme();
    let quote_id = Uuid::new_v4();
    tracing::info!(
        quote_id = %quote_id,
        tenant_id = %req.tenant.id,
        items = cart.len(),
        total_cents = cart.total_cents(),
        discounted_total_cents = cart.discounted_total_cents(),
        "quote issued"
    );

    let items = cart
        .items()
        .iter()
        .map(|item| QuoteItemResponse {
            product_id: item.product_id.clone(),
            plan_id: item.plan_id.clone(),
            name: item.name.clone(),
            price_cents: item.price_cents,
            price_display: price::format_cents(item.price_cents),
            description: item.description.clone(),
            benefits: req
                .catalog
                .plan(&item.plan_id)
                .map(|plan| {
                    plan.benefits
                        .iter()
                        .map(|benefit: &Benefit| benefit.description().to_string())
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect();

    Ok(Json(QuoteResponse {
        id: quote_id,
        generated_at: Utc::now(),
        items,
        total_cents: cart.total_cents(),
        total_display: price::format_cents(cart.total_cents()),
        discount_percent: cart.discount_percent(),
        discounted_total_cents: cart.discounted_total_cents(),
        discounted_total_display: price::format_cents(cart.discounted_total_cents()),
        message,
        whatsapp_url,
        theme_choices: theme_choices(&req.tenant.themes, &theme),
        theme,
    }))
}
