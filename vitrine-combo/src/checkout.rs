use vitrine_catalog::price;

use crate::cart::ComboCart;

/// Commercial name used when the tenant has none.
pub const DEFAULT_TENANT_NAME: &str = "Devotech";

/// Human-readable order summary sent over WhatsApp:
///
/// ```text
/// Olá! Gostaria de contratar o seguinte combo <tenant>:
///
/// • <item> - R$ <price>
///
/// Total: R$ <discounted>/mês
///
/// Poderia me ajudar?
/// ```
///
/// Per-item prices and the total are formatted to two decimals (half-up).
/// The returned string is plain text; percent-encoding only happens when it
/// is embedded into a link.
pub fn checkout_message(cart: &ComboCart, tenant_name: &str) -> String {
    let name = if tenant_name.trim().is_empty() {
        DEFAULT_TENANT_NAME
    } else {
        tenant_name.trim()
    };
    let items = cart
        .items()
        .iter()
        .map(|item| format!("• {} - R$ {}", item.name, price::format_cents(item.price_cents)))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Olá! Gostaria de contratar o seguinte combo {}:\n\n{}\n\nTotal: R$ {}/mês\n\nPoderia me ajudar?",
        name,
        items,
        price::format_amount(cart.discounted_total()),
    )
}

/// Deep link that opens WhatsApp with the message pre-filled.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}
