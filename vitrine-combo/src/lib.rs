pub mod cart;
pub mod checkout;
pub mod discount;

pub use cart::{CartItem, ComboCart};
pub use checkout::{checkout_message, whatsapp_link, DEFAULT_TENANT_NAME};
pub use discount::DiscountSchedule;
