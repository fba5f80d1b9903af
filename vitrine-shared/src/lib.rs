pub mod pii;
pub mod tenant;
pub mod theme;

pub use pii::Masked;
pub use tenant::Tenant;
pub use theme::{preset_themes, resolve_theme, theme_choices, TenantTheme};
