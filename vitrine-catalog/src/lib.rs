pub mod catalog;
pub mod plan;
pub mod price;
pub mod product;

pub use catalog::Catalog;
pub use plan::{Benefit, Plan};
pub use price::PriceCents;
pub use product::{Product, ProductOption};
