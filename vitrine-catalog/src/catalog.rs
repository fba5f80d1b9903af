use serde::{Deserialize, Serialize};

use crate::plan::Plan;
use crate::product::Product;

/// In-memory snapshot of a tenant's catalog.
///
/// Order is preserved from the source lists; `plans_for_product` keeps the
/// API's plan ordering, which is what the storefront renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    plans: Vec<Plan>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, plans: Vec<Plan>) -> Self {
        Self { products, plans }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn plan(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn plans_for_product(&self, product_id: &str) -> Vec<&Plan> {
        self.plans
            .iter()
            .filter(|p| p.product_id == product_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Catalog {
        serde_json::from_value(json!({
            "products": [
                {"id": "p1", "name": "Internet 100MB"},
                {"id": "p2", "name": "TV"}
            ],
            "plans": [
                {"id": "pl1", "name": "Básico", "price": "49.90", "product_id": "p1"},
                {"id": "pl2", "name": "Turbo", "price": "79.90", "product_id": "p1"},
                {"id": "pl3", "name": "Essencial", "price": "39.90", "product_id": "p2"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn lookups_by_id() {
        let catalog = sample();
        assert_eq!(catalog.product("p1").unwrap().name, "Internet 100MB");
        assert_eq!(catalog.plan("pl3").unwrap().price.cents(), 3990);
        assert!(catalog.product("missing").is_none());
        assert!(catalog.plan("missing").is_none());
    }

    #[test]
    fn plans_for_product_preserves_order() {
        let catalog = sample();
        let names: Vec<&str> = catalog
            .plans_for_product("p1")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Básico", "Turbo"]);
        assert!(catalog.plans_for_product("p3").is_empty());
    }
}
