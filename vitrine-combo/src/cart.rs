use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vitrine_catalog::{Catalog, Plan, Product};

use crate::discount::DiscountSchedule;

/// One combo line: a (product, plan) choice snapshotted at selection time.
/// Later catalog edits do not retroactively change the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product_id: String,
    pub plan_id: String,
    /// Composed display name, `<product name> - <plan name>`.
    pub name: String,
    pub price_cents: i64,
    pub description: String,
}

/// The combo under assembly: ordered cart lines plus the product-to-plan
/// selection index.
///
/// Owned by whoever orchestrates a session (or, server-side, rebuilt per
/// request from a submitted snapshot), never ambient state. A product has at
/// most one plan in the cart: `select` replaces any previous choice for the
/// same product.
#[derive(Debug, Clone, Default)]
pub struct ComboCart {
    items: Vec<CartItem>,
    selected: HashMap<String, String>,
    schedule: DiscountSchedule,
}

impl ComboCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule(schedule: DiscountSchedule) -> Self {
        Self {
            schedule,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Plan currently chosen for a product, if any.
    pub fn selected_plan(&self, product_id: &str) -> Option<&str> {
        self.selected.get(product_id).map(String::as_str)
    }

    /// Add a plan choice for a product, replacing any previous choice for the
    /// same product. Always succeeds.
    pub fn select(&mut self, product: &Product, plan: &Plan) -> &CartItem {
        if self.selected.contains_key(&product.id) {
            self.remove_product(&product.id);
        }
        self.items.push(CartItem {
            product_id: product.id.clone(),
            plan_id: plan.id.clone(),
            name: format!("{} - {}", product.name, plan.name),
            price_cents: plan.price.cents(),
            description: plan.description.clone(),
        });
        self.selected
            .insert(product.id.clone(), plan.id.clone());
        &self.items[self.items.len() - 1]
    }

    /// Replay a `{product_id, plan_id}` selection against a catalog snapshot.
    /// Dangling references are skipped (logged, not fatal) so the rest of the
    /// combo still prices.
    pub fn select_from(&mut self, catalog: &Catalog, product_id: &str, plan_id: &str) -> bool {
        let Some(product) = catalog.product(product_id) else {
            tracing::warn!(product_id, "selection references unknown product, skipping");
            return false;
        };
        let Some(plan) = catalog.plan(plan_id) else {
            tracing::warn!(plan_id, "selection references unknown plan, skipping");
            return false;
        };
        if plan.product_id != product.id {
            tracing::warn!(product_id, plan_id, "plan belongs to another product, skipping");
            return false;
        }
        self.select(product, plan);
        true
    }

    /// Remove every line for a product. Removing an absent product is a no-op.
    pub fn remove_product(&mut self, product_id: &str) {
        self.items.retain(|item| item.product_id != product_id);
        self.selected.remove(product_id);
    }

    /// Remove one line by position. Out-of-range indexes are ignored.
    pub fn remove_at(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        let removed = self.items.remove(index);
        if !self
            .items
            .iter()
            .any(|item| item.product_id == removed.product_id)
        {
            self.selected.remove(&removed.product_id);
        }
    }

    /// Exact subtotal in cents.
    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(|item| item.price_cents).sum()
    }

    pub fn discount_multiplier(&self) -> f64 {
        self.schedule.multiplier(self.items.len())
    }

    /// Applied discount percentage for display.
    pub fn discount_percent(&self) -> u32 {
        self.schedule.percent(self.items.len())
    }

    /// Discounted total in currency units, full precision. Rounding is
    /// half-up to cents and happens only at formatting time.
    pub fn discounted_total(&self) -> f64 {
        (self.total_cents() as f64 / 100.0) * self.discount_multiplier()
    }

    /// Discounted total rounded half-up to cents.
    pub fn discounted_total_cents(&self) -> i64 {
        vitrine_catalog::price::round_half_up_cents(self.discounted_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        serde_json::from_value(json!({
            "products": [
                {"id": "p1", "name": "Internet 100MB"},
                {"id": "p2", "name": "TV"},
                {"id": "p3", "name": "Telefone"}
            ],
            "plans": [
                {"id": "pl1", "name": "Básico", "price": "49.90", "product_id": "p1",
                 "description": "100 mega de fibra"},
                {"id": "pl2", "name": "Turbo", "price": "79.90", "product_id": "p1"},
                {"id": "pl3", "name": "Essencial", "price": "79.90", "product_id": "p2"},
                {"id": "pl4", "name": "Fixo", "price": "119.90", "product_id": "p3"}
            ]
        }))
        .unwrap()
    }

    fn select(cart: &mut ComboCart, catalog: &Catalog, product_id: &str, plan_id: &str) {
        assert!(cart.select_from(catalog, product_id, plan_id));
    }

    #[test]
    fn single_item_has_no_discount() {
        let catalog = catalog();
        let mut cart = ComboCart::new();
        select(&mut cart, &catalog, "p1", "pl1");

        assert_eq!(cart.total_cents(), 4990);
        assert_eq!(cart.discount_multiplier(), 1.0);
        assert_eq!(cart.discounted_total_cents(), 4990);
        assert_eq!(cart.items()[0].name, "Internet 100MB - Básico");
        assert_eq!(cart.items()[0].description, "100 mega de fibra");
        assert_eq!(cart.selected_plan("p1"), Some("pl1"));
    }

    #[test]
    fn two_items_get_ten_percent_off() {
        let catalog = catalog();
        let mut cart = ComboCart::new();
        select(&mut cart, &catalog, "p1", "pl1");
        select(&mut cart, &catalog, "p2", "pl3");

        assert_eq!(cart.total_cents(), 12980);
        assert_eq!(cart.discount_percent(), 10);
        assert_eq!(cart.discounted_total_cents(), 11682);
    }

    #[test]
    fn three_items_get_fifteen_percent_off() {
        let catalog = catalog();
        let mut cart = ComboCart::new();
        select(&mut cart, &catalog, "p1", "pl1");
        select(&mut cart, &catalog, "p2", "pl3");
        select(&mut cart, &catalog, "p3", "pl4");

        assert_eq!(cart.total_cents(), 24970);
        assert_eq!(cart.discount_percent(), 15);
        // 249.70 * 0.85 lands on 212.244999... in binary floating point,
        // so half-up cent rounding displays 212.24
        assert_eq!(cart.discounted_total_cents(), 21224);
    }

    #[test]
    fn selecting_again_replaces_previous_plan() {
        let catalog = catalog();
        let mut cart = ComboCart::new();
        select(&mut cart, &catalog, "p1", "pl1");
        select(&mut cart, &catalog, "p1", "pl2");

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.selected_plan("p1"), Some("pl2"));
        assert_eq!(cart.total_cents(), 7990);
    }

    #[test]
    fn remove_product_is_exact_and_idempotent() {
        let catalog = catalog();
        let mut cart = ComboCart::new();
        select(&mut cart, &catalog, "p1", "pl1");
        select(&mut cart, &catalog, "p2", "pl3");
        let before = cart.total_cents();

        cart.remove_product("p2");
        assert_eq!(cart.total_cents(), before - 7990);
        assert_eq!(cart.selected_plan("p2"), None);

        // removing something that is not there changes nothing
        cart.remove_product("p2");
        cart.remove_product("ghost");
        assert_eq!(cart.total_cents(), 4990);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn removal_reapplies_the_lower_tier() {
        let catalog = catalog();
        let mut cart = ComboCart::new();
        select(&mut cart, &catalog, "p1", "pl1");
        select(&mut cart, &catalog, "p2", "pl3");
        select(&mut cart, &catalog, "p3", "pl4");
        assert_eq!(cart.discount_percent(), 15);

        cart.remove_at(1);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.discount_percent(), 10);
        assert_eq!(cart.selected_plan("p2"), None);
        assert_eq!(cart.total_cents(), 4990 + 11990);
    }

    #[test]
    fn remove_at_out_of_range_is_a_noop() {
        let catalog = catalog();
        let mut cart = ComboCart::new();
        select(&mut cart, &catalog, "p1", "pl1");

        cart.remove_at(5);
        assert_eq!(cart.len(), 1);

        let mut empty = ComboCart::new();
        empty.remove_at(0);
        assert!(empty.is_empty());
    }

    #[test]
    fn dangling_selections_are_skipped() {
        let catalog = catalog();
        let mut cart = ComboCart::new();

        assert!(!cart.select_from(&catalog, "ghost", "pl1"));
        assert!(!cart.select_from(&catalog, "p1", "ghost"));
        // plan exists but belongs to another product
        assert!(!cart.select_from(&catalog, "p1", "pl3"));

        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
        assert_eq!(cart.discount_multiplier(), 1.0);
    }

    #[test]
    fn custom_schedule_is_honored() {
        let catalog = catalog();
        let mut cart = ComboCart::with_schedule(DiscountSchedule {
            duo_discount: 0.20,
            trio_discount: 0.30,
        });
        select(&mut cart, &catalog, "p1", "pl1");
        select(&mut cart, &catalog, "p2", "pl3");
        assert_eq!(cart.discount_percent(), 20);
    }
}
