use serde::{Deserialize, Serialize};

/// Tiered discount by cart size: two items get 10% off, three or more 15%.
///
/// The fractions are commercial knobs and can be overridden from
/// configuration; the defaults are the published table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountSchedule {
    /// Discount fraction for a cart with exactly two items.
    pub duo_discount: f64,
    /// Discount fraction for a cart with three items or more.
    pub trio_discount: f64,
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        Self {
            duo_discount: 0.10,
            trio_discount: 0.15,
        }
    }
}

impl DiscountSchedule {
    /// Price multiplier for a cart with `item_count` lines. Counted on cart
    /// lines, not distinct products.
    pub fn multiplier(&self, item_count: usize) -> f64 {
        if item_count >= 3 {
            1.0 - self.trio_discount
        } else if item_count == 2 {
            1.0 - self.duo_discount
        } else {
            1.0
        }
    }

    /// Discount percentage for display, e.g. `10` for a two-item cart.
    pub fn percent(&self, item_count: usize) -> u32 {
        ((1.0 - self.multiplier(item_count)) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_steps_with_cart_size() {
        let schedule = DiscountSchedule::default();
        assert_eq!(schedule.multiplier(0), 1.0);
        assert_eq!(schedule.multiplier(1), 1.0);
        assert_eq!(schedule.multiplier(2), 0.90);
        assert_eq!(schedule.multiplier(3), 0.85);
        assert_eq!(schedule.multiplier(5), 0.85);
    }

    #[test]
    fn percent_for_display() {
        let schedule = DiscountSchedule::default();
        assert_eq!(schedule.percent(1), 0);
        assert_eq!(schedule.percent(2), 10);
        assert_eq!(schedule.percent(4), 15);
    }
}
