use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Price normalized to integer cents at the ingestion boundary.
///
/// The provisioning API is loose about numeric fields: a plan price arrives
/// either as a JSON number (`49.9`) or as a decimal string (`"49.90"`).
/// Everything is converted here, once; the rest of the workspace only ever
/// sees cents. Malformed input parses to zero and leaves a warning in the
/// log; the storefront must keep rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriceCents(pub i64);

impl PriceCents {
    pub fn cents(self) -> i64 {
        self.0
    }

    /// Two-decimal display form, e.g. `4990` → `"49.90"`.
    pub fn display(self) -> String {
        format_cents(self.0)
    }
}

impl fmt::Display for PriceCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl<'de> Deserialize<'de> for PriceCents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(PriceCents(loose_to_cents(&raw)))
    }
}

impl Serialize for PriceCents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Written back the way the API sends it: a two-decimal string.
        serializer.serialize_str(&self.display())
    }
}

/// Number-or-string price field to cents. Fail-to-zero, never an error.
pub fn loose_to_cents(raw: &serde_json::Value) -> i64 {
    let parsed = match raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(value) if value.is_finite() => (value * 100.0).round() as i64,
        _ => {
            tracing::warn!(raw = %raw, "unparseable price, treating as zero");
            0
        }
    }
}

/// Round a full-precision amount in currency units to cents, half-up on the
/// second decimal digit.
pub fn round_half_up_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Format cents as a two-decimal amount, e.g. `11682` → `"116.82"`.
pub fn format_cents(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Format a full-precision amount with half-up cent rounding.
pub fn format_amount(amount: f64) -> String {
    format_cents(round_half_up_cents(amount))
}
