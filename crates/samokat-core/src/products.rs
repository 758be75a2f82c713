use serde::Serialize;

/// A showcase product that passed the price checks, with prices in major
/// currency units (rubles) and the computed discount attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountedProduct {
    pub name: String,
    /// Image URLs in the order the showcase lists them.
    pub images: Vec<String>,
    /// Current price, truncated to whole rubles.
    pub price: i64,
    /// Pre-discount reference price, truncated to whole rubles.
    pub old_price: i64,
    pub specification: String,
    /// Integer percentage: `100 * (old_price - price) / old_price`.
    /// Negative when the price went up.
    pub discount: i64,
}

/// Computes the truncated discount percentage between two prices.
///
/// Returns `None` unless both prices are strictly positive.
#[must_use]
pub fn discount_percent(price: i64, old_price: i64) -> Option<i64> {
    if price <= 0 || old_price <= 0 {
        return None;
    }
    Some(100 * (old_price - price) / old_price)
}
