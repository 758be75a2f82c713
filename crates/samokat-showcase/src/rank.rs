//! Discount filtering and ranking over a decoded showcase.

use std::cmp::Reverse;

use samokat_core::{discount_percent, DiscountedProduct};

use crate::types::ShowcaseProduct;

/// Scales prices to whole rubles, attaches the discount, keeps products at
/// or above `min_discount`, and sorts them by descending discount.
///
/// Products whose scaled `price` or `old_price` is not positive are dropped
/// silently. Order among equal discounts is unspecified.
#[must_use]
pub fn rank_products<I>(products: I, min_discount: i64) -> Vec<DiscountedProduct>
where
    I: IntoIterator<Item = ShowcaseProduct>,
{
    let mut ranked: Vec<DiscountedProduct> = products
        .into_iter()
        .filter_map(apply_discount)
        .filter(|product| product.discount >= min_discount)
        .collect();

    ranked.sort_by_key(|product| Reverse(product.discount));
    ranked
}

/// Converts kopecks to rubles (truncating) and computes the discount on the
/// scaled values. Returns `None` when either scaled price is not positive.
fn apply_discount(product: ShowcaseProduct) -> Option<DiscountedProduct> {
    let price = product.price / 100;
    let old_price = product.old_price / 100;
    let discount = discount_percent(price, old_price)?;

    Some(DiscountedProduct {
        name: product.name,
        images: product.images,
        price,
        old_price,
        specification: product.specification,
        discount,
    })
}

#[cfg(test)]
#[path = "rank_test.rs"]
mod tests;
