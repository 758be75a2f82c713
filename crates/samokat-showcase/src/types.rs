//! Wire types for `GET /showcase/showcases`.
//!
//! ## Observed shape
//!
//! The response is a JSON object whose `products` field maps an opaque
//! product id to a product object. Ids carry no meaning for us and are
//! dropped once the map is flattened.
//!
//! Prices (`price`, `oldPrice`) are integers in kopecks. A product that is
//! not on sale may omit `oldPrice`, send `0`, or send `null`; all three
//! decode to `0` and are filtered out by the ranker.
//!
//! Every field, `products` included, decodes both an absent key and an
//! explicit `null` as its default, so a sparse product never fails the
//! whole decode.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// Top-level response from `GET /showcase/showcases`.
#[derive(Debug, Default, Deserialize)]
pub struct ShowcaseResponse {
    #[serde(default, deserialize_with = "products_or_empty")]
    pub products: HashMap<String, ShowcaseProduct>,
}

/// A single product as the showcase returns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowcaseProduct {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "imageUrl", default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,

    /// Current price in kopecks.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: i64,

    /// Reference price before the discount, in kopecks.
    #[serde(rename = "oldPrice", default, deserialize_with = "null_as_default")]
    pub old_price: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub specification: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A `null` map is empty; a `null` product is an all-default product, which
/// the ranker then drops for its zero prices.
fn products_or_empty<'de, D>(deserializer: D) -> Result<HashMap<String, ShowcaseProduct>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<String, Option<ShowcaseProduct>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(id, product)| (id, product.unwrap_or_default()))
        .collect())
}
