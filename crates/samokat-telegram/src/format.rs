use samokat_core::DiscountedProduct;

/// Renders one `"<name> <price> р., <discount>%"` line per product, each
/// terminated by `\n`. An empty slice renders as an empty string.
#[must_use]
pub fn format_report(products: &[DiscountedProduct]) -> String {
    products
        .iter()
        .map(|p| format!("{} {} р., {}%\n", p.name, p.price, p.discount))
        .collect()
}
