pub mod client;
pub mod error;
pub mod rank;
pub mod types;

pub use client::{ShowcaseClient, ShowcaseQuery};
pub use error::ShowcaseError;
pub use rank::rank_products;
pub use types::{ShowcaseProduct, ShowcaseResponse};
