//! Catalog domain module.
//!
//! Products and categories as the storefront sees them, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no rendering).

pub mod category;
pub mod product;

pub use category::{ALL_LABEL, CategorySelection, filter_bar};
pub use product::{DEFAULT_DESCRIPTION_CHARS, Price, Product, ProductId};
