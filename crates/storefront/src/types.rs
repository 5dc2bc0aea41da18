//! Wire types for the catalog backend (`/products`, `/categories`,
//! `/subscribe`).
//!
//! Shapes follow the backend's JSON bodies; fields the storefront does not use
//! are ignored on decode.

use serde::{Deserialize, Serialize};
use stylehub_catalog::{CategorySelection, Product};

/// Query parameters for `GET /products`. Unset filters are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl ProductQuery {
    /// Query for the catalog's current filter selection.
    pub fn for_selection(selection: &CategorySelection) -> Self {
        Self {
            category: selection.filter_param().map(str::to_string),
            featured: None,
        }
    }

    pub fn featured_only(mut self) -> Self {
        self.featured = Some(true);
        self
    }
}

/// Body of `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Body of `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub product: Product,
}

/// Body of `GET /categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Body of `POST /subscribe` and `POST /unsubscribe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Success body carrying a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Failure body; `error` is absent when the backend sent nothing useful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
}
