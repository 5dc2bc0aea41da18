//! `stylehub-storefront`
//!
//! **Responsibility:** the StyleHub storefront page and its backend client.
//!
//! This crate provides:
//! - Base URL configuration and the HTTP client for the catalog backend
//! - Explicit view-state holders for the product catalog and newsletter form
//! - Static page content (header, hero, stats, footer)
//! - The Leptos frontend (compiled for `wasm32` only)
//!
//! Rendering is a thin layer over the state holders; every transition is
//! testable without a browser.

pub mod catalog;
pub mod client;
pub mod config;
pub mod content;
pub mod newsletter;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{CatalogController, CatalogDisplay, CatalogState, FetchTicket, ProductsRequest};
pub use client::{ClientError, StorefrontApi, StorefrontClient};
pub use config::StorefrontConfig;
pub use newsletter::{EmailValidationError, NewsletterForm, SubmissionStatus, validate_email};
pub use types::{
    CategoriesResponse, ErrorPayload, MessageResponse, ProductQuery, ProductResponse,
    ProductsResponse, SubscribeRequest,
};
