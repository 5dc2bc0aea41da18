//! Product catalog view state.
//!
//! The catalog fetches the category list once on mount and the product list
//! whenever the category selection changes. Every product fetch is stamped with
//! a [`FetchTicket`]; only the response for the latest ticket is applied, so a
//! slow response for an old selection can never overwrite a newer one.

use core::fmt::Display;

use stylehub_catalog::{CategorySelection, Product, filter_bar};

use crate::client::{ClientError, StorefrontApi};
use crate::types::ProductQuery;

pub const HEADING: &str = "Featured Products";
pub const SUBHEADING: &str = "Discover our handpicked collection";
pub const LOADING_MESSAGE: &str = "Loading products...";
pub const EMPTY_MESSAGE: &str = "No products found in this category.";

/// Sequence stamp of a product fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A product fetch the view wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsRequest {
    pub ticket: FetchTicket,
    pub query: ProductQuery,
}

/// What the product area shows. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogDisplay<'a> {
    Loading,
    Empty,
    Grid(&'a [Product]),
}

#[derive(Debug, Clone)]
pub struct CatalogState {
    filter_bar: Vec<String>,
    selection: CategorySelection,
    products: Vec<Product>,
    loading: bool,
    latest: FetchTicket,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    /// Initial state: no filter, loading until the first fetch completes.
    pub fn new() -> Self {
        Self {
            filter_bar: filter_bar(Vec::<String>::new()),
            selection: CategorySelection::All,
            products: Vec::new(),
            loading: true,
            latest: FetchTicket(0),
        }
    }

    pub fn filter_bar(&self) -> &[String] {
        &self.filter_bar
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn latest_ticket(&self) -> FetchTicket {
        self.latest
    }

    pub fn display(&self) -> CatalogDisplay<'_> {
        if self.loading {
            CatalogDisplay::Loading
        } else if self.products.is_empty() {
            CatalogDisplay::Empty
        } else {
            CatalogDisplay::Grid(&self.products)
        }
    }

    /// First product fetch, for the initial (unfiltered) selection.
    pub fn mount(&mut self) -> ProductsRequest {
        self.issue()
    }

    /// Select a filter-bar label. Returns the fetch to issue, or `None` when
    /// the selection did not change.
    pub fn select(&mut self, label: &str) -> Option<ProductsRequest> {
        let selection = CategorySelection::from_label(label);
        if selection == self.selection {
            return None;
        }
        tracing::debug!(?selection, "category selected");
        self.selection = selection;
        Some(self.issue())
    }

    fn issue(&mut self) -> ProductsRequest {
        self.latest = self.latest.next();
        self.loading = true;
        ProductsRequest {
            ticket: self.latest,
            query: ProductQuery::for_selection(&self.selection),
        }
    }

    /// Apply a product fetch outcome. Returns `false` if the response was
    /// superseded by a newer fetch and discarded.
    pub fn apply_products<E: Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Product>, E>,
    ) -> bool {
        if ticket != self.latest {
            tracing::debug!(?ticket, latest = ?self.latest, "discarding stale products response");
            return false;
        }

        match result {
            Ok(products) => self.products = products,
            Err(e) => {
                tracing::error!(error = %e, "error loading products");
                self.products.clear();
            }
        }
        self.loading = false;
        true
    }

    /// Apply the category fetch outcome. On failure the bar keeps only the
    /// `All` entry.
    pub fn apply_categories<E: Display>(&mut self, result: Result<Vec<String>, E>) {
        match result {
            Ok(categories) => self.filter_bar = filter_bar(categories),
            Err(e) => {
                tracing::error!(error = %e, "error loading categories");
                self.filter_bar = filter_bar(Vec::<String>::new());
            }
        }
    }
}

/// Run a product fetch for `request` against `api`.
pub async fn fetch_products<A: StorefrontApi + ?Sized>(
    api: &A,
    request: &ProductsRequest,
) -> Result<Vec<Product>, ClientError> {
    api.list_products(&request.query)
        .await
        .map(|body| body.products)
}

/// Run the category fetch against `api`.
pub async fn fetch_categories<A: StorefrontApi + ?Sized>(api: &A) -> Result<Vec<String>, ClientError> {
    api.list_categories().await.map(|body| body.categories)
}

/// Drives a [`CatalogState`] against a backend, one event at a time.
pub struct CatalogController<A> {
    api: A,
    state: CatalogState,
}

impl<A: StorefrontApi> CatalogController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: CatalogState::new(),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Initial display: categories and products are fetched independently.
    pub async fn mount(&mut self) {
        let request = self.state.mount();
        let (categories, products) = futures::join!(
            fetch_categories(&self.api),
            fetch_products(&self.api, &request)
        );
        self.state.apply_categories(categories);
        self.state.apply_products(request.ticket, products);
    }

    /// Select a filter-bar label and load its products. Returns `false` when
    /// the selection was unchanged and nothing was fetched.
    pub async fn select(&mut self, label: &str) -> bool {
        let Some(request) = self.state.select(label) else {
            return false;
        };
        let products = fetch_products(&self.api, &request).await;
        self.state.apply_products(request.ticket, products)
    }
}
