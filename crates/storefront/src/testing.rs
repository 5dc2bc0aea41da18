//! In-memory `StorefrontApi` for state-holder tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use stylehub_catalog::{Price, Product, ProductId};

use crate::client::{ClientError, StorefrontApi};
use crate::types::{
    CategoriesResponse, ErrorPayload, MessageResponse, ProductQuery, ProductResponse,
    ProductsResponse,
};

pub(crate) fn product(id: &str, name: &str, price: f64, category: &str) -> Product {
    Product::new(
        ProductId::new(id).unwrap(),
        name,
        Price::new(price).unwrap(),
        category,
    )
}

pub(crate) fn sample_products() -> Vec<Product> {
    vec![
        product("1", "Classic White T-Shirt", 29.99, "Men").with_featured(true),
        product("2", "Denim Jacket", 89.99, "Men").with_featured(true),
        product("3", "Summer Dress", 59.99, "Women").with_featured(true),
        product("4", "Sneakers", 79.99, "Footwear"),
    ]
}

fn server_error(message: Option<&str>) -> ClientError {
    ClientError::Api {
        status: 500,
        payload: ErrorPayload {
            error: message.map(str::to_string),
        },
    }
}

/// Records every call and answers from fixed data.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    pub fail_products: bool,
    pub fail_categories: bool,
    /// When set, `subscribe` fails with this payload.
    pub subscribe_error: Option<ErrorPayload>,
    pub product_queries: RefCell<Vec<ProductQuery>>,
    pub category_calls: Cell<usize>,
    pub subscribed: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn with_catalog(products: Vec<Product>, categories: &[&str]) -> Self {
        Self {
            products,
            categories: categories.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        }
    }
}

#[async_trait(?Send)]
impl StorefrontApi for FakeApi {
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductsResponse, ClientError> {
        self.product_queries.borrow_mut().push(query.clone());
        if self.fail_products {
            return Err(server_error(Some("database unavailable")));
        }

        let products: Vec<Product> = self
            .products
            .iter()
            .filter(|p| match &query.category {
                Some(category) => p.category().to_lowercase() == *category,
                None => true,
            })
            .filter(|p| query.featured.is_none_or(|featured| p.is_featured() == featured))
            .cloned()
            .collect();
        let count = Some(products.len());
        Ok(ProductsResponse { products, count })
    }

    async fn list_categories(&self) -> Result<CategoriesResponse, ClientError> {
        self.category_calls.set(self.category_calls.get() + 1);
        if self.fail_categories {
            return Err(server_error(None));
        }
        Ok(CategoriesResponse {
            categories: self.categories.clone(),
        })
    }

    async fn get_product(&self, id: &ProductId) -> Result<ProductResponse, ClientError> {
        match self.products.iter().find(|p| p.id_typed() == id) {
            Some(product) => Ok(ProductResponse {
                product: product.clone(),
            }),
            None => Err(ClientError::Api {
                status: 404,
                payload: ErrorPayload {
                    error: Some("Product not found".to_string()),
                },
            }),
        }
    }

    async fn subscribe(&self, email: &str) -> Result<MessageResponse, ClientError> {
        self.subscribed.borrow_mut().push(email.to_string());
        match &self.subscribe_error {
            Some(payload) => Err(ClientError::Api {
                status: 400,
                payload: payload.clone(),
            }),
            None => Ok(MessageResponse {
                message: "Successfully subscribed!".to_string(),
            }),
        }
    }

    async fn unsubscribe(&self, email: &str) -> Result<MessageResponse, ClientError> {
        self.subscribed.borrow_mut().retain(|e| e != email);
        Ok(MessageResponse {
            message: "Successfully unsubscribed".to_string(),
        })
    }
}
