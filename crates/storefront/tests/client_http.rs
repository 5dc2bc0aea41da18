#![cfg(not(target_arch = "wasm32"))]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use stylehub_catalog::{CategorySelection, ProductId};
use stylehub_storefront::{
    CatalogController, CatalogDisplay, ClientError, NewsletterForm, ProductQuery, StorefrontApi,
    StorefrontClient, StorefrontConfig, SubmissionStatus,
};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

/// Stand-in for the catalog backend; records the query strings it receives.
#[derive(Clone, Default)]
struct Backend {
    product_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    subscribe_calls: Arc<Mutex<Vec<String>>>,
}

fn catalog() -> Vec<Value> {
    vec![
        json!({"_id": "1", "name": "Classic White T-Shirt", "description": "Premium cotton blend for ultimate comfort", "price": 29.99, "category": "Men", "image_url": "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400", "featured": true}),
        json!({"_id": "2", "name": "Denim Jacket", "description": "Vintage style denim with modern fit", "price": 89.99, "category": "Men", "image_url": "https://images.unsplash.com/photo-1576995853123-5a10305d93c0?w=400", "featured": true}),
        json!({"_id": "3", "name": "Summer Dress", "description": "Lightweight and breezy for warm days", "price": 59.99, "category": "Women", "image_url": "https://images.unsplash.com/photo-1595777457583-95e059d581b8?w=400", "featured": true}),
        json!({"_id": "6", "name": "Wool Sweater", "description": "Cozy knit for cold weather", "price": 69.99, "category": "Women", "image_url": "https://images.unsplash.com/photo-1576566588028-4147f3842f27?w=400", "featured": false}),
    ]
}

async fn list_products(
    State(backend): State<Backend>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    backend.product_queries.lock().unwrap().push(params.clone());

    let products: Vec<Value> = catalog()
        .into_iter()
        .filter(|p| match params.get("category") {
            Some(category) => p["category"].as_str().unwrap().to_lowercase() == *category,
            None => true,
        })
        .filter(|p| match params.get("featured") {
            Some(featured) => p["featured"].as_bool().unwrap() == (featured == "true"),
            None => true,
        })
        .collect();
    let count = products.len();
    Json(json!({ "products": products, "count": count }))
}

async fn list_categories() -> Json<Value> {
    Json(json!({ "categories": ["Men", "Women"] }))
}

async fn get_product(Path(id): Path<String>) -> (StatusCode, String) {
    match id.as_str() {
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded".to_string()),
        _ => match catalog().into_iter().find(|p| p["_id"] == id.as_str()) {
            Some(product) => (StatusCode::OK, json!({ "product": product }).to_string()),
            None => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Product not found" }).to_string(),
            ),
        },
    }
}

async fn subscribe(State(backend): State<Backend>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    backend.subscribe_calls.lock().unwrap().push(email.clone());

    if email.ends_with("@blocked.example") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Email domain not accepted" })),
        );
    }
    if email.ends_with("@silent.example") {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({})));
    }
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Successfully subscribed!", "subscriber_id": "abc" })),
    )
}

async fn unsubscribe(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    match body["email"].as_str() {
        Some("a@b.com") => (StatusCode::OK, Json(json!({ "message": "Successfully unsubscribed" }))),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "error": "Email not found" }))),
    }
}

struct TestServer {
    base_url: String,
    backend: Backend,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let backend = Backend::default();
        let app = Router::new()
            .route("/api/products", get(list_products))
            .route("/api/products/:id", get(get_product))
            .route("/api/categories", get(list_categories))
            .route("/api/subscribe", post(subscribe))
            .route("/api/unsubscribe", post(unsubscribe))
            .with_state(backend.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            backend,
            handle,
        }
    }

    fn client(&self) -> StorefrontClient {
        StorefrontClient::new(StorefrontConfig::new(self.base_url.clone()))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn list_products_without_filter_sends_no_query() {
    let srv = TestServer::spawn().await;

    let body = srv.client().list_products(&ProductQuery::default()).await.unwrap();

    assert_eq!(body.products.len(), 4);
    assert_eq!(body.count, Some(4));
    assert!(srv.backend.product_queries.lock().unwrap()[0].is_empty());
}

#[tokio::test]
async fn list_products_sends_category_and_featured_filters() {
    let srv = TestServer::spawn().await;
    let query = ProductQuery::for_selection(&CategorySelection::from_label("Women")).featured_only();

    let body = srv.client().list_products(&query).await.unwrap();

    assert_eq!(body.products.len(), 1);
    assert_eq!(body.products[0].name(), "Summer Dress");
    let sent = srv.backend.product_queries.lock().unwrap()[0].clone();
    assert_eq!(sent.get("category").map(String::as_str), Some("women"));
    assert_eq!(sent.get("featured").map(String::as_str), Some("true"));
}

#[tokio::test]
async fn list_categories_decodes_labels() {
    let srv = TestServer::spawn().await;
    let body = srv.client().list_categories().await.unwrap();
    assert_eq!(body.categories, ["Men", "Women"]);
}

#[tokio::test]
async fn get_product_found_and_missing() {
    let srv = TestServer::spawn().await;
    let client = srv.client();

    let found = client.get_product(&ProductId::new("3").unwrap()).await.unwrap();
    assert_eq!(found.product.name(), "Summer Dress");
    assert_eq!(found.product.display_price(), "$59.99");

    let err = client
        .get_product(&ProductId::new("404").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.server_message(), Some("Product not found"));
}

#[tokio::test]
async fn non_json_error_body_still_reports_status() {
    let srv = TestServer::spawn().await;

    let err = srv
        .client()
        .get_product(&ProductId::new("broken").unwrap())
        .await
        .unwrap_err();

    match err {
        ClientError::Api { status, payload } => {
            assert_eq!(status, 500);
            assert_eq!(payload.error, None);
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn product_id_is_sent_as_a_single_path_segment() {
    let srv = TestServer::spawn().await;

    // Unescaped, this would hit `/products/scarf/red` and a bare router 404.
    let err = srv
        .client()
        .get_product(&ProductId::new("scarf/red?size=m").unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.server_message(), Some("Product not found"));
}

/// Collects the names of spans opened while installed.
#[derive(Clone, Default)]
struct SpanNames(Arc<Mutex<Vec<String>>>);

impl<S: tracing::Subscriber> Layer<S> for SpanNames {
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: Context<'_, S>,
    ) {
        self.0.lock().unwrap().push(attrs.metadata().name().to_string());
    }
}

#[tokio::test]
async fn each_request_runs_in_its_own_span() {
    let srv = TestServer::spawn().await;
    let client = srv.client();
    let names = SpanNames::default();
    let _guard =
        tracing::subscriber::set_default(tracing_subscriber::registry().with(names.clone()));

    client.list_categories().await.unwrap();
    client.list_products(&ProductQuery::default()).await.unwrap();
    client.get_product(&ProductId::new("1").unwrap()).await.unwrap();
    client.subscribe("a@b.com").await.unwrap();

    let names = names.0.lock().unwrap().clone();
    for expected in ["list_categories", "list_products", "get_product", "subscribe"] {
        assert!(names.iter().any(|n| n == expected), "missing span {expected}: {names:?}");
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = StorefrontClient::new(StorefrontConfig::new(format!("http://{}/api", addr)));
    let err = client.list_categories().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.server_message(), None);
}

#[tokio::test]
async fn subscribe_and_unsubscribe_round_trip_messages() {
    let srv = TestServer::spawn().await;
    let client = srv.client();

    let subscribed = client.subscribe("a@b.com").await.unwrap();
    assert_eq!(subscribed.message, "Successfully subscribed!");

    let unsubscribed = client.unsubscribe("a@b.com").await.unwrap();
    assert_eq!(unsubscribed.message, "Successfully unsubscribed");

    let err = client.unsubscribe("nobody@b.com").await.unwrap_err();
    assert_eq!(err.server_message(), Some("Email not found"));
}

#[tokio::test]
async fn catalog_over_http_filters_with_lowercase_label() {
    let srv = TestServer::spawn().await;
    let mut catalog = CatalogController::new(srv.client());

    catalog.mount().await;
    assert_eq!(catalog.state().filter_bar(), ["All", "Men", "Women"]);

    assert!(catalog.select("Men").await);
    match catalog.state().display() {
        CatalogDisplay::Grid(products) => {
            assert_eq!(products.len(), 2);
            assert!(products.iter().all(|p| p.category() == "Men"));
        }
        other => panic!("expected grid, got {other:?}"),
    }

    let queries = srv.backend.product_queries.lock().unwrap().clone();
    assert_eq!(queries.len(), 2);
    assert_eq!(queries[1].get("category").map(String::as_str), Some("men"));
}

#[tokio::test]
async fn newsletter_over_http_success_and_errors() {
    let srv = TestServer::spawn().await;
    let client = srv.client();

    let mut form = NewsletterForm::new();
    form.set_email("a@b.com");
    form.submit(&client).await;
    assert_eq!(
        form.status(),
        &SubmissionStatus::Success("Successfully subscribed!".to_string())
    );
    assert_eq!(form.email(), "");

    form.set_email("someone@blocked.example");
    form.submit(&client).await;
    assert_eq!(
        form.status(),
        &SubmissionStatus::Error("Email domain not accepted".to_string())
    );

    form.set_email("someone@silent.example");
    form.submit(&client).await;
    assert_eq!(
        form.status(),
        &SubmissionStatus::Error("Failed to subscribe. Please try again.".to_string())
    );

    form.set_email("not-an-email");
    form.submit(&client).await;
    assert_eq!(srv.backend.subscribe_calls.lock().unwrap().len(), 3);
}
