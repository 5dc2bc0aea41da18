//! Product catalog section and product card.

use leptos::*;
use stylehub_catalog::{DEFAULT_DESCRIPTION_CHARS, Product};

use crate::catalog::{
    CatalogDisplay, CatalogState, EMPTY_MESSAGE, HEADING, LOADING_MESSAGE, ProductsRequest,
    SUBHEADING, fetch_categories, fetch_products,
};
use crate::client::StorefrontClient;
use crate::frontend::app::use_client;

fn load_products(client: StorefrontClient, state: RwSignal<CatalogState>, request: ProductsRequest) {
    spawn_local(async move {
        let result = fetch_products(&client, &request).await;
        state.update(|s| {
            s.apply_products(request.ticket, result);
        });
    });
}

fn load_categories(client: StorefrontClient, state: RwSignal<CatalogState>) {
    spawn_local(async move {
        let result = fetch_categories(&client).await;
        state.update(|s| s.apply_categories(result));
    });
}

#[component]
pub fn ProductCatalog() -> impl IntoView {
    let client = use_client();
    let state = create_rw_signal(CatalogState::new());

    // Mount: both fetches start now and complete independently.
    load_categories(client.clone(), state);
    if let Some(request) = state.try_update(|s| s.mount()) {
        load_products(client.clone(), state, request);
    }

    let filter_bar = move || state.with(|s| s.filter_bar().to_vec());

    view! {
        <section id="products" class="catalog">
            <div class="catalog-heading">
                <h2>{HEADING}</h2>
                <p>{SUBHEADING}</p>
            </div>

            <div id="categories" class="category-filter">
                {move || {
                    filter_bar()
                        .into_iter()
                        .map(|label| {
                            let client = client.clone();
                            let label_for_click = label.clone();
                            let label_for_class = label.clone();
                            view! {
                                <button
                                    class=move || {
                                        if state.with(|s| s.selection().is_selected(&label_for_class)) {
                                            "category active"
                                        } else {
                                            "category"
                                        }
                                    }
                                    on:click=move |_| {
                                        let request = state
                                            .try_update(|s| s.select(&label_for_click))
                                            .flatten();
                                        if let Some(request) = request {
                                            load_products(client.clone(), state, request);
                                        }
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            {move || {
                state.with(|s| match s.display() {
                    CatalogDisplay::Loading => view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            <p>{LOADING_MESSAGE}</p>
                        </div>
                    }
                    .into_view(),
                    CatalogDisplay::Empty => view! {
                        <div class="empty">
                            <p>{EMPTY_MESSAGE}</p>
                        </div>
                    }
                    .into_view(),
                    CatalogDisplay::Grid(products) => view! {
                        <div class="product-grid">
                            {products
                                .iter()
                                .cloned()
                                .map(|product| view! { <ProductCard product=product/> })
                                .collect_view()}
                        </div>
                    }
                    .into_view(),
                })
            }}
        </section>
    }
}

/// One product tile. "Add to Cart" has no behaviour yet.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let featured = product.is_featured();

    view! {
        <div class="product-card">
            <div class="product-image">
                <img src=product.image_url().to_string() alt=product.name().to_string()/>
                {featured.then(|| view! { <span class="featured-badge">"★ Featured"</span> })}
            </div>
            <div class="product-body">
                <div class="product-category">{product.category().to_string()}</div>
                <h3>{product.name().to_string()}</h3>
                <p class="product-description">
                    {product.short_description(DEFAULT_DESCRIPTION_CHARS)}
                </p>
                <div class="product-footer">
                    <span class="product-price">{product.display_price()}</span>
                    <button class="add-to-cart">"Add to Cart"</button>
                </div>
            </div>
        </div>
    }
}
