//! Page composition and the static sections.

use leptos::*;

use crate::client::StorefrontClient;
use crate::content::{
    BRAND, COPYRIGHT, FOOTER_COLUMNS, FOOTER_TAGLINE, HERO, NAV_LINKS, STATS, WISHLIST_COUNT,
};
use crate::frontend::catalog::ProductCatalog;
use crate::frontend::newsletter::Newsletter;

/// Main application component: the sections in fixed page order.
#[component]
pub fn App(client: StorefrontClient) -> impl IntoView {
    provide_context(client);

    view! {
        <div class="min-h-screen bg-gray-50">
            <Header/>
            <Hero/>
            <Stats/>
            <ProductCatalog/>
            <Newsletter/>
            <Footer/>
        </div>
    }
}

/// Backend client from context, or one built from the environment.
pub(crate) fn use_client() -> StorefrontClient {
    use_context::<StorefrontClient>().unwrap_or_else(StorefrontClient::from_env)
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="brand">
                <span class="icon icon-bag">"🛍"</span>
                <span class="brand-name">{BRAND}</span>
            </div>

            <nav class="nav">
                {NAV_LINKS
                    .iter()
                    .map(|link| view! { <a href=link.href>{link.label}</a> })
                    .collect_view()}
            </nav>

            <div class="header-actions">
                <button class="icon-button" aria-label="Search">"🔍"</button>
                <button class="icon-button" aria-label="Wishlist">
                    "♡"
                    <span class="badge">{WISHLIST_COUNT}</span>
                </button>
            </div>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <h1>{HERO.title}</h1>
            <p>{HERO.subtitle}</p>
            <div class="hero-actions">
                <button class="primary">{HERO.primary_action}</button>
                <button class="secondary">{HERO.secondary_action}</button>
            </div>
        </section>
    }
}

#[component]
fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            {STATS
                .iter()
                .map(|stat| {
                    view! {
                        <div class="stat">
                            <div class="stat-icon">{stat.icon.glyph()}</div>
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <div class="brand">
                        <span class="icon icon-bag">"🛍"</span>
                        <span class="brand-name">{BRAND}</span>
                    </div>
                    <p>{FOOTER_TAGLINE}</p>
                </div>

                {FOOTER_COLUMNS
                    .iter()
                    .map(|column| {
                        view! {
                            <div>
                                <h3>{column.title}</h3>
                                <ul>
                                    {column
                                        .links
                                        .iter()
                                        .map(|link| view! { <li><button>{*link}</button></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="footer-bottom">
                <p>{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
