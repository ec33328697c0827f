//! Product catalog: category index and per-category detail pages.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::top_nav::TopNav;
use crate::pages::dashboard::category_card;
use crate::state::catalog::{CARDS, Category, ProductPage, product_page};

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <TopNav active="/products" />
        <main class="page products-page">
            <section class="products-page__hero">
                <h1>"Our Flooring Range"</h1>
                <p>"Vinyl flooring for healthcare, education, commercial, and sports spaces."</p>
                <div class="products-page__actions">
                    <a class="btn" href="/dashboard">"Go to Dashboard"</a>
                    <a class="btn btn--primary" href="/bookings">"Booking"</a>
                </div>
            </section>
            <div class="card-grid">{CARDS.iter().map(category_card).collect_view()}</div>
        </main>
    }
}

/// `/products/:category`; unknown slugs render a not-found notice.
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let category = move || params.with(|p| p.get("category").and_then(|slug| Category::from_slug(&slug)));

    view! {
        <TopNav active="/products" />
        {move || match category() {
            Some(c) => view! { <ProductDetail page=product_page(c) /> }.into_any(),
            None => {
                view! {
                    <main class="page product-page product-page--missing">
                        <h1>"Product not found"</h1>
                        <a class="btn" href="/products">"Back to Products"</a>
                    </main>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn ProductDetail(page: &'static ProductPage) -> impl IntoView {
    let selected = RwSignal::new(page.default_swatch());

    view! {
        <main class="page product-page">
            <section class="product-page__hero">
                <h1>{page.title}</h1>
                <p>{page.subtitle}</p>
                <div class="product-page__actions">
                    <a class="btn" href="/products">"Back to Products"</a>
                    <a class="btn btn--primary" href="/bookings">"Book Now"</a>
                </div>
            </section>

            <section class="product-page__section">
                <h2>"Key Features"</h2>
                <div class="feature-grid">
                    {page
                        .features
                        .iter()
                        .map(|f| {
                            view! {
                                <div class="feature-card">
                                    <span class="feature-card__icon">{f.icon}</span>
                                    <h3>{f.title}</h3>
                                    <p>{f.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            {(!page.swatches.is_empty())
                .then(|| {
                    view! {
                        <section class="product-page__section">
                            <h2>"Colour Options"</h2>
                            <div class="swatch-grid">
                                {page
                                    .swatches
                                    .iter()
                                    .map(|s| {
                                        view! {
                                            <button
                                                class="swatch"
                                                class:swatch--selected=move || selected.get() == Some(s.code)
                                                on:click=move |_| selected.set(Some(s.code))
                                            >
                                                <img src=s.image alt=s.code />
                                                <span>{s.code}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <p class="swatch-grid__selected">
                                {move || selected.get().map(|code| format!("Selected: {code}")).unwrap_or_default()}
                            </p>
                        </section>
                    }
                })}

            <section class="product-page__section">
                <h2>{page.specs.title}</h2>
                <div class="spec-table__wrap">
                    <table class="spec-table">
                        <thead>
                            <tr>{page.specs.headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}</tr>
                        </thead>
                        <tbody>
                            {page
                                .specs
                                .rows
                                .iter()
                                .map(|row| {
                                    view! { <tr>{row.iter().map(|cell| view! { <td>{*cell}</td> }).collect_view()}</tr> }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </section>

            <section class="product-page__section">
                <h2>"Applications"</h2>
                <ul class="chip-list">
                    {page.applications.iter().map(|a| view! { <li class="chip">{*a}</li> }).collect_view()}
                </ul>
            </section>
        </main>
    }
}
