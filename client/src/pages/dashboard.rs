//! Customer dashboard: product category cards with tab and search filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server already redirects `/dashboard` requests without a session
//! cookie; the client guard repeats the check after hydration for sessions
//! held only in local storage.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::top_nav::TopNav;
use crate::state::catalog::{Category, CategoryCard, filter_cards};
use crate::util::guard::install_session_guard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let granted = install_session_guard(false, use_navigate());
    let tab = RwSignal::new(None::<Category>);
    let search = RwSignal::new(String::new());

    view! {
        <Show when=move || granted.get() fallback=|| view! { <div class="page page--loading">"Loading..."</div> }>
            <TopNav active="/dashboard" />
            <main class="page dashboard-page">
                <section class="dashboard-page__hero">
                    <h1>"Find the right floor"</h1>
                    <p>"Browse our flooring range and book an installation when you're ready."</p>
                </section>
                <div class="dashboard-page__filters">
                    <div class="tabs" role="tablist">
                        {tab_options()
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <button
                                        class="tabs__tab"
                                        class:tabs__tab--active=move || tab.get() == value
                                        role="tab"
                                        on:click=move |_| tab.set(value)
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <input
                        class="dashboard-page__search"
                        type="search"
                        placeholder="Search flooring..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </div>
                <div class="card-grid">
                    {move || {
                        let cards = search.with(|s| filter_cards(tab.get(), s));
                        if cards.is_empty() {
                            view! { <p class="card-grid__empty">"No flooring matches your search."</p> }.into_any()
                        } else {
                            cards.into_iter().map(category_card).collect_view().into_any()
                        }
                    }}
                </div>
            </main>
        </Show>
    }
}

/// Tab filters as `(category, label)`; `None` is "All".
fn tab_options() -> Vec<(Option<Category>, &'static str)> {
    std::iter::once((None, "All")).chain(Category::ALL.into_iter().map(|c| (Some(c), c.label()))).collect()
}

/// Card linking to a category's product page.
pub fn category_card(card: &'static CategoryCard) -> impl IntoView {
    view! {
        <a class="category-card" href=card.category.href()>
            {match card.image {
                Some(src) => view! { <img class="category-card__image" src=src alt=card.title /> }.into_any(),
                None => view! { <div class="category-card__image category-card__image--placeholder">"🏀"</div> }.into_any(),
            }}
            <div class="category-card__body">
                <h3>{card.title}</h3>
                <span class="category-card__cta">"View details →"</span>
            </div>
        </a>
    }
}
