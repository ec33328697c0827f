//! Admin console landing page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::top_nav::TopNav;
use crate::util::guard::install_session_guard;
use crate::util::session;

/// Placeholder figures; the backend exposes no statistics endpoint.
const STATS: [(&str, &str); 3] = [("Bookings this month", "—"), ("Active users", "—"), ("Pending jobs", "—")];

#[component]
pub fn AdminHomePage() -> impl IntoView {
    let granted = install_session_guard(true, use_navigate());
    let admin_email = RwSignal::new(String::new());
    Effect::new(move || {
        if granted.get() {
            admin_email.set(session::admin_email().unwrap_or_default());
        }
    });

    view! {
        <Show when=move || granted.get() fallback=|| view! { <div class="page page--loading">"Checking access..."</div> }>
            <TopNav admin=true active="/admin" />
            <main class="page admin-page">
                <section class="admin-page__hero">
                    <h1>"Admin Console"</h1>
                    <Show when=move || !admin_email.get().is_empty()>
                        <p>"Signed in as " <strong>{move || admin_email.get()}</strong></p>
                    </Show>
                </section>
                <div class="stat-grid">
                    {STATS
                        .iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="stat-card">
                                    <span class="stat-card__value">{*value}</span>
                                    <span class="stat-card__label">{*label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="card-grid">
                    <a class="admin-card" href="/admin/bookings">
                        <span class="admin-card__icon">"📋"</span>
                        <h3>"Manage Bookings"</h3>
                        <p>"Review requests, update status, and remove bookings."</p>
                    </a>
                    <a class="admin-card" href="/admin/users">
                        <span class="admin-card__icon">"👥"</span>
                        <h3>"Manage Users"</h3>
                        <p>"View and edit customer accounts."</p>
                    </a>
                </div>
            </main>
        </Show>
    }
}
