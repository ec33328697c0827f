//! Header navigation for signed-in pages, with logout.

use leptos::prelude::*;

use crate::util::session;

/// Links shown to signed-in customers.
const CUSTOMER_LINKS: [(&str, &str); 4] =
    [("/dashboard", "Dashboard"), ("/products", "Products"), ("/bookings", "Booking"), ("/profile", "Profile")];

/// Links shown in the admin console.
const ADMIN_LINKS: [(&str, &str); 3] =
    [("/admin", "Overview"), ("/admin/bookings", "Bookings"), ("/admin/users", "Users")];

/// Drop every session trace and leave for the login page.
pub fn logout() {
    session::clear();
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

#[component]
pub fn TopNav(#[prop(optional)] admin: bool, #[prop(into, optional)] active: String) -> impl IntoView {
    let links: &[(&str, &str)] = if admin { &ADMIN_LINKS } else { &CUSTOMER_LINKS };

    view! {
        <header class="top-nav">
            <a class="top-nav__brand" href=if admin { "/admin" } else { "/dashboard" }>
                "FloorEase"
                {admin.then_some(view! { <span class="top-nav__badge">"Admin"</span> })}
            </a>
            <nav class="top-nav__links">
                {links
                    .iter()
                    .map(|(href, label)| {
                        let is_active = *href == active;
                        view! {
                            <a class="top-nav__link" class:top-nav__link--active=is_active href=*href>
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <span class="top-nav__spacer"></span>
            <button class="btn top-nav__logout" on:click=move |_| logout() title="Logout">
                "Logout"
            </button>
        </header>
    }
}
