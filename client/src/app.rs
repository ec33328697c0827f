//! Root application component with the route table.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin::AdminHomePage, admin_bookings::AdminBookingsPage, admin_users::AdminUsersPage, bookings::BookingsPage,
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, home::HomePage, login::LoginPage,
    products::{ProductDetailPage, ProductsPage},
    profile::ProfilePage, register::RegisterPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Pages keep their own state; the session lives in browser storage and is
/// read through `util::session` when needed.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/floorease.css"/>
        <Title text="FloorEase"/>

        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("bookings") view=BookingsPage/>
                <Route path=StaticSegment("products") view=ProductsPage/>
                <Route path=(StaticSegment("products"), ParamSegment("category")) view=ProductDetailPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("admin") view=AdminHomePage/>
                <Route path=(StaticSegment("admin"), StaticSegment("bookings")) view=AdminBookingsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("users")) view=AdminUsersPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="page page--missing">
            <h1>"Page not found"</h1>
            <a class="btn" href="/">"Go home"</a>
        </main>
    }
}
