//! Login page: email + password against the backend, then role-based landing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_field::PasswordField;
use crate::components::text_field::TextField;
use crate::net::api;
use crate::state::auth::LoginForm;
use crate::util::session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        form.update(|f| request = f.begin_submit());
        let Some(request) = request else {
            return;
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::login(&request).await;
            if let Ok(login) = &result {
                session::store_login(login, &request.email);
            }
            let mut target = None;
            form.update(|f| target = f.finish_submit(result.as_ref().map_err(Clone::clone)));
            if let Some(target) = target {
                navigate(target, NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to manage your bookings"</p>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        value=Signal::derive(move || form.get().email)
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                    />
                    <PasswordField
                        label="Password"
                        value=Signal::derive(move || form.get().password)
                        visible=Signal::derive(move || form.get().show_password)
                        on_input=Callback::new(move |v| form.update(|f| f.password = v))
                        on_toggle=Callback::new(move |()| form.update(|f| f.show_password = !f.show_password))
                    />
                    <div class="auth-form__row">
                        <a href="/forgot-password" class="auth-form__link">
                            "Forgot password?"
                        </a>
                    </div>
                    <Show when=move || !form.get().error.is_empty()>
                        <p class="auth-form__error">{move || form.get().error}</p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || form.get().loading>
                        {move || if form.get().loading { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? " <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
