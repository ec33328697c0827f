//! Sign-up page with per-field validation on blur.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_field::PasswordField;
use crate::components::text_field::TextField;
use crate::net::api;
use crate::state::register_form::{RegisterField, RegisterForm, SIGNUP_REDIRECT_MS};
use crate::util::timer;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let registered = RwSignal::new(false);
    let navigate = use_navigate();

    Effect::new(move || {
        if registered.get() {
            let navigate = navigate.clone();
            timer::after(SIGNUP_REDIRECT_MS, move || navigate("/login", NavigateOptions::default()));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        form.update(|f| request = f.begin_submit());
        let Some(request) = request else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::register(&request).await;
            let mut created = false;
            form.update(|f| created = f.finish_submit(result));
            if created {
                registered.set(true);
            }
        });
    };

    let blur = move |field| Callback::new(move |()| form.update(|f| f.blur(field)));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <p class="auth-card__subtitle">"Book flooring services in minutes"</p>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        label="Full Name"
                        placeholder="Ram Thapa"
                        value=Signal::derive(move || form.get().full_name)
                        error=Signal::derive(move || form.get().errors.full_name)
                        on_input=Callback::new(move |v| form.update(|f| f.full_name = v))
                        on_blur=blur(RegisterField::FullName)
                    />
                    <TextField
                        label="Mobile Number"
                        input_type="tel"
                        placeholder="981 234 5678"
                        value=Signal::derive(move || form.get().mobile)
                        error=Signal::derive(move || form.get().errors.mobile)
                        on_input=Callback::new(move |v: String| form.update(|f| f.set_mobile(&v)))
                        on_blur=blur(RegisterField::Mobile)
                    />
                    <TextField
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        value=Signal::derive(move || form.get().email)
                        error=Signal::derive(move || form.get().errors.email)
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        on_blur=blur(RegisterField::Email)
                    />
                    <PasswordField
                        label="Password"
                        value=Signal::derive(move || form.get().password)
                        visible=Signal::derive(move || form.get().show_password)
                        error=Signal::derive(move || form.get().errors.password)
                        on_input=Callback::new(move |v| form.update(|f| f.password = v))
                        on_toggle=Callback::new(move |()| form.update(|f| f.show_password = !f.show_password))
                        on_blur=blur(RegisterField::Password)
                    />
                    <Show when=move || !form.get().error.is_empty()>
                        <p class="auth-form__error">{move || form.get().error}</p>
                    </Show>
                    <Show when=move || !form.get().success.is_empty()>
                        <p class="auth-form__success">{move || form.get().success}</p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || form.get().loading>
                        {move || if form.get().loading { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? " <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
