//! Forgot-password page: email → OTP → new password → success.
//!
//! The step machine lives in `state::reset_flow`; this page renders the
//! current step, runs the requests, and owns the two timers (resend cooldown
//! and the redirect after success).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_field::PasswordField;
use crate::components::text_field::TextField;
use crate::net::api;
use crate::state::reset_flow::{ResetFlow, SUCCESS_REDIRECT_MS, Step};
use crate::util::timer;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let flow = RwSignal::new(ResetFlow::default());
    let navigate = use_navigate();

    let cooling_down = Memo::new(move |_| flow.with(|f| f.cooldown > 0));
    Effect::new(move || {
        if cooling_down.get() {
            timer::every_second(move || {
                flow.update(ResetFlow::tick);
                flow.with_untracked(|f| f.cooldown > 0)
            });
        }
    });

    let finished = Memo::new(move |_| flow.with(|f| f.step == Step::Success));
    Effect::new(move || {
        if finished.get() {
            let navigate = navigate.clone();
            timer::after(SUCCESS_REDIRECT_MS, move || navigate("/login", NavigateOptions::default()));
        }
    });

    let on_email = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        flow.update(|f| request = f.begin_submit_email());
        if let Some(request) = request {
            leptos::task::spawn_local(async move {
                let result = api::request_password_reset(&request).await;
                flow.update(|f| f.finish_submit_email(result));
            });
        }
    };

    let on_resend = move |_| {
        let mut request = None;
        flow.update(|f| request = f.begin_resend());
        if let Some(request) = request {
            leptos::task::spawn_local(async move {
                let result = api::request_password_reset(&request).await;
                flow.update(|f| f.finish_resend(result));
            });
        }
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        flow.update(|f| request = f.begin_verify());
        if let Some(request) = request {
            leptos::task::spawn_local(async move {
                let result = api::verify_reset_otp(&request).await;
                flow.update(|f| f.finish_verify(result));
            });
        }
    };

    let on_reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        flow.update(|f| request = f.begin_reset());
        if let Some(request) = request {
            leptos::task::spawn_local(async move {
                let result = api::reset_password(&request).await;
                flow.update(|f| f.finish_reset(result));
            });
        }
    };

    let step = move || flow.with(|f| f.step);
    let loading = move || flow.with(|f| f.loading);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset Password"</h1>
                <p class="auth-card__subtitle">{move || flow.with(ResetFlow::subtitle)}</p>

                <Show when=move || !flow.with(|f| f.error.is_empty())>
                    <p class="auth-form__error">{move || flow.get().error}</p>
                </Show>
                <Show when=move || !flow.with(|f| f.info.is_empty())>
                    <p class="auth-form__info">{move || flow.get().info}</p>
                </Show>

                <Show when=move || step() == Step::Email>
                    <form class="auth-form" on:submit=on_email>
                        <TextField
                            label="Email"
                            input_type="email"
                            placeholder="you@example.com"
                            value=Signal::derive(move || flow.get().email)
                            error=Signal::derive(move || flow.get().field_errors.email)
                            on_input=Callback::new(move |v| flow.update(|f| f.set_email(v)))
                        />
                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=loading>
                            {move || if loading() { "Sending..." } else { "Send OTP" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || step() == Step::Otp>
                    <form class="auth-form" on:submit=on_verify>
                        <p class="auth-form__hint">
                            "Code sent to " <strong>{move || flow.get().email}</strong>
                        </p>
                        <TextField
                            label="OTP"
                            input_type="text"
                            placeholder="123456"
                            value=Signal::derive(move || flow.get().otp)
                            error=Signal::derive(move || flow.get().field_errors.otp)
                            on_input=Callback::new(move |v: String| flow.update(|f| f.set_otp(&v)))
                        />
                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=loading>
                            {move || if loading() { "Verifying..." } else { "Verify OTP" }}
                        </button>
                        <div class="auth-form__row">
                            <button
                                type="button"
                                class="btn btn--link"
                                disabled=move || !flow.with(ResetFlow::can_resend)
                                on:click=on_resend
                            >
                                {move || flow.with(ResetFlow::resend_label)}
                            </button>
                            <button
                                type="button"
                                class="btn btn--link"
                                on:click=move |_| flow.update(ResetFlow::change_email)
                            >
                                "Change email"
                            </button>
                        </div>
                    </form>
                </Show>

                <Show when=move || step() == Step::Reset>
                    <form class="auth-form" on:submit=on_reset>
                        <PasswordField
                            label="New Password"
                            placeholder="At least 8 characters"
                            value=Signal::derive(move || flow.get().new_password)
                            visible=Signal::derive(move || flow.get().show_new_password)
                            error=Signal::derive(move || flow.get().field_errors.new_password)
                            on_input=Callback::new(move |v| flow.update(|f| f.set_new_password(v)))
                            on_toggle=Callback::new(move |()| flow.update(|f| f.show_new_password = !f.show_new_password))
                        />
                        <PasswordField
                            label="Confirm Password"
                            placeholder="Repeat the new password"
                            value=Signal::derive(move || flow.get().confirm_password)
                            visible=Signal::derive(move || flow.get().show_confirm_password)
                            error=Signal::derive(move || flow.get().field_errors.confirm_password)
                            on_input=Callback::new(move |v| flow.update(|f| f.set_confirm_password(v)))
                            on_toggle=Callback::new(move |()| {
                                flow.update(|f| f.show_confirm_password = !f.show_confirm_password);
                            })
                        />
                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=loading>
                            {move || if loading() { "Resetting..." } else { "Reset Password" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || step() == Step::Success>
                    <div class="auth-form auth-form--done">
                        <p class="auth-form__success">"✅ Redirecting to login..."</p>
                    </div>
                </Show>

                <p class="auth-card__footer">
                    <a href="/login">"Back to login"</a>
                </p>
            </div>
        </div>
    }
}
