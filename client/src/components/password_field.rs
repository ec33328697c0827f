//! Password input with a show/hide toggle and inline error.

use leptos::prelude::*;

#[component]
pub fn PasswordField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into, default = Signal::stored(String::new()))] error: Signal<String>,
    #[prop(into, default = "Enter password".to_owned())] placeholder: String,
    on_input: Callback<String>,
    on_toggle: Callback<()>,
    #[prop(optional)] on_blur: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <div class="form-field__password">
                <input
                    class="form-field__input"
                    class:form-field__input--invalid=move || !error.get().is_empty()
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:blur=move |_| {
                        if let Some(cb) = on_blur {
                            cb.run(());
                        }
                    }
                />
                <button
                    type="button"
                    class="form-field__toggle"
                    title=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| on_toggle.run(())
                >
                    {move || if visible.get() { "🙈" } else { "👁" }}
                </button>
            </div>
            <Show when=move || !error.get().is_empty()>
                <span class="form-field__error">{move || error.get()}</span>
            </Show>
        </label>
    }
}
