//! Labelled text input with an inline error line.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, default = "text".to_owned())] input_type: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, default = Signal::stored(String::new()))] error: Signal<String>,
    #[prop(optional)] on_blur: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                class:form-field__input--invalid=move || !error.get().is_empty()
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(cb) = on_blur {
                        cb.run(());
                    }
                }
            />
            <Show when=move || !error.get().is_empty()>
                <span class="form-field__error">{move || error.get()}</span>
            </Show>
        </label>
    }
}
