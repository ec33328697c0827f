//! Booking status `<select>` that keeps unknown server values selectable.

#[cfg(test)]
#[path = "status_select_test.rs"]
mod status_select_test;

use leptos::prelude::*;

use crate::net::types::BookingStatus;

/// Choices for a row: the fixed set plus the current value when it is unknown.
pub fn status_choices(current: &BookingStatus) -> Vec<BookingStatus> {
    let mut choices = BookingStatus::CHOICES.to_vec();
    if !choices.contains(current) {
        choices.push(current.clone());
    }
    choices
}

/// Status to request for a pick, or `None` when it matches the committed one.
pub fn change_request(committed: &BookingStatus, picked: &str) -> Option<BookingStatus> {
    let next = BookingStatus::parse(picked);
    (next != *committed).then_some(next)
}

/// Put the committed value back into the element. It only moves once
/// `status` changes, so a rejected update leaves the old value showing.
fn restore_value(ev: &leptos::ev::Event, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        if let Some(select) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok()) {
            select.set_value(value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, value);
    }
}

/// Controlled select: shows `status` and reports picks through `on_change`.
#[component]
pub fn StatusSelect(
    #[prop(into)] status: Signal<BookingStatus>,
    on_change: Callback<BookingStatus>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <select
            class=move || format!("status-select status-select--{}", status.get().as_str())
            disabled=move || disabled.get()
            prop:value=move || status.get().as_str().to_owned()
            on:change=move |ev| {
                let committed = status.get_untracked();
                let picked = event_target_value(&ev);
                restore_value(&ev, committed.as_str());
                if let Some(next) = change_request(&committed, &picked) {
                    on_change.run(next);
                }
            }
        >
            {move || {
                status_choices(&status.get())
                    .into_iter()
                    .map(|choice| {
                        let value = choice.as_str().to_owned();
                        let label = choice.label().to_owned();
                        view! { <option value=value>{label}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}
