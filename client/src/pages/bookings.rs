//! Booking page: service request form, live estimate, FAQ, and the
//! confirmation modal.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::components::top_nav::TopNav;
use crate::net::api;
use crate::state::booking_form::{
    BookingField, BookingForm, BookingFormState, FAQ_ITEMS, FLOORING_TYPES, SERVICE_TYPES, SESSION_REDIRECT_MS,
    SubmitOutcome, TIME_SLOTS, price_estimate, summary_rows,
};
use crate::util::guard::{install_session_guard, replace_history};
use crate::util::{session, timer};

type FieldRef = fn(&mut BookingForm) -> &mut String;

/// Read/write pair for one form field.
fn bind(state: RwSignal<BookingFormState>, field: FieldRef) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || {
        let mut form = state.get().form;
        field(&mut form).clone()
    });
    let on_input = Callback::new(move |v: String| state.update(|s| *field(&mut s.form) = v));
    (value, on_input)
}

fn select_field(
    state: RwSignal<BookingFormState>,
    label: &'static str,
    options: &'static [&'static str],
    field: FieldRef,
) -> impl IntoView {
    let (value, on_input) = bind(state, field);
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select
                class="form-field__input"
                prop:value=move || value.get()
                on:change=move |ev| on_input.run(event_target_value(&ev))
            >
                {options.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect_view()}
            </select>
        </label>
    }
}

/// Name of the first file chosen in a file input.
fn chosen_file_name(ev: &leptos::ev::Event) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        ev.target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| file.name())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}

#[component]
pub fn BookingsPage() -> impl IntoView {
    let navigate = use_navigate();
    let granted = install_session_guard(false, navigate.clone());
    let state = RwSignal::new(BookingFormState::default());
    let expired = RwSignal::new(false);

    Effect::new(move || {
        if expired.get() {
            let navigate = navigate.clone();
            timer::after(SESSION_REDIRECT_MS, move || navigate("/login", replace_history()));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        state.update(|s| request = s.begin_submit());
        let Some(request) = request else {
            return;
        };
        if session::token().is_none_or(|t| t.trim().is_empty()) {
            state.update(BookingFormState::session_missing);
            expired.set(true);
            return;
        }
        leptos::task::spawn_local(async move {
            let result = api::create_booking(&request).await;
            let mut outcome = SubmitOutcome::Failed;
            state.update(|s| outcome = s.finish_submit(&request, result));
            if outcome == SubmitOutcome::SessionExpired {
                expired.set(true);
            }
        });
    };

    let blur = move |field| Callback::new(move |()| state.update(|s| s.blur(field)));
    let error = move |field| Signal::derive(move || state.with(|s| s.visible_error(field).to_owned()));

    let (full_name, set_full_name) = bind(state, |f| &mut f.full_name);
    let (phone, set_phone) = bind(state, |f| &mut f.phone);
    let (email, set_email) = bind(state, |f| &mut f.email);
    let (address, set_address) = bind(state, |f| &mut f.address);
    let (area, set_area) = bind(state, |f| &mut f.area_size);
    let (date, set_date) = bind(state, |f| &mut f.preferred_date);
    let (notes, set_notes) = bind(state, |f| &mut f.notes);

    let live = Memo::new(move |_| state.with(|s| s.form.to_request()));

    view! {
        <Show when=move || granted.get() fallback=|| view! { <div class="page page--loading">"Loading..."</div> }>
            <TopNav active="/bookings" />
            <main class="page bookings-page">
                <section class="bookings-page__hero">
                    <h1>"Book a Flooring Service"</h1>
                    <p>"Tell us about your space and pick a time that suits you."</p>
                </section>
                <div class="bookings-page__layout">
                    <form class="booking-form" on:submit=on_submit>
                        <div class="booking-form__grid">
                            <TextField
                                label="Full Name"
                                value=full_name
                                on_input=set_full_name
                                error=error(BookingField::FullName)
                                on_blur=blur(BookingField::FullName)
                            />
                            <TextField
                                label="Phone"
                                input_type="tel"
                                placeholder="98XXXXXXXX or +977XXXXXXXXXX"
                                value=phone
                                on_input=set_phone
                                error=error(BookingField::Phone)
                                on_blur=blur(BookingField::Phone)
                            />
                            <TextField label="Email (optional)" input_type="email" value=email on_input=set_email />
                            <TextField
                                label="City / Address"
                                value=address
                                on_input=set_address
                                error=error(BookingField::Address)
                                on_blur=blur(BookingField::Address)
                            />
                            {select_field(state, "Service Type", &SERVICE_TYPES, |f| &mut f.service_type)}
                            {select_field(state, "Flooring Type", &FLOORING_TYPES, |f| &mut f.flooring_type)}
                            <TextField
                                label="Area Size (sq.ft)"
                                input_type="number"
                                value=area
                                on_input=set_area
                                error=error(BookingField::AreaSize)
                                on_blur=blur(BookingField::AreaSize)
                            />
                            <TextField
                                label="Preferred Date"
                                input_type="date"
                                value=date
                                on_input=set_date
                                error=error(BookingField::PreferredDate)
                                on_blur=blur(BookingField::PreferredDate)
                            />
                            {select_field(state, "Preferred Time", &TIME_SLOTS, |f| &mut f.preferred_time)}
                            <label class="form-field">
                                <span class="form-field__label">"Room Photo (optional)"</span>
                                <input
                                    class="form-field__input"
                                    type="file"
                                    accept="image/*"
                                    on:change=move |ev| {
                                        let name = chosen_file_name(&ev).unwrap_or_default();
                                        state.update(|s| s.form.room_photo_name = name);
                                    }
                                />
                            </label>
                        </div>
                        <label class="form-field form-field--wide">
                            <span class="form-field__label">"Notes"</span>
                            <textarea
                                class="form-field__input"
                                rows="4"
                                prop:value=move || notes.get()
                                on:input=move |ev| set_notes.run(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <Show when=move || !state.with(|s| s.error.is_empty())>
                            <p class="booking-form__error">{move || state.get().error}</p>
                        </Show>
                        <div class="booking-form__actions">
                            <button
                                type="button"
                                class="btn"
                                on:click=move |_| state.update(BookingFormState::clear)
                            >
                                "Clear"
                            </button>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || state.with(|s| s.submitting)
                            >
                                {move || if state.with(|s| s.submitting) { "Submitting..." } else { "Book Now" }}
                            </button>
                        </div>
                    </form>

                    <aside class="bookings-page__aside">
                        <div class="summary-card">
                            <h3>"Booking Summary"</h3>
                            {move || summary_list(summary_rows(&live.get()))}
                            <div class="summary-card__estimate">
                                <span>"Estimated cost"</span>
                                <strong>{move || price_estimate(live.get().area_size)}</strong>
                            </div>
                        </div>
                        <div class="faq">
                            <h3>"FAQ"</h3>
                            {FAQ_ITEMS
                                .iter()
                                .enumerate()
                                .map(|(index, item)| {
                                    let open = move || state.with(|s| s.open_faq == Some(index));
                                    view! {
                                        <div class="faq__item" class:faq__item--open=open>
                                            <button
                                                type="button"
                                                class="faq__question"
                                                on:click=move |_| state.update(|s| s.toggle_faq(index))
                                            >
                                                {item.title}
                                                <span>{move || if open() { "−" } else { "+" }}</span>
                                            </button>
                                            <Show when=open>
                                                <p class="faq__answer">{item.content}</p>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </aside>
                </div>
            </main>
            <Show when=move || state.with(|s| s.modal_open)>
                <BookingSuccessModal state=state />
            </Show>
        </Show>
    }
}

fn summary_list(rows: [(&'static str, String); 7]) -> impl IntoView {
    view! {
        <dl class="summary-card__rows">
            {rows
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    }
                })
                .collect_view()}
        </dl>
    }
}

#[component]
fn BookingSuccessModal(state: RwSignal<BookingFormState>) -> impl IntoView {
    let on_close = move || state.update(BookingFormState::close_modal);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close();
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown tabindex="0">
                <h2>"✅ Booking Confirmed"</h2>
                <p class="dialog__success">{move || state.get().success}</p>
                {move || summary_list(summary_rows(&state.with(BookingFormState::summary)))}
                <div class="dialog__actions">
                    <a class="btn" href="/dashboard">"Back to Dashboard"</a>
                    <button class="btn btn--primary" on:click=move |_| on_close()>
                        "Done"
                    </button>
                </div>
            </div>
        </div>
    }
}
