//! Admin modal with the full record of one booking.

use leptos::prelude::*;

use crate::components::status_select::StatusSelect;
use crate::net::types::{Booking, BookingStatus, EMPTY_CELL};
use crate::state::admin::BookingDetail;
use crate::util::format::format_date;

fn or_cell(value: Option<&String>) -> String {
    value.filter(|v| !v.trim().is_empty()).cloned().unwrap_or_else(|| EMPTY_CELL.to_owned())
}

/// `(label, value)` rows in display order.
fn detail_rows(b: &Booking) -> Vec<(&'static str, String)> {
    vec![
        ("Full name", b.full_name.clone()),
        ("Phone", b.phone_number.clone()),
        ("Email", or_cell(b.email.as_ref())),
        ("City / Address", b.city_address.clone()),
        ("Service", b.service_type.clone()),
        ("Flooring", b.flooring_type.clone()),
        ("Area (sq.ft)", or_cell(b.area_size.as_ref())),
        ("Preferred date", b.preferred_date.clone()),
        ("Preferred time", b.preferred_time.clone()),
        ("Notes", or_cell(b.notes.as_ref())),
        ("Created", format_date(b.created_at.as_deref())),
    ]
}

#[component]
pub fn BookingDetailsModal(
    detail: RwSignal<BookingDetail>,
    on_status: Callback<(String, BookingStatus)>,
    #[prop(into)] status_busy: Signal<bool>,
) -> impl IntoView {
    let on_close = move || detail.update(BookingDetail::close);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close();
        }
    };
    let booking = move || detail.get().booking;

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close()>
            <div
                class="dialog dialog--wide"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>"Booking Details"</h2>
                    <button class="dialog__close" on:click=move |_| on_close() title="Close">
                        "✕"
                    </button>
                </div>
                <Show when=move || detail.get().loading>
                    <p class="dialog__hint">"Loading details..."</p>
                </Show>
                <Show when=move || !detail.get().error.is_empty()>
                    <p class="dialog__danger">{move || detail.get().error}</p>
                </Show>
                {move || {
                    booking()
                        .map(|b| {
                            let id = b.id.clone();
                            let status = b.status.clone();
                            let photo = b.room_photo.clone().filter(|p| !p.is_empty());
                            view! {
                                <dl class="detail-grid">
                                    {detail_rows(&b)
                                        .into_iter()
                                        .map(|(label, value)| {
                                            view! {
                                                <dt>{label}</dt>
                                                <dd>{value}</dd>
                                            }
                                        })
                                        .collect_view()}
                                    <dt>"Status"</dt>
                                    <dd>
                                        <StatusSelect
                                            status=Signal::stored(status)
                                            disabled=status_busy
                                            on_change=Callback::new(move |next| on_status.run((id.clone(), next)))
                                        />
                                    </dd>
                                </dl>
                                {photo
                                    .map(|src| {
                                        view! { <img class="detail-grid__photo" src=src alt="Room photo" /> }
                                    })}
                            }
                        })
                }}
            </div>
        </div>
    }
}
