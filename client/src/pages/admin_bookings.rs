//! Admin bookings table: status changes, detail modal, confirmed delete.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::booking_details_modal::BookingDetailsModal;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::status_select::StatusSelect;
use crate::components::top_nav::TopNav;
use crate::net::api;
use crate::net::types::{Booking, BookingStatus};
use crate::state::admin::{AdminTable, BookingDetail};
use crate::util::format::format_date;
use crate::util::guard::install_session_guard;

#[component]
pub fn AdminBookingsPage() -> impl IntoView {
    let granted = install_session_guard(true, use_navigate());
    let table = RwSignal::new(AdminTable::<Booking>::default());
    let detail = RwSignal::new(BookingDetail::default());
    let status_busy = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);

    Effect::new(move || {
        if granted.get() {
            leptos::task::spawn_local(async move {
                let result = api::list_admin_bookings().await;
                table.update(|t| t.finish_load(result, "Failed to load bookings"));
            });
        }
    });

    let on_status = Callback::new(move |(id, status): (String, BookingStatus)| {
        if status_busy.get_untracked().is_some() {
            return;
        }
        status_busy.set(Some(id.clone()));
        leptos::task::spawn_local(async move {
            let result = api::update_booking_status(&id, &status).await;
            let mut applied = false;
            table.update(|t| applied = t.apply_status(&id, &status, result));
            if applied {
                detail.update(|d| {
                    if d.shows(&id) {
                        if let Some(b) = d.booking.as_mut() {
                            b.status = status.clone();
                        }
                    }
                });
            }
            status_busy.set(None);
        });
    });

    let on_view = move |row: Booking| {
        detail.update(|d| d.open_for(&row));
        leptos::task::spawn_local(async move {
            let result = api::fetch_admin_booking(&row.id).await;
            detail.update(|d| d.finish_load(&row, result));
        });
    };

    let on_confirm_delete = Callback::new(move |()| {
        let mut id = None;
        table.update(|t| id = t.confirm_delete());
        let Some(id) = id else {
            return;
        };
        deleting.set(true);
        leptos::task::spawn_local(async move {
            let result = api::delete_booking(&id).await;
            let mut removed = false;
            table.update(|t| removed = t.apply_delete(&id, result, "Failed to delete booking"));
            if removed && detail.with_untracked(|d| d.shows(&id)) {
                detail.update(BookingDetail::close);
            }
            deleting.set(false);
        });
    });

    view! {
        <Show when=move || granted.get() fallback=|| view! { <div class="page page--loading">"Checking access..."</div> }>
            <TopNav admin=true active="/admin/bookings" />
            <main class="page admin-page">
                <h1>"Bookings"</h1>
                <Show when=move || !table.with(|t| t.error.is_empty())>
                    <p class="admin-page__error">{move || table.get().error}</p>
                </Show>
                <Show
                    when=move || !table.with(|t| t.loading)
                    fallback=|| view! { <p>"Loading bookings..."</p> }
                >
                    <Show
                        when=move || !table.with(|t| t.rows.is_empty())
                        fallback=|| view! { <p class="admin-page__empty">"No bookings yet."</p> }
                    >
                        <div class="data-table__wrap">
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Customer"</th>
                                        <th>"Phone"</th>
                                        <th>"Service"</th>
                                        <th>"Flooring"</th>
                                        <th>"Schedule"</th>
                                        <th>"Created"</th>
                                        <th>"Status"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || table.get().rows
                                        key=|b| (b.id.clone(), b.status.as_str().to_owned())
                                        children=move |b| {
                                            let id = b.id.clone();
                                            let status_id = b.id.clone();
                                            let row_id = b.id.clone();
                                            let fallback_status = b.status.clone();
                                            let delete_id = b.id.clone();
                                            let row = b.clone();
                                            view! {
                                                <tr>
                                                    <td>{b.full_name.clone()}</td>
                                                    <td>{b.phone_number.clone()}</td>
                                                    <td>{b.service_type.clone()}</td>
                                                    <td>{b.flooring_type.clone()}</td>
                                                    <td>{format!("{} • {}", b.preferred_date, b.preferred_time)}</td>
                                                    <td>{format_date(b.created_at.as_deref())}</td>
                                                    <td>
                                                        <StatusSelect
                                                            status=Signal::derive(move || {
                                                                table
                                                                    .with(|t| t.find(&row_id).map(|r| r.status.clone()))
                                                                    .unwrap_or_else(|| fallback_status.clone())
                                                            })
                                                            disabled=Signal::derive(move || {
                                                                status_busy.get().as_deref() == Some(status_id.as_str())
                                                            })
                                                            on_change=Callback::new(move |next| on_status.run((id.clone(), next)))
                                                        />
                                                    </td>
                                                    <td class="data-table__actions">
                                                        <button class="btn btn--sm" on:click=move |_| on_view(row.clone())>
                                                            "View"
                                                        </button>
                                                        <button
                                                            class="btn btn--sm btn--danger"
                                                            on:click=move |_| table.update(|t| t.request_delete(&delete_id))
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </Show>
            </main>
            <Show when=move || detail.with(|d| d.open)>
                <BookingDetailsModal
                    detail=detail
                    on_status=on_status
                    status_busy=Signal::derive(move || status_busy.get().is_some())
                />
            </Show>
            <Show when=move || table.with(|t| t.pending_delete.is_some())>
                <ConfirmDialog
                    title="Delete Booking"
                    message="Are you sure? This booking will be permanently removed."
                    busy=deleting
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |()| table.update(AdminTable::cancel_delete))
                />
            </Show>
        </Show>
    }
}
