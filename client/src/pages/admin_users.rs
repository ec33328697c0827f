//! Admin users table with view/edit modal and confirmed delete.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::top_nav::TopNav;
use crate::components::user_modal::UserModal;
use crate::net::api;
use crate::net::types::User;
use crate::state::admin::{AdminTable, SUCCESS_CLEAR_MS, UserEditor, UserModalMode, patch_user_row};
use crate::util::format::format_date;
use crate::util::guard::install_session_guard;
use crate::util::{avatar, timer};

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let granted = install_session_guard(true, use_navigate());
    let table = RwSignal::new(AdminTable::<User>::default());
    let editor = RwSignal::new(UserEditor::default());
    let deleting = RwSignal::new(false);

    Effect::new(move || {
        if granted.get() {
            leptos::task::spawn_local(async move {
                let result = api::list_users().await;
                table.update(|t| t.finish_load(result, "Failed to load users"));
            });
        }
    });

    let has_success = Memo::new(move |_| editor.with(|e| !e.success.is_empty()));
    Effect::new(move || {
        if has_success.get() {
            timer::after(SUCCESS_CLEAR_MS, move || editor.update(|e| e.success.clear()));
        }
    });

    let open_user = move |id: String, mode: UserModalMode| {
        editor.update(|e| e.open_for(&id, mode));
        leptos::task::spawn_local(async move {
            let result = api::fetch_user(&id).await;
            editor.update(|e| e.finish_load(&id, result));
        });
    };

    let on_save = Callback::new(move |()| {
        let mut pending = None;
        editor.update(|e| pending = e.begin_save());
        let Some((id, body)) = pending else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::update_user(&id, &body).await;
            let mut updated = None;
            editor.update(|e| updated = e.finish_save(&body, result));
            if let Some(user) = updated {
                table.update(|t| t.update_row(&id, |row| patch_user_row(row, &user)));
            }
        });
    });

    let on_confirm_delete = Callback::new(move |()| {
        let mut id = None;
        table.update(|t| id = t.confirm_delete());
        let Some(id) = id else {
            return;
        };
        deleting.set(true);
        leptos::task::spawn_local(async move {
            let result = api::delete_user(&id).await;
            table.update(|t| {
                t.apply_delete(&id, result, "Failed to delete user");
            });
            deleting.set(false);
        });
    });

    view! {
        <Show when=move || granted.get() fallback=|| view! { <div class="page page--loading">"Checking access..."</div> }>
            <TopNav admin=true active="/admin/users" />
            <main class="page admin-page">
                <h1>"Users"</h1>
                <Show when=move || !table.with(|t| t.error.is_empty())>
                    <p class="admin-page__error">{move || table.get().error}</p>
                </Show>
                <Show when=move || !table.with(|t| t.loading) fallback=|| view! { <p>"Loading users..."</p> }>
                    <Show
                        when=move || !table.with(|t| t.rows.is_empty())
                        fallback=|| view! { <p class="admin-page__empty">"No users found."</p> }
                    >
                        <div class="data-table__wrap">
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"User"</th>
                                        <th>"Email"</th>
                                        <th>"Joined"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || table.get().rows
                                        key=|u| (u.id.clone(), u.display_name(), u.avatar_url.clone())
                                        children=move |u| {
                                            let view_id = u.id.clone();
                                            let edit_id = u.id.clone();
                                            let delete_id = u.id.clone();
                                            let image = avatar::resolve_avatar_url(u.avatar_url.as_deref())
                                                .unwrap_or_else(|| avatar::generate_avatar_url(&u.display_name(), 64));
                                            view! {
                                                <tr>
                                                    <td class="data-table__user">
                                                        <img class="avatar avatar--sm" src=image alt="" />
                                                        {u.display_name()}
                                                    </td>
                                                    <td>{u.email.clone().unwrap_or_default()}</td>
                                                    <td>{format_date(u.created_at.as_deref())}</td>
                                                    <td class="data-table__actions">
                                                        <button
                                                            class="btn btn--sm"
                                                            on:click=move |_| open_user(view_id.clone(), UserModalMode::View)
                                                        >
                                                            "View"
                                                        </button>
                                                        <button
                                                            class="btn btn--sm"
                                                            on:click=move |_| open_user(edit_id.clone(), UserModalMode::Edit)
                                                        >
                                                            "Edit"
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
            <Show when=move || editor.with(|e| e.open)>
                <UserModal editor=editor on_save=on_save />
            </Show>
            <Show when=move || table.with(|t| t.pending_delete.is_some())>
                <ConfirmDialog
                    title="Delete User"
                    message="Are you sure? This account will be permanently removed."
                    busy=deleting
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |()| table.update(AdminTable::cancel_delete))
                />
            </Show>
        </Show>
    }
}
