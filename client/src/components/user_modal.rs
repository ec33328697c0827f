//! Admin modal to view or edit one user.

use leptos::prelude::*;

use crate::net::types::{EMPTY_CELL, ProfileUpdate};
use crate::state::admin::{UserEditor, UserModalMode};
use crate::util::avatar;
use crate::util::format::format_date;

fn edit_form(editor: RwSignal<UserEditor>, label: &'static str, pick: fn(&mut ProfileUpdate) -> &mut String) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type="text"
                prop:value=move || {
                    let mut form = editor.get().form;
                    pick(&mut form).clone()
                }
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    editor.update(|e| *pick(&mut e.form) = value);
                }
            />
        </label>
    }
}

#[component]
pub fn UserModal(editor: RwSignal<UserEditor>, on_save: Callback<()>) -> impl IntoView {
    let on_close = move || editor.update(UserEditor::close);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close();
        }
    };
    let editing = move || editor.get().mode == UserModalMode::Edit;
    let user = move || editor.get().user.unwrap_or_default();
    let field = |value: Option<String>| value.filter(|v| !v.is_empty()).unwrap_or_else(|| EMPTY_CELL.to_owned());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close()>
            <div
                class="dialog dialog--wide"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>{move || if editing() { "Edit User" } else { "User Details" }}</h2>
                    <button class="dialog__close" on:click=move |_| on_close() title="Close">
                        "✕"
                    </button>
                </div>
                <Show when=move || editor.get().loading>
                    <p class="dialog__hint">"Loading user..."</p>
                </Show>
                <Show when=move || !editor.get().error.is_empty()>
                    <p class="dialog__danger">{move || editor.get().error}</p>
                </Show>
                <Show when=move || !editor.get().success.is_empty()>
                    <p class="dialog__success">{move || editor.get().success}</p>
                </Show>
                <div class="user-card">
                    {move || {
                        let u = user();
                        match avatar::resolve_avatar_url(u.avatar_url.as_deref()) {
                            Some(src) => view! { <img class="avatar avatar--lg" src=src alt="Avatar" /> }.into_any(),
                            None => {
                                view! { <span class="avatar avatar--lg avatar--initials">{avatar::user_initials(&u)}</span> }
                                    .into_any()
                            }
                        }
                    }}
                    <div>
                        <strong>{move || user().display_name()}</strong>
                        <p class="user-card__email">{move || field(user().email)}</p>
                    </div>
                </div>
                <Show
                    when=editing
                    fallback=move || {
                        view! {
                            <dl class="detail-grid">
                                <dt>"First name"</dt>
                                <dd>{move || field(user().first_name)}</dd>
                                <dt>"Last name"</dt>
                                <dd>{move || field(user().last_name)}</dd>
                                <dt>"Mobile"</dt>
                                <dd>{move || field(user().mobile_number)}</dd>
                                <dt>"Gender"</dt>
                                <dd>{move || field(user().gender)}</dd>
                                <dt>"Address"</dt>
                                <dd>{move || field(user().address)}</dd>
                                <dt>"Joined"</dt>
                                <dd>{move || format_date(user().created_at.as_deref())}</dd>
                            </dl>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| on_close()>
                                    "Close"
                                </button>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || editor.get().loading
                                    on:click=move |_| editor.update(|e| e.mode = UserModalMode::Edit)
                                >
                                    "Edit"
                                </button>
                            </div>
                        }
                    }
                >
                    {edit_form(editor, "First name", |f| &mut f.first_name)}
                    {edit_form(editor, "Last name", |f| &mut f.last_name)}
                    {edit_form(editor, "Mobile", |f| &mut f.mobile_number)}
                    <label class="dialog__label">
                        "Gender"
                        <select
                            class="dialog__input"
                            prop:value=move || editor.get().form.gender
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                editor.update(|e| e.form.gender = value);
                            }
                        >
                            <option value="">"Select"</option>
                            <option value="male">"Male"</option>
                            <option value="female">"Female"</option>
                        </select>
                    </label>
                    {edit_form(editor, "Address", |f| &mut f.address)}
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| editor.update(|e| e.mode = UserModalMode::View)>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || editor.get().saving
                            on:click=move |_| on_save.run(())
                        >
                            {move || if editor.get().saving { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
