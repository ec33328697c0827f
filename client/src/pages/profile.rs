//! Profile page: personal details and avatar management.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::components::top_nav::TopNav;
use crate::net::api;
use crate::state::profile::{COUNTRY_OPTIONS, ProfileEditor};
use crate::util::guard::install_session_guard;
use crate::util::session;

type FieldRef = fn(&mut ProfileEditor) -> &mut String;

fn bind(editor: RwSignal<ProfileEditor>, field: FieldRef) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || {
        let mut e = editor.get();
        field(&mut e).clone()
    });
    let on_input = Callback::new(move |v: String| editor.update(|e| *field(e) = v));
    (value, on_input)
}

fn has_session() -> bool {
    session::token().is_some_and(|t| !t.trim().is_empty())
}

fn revoke_object_urls(urls: Vec<String>) {
    #[cfg(feature = "hydrate")]
    for url in urls {
        if let Err(err) = web_sys::Url::revoke_object_url(&url) {
            leptos::logging::warn!("revoke {url} failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = urls;
}

/// Revoke previews the editor stopped showing.
fn release_previews(editor: RwSignal<ProfileEditor>) {
    if let Some(urls) = editor.try_update_untracked(ProfileEditor::take_released) {
        revoke_object_urls(urls);
    }
}

/// Pick up the chosen image, preview it locally, and upload it.
#[cfg(feature = "hydrate")]
fn upload_from_input(editor: RwSignal<ProfileEditor>, ev: &leptos::ev::Event) {
    use wasm_bindgen::JsCast;

    let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
        return;
    };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    input.set_value("");
    if !has_session() {
        editor.update(|e| e.avatar_session_missing(false));
        return;
    }
    if editor.with_untracked(|e| e.uploading) {
        return;
    }
    let preview = web_sys::Url::create_object_url_with_blob(&file).unwrap_or_default();
    let mut started = false;
    editor.update(|e| started = e.begin_upload(preview.clone()));
    if !started {
        revoke_object_urls(vec![preview]);
        return;
    }
    release_previews(editor);
    leptos::task::spawn_local(async move {
        let result = api::upload_avatar(&file).await;
        let mut persisted = None;
        editor.update(|e| persisted = e.finish_upload(result));
        release_previews(editor);
        if let Some(user) = persisted {
            session::persist_user(&user);
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn upload_from_input(editor: RwSignal<ProfileEditor>, ev: &leptos::ev::Event) {
    let _ = (editor, ev);
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let granted = install_session_guard(false, use_navigate());
    let editor = RwSignal::new(ProfileEditor::default());
    on_cleanup(move || {
        if let Some(urls) = editor.try_update_untracked(ProfileEditor::release_all) {
            revoke_object_urls(urls);
        }
    });

    Effect::new(move || {
        if !granted.get() {
            return;
        }
        if let Some(user) = session::cached_user() {
            editor.update(|e| e.fill_from(&user));
        }
        leptos::task::spawn_local(async move {
            match api::fetch_me().await {
                Ok(user) => {
                    let merged = session::persist_user(&user);
                    editor.update(|e| e.fill_from(&merged));
                }
                Err(err) => leptos::logging::warn!("profile refresh failed: {err}"),
            }
        });
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut body = None;
        editor.update(|e| body = e.begin_save());
        let Some(body) = body else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::update_me(&body).await;
            let mut persisted = None;
            editor.update(|e| persisted = e.finish_save(&body, result));
            if let Some(user) = persisted {
                session::persist_user(&user);
            }
        });
    };

    let on_delete_avatar = move |_| {
        if !has_session() {
            editor.update(|e| e.avatar_session_missing(true));
            return;
        }
        let mut started = false;
        editor.update(|e| started = e.begin_delete_avatar());
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = api::delete_avatar().await;
            let mut deleted = false;
            editor.update(|e| deleted = e.finish_delete_avatar(result));
            release_previews(editor);
            if deleted {
                session::clear_cached_avatar();
            }
        });
    };

    let (first_name, set_first_name) = bind(editor, |e| &mut e.first_name);
    let (last_name, set_last_name) = bind(editor, |e| &mut e.last_name);
    let (mobile, set_mobile) = bind(editor, |e| &mut e.mobile_number);
    let (address, set_address) = bind(editor, |e| &mut e.address);
    let (country, set_country) = bind(editor, |e| &mut e.country);
    let (gender, set_gender) = bind(editor, |e| &mut e.gender);
    let busy = move || editor.with(|e| e.uploading);

    view! {
        <Show when=move || granted.get() fallback=|| view! { <div class="page page--loading">"Loading..."</div> }>
            <TopNav active="/profile" />
            <main class="page profile-page">
                <section class="profile-card">
                    <div class="profile-card__avatar">
                        {move || match editor.with(ProfileEditor::display_avatar) {
                            Some(src) => view! { <img class="avatar avatar--xl" src=src alt="Profile avatar" /> }.into_any(),
                            None => {
                                view! {
                                    <span class="avatar avatar--xl avatar--initials">
                                        {move || editor.with(ProfileEditor::initials)}
                                    </span>
                                }
                                    .into_any()
                            }
                        }}
                        <div class="profile-card__avatar-actions">
                            <label class="btn" class:btn--disabled=busy>
                                {move || if busy() { "Working..." } else { "Upload photo" }}
                                <input
                                    type="file"
                                    accept="image/*"
                                    hidden=true
                                    disabled=busy
                                    on:change=move |ev| upload_from_input(editor, &ev)
                                />
                            </label>
                            <button
                                type="button"
                                class="btn btn--danger"
                                disabled=move || busy() || editor.with(|e| e.display_avatar().is_none())
                                on:click=on_delete_avatar
                            >
                                "Remove"
                            </button>
                        </div>
                    </div>
                    <div class="profile-card__identity">
                        <h1>
                            {move || {
                                editor.with(|e| format!("{} {}", e.first_name, e.last_name).trim().to_owned())
                            }}
                        </h1>
                        <p>{move || editor.get().email}</p>
                    </div>
                </section>

                <form class="profile-form" on:submit=on_save>
                    <div class="profile-form__grid">
                        <TextField label="First Name" value=first_name on_input=set_first_name />
                        <TextField label="Last Name" value=last_name on_input=set_last_name />
                        <label class="form-field">
                            <span class="form-field__label">"Email"</span>
                            <input class="form-field__input" type="email" disabled=true prop:value=move || editor.get().email />
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Mobile Number"</span>
                            <div class="form-field__phone">
                                <select
                                    class="form-field__input form-field__input--prefix"
                                    prop:value=move || country.get()
                                    on:change=move |ev| set_country.run(event_target_value(&ev))
                                >
                                    {COUNTRY_OPTIONS
                                        .iter()
                                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                        .collect_view()}
                                </select>
                                <input
                                    class="form-field__input"
                                    type="tel"
                                    prop:value=move || mobile.get()
                                    on:input=move |ev| set_mobile.run(event_target_value(&ev))
                                />
                            </div>
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Gender"</span>
                            <select
                                class="form-field__input"
                                prop:value=move || gender.get()
                                on:change=move |ev| set_gender.run(event_target_value(&ev))
                            >
                                <option value="">"Select"</option>
                                <option value="male">"Male"</option>
                                <option value="female">"Female"</option>
                            </select>
                        </label>
                        <TextField label="Address" value=address on_input=set_address />
                    </div>
                    <Show when=move || !editor.with(|e| e.error.is_empty())>
                        <p class="profile-form__error">{move || editor.get().error}</p>
                    </Show>
                    <Show when=move || !editor.with(|e| e.success.is_empty())>
                        <p class="profile-form__success">{move || editor.get().success}</p>
                    </Show>
                    <div class="profile-form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || editor.with(|e| e.saving)>
                            {move || if editor.with(|e| e.saving) { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </main>
        </Show>
    }
}
