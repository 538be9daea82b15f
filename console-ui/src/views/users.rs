use dioxus::prelude::*;

use console_types::User;

use crate::api;
use crate::toast;
use crate::views::{format_millis, BUTTON_STYLE, INPUT_STYLE, TABLE_STYLE, TD_STYLE, TH_STYLE};

#[component]
pub fn Users() -> Element {
    let mut filter = use_signal(String::new);
    let mut applied_filter = use_signal(String::new);
    let mut refresh = use_signal(|| 0u32);
    let mut editing = use_signal(|| None::<User>);

    let users = use_resource(move || {
        let _ = refresh();
        let name = applied_filter.read().clone();
        async move { api::user::get_users(&name).await }
    });

    let form = match editing.read().clone() {
        Some(draft) => rsx! {
            UserForm {
                key: "{draft.id}",
                draft: draft.clone(),
                on_done: move |saved: bool| {
                    editing.set(None);
                    if saved {
                        refresh += 1;
                    }
                },
            }
        },
        None => rsx! {},
    };

    let listing = match &*users.read() {
        None => rsx! { p { style: "opacity: 0.6;", "Loading…" } },
        Some(Err(_)) => rsx! { p { style: "opacity: 0.6;", "Unavailable." } },
        Some(Ok(envelope)) => {
            let rows = envelope.data.clone().unwrap_or_default();
            rsx! {
                table {
                    style: TABLE_STYLE,
                    thead {
                        tr {
                            th { style: TH_STYLE, "Name" }
                            th { style: TH_STYLE, "Mail" }
                            th { style: TH_STYLE, "Updated" }
                            th { style: TH_STYLE, "" }
                        }
                    }
                    tbody {
                        {rows.iter().map(|user| {
                            let edit_user = user.clone();
                            let delete_id = user.id.clone();
                            rsx! {
                                tr {
                                    key: "{user.id}",
                                    td { style: TD_STYLE, "{user.name}" }
                                    td { style: TD_STYLE, "{user.email}" }
                                    td { style: TD_STYLE, {format_millis(user.update_time)} }
                                    td {
                                        style: TD_STYLE,
                                        div {
                                            style: "display: flex; gap: 0.4rem;",
                                            button {
                                                style: BUTTON_STYLE,
                                                onclick: move |_| editing.set(Some(edit_user.clone())),
                                                "Edit"
                                            }
                                            button {
                                                style: BUTTON_STYLE,
                                                onclick: move |_| {
                                                    let id = delete_id.clone();
                                                    spawn(async move {
                                                        if api::user::delete_user(&id).await.is_ok() {
                                                            refresh += 1;
                                                        }
                                                    });
                                                },
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
            }
        }
    };

    rsx! {
        h2 { style: "margin-top: 0;", "Users" }
        div {
            style: "display: flex; gap: 0.5rem; margin-bottom: 0.8rem;",
            input {
                style: INPUT_STYLE,
                placeholder: "Filter by name",
                value: "{filter}",
                oninput: move |e| filter.set(e.value()),
            }
            button {
                style: BUTTON_STYLE,
                onclick: move |_| applied_filter.set(filter.read().clone()),
                "Search"
            }
            span { style: "flex: 1;" }
            button {
                style: BUTTON_STYLE,
                onclick: move |_| editing.set(Some(User::default())),
                "New user"
            }
        }
        {form}
        {listing}
    }
}

#[component]
fn UserForm(draft: User, on_done: EventHandler<bool>) -> Element {
    let creating = draft.id.is_empty();
    let mut user = use_signal(move || draft);

    let save = use_callback(move |_: ()| {
        let draft = user.read().clone();
        if draft.name.is_empty() || (creating && draft.password.is_empty()) {
            return;
        }
        spawn(async move {
            let result = if creating {
                api::user::post_user(&draft).await
            } else {
                api::user::put_user(&draft).await
            };
            if result.is_ok() {
                toast::success(if creating { "User created" } else { "User updated" });
                on_done.call(true);
            }
        });
    });

    let form = user.read().clone();

    rsx! {
        div {
            style: "background: #1e293b; border-radius: 6px; padding: 1rem; margin-bottom: 1rem;
                    display: flex; flex-direction: column; gap: 0.6rem; max-width: 24rem;",
            h3 {
                style: "margin: 0; font-size: 14px;",
                if creating { "New user" } else { "Edit user" }
            }
            input {
                style: INPUT_STYLE,
                placeholder: "Name",
                value: "{form.name}",
                oninput: move |e| user.write().name = e.value(),
            }
            input {
                style: INPUT_STYLE,
                r#type: "password",
                placeholder: "Password",
                value: "{form.password}",
                oninput: move |e| user.write().password = e.value(),
            }
            input {
                style: INPUT_STYLE,
                placeholder: "Mail address (optional)",
                value: "{form.email}",
                oninput: move |e| user.write().email = e.value(),
            }
            div {
                style: "display: flex; gap: 0.4rem; justify-content: flex-end;",
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| on_done.call(false),
                    "Cancel"
                }
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| save.call(()),
                    "Save"
                }
            }
        }
    }
}
