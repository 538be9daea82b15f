use dioxus::prelude::*;

use crate::accredit;
use crate::api;
use crate::app::Route;
use crate::views::{BUTTON_STYLE, INPUT_STYLE};

#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = use_callback(move |_: ()| {
        if *busy.read() {
            return;
        }
        let user = name.read().trim().to_string();
        let pass = password.read().clone();
        if user.is_empty() || pass.is_empty() {
            return;
        }
        busy.set(true);
        spawn(async move {
            match api::user::login(&user, &pass).await {
                Ok(acc) => {
                    accredit::store_accredit(&acc);
                    navigator.replace(Route::Dashboard {});
                }
                Err(_) => {
                    // the pipeline already surfaced the failure
                }
            }
            busy.set(false);
        });
    });

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center;
                    background: #0f172a; color: #e2e8f0;
                    font-family: 'Inter', 'Helvetica Neue', sans-serif;",
            div {
                style: "background: #1e293b; padding: 2rem; border-radius: 8px; width: 20rem;
                        display: flex; flex-direction: column; gap: 0.8rem;",
                h2 { style: "margin: 0 0 0.5rem 0; font-size: 18px;", "Scheduler Console" }
                input {
                    style: INPUT_STYLE,
                    placeholder: "User name",
                    autocomplete: "username",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                input {
                    style: INPUT_STYLE,
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            submit.call(());
                        }
                    },
                }
                button {
                    style: BUTTON_STYLE,
                    disabled: *busy.read(),
                    onclick: move |_| submit.call(()),
                    if *busy.read() { "Signing in…" } else { "Sign in" }
                }
            }
        }
    }
}
