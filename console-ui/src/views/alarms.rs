use dioxus::prelude::*;

use console_types::AlarmConfig;

use crate::api;
use crate::toast;
use crate::views::{BUTTON_STYLE, INPUT_STYLE};

/// Mail alarm settings. One record system-wide; saving overwrites it.
#[component]
pub fn Alarms() -> Element {
    let mut draft = use_signal(AlarmConfig::default);
    let mut loaded = use_signal(|| false);

    let current = use_resource(|| async { api::alarm::get_alarm_config().await });

    // fill the form once the stored config arrives
    use_effect(move || {
        if *loaded.read() {
            return;
        }
        if let Some(Ok(envelope)) = &*current.read() {
            if let Some(config) = envelope.data.clone() {
                draft.set(config);
                loaded.set(true);
            }
        }
    });

    // recipients with a mail address, for reference below the form
    let recipients = use_resource(|| async {
        api::user::get_users_for_mail_select()
            .await
            .ok()
            .and_then(|envelope| envelope.data)
            .unwrap_or_default()
    });

    let save = use_callback(move |_: ()| {
        let config = draft.read().clone();
        spawn(async move {
            if api::alarm::put_alarm_config(&config).await.is_ok() {
                toast::success("Alarm settings saved");
            }
        });
    });

    let send_test = use_callback(move |_: ()| {
        let config = draft.read().clone();
        spawn(async move {
            if api::alarm::test_alarm_config(&config).await.is_ok() {
                toast::success("Probe mail sent");
            }
        });
    });

    let form = draft.read().clone();

    let recipient_list = match &*recipients.read() {
        None => rsx! { p { "Loading…" } },
        Some(users) if users.is_empty() => rsx! { p { "None yet. Add mail addresses on the Users page." } },
        Some(users) => rsx! {
            ul {
                style: "margin: 0; padding-left: 1.2rem;",
                for user in users.clone() {
                    li { key: "{user.id}", {format!("{} <{}>", user.name, user.email)} }
                }
            }
        },
    };

    rsx! {
        h2 { style: "margin-top: 0;", "Alarms" }
        div {
            style: "background: #1e293b; border-radius: 6px; padding: 1rem;
                    display: flex; flex-direction: column; gap: 0.6rem; max-width: 28rem;",
            input {
                style: INPUT_STYLE,
                placeholder: "System alarm mail",
                value: "{form.sys_alarm_email}",
                oninput: move |e| draft.write().sys_alarm_email = e.value(),
            }
            div {
                style: "display: flex; gap: 0.4rem;",
                input {
                    style: format!("{INPUT_STYLE} flex: 1;"),
                    placeholder: "SMTP host",
                    value: "{form.smtp_host}",
                    oninput: move |e| draft.write().smtp_host = e.value(),
                }
                input {
                    style: format!("{INPUT_STYLE} width: 6rem;"),
                    r#type: "number",
                    placeholder: "Port",
                    value: "{form.smtp_port}",
                    oninput: move |e| draft.write().smtp_port = e.value().parse().unwrap_or(0),
                }
            }
            input {
                style: INPUT_STYLE,
                placeholder: "SMTP user",
                value: "{form.smtp_user}",
                oninput: move |e| draft.write().smtp_user = e.value(),
            }
            input {
                style: INPUT_STYLE,
                r#type: "password",
                placeholder: "SMTP password",
                value: "{form.smtp_password}",
                oninput: move |e| draft.write().smtp_password = e.value(),
            }
            div {
                style: "display: flex; gap: 0.4rem; justify-content: flex-end;",
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| send_test.call(()),
                    "Send test mail"
                }
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| save.call(()),
                    "Save"
                }
            }
        }
        section {
            style: "margin-top: 1rem; opacity: 0.7; font-size: 13px;",
            h3 { style: "font-size: 13px; margin-bottom: 0.4rem;", "Users reachable by mail" }
            {recipient_list}
        }
    }
}
