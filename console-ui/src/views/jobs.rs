use dioxus::prelude::*;

use console_types::{Job, JobQuery, JOB_STATUS_OK, JOB_STATUS_PAUSED};

use crate::api;
use crate::toast;
use crate::views::{format_millis, BUTTON_STYLE, INPUT_STYLE, TABLE_STYLE, TD_STYLE, TH_STYLE};

#[component]
pub fn Jobs() -> Element {
    let mut filter = use_signal(String::new);
    let mut applied_filter = use_signal(String::new);
    let mut refresh = use_signal(|| 0u32);
    let mut editing = use_signal(|| None::<Job>);

    let jobs = use_resource(move || {
        let _ = refresh();
        let name = applied_filter.read().clone();
        async move {
            let query = JobQuery {
                page_num: 1,
                page_size: 50,
                name,
                ..Default::default()
            };
            api::job::get_jobs(&query).await
        }
    });

    let form = match editing.read().clone() {
        Some(draft) => rsx! {
            JobForm {
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

    let listing = match &*jobs.read() {
        None => rsx! { p { style: "opacity: 0.6;", "Loading…" } },
        Some(Err(_)) => rsx! { p { style: "opacity: 0.6;", "Unavailable." } },
        Some(Ok(envelope)) => {
            let rows = envelope.data.clone().unwrap_or_default();
            let total = envelope.total.unwrap_or(rows.len() as u64);
            rsx! {
                table {
                    style: TABLE_STYLE,
                    thead {
                        tr {
                            th { style: TH_STYLE, "Name" }
                            th { style: TH_STYLE, "Cron" }
                            th { style: TH_STYLE, "Target" }
                            th { style: TH_STYLE, "Creator" }
                            th { style: TH_STYLE, "Created" }
                            th { style: TH_STYLE, "Status" }
                            th { style: TH_STYLE, "" }
                        }
                    }
                    tbody {
                        {rows.iter().map(|job| {
                            let paused = job.status == JOB_STATUS_PAUSED;
                            let toggle_id = job.id.clone();
                            let launch_id = job.id.clone();
                            let edit_id = job.id.clone();
                            let delete_id = job.id.clone();
                            rsx! {
                                tr {
                                    key: "{job.id}",
                                    td { style: TD_STYLE, "{job.name}" }
                                    td { style: TD_STYLE, code { "{job.cron}" } }
                                    td { style: TD_STYLE, "{job.protocol}://{job.uri}" }
                                    td { style: TD_STYLE, "{job.creator}" }
                                    td { style: TD_STYLE, {format_millis(job.create_time)} }
                                    td {
                                        style: TD_STYLE,
                                        if paused { "Paused" } else { "Active" }
                                    }
                                    td {
                                        style: TD_STYLE,
                                        div {
                                            style: "display: flex; gap: 0.4rem;",
                                            button {
                                                style: BUTTON_STYLE,
                                                onclick: move |_| {
                                                    let id = toggle_id.clone();
                                                    let next = if paused { JOB_STATUS_OK } else { JOB_STATUS_PAUSED };
                                                    spawn(async move {
                                                        if api::job::update_status(&id, &next.to_string()).await.is_ok() {
                                                            refresh += 1;
                                                        }
                                                    });
                                                },
                                                if paused { "Resume" } else { "Pause" }
                                            }
                                            button {
                                                style: BUTTON_STYLE,
                                                onclick: move |_| {
                                                    let id = launch_id.clone();
                                                    spawn(async move {
                                                        if api::job::launch_job(&id).await.is_ok() {
                                                            toast::success("Launch requested");
                                                        }
                                                    });
                                                },
                                                "Launch"
                                            }
                                            button {
                                                style: BUTTON_STYLE,
                                                onclick: move |_| {
                                                    let id = edit_id.clone();
                                                    spawn(async move {
                                                        if let Ok(envelope) = api::job::get_job(&id).await {
                                                            if let Some(job) = envelope.data {
                                                                editing.set(Some(job));
                                                            }
                                                        }
                                                    });
                                                },
                                                "Edit"
                                            }
                                            button {
                                                style: BUTTON_STYLE,
                                                onclick: move |_| {
                                                    let id = delete_id.clone();
                                                    spawn(async move {
                                                        if api::job::delete_job(&id).await.is_ok() {
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
                p { style: "opacity: 0.6; font-size: 12px;", "{total} job(s)" }
            }
        }
    };

    rsx! {
        h2 { style: "margin-top: 0;", "Jobs" }
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
                onclick: move |_| {
                    editing.set(Some(Job {
                        protocol: "http".to_string(),
                        ..Default::default()
                    }));
                },
                "New job"
            }
        }
        {form}
        {listing}
    }
}

/// Create/edit form. An empty draft id means create.
#[component]
fn JobForm(draft: Job, on_done: EventHandler<bool>) -> Element {
    let creating = draft.id.is_empty();
    let mut job = use_signal(move || draft);

    // parent-job options for chaining
    let parents = use_resource(|| async {
        api::job::get_job_selections("")
            .await
            .ok()
            .and_then(|envelope| envelope.data)
            .unwrap_or_default()
    });

    let save = use_callback(move |_: ()| {
        let draft = job.read().clone();
        if draft.name.is_empty() || draft.cron.is_empty() || draft.uri.is_empty() {
            return;
        }
        spawn(async move {
            let result = if creating {
                api::job::post_job(&draft).await
            } else {
                api::job::put_job(&draft).await
            };
            if result.is_ok() {
                toast::success(if creating { "Job created" } else { "Job updated" });
                on_done.call(true);
            }
        });
    });

    let check_cron = use_callback(move |_: ()| {
        let spec = job.read().cron.clone();
        if spec.is_empty() {
            return;
        }
        spawn(async move {
            if api::job::validate_cron(&spec).await.is_ok() {
                toast::success("Cron expression is valid");
            }
        });
    });

    let form = job.read().clone();
    let parent_options = parents.read().clone().unwrap_or_default();

    rsx! {
        div {
            style: "background: #1e293b; border-radius: 6px; padding: 1rem; margin-bottom: 1rem;
                    display: flex; flex-direction: column; gap: 0.6rem; max-width: 34rem;",
            h3 {
                style: "margin: 0; font-size: 14px;",
                if creating { "New job" } else { "Edit job" }
            }
            input {
                style: INPUT_STYLE,
                placeholder: "Name",
                value: "{form.name}",
                oninput: move |e| job.write().name = e.value(),
            }
            div {
                style: "display: flex; gap: 0.4rem;",
                input {
                    style: format!("{INPUT_STYLE} flex: 1;"),
                    placeholder: "Cron expression",
                    value: "{form.cron}",
                    oninput: move |e| job.write().cron = e.value(),
                }
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| check_cron.call(()),
                    "Validate"
                }
            }
            div {
                style: "display: flex; gap: 0.4rem;",
                select {
                    style: INPUT_STYLE,
                    value: "{form.protocol}",
                    onchange: move |e| job.write().protocol = e.value(),
                    option { value: "http", "http" }
                    option { value: "https", "https" }
                }
                input {
                    style: format!("{INPUT_STYLE} flex: 1;"),
                    placeholder: "Target URI",
                    value: "{form.uri}",
                    oninput: move |e| job.write().uri = e.value(),
                }
            }
            select {
                style: INPUT_STYLE,
                value: "{form.pre_job_id}",
                onchange: move |e| job.write().pre_job_id = e.value(),
                option { value: "", "No parent job" }
                for parent in parent_options {
                    option { key: "{parent.id}", value: "{parent.id}", "{parent.name}" }
                }
            }
            input {
                style: INPUT_STYLE,
                placeholder: "Alarm mail (optional)",
                value: "{form.alarm_email}",
                oninput: move |e| job.write().alarm_email = e.value(),
            }
            textarea {
                style: format!("{INPUT_STYLE} resize: vertical;"),
                placeholder: "Remark",
                value: "{form.remark}",
                oninput: move |e| job.write().remark = e.value(),
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
