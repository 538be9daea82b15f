use dioxus::prelude::*;

use console_types::{
    CleanTrace, Trace, TraceQuery, CLEAN_SCOPE_ALL, CLEAN_SCOPE_MONTH_AGO, CLEAN_SCOPE_WEEK_AGO,
    EXECUTE_STATUS_SUCCEED, SCHEDULE_TYPE_AUTO, SCHEDULE_TYPE_COMPENSATION, SCHEDULE_TYPE_DEPEND,
    SCHEDULE_TYPE_MANUAL,
};

use crate::api;
use crate::toast;
use crate::views::{format_millis, BUTTON_STYLE, INPUT_STYLE, TABLE_STYLE, TD_STYLE, TH_STYLE};

pub(crate) fn schedule_type_label(schedule_type: i32) -> &'static str {
    match schedule_type {
        SCHEDULE_TYPE_MANUAL => "Manual",
        SCHEDULE_TYPE_AUTO => "Auto",
        SCHEDULE_TYPE_COMPENSATION => "Compensation",
        SCHEDULE_TYPE_DEPEND => "Chained",
        _ => "Unknown",
    }
}

pub(crate) fn execute_status_label(status: i32) -> &'static str {
    if status == EXECUTE_STATUS_SUCCEED {
        "Succeeded"
    } else {
        "Failed"
    }
}

#[component]
pub fn Traces() -> Element {
    let mut job_name = use_signal(String::new);
    let mut status_filter = use_signal(String::new);
    let mut applied = use_signal(TraceQuery::default);
    let mut refresh = use_signal(|| 0u32);
    let mut detail = use_signal(|| None::<Trace>);
    let mut clean_scope = use_signal(|| CLEAN_SCOPE_WEEK_AGO.to_string());

    let traces = use_resource(move || {
        let _ = refresh();
        let mut query = applied.read().clone();
        async move {
            query.page_num = 1;
            query.page_size = 50;
            api::trace::get_traces(&query).await
        }
    });

    let search = use_callback(move |_: ()| {
        applied.set(TraceQuery {
            job_name: job_name.read().clone(),
            execute_status: status_filter.read().clone(),
            ..Default::default()
        });
    });

    let clean = use_callback(move |_: ()| {
        let body = CleanTrace {
            job_id: String::new(),
            scope: clean_scope.read().clone(),
        };
        spawn(async move {
            if api::trace::clean_traces(&body).await.is_ok() {
                toast::success("Traces cleaned");
                refresh += 1;
            }
        });
    });

    let detail_pane = match detail.read().clone() {
        Some(trace) => rsx! {
            div {
                style: "background: #1e293b; border-radius: 6px; padding: 1rem; margin-bottom: 0.8rem;",
                h3 { style: "margin: 0 0 0.5rem 0; font-size: 14px;", "Trace {trace.id} / {trace.job_name}" }
                p { style: "margin: 0.2rem 0;", "Result: {trace.execute_result}" }
                pre {
                    style: "white-space: pre-wrap; background: #0f172a; padding: 0.6rem;
                            border-radius: 4px; font-size: 12px;",
                    "{trace.execute_detail}"
                }
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| detail.set(None),
                    "Close"
                }
            }
        },
        None => rsx! {},
    };

    let listing = match &*traces.read() {
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
                            th { style: TH_STYLE, "Job" }
                            th { style: TH_STYLE, "Kind" }
                            th { style: TH_STYLE, "Started" }
                            th { style: TH_STYLE, "Finished" }
                            th { style: TH_STYLE, "Outcome" }
                            th { style: TH_STYLE, "" }
                        }
                    }
                    tbody {
                        {rows.iter().map(|trace| {
                            let id = trace.id.clone();
                            rsx! {
                                tr {
                                    key: "{trace.id}",
                                    td { style: TD_STYLE, "{trace.job_name}" }
                                    td { style: TD_STYLE, {schedule_type_label(trace.schedule_type)} }
                                    td { style: TD_STYLE, {format_millis(trace.start_time)} }
                                    td { style: TD_STYLE, {format_millis(trace.end_time)} }
                                    td { style: TD_STYLE, {execute_status_label(trace.execute_status)} }
                                    td {
                                        style: TD_STYLE,
                                        button {
                                            style: BUTTON_STYLE,
                                            onclick: move |_| {
                                                let id = id.clone();
                                                spawn(async move {
                                                    if let Ok(envelope) = api::trace::get_trace(&id).await {
                                                        if let Some(trace) = envelope.data {
                                                            detail.set(Some(trace));
                                                        }
                                                    }
                                                });
                                            },
                                            "Detail"
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
                p { style: "opacity: 0.6; font-size: 12px;", "{total} trace(s)" }
            }
        }
    };

    rsx! {
        h2 { style: "margin-top: 0;", "Traces" }
        div {
            style: "display: flex; gap: 0.5rem; margin-bottom: 0.8rem; align-items: center;",
            input {
                style: INPUT_STYLE,
                placeholder: "Job name",
                value: "{job_name}",
                oninput: move |e| job_name.set(e.value()),
            }
            select {
                style: INPUT_STYLE,
                onchange: move |e| status_filter.set(e.value()),
                option { value: "", "Any outcome" }
                option { value: "1", "Succeeded" }
                option { value: "0", "Failed" }
            }
            button {
                style: BUTTON_STYLE,
                onclick: move |_| search.call(()),
                "Search"
            }
            span { style: "flex: 1;" }
            select {
                style: INPUT_STYLE,
                onchange: move |e| clean_scope.set(e.value()),
                option { value: CLEAN_SCOPE_WEEK_AGO, "Older than a week" }
                option { value: CLEAN_SCOPE_MONTH_AGO, "Older than a month" }
                option { value: CLEAN_SCOPE_ALL, "Everything" }
            }
            button {
                style: BUTTON_STYLE,
                onclick: move |_| clean.call(()),
                "Clean"
            }
        }
        {detail_pane}
        {listing}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_type_labels() {
        assert_eq!(schedule_type_label(SCHEDULE_TYPE_MANUAL), "Manual");
        assert_eq!(schedule_type_label(SCHEDULE_TYPE_AUTO), "Auto");
        assert_eq!(schedule_type_label(99), "Unknown");
    }

    #[test]
    fn test_execute_status_labels() {
        assert_eq!(execute_status_label(1), "Succeeded");
        assert_eq!(execute_status_label(0), "Failed");
    }
}
