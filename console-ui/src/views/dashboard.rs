use dioxus::prelude::*;

use console_types::{Envelope, TraceStatistic};

use crate::api;
use crate::http::ApiError;
use crate::views::{TABLE_STYLE, TD_STYLE, TH_STYLE};

type StatResult = Result<Envelope<Vec<TraceStatistic>>, ApiError>;

#[component]
pub fn Dashboard() -> Element {
    let today = use_resource(|| async { api::trace::statistic_today().await });
    let week = use_resource(|| async { api::trace::statistic_week().await });
    let month = use_resource(|| async { api::trace::statistic_month().await });
    let all = use_resource(|| async { api::trace::statistic_all().await });

    rsx! {
        h2 { style: "margin-top: 0;", "Dashboard" }
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr)); gap: 1rem;",
            {panel("Today", &today)}
            {panel("This week", &week)}
            {panel("This month", &month)}
            {panel("All time", &all)}
        }
    }
}

fn panel(title: &str, resource: &Resource<StatResult>) -> Element {
    let body = match &*resource.read() {
        None => rsx! { p { style: "opacity: 0.6;", "Loading…" } },
        Some(Err(_)) => rsx! { p { style: "opacity: 0.6;", "Unavailable." } },
        Some(Ok(envelope)) => {
            let rows = envelope.data.clone().unwrap_or_default();
            if rows.is_empty() {
                rsx! { p { style: "opacity: 0.6;", "No executions." } }
            } else {
                rsx! {
                    table {
                        style: TABLE_STYLE,
                        thead {
                            tr {
                                th { style: TH_STYLE, "Job" }
                                th { style: TH_STYLE, "Total" }
                                th { style: TH_STYLE, "Succeeded" }
                                th { style: TH_STYLE, "Failed" }
                                th { style: TH_STYLE, "Failure %" }
                            }
                        }
                        tbody {
                            for row in rows {
                                tr {
                                    key: "{row.name}",
                                    td { style: TD_STYLE, "{row.name}" }
                                    td { style: TD_STYLE, "{row.total}" }
                                    td { style: TD_STYLE, "{row.succeed}" }
                                    td { style: TD_STYLE, "{row.failed}" }
                                    td { style: TD_STYLE, "{row.rate}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            style: "background: #1e293b; border-radius: 6px; padding: 0.8rem;",
            h3 { style: "margin: 0 0 0.6rem 0; font-size: 14px; opacity: 0.8;", "{title}" }
            {body}
        }
    }
}
