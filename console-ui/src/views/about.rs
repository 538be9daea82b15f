use dioxus::prelude::*;

use crate::api;

#[component]
pub fn About() -> Element {
    let runtime = use_resource(|| async { api::runtime::get_runtime().await });

    let body = match &*runtime.read() {
        None => rsx! { p { style: "opacity: 0.6;", "Loading…" } },
        Some(Err(_)) => rsx! { p { style: "opacity: 0.6;", "Unavailable." } },
        Some(Ok(envelope)) => {
            let info = envelope.data.clone().unwrap_or_default();
            rsx! {
                dl {
                    style: "display: grid; grid-template-columns: 12rem 1fr; gap: 0.4rem 1rem;
                            background: #1e293b; border-radius: 6px; padding: 1rem; max-width: 34rem;",
                    dt { style: "opacity: 0.6;", "Run mode" }
                    dd { style: "margin: 0;", "{info.run_mode}" }
                    dt { style: "opacity: 0.6;", "Started" }
                    dd { style: "margin: 0;", "{info.start_time}" }
                    dt { style: "opacity: 0.6;", "Jobs" }
                    dd { style: "margin: 0;", "{info.job_count}" }
                    dt { style: "opacity: 0.6;", "Executions" }
                    dd { style: "margin: 0;", "{info.trigger_times}" }
                    dt { style: "opacity: 0.6;", "Execute nodes" }
                    dd { style: "margin: 0;", "{info.execute_node_count} ({info.usable_node_amount} usable, {info.disabled_node_amount} down)" }
                    dt { style: "opacity: 0.6;", "Cluster nodes" }
                    dd { style: "margin: 0;", "{info.cluster_node_count}" }
                    dt { style: "opacity: 0.6;", "Databases" }
                    dd { style: "margin: 0;", "{info.usable_db_amount} usable, {info.disabled_db_amount} down" }
                }
            }
        }
    };

    rsx! {
        h2 { style: "margin-top: 0;", "About" }
        {body}
    }
}
