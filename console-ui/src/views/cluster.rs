use dioxus::prelude::*;

use crate::api;
use crate::toast;
use crate::views::{BUTTON_STYLE, TABLE_STYLE, TD_STYLE, TH_STYLE};

#[component]
pub fn Cluster() -> Element {
    let mut refresh = use_signal(|| 0u32);

    let nodes = use_resource(move || {
        let _ = refresh();
        async move { api::cluster::get_nodes().await }
    });

    let body = match &*nodes.read() {
        None => rsx! { p { style: "opacity: 0.6;", "Loading…" } },
        Some(Err(_)) => rsx! { p { style: "opacity: 0.6;", "Unavailable." } },
        Some(Ok(envelope)) => {
            let rows = envelope.data.clone().unwrap_or_default();
            rsx! {
                table {
                    style: TABLE_STYLE,
                    thead {
                        tr {
                            th { style: TH_STYLE, "Node" }
                            th { style: TH_STYLE, "HTTP address" }
                            th { style: TH_STYLE, "TCP address" }
                            th { style: TH_STYLE, "Machine #" }
                            th { style: TH_STYLE, "" }
                        }
                    }
                    tbody {
                        {rows.iter().map(|node| {
                            let name = node.name.clone();
                            rsx! {
                                tr {
                                    key: "{node.name}",
                                    td { style: TD_STYLE, "{node.name}" }
                                    td { style: TD_STYLE, "{node.http_addr}" }
                                    td { style: TD_STYLE, "{node.tcp_addr}" }
                                    td { style: TD_STYLE, "{node.machine_num}" }
                                    td {
                                        style: TD_STYLE,
                                        button {
                                            style: BUTTON_STYLE,
                                            onclick: move |_| {
                                                let name = name.clone();
                                                spawn(async move {
                                                    if api::cluster::remove_node(&name).await.is_ok() {
                                                        toast::success("Node removed");
                                                        refresh += 1;
                                                    }
                                                });
                                            },
                                            "Remove"
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
        h2 { style: "margin-top: 0;", "Cluster" }
        {body}
    }
}
