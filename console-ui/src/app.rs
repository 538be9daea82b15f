//! Route table, shell layout, and the navigation guard.

use dioxus::prelude::*;

use console_types::RUN_MODE_STANDALONE;

use crate::accredit;
use crate::api;
use crate::progress::ProgressBar;
use crate::resources;
use crate::session::{self, SESSION};
use crate::toast::ToastHost;
use crate::views::{About, Alarms, Cluster, Dashboard, Jobs, Login, Traces, Users};

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(Shell)]
        #[redirect("/", || Route::Dashboard {})]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/job")]
        Jobs {},
        #[route("/trace")]
        Traces {},
        #[route("/user")]
        Users {},
        #[route("/alarm")]
        Alarms {},
        #[route("/cluster")]
        Cluster {},
        #[route("/about")]
        About {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        ProgressBar {}
        ToastHost {}
        Router::<Route> {}
    }
}

fn page_name(route: &Route) -> &'static str {
    match route {
        Route::Login {} => "login",
        Route::Dashboard {} => "dashboard",
        Route::Jobs {} => "job",
        Route::Traces {} => "trace",
        Route::Users {} => "user",
        Route::Alarms {} => "alarm",
        Route::Cluster {} => "cluster",
        Route::About {} => "about",
    }
}

fn route_for(name: &str) -> Route {
    match name {
        "job" => Route::Jobs {},
        "trace" => Route::Traces {},
        "user" => Route::Users {},
        "alarm" => Route::Alarms {},
        "cluster" => Route::Cluster {},
        "about" => Route::About {},
        _ => Route::Dashboard {},
    }
}

/// Layout around every page except login. Also the navigation guard:
/// without a credential the route is replaced with the login page before
/// anything renders.
#[component]
fn Shell() -> Element {
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let logged_in = accredit::has_credential();

    // which menu to show depends on the deployment mode
    let runmode = use_resource(|| async {
        api::runtime::get_runmode()
            .await
            .ok()
            .and_then(|envelope| envelope.data)
    });

    use_effect(move || {
        if !accredit::has_credential() {
            navigator.replace(Route::Login {});
        }
    });

    // refill the profile after a hard reload, once the guard has passed
    use_effect(move || {
        if accredit::has_credential() {
            spawn(async move {
                accredit::ensure_profile().await;
            });
        }
    });

    // record the visited page in the tab strip
    let current = page_name(&route);
    use_effect(use_reactive!(|current| {
        if accredit::has_credential() {
            session::open_page(current);
        }
    }));

    if !logged_in {
        return rsx! {};
    }

    let mode = runmode
        .read()
        .clone()
        .flatten()
        .unwrap_or_else(|| RUN_MODE_STANDALONE.to_string());
    let menu = resources::menu_for(&mode);

    let collapsed = SESSION.read().sidebar_collapsed();
    let user_name = session::user_name();
    let tabs: Vec<&'static resources::MenuEntry> = SESSION
        .read()
        .kept_alive_pages()
        .iter()
        .filter_map(|name| resources::entry_by_name(name))
        .collect();

    let on_logout = move |_| {
        spawn(async move {
            let _ = api::user::logout().await;
            accredit::clear_accredit();
            navigator.replace(Route::Login {});
        });
    };

    rsx! {
        div {
            style: "display: flex; min-height: 100vh; background: #0f172a; color: #e2e8f0;
                    font-family: 'Inter', 'Helvetica Neue', sans-serif; font-size: 14px;",

            // sidebar
            aside {
                style: format!(
                    "background: #1e293b; padding: 1rem 0; flex-shrink: 0; width: {};",
                    if collapsed { "3.2rem" } else { "13rem" }
                ),
                div {
                    style: "padding: 0 1rem 1rem 1rem; font-weight: 600; white-space: nowrap; overflow: hidden;",
                    if collapsed { "⏱" } else { "⏱ Scheduler Console" }
                }
                for entry in menu {
                    Link {
                        to: route_for(entry.name),
                        style: format!(
                            "display: block; padding: 0.55rem 1rem; color: inherit;
                             text-decoration: none; white-space: nowrap; overflow: hidden;
                             background: {};",
                            if entry.name == current { "#334155" } else { "transparent" }
                        ),
                        if collapsed { "{entry.icon}" } else { "{entry.icon} {entry.title}" }
                    }
                }
            }

            // main column
            div {
                style: "flex: 1; display: flex; flex-direction: column; min-width: 0;",

                header {
                    style: "display: flex; align-items: center; gap: 1rem;
                            padding: 0.6rem 1rem; background: #1e293b;",
                    button {
                        style: "background: none; border: none; color: inherit; cursor: pointer; font-size: 16px;",
                        onclick: move |_| session::toggle_sidebar(),
                        "☰"
                    }
                    span { style: "flex: 1;" }
                    span { style: "opacity: 0.8;", "{user_name}" }
                    button {
                        style: "background: #334155; border: none; color: inherit;
                                cursor: pointer; padding: 0.3rem 0.8rem; border-radius: 4px;",
                        onclick: on_logout,
                        "Sign out"
                    }
                }

                // visited-page tab strip
                div {
                    style: "display: flex; gap: 0.4rem; padding: 0.4rem 1rem; background: #16213a;",
                    for entry in tabs {
                        span {
                            key: "{entry.name}",
                            style: format!(
                                "display: inline-flex; align-items: center; gap: 0.4rem;
                                 padding: 0.15rem 0.6rem; border-radius: 4px; font-size: 12px;
                                 background: {};",
                                if entry.name == current { "#334155" } else { "#1e293b" }
                            ),
                            Link {
                                to: route_for(entry.name),
                                style: "color: inherit; text-decoration: none;",
                                "{entry.title}"
                            }
                            if entry.name != current {
                                span {
                                    style: "cursor: pointer; opacity: 0.6;",
                                    onclick: move |_| session::close_page(entry.name),
                                    "×"
                                }
                            }
                        }
                    }
                }

                main {
                    style: "flex: 1; padding: 1.2rem;",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
