//! Page components. Deliberately lean: tables and forms over the resource
//! clients, no charting. All error presentation already happened in the
//! HTTP pipeline by the time a `Result` reaches a view.

pub mod about;
pub mod alarms;
pub mod cluster;
pub mod dashboard;
pub mod jobs;
pub mod login;
pub mod traces;
pub mod users;

pub use about::About;
pub use alarms::Alarms;
pub use cluster::Cluster;
pub use dashboard::Dashboard;
pub use jobs::Jobs;
pub use login::Login;
pub use traces::Traces;
pub use users::Users;

/// Epoch milliseconds to the browser's locale string; empty for unset.
pub(crate) fn format_millis(millis: i64) -> String {
    if millis <= 0 {
        return String::new();
    }
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis as f64));
    String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
}

pub(crate) const TABLE_STYLE: &str =
    "width: 100%; border-collapse: collapse; background: #1e293b; border-radius: 6px;";
pub(crate) const TH_STYLE: &str =
    "text-align: left; padding: 0.5rem 0.75rem; border-bottom: 1px solid #334155; opacity: 0.7;";
pub(crate) const TD_STYLE: &str =
    "padding: 0.5rem 0.75rem; border-bottom: 1px solid #28364d;";
pub(crate) const BUTTON_STYLE: &str =
    "background: #334155; border: none; color: inherit; cursor: pointer;
     padding: 0.25rem 0.6rem; border-radius: 4px; font-size: 12px;";
pub(crate) const INPUT_STYLE: &str =
    "background: #0f172a; border: 1px solid #334155; color: inherit;
     padding: 0.35rem 0.6rem; border-radius: 4px;";
