//! Toast notifications.
//!
//! The HTTP pipeline is the only producer of error toasts; views may push
//! success notices after mutating calls. Each toast dismisses itself after
//! five seconds.

use dioxus::prelude::*;
use dioxus::signals::GlobalSignal;

const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, level: ToastLevel, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, level, message });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

pub static TOASTS: GlobalSignal<ToastQueue> = GlobalSignal::new(ToastQueue::default);

pub fn error(message: &str) {
    show(ToastLevel::Error, message);
}

pub fn success(message: &str) {
    show(ToastLevel::Success, message);
}

fn show(level: ToastLevel, message: &str) {
    let id = TOASTS.write().push(level, message.to_string());

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        TOASTS.write().dismiss(id);
    });
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

/// Fixed overlay rendering the toast stack; clicking a toast dismisses it.
#[component]
pub fn ToastHost() -> Element {
    let toasts = TOASTS.read().toasts().to_vec();
    if toasts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "
                position: fixed; top: 1rem; right: 1rem; z-index: 10001;
                display: flex; flex-direction: column; gap: 0.5rem;
                max-width: 22rem;
            ",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    style: format!(
                        "padding: 0.6rem 0.9rem; border-radius: 6px; color: #fff;
                         font-size: 13px; cursor: pointer; box-shadow: 0 2px 8px rgba(0,0,0,0.35);
                         background: {};",
                        match toast.level {
                            ToastLevel::Error => "#dc2626",
                            ToastLevel::Success => "#16a34a",
                        }
                    ),
                    onclick: move |_| {
                        TOASTS.write().dismiss(toast.id);
                    },
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastLevel::Error, "first".into());
        let b = queue.push(ToastLevel::Success, "second".into());
        assert!(b > a);
        assert_eq!(queue.toasts().len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastLevel::Error, "keep".into());
        let b = queue.push(ToastLevel::Error, "drop".into());
        queue.dismiss(b);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, a);
    }
}
