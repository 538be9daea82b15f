//! Global busy indicator for in-flight requests.
//!
//! Reference-counted: the bar shows while at least one request is
//! outstanding, so overlapping requests cannot hide it early.

use dioxus::prelude::*;
use dioxus::signals::GlobalSignal;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressCounter {
    active: u32,
}

impl ProgressCounter {
    pub fn start(&mut self) {
        self.active = self.active.saturating_add(1);
    }

    pub fn done(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    pub fn active(&self) -> u32 {
        self.active
    }

    pub fn is_busy(&self) -> bool {
        self.active > 0
    }
}

pub static PROGRESS: GlobalSignal<ProgressCounter> = GlobalSignal::new(ProgressCounter::default);

pub fn start() {
    PROGRESS.write().start();
}

pub fn done() {
    PROGRESS.write().done();
}

pub fn is_busy() -> bool {
    PROGRESS.read().is_busy()
}

/// Thin bar pinned to the top of the viewport while requests are in flight.
#[component]
pub fn ProgressBar() -> Element {
    if !is_busy() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "
                position: fixed; top: 0; left: 0; right: 0; height: 3px;
                z-index: 10000;
                background: linear-gradient(90deg, #38bdf8, #818cf8);
                animation: progress-slide 1.2s ease-in-out infinite;
            ",
        }
        style { {PROGRESS_CSS} }
    }
}

const PROGRESS_CSS: &str = r#"
@keyframes progress-slide {
    0%   { transform: translateX(-60%); }
    100% { transform: translateX(60%); }
}
"#;

#[cfg(test)]
mod tests {
    use super::ProgressCounter;

    #[test]
    fn test_counter_tracks_overlapping_requests() {
        let mut counter = ProgressCounter::default();
        counter.start();
        counter.start();
        assert!(counter.is_busy());

        counter.done();
        // a sibling request is still outstanding
        assert!(counter.is_busy());

        counter.done();
        assert!(!counter.is_busy());
    }

    #[test]
    fn test_counter_saturates_at_zero() {
        let mut counter = ProgressCounter::default();
        counter.done();
        assert_eq!(counter.active(), 0);
        counter.start();
        assert_eq!(counter.active(), 1);
    }
}
