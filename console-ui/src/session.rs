//! In-memory session state for the loaded page.
//!
//! Lives only until the next full reload. Fields are private; every change
//! goes through a named mutation so state transitions stay auditable.

use dioxus::prelude::*;
use dioxus::signals::GlobalSignal;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    user_name: String,
    sidebar_collapsed: bool,
    kept_alive_pages: Vec<String>,
}

impl SessionState {
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// Pages visited this session, in first-visit order; drives the tab strip.
    pub fn kept_alive_pages(&self) -> &[String] {
        &self.kept_alive_pages
    }

    pub fn set_user_name(&mut self, name: &str) {
        self.user_name = name.to_string();
    }

    pub fn clear_user_name(&mut self) {
        self.user_name.clear();
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_collapsed = false;
    }

    pub fn open_page(&mut self, name: &str) {
        if !self.kept_alive_pages.iter().any(|p| p == name) {
            self.kept_alive_pages.push(name.to_string());
        }
    }

    pub fn close_page(&mut self, name: &str) {
        self.kept_alive_pages.retain(|p| p != name);
    }

    pub fn set_kept_alive_pages(&mut self, pages: Vec<String>) {
        self.kept_alive_pages = pages;
    }

    pub fn clear_kept_alive_pages(&mut self) {
        self.kept_alive_pages.clear();
    }
}

pub static SESSION: GlobalSignal<SessionState> = GlobalSignal::new(SessionState::default);

pub fn user_name() -> String {
    SESSION.read().user_name().to_string()
}

pub fn set_user_name(name: &str) {
    SESSION.write().set_user_name(name);
}

pub fn clear_user_name() {
    SESSION.write().clear_user_name();
}

pub fn toggle_sidebar() {
    SESSION.write().toggle_sidebar();
}

pub fn open_page(name: &str) {
    let already_open = SESSION
        .read()
        .kept_alive_pages()
        .iter()
        .any(|p| p == name);
    if !already_open {
        SESSION.write().open_page(name);
    }
}

pub fn close_page(name: &str) {
    SESSION.write().close_page(name);
}

pub fn clear_kept_alive_pages() {
    SESSION.write().clear_kept_alive_pages();
}

#[cfg(test)]
mod tests {
    use super::SessionState;

    #[test]
    fn test_user_name_mutations() {
        let mut state = SessionState::default();
        assert_eq!(state.user_name(), "");
        state.set_user_name("admin");
        assert_eq!(state.user_name(), "admin");
        state.clear_user_name();
        assert_eq!(state.user_name(), "");
    }

    #[test]
    fn test_sidebar_toggle_and_close() {
        let mut state = SessionState::default();
        state.toggle_sidebar();
        assert!(state.sidebar_collapsed());
        state.toggle_sidebar();
        assert!(!state.sidebar_collapsed());
        state.toggle_sidebar();
        state.close_sidebar();
        assert!(!state.sidebar_collapsed());
    }

    #[test]
    fn test_open_page_keeps_first_visit_order() {
        let mut state = SessionState::default();
        state.open_page("job");
        state.open_page("trace");
        state.open_page("job");
        assert_eq!(state.kept_alive_pages(), ["job", "trace"]);

        state.close_page("job");
        assert_eq!(state.kept_alive_pages(), ["trace"]);

        state.clear_kept_alive_pages();
        assert!(state.kept_alive_pages().is_empty());
    }
}
