//! Credential store and session gate.
//!
//! The token lives in localStorage under a fixed key; the backend owns its
//! lifetime and an expired token surfaces as a 401 on the next request.
//! The gate is split in two: [`has_credential`] is the synchronous
//! predicate the navigation guard runs, and [`ensure_profile`] is the
//! follow-up async step that refills the session user name after a hard
//! reload. Nothing asynchronous hides behind the boolean check.

use console_types::Accredit;

use crate::api;
use crate::session;

const TOKEN_KEY: &str = "USER-TOKEN";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// The stored credential token, if any.
pub fn token() -> Option<String> {
    storage()
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

pub fn set_token(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn remove_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// True iff a credential token exists. Storage-only; never touches the
/// network.
pub fn has_credential() -> bool {
    token().is_some()
}

/// Cache the accredit after a successful login.
pub fn store_accredit(accredit: &Accredit) {
    set_token(&accredit.token);
    session::set_user_name(&accredit.user_name);
}

/// Drop everything tied to the session after logout.
pub fn clear_accredit() {
    remove_token();
    session::clear_user_name();
    session::clear_kept_alive_pages();
}

/// Refill the session user name when a token survived a page reload but
/// the in-memory state did not. Call once after the navigation guard
/// passes.
pub async fn ensure_profile() {
    if !has_credential() || !session::user_name().is_empty() {
        return;
    }
    match api::user::authorised().await {
        Ok(accredit) => session::set_user_name(&accredit.user_name),
        Err(err) => log::warn!("could not refresh the session profile: {err}"),
    }
}
