//! The single HTTP pipeline every resource client goes through.
//!
//! Cross-cutting behavior lives here and nowhere else: the auth header,
//! the busy counter, the 50 s deadline, and the mapping from envelope or
//! transport failures to toasts. A failed call produces exactly one toast;
//! callers get a typed [`ApiError`] and are not expected to present
//! anything themselves.
//!
//! Whatever the HTTP status says, a 2xx body with `succeed == false` is a
//! rejection. A 401 clears the stored token and forces a full reload,
//! which restarts the app at the login flow and abandons everything else
//! in flight.

use futures_util::future::{select, Either};
use futures_util::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::accredit;
use crate::config;
use crate::progress;
use crate::toast;

/// Fixed text shown whenever no response came back at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: cannot reach the scheduler service";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The scheduler answered 2xx but rejected the operation.
    #[error("{message}")]
    Rejected { message: String },
    /// No response: fetch failure or the request deadline.
    #[error("{message}")]
    Network { message: String },
    /// The session expired; the page is already reloading.
    #[error("session expired")]
    Unauthorized,
    /// Non-2xx response.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("{message}")]
    Decode { message: String },
    /// The request could not be constructed. Not expected in practice;
    /// propagated without a toast.
    #[error("{message}")]
    Build { message: String },
}

pub async fn get<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    send(builder(Verb::Get, path, query).build()).await
}

pub async fn post<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    send(builder(Verb::Post, path, &[]).json(body)).await
}

/// POST with no body; parameters, if any, go in the query string.
pub async fn post_empty<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    send(builder(Verb::Post, path, query).build()).await
}

pub async fn put<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    send(builder(Verb::Put, path, &[]).json(body)).await
}

pub async fn put_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send(builder(Verb::Put, path, &[]).build()).await
}

pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send(builder(Verb::Delete, path, &[]).build()).await
}

// ── Request phase ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

fn builder(verb: Verb, path: &str, query: &[(&str, String)]) -> RequestBuilder {
    let url = format!("{}{}", config::api_base(), path);
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Delete => Request::delete(&url),
    };
    let builder = builder
        .header("Content-Type", "application/json;charset=UTF-8")
        .credentials(web_sys::RequestCredentials::Include)
        .query(query.iter().map(|(k, v)| (*k, v.as_str())));

    match accredit::token() {
        Some(token) => builder.header("Authorization", &token),
        None => builder,
    }
}

// ── Response phase ────────────────────────────────────────────────────────────

enum Transport {
    Response(Response),
    Unreachable(String),
    TimedOut,
}

async fn send<T: DeserializeOwned>(
    prepared: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<T, ApiError> {
    let request = match prepared {
        Ok(request) => request,
        Err(err) => {
            return Err(ApiError::Build {
                message: err.to_string(),
            })
        }
    };

    progress::start();
    let transport = deliver(request).await;
    progress::done();

    match transport {
        Transport::Unreachable(message) => {
            toast::error(NETWORK_ERROR_MESSAGE);
            Err(ApiError::Network { message })
        }
        Transport::TimedOut => {
            toast::error(NETWORK_ERROR_MESSAGE);
            Err(ApiError::Network {
                message: "request deadline exceeded".to_string(),
            })
        }
        Transport::Response(response) => settle(response).await,
    }
}

async fn deliver(request: gloo_net::http::Request) -> Transport {
    let send = request.send();
    let deadline = TimeoutFuture::new(config::REQUEST_TIMEOUT_MS);
    pin_mut!(send);
    pin_mut!(deadline);

    match select(send, deadline).await {
        Either::Left((Ok(response), _)) => Transport::Response(response),
        Either::Left((Err(err), _)) => Transport::Unreachable(err.to_string()),
        Either::Right(((), _)) => Transport::TimedOut,
    }
}

async fn settle<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        let value: Value = match response.json().await {
            Ok(value) => value,
            Err(err) => {
                let message = err.to_string();
                toast::error(&message);
                return Err(ApiError::Decode { message });
            }
        };
        return match classify_envelope(&value) {
            Disposition::Resolved => serde_json::from_value(value).map_err(|err| {
                let message = err.to_string();
                toast::error(&message);
                ApiError::Decode { message }
            }),
            Disposition::Rejected(message) => {
                toast::error(&message);
                Err(ApiError::Rejected { message })
            }
        };
    }

    let status = response.status();
    if status == 401 {
        accredit::remove_token();
        reload_page();
        return Err(ApiError::Unauthorized);
    }

    let fallback = format!("HTTP {}: {}", status, response.status_text());
    let body = response.json::<Value>().await.ok();
    let message = failure_message(body.as_ref(), &fallback);
    toast::error(&message);
    Err(ApiError::Http { status, message })
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

// ── Classification ────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
enum Disposition {
    Resolved,
    Rejected(String),
}

/// A missing or non-boolean `succeed` counts as a rejection.
fn classify_envelope(value: &Value) -> Disposition {
    let succeed = value
        .get("succeed")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if succeed {
        Disposition::Resolved
    } else {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| value.get("msg").and_then(Value::as_str))
            .unwrap_or("operation failed")
            .to_string();
        Disposition::Rejected(message)
    }
}

/// Error bodies carry their text under `msg`; fall back to the transport
/// description otherwise.
fn failure_message(body: Option<&Value>, fallback: &str) -> String {
    body.and_then(|value| value.get("msg"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_success_resolves() {
        let value = json!({"succeed": true, "data": {"id": "42"}});
        assert_eq!(classify_envelope(&value), Disposition::Resolved);
    }

    #[test]
    fn test_envelope_rejection_carries_message() {
        let value = json!({"succeed": false, "message": "not found"});
        assert_eq!(
            classify_envelope(&value),
            Disposition::Rejected("not found".to_string())
        );
    }

    #[test]
    fn test_envelope_rejection_falls_back_to_msg_key() {
        let value = json!({"succeed": false, "msg": "no such job"});
        assert_eq!(
            classify_envelope(&value),
            Disposition::Rejected("no such job".to_string())
        );
    }

    #[test]
    fn test_body_without_flag_is_a_rejection() {
        let value = json!({"data": []});
        assert!(matches!(
            classify_envelope(&value),
            Disposition::Rejected(_)
        ));
    }

    #[test]
    fn test_failure_message_prefers_body_msg() {
        let body = json!({"msg": "job is still running"});
        assert_eq!(
            failure_message(Some(&body), "HTTP 500: Internal Server Error"),
            "job is still running"
        );
    }

    #[test]
    fn test_failure_message_without_body_uses_transport_text() {
        assert_eq!(
            failure_message(None, "HTTP 502: Bad Gateway"),
            "HTTP 502: Bad Gateway"
        );
        let body = json!({"error": "different shape"});
        assert_eq!(
            failure_message(Some(&body), "HTTP 500: Internal Server Error"),
            "HTTP 500: Internal Server Error"
        );
    }
}
