use console_types::{Accredit, Envelope, User};
use serde_json::json;

use crate::http::{self, ApiError};

fn user_path(id: &str) -> String {
    format!("/users/{id}")
}

fn user_by_name_path(name: &str) -> String {
    format!("/users/name/{name}")
}

pub async fn get_users(name: &str) -> Result<Envelope<Vec<User>>, ApiError> {
    let mut query = Vec::new();
    if !name.is_empty() {
        query.push(("name", name.to_string()));
    }
    http::get("/users", &query).await
}

/// Only users with a mail address, for the alarm recipient picker.
pub async fn get_users_for_mail_select() -> Result<Envelope<Vec<User>>, ApiError> {
    http::get("/users", &[("has_email", "true".to_string())]).await
}

pub async fn get_user(name: &str) -> Result<Envelope<User>, ApiError> {
    http::get(&user_by_name_path(name), &[]).await
}

pub async fn post_user(user: &User) -> Result<Envelope<()>, ApiError> {
    http::post("/users", user).await
}

pub async fn put_user(user: &User) -> Result<Envelope<()>, ApiError> {
    http::put("/users", user).await
}

pub async fn delete_user(id: &str) -> Result<Envelope<()>, ApiError> {
    http::delete(&user_path(id)).await
}

/// Token and user name come back at the top level of the envelope.
pub async fn login(name: &str, password: &str) -> Result<Accredit, ApiError> {
    http::post("/users/login", &json!({ "name": name, "password": password })).await
}

pub async fn authorised() -> Result<Accredit, ApiError> {
    http::get("/users/authorised", &[]).await
}

pub async fn logout() -> Result<Envelope<()>, ApiError> {
    http::get("/users/logout", &[]).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(user_path("5"), "/users/5");
        assert_eq!(user_by_name_path("admin"), "/users/name/admin");
    }
}
