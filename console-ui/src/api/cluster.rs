use console_types::{Envelope, Node};

use crate::http::{self, ApiError};

fn remove_path(name: &str) -> String {
    format!("/cluster/remove/{name}")
}

pub async fn get_nodes() -> Result<Envelope<Vec<Node>>, ApiError> {
    http::get("/cluster/nodes", &[]).await
}

pub async fn remove_node(name: &str) -> Result<Envelope<()>, ApiError> {
    http::get(&remove_path(name), &[]).await
}

#[cfg(test)]
mod tests {
    use super::remove_path;

    #[test]
    fn test_remove_path() {
        assert_eq!(remove_path("node-2"), "/cluster/remove/node-2");
    }
}
