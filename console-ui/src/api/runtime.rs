use console_types::{Envelope, Runtime};

use crate::http::{self, ApiError};

pub async fn get_runtime() -> Result<Envelope<Runtime>, ApiError> {
    http::get("/runtimes", &[]).await
}

/// "standalone" or "cluster"; decides which menu the shell renders.
pub async fn get_runmode() -> Result<Envelope<String>, ApiError> {
    http::get("/runtimes/runmode", &[]).await
}
