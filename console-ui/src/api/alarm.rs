use console_types::{AlarmConfig, Envelope};

use crate::http::{self, ApiError};

pub async fn get_alarm_config() -> Result<Envelope<AlarmConfig>, ApiError> {
    http::get("/alarm_configs", &[]).await
}

pub async fn put_alarm_config(config: &AlarmConfig) -> Result<Envelope<()>, ApiError> {
    http::put("/alarm_configs", config).await
}

/// Sends a probe mail with the given settings without saving them.
pub async fn test_alarm_config(config: &AlarmConfig) -> Result<Envelope<()>, ApiError> {
    http::post("/alarm_configs/test", config).await
}
