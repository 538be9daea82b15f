use console_types::{CleanTrace, Envelope, Trace, TraceQuery, TraceStatistic};

use crate::http::{self, ApiError};

fn trace_path(id: &str) -> String {
    format!("/traces/{id}")
}

fn statistic_path(range: &str) -> String {
    format!("/statistic/{range}")
}

pub async fn get_traces(query: &TraceQuery) -> Result<Envelope<Vec<Trace>>, ApiError> {
    http::get("/traces", &query.to_pairs()).await
}

pub async fn get_trace(id: &str) -> Result<Envelope<Trace>, ApiError> {
    http::get(&trace_path(id), &[]).await
}

pub async fn clean_traces(body: &CleanTrace) -> Result<Envelope<()>, ApiError> {
    http::post("/traces/clean", body).await
}

pub async fn statistic_today() -> Result<Envelope<Vec<TraceStatistic>>, ApiError> {
    http::get(&statistic_path("today"), &[]).await
}

pub async fn statistic_week() -> Result<Envelope<Vec<TraceStatistic>>, ApiError> {
    http::get(&statistic_path("week"), &[]).await
}

pub async fn statistic_month() -> Result<Envelope<Vec<TraceStatistic>>, ApiError> {
    http::get(&statistic_path("month"), &[]).await
}

pub async fn statistic_all() -> Result<Envelope<Vec<TraceStatistic>>, ApiError> {
    http::get(&statistic_path("all"), &[]).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(trace_path("9"), "/traces/9");
        assert_eq!(statistic_path("week"), "/statistic/week");
    }
}
