use console_types::{Envelope, Job, JobQuery, JOB_SEARCH_BY_NAME, JOB_SEARCH_BY_PARENT};

use crate::http::{self, ApiError};

fn job_path(id: &str) -> String {
    format!("/jobs/{id}")
}

fn launch_path(id: &str) -> String {
    format!("/jobs/{id}/launch")
}

// The deployed scheduler routes this with the doubled slash; keep it.
fn update_status_path(id: &str, status: &str) -> String {
    format!("/jobs//update_status/{id}/{status}")
}

pub async fn get_jobs(query: &JobQuery) -> Result<Envelope<Vec<Job>>, ApiError> {
    http::get("/jobs", &query.to_pairs()).await
}

/// Name-prefix search used by the selection dropdowns.
pub async fn get_job_selections(name: &str) -> Result<Envelope<Vec<Job>>, ApiError> {
    http::get(
        "/jobs",
        &[
            ("search_type", JOB_SEARCH_BY_NAME.to_string()),
            ("name", name.to_string()),
        ],
    )
    .await
}

/// Jobs chained under the given parent.
pub async fn get_sub_job_selections(id: &str) -> Result<Envelope<Vec<Job>>, ApiError> {
    http::get(
        "/jobs",
        &[
            ("id", id.to_string()),
            ("search_type", JOB_SEARCH_BY_PARENT.to_string()),
        ],
    )
    .await
}

pub async fn get_job(id: &str) -> Result<Envelope<Job>, ApiError> {
    http::get(&job_path(id), &[]).await
}

pub async fn post_job(job: &Job) -> Result<Envelope<()>, ApiError> {
    http::post("/jobs", job).await
}

pub async fn put_job(job: &Job) -> Result<Envelope<()>, ApiError> {
    http::put("/jobs", job).await
}

pub async fn update_status(id: &str, status: &str) -> Result<Envelope<()>, ApiError> {
    http::put_empty(&update_status_path(id, status)).await
}

pub async fn delete_job(id: &str) -> Result<Envelope<()>, ApiError> {
    http::delete(&job_path(id)).await
}

/// Manual trigger, outside the cron schedule.
pub async fn launch_job(id: &str) -> Result<Envelope<()>, ApiError> {
    http::get(&launch_path(id), &[]).await
}

pub async fn validate_cron(spec: &str) -> Result<Envelope<()>, ApiError> {
    http::post_empty("/jobs/cron_validate", &[("spec", spec.to_string())]).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_paths() {
        assert_eq!(job_path("42"), "/jobs/42");
        assert_eq!(launch_path("42"), "/jobs/42/launch");
    }

    #[test]
    fn test_update_status_path_keeps_double_slash() {
        assert_eq!(update_status_path("7", "paused"), "/jobs//update_status/7/paused");
        assert_eq!(update_status_path("3", "1"), "/jobs//update_status/3/1");
    }
}
