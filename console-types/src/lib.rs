//! Wire types shared between the console and the scheduler REST API
//!
//! Every scheduler response is wrapped in the same JSON envelope; the
//! records inside mirror what the backend marshals, key for key. The
//! console never invents fields — anything here that looks irregular
//! (PascalCase node keys, the `DB` capitalization on runtime counters)
//! is what actually goes over the wire.

use serde::{Deserialize, Serialize};

// ============================================================================
// Response envelope
// ============================================================================

/// The uniform wrapper on every scheduler JSON response.
///
/// Rejections carry their text under `message`, plain acknowledgements and
/// HTTP error bodies under `msg`; paged listings add `total` next to `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub succeed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Human-readable text, whichever key the backend used.
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref().or(self.msg.as_deref())
    }
}

/// Login / authorised response — token and user name sit at the top level,
/// not inside `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accredit {
    pub succeed: bool,
    pub token: String,
    #[serde(rename = "userName")]
    pub user_name: String,
}

// ============================================================================
// Jobs
// ============================================================================

/// One execute node attached to a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Executor {
    pub address: String,
    pub weight: i32,
    /// 1 online, 0 offline.
    pub status: i32,
}

/// A scheduled job as the backend stores it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    pub id: String,
    pub name: String,
    pub cron: String,
    /// http / https.
    pub protocol: String,
    pub uri: String,
    pub remark: String,
    /// See [`JOB_STATUS_OK`] / [`JOB_STATUS_PAUSED`].
    pub status: i32,
    pub create_time: i64,
    pub creator: String,
    pub pre_job_id: String,
    pub timeout: i32,
    pub retry_count: i32,
    pub retry_wait_time: i32,
    pub fail_takeover: i32,
    pub misfire_threshold: i64,
    pub executor_select_strategy: String,
    pub http_param: String,
    pub http_header_param: String,
    pub http_sign: i32,
    pub sharding_count: i32,
    pub sharding_param: String,
    pub alarm_email: String,
    pub sub_job_schedule_strategy: i32,
    pub sub_job_ids: Vec<String>,
    pub sub_job_display: String,
    pub time_step: i64,
    pub executors: Vec<Executor>,
}

pub const JOB_STATUS_PAUSED: i32 = 0;
pub const JOB_STATUS_OK: i32 = 1;

/// `search_type` values on the job listing endpoint.
pub const JOB_SEARCH_BY_NAME: i32 = 1;
pub const JOB_SEARCH_BY_PARENT: i32 = 2;

/// Executor selection strategies.
pub const STRATEGY_SHARDING: &str = "sharding";
pub const STRATEGY_RANDOM: &str = "random";
pub const STRATEGY_ROUND: &str = "round";
pub const STRATEGY_WEIGHT_RANDOM: &str = "weight_random";
pub const STRATEGY_WEIGHT_ROUND: &str = "weight_round";

/// Job listing filter. Empty fields are omitted from the query string.
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    pub page_num: u32,
    pub page_size: u32,
    pub name: String,
    pub creator: String,
    pub status: String,
}

impl JobQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page_num", self.page_num.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if !self.name.is_empty() {
            pairs.push(("name", self.name.clone()));
        }
        if !self.creator.is_empty() {
            pairs.push(("creator", self.creator.clone()));
        }
        if !self.status.is_empty() {
            pairs.push(("status", self.status.clone()));
        }
        pairs
    }
}

// ============================================================================
// Traces
// ============================================================================

/// One execution record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trace {
    pub id: String,
    pub job_id: u64,
    pub job_name: String,
    /// See the `SCHEDULE_TYPE_*` constants.
    pub schedule_type: i32,
    pub start_time: i64,
    pub end_time: i64,
    pub execute_status: i32,
    pub execute_result: String,
    pub execute_detail: String,
}

/// Per-job aggregate used by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceStatistic {
    pub name: String,
    pub total: u64,
    pub succeed: u64,
    pub failed: u64,
    pub rate: u64,
}

pub const SCHEDULE_TYPE_MANUAL: i32 = 0;
pub const SCHEDULE_TYPE_AUTO: i32 = 1;
pub const SCHEDULE_TYPE_COMPENSATION: i32 = 2;
pub const SCHEDULE_TYPE_DEPEND: i32 = 3;

pub const EXECUTE_STATUS_FAILED: i32 = 0;
pub const EXECUTE_STATUS_SUCCEED: i32 = 1;

/// Trace listing filter.
#[derive(Debug, Clone, Default)]
pub struct TraceQuery {
    pub page_num: u32,
    pub page_size: u32,
    pub job_name: String,
    pub start_time: String,
    pub end_time: String,
    pub execute_status: String,
    pub schedule_type: String,
}

impl TraceQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page_num", self.page_num.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if !self.job_name.is_empty() {
            pairs.push(("job_name", self.job_name.clone()));
        }
        if !self.start_time.is_empty() {
            pairs.push(("start_time", self.start_time.clone()));
        }
        if !self.end_time.is_empty() {
            pairs.push(("end_time", self.end_time.clone()));
        }
        if !self.execute_status.is_empty() {
            pairs.push(("execute_status", self.execute_status.clone()));
        }
        if !self.schedule_type.is_empty() {
            pairs.push(("schedule_type", self.schedule_type.clone()));
        }
        pairs
    }
}

/// Body of POST /traces/clean. `job_id` empty means every job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanTrace {
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub scope: String,
}

/// Clean scopes accepted by the backend.
pub const CLEAN_SCOPE_ALL: &str = "1";
pub const CLEAN_SCOPE_WEEK_AGO: &str = "2";
pub const CLEAN_SCOPE_MONTH_AGO: &str = "3";
pub const CLEAN_SCOPE_TWO_MONTHS_AGO: &str = "4";
pub const CLEAN_SCOPE_THREE_MONTHS_AGO: &str = "5";
pub const CLEAN_SCOPE_SIX_MONTHS_AGO: &str = "6";
pub const CLEAN_SCOPE_YEAR_AGO: &str = "7";

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub password: String,
    pub update_time: i64,
    pub email: String,
}

// ============================================================================
// Alarms
// ============================================================================

/// Mail alarm settings, one record system-wide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlarmConfig {
    pub sys_alarm_email: String,
    pub smtp_host: String,
    pub smtp_port: i32,
    pub smtp_user: String,
    pub smtp_password: String,
}

// ============================================================================
// Cluster
// ============================================================================

/// A cluster member. The backend marshals these with Go's default
/// field-name keys, hence the PascalCase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Node {
    pub name: String,
    pub http_addr: String,
    pub tcp_addr: String,
    pub machine_num: u16,
}

// ============================================================================
// Runtime
// ============================================================================

/// Deployment-wide runtime info shown on the about page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Runtime {
    pub run_mode: String,
    pub start_time: String,
    pub cluster_node_count: i32,
    pub job_count: i32,
    pub execute_node_count: i32,
    pub trigger_times: i64,
    #[serde(rename = "usableDBAmount")]
    pub usable_db_amount: i32,
    #[serde(rename = "disabledDBAmount")]
    pub disabled_db_amount: i32,
    pub usable_node_amount: i32,
    pub disabled_node_amount: i32,
}

pub const RUN_MODE_STANDALONE: &str = "standalone";
pub const RUN_MODE_CLUSTER: &str = "cluster";

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success_with_data() {
        let json = r#"{"succeed":true,"data":{"id":"42","name":"x"}}"#;
        let env: Envelope<Job> = serde_json::from_str(json).unwrap();
        assert!(env.succeed);
        assert!(env.text().is_none());
        let job = env.data.unwrap();
        assert_eq!(job.id, "42");
        assert_eq!(job.name, "x");
    }

    #[test]
    fn test_envelope_rejection_text() {
        let json = r#"{"succeed":false,"message":"not found"}"#;
        let env: Envelope<Job> = serde_json::from_str(json).unwrap();
        assert!(!env.succeed);
        assert_eq!(env.text(), Some("not found"));

        // acknowledgement handlers use the short key
        let json = r#"{"succeed":true,"msg":"ok"}"#;
        let env: Envelope<()> = serde_json::from_str(json).unwrap();
        assert_eq!(env.text(), Some("ok"));
    }

    #[test]
    fn test_envelope_page_total() {
        let json = r#"{"succeed":true,"total":37,"data":[]}"#;
        let env: Envelope<Vec<Trace>> = serde_json::from_str(json).unwrap();
        assert_eq!(env.total, Some(37));
        assert!(env.data.unwrap().is_empty());
    }

    #[test]
    fn test_accredit_keys() {
        let json = r#"{"succeed":true,"token":"t-1","userName":"admin"}"#;
        let acc: Accredit = serde_json::from_str(json).unwrap();
        assert_eq!(acc.token, "t-1");
        assert_eq!(acc.user_name, "admin");
    }

    #[test]
    fn test_job_camel_case_round_trip() {
        let mut job = Job::default();
        job.id = "7".into();
        job.create_time = 1700000000000;
        job.pre_job_id = "3".into();
        job.sub_job_ids = vec!["9".into()];

        let json = serde_json::to_string(&job).unwrap();
        assert!(json.contains("\"createTime\":1700000000000"));
        assert!(json.contains("\"preJobId\":\"3\""));
        assert!(json.contains("\"subJobIds\":[\"9\"]"));

        let back: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }

    #[test]
    fn test_job_tolerates_missing_fields() {
        let job: Job = serde_json::from_str(r#"{"name":"nightly"}"#).unwrap();
        assert_eq!(job.name, "nightly");
        assert_eq!(job.status, 0);
        assert!(job.executors.is_empty());
    }

    #[test]
    fn test_node_pascal_case_keys() {
        let json = r#"{"Name":"n1","HttpAddr":"10.0.0.1:8080","TcpAddr":"10.0.0.1:9090","MachineNum":2}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.name, "n1");
        assert_eq!(node.machine_num, 2);
        let out = serde_json::to_string(&node).unwrap();
        assert!(out.contains("\"HttpAddr\""));
    }

    #[test]
    fn test_runtime_db_amount_keys() {
        let json = r#"{"runMode":"cluster","usableDBAmount":2,"disabledDBAmount":1}"#;
        let rt: Runtime = serde_json::from_str(json).unwrap();
        assert_eq!(rt.run_mode, RUN_MODE_CLUSTER);
        assert_eq!(rt.usable_db_amount, 2);
        assert_eq!(rt.disabled_db_amount, 1);
    }

    #[test]
    fn test_job_query_pairs_skip_empty() {
        let query = JobQuery {
            page_num: 1,
            page_size: 10,
            name: "sync".into(),
            ..Default::default()
        };
        let pairs = query.to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page_num", "1".to_string()),
                ("page_size", "10".to_string()),
                ("name", "sync".to_string()),
            ]
        );
    }

    #[test]
    fn test_trace_query_pairs() {
        let query = TraceQuery {
            page_num: 2,
            page_size: 20,
            execute_status: "0".into(),
            ..Default::default()
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("execute_status", "0".to_string())));
        assert!(!pairs.iter().any(|(k, _)| *k == "job_name"));
    }

    #[test]
    fn test_clean_trace_body_keys() {
        let body = CleanTrace {
            job_id: "5".into(),
            scope: CLEAN_SCOPE_WEEK_AGO.into(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"jobId":"5","scope":"2"}"#);
    }
}
