//! Thin resource clients over the scheduler REST API.
//!
//! One module per backend resource; every function is a direct
//! method + path mapping through the HTTP pipeline. No validation, no
//! retries, no transformation beyond path and query construction.

pub mod alarm;
pub mod cluster;
pub mod job;
pub mod runtime;
pub mod trace;
pub mod user;
