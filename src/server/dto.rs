//! Response bodies

use serde::Serialize;

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Where the served document came from
    pub source: String,
    pub projects: usize,
}
