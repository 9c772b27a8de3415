//! Smoke-test probe client.
//!
//! Issues a single GET against the service's health endpoint and decides
//! pass/fail from the status code and body. One attempt, fail-fast: no
//! retries and no timeout - the probe either observes a response or
//! surfaces the transport error and gives up.

use http::StatusCode;

use crate::config::DEFAULT_PORT;

/// Default probe target host
pub const DEFAULT_HOST: &str = "localhost";

/// Default probe target path
pub const DEFAULT_PATH: &str = "/health";

/// Substring the response body must contain for the probe to pass
pub const EXPECTED_BODY_MARKER: &str = "OK";

/// Probe error: the service could not be reached at all.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Where the probe points. Defaults match the service's default port.
#[derive(Debug, Clone)]
pub struct ProbeTarget {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Default for ProbeTarget {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_string(),
        }
    }
}

impl ProbeTarget {
    /// Full URL of the probed endpoint.
    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}

/// Probe verdict. Terminal on the first response: there are no retry
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Passed,
    Failed,
}

/// What the probe observed, when a response arrived at all.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub status: StatusCode,
    pub body: String,
    pub outcome: ProbeOutcome,
}

/// Decide pass/fail from an observed response.
///
/// Passes only on a 200 with [`EXPECTED_BODY_MARKER`] somewhere in the
/// body; every other combination fails.
pub fn evaluate(status: StatusCode, body: &str) -> ProbeOutcome {
    if status == StatusCode::OK && body.contains(EXPECTED_BODY_MARKER) {
        ProbeOutcome::Passed
    } else {
        ProbeOutcome::Failed
    }
}

/// Run the probe: one GET, accumulate the full body, evaluate.
pub async fn run(target: &ProbeTarget) -> Result<ProbeReport, ProbeError> {
    let response = reqwest::get(target.url()).await?;
    let status = response.status();
    let body = response.text().await?;
    let outcome = evaluate(status, &body);

    Ok(ProbeReport {
        status,
        body,
        outcome,
    })
}
