//! Pulse - a demo HTTP service with a smoke-test probe.
//!
//! The service answers two fixed routes: a `/health` liveness probe
//! returning a JSON status, and a `/` greeting page rendered with the
//! current time in Prague. The probe client issues a single request
//! against `/health` and reports pass/fail through its exit code.

pub mod config;
pub mod greeting;
pub mod middleware;
pub mod probe;
pub mod routes;
