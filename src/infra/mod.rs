//! Infrastructure: telemetry, local token persistence, and the HTTP
//! resource clients that speak the backend's wire schema.

pub mod api;
pub mod telemetry;
pub mod token;
