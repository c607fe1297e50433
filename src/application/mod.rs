//! Application layer: the reusable front-end state machines — session
//! lifecycle, per-kind CRUD manager, form drafts, dashboard aggregate —
//! orchestrating the infra resource clients.

pub mod dashboard;
pub mod forms;
pub mod manager;
pub mod resource;
pub mod session;
