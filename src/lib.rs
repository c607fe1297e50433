//! narthex: headless administration front end for a church website.
//!
//! Every piece of business logic (record authority, persistence, search,
//! validation) lives in a separate backend reached over REST. This crate is
//! the client side: typed resource clients with wire-shape translation, a
//! reusable CRUD manager state layer, form drafts, a dashboard aggregate,
//! and the local operator session.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
