//! Networking modules for the roster REST endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and classifies failures, `types` defines the
//! wire schema shared with the backend.

pub mod api;
pub mod types;
