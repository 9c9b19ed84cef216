//! Networking for the consultation request.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema of the external consultation API, `api`
//! performs the POST with timeout handling, and `config` resolves the API base
//! URL for the current environment.

pub mod api;
pub mod config;
pub mod types;
