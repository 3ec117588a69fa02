//! hullo: a minimal greeting HTTP service.
//!
//! Two binaries share this library. `hullo` serves two static JSON routes;
//! `hullo-backed` additionally establishes a cache-store connection and a
//! relational-database connection, in that order, before the listener binds.
//! The connections are held for the process lifetime and not otherwise used.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;
