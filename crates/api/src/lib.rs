//! HTTP API: server, routing, and per-request gating.

pub mod app;
pub mod middleware;
