//! Heuristic structure extraction for job postings and résumés, plus the
//! axum service that exposes it.

pub mod config;
pub mod errors;
pub mod extraction;
pub mod loader;
pub mod routes;
pub mod state;
