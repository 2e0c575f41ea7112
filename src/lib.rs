//! REST backend for the society's promotional website.
//!
//! Exposes CRUD routes for events, team members, announcements, event
//! registrations and contact messages, backed by Postgres. Mutating routes
//! are gated behind a shared admin password carried in the request body.

pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod storage;
pub mod utils;
