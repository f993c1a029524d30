//! # Blog API Server
//!
//! Actix-web HTTP layer over the blog post store.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod startup;
pub mod state;
pub mod telemetry;
