//! Agri Advisor API Library
//!
//! Read-only agricultural information service: crop recommendations scored
//! by season, region and production, plus care, fertilizer, production and
//! seasonal weather lookups over a static in-memory dataset.
//!
//! # Modules
//!
//! - `api`: HTTP-facing components.
//! - `core`: Domain logic and data.
//! - `config`: Configuration management.
//! - `dataset`: Built-in reference tables.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `lookup`: Care, fertilizer, production and weather lookups.
//! - `models`: Data models and response bodies.
//! - `openapi`: OpenAPI document and Swagger UI.
//! - `router`: Route and middleware assembly.
//! - `scorer`: Recommendation scoring.
//! - `season`: Month to season resolution.

pub mod api;
pub mod core;

pub mod config;
pub mod dataset;
pub mod errors;
pub mod handlers;
pub mod lookup;
pub mod models;
pub mod openapi;
pub mod router;
pub mod scorer;
pub mod season;
