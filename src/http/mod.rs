//! HTTP server module exposing presence statistics as a REST API.
//!
//! This module provides an axum-based HTTP server over the pure service
//! layer. Each request loads the configured CSV fresh, so handlers share
//! nothing but the immutable configuration.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! │  - Routing, JSON serialization, static pages             │
//! │  - CORS, compression, error handling                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services::analytics)                     │
//! │  - Weekday grouping, interval and mean computation       │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Data Layer (data::loader)                               │
//! │  - Per-request CSV ingestion                             │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
