//! # Presence Analyzer
//!
//! Employee presence statistics computed from time-clock CSV entries and
//! served over a small REST API with static visualization pages.
//!
//! The dataset is a fixed-format CSV export (`user_id,date,start,end`); each
//! request loads it fresh, runs pure per-weekday transformations, and
//! serializes the result to JSON. No persistence, no sessions, no shared
//! mutable state.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: the two-level presence index and weekday types
//! - [`data`]: tolerant CSV ingestion
//! - [`services`]: pure statistics (intervals, means, weekday grouping)
//! - [`config`]: TOML file and environment configuration
//! - [`http`]: axum-based HTTP server and request handlers

pub mod config;
pub mod data;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
