//! Data Transfer Objects for the HTTP API.
//!
//! The per-weekday endpoints answer with arrays of `[label, value]` rows, the
//! shape the chart pages feed straight into `arrayToDataTable`. Numeric cells
//! keep the integer-zero / float-mean distinction via [`StatValue`].

use serde::Serialize;

use crate::services::StatValue;

/// One entry in the user listing.
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub user_id: i64,
    pub name: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Whether the configured CSV is present
    pub dataset: String,
}

/// `[label, seconds]` pair for the per-weekday mean view.
pub type WeekdayPair = (&'static str, StatValue);

/// `[label, start_ms, end_ms]` triple for the availability view.
pub type AvailabilityRow = (&'static str, StatValue, StatValue);

/// Cell of the presence totals table; the first row carries the column names.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TableCell {
    Text(&'static str),
    Seconds(i64),
}

/// `[cell, cell]` row of the presence totals table.
pub type TableRow = (TableCell, TableCell);
