//! HTTP handlers for the REST API.
//!
//! Each handler loads the configured dataset fresh, picks the requested
//! user, and delegates to the service layer for the actual statistics.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Json,
};

use super::dto::{AvailabilityRow, HealthResponse, TableCell, TableRow, UserDto, WeekdayPair};
use super::error::AppError;
use super::state::AppState;
use crate::data::loader;
use crate::models::{PresenceIndex, UserId, UserPresence, WEEKDAY_LABELS};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Load the dataset off the async runtime; file I/O and parsing are blocking.
async fn load_index(state: &AppState) -> Result<PresenceIndex, AppError> {
    let path = state.config.data.csv_path.clone();
    tokio::task::spawn_blocking(move || loader::get_data(path))
        .await
        .map_err(|e| AppError::Internal(format!("task join error: {}", e)))?
        .map_err(AppError::from)
}

/// Not-found is decided here, before any grouping runs.
fn user_days(data: &PresenceIndex, user_id: i64) -> Result<&UserPresence, AppError> {
    data.get(&UserId::new(user_id))
        .ok_or_else(|| AppError::NotFound(format!("user {} not found", user_id)))
}

/// GET /
///
/// Dashboard entry point: redirect to the presence weekday page.
pub async fn index() -> Redirect {
    Redirect::temporary("/static/presence_weekday.html")
}

/// GET /health
///
/// Health check endpoint to verify the service is running and the dataset
/// is where the configuration says it is.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let dataset = if state.config.data.csv_path.is_file() {
        "available".to_string()
    } else {
        format!("missing: {}", state.config.data.csv_path.display())
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dataset,
    })
}

/// GET /api/v1/users
///
/// List all users present in the dataset, ascending by id. Display names are
/// derived from the id; the CSV carries no names.
pub async fn list_users(State(state): State<AppState>) -> HandlerResult<Vec<UserDto>> {
    let data = load_index(&state).await?;

    let users = data
        .keys()
        .map(|id| UserDto {
            user_id: id.value(),
            name: format!("User {}", id.value()),
        })
        .collect();

    Ok(Json(users))
}

/// GET /api/v1/mean_time_weekday/{user_id}
///
/// Mean presence time per weekday: seven `[label, mean_seconds]` pairs.
/// Weekdays without entries answer with the integer `0`.
pub async fn mean_time_weekday(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> HandlerResult<Vec<WeekdayPair>> {
    let data = load_index(&state).await?;
    let days = user_days(&data, user_id)?;

    let buckets = services::group_by_weekday(days);
    let rows = WEEKDAY_LABELS
        .iter()
        .zip(buckets.iter())
        .map(|(label, bucket)| {
            let seconds: Vec<f64> = bucket.iter().map(|&s| s as f64).collect();
            (*label, services::mean(&seconds))
        })
        .collect();

    Ok(Json(rows))
}

/// GET /api/v1/presence_weekday/{user_id}
///
/// Total presence time per weekday: a `["Weekday", "Presence (s)"]` header
/// row followed by seven `[label, total_seconds]` pairs. Totals are integer
/// sums, unlike the float means.
pub async fn presence_weekday(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> HandlerResult<Vec<TableRow>> {
    let data = load_index(&state).await?;
    let days = user_days(&data, user_id)?;

    let buckets = services::group_by_weekday(days);
    let mut rows = vec![(TableCell::Text("Weekday"), TableCell::Text("Presence (s)"))];
    rows.extend(
        WEEKDAY_LABELS
            .iter()
            .zip(buckets.iter())
            .map(|(label, bucket)| {
                (TableCell::Text(*label), TableCell::Seconds(bucket.iter().sum()))
            }),
    );

    Ok(Json(rows))
}

/// GET /api/v1/user_available_average/{user_id}
///
/// Mean clock-in and clock-out per weekday as `[label, start_ms, end_ms]`
/// triples. Means are scaled to milliseconds for the time-of-day chart;
/// empty weekdays keep the integer `0`.
pub async fn user_available_average(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> HandlerResult<Vec<AvailabilityRow>> {
    let data = load_index(&state).await?;
    let days = user_days(&data, user_id)?;

    let buckets = services::start_end_by_weekday(days);
    let rows = WEEKDAY_LABELS
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let starts: Vec<f64> = buckets.start[idx].iter().map(|&s| s as f64).collect();
            let ends: Vec<f64> = buckets.end[idx].iter().map(|&s| s as f64).collect();
            (
                *label,
                services::mean(&starts).scale(1000.0),
                services::mean(&ends).scale(1000.0),
            )
        })
        .collect();

    Ok(Json(rows))
}
