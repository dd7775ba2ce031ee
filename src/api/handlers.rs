use axum::extract::{Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::utils::{datetime, validation};

/// Query parameters for the current-timezone endpoint.
#[derive(Debug, Deserialize)]
pub struct CoordinateParams {
    pub lat: f64,
    pub lon: f64,
}

/// Query parameters for the offset-for-date endpoint.
#[derive(Debug, Deserialize)]
pub struct OffsetParams {
    pub lat: f64,
    pub lon: f64,
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TimezoneResponse {
    pub timezone: String,
    pub utc_offset: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OffsetResponse {
    pub timezone: String,
    pub date: String,
    pub utc_offset: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn timezone_not_found() -> Self {
        Self {
            error: "Timezone not found".to_string(),
        }
    }

    fn invalid_date_format() -> Self {
        Self {
            error: "Invalid date format. Use YYYY-MM-DD.".to_string(),
        }
    }
}

/// Lookup outcome for `/timezone`, serialized as either the success body or
/// an error body. Both ship under HTTP 200; the error-as-200 shape is part
/// of the published contract.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TimezoneReply {
    Resolved(TimezoneResponse),
    Error(ErrorResponse),
}

/// Lookup outcome for `/timezone/offset`, same 200-with-error contract.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OffsetReply {
    Resolved(OffsetResponse),
    Error(ErrorResponse),
}

/// Fixed liveness payload.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Resolves a coordinate to its timezone and the UTC offset right now.
pub async fn current_timezone(
    State(state): State<AppState>,
    Query(params): Query<CoordinateParams>,
) -> Result<Json<TimezoneReply>, ApiError> {
    validation::validate_coordinate(params.lat, params.lon)
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let Some(tz) = state.locator.locate(params.lat, params.lon) else {
        debug!("No timezone for coordinate ({}, {})", params.lat, params.lon);
        return Ok(Json(TimezoneReply::Error(ErrorResponse::timezone_not_found())));
    };

    let offset = datetime::utc_offset_hours_now(tz);

    Ok(Json(TimezoneReply::Resolved(TimezoneResponse {
        timezone: tz.name().to_string(),
        utc_offset: datetime::format_offset_hours(offset),
    })))
}

/// Resolves a coordinate to its timezone and the UTC offset in effect at
/// the wall-clock midnight of the given calendar date.
pub async fn offset_for_date(
    State(state): State<AppState>,
    Query(params): Query<OffsetParams>,
) -> Result<Json<OffsetReply>, ApiError> {
    validation::validate_coordinate(params.lat, params.lon)
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let date = match datetime::parse_civil_date(&params.date) {
        Ok(date) => date,
        Err(_) => {
            return Ok(Json(OffsetReply::Error(ErrorResponse::invalid_date_format())));
        }
    };

    let Some(tz) = state.locator.locate(params.lat, params.lon) else {
        debug!("No timezone for coordinate ({}, {})", params.lat, params.lon);
        return Ok(Json(OffsetReply::Error(ErrorResponse::timezone_not_found())));
    };

    let offset = datetime::utc_offset_hours_on(tz, date);

    Ok(Json(OffsetReply::Resolved(OffsetResponse {
        timezone: tz.name().to_string(),
        date: params.date,
        utc_offset: datetime::format_offset_hours(offset),
    })))
}
