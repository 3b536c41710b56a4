//! HTTP route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::lookup::{self, dates};
use crate::utils::tenths_to_fahrenheit;

use super::dto::{DailyTemperature, ReadingRow};
use super::state::AppState;
use super::templates::{StationView, StationsTemplate};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/api/v1/:station/:date", get(daily_temperature))
        .route("/api/v1/:station", get(station_readings))
        .route("/api/v1/yearly/:station/:year", get(yearly_readings))
        .route("/api/v1/monthly/:station/:year_month", get(monthly_readings))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Landing page: the full station catalog as an HTML table.
async fn index_page(State(state): State<AppState>) -> StationsTemplate {
    let stations = state
        .catalog
        .iter()
        .map(StationView::from_station)
        .collect();

    StationsTemplate { stations }
}

/// Mean temperature for one station on one day, converted to Fahrenheit.
async fn daily_temperature(
    State(state): State<AppState>,
    Path((station, date)): Path<(String, String)>,
) -> Result<Json<DailyTemperature>, ApiError> {
    let day = dates::parse_exact_date(&date)?;

    let table = lookup::load_station_table(state.data_dir(), &station)?;
    let record = table.find_by_exact_date(day)?;

    Ok(Json(DailyTemperature {
        station,
        date,
        temperature: tenths_to_fahrenheit(record.tg),
    }))
}

/// Every reading on record for one station, in stored units.
async fn station_readings(
    State(state): State<AppState>,
    Path(station): Path<String>,
) -> Result<Json<Vec<ReadingRow>>, ApiError> {
    let table = lookup::load_station_table(state.data_dir(), &station)?;

    let rows = table.records().iter().map(ReadingRow::from).collect();
    Ok(Json(rows))
}

/// All readings for one station in one year, in stored units.
async fn yearly_readings(
    State(state): State<AppState>,
    Path((station, year)): Path<(String, String)>,
) -> Result<Json<Vec<ReadingRow>>, ApiError> {
    let year = dates::parse_year(&year)?;

    let table = lookup::load_station_table(state.data_dir(), &station)?;
    let matches = table.find_by_year(year)?;

    let rows = matches.into_iter().map(ReadingRow::from).collect();
    Ok(Json(rows))
}

/// All readings for one station in one calendar month, in stored units.
async fn monthly_readings(
    State(state): State<AppState>,
    Path((station, year_month)): Path<(String, String)>,
) -> Result<Json<Vec<ReadingRow>>, ApiError> {
    let (year, month) = dates::parse_year_month(&year_month)?;

    let table = lookup::load_station_table(state.data_dir(), &station)?;
    let matches = table.find_by_year_month(year, month)?;

    let rows = matches.into_iter().map(ReadingRow::from).collect();
    Ok(Json(rows))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Recoverable lookup failures are served as the error's display
        // string for the entire body; clients tell success from failure by
        // body shape, not by status code.
        if self.is_recoverable() {
            tracing::debug!("lookup failed: {}", self);
            (StatusCode::OK, self.to_string()).into_response()
        } else {
            tracing::error!("request failed: {}", self);
            (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
        }
    }
}
