use axum::{extract::State, response::Json};
use tracing::{debug, instrument};

use crate::dto::LocationIndexDto;
use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Get the city -> id index over all locations
#[utoipa::path(
    get,
    path = "/api/locations",
    tag = "locations",
    responses(
        (status = 200, description = "Locations retrieved successfully", body = ApiResponse<LocationIndexDto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_locations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<LocationIndexDto>>, ApiError> {
    debug!("fetching location index");

    let index = state.locations.city_index().await?;
    let count = index.len();

    Ok(Json(ApiResponse::success_with_count(
        "Success",
        LocationIndexDto(index),
        count,
    )))
}
