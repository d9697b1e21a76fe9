use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{debug, info, instrument};

use crate::dto::{CategoryDto, CreateEventRequest, EventDto};
use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Get all active events with category and location details
///
/// Foreign keys are resolved in one bulk lookup per referenced table,
/// however many events the listing holds.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "events",
    responses(
        (status = 200, description = "Events retrieved successfully", body = ApiResponse<Vec<EventDto>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_events(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EventDto>>>, ApiError> {
    debug!("fetching active events with details");

    let events = state.events.list_with_details().await?;
    let count = events.len();

    info!("returning {} events", count);
    Ok(Json(ApiResponse::success_with_count("Success", events, count)))
}

/// Create a new event
///
/// The category is given by name and the location by city; both must
/// already exist.
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created successfully", body = ApiResponse<EventDto>),
        (status = 404, description = "Referenced category or location not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EventDto>>), ApiError> {
    debug!("creating event");

    let event = state.events.create_event(request).await?;

    info!("event created with id {}", event.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Event created successfully", event)),
    ))
}

/// Get all event categories with their event counts
#[utoipa::path(
    get,
    path = "/api/events/category",
    tag = "events",
    responses(
        (status = 200, description = "Categories retrieved successfully", body = ApiResponse<Vec<CategoryDto>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_event_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CategoryDto>>>, ApiError> {
    debug!("fetching event categories");

    let categories = state.events.list_categories().await?;
    let count = categories.len();

    Ok(Json(ApiResponse::success_with_count(
        "Success", categories, count,
    )))
}
