use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::dto::{CategoryDto, CreateEventRequest, EventDto, LocationIndexDto, UserDto, UserPayload};
use crate::services::{EventService, LocationService, UserService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection, kept around for liveness checks
    pub db: DatabaseConnection,
    pub users: UserService,
    pub events: EventService,
    pub locations: LocationService,
}

/// Uniform response envelope returned by every endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always "success" on the happy path
    pub status: String,
    /// Human-readable outcome message
    pub message: String,
    /// Response payload; omitted for operations that carry none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Number of items in `data` for collection payloads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data: Some(data),
            count: None,
        }
    }

    pub fn success_with_count(message: impl Into<String>, data: T, count: usize) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data: Some(data),
            count: Some(count),
        }
    }

    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data: None,
            count: None,
        }
    }
}

/// Error envelope; `status` is always "error".
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::users::create_user,
        crate::handlers::users::get_users,
        crate::handlers::users::get_user,
        crate::handlers::users::update_user,
        crate::handlers::users::delete_user,
        crate::handlers::events::get_events,
        crate::handlers::events::create_event,
        crate::handlers::events::get_event_categories,
        crate::handlers::locations::get_locations,
    ),
    components(
        schemas(
            ApiResponse<UserDto>,
            ApiResponse<Vec<UserDto>>,
            ApiResponse<EventDto>,
            ApiResponse<Vec<EventDto>>,
            ApiResponse<Vec<CategoryDto>>,
            ApiResponse<LocationIndexDto>,
            ErrorResponse,
            HealthResponse,
            UserPayload,
            UserDto,
            CreateEventRequest,
            EventDto,
            CategoryDto,
            LocationIndexDto,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User management endpoints"),
        (name = "events", description = "Event listing, creation and categories"),
        (name = "locations", description = "Location index endpoints"),
    ),
    info(
        title = "Eventra API",
        description = "Event management backend - users, events, categories and locations",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
