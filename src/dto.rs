//! Data shapes exposed at the API boundary, distinct from the persisted
//! entities, plus the pure conversions between the two. Derived fields
//! (`category`, `location` on events) live only here and are never
//! written back to storage.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use model::entities::{event, user};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::repos::CategoryWithCount;

/// User shape on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<user::Model> for UserDto {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            phone_number: model.phone_number,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Request body for creating or updating a user.
///
/// Every field is optional at the deserialization layer so that missing
/// values reach the validator and produce field-level messages instead of
/// a framework rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

/// Event shape on the wire.
///
/// `category` and `location` are derived, human-readable fields filled in
/// by the enrichment pass; they stay `None` everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub name: String,
    pub display_picture: Option<String>,
    pub description: Option<String>,
    pub hosted_from: NaiveDateTime,
    pub hosted_to: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub category_id: i32,
    pub location_id: i32,
    pub venue: String,
    #[schema(value_type = String)]
    pub ticket_amount: Decimal,
    pub status: i16,
    pub capacity: i32,
    pub tickets_booked: i32,
    /// Category name, populated only by enrichment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// "{city}, {country}", populated only by enrichment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl From<event::Model> for EventDto {
    fn from(model: event::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            display_picture: model.display_picture,
            description: model.description,
            hosted_from: model.hosted_from,
            hosted_to: model.hosted_to,
            created_at: model.created_at,
            updated_at: model.updated_at,
            category_id: model.category_id,
            location_id: model.location_id,
            venue: model.venue,
            ticket_amount: model.ticket_amount,
            status: model.status,
            capacity: model.capacity,
            tickets_booked: model.tickets_booked,
            category: None,
            location: None,
        }
    }
}

/// Request body for creating an event. Category and location arrive as a
/// category name and a city; the aggregator resolves both to ids.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    pub display_picture: Option<String>,
    pub description: Option<String>,
    pub hosted_from: NaiveDateTime,
    pub hosted_to: NaiveDateTime,
    pub venue: String,
    #[schema(value_type = String)]
    pub ticket_amount: Decimal,
    pub capacity: i32,
    /// Name of an existing category, matched case-insensitively.
    pub category: String,
    /// City of an existing location, matched exactly.
    pub location: String,
}

/// City -> location id index, serialized as a plain JSON object.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationIndexDto(pub BTreeMap<String, i32>);

/// Category annotated with its live event count, as shown in the
/// category listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i32,
    pub category_name: String,
    pub event_count: i64,
}

impl From<CategoryWithCount> for CategoryDto {
    fn from(row: CategoryWithCount) -> Self {
        Self {
            id: row.id,
            category_name: row.name,
            event_count: row.event_count,
        }
    }
}
