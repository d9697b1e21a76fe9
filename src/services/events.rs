use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use model::entities::event;
use sea_orm::Set;
use tracing::debug;

use crate::dto::{CategoryDto, CreateEventRequest, EventDto};
use crate::error::ApiError;
use crate::repos::EventRepository;
use crate::services::{CategoryService, LocationService};

/// Orchestrates event listing, creation and detail enrichment by
/// composing the category and location resolvers.
#[derive(Clone)]
pub struct EventService {
    events: Arc<dyn EventRepository>,
    categories: CategoryService,
    locations: LocationService,
}

impl EventService {
    pub fn new(
        events: Arc<dyn EventRepository>,
        categories: CategoryService,
        locations: LocationService,
    ) -> Self {
        Self {
            events,
            categories,
            locations,
        }
    }

    /// Active events in response shape; derived fields stay unset here.
    pub async fn list_active(&self) -> Result<Vec<EventDto>, ApiError> {
        let events = self.events.list_active().await?;
        Ok(events.into_iter().map(EventDto::from).collect())
    }

    /// Populates `category` and `location` on a batch of events.
    ///
    /// Distinct foreign keys are collected first so each referenced table
    /// is hit exactly once regardless of batch size. A dangling reference
    /// leaves that event's derived field unset instead of failing the
    /// rest of the batch.
    pub async fn enrich_with_details(
        &self,
        mut events: Vec<EventDto>,
    ) -> Result<Vec<EventDto>, ApiError> {
        if events.is_empty() {
            return Ok(events);
        }

        let location_ids: HashSet<i32> = events.iter().map(|e| e.location_id).collect();
        let category_ids: HashSet<i32> = events.iter().map(|e| e.category_id).collect();

        let locations = self.locations.by_ids(&location_ids).await?;
        let categories = self.categories.by_ids(&category_ids).await?;

        for event in &mut events {
            if let Some(location) = locations.get(&event.location_id) {
                event.location = Some(format!("{}, {}", location.city, location.country));
            }

            if let Some(category) = categories.get(&event.category_id) {
                event.category = Some(category.name.clone());
            }
        }

        Ok(events)
    }

    /// Active events with their derived fields populated.
    pub async fn list_with_details(&self) -> Result<Vec<EventDto>, ApiError> {
        let events = self.list_active().await?;
        self.enrich_with_details(events).await
    }

    /// Resolves the named category and city, then persists a new active
    /// event. Unknown names surface as not-found instead of proceeding
    /// with a dangling reference.
    pub async fn create_event(&self, request: CreateEventRequest) -> Result<EventDto, ApiError> {
        let category = self.categories.by_name(&request.category).await?;
        let location = self.locations.by_city(&request.location).await?;

        let now = Utc::now().naive_utc();
        let new_event = event::ActiveModel {
            name: Set(request.name),
            display_picture: Set(request.display_picture),
            description: Set(request.description),
            hosted_from: Set(request.hosted_from),
            hosted_to: Set(request.hosted_to),
            venue: Set(request.venue),
            ticket_amount: Set(request.ticket_amount),
            status: Set(event::STATUS_ACTIVE),
            capacity: Set(request.capacity),
            tickets_booked: Set(0),
            category_id: Set(category.id),
            location_id: Set(location.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = self.events.insert(new_event).await?;
        debug!("event {} created in category {}", inserted.id, category.id);
        Ok(EventDto::from(inserted))
    }

    /// All categories ordered by name, each with its live event count.
    pub async fn list_categories(&self) -> Result<Vec<CategoryDto>, ApiError> {
        self.categories.list_with_counts().await
    }
}
