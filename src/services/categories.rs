use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use model::entities::event_category;

use crate::dto::CategoryDto;
use crate::error::ApiError;
use crate::repos::CategoryRepository;

/// Resolver over category storage: bulk id lookup, case-insensitive name
/// lookup and the annotated listing.
#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Bulk id -> category map. Ids without a backing row are absent
    /// from the map, not an error.
    pub async fn by_ids(
        &self,
        ids: &HashSet<i32>,
    ) -> Result<HashMap<i32, event_category::Model>, ApiError> {
        let categories = self.repo.find_by_ids(ids).await?;
        Ok(categories.into_iter().map(|c| (c.id, c)).collect())
    }

    /// Case-insensitive exact name lookup.
    pub async fn by_name(&self, name: &str) -> Result<event_category::Model, ApiError> {
        self.repo.find_by_name(name).await?.ok_or_else(|| {
            ApiError::NotFound(format!("Event category not found with name: {name}"))
        })
    }

    /// All categories ordered by name ascending, each with its live event
    /// count; categories with no events appear with a count of 0.
    pub async fn list_with_counts(&self) -> Result<Vec<CategoryDto>, ApiError> {
        let rows = self.repo.list_with_counts().await?;
        Ok(rows.into_iter().map(CategoryDto::from).collect())
    }
}
