use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use model::entities::location;

use crate::error::ApiError;
use crate::repos::LocationRepository;

/// Resolver over location storage: city index, bulk id lookup and exact
/// city lookup.
#[derive(Clone)]
pub struct LocationService {
    repo: Arc<dyn LocationRepository>,
}

impl LocationService {
    pub fn new(repo: Arc<dyn LocationRepository>) -> Self {
        Self { repo }
    }

    /// City -> id index over all locations, iterable in city order.
    pub async fn city_index(&self) -> Result<BTreeMap<String, i32>, ApiError> {
        let pairs = self.repo.city_id_pairs().await?;
        Ok(pairs.into_iter().collect())
    }

    /// Bulk id -> location map. Ids without a backing row are absent
    /// from the map, not an error.
    pub async fn by_ids(
        &self,
        ids: &HashSet<i32>,
    ) -> Result<HashMap<i32, location::Model>, ApiError> {
        let locations = self.repo.find_by_ids(ids).await?;
        Ok(locations.into_iter().map(|l| (l.id, l)).collect())
    }

    /// Exact-match city lookup.
    pub async fn by_city(&self, city: &str) -> Result<location::Model, ApiError> {
        self.repo
            .find_by_city(city)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Location not found with city: {city}")))
    }
}
