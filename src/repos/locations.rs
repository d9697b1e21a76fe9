use std::collections::HashSet;

use async_trait::async_trait;
use model::entities::location;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// (city, id) pairs covering all locations, ordered by city.
    async fn city_id_pairs(&self) -> Result<Vec<(String, i32)>, DbErr>;
    /// Rows for the subset of `ids` that exist; missing ids are simply
    /// absent from the result.
    async fn find_by_ids(&self, ids: &HashSet<i32>) -> Result<Vec<location::Model>, DbErr>;
    /// Exact city match.
    async fn find_by_city(&self, city: &str) -> Result<Option<location::Model>, DbErr>;
}

#[derive(Clone)]
pub struct SeaOrmLocationRepository {
    db: DatabaseConnection,
}

impl SeaOrmLocationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LocationRepository for SeaOrmLocationRepository {
    async fn city_id_pairs(&self) -> Result<Vec<(String, i32)>, DbErr> {
        location::Entity::find()
            .select_only()
            .column(location::Column::City)
            .column(location::Column::Id)
            .order_by_asc(location::Column::City)
            .into_tuple::<(String, i32)>()
            .all(&self.db)
            .await
    }

    async fn find_by_ids(&self, ids: &HashSet<i32>) -> Result<Vec<location::Model>, DbErr> {
        location::Entity::find()
            .filter(location::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
    }

    async fn find_by_city(&self, city: &str) -> Result<Option<location::Model>, DbErr> {
        location::Entity::find()
            .filter(location::Column::City.eq(city))
            .one(&self.db)
            .await
    }
}
