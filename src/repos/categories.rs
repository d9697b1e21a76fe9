use std::collections::HashSet;

use async_trait::async_trait;
use model::entities::{event, event_category};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

/// Category row annotated with a live count of events filed under it.
#[derive(Debug, Clone, FromQueryResult)]
pub struct CategoryWithCount {
    pub id: i32,
    pub name: String,
    pub event_count: i64,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Rows for the subset of `ids` that exist; missing ids are simply
    /// absent from the result.
    async fn find_by_ids(&self, ids: &HashSet<i32>)
        -> Result<Vec<event_category::Model>, DbErr>;
    /// Case-insensitive exact name match.
    async fn find_by_name(&self, name: &str) -> Result<Option<event_category::Model>, DbErr>;
    /// Every category ordered by name, with its event count (0 included).
    async fn list_with_counts(&self) -> Result<Vec<CategoryWithCount>, DbErr>;
}

#[derive(Clone)]
pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn find_by_ids(
        &self,
        ids: &HashSet<i32>,
    ) -> Result<Vec<event_category::Model>, DbErr> {
        event_category::Entity::find()
            .filter(event_category::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<event_category::Model>, DbErr> {
        event_category::Entity::find()
            .filter(
                Expr::expr(Func::upper(Expr::col(event_category::Column::Name)))
                    .eq(name.to_uppercase()),
            )
            .one(&self.db)
            .await
    }

    async fn list_with_counts(&self) -> Result<Vec<CategoryWithCount>, DbErr> {
        event_category::Entity::find()
            .select_only()
            .column(event_category::Column::Id)
            .column(event_category::Column::Name)
            .column_as(event::Column::Id.count(), "event_count")
            .join_rev(JoinType::LeftJoin, event::Relation::Category.def())
            .group_by(event_category::Column::Id)
            .group_by(event_category::Column::Name)
            .order_by_asc(event_category::Column::Name)
            .into_model::<CategoryWithCount>()
            .all(&self.db)
            .await
    }
}
