use async_trait::async_trait;
use model::entities::event;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Persistence operations for events themselves; category and location
/// lookups live in their own repositories.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// All events whose status marks them visible in listings.
    async fn list_active(&self) -> Result<Vec<event::Model>, DbErr>;
    async fn insert(&self, event: event::ActiveModel) -> Result<event::Model, DbErr>;
}

#[derive(Clone)]
pub struct SeaOrmEventRepository {
    db: DatabaseConnection,
}

impl SeaOrmEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for SeaOrmEventRepository {
    async fn list_active(&self) -> Result<Vec<event::Model>, DbErr> {
        event::Entity::find()
            .filter(event::Column::Status.eq(event::STATUS_ACTIVE))
            .all(&self.db)
            .await
    }

    async fn insert(&self, event: event::ActiveModel) -> Result<event::Model, DbErr> {
        event.insert(&self.db).await
    }
}
