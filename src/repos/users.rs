use async_trait::async_trait;
use model::entities::user;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter,
};

/// Persistence operations the user manager needs.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: user::ActiveModel) -> Result<user::Model, DbErr>;
    async fn update(&self, user: user::ActiveModel) -> Result<user::Model, DbErr>;
    async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>, DbErr>;
    async fn find_all(&self) -> Result<Vec<user::Model>, DbErr>;
    async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>, DbErr>;
    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, DbErr>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, DbErr>;
    /// Returns the number of rows deleted.
    async fn delete_by_id(&self, id: i32) -> Result<u64, DbErr>;
}

#[derive(Clone)]
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn insert(&self, user: user::ActiveModel) -> Result<user::Model, DbErr> {
        user.insert(&self.db).await
    }

    async fn update(&self, user: user::ActiveModel) -> Result<user::Model, DbErr> {
        user.update(&self.db).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find_by_id(id).one(&self.db).await
    }

    async fn find_all(&self) -> Result<Vec<user::Model>, DbErr> {
        user::Entity::find().all(&self.db).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let count = user::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, DbErr> {
        let result = user::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
