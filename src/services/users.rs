use std::sync::Arc;

use chrono::Utc;
use model::entities::user;
use sea_orm::Set;
use tracing::debug;

use crate::dto::{UserDto, UserPayload};
use crate::error::ApiError;
use crate::repos::UserRepository;
use crate::services::UserValidator;

/// CRUD flow for users. Structurally parallel to the event aggregator
/// but with no cross-entity joins; its one collaborator is the validator.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    validator: UserValidator,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, validator: UserValidator) -> Self {
        Self { repo, validator }
    }

    pub async fn create_user(&self, payload: UserPayload) -> Result<UserDto, ApiError> {
        let valid = self.validator.validate_for_create(&payload).await?;

        let now = Utc::now().naive_utc();
        let user = user::ActiveModel {
            username: Set(valid.username),
            email: Set(valid.email),
            first_name: Set(valid.first_name),
            last_name: Set(valid.last_name),
            phone_number: Set(valid.phone_number),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let saved = self.repo.insert(user).await?;
        debug!("user {} created", saved.id);
        Ok(UserDto::from(saved))
    }

    pub async fn get_user(&self, id: i32) -> Result<UserDto, ApiError> {
        self.validator.validate_id(id)?;

        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("User not found with id: {id}")))?;

        Ok(UserDto::from(user))
    }

    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, ApiError> {
        let users = self.repo.find_all().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn update_user(&self, id: i32, payload: UserPayload) -> Result<UserDto, ApiError> {
        self.validator.validate_id(id)?;

        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("User not found with id: {id}")))?;

        let valid = self.validator.validate_for_update(id, &payload).await?;

        let mut user: user::ActiveModel = existing.into();
        user.username = Set(valid.username);
        user.email = Set(valid.email);
        user.first_name = Set(valid.first_name);
        user.last_name = Set(valid.last_name);
        user.phone_number = Set(valid.phone_number);
        user.updated_at = Set(Utc::now().naive_utc());

        let updated = self.repo.update(user).await?;
        Ok(UserDto::from(updated))
    }

    pub async fn delete_user(&self, id: i32) -> Result<(), ApiError> {
        self.validator.validate_id(id)?;

        if !self.repo.exists_by_id(id).await? {
            return Err(ApiError::NotFound(format!("User not found with id: {id}")));
        }

        self.repo.delete_by_id(id).await?;
        debug!("user {} deleted", id);
        Ok(())
    }
}
