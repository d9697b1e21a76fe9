use anyhow::Result;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

use crate::repos::{
    SeaOrmCategoryRepository, SeaOrmEventRepository, SeaOrmLocationRepository,
    SeaOrmUserRepository,
};
use crate::schemas::AppState;
use crate::services::{
    CategoryService, EventService, LocationService, UserService, UserValidator,
};

/// Connect to the database and build application state.
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    Ok(build_app_state(db))
}

/// Wire repositories, validator and services over an open connection.
pub fn build_app_state(db: DatabaseConnection) -> AppState {
    let users_repo = Arc::new(SeaOrmUserRepository::new(db.clone()));
    let events_repo = Arc::new(SeaOrmEventRepository::new(db.clone()));
    let categories_repo = Arc::new(SeaOrmCategoryRepository::new(db.clone()));
    let locations_repo = Arc::new(SeaOrmLocationRepository::new(db.clone()));

    let validator = UserValidator::new(users_repo.clone());
    let users = UserService::new(users_repo, validator);
    let locations = LocationService::new(locations_repo);
    let categories = CategoryService::new(categories_repo);
    let events = EventService::new(events_repo, categories, locations.clone());

    AppState {
        db,
        users,
        events,
        locations,
    }
}
