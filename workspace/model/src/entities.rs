//! This file serves as the root for all SeaORM entity modules.
//! We define the data models for the event platform here: users, events,
//! event categories and locations, adapted for Rust's type system and the
//! SeaORM framework.

pub mod event;
pub mod event_category;
pub mod location;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::event::Entity as Event;
    pub use super::event_category::Entity as EventCategory;
    pub use super::location::Entity as Location;
    pub use super::user::Entity as User;
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use migration::{Migrator, MigratorTrait};
    use rust_decimal::Decimal;
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, QueryFilter, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        // Connect to the SQLite database
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        // Try to apply migrations first
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    fn timestamp(year: i32, month: u32, day: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        // Setup database
        let db = setup_db().await?;

        let now = timestamp(2025, 3, 1);

        // Create a user
        let user = user::ActiveModel {
            username: Set("user1".to_string()),
            email: Set("user1@example.com".to_string()),
            first_name: Set("First".to_string()),
            last_name: Set("Last".to_string()),
            phone_number: Set("1234567890".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Create a location
        let location = location::ActiveModel {
            city: Set("Pune".to_string()),
            state: Set("Maharashtra".to_string()),
            country: Set("India".to_string()),
            pincode: Set("411001".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Create a category
        let category = event_category::ActiveModel {
            name: Set("Music".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Create an event referencing both
        let event = event::ActiveModel {
            name: Set("Summer Concert".to_string()),
            display_picture: Set(None),
            description: Set(Some("Open-air concert".to_string())),
            hosted_from: Set(timestamp(2025, 6, 1)),
            hosted_to: Set(timestamp(2025, 6, 2)),
            venue: Set("Riverside Grounds".to_string()),
            ticket_amount: Set(Decimal::new(25000, 2)), // 250.00
            status: Set(event::STATUS_ACTIVE),
            capacity: Set(500),
            tickets_booked: Set(0),
            category_id: Set(category.id),
            location_id: Set(location.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Read back and verify data
        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, user.id);
        assert_eq!(users[0].username, "user1");

        let locations = Location::find().all(&db).await?;
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].city, "Pune");

        let categories = EventCategory::find().all(&db).await?;
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Music");

        let events = Event::find()
            .filter(event::Column::CategoryId.eq(category.id))
            .all(&db)
            .await?;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, event.id);
        assert_eq!(events[0].location_id, location.id);
        assert_eq!(events[0].ticket_amount, Decimal::new(25000, 2));
        assert_eq!(events[0].status, event::STATUS_ACTIVE);

        Ok(())
    }
}
