#[cfg(test)]
pub mod test_utils {
    use axum::Router;
    use chrono::{NaiveDate, NaiveDateTime, Utc};
    use migration::{Migrator, MigratorTrait};
    use model::entities::{event, event_category, location};
    use rust_decimal::Decimal;
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    use crate::config::build_app_state;
    use crate::router::create_router;
    use crate::schemas::AppState;

    /// Create an in-memory SQLite database with the full schema applied
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        build_app_state(setup_test_db().await)
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing, together with the state backing it so
    /// tests can seed fixture rows directly.
    pub async fn setup_test_app() -> (Router, AppState) {
        let _ = init_test_tracing();

        let state = setup_test_app_state().await;
        let router = create_router(state.clone());
        (router, state)
    }

    pub async fn seed_location(
        db: &DatabaseConnection,
        city: &str,
        state: &str,
        country: &str,
        pincode: &str,
    ) -> location::Model {
        let now = Utc::now().naive_utc();
        location::ActiveModel {
            city: Set(city.to_string()),
            state: Set(state.to_string()),
            country: Set(country.to_string()),
            pincode: Set(pincode.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to seed location")
    }

    pub async fn seed_category(db: &DatabaseConnection, name: &str) -> event_category::Model {
        event_category::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to seed category")
    }

    pub async fn seed_event(
        db: &DatabaseConnection,
        name: &str,
        category_id: i32,
        location_id: i32,
        status: i16,
    ) -> event::Model {
        let now = Utc::now().naive_utc();
        event::ActiveModel {
            name: Set(name.to_string()),
            display_picture: Set(None),
            description: Set(None),
            hosted_from: Set(hosted_at(2025, 7, 1)),
            hosted_to: Set(hosted_at(2025, 7, 2)),
            venue: Set("Main Hall".to_string()),
            ticket_amount: Set(Decimal::new(25000, 2)),
            status: Set(status),
            capacity: Set(100),
            tickets_booked: Set(0),
            category_id: Set(category_id),
            location_id: Set(location_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to seed event")
    }

    fn hosted_at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }
}
