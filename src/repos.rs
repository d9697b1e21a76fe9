//! Typed query operations over the store, expressed as traits so tests
//! can substitute in-memory fakes. Implementations return raw `DbErr`;
//! translation into the API failure taxonomy happens in the services.

pub mod categories;
pub mod events;
pub mod locations;
pub mod users;

pub use categories::{CategoryRepository, CategoryWithCount, SeaOrmCategoryRepository};
pub use events::{EventRepository, SeaOrmEventRepository};
pub use locations::{LocationRepository, SeaOrmLocationRepository};
pub use users::{SeaOrmUserRepository, UserRepository};
