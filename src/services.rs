pub mod categories;
pub mod events;
pub mod locations;
pub mod users;
pub mod validation;

pub use categories::CategoryService;
pub use events::EventService;
pub use locations::LocationService;
pub use users::UserService;
pub use validation::UserValidator;
