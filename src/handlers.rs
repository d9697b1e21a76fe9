pub mod events;
pub mod health;
pub mod locations;
pub mod users;
