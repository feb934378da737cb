//! Domain models for the API.
//!
//! - `user` - stored users and their read-time view with a derived age

pub mod user;

pub use user::{NewUser, User, UserWithAge};
