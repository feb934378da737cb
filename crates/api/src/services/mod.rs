//! Business logic services.
//!
//! - `users` - create, list and delete users with read-time ages

pub mod users;

pub use users::{CreateUser, UserError, UserService};
