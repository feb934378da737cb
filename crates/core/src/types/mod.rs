//! Core types for Arukay.
//!
//! This module provides type-safe wrappers for user fields.

pub mod email;
pub mod id;
pub mod name;

pub use email::{Email, EmailError};
pub use id::UserId;
pub use name::{UserName, UserNameError};
