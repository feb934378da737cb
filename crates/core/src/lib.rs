//! Arukay Core - Shared types and pure logic.
//!
//! This crate provides the pieces of Arukay that have no I/O, shared by:
//! - `api` - HTTP service exposing user create/list/delete
//! - `cli` - Command-line tools for migrations, user creation and the generator walkthrough
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no database access,
//! no HTTP. Age and sequence logic live here so they can be tested against
//! fixed inputs and reused from both binaries.
//!
//! # Modules
//!
//! - [`types`] - Validated newtypes for user IDs, names and emails
//! - [`age`] - Derived age computation from a birth date
//! - [`sequence`] - Eager and lazy sequence producers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod age;
pub mod sequence;
pub mod types;

pub use age::{age_on, age_today};
pub use sequence::{LazyRange, eager_range, lazy_range};
pub use types::*;
