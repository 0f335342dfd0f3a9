//! Core types for mealsearch
//!
//! This crate contains the meal data shapes returned by the search service
//! and the configuration shared by the client, view and CLI crates.

pub mod constants;
pub mod env_config;
mod meal;
mod query;

pub use constants::*;
pub use meal::*;
pub use query::*;
