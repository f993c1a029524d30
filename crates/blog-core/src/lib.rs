//! # Blog Core
//!
//! The domain layer of the blog API.
//! Blog post entities, their validation rules, and the store port.
//! No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
