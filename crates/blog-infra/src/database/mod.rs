//! Post storage - MongoDB and in-memory fallback.

mod connections;
mod memory;

#[cfg(feature = "mongo")]
mod document;
#[cfg(feature = "mongo")]
mod mongo_repo;

pub use connections::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "mongo")]
pub use connections::DatabaseConnection;
#[cfg(feature = "mongo")]
pub use mongo_repo::MongoPostRepository;
