// Service exports
pub mod cache;
pub mod engine;
pub mod memory;
pub mod postgres;
pub mod store;

pub use cache::{AnalyticsCache, CacheKey};
pub use engine::{EngineOptions, JobScore, MatchEngine};
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use store::{JobStore, StoreError};
