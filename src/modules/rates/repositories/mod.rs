pub mod rate_repository;

pub use rate_repository::{InMemoryRateRepository, RateRepository};
