pub mod ytd_repository;

pub use ytd_repository::{InMemoryYtdRepository, YtdRepository};
