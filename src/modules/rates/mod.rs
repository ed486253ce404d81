// Rate configuration module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{ContributionRate, TaxBracket, TaxTable};
pub use repositories::{InMemoryRateRepository, RateRepository};
pub use services::RateTableResolver;
