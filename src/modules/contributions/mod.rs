// Social-security contribution module

pub mod services;

pub use services::{ContributionBreakdown, ContributionCalculator};
