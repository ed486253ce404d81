pub mod contribution_calculator;

pub use contribution_calculator::{ContributionBreakdown, ContributionCalculator};
