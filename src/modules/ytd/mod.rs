// Year-to-date accumulation module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{EmployeePayrollProfile, PeriodFigures, YtdSnapshot};
pub use repositories::{InMemoryYtdRepository, YtdRepository};
pub use services::YtdAccumulator;
