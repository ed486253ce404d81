// Leave entitlement module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{LeaveBalance, LeavePolicy};
pub use repositories::{InMemoryLeaveRepository, LeaveRepository};
pub use services::{LeaveAccrualEngine, LeaveAccrualOutcome};
