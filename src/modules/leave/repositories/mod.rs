pub mod leave_repository;

pub use leave_repository::{InMemoryLeaveRepository, LeaveRepository};
