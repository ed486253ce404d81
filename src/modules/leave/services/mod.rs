pub mod leave_accrual;

pub use leave_accrual::{LeaveAccrualEngine, LeaveAccrualOutcome};
