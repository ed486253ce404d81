pub mod payroll_profile;

pub use payroll_profile::{EmployeePayrollProfile, PeriodFigures, YtdSnapshot};
