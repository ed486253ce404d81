// Payslip assembly module

pub mod models;
pub mod services;

pub use models::{
    AllowanceItem, PayrollRunReport, PayrollRunRequest, PayslipFailure, PayslipResult, PeriodInput,
};
pub use services::PayslipAssembler;
