pub mod payslip;
pub mod period_input;
pub mod run_report;

pub use payslip::PayslipResult;
pub use period_input::{AllowanceItem, PeriodInput};
pub use run_report::{PayrollRunReport, PayrollRunRequest, PayslipFailure};
