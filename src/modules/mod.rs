pub mod contributions;
pub mod leave;
pub mod paye;
pub mod payslips;
pub mod rates;
pub mod ytd;
