use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, FailureReason, PayPeriod, Result};
use crate::modules::payslips::models::{PayslipResult, PeriodInput};

/// A batch payroll run for one tenant and one period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunRequest {
    pub tenant_id: Uuid,
    pub period: PayPeriod,
    pub inputs: Vec<PeriodInput>,
}

impl PayrollRunRequest {
    /// Run-level validation. Any failure here refuses the whole run before
    /// per-employee work begins.
    pub fn validate(&self) -> Result<()> {
        if self.period.start > self.period.end {
            return Err(AppError::validation(format!(
                "Period start ({}) must be before or equal to period end ({})",
                self.period.start, self.period.end
            )));
        }

        if self.inputs.is_empty() {
            return Err(AppError::validation(
                "Payroll run must include at least one employee",
            ));
        }

        let mut seen = HashSet::new();
        for input in &self.inputs {
            if input.exchange_rate <= Decimal::ZERO {
                return Err(AppError::validation(format!(
                    "Employee {}: exchange rate must be positive, got {}",
                    input.employee_id, input.exchange_rate
                )));
            }
            // Duplicates would break per-employee write serialization and
            // double-apply accrual within one run
            if !seen.insert(input.employee_id) {
                return Err(AppError::validation(format!(
                    "Employee {} appears more than once in the batch",
                    input.employee_id
                )));
            }
        }

        Ok(())
    }
}

/// One skipped employee and why
#[derive(Debug, Clone, Serialize)]
pub struct PayslipFailure {
    pub employee_id: Uuid,
    pub reason: FailureReason,
}

/// Outcome of a batch run: every employee accounted for, either as a
/// payslip or as a failure with a reason. Totals cover succeeded employees
/// only.
#[derive(Debug, Serialize)]
pub struct PayrollRunReport {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub employees_processed: usize,
    pub total_gross: Decimal,
    pub total_net: Decimal,
    pub payslips: Vec<PayslipResult>,
    pub failures: Vec<PayslipFailure>,
}
