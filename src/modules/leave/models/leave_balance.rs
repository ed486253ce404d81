use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Leave balances for one (employee, year). Created at onboarding or on
/// first accrual, then mutated once per payroll run. Usage decrements come
/// from the external leave-request collaborator, never from the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub employee_id: Uuid,
    pub year: i32,
    /// Entitlement for the year as currently known
    pub annual_total: Decimal,
    pub annual_used: Decimal,
    /// Accrued-and-unspent days; grows by one twelfth of the annual
    /// entitlement per processed period
    pub annual_balance: Decimal,
    pub annual_carry_over: Decimal,
    pub sick_used: Decimal,
    pub maternity_used: Decimal,
    pub paternity_used: Decimal,
    /// End date of the last period that accrued into this balance.
    /// Re-applying the same period is a no-op, so a retried batch cannot
    /// double-accrue.
    pub last_accrued_period: Option<NaiveDate>,
}

impl LeaveBalance {
    /// Fresh balance with a known annual entitlement and nothing accrued yet
    pub fn new(employee_id: Uuid, year: i32, annual_total: Decimal) -> Self {
        Self {
            employee_id,
            year,
            annual_total,
            annual_used: Decimal::ZERO,
            annual_balance: Decimal::ZERO,
            annual_carry_over: Decimal::ZERO,
            sick_used: Decimal::ZERO,
            maternity_used: Decimal::ZERO,
            paternity_used: Decimal::ZERO,
            last_accrued_period: None,
        }
    }

    /// Whether the given period already accrued into this balance
    pub fn accrued_for(&self, period_end: NaiveDate) -> bool {
        self.last_accrued_period == Some(period_end)
    }
}
