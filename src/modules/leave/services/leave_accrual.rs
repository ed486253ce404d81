use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::core::{PayPeriod, Result};
use crate::modules::leave::models::LeaveBalance;
use crate::modules::leave::repositories::LeaveRepository;

/// Prorates and increments annual leave entitlement. All reference dates are
/// explicit parameters; the engine never reads the clock.
pub struct LeaveAccrualEngine {
    leave_repo: Arc<dyn LeaveRepository>,
}

impl LeaveAccrualEngine {
    pub fn new(leave_repo: Arc<dyn LeaveRepository>) -> Self {
        Self { leave_repo }
    }

    /// Entitlement at onboarding, in days rounded to one decimal.
    ///
    /// Hired this year: one twelfth of the annual entitlement per month
    /// worked since hire, with one extra month credited once the current
    /// day-of-month reaches 15. Hired in an earlier year: the full annual
    /// entitlement, no proration.
    pub fn initial_entitlement(
        hire_date: NaiveDate,
        today: NaiveDate,
        annual_leave_days: Decimal,
    ) -> Decimal {
        if hire_date.year() < today.year() {
            return annual_leave_days;
        }

        let months_worked = (today.year() - hire_date.year()) * 12
            + (today.month() as i32 - hire_date.month() as i32);
        let additional_month = if today.day() >= 15 { 1 } else { 0 };
        let months = Decimal::from((months_worked + additional_month).max(0));

        (months * annual_leave_days / Decimal::from(12)).round_dp(1)
    }

    /// Create the (employee, current-year) balance at onboarding, seeded
    /// with the prorated entitlement. A balance that already exists is
    /// returned untouched.
    pub async fn onboard_employee(
        &self,
        tenant_id: Uuid,
        employee_id: Uuid,
        hire_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<LeaveBalance> {
        if let Some(existing) = self.leave_repo.find_balance(employee_id, today.year()).await? {
            return Ok(existing);
        }

        let policy = self.leave_repo.get_or_create_policy(tenant_id).await?;
        let entitlement =
            Self::initial_entitlement(hire_date, today, policy.annual_leave_days);

        let mut balance = LeaveBalance::new(employee_id, today.year(), entitlement);
        balance.annual_balance = entitlement;

        info!(
            "Onboarded employee {} with {} leave days for {}",
            employee_id, entitlement, balance.year
        );
        self.leave_repo.save_balance(balance).await
    }

    /// Monthly accrual for one processed payroll period: one twelfth of the
    /// tenant's annual entitlement added to the annual balance. Creates the
    /// (employee, year) balance with the policy's full annual total when
    /// absent. Idempotent per (employee, period): a period that has already
    /// accrued is returned unchanged.
    pub async fn accrue_for_period(
        &self,
        tenant_id: Uuid,
        employee_id: Uuid,
        period: PayPeriod,
    ) -> Result<LeaveAccrualOutcome> {
        let policy = self.leave_repo.get_or_create_policy(tenant_id).await?;
        let year = period.year();

        let mut balance = match self.leave_repo.find_balance(employee_id, year).await? {
            Some(balance) => balance,
            None => LeaveBalance::new(employee_id, year, policy.annual_leave_days),
        };

        if balance.accrued_for(period.end) {
            return Ok(LeaveAccrualOutcome {
                accrued: Decimal::ZERO,
                balance,
            });
        }

        let accrued = policy.monthly_accrual();
        balance.annual_balance += accrued;
        balance.last_accrued_period = Some(period.end);

        let balance = self.leave_repo.save_balance(balance).await?;
        Ok(LeaveAccrualOutcome { accrued, balance })
    }
}

/// What one period's accrual did. `accrued` is zero when the period had
/// already been applied.
#[derive(Debug, Clone)]
pub struct LeaveAccrualOutcome {
    pub accrued: Decimal,
    pub balance: LeaveBalance,
}
