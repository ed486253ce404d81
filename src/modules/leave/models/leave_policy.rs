use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::defaults;
use crate::core::{AppError, Result};

/// Per-tenant leave entitlement policy. One per tenant, created lazily with
/// platform defaults the first time a tenant needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeavePolicy {
    pub tenant_id: Uuid,
    /// Annual leave entitlement in working days per year
    pub annual_leave_days: Decimal,
    /// Sick days claimable without a medical certificate
    pub sick_leave_days_before_certificate: u32,
    pub maternity_leave_days: u32,
    pub paternity_leave_days: u32,
    /// Unused annual days carried into the next year
    pub carry_over_days: Decimal,
}

impl LeavePolicy {
    /// Policy seeded from platform defaults
    pub fn with_defaults(tenant_id: Uuid) -> Self {
        Self {
            tenant_id,
            annual_leave_days: defaults::DEFAULT_ANNUAL_LEAVE_DAYS,
            sick_leave_days_before_certificate: defaults::DEFAULT_SICK_LEAVE_DAYS,
            maternity_leave_days: defaults::DEFAULT_MATERNITY_LEAVE_DAYS,
            paternity_leave_days: defaults::DEFAULT_PATERNITY_LEAVE_DAYS,
            carry_over_days: defaults::DEFAULT_CARRY_OVER_DAYS,
        }
    }

    /// Days accrued per processed payroll period
    pub fn monthly_accrual(&self) -> Decimal {
        self.annual_leave_days / Decimal::from(12)
    }

    pub fn validate(&self) -> Result<()> {
        if self.annual_leave_days < Decimal::ZERO {
            return Err(AppError::configuration(format!(
                "Annual leave days cannot be negative, got {}",
                self.annual_leave_days
            )));
        }
        if self.carry_over_days < Decimal::ZERO {
            return Err(AppError::configuration(format!(
                "Carry-over days cannot be negative, got {}",
                self.carry_over_days
            )));
        }
        Ok(())
    }
}
