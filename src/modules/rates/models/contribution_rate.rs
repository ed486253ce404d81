use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Currency, Result};

/// Effective-dated social-security contribution rate for one
/// (tenant, currency) key.
///
/// This record is the single authoritative source for contribution rates.
/// Platform defaults only seed a tenant's first record; nothing reads them
/// at calculation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionRate {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub currency: Currency,
    /// Employee share of the contribution, 0..=1
    pub employee_rate: Decimal,
    /// Employer share of the contribution, 0..=1
    pub employer_rate: Decimal,
    /// Insurable-earnings ceiling per period; uncapped when `None`
    pub cap: Option<Decimal>,
    pub effective_from: NaiveDate,
    /// Open-ended when `None`
    pub effective_to: Option<NaiveDate>,
    pub active: bool,
}

impl ContributionRate {
    pub fn new(
        tenant_id: Uuid,
        currency: Currency,
        employee_rate: Decimal,
        employer_rate: Decimal,
        cap: Option<Decimal>,
        effective_from: NaiveDate,
        effective_to: Option<NaiveDate>,
    ) -> Result<Self> {
        let rate = Self {
            id: Uuid::new_v4(),
            tenant_id,
            currency,
            employee_rate,
            employer_rate,
            cap,
            effective_from,
            effective_to,
            active: true,
        };
        rate.validate()?;
        Ok(rate)
    }

    pub fn effective_on(&self, date: NaiveDate) -> bool {
        self.effective_from <= date && self.effective_to.map_or(true, |to| date <= to)
    }

    pub fn validate(&self) -> Result<()> {
        for (label, rate) in [
            ("employee_rate", self.employee_rate),
            ("employer_rate", self.employer_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(AppError::configuration(format!(
                    "Contribution {} {} outside 0..=1",
                    label, rate
                )));
            }
        }

        if let Some(cap) = self.cap {
            if cap <= Decimal::ZERO {
                return Err(AppError::configuration(format!(
                    "Contribution cap must be positive, got {}",
                    cap
                )));
            }
        }

        if let Some(to) = self.effective_to {
            if to < self.effective_from {
                return Err(AppError::configuration(format!(
                    "Contribution rate: effective_to ({}) precedes effective_from ({})",
                    to, self.effective_from
                )));
            }
        }

        Ok(())
    }
}
