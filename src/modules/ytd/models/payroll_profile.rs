use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{Currency, PayFrequency};

/// Cumulative year-to-date view of a profile, embedded in payslip results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YtdSnapshot {
    pub gross: Decimal,
    pub taxable: Decimal,
    pub paye: Decimal,
    pub contribution: Decimal,
    pub net: Decimal,
    pub year: i32,
}

impl YtdSnapshot {
    pub fn zeroed(year: i32) -> Self {
        Self {
            gross: Decimal::ZERO,
            taxable: Decimal::ZERO,
            paye: Decimal::ZERO,
            contribution: Decimal::ZERO,
            net: Decimal::ZERO,
            year,
        }
    }
}

/// The figures one processed period feeds into YTD accumulation
#[derive(Debug, Clone, Copy)]
pub struct PeriodFigures {
    pub gross: Decimal,
    pub taxable: Decimal,
    pub tax: Decimal,
    pub employee_contribution: Decimal,
    pub employer_contribution: Decimal,
    pub net: Decimal,
}

/// Per-employee payroll profile, mutated once per payroll run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePayrollProfile {
    pub employee_id: Uuid,
    pub tenant_id: Uuid,
    /// Payment currency
    pub currency: Currency,
    /// Currency the employment contract is denominated in
    pub contract_currency: Currency,
    pub pay_frequency: PayFrequency,
    pub ytd_gross: Decimal,
    pub ytd_taxable: Decimal,
    pub ytd_paye: Decimal,
    /// Employee plus employer contributions
    pub ytd_contribution: Decimal,
    pub ytd_net: Decimal,
    pub ytd_year: i32,
    /// End date of the last period applied to this profile. Re-applying the
    /// same period is a no-op, so a retried batch cannot double-count.
    pub last_applied_period: Option<NaiveDate>,
}

impl EmployeePayrollProfile {
    /// Zeroed profile for an employee's first ever run
    pub fn new(
        employee_id: Uuid,
        tenant_id: Uuid,
        currency: Currency,
        contract_currency: Currency,
        pay_frequency: PayFrequency,
        year: i32,
    ) -> Self {
        Self {
            employee_id,
            tenant_id,
            currency,
            contract_currency,
            pay_frequency,
            ytd_gross: Decimal::ZERO,
            ytd_taxable: Decimal::ZERO,
            ytd_paye: Decimal::ZERO,
            ytd_contribution: Decimal::ZERO,
            ytd_net: Decimal::ZERO,
            ytd_year: year,
            last_applied_period: None,
        }
    }

    /// Pure accumulation. Sums the period into the running totals and stamps
    /// the period's year. Never resets: callers must compare the stored year
    /// with the period's year and call [`reset_for_year`](Self::reset_for_year)
    /// first when they differ.
    pub fn accumulate(&mut self, figures: &PeriodFigures, year: i32) {
        self.ytd_gross += figures.gross;
        self.ytd_taxable += figures.taxable;
        self.ytd_paye += figures.tax;
        self.ytd_contribution += figures.employee_contribution + figures.employer_contribution;
        self.ytd_net += figures.net;
        self.ytd_year = year;
    }

    /// Zero every running total for a new fiscal year
    pub fn reset_for_year(&mut self, year: i32) {
        self.ytd_gross = Decimal::ZERO;
        self.ytd_taxable = Decimal::ZERO;
        self.ytd_paye = Decimal::ZERO;
        self.ytd_contribution = Decimal::ZERO;
        self.ytd_net = Decimal::ZERO;
        self.ytd_year = year;
        self.last_applied_period = None;
    }

    pub fn applied_for(&self, period_end: NaiveDate) -> bool {
        self.last_applied_period == Some(period_end)
    }

    pub fn snapshot(&self) -> YtdSnapshot {
        YtdSnapshot {
            gross: self.ytd_gross,
            taxable: self.ytd_taxable,
            paye: self.ytd_paye,
            contribution: self.ytd_contribution,
            net: self.ytd_net,
            year: self.ytd_year,
        }
    }
}
