use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Currency, PayFrequency, Result};

fn default_exchange_rate() -> Decimal {
    Decimal::ONE
}

/// One itemized allowance line (housing, transport, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowanceItem {
    pub label: String,
    pub amount: Decimal,
}

/// Raw per-employee figures for one payroll period, stated in the
/// employee's contract currency. `exchange_rate` converts contract to
/// payment currency and is 1 when the two coincide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodInput {
    pub employee_id: Uuid,
    /// Payment currency
    pub currency: Currency,
    /// Contract currency the figures are stated in
    pub contract_currency: Currency,
    pub frequency: PayFrequency,
    /// Contract-to-payment conversion rate, strictly positive
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: Decimal,
    pub basic_salary: Decimal,
    #[serde(default)]
    pub allowances: Vec<AllowanceItem>,
    /// Bonuses and commission
    #[serde(default)]
    pub bonuses: Decimal,
    #[serde(default)]
    pub overtime: Decimal,
    /// Pre-tax: pension fund contribution
    #[serde(default)]
    pub pension: Decimal,
    /// Pre-tax: medical aid contribution
    #[serde(default)]
    pub medical_aid: Decimal,
    /// Post-tax: loan repayment
    #[serde(default)]
    pub loan_repayment: Decimal,
    /// Post-tax: salary advance recovery
    #[serde(default)]
    pub salary_advance: Decimal,
    /// Post-tax: anything else withheld after tax
    #[serde(default)]
    pub other_deductions: Decimal,
}

impl PeriodInput {
    /// Minimal input: basic salary only, paid in the contract currency
    pub fn basic(
        employee_id: Uuid,
        currency: Currency,
        frequency: PayFrequency,
        basic_salary: Decimal,
    ) -> Self {
        Self {
            employee_id,
            currency,
            contract_currency: currency,
            frequency,
            exchange_rate: Decimal::ONE,
            basic_salary,
            allowances: Vec::new(),
            bonuses: Decimal::ZERO,
            overtime: Decimal::ZERO,
            pension: Decimal::ZERO,
            medical_aid: Decimal::ZERO,
            loan_repayment: Decimal::ZERO,
            salary_advance: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
        }
    }

    pub fn total_allowances(&self) -> Decimal {
        self.allowances.iter().map(|a| a.amount).sum()
    }

    /// Per-employee input validation. A failure here skips this employee
    /// only; run-level checks live on the request.
    pub fn validate(&self) -> Result<()> {
        let figures = [
            ("basic_salary", self.basic_salary),
            ("bonuses", self.bonuses),
            ("overtime", self.overtime),
            ("pension", self.pension),
            ("medical_aid", self.medical_aid),
            ("loan_repayment", self.loan_repayment),
            ("salary_advance", self.salary_advance),
            ("other_deductions", self.other_deductions),
        ];
        for (label, amount) in figures {
            if amount < Decimal::ZERO {
                return Err(AppError::validation(format!(
                    "Employee {}: {} cannot be negative, got {}",
                    self.employee_id, label, amount
                )));
            }
        }
        for item in &self.allowances {
            if item.amount < Decimal::ZERO {
                return Err(AppError::validation(format!(
                    "Employee {}: allowance '{}' cannot be negative, got {}",
                    self.employee_id, item.label, item.amount
                )));
            }
        }
        Ok(())
    }
}
