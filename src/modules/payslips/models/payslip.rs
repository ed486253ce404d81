use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{Currency, PayPeriod};
use crate::modules::ytd::models::YtdSnapshot;

/// The computed payroll outcome for one employee and one period. Persisted
/// as an immutable record once produced; export, report and PDF
/// collaborators consume it as-is.
///
/// Monetary fields hold raw unrounded values so that the identity
/// `net + total_deductions == gross - pre_tax_deductions` holds exactly.
/// Leave figures are display values rounded to one decimal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipResult {
    pub employee_id: Uuid,
    pub period: PayPeriod,
    pub currency: Currency,

    // Earnings, converted to the payment currency
    pub basic: Decimal,
    pub allowances: Decimal,
    pub bonuses: Decimal,
    pub overtime: Decimal,
    pub gross: Decimal,

    // Deductions
    /// Pension and medical aid, withheld before tax
    pub pre_tax_deductions: Decimal,
    pub taxable_income: Decimal,
    pub tax: Decimal,
    pub levy: Decimal,
    pub employee_contribution: Decimal,
    pub employer_contribution: Decimal,
    /// Whether the contribution cap reduced the insurable base
    pub contribution_capped: bool,
    /// Loan, advance and other post-tax withholdings
    pub post_tax_deductions: Decimal,
    /// tax + levy + employee contribution + post-tax deductions; pre-tax
    /// deductions are withheld separately and excluded from this figure
    pub total_deductions: Decimal,
    /// May legitimately be negative; surfaced as-is
    pub net: Decimal,

    // Post-update snapshots
    pub ytd: YtdSnapshot,
    pub leave_accrued_this_period: Decimal,
    pub leave_balance_remaining: Decimal,
}
