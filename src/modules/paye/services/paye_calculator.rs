use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::rates::models::{TaxBracket, TaxTable};

/// PayeCalculator resolves income tax through lookup-and-deduct bracket
/// tables: the covering bracket's rate is applied to the whole taxable
/// income and the bracket's precomputed deduction subtracted. This is not a
/// marginal-bracket sum; the deduction encodes the lower brackets, and the
/// two methods disagree at every boundary unless the deducts are exact.
pub struct PayeCalculator;

impl PayeCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Tax for the given taxable income under the given table.
    ///
    /// Taxable income at or below zero is taxed at zero. The result is a raw
    /// `Decimal` with no rounding applied; rounding before downstream
    /// arithmetic would drift the levy and the net.
    pub fn calculate(&self, taxable_income: Decimal, table: &TaxTable) -> Result<Decimal> {
        if taxable_income <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let bracket = table.bracket_for(taxable_income).ok_or_else(|| {
            AppError::configuration(format!(
                "tax table '{}' has no bracket covering income {}",
                table.name, taxable_income
            ))
        })?;

        Ok(Self::tax_in_bracket(taxable_income, bracket))
    }

    /// `income * rate - deduct`, floored at zero
    fn tax_in_bracket(income: Decimal, bracket: &TaxBracket) -> Decimal {
        let tax = income * bracket.rate - bracket.deduct;
        tax.max(Decimal::ZERO)
    }
}

impl Default for PayeCalculator {
    fn default() -> Self {
        Self::new()
    }
}
