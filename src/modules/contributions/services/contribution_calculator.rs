use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::Result;
use crate::modules::rates::models::ContributionRate;

/// Result of a contribution calculation. `employee` and `employer` are raw
/// values; rounding happens only at the display seam.
#[derive(Debug, Clone, Serialize)]
pub struct ContributionBreakdown {
    /// Insurable base after applying the cap
    pub base: Decimal,
    pub employee: Decimal,
    pub employer: Decimal,
    /// Whether the cap reduced the base below gross
    pub capped: bool,
}

impl ContributionBreakdown {
    /// Effective post-cap rates as percentages of gross, two decimals.
    /// Display only; zero gross reports zero rates.
    pub fn effective_rates(&self, gross: Decimal) -> (Decimal, Decimal) {
        if gross <= Decimal::ZERO {
            return (Decimal::ZERO, Decimal::ZERO);
        }
        let hundred = Decimal::ONE_HUNDRED;
        (
            (self.employee / gross * hundred).round_dp(2),
            (self.employer / gross * hundred).round_dp(2),
        )
    }
}

/// Capped percentage-of-gross social-security contributions, split between
/// employee and employer.
pub struct ContributionCalculator;

impl ContributionCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Contributions on gross pay (basic + allowances, before tax and levy).
    /// The base is `min(gross, cap)`; an uncapped rate uses gross as-is.
    pub fn calculate(
        &self,
        gross: Decimal,
        rate: &ContributionRate,
    ) -> Result<ContributionBreakdown> {
        rate.validate()?;

        let gross = gross.max(Decimal::ZERO);
        let (base, capped) = match rate.cap {
            Some(cap) if gross > cap => (cap, true),
            _ => (gross, false),
        };

        Ok(ContributionBreakdown {
            base,
            employee: base * rate.employee_rate,
            employer: base * rate.employer_rate,
            capped,
        })
    }
}

impl Default for ContributionCalculator {
    fn default() -> Self {
        Self::new()
    }
}
