use rust_decimal::Decimal;

use crate::config::defaults::DEFAULT_LEVY_RATE;
use crate::core::{AppError, Result};

/// Flat-percentage levy on computed tax. No brackets, no caps.
pub struct LevyCalculator {
    rate: Decimal,
}

impl LevyCalculator {
    /// Create a calculator for a tenant's levy rate (0..=1)
    pub fn new(rate: Decimal) -> Result<Self> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(AppError::configuration(format!(
                "Levy rate {} outside 0..=1",
                rate
            )));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// `levy = tax * rate`, unrounded
    pub fn calculate(&self, tax: Decimal) -> Decimal {
        tax * self.rate
    }
}

impl Default for LevyCalculator {
    fn default() -> Self {
        Self {
            rate: DEFAULT_LEVY_RATE,
        }
    }
}
