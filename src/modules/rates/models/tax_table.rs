// Effective-dated PAYE bracket table with write-time validation.
//
// Brackets use the lookup-and-deduct method: a single bracket's rate applied
// to the whole taxable income, corrected by a precomputed deduction. The
// original system stored brackets as untyped JSON blobs; here the structure
// is validated before a table is accepted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Currency, PayFrequency, Result};

/// One row of a bracket table. `max == None` marks the open-ended top
/// bracket; every other bracket must be bounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower bound, inclusive
    pub min: Decimal,
    /// Upper bound, inclusive; `None` for the top bracket
    pub max: Option<Decimal>,
    /// Marginal rate applied to the whole income, 0..=1
    pub rate: Decimal,
    /// Precomputed deduction keeping tax continuous at bracket boundaries
    pub deduct: Decimal,
}

impl TaxBracket {
    /// Whether this bracket covers the given income.
    /// The lower bound is inclusive, so an income exactly on a bracket's
    /// minimum belongs to that bracket, never to the one below it.
    pub fn covers(&self, income: Decimal) -> bool {
        self.min <= income && self.max.map_or(true, |max| income <= max)
    }
}

/// Effective-dated tax table for one (tenant, currency, frequency) key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxTable {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub currency: Currency,
    pub frequency: PayFrequency,
    pub brackets: Vec<TaxBracket>,
    pub effective_from: NaiveDate,
    /// Open-ended when `None`
    pub effective_to: Option<NaiveDate>,
    pub active: bool,
}

impl TaxTable {
    pub fn new(
        tenant_id: Uuid,
        name: impl Into<String>,
        currency: Currency,
        frequency: PayFrequency,
        brackets: Vec<TaxBracket>,
        effective_from: NaiveDate,
        effective_to: Option<NaiveDate>,
    ) -> Result<Self> {
        let table = Self {
            id: Uuid::new_v4(),
            tenant_id,
            name: name.into(),
            currency,
            frequency,
            brackets,
            effective_from,
            effective_to,
            active: true,
        };
        table.validate()?;
        Ok(table)
    }

    /// Whether the table's effective window contains the given date
    pub fn effective_on(&self, date: NaiveDate) -> bool {
        self.effective_from <= date && self.effective_to.map_or(true, |to| date <= to)
    }

    /// Validate the bracket structure. Accepted tables partition [0, inf)
    /// without gaps or overlaps and keep tax continuous at every boundary.
    pub fn validate(&self) -> Result<()> {
        if self.brackets.is_empty() {
            return Err(AppError::configuration(format!(
                "Tax table '{}' has no brackets",
                self.name
            )));
        }

        if let Some(to) = self.effective_to {
            if to < self.effective_from {
                return Err(AppError::configuration(format!(
                    "Tax table '{}': effective_to ({}) precedes effective_from ({})",
                    self.name, to, self.effective_from
                )));
            }
        }

        let first = &self.brackets[0];
        if first.min != Decimal::ZERO {
            return Err(AppError::configuration(format!(
                "Tax table '{}': first bracket must start at 0, got {}",
                self.name, first.min
            )));
        }

        let unit = self.currency.smallest_unit();
        for (i, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(AppError::configuration(format!(
                    "Tax table '{}': bracket {} rate {} outside 0..=1",
                    self.name, i, bracket.rate
                )));
            }
            if bracket.deduct < Decimal::ZERO {
                return Err(AppError::configuration(format!(
                    "Tax table '{}': bracket {} has negative deduct {}",
                    self.name, i, bracket.deduct
                )));
            }

            let is_last = i == self.brackets.len() - 1;
            match bracket.max {
                None if !is_last => {
                    return Err(AppError::configuration(format!(
                        "Tax table '{}': only the top bracket may be unbounded",
                        self.name
                    )));
                }
                Some(max) if max <= bracket.min => {
                    return Err(AppError::configuration(format!(
                        "Tax table '{}': bracket {} upper bound {} not above lower bound {}",
                        self.name, i, max, bracket.min
                    )));
                }
                _ => {}
            }

            if !is_last {
                let next = &self.brackets[i + 1];
                // max is Some here: the unbounded-before-last case returned above
                let max = bracket.max.unwrap_or_default();
                if next.min <= max {
                    return Err(AppError::configuration(format!(
                        "Tax table '{}': brackets {} and {} overlap",
                        self.name,
                        i,
                        i + 1
                    )));
                }
                if next.min - max > unit {
                    return Err(AppError::configuration(format!(
                        "Tax table '{}': gap between {} and {} (incomes in ({}, {}) match no bracket)",
                        self.name,
                        i,
                        i + 1,
                        max,
                        next.min
                    )));
                }
                // Continuity: taxing the boundary income under either bracket
                // must agree, so next.deduct = deduct + (next.rate - rate) * max.
                let expected_deduct = bracket.deduct + (next.rate - bracket.rate) * max;
                if (next.deduct - expected_deduct).abs() > unit {
                    return Err(AppError::configuration(format!(
                        "Tax table '{}': bracket {} deduct {} breaks continuity (expected {})",
                        self.name,
                        i + 1,
                        next.deduct,
                        expected_deduct
                    )));
                }
            }
        }

        Ok(())
    }

    /// The bracket covering the given income, if any. Validated tables cover
    /// every non-negative income.
    pub fn bracket_for(&self, income: Decimal) -> Option<&TaxBracket> {
        self.brackets.iter().find(|b| b.covers(income))
    }
}
