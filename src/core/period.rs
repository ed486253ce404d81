use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{AppError, Result};

/// How often an employee is paid. Drives tax-table selection: bracket
/// figures are stated per period, so a monthly table must never be applied
/// to a weekly run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    Weekly,
    Fortnightly,
    Monthly,
}

impl PayFrequency {
    /// Number of pay periods in a calendar year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PayFrequency::Weekly => 52,
            PayFrequency::Fortnightly => 26,
            PayFrequency::Monthly => 12,
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayFrequency::Weekly => write!(f, "weekly"),
            PayFrequency::Fortnightly => write!(f, "fortnightly"),
            PayFrequency::Monthly => write!(f, "monthly"),
        }
    }
}

impl std::str::FromStr for PayFrequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(PayFrequency::Weekly),
            "fortnightly" => Ok(PayFrequency::Fortnightly),
            "monthly" => Ok(PayFrequency::Monthly),
            _ => Err(format!("Invalid pay frequency: {}", s)),
        }
    }
}

/// One payroll period. The end date is the reference date for rate
/// resolution, YTD year matching and idempotency keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PayPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(AppError::validation(format!(
                "Period start ({}) must be before or equal to period end ({})",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// The fiscal year this period settles into
    pub fn year(&self) -> i32 {
        self.end.year()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
