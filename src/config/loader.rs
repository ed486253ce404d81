// YAML rate-configuration loading.
//
// Administrators hand the platform a file of tax tables, contribution rates
// and levy rates; every record is validated before anything is stored, so a
// malformed table never reaches a payroll run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::core::{AppError, Currency, PayFrequency, Result};
use crate::modules::rates::models::{ContributionRate, TaxBracket, TaxTable};
use crate::modules::rates::repositories::RateRepository;

/// Parsed rate-configuration file
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfigFile {
    #[serde(default)]
    pub tax_tables: Vec<TaxTableEntry>,
    #[serde(default)]
    pub contribution_rates: Vec<ContributionRateEntry>,
    #[serde(default)]
    pub levy_rates: Vec<LevyRateEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaxTableEntry {
    pub tenant_id: Uuid,
    pub name: String,
    pub currency: Currency,
    pub frequency: PayFrequency,
    pub brackets: Vec<TaxBracket>,
    pub effective_from: NaiveDate,
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContributionRateEntry {
    pub tenant_id: Uuid,
    pub currency: Currency,
    pub employee_rate: Decimal,
    pub employer_rate: Decimal,
    #[serde(default)]
    pub cap: Option<Decimal>,
    pub effective_from: NaiveDate,
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LevyRateEntry {
    pub tenant_id: Uuid,
    pub rate: Decimal,
}

impl RateConfigFile {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::configuration(format!(
                "Cannot read rate configuration {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&contents)
    }

    /// Validate every record and store it. Fails on the first invalid
    /// record, leaving already-seeded records in place; callers seeding into
    /// a fresh repository get all-or-nothing behavior.
    pub async fn seed(&self, repo: &dyn RateRepository) -> Result<usize> {
        let mut stored = 0;

        for entry in &self.tax_tables {
            let table = TaxTable::new(
                entry.tenant_id,
                entry.name.clone(),
                entry.currency,
                entry.frequency,
                entry.brackets.clone(),
                entry.effective_from,
                entry.effective_to,
            )?;
            repo.save_tax_table(table).await?;
            stored += 1;
        }

        for entry in &self.contribution_rates {
            let rate = ContributionRate::new(
                entry.tenant_id,
                entry.currency,
                entry.employee_rate,
                entry.employer_rate,
                entry.cap,
                entry.effective_from,
                entry.effective_to,
            )?;
            repo.save_contribution_rate(rate).await?;
            stored += 1;
        }

        for entry in &self.levy_rates {
            repo.set_levy_rate(entry.tenant_id, entry.rate).await?;
            stored += 1;
        }

        info!("Seeded {} rate configuration records", stored);
        Ok(stored)
    }
}
