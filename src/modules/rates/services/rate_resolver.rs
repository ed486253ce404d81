use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::{AppError, Currency, PayFrequency, Result};
use crate::modules::rates::models::{ContributionRate, TaxTable};
use crate::modules::rates::repositories::RateRepository;

/// Resolves the single active, effective rate configuration for a key and
/// reference date. Zero or multiple candidates is a configuration error,
/// fatal for the affected employee and never retried.
pub struct RateTableResolver {
    rate_repo: Arc<dyn RateRepository>,
}

impl RateTableResolver {
    pub fn new(rate_repo: Arc<dyn RateRepository>) -> Self {
        Self { rate_repo }
    }

    /// The unique active tax table whose effective window contains `as_of`
    pub async fn active_tax_table(
        &self,
        tenant_id: Uuid,
        currency: Currency,
        frequency: PayFrequency,
        as_of: NaiveDate,
    ) -> Result<TaxTable> {
        let mut candidates: Vec<TaxTable> = self
            .rate_repo
            .find_tax_tables(tenant_id, currency, frequency)
            .await?
            .into_iter()
            .filter(|t| t.active && t.effective_on(as_of))
            .collect();

        match candidates.len() {
            1 => Ok(candidates.remove(0)),
            0 => Err(AppError::no_active_rate_table(format!(
                "no active {} {} tax table for tenant {} as of {}",
                currency, frequency, tenant_id, as_of
            ))),
            n => Err(AppError::no_active_rate_table(format!(
                "{} active {} {} tax tables for tenant {} as of {}, expected exactly one",
                n, currency, frequency, tenant_id, as_of
            ))),
        }
    }

    /// The unique active contribution rate whose effective window contains
    /// `as_of`
    pub async fn active_contribution_rate(
        &self,
        tenant_id: Uuid,
        currency: Currency,
        as_of: NaiveDate,
    ) -> Result<ContributionRate> {
        let mut candidates: Vec<ContributionRate> = self
            .rate_repo
            .find_contribution_rates(tenant_id, currency)
            .await?
            .into_iter()
            .filter(|r| r.active && r.effective_on(as_of))
            .collect();

        match candidates.len() {
            1 => Ok(candidates.remove(0)),
            0 => Err(AppError::no_active_rate_table(format!(
                "no active {} contribution rate for tenant {} as of {}",
                currency, tenant_id, as_of
            ))),
            n => Err(AppError::no_active_rate_table(format!(
                "{} active {} contribution rates for tenant {} as of {}, expected exactly one",
                n, currency, tenant_id, as_of
            ))),
        }
    }

    /// The tenant's levy rate (platform default when unconfigured)
    pub async fn levy_rate(&self, tenant_id: Uuid) -> Result<rust_decimal::Decimal> {
        self.rate_repo.levy_rate(tenant_id).await
    }
}
