use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::defaults::DEFAULT_LEVY_RATE;
use crate::core::{AppError, Currency, PayFrequency, Result};
use crate::modules::rates::models::{ContributionRate, TaxTable};

/// Repository for rate configuration (tax tables, contribution rates,
/// levy rates). Read-only to the engine at calculation time; writes happen
/// through administration flows.
#[async_trait]
pub trait RateRepository: Send + Sync {
    /// All tax tables stored for a (tenant, currency, frequency) key,
    /// active or not, any effective window
    async fn find_tax_tables(
        &self,
        tenant_id: Uuid,
        currency: Currency,
        frequency: PayFrequency,
    ) -> Result<Vec<TaxTable>>;

    /// All contribution rates stored for a (tenant, currency) key
    async fn find_contribution_rates(
        &self,
        tenant_id: Uuid,
        currency: Currency,
    ) -> Result<Vec<ContributionRate>>;

    /// Validates and stores a tax table
    async fn save_tax_table(&self, table: TaxTable) -> Result<TaxTable>;

    /// Validates and stores a contribution rate
    async fn save_contribution_rate(&self, rate: ContributionRate) -> Result<ContributionRate>;

    /// The tenant's levy rate; the platform default applies when the tenant
    /// has never configured one
    async fn levy_rate(&self, tenant_id: Uuid) -> Result<Decimal>;

    /// Sets the tenant's levy rate (0..=1)
    async fn set_levy_rate(&self, tenant_id: Uuid, rate: Decimal) -> Result<()>;
}

type TaxKey = (Uuid, Currency, PayFrequency);
type ContributionKey = (Uuid, Currency);

/// In-memory rate store for tests and embedding
#[derive(Default)]
pub struct InMemoryRateRepository {
    tax_tables: RwLock<HashMap<TaxKey, Vec<TaxTable>>>,
    contribution_rates: RwLock<HashMap<ContributionKey, Vec<ContributionRate>>>,
    levy_rates: RwLock<HashMap<Uuid, Decimal>>,
}

impl InMemoryRateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateRepository for InMemoryRateRepository {
    async fn find_tax_tables(
        &self,
        tenant_id: Uuid,
        currency: Currency,
        frequency: PayFrequency,
    ) -> Result<Vec<TaxTable>> {
        let tables = self.tax_tables.read().await;
        Ok(tables
            .get(&(tenant_id, currency, frequency))
            .cloned()
            .unwrap_or_default())
    }

    async fn find_contribution_rates(
        &self,
        tenant_id: Uuid,
        currency: Currency,
    ) -> Result<Vec<ContributionRate>> {
        let rates = self.contribution_rates.read().await;
        Ok(rates
            .get(&(tenant_id, currency))
            .cloned()
            .unwrap_or_default())
    }

    async fn save_tax_table(&self, table: TaxTable) -> Result<TaxTable> {
        table.validate()?;
        let mut tables = self.tax_tables.write().await;
        let entry = tables
            .entry((table.tenant_id, table.currency, table.frequency))
            .or_default();
        entry.retain(|t| t.id != table.id);
        entry.push(table.clone());
        Ok(table)
    }

    async fn save_contribution_rate(&self, rate: ContributionRate) -> Result<ContributionRate> {
        rate.validate()?;
        let mut rates = self.contribution_rates.write().await;
        let entry = rates.entry((rate.tenant_id, rate.currency)).or_default();
        entry.retain(|r| r.id != rate.id);
        entry.push(rate.clone());
        Ok(rate)
    }

    async fn levy_rate(&self, tenant_id: Uuid) -> Result<Decimal> {
        let rates = self.levy_rates.read().await;
        Ok(rates.get(&tenant_id).copied().unwrap_or(DEFAULT_LEVY_RATE))
    }

    async fn set_levy_rate(&self, tenant_id: Uuid, rate: Decimal) -> Result<()> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(AppError::configuration(format!(
                "Levy rate {} outside 0..=1",
                rate
            )));
        }
        self.levy_rates.write().await.insert(tenant_id, rate);
        Ok(())
    }
}
