use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::core::{Currency, PayFrequency, PayPeriod, Result};
use crate::modules::ytd::models::{EmployeePayrollProfile, PeriodFigures};
use crate::modules::ytd::repositories::YtdRepository;

/// Rolls a processed period into the employee's year-to-date totals.
///
/// The accumulation itself is pure and lives on the model; this service is
/// the caller that owns the year boundary (explicit reset when the stored
/// year differs from the period's) and the per-(employee, period)
/// idempotency guard.
pub struct YtdAccumulator {
    ytd_repo: Arc<dyn YtdRepository>,
}

impl YtdAccumulator {
    pub fn new(ytd_repo: Arc<dyn YtdRepository>) -> Self {
        Self { ytd_repo }
    }

    pub async fn apply(
        &self,
        tenant_id: Uuid,
        employee_id: Uuid,
        currency: Currency,
        contract_currency: Currency,
        pay_frequency: PayFrequency,
        period: PayPeriod,
        figures: PeriodFigures,
    ) -> Result<EmployeePayrollProfile> {
        let year = period.year();
        let mut profile = self
            .ytd_repo
            .get_or_create_profile(
                employee_id,
                tenant_id,
                currency,
                contract_currency,
                pay_frequency,
                year,
            )
            .await?;

        if profile.applied_for(period.end) {
            return Ok(profile);
        }

        if profile.ytd_year != year {
            info!(
                "Resetting YTD for employee {}: year {} -> {}",
                employee_id, profile.ytd_year, year
            );
            profile.reset_for_year(year);
        }

        profile.accumulate(&figures, year);
        profile.last_applied_period = Some(period.end);

        self.ytd_repo.save_profile(profile).await
    }
}
