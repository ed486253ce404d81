use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::{Currency, PayFrequency, Result};
use crate::modules::ytd::models::EmployeePayrollProfile;

/// Repository for per-employee payroll profiles (YTD state)
#[async_trait]
pub trait YtdRepository: Send + Sync {
    async fn find_profile(&self, employee_id: Uuid) -> Result<Option<EmployeePayrollProfile>>;

    /// The employee's profile, created zeroed on first need
    async fn get_or_create_profile(
        &self,
        employee_id: Uuid,
        tenant_id: Uuid,
        currency: Currency,
        contract_currency: Currency,
        pay_frequency: PayFrequency,
        year: i32,
    ) -> Result<EmployeePayrollProfile>;

    async fn save_profile(
        &self,
        profile: EmployeePayrollProfile,
    ) -> Result<EmployeePayrollProfile>;
}

/// In-memory YTD store for tests and embedding
#[derive(Default)]
pub struct InMemoryYtdRepository {
    profiles: RwLock<HashMap<Uuid, EmployeePayrollProfile>>,
}

impl InMemoryYtdRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl YtdRepository for InMemoryYtdRepository {
    async fn find_profile(&self, employee_id: Uuid) -> Result<Option<EmployeePayrollProfile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&employee_id).cloned())
    }

    async fn get_or_create_profile(
        &self,
        employee_id: Uuid,
        tenant_id: Uuid,
        currency: Currency,
        contract_currency: Currency,
        pay_frequency: PayFrequency,
        year: i32,
    ) -> Result<EmployeePayrollProfile> {
        let mut profiles = self.profiles.write().await;
        Ok(profiles
            .entry(employee_id)
            .or_insert_with(|| {
                EmployeePayrollProfile::new(
                    employee_id,
                    tenant_id,
                    currency,
                    contract_currency,
                    pay_frequency,
                    year,
                )
            })
            .clone())
    }

    async fn save_profile(
        &self,
        profile: EmployeePayrollProfile,
    ) -> Result<EmployeePayrollProfile> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.employee_id, profile.clone());
        Ok(profile)
    }
}
