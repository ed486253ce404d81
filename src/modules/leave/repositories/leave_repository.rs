use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::leave::models::{LeaveBalance, LeavePolicy};

/// Repository for leave policies and per-(employee, year) balances
#[async_trait]
pub trait LeaveRepository: Send + Sync {
    /// The tenant's policy, created with platform defaults on first need
    async fn get_or_create_policy(&self, tenant_id: Uuid) -> Result<LeavePolicy>;

    /// Validates and stores a policy update
    async fn save_policy(&self, policy: LeavePolicy) -> Result<LeavePolicy>;

    async fn find_balance(&self, employee_id: Uuid, year: i32) -> Result<Option<LeaveBalance>>;

    async fn save_balance(&self, balance: LeaveBalance) -> Result<LeaveBalance>;
}

/// In-memory leave store for tests and embedding
#[derive(Default)]
pub struct InMemoryLeaveRepository {
    policies: RwLock<HashMap<Uuid, LeavePolicy>>,
    balances: RwLock<HashMap<(Uuid, i32), LeaveBalance>>,
}

impl InMemoryLeaveRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeaveRepository for InMemoryLeaveRepository {
    async fn get_or_create_policy(&self, tenant_id: Uuid) -> Result<LeavePolicy> {
        let mut policies = self.policies.write().await;
        Ok(policies
            .entry(tenant_id)
            .or_insert_with(|| LeavePolicy::with_defaults(tenant_id))
            .clone())
    }

    async fn save_policy(&self, policy: LeavePolicy) -> Result<LeavePolicy> {
        policy.validate()?;
        let mut policies = self.policies.write().await;
        policies.insert(policy.tenant_id, policy.clone());
        Ok(policy)
    }

    async fn find_balance(&self, employee_id: Uuid, year: i32) -> Result<Option<LeaveBalance>> {
        let balances = self.balances.read().await;
        Ok(balances.get(&(employee_id, year)).cloned())
    }

    async fn save_balance(&self, balance: LeaveBalance) -> Result<LeaveBalance> {
        let mut balances = self.balances.write().await;
        balances.insert((balance.employee_id, balance.year), balance.clone());
        Ok(balance)
    }
}
