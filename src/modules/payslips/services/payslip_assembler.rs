use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::{PayPeriod, Result};
use crate::modules::contributions::ContributionCalculator;
use crate::modules::leave::repositories::LeaveRepository;
use crate::modules::leave::LeaveAccrualEngine;
use crate::modules::paye::{LevyCalculator, PayeCalculator};
use crate::modules::payslips::models::{
    PayrollRunReport, PayrollRunRequest, PayslipFailure, PayslipResult, PeriodInput,
};
use crate::modules::rates::repositories::RateRepository;
use crate::modules::rates::RateTableResolver;
use crate::modules::ytd::models::PeriodFigures;
use crate::modules::ytd::repositories::YtdRepository;
use crate::modules::ytd::YtdAccumulator;

/// Employees processed concurrently within one batch. Each employee's
/// pipeline owns all writes for that employee, so distinct employees are
/// safe to run side by side.
const EMPLOYEE_CONCURRENCY: usize = 8;

/// Orchestrates one payslip per employee per period: rate resolution, tax,
/// levy, contributions, leave accrual and YTD roll-forward. The batch loop
/// is best-effort; one employee's failure never aborts the run.
pub struct PayslipAssembler {
    resolver: RateTableResolver,
    paye: PayeCalculator,
    contributions: ContributionCalculator,
    leave: LeaveAccrualEngine,
    ytd: YtdAccumulator,
}

impl PayslipAssembler {
    pub fn new(
        rate_repo: Arc<dyn RateRepository>,
        leave_repo: Arc<dyn LeaveRepository>,
        ytd_repo: Arc<dyn YtdRepository>,
    ) -> Self {
        Self {
            resolver: RateTableResolver::new(rate_repo),
            paye: PayeCalculator::new(),
            contributions: ContributionCalculator::new(),
            leave: LeaveAccrualEngine::new(leave_repo),
            ytd: YtdAccumulator::new(ytd_repo),
        }
    }

    /// Process a batch of employees for one period.
    ///
    /// Run-level validation failures refuse the whole run. After that, every
    /// employee either yields a payslip or lands in the failure list with a
    /// reason; nothing is silently dropped. Re-running the same request is
    /// safe: leave and YTD updates are keyed by (employee, period).
    pub async fn run_payroll(&self, request: PayrollRunRequest) -> Result<PayrollRunReport> {
        request.validate()?;

        let tenant_id = request.tenant_id;
        let period = request.period;

        info!(
            "Starting payroll run for tenant {} over {} ({} employees)",
            tenant_id,
            period,
            request.inputs.len()
        );

        let levy_rate = self.resolver.levy_rate(tenant_id).await?;
        let levy_calc = LevyCalculator::new(levy_rate)?;

        // Bounded, order-preserving fan-out across distinct employees
        let outcomes: Vec<(Uuid, Result<PayslipResult>)> = stream::iter(
            request.inputs.iter().map(|input| {
                let levy_calc = &levy_calc;
                async move {
                    let outcome = self
                        .process_employee(tenant_id, period, input, levy_calc)
                        .await;
                    (input.employee_id, outcome)
                }
            }),
        )
        .buffered(EMPLOYEE_CONCURRENCY)
        .collect()
        .await;

        let mut payslips = Vec::new();
        let mut failures = Vec::new();
        let mut total_gross = Decimal::ZERO;
        let mut total_net = Decimal::ZERO;

        for (employee_id, outcome) in outcomes {
            match outcome {
                Ok(payslip) => {
                    total_gross += payslip.gross;
                    total_net += payslip.net;
                    payslips.push(payslip);
                }
                Err(err) => {
                    warn!(
                        "Skipping employee {} in payroll run for tenant {}: {}",
                        employee_id, tenant_id, err
                    );
                    failures.push(PayslipFailure {
                        employee_id,
                        reason: (&err).into(),
                    });
                }
            }
        }

        info!(
            "Payroll run for tenant {} over {}: {} processed, {} failed",
            tenant_id,
            period,
            payslips.len(),
            failures.len()
        );

        Ok(PayrollRunReport {
            period_start: period.start,
            period_end: period.end,
            employees_processed: payslips.len(),
            total_gross,
            total_net,
            payslips,
            failures,
        })
    }

    /// Full pipeline for one employee. Every monetary input is converted to
    /// the payment currency before any arithmetic.
    async fn process_employee(
        &self,
        tenant_id: Uuid,
        period: PayPeriod,
        input: &PeriodInput,
        levy_calc: &LevyCalculator,
    ) -> Result<PayslipResult> {
        input.validate()?;

        let fx = input.exchange_rate;
        let basic = input.basic_salary * fx;
        let allowances = input.total_allowances() * fx;
        let bonuses = input.bonuses * fx;
        let overtime = input.overtime * fx;
        let gross = basic + allowances + bonuses + overtime;

        let pre_tax_deductions = (input.pension + input.medical_aid) * fx;
        // May be negative or zero; tax clamps, net does not
        let taxable_income = gross - pre_tax_deductions;

        let tax_table = self
            .resolver
            .active_tax_table(tenant_id, input.currency, input.frequency, period.end)
            .await?;
        let contribution_rate = self
            .resolver
            .active_contribution_rate(tenant_id, input.currency, period.end)
            .await?;

        let tax = self.paye.calculate(taxable_income, &tax_table)?;
        let levy = levy_calc.calculate(tax);
        // Contributions come off gross pay, not taxable income
        let contributions = self.contributions.calculate(gross, &contribution_rate)?;

        let post_tax_deductions =
            (input.loan_repayment + input.salary_advance + input.other_deductions) * fx;
        let total_deductions = tax + levy + contributions.employee + post_tax_deductions;
        let net = gross - pre_tax_deductions - total_deductions;

        let leave = self
            .leave
            .accrue_for_period(tenant_id, input.employee_id, period)
            .await?;

        let profile = self
            .ytd
            .apply(
                tenant_id,
                input.employee_id,
                input.currency,
                input.contract_currency,
                input.frequency,
                period,
                PeriodFigures {
                    gross,
                    taxable: taxable_income,
                    tax,
                    employee_contribution: contributions.employee,
                    employer_contribution: contributions.employer,
                    net,
                },
            )
            .await?;

        Ok(PayslipResult {
            employee_id: input.employee_id,
            period,
            currency: input.currency,
            basic,
            allowances,
            bonuses,
            overtime,
            gross,
            pre_tax_deductions,
            taxable_income,
            tax,
            levy,
            employee_contribution: contributions.employee,
            employer_contribution: contributions.employer,
            contribution_capped: contributions.capped,
            post_tax_deductions,
            total_deductions,
            net,
            ytd: profile.snapshot(),
            leave_accrued_this_period: leave.accrued.round_dp(1),
            leave_balance_remaining: leave.balance.annual_balance.round_dp(1),
        })
    }
}
