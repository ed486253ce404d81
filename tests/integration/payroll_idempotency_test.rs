// Re-running a payroll period must be safe: leave and YTD updates are keyed
// by (employee, period) and a retried batch applies them exactly once.

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use payrun::config::defaults;
use payrun::core::{Currency, PayFrequency, PayPeriod};
use payrun::modules::leave::{InMemoryLeaveRepository, LeaveRepository};
use payrun::modules::payslips::{PayrollRunRequest, PayslipAssembler, PeriodInput};
use payrun::modules::rates::{ContributionRate, InMemoryRateRepository, RateRepository};
use payrun::modules::ytd::{InMemoryYtdRepository, YtdRepository};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct Fixture {
    tenant: Uuid,
    leave: Arc<InMemoryLeaveRepository>,
    ytd: Arc<InMemoryYtdRepository>,
    assembler: PayslipAssembler,
}

async fn fixture() -> Result<Fixture> {
    let tenant = Uuid::new_v4();
    let rates = Arc::new(InMemoryRateRepository::new());
    let leave = Arc::new(InMemoryLeaveRepository::new());
    let ytd = Arc::new(InMemoryYtdRepository::new());

    rates
        .save_tax_table(defaults::reference_tax_table(
            tenant,
            Currency::USD,
            PayFrequency::Monthly,
            date(2025, 1, 1),
        )?)
        .await?;
    rates
        .save_contribution_rate(ContributionRate::new(
            tenant,
            Currency::USD,
            dec!(0.03),
            dec!(0.035),
            Some(dec!(1000)),
            date(2025, 1, 1),
            None,
        )?)
        .await?;

    let assembler = PayslipAssembler::new(
        rates.clone() as Arc<dyn RateRepository>,
        leave.clone() as Arc<dyn LeaveRepository>,
        ytd.clone() as Arc<dyn YtdRepository>,
    );

    Ok(Fixture {
        tenant,
        leave,
        ytd,
        assembler,
    })
}

fn request(tenant: Uuid, employee: Uuid, period: PayPeriod) -> PayrollRunRequest {
    PayrollRunRequest {
        tenant_id: tenant,
        period,
        inputs: vec![PeriodInput::basic(
            employee,
            Currency::USD,
            PayFrequency::Monthly,
            dec!(250),
        )],
    }
}

#[tokio::test]
async fn test_rerunning_a_period_applies_updates_once() -> Result<()> {
    let fx = fixture().await?;
    let employee = Uuid::new_v4();
    let january = PayPeriod::new(date(2025, 1, 1), date(2025, 1, 31))?;

    let first = fx
        .assembler
        .run_payroll(request(fx.tenant, employee, january))
        .await?;
    let rerun = fx
        .assembler
        .run_payroll(request(fx.tenant, employee, january))
        .await?;

    // The rerun still recomputes and emits the payslip
    assert_eq!(rerun.employees_processed, 1);
    assert_eq!(rerun.payslips[0].tax, first.payslips[0].tax);

    // But mutates nothing a second time
    assert_eq!(rerun.payslips[0].ytd.gross, dec!(250));
    assert_eq!(rerun.payslips[0].leave_accrued_this_period, Decimal::ZERO);
    assert_eq!(
        rerun.payslips[0].leave_balance_remaining,
        first.payslips[0].leave_balance_remaining
    );

    let profile = fx.ytd.find_profile(employee).await?.unwrap();
    assert_eq!(profile.ytd_gross, dec!(250));
    assert_eq!(profile.ytd_net, first.payslips[0].net);

    let balance = fx.leave.find_balance(employee, 2025).await?.unwrap();
    assert_eq!(balance.annual_balance, dec!(22) / dec!(12));

    Ok(())
}

#[tokio::test]
async fn test_next_period_accrues_again() -> Result<()> {
    let fx = fixture().await?;
    let employee = Uuid::new_v4();
    let monthly = dec!(22) / dec!(12);

    let january = PayPeriod::new(date(2025, 1, 1), date(2025, 1, 31))?;
    let february = PayPeriod::new(date(2025, 2, 1), date(2025, 2, 28))?;

    fx.assembler
        .run_payroll(request(fx.tenant, employee, january))
        .await?;
    let report = fx
        .assembler
        .run_payroll(request(fx.tenant, employee, february))
        .await?;

    assert_eq!(report.payslips[0].ytd.gross, dec!(500));

    let balance = fx.leave.find_balance(employee, 2025).await?.unwrap();
    assert_eq!(balance.annual_balance, monthly * dec!(2));

    Ok(())
}

#[tokio::test]
async fn test_ytd_resets_across_fiscal_years() -> Result<()> {
    let fx = fixture().await?;
    let employee = Uuid::new_v4();

    let december = PayPeriod::new(date(2025, 12, 1), date(2025, 12, 31))?;
    let january = PayPeriod::new(date(2026, 1, 1), date(2026, 1, 31))?;

    fx.assembler
        .run_payroll(request(fx.tenant, employee, december))
        .await?;
    let report = fx
        .assembler
        .run_payroll(request(fx.tenant, employee, january))
        .await?;

    // The new year's snapshot holds only the new period
    assert_eq!(report.payslips[0].ytd.year, 2026);
    assert_eq!(report.payslips[0].ytd.gross, dec!(250));

    Ok(())
}
