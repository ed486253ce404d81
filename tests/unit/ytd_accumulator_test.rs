// YTD accumulation: pure summation on the model, year-boundary reset and
// idempotency owned by the service.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use payrun::core::{Currency, PayFrequency, PayPeriod};
use payrun::modules::ytd::models::{EmployeePayrollProfile, PeriodFigures};
use payrun::modules::ytd::{InMemoryYtdRepository, YtdAccumulator, YtdRepository};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn figures(gross: Decimal, net: Decimal) -> PeriodFigures {
    PeriodFigures {
        gross,
        taxable: gross,
        tax: dec!(30),
        employee_contribution: dec!(7.5),
        employer_contribution: dec!(8.75),
        net,
    }
}

fn fresh_profile(year: i32) -> EmployeePayrollProfile {
    EmployeePayrollProfile::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        Currency::USD,
        Currency::USD,
        PayFrequency::Monthly,
        year,
    )
}

#[test]
fn test_two_periods_sum() {
    let mut profile = fresh_profile(2025);
    profile.accumulate(&figures(dec!(1000), dec!(800)), 2025);
    profile.accumulate(&figures(dec!(1200), dec!(950)), 2025);

    assert_eq!(profile.ytd_gross, dec!(2200));
    assert_eq!(profile.ytd_net, dec!(1750));
    assert_eq!(profile.ytd_paye, dec!(60));
    assert_eq!(profile.ytd_contribution, dec!(32.5));
    assert_eq!(profile.ytd_year, 2025);
}

#[test]
fn test_pure_accumulation_does_not_reset_across_years() {
    // The pure operation keeps summing across a year boundary; a caller
    // that skips the explicit reset carries last year's totals forward.
    // That stale sum is exactly why the service must reset first.
    let mut profile = fresh_profile(2025);
    profile.accumulate(&figures(dec!(1000), dec!(800)), 2025);
    profile.accumulate(&figures(dec!(1200), dec!(950)), 2026);

    assert_eq!(profile.ytd_year, 2026);
    assert_eq!(profile.ytd_gross, dec!(2200), "stale cross-year sum, reset required");
}

#[test]
fn test_reset_for_year_zeroes_every_total() {
    let mut profile = fresh_profile(2025);
    profile.accumulate(&figures(dec!(1000), dec!(800)), 2025);
    profile.reset_for_year(2026);

    assert_eq!(profile.ytd_gross, Decimal::ZERO);
    assert_eq!(profile.ytd_taxable, Decimal::ZERO);
    assert_eq!(profile.ytd_paye, Decimal::ZERO);
    assert_eq!(profile.ytd_contribution, Decimal::ZERO);
    assert_eq!(profile.ytd_net, Decimal::ZERO);
    assert_eq!(profile.ytd_year, 2026);
    assert_eq!(profile.last_applied_period, None);
}

#[tokio::test]
async fn test_service_resets_on_year_boundary() {
    let repo = Arc::new(InMemoryYtdRepository::new());
    let accumulator = YtdAccumulator::new(repo.clone() as Arc<dyn YtdRepository>);
    let tenant = Uuid::new_v4();
    let employee = Uuid::new_v4();

    let december = PayPeriod::new(date(2025, 12, 1), date(2025, 12, 31)).unwrap();
    accumulator
        .apply(
            tenant,
            employee,
            Currency::USD,
            Currency::USD,
            PayFrequency::Monthly,
            december,
            figures(dec!(1000), dec!(800)),
        )
        .await
        .unwrap();

    let january = PayPeriod::new(date(2026, 1, 1), date(2026, 1, 31)).unwrap();
    let profile = accumulator
        .apply(
            tenant,
            employee,
            Currency::USD,
            Currency::USD,
            PayFrequency::Monthly,
            january,
            figures(dec!(1200), dec!(950)),
        )
        .await
        .unwrap();

    // Only the new year's period remains after the reset
    assert_eq!(profile.ytd_year, 2026);
    assert_eq!(profile.ytd_gross, dec!(1200));
    assert_eq!(profile.ytd_net, dec!(950));
}

#[tokio::test]
async fn test_service_is_idempotent_per_period() {
    let repo = Arc::new(InMemoryYtdRepository::new());
    let accumulator = YtdAccumulator::new(repo.clone() as Arc<dyn YtdRepository>);
    let tenant = Uuid::new_v4();
    let employee = Uuid::new_v4();

    let january = PayPeriod::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap();
    let first = accumulator
        .apply(
            tenant,
            employee,
            Currency::USD,
            Currency::USD,
            PayFrequency::Monthly,
            january,
            figures(dec!(1000), dec!(800)),
        )
        .await
        .unwrap();
    let replay = accumulator
        .apply(
            tenant,
            employee,
            Currency::USD,
            Currency::USD,
            PayFrequency::Monthly,
            january,
            figures(dec!(1000), dec!(800)),
        )
        .await
        .unwrap();

    assert_eq!(replay.ytd_gross, first.ytd_gross);
    assert_eq!(replay.ytd_net, first.ytd_net);
    assert_eq!(replay.last_applied_period, Some(january.end));
}
