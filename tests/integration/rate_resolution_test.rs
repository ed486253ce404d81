// Effective-dated rate resolution: exactly one active table per key and
// instant, zero or multiple candidates is a configuration error.

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use uuid::Uuid;

use payrun::config::defaults;
use payrun::core::{AppError, Currency, PayFrequency};
use payrun::modules::rates::{InMemoryRateRepository, RateRepository, RateTableResolver};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn setup() -> (Arc<InMemoryRateRepository>, RateTableResolver) {
    let repo = Arc::new(InMemoryRateRepository::new());
    let resolver = RateTableResolver::new(repo.clone() as Arc<dyn RateRepository>);
    (repo, resolver)
}

#[tokio::test]
async fn test_no_table_configured_is_an_error() {
    let (_repo, resolver) = setup();

    let err = resolver
        .active_tax_table(
            Uuid::new_v4(),
            Currency::USD,
            PayFrequency::Monthly,
            date(2025, 6, 30),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NoActiveRateTable(_)));
}

#[tokio::test]
async fn test_overlapping_active_tables_are_an_error() -> Result<()> {
    let (repo, resolver) = setup();
    let tenant = Uuid::new_v4();

    for _ in 0..2 {
        repo.save_tax_table(defaults::reference_tax_table(
            tenant,
            Currency::USD,
            PayFrequency::Monthly,
            date(2025, 1, 1),
        )?)
        .await?;
    }

    let err = resolver
        .active_tax_table(tenant, Currency::USD, PayFrequency::Monthly, date(2025, 6, 30))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NoActiveRateTable(_)));
    Ok(())
}

#[tokio::test]
async fn test_inactive_tables_are_ignored() -> Result<()> {
    let (repo, resolver) = setup();
    let tenant = Uuid::new_v4();

    let mut retired = defaults::reference_tax_table(
        tenant,
        Currency::USD,
        PayFrequency::Monthly,
        date(2025, 1, 1),
    )?;
    retired.active = false;
    repo.save_tax_table(retired).await?;

    let current = defaults::reference_tax_table(
        tenant,
        Currency::USD,
        PayFrequency::Monthly,
        date(2025, 1, 1),
    )?;
    let current_id = current.id;
    repo.save_tax_table(current).await?;

    let resolved = resolver
        .active_tax_table(tenant, Currency::USD, PayFrequency::Monthly, date(2025, 6, 30))
        .await?;

    assert_eq!(resolved.id, current_id);
    Ok(())
}

#[tokio::test]
async fn test_effective_window_selects_the_right_table() -> Result<()> {
    let (repo, resolver) = setup();
    let tenant = Uuid::new_v4();

    let mut old = defaults::reference_tax_table(
        tenant,
        Currency::USD,
        PayFrequency::Monthly,
        date(2024, 1, 1),
    )?;
    old.effective_to = Some(date(2024, 12, 31));
    let old_id = old.id;
    repo.save_tax_table(old).await?;

    let current = defaults::reference_tax_table(
        tenant,
        Currency::USD,
        PayFrequency::Monthly,
        date(2025, 1, 1),
    )?;
    let current_id = current.id;
    repo.save_tax_table(current).await?;

    let resolved = resolver
        .active_tax_table(tenant, Currency::USD, PayFrequency::Monthly, date(2025, 3, 31))
        .await?;
    assert_eq!(resolved.id, current_id);

    // Both window edges are inclusive
    let resolved = resolver
        .active_tax_table(tenant, Currency::USD, PayFrequency::Monthly, date(2024, 12, 31))
        .await?;
    assert_eq!(resolved.id, old_id);

    // Nothing covers dates before the first window
    let err = resolver
        .active_tax_table(tenant, Currency::USD, PayFrequency::Monthly, date(2023, 12, 31))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NoActiveRateTable(_)));

    Ok(())
}

#[tokio::test]
async fn test_keys_are_isolated_per_currency_and_frequency() -> Result<()> {
    let (repo, resolver) = setup();
    let tenant = Uuid::new_v4();

    repo.save_tax_table(defaults::reference_tax_table(
        tenant,
        Currency::USD,
        PayFrequency::Monthly,
        date(2025, 1, 1),
    )?)
    .await?;

    // Same tenant, different frequency: no table
    let err = resolver
        .active_tax_table(tenant, Currency::USD, PayFrequency::Weekly, date(2025, 6, 30))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NoActiveRateTable(_)));

    // Different tenant entirely
    let err = resolver
        .active_tax_table(
            Uuid::new_v4(),
            Currency::USD,
            PayFrequency::Monthly,
            date(2025, 6, 30),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NoActiveRateTable(_)));

    Ok(())
}

#[tokio::test]
async fn test_contribution_rate_resolution() -> Result<()> {
    let (repo, resolver) = setup();
    let tenant = Uuid::new_v4();

    let err = resolver
        .active_contribution_rate(tenant, Currency::USD, date(2025, 6, 30))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NoActiveRateTable(_)));

    let seeded = defaults::seed_contribution_rate(tenant, Currency::USD, date(2025, 1, 1))?;
    let seeded_id = seeded.id;
    repo.save_contribution_rate(seeded).await?;

    let resolved = resolver
        .active_contribution_rate(tenant, Currency::USD, date(2025, 6, 30))
        .await?;
    assert_eq!(resolved.id, seeded_id);
    assert_eq!(resolved.employee_rate, dec!(0.03));
    assert_eq!(resolved.employer_rate, dec!(0.035));
    assert_eq!(resolved.cap, Some(dec!(5000)));

    Ok(())
}

#[tokio::test]
async fn test_levy_rate_defaults_and_overrides() -> Result<()> {
    let (repo, resolver) = setup();
    let tenant = Uuid::new_v4();

    assert_eq!(resolver.levy_rate(tenant).await?, dec!(0.03));

    repo.set_levy_rate(tenant, dec!(0.05)).await?;
    assert_eq!(resolver.levy_rate(tenant).await?, dec!(0.05));

    assert!(repo.set_levy_rate(tenant, dec!(1.5)).await.is_err());
    assert!(repo.set_levy_rate(tenant, dec!(-0.01)).await.is_err());

    Ok(())
}
