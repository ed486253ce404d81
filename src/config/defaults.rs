// Platform default rate configuration.
//
// The bracket figures and the 3% levy reproduce the reference tables that
// existing reports were generated against; changing them changes historical
// comparisons. Contribution defaults only seed a tenant's first
// effective-dated ContributionRate record, which is the authoritative source
// from then on.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::{Currency, PayFrequency, Result};
use crate::modules::rates::models::{ContributionRate, TaxBracket, TaxTable};

/// Levy charged on computed tax when a tenant has not configured a rate (3%)
pub const DEFAULT_LEVY_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Employee share seeded into a tenant's first contribution record (3%)
pub const DEFAULT_EMPLOYEE_CONTRIBUTION_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Employer share seeded into a tenant's first contribution record (3.5%)
pub const DEFAULT_EMPLOYER_CONTRIBUTION_RATE: Decimal = Decimal::from_parts(35, 0, 0, false, 3);

/// Insurable-earnings ceiling per period seeded with the default record
pub const DEFAULT_CONTRIBUTION_CAP: Decimal = Decimal::from_parts(500_000, 0, 0, false, 2);

pub const DEFAULT_ANNUAL_LEAVE_DAYS: Decimal = Decimal::from_parts(22, 0, 0, false, 0);
pub const DEFAULT_SICK_LEAVE_DAYS: u32 = 90;
pub const DEFAULT_MATERNITY_LEAVE_DAYS: u32 = 98;
pub const DEFAULT_PATERNITY_LEAVE_DAYS: u32 = 10;
pub const DEFAULT_CARRY_OVER_DAYS: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// The six-bracket lookup-and-deduct reference table (stated per monthly
/// period): 0–100 at 0%, then 20%/25%/30%/35% bands, 40% above 3000, each
/// with the deduction that keeps tax continuous at the boundary.
pub fn reference_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket {
            min: Decimal::ZERO,
            max: Some(Decimal::new(100, 0)),
            rate: Decimal::ZERO,
            deduct: Decimal::ZERO,
        },
        TaxBracket {
            min: Decimal::new(10_001, 2),
            max: Some(Decimal::new(300, 0)),
            rate: Decimal::new(20, 2),
            deduct: Decimal::new(20, 0),
        },
        TaxBracket {
            min: Decimal::new(30_001, 2),
            max: Some(Decimal::new(1_000, 0)),
            rate: Decimal::new(25, 2),
            deduct: Decimal::new(35, 0),
        },
        TaxBracket {
            min: Decimal::new(100_001, 2),
            max: Some(Decimal::new(2_000, 0)),
            rate: Decimal::new(30, 2),
            deduct: Decimal::new(85, 0),
        },
        TaxBracket {
            min: Decimal::new(200_001, 2),
            max: Some(Decimal::new(3_000, 0)),
            rate: Decimal::new(35, 2),
            deduct: Decimal::new(185, 0),
        },
        TaxBracket {
            min: Decimal::new(300_001, 2),
            max: None,
            rate: Decimal::new(40, 2),
            deduct: Decimal::new(335, 0),
        },
    ]
}

/// A validated tax table carrying the reference brackets for the given key
pub fn reference_tax_table(
    tenant_id: Uuid,
    currency: Currency,
    frequency: PayFrequency,
    effective_from: NaiveDate,
) -> Result<TaxTable> {
    TaxTable::new(
        tenant_id,
        format!("{} {} PAYE (reference)", currency, frequency),
        currency,
        frequency,
        reference_brackets(),
        effective_from,
        None,
    )
}

/// The effective-dated contribution record seeded for a tenant that has
/// never configured one
pub fn seed_contribution_rate(
    tenant_id: Uuid,
    currency: Currency,
    effective_from: NaiveDate,
) -> Result<ContributionRate> {
    ContributionRate::new(
        tenant_id,
        currency,
        DEFAULT_EMPLOYEE_CONTRIBUTION_RATE,
        DEFAULT_EMPLOYER_CONTRIBUTION_RATE,
        Some(DEFAULT_CONTRIBUTION_CAP),
        effective_from,
        None,
    )
}
