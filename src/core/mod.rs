pub mod currency;
pub mod error;
pub mod period;

pub use currency::Currency;
pub use error::{AppError, FailureReason, Result};
pub use period::{PayFrequency, PayPeriod};
