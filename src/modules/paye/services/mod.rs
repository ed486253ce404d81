pub mod levy_calculator;
pub mod paye_calculator;

pub use levy_calculator::LevyCalculator;
pub use paye_calculator::PayeCalculator;
