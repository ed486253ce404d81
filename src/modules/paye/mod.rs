// Income tax (PAYE) and levy calculation module

pub mod services;

pub use services::{LevyCalculator, PayeCalculator};
