pub mod defaults;
pub mod loader;

pub use loader::RateConfigFile;
