pub mod ytd_accumulator;

pub use ytd_accumulator::YtdAccumulator;
