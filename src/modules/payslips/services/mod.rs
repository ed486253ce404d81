pub mod payslip_assembler;

pub use payslip_assembler::PayslipAssembler;
