//! CPU state, status flags, the micro-op library, and the execution driver.

pub mod cpu;
pub mod debug;
pub mod flags;
pub mod micro;
pub mod run;

pub use cpu::{Cpu, ExecStatus, Interrupt, Registers, Variant};
pub use debug::{ChangedRegisters, Inspector};
pub use flags::Flags;
pub use run::{RunConfig, RunOutcome, RunPredicate, RunSummary};
