//! Pipeline schedules and per-variant dispatch tables.
//!
//! Every opcode maps to a [`Schedule`]: the ordered sequence of micro-ops
//! that together execute the instruction, one bus cycle per entry. The
//! schedule length at dispatch time is the documented base cycle count;
//! page-cross, branch-taken, and decimal penalties are inserted at runtime
//! by the micro-ops themselves. Implement [`InstructionSet`] to define CPU
//! variants or patch existing tables.

use crate::processor::cpu::{Cpu, Variant};
use alloc::boxed::Box;
use mox::{Bus, Byte};

pub mod mos6502;
pub mod mos6502_documented;
pub mod rockwell65c02;
pub mod wdc65c02;

/// One cycle of instruction execution.
///
/// A micro-op mutates the live CPU state, performs exactly one bus
/// operation, and may extend the current pipeline or flag completion.
pub type MicroOp<B> = fn(&mut Cpu<B>, &mut B);

/// Longest base schedule (undocumented NMOS RMW via `(zp,X)` is 8 cycles).
pub const BASE_SLOTS: usize = 8;

/// An ordered sequence of micro-ops implementing one opcode.
pub struct Schedule<B: Bus> {
    ops: [MicroOp<B>; BASE_SLOTS],
    len: u8,
}

impl<B: Bus> Clone for Schedule<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Bus> Copy for Schedule<B> {}

impl<B: Bus> Schedule<B> {
    /// Builds a schedule from its cycle sequence.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the sequence is non-empty and fits the base
    /// pipeline capacity.
    #[must_use]
    pub fn new(ops: &[MicroOp<B>]) -> Self {
        debug_assert!(!ops.is_empty() && ops.len() <= BASE_SLOTS);
        let mut buf: [MicroOp<B>; BASE_SLOTS] = [crate::processor::micro::unscheduled::<B>; BASE_SLOTS];
        buf[..ops.len()].copy_from_slice(ops);
        Self {
            ops: buf,
            len: ops.len() as u8,
        }
    }

    /// Base cycle count: the schedule length at dispatch time.
    #[must_use]
    pub fn cycles(&self) -> u8 {
        self.len
    }

    pub(crate) fn op(&self, index: u8) -> MicroOp<B> {
        self.ops[index as usize]
    }

    pub(crate) fn ops(&self) -> &[MicroOp<B>] {
        &self.ops[..self.len as usize]
    }
}

/// Builds a [`Schedule`] from a comma-separated micro-op list.
macro_rules! sched {
    ($($op:expr),+ $(,)?) => {
        $crate::instruction::Schedule::new(&[$($op),+])
    };
}
pub(crate) use sched;

/// 256-entry dispatch table mapping opcode bytes to schedules.
pub struct ScheduleTable<B: Bus>(Box<[Schedule<B>; 256]>);

impl<B: Bus> ScheduleTable<B> {
    #[must_use]
    pub fn new(schedules: [Schedule<B>; 256]) -> Self {
        Self(Box::new(schedules))
    }

    /// Replaces one opcode's schedule, consuming and returning the table so
    /// variant tables can be derived from a base by chaining overrides.
    #[must_use]
    pub fn with(mut self, opcode: u8, schedule: Schedule<B>) -> Self {
        self.0[opcode as usize] = schedule;
        self
    }

    #[must_use]
    pub fn schedule(&self, opcode: Byte) -> &Schedule<B> {
        &self.0[opcode.as_usize()]
    }
}

/// Trait for defining CPU instruction sets.
///
/// Implement this to create variant or custom instruction sets. The trait
/// generates the complete 256-entry schedule table and carries the
/// variant-level behaviors the execution driver needs outside any single
/// schedule.
///
/// # Examples
///
/// ```
/// use mox::Bus;
/// use mox65::instruction::{InstructionSet, ScheduleTable, mos6502::Nmos6502};
/// use mox65::Variant;
///
/// struct Patched6502;
///
/// impl InstructionSet for Patched6502 {
///     const VARIANT: Variant = Variant::Nmos6502;
///     const CLEARS_DECIMAL_ON_INTERRUPT: bool = false;
///
///     fn schedules<B: Bus>() -> ScheduleTable<B> {
///         // Start from the NMOS table and customize
///         Nmos6502::base_table::<B>()
///         // .with(opcode, custom_schedule)...
///     }
/// }
/// ```
pub trait InstructionSet {
    /// The variant this table implements.
    const VARIANT: Variant;
    /// Whether interrupt entry (IRQ/NMI/BRK) clears the D flag.
    const CLEARS_DECIMAL_ON_INTERRUPT: bool;

    /// Generate the 256-entry schedule table for this CPU variant.
    fn schedules<B: Bus>() -> ScheduleTable<B>;
}
