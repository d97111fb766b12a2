//! A `no_std` cycle-stepped emulator core for the MOS 6502, WDC 65C02, and
//! Rockwell 65C02 microprocessors.
//!
//! `mox65` reproduces the bus behavior of the silicon one cycle at a time:
//! every [`Cpu::clock`] call executes exactly one micro-op, and every
//! micro-op drives exactly one read or write on the host-provided [`Bus`].
//! Dummy reads, page-cross and branch penalties, decimal-mode extra cycles,
//! the NMOS undocumented opcodes, and the per-variant quirks all happen at
//! the cycle they happen on hardware.
//!
//! # Architecture
//!
//! The core is built around three abstractions:
//!
//! - **[`Bus`]**: memory and I/O collaborator. `read`/`write` record one
//!   cycle each; `peek` is the side-effect-free pre-decode the driver uses
//!   to select a schedule.
//! - **[`instruction::Schedule`]**: an opcode's ordered sequence of
//!   micro-ops, one per cycle. [`instruction::InstructionSet`] defines the
//!   256-entry table for a CPU variant; four variants ship in
//!   [`instruction`] and custom sets can be derived from them.
//! - **[`Cpu`]**: the register file, the pipeline (with its fixed-capacity
//!   working buffer for penalty insertion), the interrupt protocol, and
//!   the `clock`/`step`/`run` driver.
//!
//! # Quick Start
//!
//! ```
//! use mox::{Bus, Byte, SimpleBus, Word};
//! use mox65::{Cpu, instruction::mos6502::Nmos6502};
//!
//! let mut bus = SimpleBus::default();
//! let program = [0xA9, 0x42, 0x8D, 0x00, 0x02]; // LDA #$42; STA $0200
//! let mut cpu: Cpu<SimpleBus> =
//!     Cpu::with_program::<Nmos6502>(&mut bus, Word(0x0400), &program, Word(0x0400));
//!
//! assert_eq!(cpu.step(&mut bus), 2);
//! assert_eq!(cpu.step(&mut bus), 4);
//! assert_eq!(bus.peek(Word(0x0200)), Byte(0x42));
//! ```
//!
//! # Variants
//!
//! [`Variant`] selects the decode table at construction:
//! `Nmos6502` (undocumented opcodes live), `Nmos6502Documented` (they
//! decode to NOP stubs), `Wdc65c02`, and `Rockwell65c02`. Variants differ
//! exactly where the chips do: penalty-cycle addresses, RMW dummy-cycle
//! direction, decimal-mode flags and timing, the JMP indirect bug, halt
//! opcodes, and the added CMOS/Rockwell instructions.

#![no_std]
// 6502 math wraps and uses a sign bit
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
// Schedule tables
#![allow(clippy::too_many_lines)]

extern crate alloc;

pub mod instruction;
pub mod processor;

/// Re-export core primitives/bus for convenience so downstream users can
/// depend on `mox65` only, while internal modules still import them
/// explicitly from `mox`.
pub use mox::bus::{self as bus, AccessType, Bus, BusActivity, SimpleBus, TraceBus};
pub use mox::byte::{self as byte, Byte};
pub use mox::nibble::{self as nibble, Nibble};
pub use mox::word::{self as word, Word};

pub use instruction::{InstructionSet, MicroOp, Schedule, ScheduleTable};
pub use processor::{
    ChangedRegisters, Cpu, ExecStatus, Flags, Inspector, Interrupt, Registers, RunConfig,
    RunOutcome, RunPredicate, RunSummary, Variant,
    cpu::{
        IRQ_VECTOR_HI, IRQ_VECTOR_LO, NMI_VECTOR_HI, NMI_VECTOR_LO, RESET_VECTOR_HI,
        RESET_VECTOR_LO, STACK_SPACE_START,
    },
};
