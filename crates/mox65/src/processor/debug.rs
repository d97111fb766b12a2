//! Debug-snapshot adapter.
//!
//! [`Inspector`] owns a register snapshot captured at an instruction
//! boundary and derives change-set observations by comparing it against the
//! live CPU. It never mutates engine state and costs the hot path nothing.

use crate::processor::cpu::{Cpu, Registers};
use crate::processor::flags::Flags;
use bitflags::bitflags;
use mox::Bus;

/// Branch opcodes shared by every variant (BRA included; the 65C02 claims
/// `$80`, which is a two-byte NOP on NMOS and never moves PC oddly there).
const BRANCH_OPCODES: [u8; 9] = [0x10, 0x30, 0x50, 0x70, 0x80, 0x90, 0xB0, 0xD0, 0xF0];

bitflags! {
    /// Which guest-visible registers differ between snapshot and live state.
    #[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
    pub struct ChangedRegisters: u8 {
        const A = 0b0000_0001;
        const X = 0b0000_0010;
        const Y = 0b0000_0100;
        const P = 0b0000_1000;
        const SP = 0b0001_0000;
        const PC = 0b0010_0000;
        const STATUS = 0b0100_0000;
    }
}

/// Captures a pre-instruction snapshot and answers "what happened" queries
/// about the instruction(s) executed since.
///
/// # Examples
///
/// ```
/// use mox::{SimpleBus, Word};
/// use mox65::instruction::mos6502::Nmos6502;
/// use mox65::{ChangedRegisters, Cpu, Inspector};
///
/// let mut bus = SimpleBus::default();
/// let mut cpu =
///     Cpu::with_program::<Nmos6502>(&mut bus, Word(0x0400), &[0xA9, 0x42], Word(0x0400));
///
/// let inspector = Inspector::capture(&cpu);
/// cpu.step(&mut bus);
///
/// assert!(inspector.changed_registers(&cpu).contains(ChangedRegisters::A));
/// assert_eq!(inspector.stack_delta(&cpu), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Inspector {
    snapshot: Registers,
}

impl Inspector {
    /// Snapshot the live registers now; call at an instruction boundary.
    #[must_use]
    pub fn capture<B: Bus>(cpu: &Cpu<B>) -> Self {
        Self { snapshot: cpu.regs }
    }

    /// Re-arm the snapshot from the live registers.
    pub fn recapture<B: Bus>(&mut self, cpu: &Cpu<B>) {
        self.snapshot = cpu.regs;
    }

    /// The captured pre-instruction register file.
    #[must_use]
    pub fn prev_state(&self) -> &Registers {
        &self.snapshot
    }

    /// Registers whose live value differs from the snapshot.
    #[must_use]
    pub fn changed_registers<B: Bus>(&self, cpu: &Cpu<B>) -> ChangedRegisters {
        let mut changed = ChangedRegisters::empty();
        changed.set(ChangedRegisters::A, cpu.regs.a != self.snapshot.a);
        changed.set(ChangedRegisters::X, cpu.regs.x != self.snapshot.x);
        changed.set(ChangedRegisters::Y, cpu.regs.y != self.snapshot.y);
        changed.set(ChangedRegisters::P, cpu.regs.p != self.snapshot.p);
        changed.set(ChangedRegisters::SP, cpu.regs.sp != self.snapshot.sp);
        changed.set(ChangedRegisters::PC, cpu.regs.pc != self.snapshot.pc);
        changed.set(
            ChangedRegisters::STATUS,
            cpu.regs.status != self.snapshot.status,
        );
        changed
    }

    /// Signed stack-pointer movement since the snapshot: negative means
    /// bytes were pushed.
    #[must_use]
    pub fn stack_delta<B: Bus>(&self, cpu: &Cpu<B>) -> i8 {
        cpu.regs.sp.0.wrapping_sub(self.snapshot.sp.0) as i8
    }

    /// Whether the last indexed-address computation crossed a page: the
    /// effective address left the page of the uncorrected address.
    #[must_use]
    pub fn page_crossed<B: Bus>(&self, cpu: &Cpu<B>) -> bool {
        !cpu.effective_address().same_page(cpu.penalty_address())
    }

    /// Whether a branch instruction was taken: the opcode is a branch and
    /// PC did not simply fall through to the next instruction.
    #[must_use]
    pub fn branch_taken<B: Bus>(&self, cpu: &Cpu<B>) -> bool {
        BRANCH_OPCODES.contains(&cpu.last_opcode().0) && cpu.regs.pc != self.snapshot.pc + 2u16
    }

    /// Whether an interrupt entry happened: three bytes stacked and I now
    /// set.
    #[must_use]
    pub fn interrupt_entered<B: Bus>(&self, cpu: &Cpu<B>) -> bool {
        self.stack_delta(cpu) == -3 && cpu.regs.p.contains(Flags::IrqDisable)
    }

    /// Whether an RTS/RTI-style return happened: the stack shrank and PC
    /// moved.
    #[must_use]
    pub fn returned_from_subroutine<B: Bus>(&self, cpu: &Cpu<B>) -> bool {
        self.stack_delta(cpu) > 0 && cpu.regs.pc != self.snapshot.pc
    }
}

/// Convenience: the snapshot is the byte the adapter serializes.
impl From<Inspector> for [u8; 8] {
    fn from(inspector: Inspector) -> Self {
        inspector.snapshot.to_bytes()
    }
}
