//! Host-side run loop with configurable stop conditions.

use crate::processor::cpu::Cpu;
use mox::{Bus, Byte};

/// Reason why [`Cpu::run_until`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunOutcome {
    /// Execution is still in progress (default before a stop condition hit).
    #[default]
    InProgress,
    /// Execution hit a BRK instruction and `stop_on_brk` was enabled.
    HitBrk,
    /// User-supplied predicate returned `true`.
    HitPredicate,
    /// [`RunConfig::instruction_limit`] was reached.
    HitInstructionLimit,
    /// CPU failed to make forward progress (stopped, jammed, waiting).
    Stalled,
}

/// Summary produced by [`Cpu::run_until`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Total instructions executed.
    pub instructions_executed: u64,
    /// Total CPU cycles spent on those instructions.
    pub cycles: u64,
    /// Outcome describing why execution stopped.
    pub outcome: RunOutcome,
}

impl RunSummary {
    /// Record that the run stopped for the provided outcome.
    pub fn mark(&mut self, outcome: RunOutcome) {
        self.outcome = outcome;
    }

    /// Returns `true` if execution halted because a BRK was executed.
    #[must_use]
    pub fn hit_brk(&self) -> bool {
        self.outcome == RunOutcome::HitBrk
    }

    /// Returns `true` if the user predicate stopped execution.
    #[must_use]
    pub fn hit_predicate(&self) -> bool {
        self.outcome == RunOutcome::HitPredicate
    }

    /// Returns `true` if execution reached the configured instruction limit.
    #[must_use]
    pub fn hit_instruction_limit(&self) -> bool {
        self.outcome == RunOutcome::HitInstructionLimit
    }

    /// Returns `true` if the CPU stalled (halted or waiting).
    #[must_use]
    pub fn stalled(&self) -> bool {
        self.outcome == RunOutcome::Stalled
    }
}

/// Wrapper around a predicate callback used by [`RunConfig`].
pub struct RunPredicate<'a, B: Bus> {
    callback: &'a mut dyn FnMut(&Cpu<B>, &mut B) -> bool,
}

impl<'a, B: Bus> RunPredicate<'a, B> {
    /// Create a new predicate wrapper.
    pub fn new(callback: &'a mut dyn FnMut(&Cpu<B>, &mut B) -> bool) -> Self {
        Self { callback }
    }

    pub fn should_stop(&mut self, cpu: &Cpu<B>, bus: &mut B) -> bool {
        (self.callback)(cpu, bus)
    }
}

/// Configuration for [`Cpu::run_until`].
pub struct RunConfig<'a, B: Bus> {
    /// Maximum number of instructions to execute before stopping.
    pub instruction_limit: Option<u64>,
    /// Stop automatically when a BRK (opcode 0x00) executes.
    pub stop_on_brk: bool,
    /// Optional predicate invoked after each instruction; returning `true`
    /// stops the run.
    pub predicate: Option<RunPredicate<'a, B>>,
}

impl<B: Bus> Default for RunConfig<'_, B> {
    fn default() -> Self {
        Self {
            instruction_limit: None,
            stop_on_brk: false,
            predicate: None,
        }
    }
}

impl<B: Bus> Cpu<B> {
    /// Drive the CPU a whole instruction at a time until a configured stop
    /// condition occurs, and return a summary.
    pub fn run_until(&mut self, bus: &mut B, config: RunConfig<'_, B>) -> RunSummary {
        let RunConfig {
            instruction_limit,
            stop_on_brk,
            mut predicate,
        } = config;

        let mut summary = RunSummary::default();

        loop {
            if let Some(limit) = instruction_limit
                && summary.instructions_executed >= limit
            {
                summary.mark(RunOutcome::HitInstructionLimit);
                break;
            }

            let cycles = self.step(bus);
            if cycles == 0 {
                summary.mark(RunOutcome::Stalled);
                break;
            }

            summary.instructions_executed += 1;
            summary.cycles += u64::from(cycles);

            if stop_on_brk && self.last_opcode() == Byte(0x00) {
                summary.mark(RunOutcome::HitBrk);
                break;
            }

            if let Some(predicate_cb) = predicate.as_mut()
                && predicate_cb.should_stop(self, bus)
            {
                summary.mark(RunOutcome::HitPredicate);
                break;
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::mos6502::Nmos6502;
    use crate::instruction::wdc65c02::Wdc65c02;
    use mox::{SimpleBus, Word, byte};

    #[test]
    fn run_until_stops_on_brk() {
        let mut bus = SimpleBus::default();
        bus.load(Word(0xFFFE), &[0x00, 0x80]);
        let mut cpu = Cpu::with_program::<Nmos6502>(
            &mut bus,
            Word(0x0400),
            &[0xA9, 0x01, 0x00],
            Word(0x0400),
        );

        let summary = cpu.run_until(
            &mut bus,
            RunConfig {
                stop_on_brk: true,
                ..RunConfig::default()
            },
        );

        assert!(summary.hit_brk());
        assert_eq!(summary.instructions_executed, 2);
        assert_eq!(summary.cycles, 2 + 7);
    }

    #[test]
    fn run_until_stops_on_predicate() {
        let mut bus = SimpleBus::default();
        let mut cpu = Cpu::with_program::<Nmos6502>(
            &mut bus,
            Word(0x0400),
            &[0xE8, 0xE8, 0x00],
            Word(0x0400),
        );

        let mut stop_when_x_is_two =
            |cpu: &Cpu<SimpleBus>, _bus: &mut SimpleBus| cpu.regs.x == byte!(0x02u8);

        let summary = cpu.run_until(
            &mut bus,
            RunConfig {
                predicate: Some(RunPredicate::new(&mut stop_when_x_is_two)),
                ..RunConfig::default()
            },
        );

        assert!(summary.hit_predicate());
        assert_eq!(summary.instructions_executed, 2);
    }

    #[test]
    fn run_until_enforces_instruction_limit() {
        let mut bus = SimpleBus::default();
        let mut cpu =
            Cpu::with_program::<Nmos6502>(&mut bus, Word(0x0400), &[0xEA; 16], Word(0x0400));

        let summary = cpu.run_until(
            &mut bus,
            RunConfig {
                instruction_limit: Some(4),
                ..RunConfig::default()
            },
        );

        assert!(summary.hit_instruction_limit());
        assert_eq!(summary.instructions_executed, 4);
    }

    #[test]
    fn run_until_reports_a_stall_after_wai() {
        let mut bus = SimpleBus::default();
        let mut cpu =
            Cpu::with_program::<Wdc65c02>(&mut bus, Word(0x0400), &[0xEA, 0xCB], Word(0x0400));

        let summary = cpu.run_until(&mut bus, RunConfig::default());

        assert!(summary.stalled());
        assert_eq!(summary.instructions_executed, 2);
        assert_eq!(cpu.regs.status, crate::ExecStatus::Waiting);
    }

    #[test]
    fn sixteen_bit_multiply_program() {
        // Source: https://www.lysator.liu.se/~nisse/misc/6502-mul.html
        const FACTOR1_ADDR: u8 = 0x10;
        const FACTOR2_ADDR: u8 = 0x11;
        const PROGRAM: &[u8] = &[
            0xA9, 0x00, // LDA #$00
            0xA2, 0x08, // LDX #$08
            0x46, FACTOR1_ADDR, // LSR factor1
            0x90, 0x03, // BCC no_add
            0x18, // CLC
            0x65, FACTOR2_ADDR, // ADC factor2
            0x6A, // ROR A (no_add)
            0x66, FACTOR1_ADDR, // ROR factor1
            0xCA, // DEX
            0xD0, 0xF5, // BNE loop
            0x85, FACTOR2_ADDR, // STA factor2
            0x00, // BRK
        ];

        let mut bus = SimpleBus::default();
        bus.load(Word(0x0010), &[0xB6, 0x4D]);
        bus.load(Word(0xFFFE), &[0x00, 0x80]);
        let mut cpu = Cpu::with_program::<Nmos6502>(&mut bus, Word(0x0400), PROGRAM, Word(0x0400));

        let summary = cpu.run_until(
            &mut bus,
            RunConfig {
                stop_on_brk: true,
                instruction_limit: Some(0x200),
                ..RunConfig::default()
            },
        );

        assert!(summary.hit_brk());
        assert!(!summary.hit_instruction_limit());

        // 0xB6 * 0x4D = 0x36BE
        assert_eq!(bus.peek(Word(0x0010)), byte!(0xBEu8));
        assert_eq!(bus.peek(Word(0x0011)), byte!(0x36u8));
    }
}
