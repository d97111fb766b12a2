//! CPU state, the micro-op pipeline, and the execution driver.

use crate::instruction::{InstructionSet, MicroOp, ScheduleTable};
use crate::instruction::{
    mos6502::Nmos6502, mos6502_documented::Nmos6502Documented, rockwell65c02::Rockwell65c02,
    wdc65c02::Wdc65c02,
};
use crate::processor::flags::Flags;
use core::fmt;
use mox::{AccessType, Bus, Byte, Word};

/// IRQ/BRK vector low byte address.
pub const IRQ_VECTOR_LO: Word = Word(0xFFFE);
/// IRQ/BRK vector high byte address.
pub const IRQ_VECTOR_HI: Word = Word(0xFFFF);
/// NMI vector low byte address.
pub const NMI_VECTOR_LO: Word = Word(0xFFFA);
/// NMI vector high byte address.
pub const NMI_VECTOR_HI: Word = Word(0xFFFB);
/// RESET vector low byte address.
pub const RESET_VECTOR_LO: Word = Word(0xFFFC);
/// RESET vector high byte address.
pub const RESET_VECTOR_HI: Word = Word(0xFFFD);
/// Start of stack space (the stack grows downward from 0x01FF to 0x0100).
pub const STACK_SPACE_START: Word = Word(0x0100);

/// Capacity of the in-state working pipeline: the longest base schedule
/// plus a margin for every penalty cycle an instruction can accrue.
pub(crate) const WORKING_SLOTS: usize = 16;

/// Hardware interrupt lines a host can assert.
///
/// The pending slot holds at most one; on service the priority is
/// Reset > Nmi > Irq.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Interrupt {
    Reset,
    Nmi,
    Irq,
}

/// Guest-visible execution status.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ExecStatus {
    /// Executing instructions normally.
    #[default]
    Running,
    /// STP executed; only a hardware reset resumes.
    Stopped,
    /// An NMOS halt opcode executed; only a hardware reset resumes.
    Jammed,
    /// WAI executed; any asserted interrupt resumes, even with I set.
    Waiting,
    /// A halt opcode was encountered while `ignore_halt` was set; the
    /// processor keeps running but this status records the event.
    Bypassed,
}

impl ExecStatus {
    fn to_u8(self) -> u8 {
        match self {
            ExecStatus::Running => 0,
            ExecStatus::Stopped => 1,
            ExecStatus::Jammed => 2,
            ExecStatus::Waiting => 3,
            ExecStatus::Bypassed => 4,
        }
    }

    fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ExecStatus::Running),
            1 => Some(ExecStatus::Stopped),
            2 => Some(ExecStatus::Jammed),
            3 => Some(ExecStatus::Waiting),
            4 => Some(ExecStatus::Bypassed),
            _ => None,
        }
    }
}

/// Processor variant a [`Cpu`] is constructed for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Variant {
    /// Original NMOS 6502 with the undocumented opcodes live.
    Nmos6502,
    /// NMOS 6502 with undocumented opcodes stubbed out as NOPs.
    Nmos6502Documented,
    /// WDC 65C02.
    Wdc65c02,
    /// Rockwell 65C02 (RMB/SMB/BBR/BBS; no WAI/STP).
    Rockwell65c02,
}

/// The guest-visible register file.
///
/// Packs to eight bytes so hosts can snapshot and serialize it cheaply.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: Byte,
    /// X index register.
    pub x: Byte,
    /// Y index register.
    pub y: Byte,
    /// Processor status flags.
    pub p: Flags,
    /// Stack pointer (the stack lives at 0x0100 + sp).
    pub sp: Byte,
    /// Program counter.
    pub pc: Word,
    /// Execution status.
    pub status: ExecStatus,
}

impl Registers {
    /// Power-on register state: A=X=Y=0, SP=0xFD, P=U|I, PC=0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: Byte::ZERO,
            x: Byte::ZERO,
            y: Byte::ZERO,
            p: Flags::IrqDisable | Flags::Unused,
            sp: Byte(0xFD),
            pc: Word::ZERO,
            status: ExecStatus::Running,
        }
    }

    /// Packs the register file into its 8-byte wire layout.
    #[must_use]
    pub fn to_bytes(self) -> [u8; 8] {
        [
            self.a.0,
            self.x.0,
            self.y.0,
            self.p.bits(),
            self.sp.0,
            self.pc.lo().0,
            self.pc.hi().0,
            self.status.to_u8(),
        ]
    }

    /// Rebuilds a register file from [`to_bytes`](Self::to_bytes) output.
    /// Returns `None` if the status byte is out of range.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 8]) -> Option<Self> {
        Some(Self {
            a: Byte(bytes[0]),
            x: Byte(bytes[1]),
            y: Byte(bytes[2]),
            p: Flags::from_bits_truncate(bytes[3]),
            sp: Byte(bytes[4]),
            pc: Word::from((bytes[5], bytes[6])),
            status: ExecStatus::from_u8(bytes[7])?,
        })
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

/// The 6502-family CPU core.
///
/// Each [`clock`](Self::clock) call executes exactly one micro-op, which
/// performs exactly one bus operation — the cycle granularity of the
/// silicon. Schedules come from the variant's [`ScheduleTable`], chosen at
/// construction; penalty cycles (page crossing, taken branches, CMOS
/// decimal mode) are inserted mid-instruction into a fixed working buffer,
/// never allocating.
///
/// # Examples
///
/// ```
/// use mox::{SimpleBus, Word};
/// use mox65::instruction::mos6502::Nmos6502;
/// use mox65::Cpu;
///
/// let mut bus = SimpleBus::default();
/// let program = [0xA9, 0x42]; // LDA #$42
/// let mut cpu: Cpu<SimpleBus> =
///     Cpu::with_program::<Nmos6502>(&mut bus, Word(0x0400), &program, Word(0x0400));
///
/// assert_eq!(cpu.step(&mut bus), 2);
/// assert_eq!(cpu.regs.a, mox::Byte(0x42));
/// ```
pub struct Cpu<B: Bus> {
    /// Live register file.
    pub regs: Registers,
    /// Register file committed at the start of the current instruction.
    /// Branch predicates test this, not the live flags.
    pub(crate) prev: Registers,
    /// When set, JAM/STP/WAI execute as NOPs that record
    /// [`ExecStatus::Bypassed`] instead of halting.
    pub ignore_halt: bool,
    /// Total cycles executed.
    pub cycles: u64,

    // Scratch state staged by micro-ops; not guest-visible.
    pub(crate) temp_addr: Word,
    pub(crate) temp_value: Word,
    pub(crate) opcode: Byte,
    pub(crate) opcode_addr: Word,
    pub(crate) penalty_addr: Word,
    pub(crate) branch_origin: Word,

    // Pipeline state.
    cursor: u8,
    working_len: u8,
    complete: bool,
    working: [MicroOp<B>; WORKING_SLOTS],
    table: ScheduleTable<B>,

    pending: Option<Interrupt>,
    variant: Variant,
    clears_decimal_on_interrupt: bool,
}

impl<B: Bus> fmt::Debug for Cpu<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The schedule table is too noisy to print
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("cycles", &self.cycles)
            .field("opcode", &self.opcode)
            .field("opcode_addr", &self.opcode_addr)
            .field("cursor", &self.cursor)
            .field("complete", &self.complete)
            .field("pending", &self.pending)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

impl<B: Bus> Cpu<B> {
    /// Hard ceiling on micro-ops [`step`](Self::step) executes for a single
    /// instruction, bounding pathological pipelines.
    pub const STEP_CYCLE_CAP: u32 = 100;

    /// Create a new CPU with the specified instruction set.
    ///
    /// Registers start in power-on state; call [`reset`](Self::reset) to
    /// load PC from the reset vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use mox::SimpleBus;
    /// use mox65::instruction::wdc65c02::Wdc65c02;
    /// use mox65::Cpu;
    ///
    /// let cpu: Cpu<SimpleBus> = Cpu::with_instruction_set::<Wdc65c02>();
    /// ```
    #[must_use]
    pub fn with_instruction_set<S: InstructionSet>() -> Self {
        Self {
            regs: Registers::new(),
            prev: Registers::new(),
            ignore_halt: false,
            cycles: 0,
            temp_addr: Word::ZERO,
            temp_value: Word::ZERO,
            opcode: Byte::ZERO,
            opcode_addr: Word::ZERO,
            penalty_addr: Word::ZERO,
            branch_origin: Word::ZERO,
            cursor: 0,
            working_len: 0,
            complete: true,
            working: [crate::processor::micro::unscheduled::<B>; WORKING_SLOTS],
            table: S::schedules::<B>(),
            pending: None,
            variant: S::VARIANT,
            clears_decimal_on_interrupt: S::CLEARS_DECIMAL_ON_INTERRUPT,
        }
    }

    /// Create a new CPU for a runtime-chosen [`Variant`].
    #[must_use]
    pub fn with_variant(variant: Variant) -> Self {
        match variant {
            Variant::Nmos6502 => Self::with_instruction_set::<Nmos6502>(),
            Variant::Nmos6502Documented => Self::with_instruction_set::<Nmos6502Documented>(),
            Variant::Wdc65c02 => Self::with_instruction_set::<Wdc65c02>(),
            Variant::Rockwell65c02 => Self::with_instruction_set::<Rockwell65c02>(),
        }
    }

    /// Convenience constructor that sets the reset vector and resets the
    /// CPU in one call.
    pub fn with_reset_vector<S: InstructionSet>(bus: &mut B, reset_vector: Word) -> Self {
        bus.set_reset_vector(reset_vector);
        let mut cpu = Self::with_instruction_set::<S>();
        cpu.reset(bus);
        cpu
    }

    /// Convenience constructor that loads a program, sets the reset vector,
    /// and resets the CPU.
    pub fn with_program<S: InstructionSet>(
        bus: &mut B,
        load_address: Word,
        program: &[u8],
        reset_vector: Word,
    ) -> Self {
        bus.write_block(load_address, program, AccessType::DataWrite);
        Self::with_reset_vector::<S>(bus, reset_vector)
    }

    /// The variant this CPU was constructed for.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Register file committed at the last instruction boundary.
    #[must_use]
    pub fn prev_registers(&self) -> Registers {
        self.prev
    }

    /// Opcode byte of the instruction currently (or last) executed.
    #[must_use]
    pub fn last_opcode(&self) -> Byte {
        self.opcode
    }

    /// Address the current opcode byte was fetched from.
    #[must_use]
    pub fn opcode_address(&self) -> Word {
        self.opcode_addr
    }

    /// Effective address staged by the current instruction, if any.
    #[must_use]
    pub fn effective_address(&self) -> Word {
        self.temp_addr
    }

    /// The uncorrected address associated with the last indexed-address
    /// computation (the "wrong" page the NMOS penalty cycle reads).
    #[must_use]
    pub fn penalty_address(&self) -> Word {
        self.penalty_addr
    }

    /// `true` at instruction boundaries.
    #[must_use]
    pub fn instruction_complete(&self) -> bool {
        self.complete
    }

    fn is_halted(&self) -> bool {
        matches!(
            self.regs.status,
            ExecStatus::Stopped | ExecStatus::Jammed | ExecStatus::Waiting
        )
    }

    fn effective_len(&self) -> u8 {
        if self.working_len > 0 {
            self.working_len
        } else {
            self.table.schedule(self.opcode).cycles()
        }
    }

    fn begin_instruction(&mut self, opcode: Byte) {
        self.prev = self.regs;
        self.opcode = opcode;
        self.cursor = 0;
        self.working_len = 0;
        self.complete = false;
    }

    /// Execute one cycle; returns `true` iff the instruction completed on
    /// this cycle.
    ///
    /// A halted CPU (Stopped, Jammed, Waiting) returns `true` immediately
    /// with no bus activity. Otherwise, at an instruction boundary the
    /// driver peeks the next opcode (no cycle), binds its schedule, and
    /// resets the pipeline; it then runs the micro-op at the cursor.
    pub fn clock(&mut self, bus: &mut B) -> bool {
        if self.is_halted() {
            return true;
        }

        if self.complete || self.cursor >= self.effective_len() {
            let opcode = bus.peek(self.regs.pc);
            self.begin_instruction(opcode);
        }

        let op = if self.working_len > 0 {
            self.working[self.cursor as usize]
        } else {
            self.table.schedule(self.opcode).op(self.cursor)
        };
        self.cursor += 1;
        self.cycles += 1;
        op(self, bus);

        self.complete
    }

    /// Execute until the instruction completes or [`STEP_CYCLE_CAP`]
    /// cycles pass; returns the number of cycles consumed.
    ///
    /// Hitting the cap leaves the pipeline partially executed; the caller
    /// may re-enter `step`.
    ///
    /// [`STEP_CYCLE_CAP`]: Self::STEP_CYCLE_CAP
    pub fn step(&mut self, bus: &mut B) -> u32 {
        if self.is_halted() {
            return 0;
        }

        let mut spent = 0;
        while spent < Self::STEP_CYCLE_CAP {
            spent += 1;
            if self.clock(bus) {
                break;
            }
        }
        spent
    }

    /// Execute exactly `cycles` cycles, regardless of instruction
    /// boundaries; returns `cycles`.
    pub fn run(&mut self, bus: &mut B, cycles: u32) -> u32 {
        for _ in 0..cycles {
            self.clock(bus);
        }
        cycles
    }

    /// Reset the CPU and load PC from the reset vector.
    ///
    /// Clears registers to power-on state, clears scratch and pipeline
    /// state, and reads `$FFFC`/`$FFFD`. The two vector reads count as
    /// cycles; nothing is pushed to the stack.
    pub fn reset(&mut self, bus: &mut B) {
        self.regs = Registers::new();
        self.temp_addr = Word::ZERO;
        self.temp_value = Word::ZERO;
        self.opcode = Byte::ZERO;
        self.opcode_addr = Word::ZERO;
        self.penalty_addr = Word::ZERO;
        self.branch_origin = Word::ZERO;
        self.cursor = 0;
        self.working_len = 0;
        self.complete = true;
        self.pending = None;

        let lo = bus.read(RESET_VECTOR_LO, AccessType::InterruptVectorRead);
        let hi = bus.read(RESET_VECTOR_HI, AccessType::InterruptVectorRead);
        self.regs.pc = Word::from((lo, hi));
        self.prev = self.regs;
        self.cycles = 2;

        log::trace!("reset: pc={:04X}", self.regs.pc);
    }

    /// Assert the IRQ line. Sets the pending slot only if it is empty.
    pub fn signal_irq(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(Interrupt::Irq);
        }
    }

    /// Assert the NMI line. Overwrites a pending IRQ but never a pending
    /// reset.
    pub fn signal_nmi(&mut self) {
        if self.pending != Some(Interrupt::Reset) {
            self.pending = Some(Interrupt::Nmi);
        }
    }

    /// Assert the reset line. Always overwrites the pending slot.
    pub fn signal_reset(&mut self) {
        self.pending = Some(Interrupt::Reset);
    }

    /// Release the IRQ line if it is the pending signal.
    pub fn clear_irq(&mut self) {
        if self.pending == Some(Interrupt::Irq) {
            self.pending = None;
        }
    }

    /// The currently latched interrupt, if any.
    #[must_use]
    pub fn pending_interrupt(&self) -> Option<Interrupt> {
        self.pending
    }

    /// Service the pending interrupt, if one is serviceable now; returns
    /// whether an interrupt was taken.
    ///
    /// Call at instruction boundaries. Reset reinitializes the CPU without
    /// touching the stack. NMI is always taken unless the CPU is stopped
    /// or jammed. IRQ is gated by the I flag except when the CPU is
    /// waiting (WAI), which any serviced interrupt wakes.
    pub fn handle_pending_interrupt(&mut self, bus: &mut B) -> bool {
        match self.pending {
            Some(Interrupt::Reset) => {
                self.pending = None;
                self.reset(bus);
                true
            }
            Some(Interrupt::Nmi) => {
                if matches!(self.regs.status, ExecStatus::Stopped | ExecStatus::Jammed) {
                    return false;
                }
                self.pending = None;
                self.enter_interrupt(bus, Interrupt::Nmi);
                true
            }
            Some(Interrupt::Irq) => {
                if matches!(self.regs.status, ExecStatus::Stopped | ExecStatus::Jammed) {
                    return false;
                }
                if self.regs.p.contains(Flags::IrqDisable)
                    && self.regs.status != ExecStatus::Waiting
                {
                    return false;
                }
                self.pending = None;
                self.enter_interrupt(bus, Interrupt::Irq);
                true
            }
            None => false,
        }
    }

    fn enter_interrupt(&mut self, bus: &mut B, interrupt: Interrupt) {
        self.regs.status = ExecStatus::Running;

        let (vector_lo, vector_hi) = match interrupt {
            Interrupt::Nmi => (NMI_VECTOR_LO, NMI_VECTOR_HI),
            Interrupt::Irq => (IRQ_VECTOR_LO, IRQ_VECTOR_HI),
            Interrupt::Reset => unreachable!("reset is serviced by reset()"),
        };

        self.push(bus, self.regs.pc.hi());
        self.push(bus, self.regs.pc.lo());
        self.push(bus, self.regs.p.stacked_by_interrupt());

        self.regs.p.insert(Flags::IrqDisable);
        if self.clears_decimal_on_interrupt {
            self.regs.p.remove(Flags::Decimal);
        }

        let lo = bus.read(vector_lo, AccessType::InterruptVectorRead);
        let hi = bus.read(vector_hi, AccessType::InterruptVectorRead);
        self.regs.pc = Word::from((lo, hi));

        // The next clock() dispatches fresh from the handler.
        self.complete = true;
        self.prev = self.regs;

        log::trace!("{interrupt:?} taken: pc={:04X}", self.regs.pc);
    }

    /// Push a byte onto the stack.
    ///
    /// The stack grows downward from 0x01FF; SP is decremented after the
    /// write.
    pub fn push(&mut self, bus: &mut B, val: Byte) {
        let addr = STACK_SPACE_START + self.regs.sp;
        bus.write(addr, val, AccessType::StackWrite);
        self.regs.sp -= 1;
    }

    /// Pull a byte from the stack. SP is incremented before the read.
    pub fn pull(&mut self, bus: &mut B) -> Byte {
        self.regs.sp += 1;
        let addr = STACK_SPACE_START + self.regs.sp;
        bus.read(addr, AccessType::StackRead)
    }

    /// Marks the current cycle as the last of the instruction.
    pub(crate) fn complete_instruction(&mut self) {
        self.complete = true;
    }

    /// Records a halt-class status, honoring the `ignore_halt` bypass.
    pub(crate) fn halt(&mut self, status: ExecStatus) {
        if self.ignore_halt {
            self.regs.status = ExecStatus::Bypassed;
        } else {
            self.regs.status = status;
            log::trace!("halt: {status:?} at {:04X}", self.opcode_addr);
        }
    }

    fn materialize_working(&mut self) {
        if self.working_len == 0 {
            let schedule = *self.table.schedule(self.opcode);
            let ops = schedule.ops();
            self.working[..ops.len()].copy_from_slice(ops);
            self.working_len = schedule.cycles();
        }
    }

    /// Schedules `op` to run on the next cycle, shifting the tail right.
    /// Used by page-cross and decimal penalties.
    pub(crate) fn insert_after_current(&mut self, op: MicroOp<B>) {
        self.materialize_working();
        debug_assert!((self.working_len as usize) < WORKING_SLOTS);

        let at = self.cursor as usize;
        let mut i = self.working_len as usize;
        while i > at {
            self.working[i] = self.working[i - 1];
            i -= 1;
        }
        self.working[at] = op;
        self.working_len += 1;
    }

    /// Schedules `op` as the new final cycle. Used for the second of two
    /// branch penalty cycles.
    pub(crate) fn append_cycle(&mut self, op: MicroOp<B>) {
        self.materialize_working();
        debug_assert!((self.working_len as usize) < WORKING_SLOTS);

        self.working[self.working_len as usize] = op;
        self.working_len += 1;
    }
}

impl<B: Bus> Default for Cpu<B> {
    fn default() -> Self {
        Self::with_instruction_set::<Nmos6502>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mox::SimpleBus;

    fn prepare_cpu(bus: &mut SimpleBus) -> Cpu<SimpleBus> {
        let mut cpu: Cpu<SimpleBus> = Cpu::with_instruction_set::<Nmos6502>();
        bus.load(Word(0xFFFC), &[0x00, 0x80]);
        cpu.reset(bus);
        cpu
    }

    #[test]
    fn reset_loads_vector_and_power_on_state() {
        let mut bus = SimpleBus::default();
        let cpu = prepare_cpu(&mut bus);

        assert_eq!(cpu.regs.pc, Word(0x8000));
        assert_eq!(cpu.regs.sp, Byte(0xFD));
        assert_eq!(cpu.regs.a, Byte::ZERO);
        assert_eq!(cpu.regs.p, Flags::IrqDisable | Flags::Unused);
        assert_eq!(cpu.cycles, 2);
    }

    #[test]
    fn with_reset_vector_sets_pc_and_vector_bytes() {
        let mut bus = SimpleBus::default();
        let reset = Word(0x9000);

        let cpu: Cpu<SimpleBus> = Cpu::with_reset_vector::<Nmos6502>(&mut bus, reset);

        assert_eq!(cpu.regs.pc, reset);
        assert_eq!(bus.peek(RESET_VECTOR_LO), reset.lo());
        assert_eq!(bus.peek(RESET_VECTOR_HI), reset.hi());
    }

    #[test]
    fn clock_reports_completion_on_final_cycle() {
        let mut bus = SimpleBus::default();
        bus.load(Word(0x8000), &[0xA9, 0x42]); // LDA #$42
        let mut cpu = prepare_cpu(&mut bus);

        assert!(!cpu.clock(&mut bus));
        assert!(cpu.clock(&mut bus));
        assert_eq!(cpu.regs.a, Byte(0x42));
    }

    #[test]
    fn run_crosses_instruction_boundaries() {
        let mut bus = SimpleBus::default();
        bus.load(Word(0x8000), &[0xEA, 0xEA, 0xEA]); // NOP x3
        let mut cpu = prepare_cpu(&mut bus);

        assert_eq!(cpu.run(&mut bus, 5), 5);
        // 2.5 NOPs in: halfway through the third
        assert_eq!(cpu.regs.pc, Word(0x8003));
        assert!(!cpu.instruction_complete());
    }

    #[test]
    fn signal_priority_reset_is_sticky() {
        let mut cpu: Cpu<SimpleBus> = Cpu::default();

        cpu.signal_irq();
        assert_eq!(cpu.pending_interrupt(), Some(Interrupt::Irq));

        cpu.signal_nmi();
        assert_eq!(cpu.pending_interrupt(), Some(Interrupt::Nmi));

        cpu.signal_reset();
        cpu.signal_nmi();
        assert_eq!(cpu.pending_interrupt(), Some(Interrupt::Reset));
    }

    #[test]
    fn signal_irq_does_not_displace_nmi() {
        let mut cpu: Cpu<SimpleBus> = Cpu::default();

        cpu.signal_nmi();
        cpu.signal_irq();
        assert_eq!(cpu.pending_interrupt(), Some(Interrupt::Nmi));
    }

    #[test]
    fn clear_irq_only_clears_irq() {
        let mut cpu: Cpu<SimpleBus> = Cpu::default();

        cpu.signal_irq();
        cpu.clear_irq();
        assert_eq!(cpu.pending_interrupt(), None);

        cpu.signal_nmi();
        cpu.clear_irq();
        assert_eq!(cpu.pending_interrupt(), Some(Interrupt::Nmi));
    }

    #[test]
    fn irq_is_masked_by_i_flag() {
        let mut bus = SimpleBus::default();
        bus.load(Word(0xFFFE), &[0x00, 0x90]);
        let mut cpu = prepare_cpu(&mut bus);

        cpu.signal_irq();
        assert!(!cpu.handle_pending_interrupt(&mut bus));

        cpu.regs.p.remove(Flags::IrqDisable);
        assert!(cpu.handle_pending_interrupt(&mut bus));
        assert_eq!(cpu.regs.pc, Word(0x9000));
        assert_eq!(cpu.regs.sp, Byte(0xFD - 3));
    }

    #[test]
    fn registers_round_trip_through_bytes() {
        let mut regs = Registers::new();
        regs.a = Byte(0x42);
        regs.pc = Word(0xABCD);
        regs.status = ExecStatus::Waiting;

        assert_eq!(Registers::from_bytes(regs.to_bytes()), Some(regs));
        assert_eq!(Registers::from_bytes([0, 0, 0, 0, 0, 0, 0, 0xFF]), None);
    }
}
