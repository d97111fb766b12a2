//! The micro-op library: every reusable single-cycle operation.
//!
//! A micro-op is one bus cycle of instruction execution. Each function here
//! performs exactly one bus operation (the silicon never idles the bus —
//! internal cycles are dummy reads), mutates live CPU state, and the
//! terminal op of a schedule flags completion. Ops that discover a penalty
//! condition (page crossing, taken branch, CMOS decimal mode) extend the
//! pipeline through [`Cpu::insert_after_current`] and [`Cpu::append_cycle`].
//!
//! Operand-source and flag-predicate polymorphism uses zero-sized types
//! ([`Operand`], [`Predicate`], [`Modify`], [`DecimalRule`]) so the tables
//! get compile-time dispatch with no per-cycle allocation.

use crate::processor::cpu::{Cpu, ExecStatus, IRQ_VECTOR_HI, IRQ_VECTOR_LO, STACK_SPACE_START};
use crate::processor::flags::Flags;
use mox::{AccessType, Bus, Byte, Nibble, Word};

/// Filler for unused pipeline slots; never executed by a well-formed table.
pub(crate) fn unscheduled<B: Bus>(_cpu: &mut Cpu<B>, _bus: &mut B) {
    debug_assert!(false, "executed an unscheduled pipeline slot");
}

// ---------------------------------------------------------------------------
// Operand sources
// ---------------------------------------------------------------------------

/// Where a read-class terminal op takes its operand from.
pub trait Operand {
    /// `true` for immediate mode; decimal penalty addresses differ there.
    const IMMEDIATE: bool;

    fn load<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) -> Byte;
}

/// Immediate operand: the byte at PC.
pub struct Imm;

impl Operand for Imm {
    const IMMEDIATE: bool = true;

    fn load<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) -> Byte {
        let value = bus.read(cpu.regs.pc, AccessType::OperandFetch);
        cpu.regs.pc += 1u16;
        value
    }
}

/// Memory operand: the byte at the staged effective address.
pub struct Mem;

impl Operand for Mem {
    const IMMEDIATE: bool = false;

    fn load<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) -> Byte {
        bus.read(cpu.temp_addr, AccessType::DataRead)
    }
}

// ---------------------------------------------------------------------------
// Decimal-mode rules
// ---------------------------------------------------------------------------

/// Variant-specific decimal ADC/SBC behavior.
pub trait DecimalRule {
    /// `true` when N/Z come from the corrected BCD result (CMOS); the NMOS
    /// parts set them from the binary intermediate.
    const NZ_FROM_BCD: bool;

    /// Address of the extra dummy-read cycle a CMOS part spends in decimal
    /// mode, or `None` on NMOS.
    fn penalty<O: Operand, B: Bus>(cpu: &Cpu<B>) -> Option<Word>;
}

pub struct NmosBcd;

impl DecimalRule for NmosBcd {
    const NZ_FROM_BCD: bool = false;

    fn penalty<O: Operand, B: Bus>(_cpu: &Cpu<B>) -> Option<Word> {
        None
    }
}

pub struct WdcBcd;

impl DecimalRule for WdcBcd {
    const NZ_FROM_BCD: bool = true;

    fn penalty<O: Operand, B: Bus>(cpu: &Cpu<B>) -> Option<Word> {
        Some(if O::IMMEDIATE {
            Word(0x007F)
        } else {
            cpu.temp_addr
        })
    }
}

pub struct RockwellBcd;

impl DecimalRule for RockwellBcd {
    const NZ_FROM_BCD: bool = true;

    fn penalty<O: Operand, B: Bus>(cpu: &Cpu<B>) -> Option<Word> {
        Some(if O::IMMEDIATE {
            Word(0x0059)
        } else {
            cpu.temp_addr
        })
    }
}

// ---------------------------------------------------------------------------
// Fetch and addressing
// ---------------------------------------------------------------------------

/// Records the opcode byte and its address; always cycle one.
pub fn fetch_opcode<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    cpu.opcode_addr = cpu.regs.pc;
    cpu.opcode = bus.read(cpu.regs.pc, AccessType::OpcodeFetch);
    cpu.regs.pc += 1u16;
}

/// Single-cycle NOP: the whole instruction is the fetch (undefined 65C02
/// columns).
pub fn nop_single<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    fetch_opcode(cpu, bus);
    cpu.complete_instruction();
}

pub fn fetch_address_low<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    cpu.temp_addr = Word::from(bus.read(cpu.regs.pc, AccessType::OperandFetch));
    cpu.regs.pc += 1u16;
}

pub fn fetch_address_high<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let hi = bus.read(cpu.regs.pc, AccessType::OperandFetch);
    cpu.regs.pc += 1u16;
    cpu.temp_addr = cpu.temp_addr.with_hi(hi);
}

/// One-byte operand addressing into page zero.
pub fn fetch_zero_page_address<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    cpu.temp_addr = Word::from(bus.read(cpu.regs.pc, AccessType::OperandFetch));
    cpu.regs.pc += 1u16;
}

/// Fetches the high operand byte and applies an index register. Stages the
/// unindexed base in `temp_value` (the unstable stores need its page) and
/// the uncorrected address in `penalty_addr`. Returns whether the add
/// crossed a page.
fn index_absolute<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, index: Byte) -> bool {
    let hi = bus.read(cpu.regs.pc, AccessType::OperandFetch);
    cpu.regs.pc += 1u16;
    let base = cpu.temp_addr.with_hi(hi);
    let effective = base + index;
    cpu.temp_value = base;
    cpu.temp_addr = effective;
    cpu.penalty_addr = effective.with_hi(base.hi());
    !base.same_page(effective)
}

/// NMOS `abs,X` read form: on page crossing, the next cycle re-reads the
/// uncorrected address.
pub fn index_x_checked<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    if index_absolute(cpu, bus, cpu.regs.x) {
        cpu.insert_after_current(dummy_read_crossed);
    }
}

pub fn index_y_checked<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    if index_absolute(cpu, bus, cpu.regs.y) {
        cpu.insert_after_current(dummy_read_crossed);
    }
}

/// 65C02 `abs,X` read form: the crossing penalty re-reads the high operand
/// byte instead of the wrong page.
pub fn index_x_checked_cmos<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    if index_absolute(cpu, bus, cpu.regs.x) {
        cpu.insert_after_current(dummy_read_operand);
    }
}

pub fn index_y_checked_cmos<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    if index_absolute(cpu, bus, cpu.regs.y) {
        cpu.insert_after_current(dummy_read_operand);
    }
}

/// Store/RMW `abs,X` form: the dummy cycle is in the base schedule, so no
/// insertion happens here.
pub fn index_x_unchecked<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    index_absolute(cpu, bus, cpu.regs.x);
}

pub fn index_y_unchecked<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    index_absolute(cpu, bus, cpu.regs.y);
}

/// Zero-page indexed add: dummy read at the unindexed address, then wrap
/// within page zero.
pub fn index_x_zero_page<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.temp_addr, AccessType::DummyRead);
    cpu.temp_addr = Word::from(cpu.temp_addr.lo() + cpu.regs.x);
}

pub fn index_y_zero_page<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.temp_addr, AccessType::DummyRead);
    cpu.temp_addr = Word::from(cpu.temp_addr.lo() + cpu.regs.y);
}

/// Fetches the zero-page pointer operand into `temp_value`.
pub fn fetch_pointer<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    cpu.temp_value = Word::from(bus.read(cpu.regs.pc, AccessType::OperandFetch));
    cpu.regs.pc += 1u16;
}

/// `(zp,X)` pointer add: dummy read at the unindexed pointer, wrap in page
/// zero.
pub fn index_x_pointer<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.temp_value, AccessType::DummyRead);
    cpu.temp_value = Word::from(cpu.temp_value.lo() + cpu.regs.x);
}

pub fn read_pointer_low<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    cpu.temp_addr = Word::from(bus.read(cpu.temp_value, AccessType::DataRead));
}

/// Reads the pointer high byte (wrapping within page zero) to finish
/// `(zp,X)` and `(zp)` addressing.
pub fn read_pointer_high<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let hi = bus.read(Word::from(cpu.temp_value.lo() + 1), AccessType::DataRead);
    cpu.temp_addr = cpu.temp_addr.with_hi(hi);
}

fn index_indirect_y<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) -> bool {
    let hi = bus.read(Word::from(cpu.temp_value.lo() + 1), AccessType::DataRead);
    let base = cpu.temp_addr.with_hi(hi);
    let effective = base + cpu.regs.y;
    cpu.temp_value = base;
    cpu.temp_addr = effective;
    cpu.penalty_addr = effective.with_hi(base.hi());
    !base.same_page(effective)
}

/// NMOS `(zp),Y` read form.
pub fn index_y_indirect_checked<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    if index_indirect_y(cpu, bus) {
        cpu.insert_after_current(dummy_read_crossed);
    }
}

/// 65C02 `(zp),Y` read form: the penalty re-reads the pointer operand.
pub fn index_y_indirect_checked_cmos<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    if index_indirect_y(cpu, bus) {
        cpu.insert_after_current(dummy_read_operand);
    }
}

/// Store `(zp),Y` form: dummy cycle lives in the base schedule.
pub fn index_y_indirect_unchecked<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    index_indirect_y(cpu, bus);
}

/// Penalty cycle: reads the uncorrected address staged by the index op.
pub fn dummy_read_crossed<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.penalty_addr, AccessType::DummyRead);
}

/// Penalty cycle on CMOS parts: re-reads the last operand byte.
pub fn dummy_read_operand<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.regs.pc - 1u16, AccessType::DummyRead);
}

/// The generic internal cycle of one-byte instructions.
pub fn dummy_read_pc<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.regs.pc, AccessType::DummyRead);
}

/// Internal cycle re-reading the staged effective address (Rockwell
/// bit-branch timing).
pub fn dummy_read_effective<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.temp_addr, AccessType::DummyRead);
}

fn implied_read<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.regs.pc, AccessType::DummyRead);
}

// ---------------------------------------------------------------------------
// Jumps
// ---------------------------------------------------------------------------

/// Final cycle of `JMP abs`: fetch the high target byte and jump.
pub fn jmp_absolute<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let hi = bus.read(cpu.regs.pc, AccessType::OperandFetch);
    cpu.regs.pc = Word::from((cpu.temp_addr.lo(), hi));
    cpu.complete_instruction();
}

pub fn jmp_indirect_low<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    cpu.temp_value = Word::from(bus.read(cpu.temp_addr, AccessType::DataRead));
}

/// NMOS `JMP ($xxFF)` bug: the high byte comes from `$xx00` of the same
/// page.
pub fn jmp_indirect_high_wrapped<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let high_addr = cpu.temp_addr.with_lo(cpu.temp_addr.lo() + 1);
    let hi = bus.read(high_addr, AccessType::DataRead);
    cpu.regs.pc = Word::from((cpu.temp_value.lo(), hi));
    cpu.complete_instruction();
}

/// 65C02 corrected indirect jump: a real 16-bit pointer increment.
pub fn jmp_indirect_high<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let hi = bus.read(cpu.temp_addr + 1u16, AccessType::DataRead);
    cpu.regs.pc = Word::from((cpu.temp_value.lo(), hi));
    cpu.complete_instruction();
}

/// `JMP (abs,X)`: fetch the pointer high byte and add X.
pub fn jmp_indexed_pointer<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let hi = bus.read(cpu.regs.pc, AccessType::OperandFetch);
    cpu.regs.pc += 1u16;
    cpu.temp_addr = Word::from((cpu.temp_addr.lo(), hi)) + cpu.regs.x;
}

// ---------------------------------------------------------------------------
// Loads, logic, and arithmetic (terminal ops)
// ---------------------------------------------------------------------------

pub fn lda<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    cpu.regs.a = value;
    cpu.regs.p.set_nz(value);
    cpu.complete_instruction();
}

pub fn ldx<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    cpu.regs.x = value;
    cpu.regs.p.set_nz(value);
    cpu.complete_instruction();
}

pub fn ldy<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    cpu.regs.y = value;
    cpu.regs.p.set_nz(value);
    cpu.complete_instruction();
}

pub fn and<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    cpu.regs.a &= value;
    cpu.regs.p.set_nz(cpu.regs.a);
    cpu.complete_instruction();
}

pub fn ora<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    cpu.regs.a |= value;
    cpu.regs.p.set_nz(cpu.regs.a);
    cpu.complete_instruction();
}

pub fn eor<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    cpu.regs.a ^= value;
    cpu.regs.p.set_nz(cpu.regs.a);
    cpu.complete_instruction();
}

pub fn adc<O: Operand, D: DecimalRule, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    add_with_carry::<D, B>(cpu, value);
    finish_decimal::<O, D, B>(cpu);
}

pub fn sbc<O: Operand, D: DecimalRule, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    sub_with_borrow::<D, B>(cpu, value);
    finish_decimal::<O, D, B>(cpu);
}

fn finish_decimal<O: Operand, D: DecimalRule, B: Bus>(cpu: &mut Cpu<B>) {
    if cpu.regs.p.contains(Flags::Decimal)
        && let Some(addr) = D::penalty::<O, B>(cpu)
    {
        cpu.penalty_addr = addr;
        cpu.insert_after_current(decimal_penalty);
    } else {
        cpu.complete_instruction();
    }
}

/// The extra cycle a CMOS part spends on decimal ADC/SBC.
pub fn decimal_penalty<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.penalty_addr, AccessType::DummyRead);
    cpu.complete_instruction();
}

pub(crate) fn add_with_carry<D: DecimalRule, B: Bus>(cpu: &mut Cpu<B>, value: Byte) {
    let carry_in = u16::from(cpu.regs.p.contains(Flags::Carry));
    let decimal = cpu.regs.p.contains(Flags::Decimal);

    let sum = u16::from(cpu.regs.a) + u16::from(value) + carry_in;
    let binary = Byte((sum & 0x00FF) as u8);

    // overflow when operands had the same sign but the result differs
    cpu.regs
        .p
        .set_overflow(((cpu.regs.a ^ binary) & (value ^ binary) & Byte(0x80)) != Byte::ZERO);

    if decimal {
        // In BCD mode each nibble is a base-10 digit. Add the ones place and
        // correct past 9, fold the carry into the tens place, correct again,
        // then re-pack the digits.
        let mut lo = i16::from(cpu.regs.a.lo()) + i16::from(value.lo()) + carry_in as i16;
        let mut carry_10 = 0i16;
        if lo > 9 {
            lo -= 10;
            carry_10 = 1;
        }

        let mut hi = i16::from(cpu.regs.a.hi()) + i16::from(value.hi()) + carry_10;
        let mut carry_out = false;
        if hi > 9 {
            hi -= 10;
            carry_out = true;
        }

        let result = Byte::from((Nibble::from(lo as u8), Nibble::from(hi as u8)));
        cpu.regs.p.set_carry(carry_out);
        cpu.regs
            .p
            .set_nz(if D::NZ_FROM_BCD { result } else { binary });
        cpu.regs.a = result;
    } else {
        cpu.regs.p.set_carry(sum > 0xFF);
        cpu.regs.p.set_nz(binary);
        cpu.regs.a = binary;
    }
}

pub(crate) fn sub_with_borrow<D: DecimalRule, B: Bus>(cpu: &mut Cpu<B>, value: Byte) {
    let carry_in = u16::from(cpu.regs.p.contains(Flags::Carry));
    let decimal = cpu.regs.p.contains(Flags::Decimal);

    // subtract via addition of the complement
    let sum = u16::from(cpu.regs.a) + (u16::from(value) ^ 0x00FF) + carry_in;
    let binary = Byte((sum & 0x00FF) as u8);

    cpu.regs.p.set_overflow(
        ((cpu.regs.a ^ binary) & ((value ^ Byte(0xFF)) ^ binary) & Byte(0x80)) != Byte::ZERO,
    );

    if decimal {
        // Per-digit subtraction: borrow 10 from the tens place when the ones
        // place would go negative, then propagate the borrow up.
        let borrow_lo = i16::from(carry_in != 1); // carry==1 means no borrow
        let a_lo = i16::from(cpu.regs.a.lo());
        let b_lo = i16::from(value.lo());

        let (lo, borrow_hi) = if a_lo >= b_lo + borrow_lo {
            (a_lo - (b_lo + borrow_lo), 0i16)
        } else {
            (a_lo + 10 - (b_lo + borrow_lo), 1i16)
        };

        let a_hi = i16::from(cpu.regs.a.hi());
        let b_hi = i16::from(value.hi());

        let (hi, carry_out) = if a_hi >= b_hi + borrow_hi {
            (a_hi - (b_hi + borrow_hi), true)
        } else {
            (a_hi + 10 - (b_hi + borrow_hi), false)
        };

        let result = Byte::from((Nibble::from(lo as u8), Nibble::from(hi as u8)));
        cpu.regs.p.set_carry(carry_out);
        cpu.regs
            .p
            .set_nz(if D::NZ_FROM_BCD { result } else { binary });
        cpu.regs.a = result;
    } else {
        cpu.regs.p.set_carry(sum > 0xFF);
        cpu.regs.p.set_nz(binary);
        cpu.regs.a = binary;
    }
}

fn compare<B: Bus>(cpu: &mut Cpu<B>, register: Byte, value: Byte) {
    let (raw, borrow) = register.0.overflowing_sub(value.0);
    cpu.regs.p.set_nz(Byte(raw));
    cpu.regs.p.set_carry(!borrow);
}

pub fn cmp<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    let register = cpu.regs.a;
    compare(cpu, register, value);
    cpu.complete_instruction();
}

pub fn cpx<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    let register = cpu.regs.x;
    compare(cpu, register, value);
    cpu.complete_instruction();
}

pub fn cpy<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    let register = cpu.regs.y;
    compare(cpu, register, value);
    cpu.complete_instruction();
}

pub fn bit<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    cpu.regs.p.set_zero((cpu.regs.a & value) == Byte::ZERO);
    cpu.regs.p.set_negative(value.is_negative());
    cpu.regs.p.set_overflow(value.bit(6));
    cpu.complete_instruction();
}

/// 65C02 `BIT #imm` affects only Z.
pub fn bit_imm<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = Imm::load(cpu, bus);
    cpu.regs.p.set_zero((cpu.regs.a & value) == Byte::ZERO);
    cpu.complete_instruction();
}

/// Multi-byte NOP: consumes the operand read and nothing else.
pub fn nop_read<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let _ = O::load(cpu, bus);
    cpu.complete_instruction();
}

/// Filler cycle of the 8-cycle 65C02 NOPs; address bus parks high.
pub fn wide_nop_read<B: Bus>(_cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(Word(0xFFFF), AccessType::DummyRead);
}

pub fn wide_nop_finish<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(Word(0xFFFF), AccessType::DummyRead);
    cpu.complete_instruction();
}

// ---------------------------------------------------------------------------
// Stores (terminal ops)
// ---------------------------------------------------------------------------

pub fn sta<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.write(cpu.temp_addr, cpu.regs.a, AccessType::DataWrite);
    cpu.complete_instruction();
}

pub fn stx<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.write(cpu.temp_addr, cpu.regs.x, AccessType::DataWrite);
    cpu.complete_instruction();
}

pub fn sty<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.write(cpu.temp_addr, cpu.regs.y, AccessType::DataWrite);
    cpu.complete_instruction();
}

/// 65C02 store-zero.
pub fn stz<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.write(cpu.temp_addr, Byte::ZERO, AccessType::DataWrite);
    cpu.complete_instruction();
}

pub fn sax<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.write(cpu.temp_addr, cpu.regs.a & cpu.regs.x, AccessType::DataWrite);
    cpu.complete_instruction();
}

/// The unstable NMOS stores: the value is `src & (base_high + 1)`, and
/// after a page crossing the computed value replaces the high byte of the
/// effective address.
fn unstable_store<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, src: Byte) {
    let value = src & (cpu.temp_value.hi() + 1);
    let addr = if cpu.temp_value.same_page(cpu.temp_addr) {
        cpu.temp_addr
    } else {
        cpu.temp_addr.with_hi(value)
    };
    bus.write(addr, value, AccessType::DataWrite);
    cpu.complete_instruction();
}

pub fn sha<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let src = cpu.regs.a & cpu.regs.x;
    unstable_store(cpu, bus, src);
}

pub fn shx<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let src = cpu.regs.x;
    unstable_store(cpu, bus, src);
}

pub fn shy<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let src = cpu.regs.y;
    unstable_store(cpu, bus, src);
}

/// TAS/SHS: SP takes A&X, then the unstable store writes from SP.
pub fn tas<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    cpu.regs.sp = cpu.regs.a & cpu.regs.x;
    let src = cpu.regs.sp;
    unstable_store(cpu, bus, src);
}

// ---------------------------------------------------------------------------
// Undocumented NMOS loads and immediates
// ---------------------------------------------------------------------------

pub fn lax<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    cpu.regs.a = value;
    cpu.regs.x = value;
    cpu.regs.p.set_nz(value);
    cpu.complete_instruction();
}

pub fn las<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus) & cpu.regs.sp;
    cpu.regs.a = value;
    cpu.regs.x = value;
    cpu.regs.sp = value;
    cpu.regs.p.set_nz(value);
    cpu.complete_instruction();
}

pub fn anc<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    cpu.regs.a &= value;
    cpu.regs.p.set_nz(cpu.regs.a);
    cpu.regs.p.set_carry(cpu.regs.a.is_negative());
    cpu.complete_instruction();
}

pub fn alr<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let anded = cpu.regs.a & O::load(cpu, bus);
    cpu.regs.p.set_carry(anded.bit(0));
    cpu.regs.a = anded >> 1;
    cpu.regs.p.set_nz(cpu.regs.a);
    cpu.complete_instruction();
}

/// ARR: AND, rotate right through carry, with the bit-6/bit-5 V quirk and
/// a decimal-mode correction pass.
pub fn arr<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let anded = cpu.regs.a & O::load(cpu, bus);
    let carry_in = cpu.regs.p.bit(Flags::Carry);
    let mut result = (anded >> 1) | Byte(carry_in << 7);

    if cpu.regs.p.contains(Flags::Decimal) {
        let high = u16::from(anded.0 & 0xF0);
        let low = anded.0 & 0x0F;
        cpu.regs.p.set_overflow((anded.0 ^ result.0) & 0x40 != 0);
        if low + (low & 0x01) > 5 {
            result = Byte((result.0 & 0xF0) | (result.0.wrapping_add(0x06) & 0x0F));
        }
        let carry_out = high + (high & 0x10) > 0x50;
        cpu.regs.p.set_carry(carry_out);
        if carry_out {
            result += 0x60;
        }
    } else {
        cpu.regs.p.set_carry(result.bit(6));
        cpu.regs.p.set_overflow(result.bit(6) != result.bit(5));
    }

    cpu.regs.a = result;
    cpu.regs.p.set_nz(result);
    cpu.complete_instruction();
}

/// ANE/XAA, unstable: conventional `(A | 0xEE)` magic.
pub fn ane<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    cpu.regs.a = (cpu.regs.a | 0xEE) & cpu.regs.x & value;
    cpu.regs.p.set_nz(cpu.regs.a);
    cpu.complete_instruction();
}

/// LXA, unstable: same magic constant, loads A and X.
pub fn lxa<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    let result = (cpu.regs.a | 0xEE) & value;
    cpu.regs.a = result;
    cpu.regs.x = result;
    cpu.regs.p.set_nz(result);
    cpu.complete_instruction();
}

/// AXS/SBX: X = (A & X) - imm, borrow-free compare semantics on C.
pub fn sbx<O: Operand, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = O::load(cpu, bus);
    let masked = cpu.regs.a & cpu.regs.x;
    let (raw, borrow) = masked.0.overflowing_sub(value.0);
    cpu.regs.x = Byte(raw);
    cpu.regs.p.set_carry(!borrow);
    cpu.regs.p.set_nz(cpu.regs.x);
    cpu.complete_instruction();
}

// ---------------------------------------------------------------------------
// Read-modify-write
// ---------------------------------------------------------------------------

/// The operation applied during an RMW dummy cycle.
pub trait Modify {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte;
}

/// Reads the RMW operand into `temp_value`.
pub fn read_to_value<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    cpu.temp_value = Word::from(bus.read(cpu.temp_addr, AccessType::DataRead));
}

/// NMOS RMW dummy cycle: writes the original value back, then modifies.
pub fn rmw_nmos<M: Modify, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let original = cpu.temp_value.lo();
    bus.write(cpu.temp_addr, original, AccessType::DummyWrite);
    cpu.temp_value = Word::from(M::apply(cpu, original));
}

/// 65C02 RMW dummy cycle: re-reads the address instead of the false store.
pub fn rmw_cmos<M: Modify, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let original = cpu.temp_value.lo();
    bus.read(cpu.temp_addr, AccessType::DummyRead);
    cpu.temp_value = Word::from(M::apply(cpu, original));
}

/// Final RMW cycle: stores the modified value.
pub fn write_value<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.write(cpu.temp_addr, cpu.temp_value.lo(), AccessType::DataWrite);
    cpu.complete_instruction();
}

fn rotate_left<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
    let old_carry = cpu.regs.p.bit(Flags::Carry);
    cpu.regs.p.set_carry(value.bit(7));
    (value << 1) | old_carry
}

fn rotate_right<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
    let old_carry = cpu.regs.p.bit(Flags::Carry) << 7;
    cpu.regs.p.set_carry(value.bit(0));
    (value >> 1) | old_carry
}

pub struct Asl;

impl Modify for Asl {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
        cpu.regs.p.set_carry(value.bit(7));
        let result = value << 1;
        cpu.regs.p.set_nz(result);
        result
    }
}

pub struct Lsr;

impl Modify for Lsr {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
        cpu.regs.p.set_carry(value.bit(0));
        let result = value >> 1;
        cpu.regs.p.set_nz(result);
        result
    }
}

pub struct Rol;

impl Modify for Rol {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
        let result = rotate_left(cpu, value);
        cpu.regs.p.set_nz(result);
        result
    }
}

pub struct Ror;

impl Modify for Ror {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
        let result = rotate_right(cpu, value);
        cpu.regs.p.set_nz(result);
        result
    }
}

pub struct Inc;

impl Modify for Inc {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
        let result = value + 1;
        cpu.regs.p.set_nz(result);
        result
    }
}

pub struct Dec;

impl Modify for Dec {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
        let result = value - 1;
        cpu.regs.p.set_nz(result);
        result
    }
}

/// TSB: Z from A&M, then set A's bits in M.
pub struct Tsb;

impl Modify for Tsb {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
        cpu.regs.p.set_zero((cpu.regs.a & value) == Byte::ZERO);
        value | cpu.regs.a
    }
}

/// TRB: Z from A&M, then clear A's bits in M.
pub struct Trb;

impl Modify for Trb {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
        cpu.regs.p.set_zero((cpu.regs.a & value) == Byte::ZERO);
        value & !cpu.regs.a
    }
}

pub struct Slo;

impl Modify for Slo {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
        cpu.regs.p.set_carry(value.bit(7));
        let result = value << 1;
        cpu.regs.a |= result;
        cpu.regs.p.set_nz(cpu.regs.a);
        result
    }
}

pub struct Rla;

impl Modify for Rla {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
        let result = rotate_left(cpu, value);
        cpu.regs.a &= result;
        cpu.regs.p.set_nz(cpu.regs.a);
        result
    }
}

pub struct Sre;

impl Modify for Sre {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
        cpu.regs.p.set_carry(value.bit(0));
        let result = value >> 1;
        cpu.regs.a ^= result;
        cpu.regs.p.set_nz(cpu.regs.a);
        result
    }
}

/// RRA: rotate right, then ADC of the rotated value (the fresh carry feeds
/// the add; decimal mode is honored the NMOS way).
pub struct Rra;

impl Modify for Rra {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
        let result = rotate_right(cpu, value);
        add_with_carry::<NmosBcd, B>(cpu, result);
        result
    }
}

pub struct Dcp;

impl Modify for Dcp {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
        let result = value - 1;
        let register = cpu.regs.a;
        compare(cpu, register, result);
        result
    }
}

pub struct Isc;

impl Modify for Isc {
    fn apply<B: Bus>(cpu: &mut Cpu<B>, value: Byte) -> Byte {
        let result = value + 1;
        sub_with_borrow::<NmosBcd, B>(cpu, result);
        result
    }
}

/// Rockwell RMB: clear one bit of a zero-page byte, no flags.
pub struct Rmb<const N: u8>;

impl<const N: u8> Modify for Rmb<N> {
    fn apply<B: Bus>(_cpu: &mut Cpu<B>, value: Byte) -> Byte {
        value & !Byte(1 << N)
    }
}

/// Rockwell SMB: set one bit of a zero-page byte, no flags.
pub struct Smb<const N: u8>;

impl<const N: u8> Modify for Smb<N> {
    fn apply<B: Bus>(_cpu: &mut Cpu<B>, value: Byte) -> Byte {
        value | Byte(1 << N)
    }
}

// ---------------------------------------------------------------------------
// Accumulator and implied forms (terminal ops)
// ---------------------------------------------------------------------------

macro_rules! accumulator_op {
    ($name:ident, $modify:ty) => {
        pub fn $name<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
            implied_read(cpu, bus);
            let value = cpu.regs.a;
            cpu.regs.a = <$modify>::apply(cpu, value);
            cpu.complete_instruction();
        }
    };
}

accumulator_op!(asl_a, Asl);
accumulator_op!(lsr_a, Lsr);
accumulator_op!(rol_a, Rol);
accumulator_op!(ror_a, Ror);
accumulator_op!(inc_a, Inc);
accumulator_op!(dec_a, Dec);

pub fn nop<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    implied_read(cpu, bus);
    cpu.complete_instruction();
}

pub fn tax<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    implied_read(cpu, bus);
    cpu.regs.x = cpu.regs.a;
    cpu.regs.p.set_nz(cpu.regs.x);
    cpu.complete_instruction();
}

pub fn txa<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    implied_read(cpu, bus);
    cpu.regs.a = cpu.regs.x;
    cpu.regs.p.set_nz(cpu.regs.a);
    cpu.complete_instruction();
}

pub fn tay<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    implied_read(cpu, bus);
    cpu.regs.y = cpu.regs.a;
    cpu.regs.p.set_nz(cpu.regs.y);
    cpu.complete_instruction();
}

pub fn tya<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    implied_read(cpu, bus);
    cpu.regs.a = cpu.regs.y;
    cpu.regs.p.set_nz(cpu.regs.a);
    cpu.complete_instruction();
}

pub fn tsx<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    implied_read(cpu, bus);
    cpu.regs.x = cpu.regs.sp;
    cpu.regs.p.set_nz(cpu.regs.x);
    cpu.complete_instruction();
}

/// TXS is the one transfer that leaves the flags alone.
pub fn txs<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    implied_read(cpu, bus);
    cpu.regs.sp = cpu.regs.x;
    cpu.complete_instruction();
}

pub fn inx<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    implied_read(cpu, bus);
    cpu.regs.x += 1;
    cpu.regs.p.set_nz(cpu.regs.x);
    cpu.complete_instruction();
}

pub fn iny<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    implied_read(cpu, bus);
    cpu.regs.y += 1;
    cpu.regs.p.set_nz(cpu.regs.y);
    cpu.complete_instruction();
}

pub fn dex<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    implied_read(cpu, bus);
    cpu.regs.x -= 1;
    cpu.regs.p.set_nz(cpu.regs.x);
    cpu.complete_instruction();
}

pub fn dey<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    implied_read(cpu, bus);
    cpu.regs.y -= 1;
    cpu.regs.p.set_nz(cpu.regs.y);
    cpu.complete_instruction();
}

macro_rules! flag_op {
    ($name:ident, $flag:expr, $value:expr) => {
        pub fn $name<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
            implied_read(cpu, bus);
            cpu.regs.p.set($flag, $value);
            cpu.complete_instruction();
        }
    };
}

flag_op!(clc, Flags::Carry, false);
flag_op!(sec, Flags::Carry, true);
flag_op!(cli, Flags::IrqDisable, false);
flag_op!(sei, Flags::IrqDisable, true);
flag_op!(cld, Flags::Decimal, false);
flag_op!(sed, Flags::Decimal, true);
flag_op!(clv, Flags::Overflow, false);

// ---------------------------------------------------------------------------
// Stack
// ---------------------------------------------------------------------------

/// Internal cycle reading the current stack top.
pub fn stack_bump<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(STACK_SPACE_START + cpu.regs.sp, AccessType::DummyRead);
}

pub fn push_a<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = cpu.regs.a;
    cpu.push(bus, value);
    cpu.complete_instruction();
}

pub fn push_x<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = cpu.regs.x;
    cpu.push(bus, value);
    cpu.complete_instruction();
}

pub fn push_y<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = cpu.regs.y;
    cpu.push(bus, value);
    cpu.complete_instruction();
}

/// PHP pushes with B and U set.
pub fn push_p<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = cpu.regs.p.stacked_by_software();
    cpu.push(bus, value);
    cpu.complete_instruction();
}

pub fn pull_a<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = cpu.pull(bus);
    cpu.regs.a = value;
    cpu.regs.p.set_nz(value);
    cpu.complete_instruction();
}

pub fn pull_x<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = cpu.pull(bus);
    cpu.regs.x = value;
    cpu.regs.p.set_nz(value);
    cpu.complete_instruction();
}

pub fn pull_y<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = cpu.pull(bus);
    cpu.regs.y = value;
    cpu.regs.p.set_nz(value);
    cpu.complete_instruction();
}

/// PLP: hardware forces U on and B off in the restored P.
pub fn pull_p<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = cpu.pull(bus);
    cpu.regs.p = Flags::from_stacked(value);
    cpu.complete_instruction();
}

pub fn push_pch<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = cpu.regs.pc.hi();
    cpu.push(bus, value);
}

pub fn push_pcl<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = cpu.regs.pc.lo();
    cpu.push(bus, value);
}

/// Final JSR cycle: fetch the high target byte and jump; the pushed return
/// address points at the JSR's last operand byte.
pub fn jsr_finish<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let hi = bus.read(cpu.regs.pc, AccessType::OperandFetch);
    cpu.regs.pc = Word::from((cpu.temp_addr.lo(), hi));
    cpu.complete_instruction();
}

/// RTI's P restore, mid-sequence.
pub fn pull_p_rti<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = cpu.pull(bus);
    cpu.regs.p = Flags::from_stacked(value);
}

/// Stages the pulled return-address low byte.
pub fn pull_pcl<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    cpu.temp_value = Word::from(cpu.pull(bus));
}

pub fn rts_restore_pc<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let hi = cpu.pull(bus);
    cpu.regs.pc = Word::from((cpu.temp_value.lo(), hi));
}

/// RTS spends its last cycle re-reading the stacked PC before stepping
/// past the JSR operand.
pub fn rts_finish<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.regs.pc, AccessType::DummyRead);
    cpu.regs.pc += 1u16;
    cpu.complete_instruction();
}

pub fn rti_restore_pc<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let hi = cpu.pull(bus);
    cpu.regs.pc = Word::from((cpu.temp_value.lo(), hi));
    cpu.complete_instruction();
}

// ---------------------------------------------------------------------------
// BRK
// ---------------------------------------------------------------------------

/// BRK's padding byte: read and skipped, making BRK a two-byte instruction.
pub fn brk_padding<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.regs.pc, AccessType::OperandFetch);
    cpu.regs.pc += 1u16;
}

/// BRK stacks P with B and U set.
pub fn push_p_brk<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let value = cpu.regs.p.stacked_by_software();
    cpu.push(bus, value);
}

pub fn brk_vector_low<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    cpu.temp_value = Word::from(bus.read(IRQ_VECTOR_LO, AccessType::InterruptVectorRead));
    cpu.regs.p.insert(Flags::IrqDisable);
}

/// 65C02 BRK also clears decimal mode.
pub fn brk_vector_low_cmos<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    cpu.temp_value = Word::from(bus.read(IRQ_VECTOR_LO, AccessType::InterruptVectorRead));
    cpu.regs.p.insert(Flags::IrqDisable);
    cpu.regs.p.remove(Flags::Decimal);
}

pub fn brk_vector_high<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let hi = bus.read(IRQ_VECTOR_HI, AccessType::InterruptVectorRead);
    cpu.regs.pc = Word::from((cpu.temp_value.lo(), hi));
    cpu.complete_instruction();
}

// ---------------------------------------------------------------------------
// Branches
// ---------------------------------------------------------------------------

/// A branch condition, tested against the committed pre-instruction flags.
pub trait Predicate {
    fn taken(p: Flags) -> bool;
}

macro_rules! predicate {
    ($name:ident, $p:ident, $taken:expr) => {
        pub struct $name;

        impl Predicate for $name {
            fn taken($p: Flags) -> bool {
                $taken
            }
        }
    };
}

predicate!(Plus, p, !p.contains(Flags::Negative));
predicate!(Minus, p, p.contains(Flags::Negative));
predicate!(OverflowClear, p, !p.contains(Flags::Overflow));
predicate!(OverflowSet, p, p.contains(Flags::Overflow));
predicate!(CarryClear, p, !p.contains(Flags::Carry));
predicate!(CarrySet, p, p.contains(Flags::Carry));
predicate!(NotEqual, p, !p.contains(Flags::Zero));
predicate!(Equal, p, p.contains(Flags::Zero));
predicate!(Always, _p, true);

fn take_branch<B: Bus>(cpu: &mut Cpu<B>, offset: i8) {
    cpu.branch_origin = cpu.regs.pc;
    cpu.temp_addr = cpu.regs.pc.offset(offset);
    cpu.insert_after_current(branch_taken);
}

/// Conditional branch: not taken completes in two cycles; taken inserts the
/// penalty cycle(s).
pub fn branch<P: Predicate, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let offset = i8::from(bus.read(cpu.regs.pc, AccessType::OperandFetch));
    cpu.regs.pc += 1u16;
    if P::taken(cpu.prev.p) {
        take_branch(cpu, offset);
    } else {
        cpu.complete_instruction();
    }
}

/// First branch penalty: dummy read at the instruction after the branch.
/// On a page crossing a second penalty cycle is appended.
pub fn branch_taken<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.branch_origin, AccessType::DummyRead);
    if cpu.opcode_addr.same_page(cpu.temp_addr) {
        cpu.regs.pc = cpu.temp_addr;
        cpu.complete_instruction();
    } else {
        cpu.append_cycle(branch_crossed);
    }
}

/// Second branch penalty: dummy read at the target low byte on the
/// pre-branch page, then the jump lands.
pub fn branch_crossed<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(
        cpu.temp_addr.with_hi(cpu.opcode_addr.hi()),
        AccessType::DummyRead,
    );
    cpu.regs.pc = cpu.temp_addr;
    cpu.complete_instruction();
}

/// Rockwell BBR/BBS: branch on one bit of the zero-page byte read earlier
/// in the instruction, with the same penalty flow as the flag branches.
pub fn branch_on_bit<const BIT: u8, const SET: bool, B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    let offset = i8::from(bus.read(cpu.regs.pc, AccessType::OperandFetch));
    cpu.regs.pc += 1u16;
    if cpu.temp_value.lo().bit(BIT) == SET {
        take_branch(cpu, offset);
    } else {
        cpu.complete_instruction();
    }
}

// ---------------------------------------------------------------------------
// Halts
// ---------------------------------------------------------------------------

/// NMOS illegal halt.
pub fn jam<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.regs.pc, AccessType::DummyRead);
    cpu.halt(ExecStatus::Jammed);
    cpu.complete_instruction();
}

/// WDC STP: only a hardware reset resumes.
pub fn stop<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.regs.pc, AccessType::DummyRead);
    cpu.halt(ExecStatus::Stopped);
    cpu.complete_instruction();
}

/// WDC WAI: any asserted interrupt resumes, even with I set.
pub fn wait<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B) {
    bus.read(cpu.regs.pc, AccessType::DummyRead);
    cpu.halt(ExecStatus::Waiting);
    cpu.complete_instruction();
}
