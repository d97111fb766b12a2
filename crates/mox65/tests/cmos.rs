//! WDC 65C02 instruction additions.

use mox::{Bus, TraceBus, Word};
use mox65::instruction::wdc65c02::Wdc65c02;
use mox65::{Byte, Cpu, Flags};

const ORIGIN: Word = Word(0x0400);

fn boot(bus: &mut TraceBus, program: &[u8]) -> Cpu<TraceBus> {
    bus.load_with_reset(ORIGIN, program, ORIGIN);
    let mut cpu: Cpu<TraceBus> = Cpu::with_instruction_set::<Wdc65c02>();
    cpu.reset(bus);
    bus.clear_trace();
    cpu
}

#[test]
fn stz_clears_memory_without_touching_flags() {
    let mut bus = TraceBus::default();
    bus.load(Word(0x0010), &[0xAA]);
    bus.load(Word(0x0210), &[0xBB]);
    let mut cpu = boot(&mut bus, &[0x64, 0x10, 0x9C, 0x10, 0x02]);
    cpu.regs.p.insert(Flags::Zero);
    let p_before = cpu.regs.p;

    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(bus.peek(Word(0x0010)), Byte(0x00));

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(bus.peek(Word(0x0210)), Byte(0x00));
    assert_eq!(cpu.regs.p, p_before);
}

#[test]
fn trb_and_tsb_update_memory_and_z() {
    let mut bus = TraceBus::default();
    bus.load(Word(0x0010), &[0b0011_0110]);
    let mut cpu = boot(&mut bus, &[0x14, 0x10, 0x04, 0x10]); // TRB zp; TSB zp
    cpu.regs.a = Byte(0b0000_1111);

    assert_eq!(cpu.step(&mut bus), 5);
    assert_eq!(bus.peek(Word(0x0010)), Byte(0b0011_0000));
    assert!(!cpu.regs.p.contains(Flags::Zero)); // A & M was nonzero

    assert_eq!(cpu.step(&mut bus), 5);
    assert_eq!(bus.peek(Word(0x0010)), Byte(0b0011_1111));
    assert!(cpu.regs.p.contains(Flags::Zero)); // A & M was zero this time
}

#[test]
fn phx_ply_moves_a_value_through_the_stack() {
    let mut bus = TraceBus::default();
    let mut cpu = boot(&mut bus, &[0xDA, 0x7A]); // PHX; PLY
    cpu.regs.x = Byte(0x80);

    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.y, Byte(0x80));
    assert!(cpu.regs.p.contains(Flags::Negative));
}

#[test]
fn phy_plx_moves_a_value_through_the_stack() {
    let mut bus = TraceBus::default();
    let mut cpu = boot(&mut bus, &[0x5A, 0xFA]); // PHY; PLX
    cpu.regs.y = Byte(0x00);

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.x, Byte(0x00));
    assert!(cpu.regs.p.contains(Flags::Zero));
}

#[test]
fn inc_and_dec_accumulator() {
    let mut bus = TraceBus::default();
    let mut cpu = boot(&mut bus, &[0x1A, 0x3A, 0x3A]); // INC A; DEC A; DEC A
    cpu.regs.a = Byte(0xFF);

    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(cpu.regs.a, Byte(0x00));
    assert!(cpu.regs.p.contains(Flags::Zero));

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, Byte(0xFE));
    assert!(cpu.regs.p.contains(Flags::Negative));
}

#[test]
fn bra_always_branches() {
    let mut bus = TraceBus::default();
    let mut cpu = boot(&mut bus, &[0x80, 0x04]); // BRA +4
    cpu.regs.p.insert(Flags::Zero); // no flag combination matters

    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.regs.pc, Word(0x0406));
}

#[test]
fn bit_immediate_touches_only_z() {
    let mut bus = TraceBus::default();
    let mut cpu = boot(&mut bus, &[0x89, 0xC0]); // BIT #$C0
    cpu.regs.a = Byte(0x00);
    cpu.regs.p.remove(Flags::Negative);
    cpu.regs.p.remove(Flags::Overflow);

    assert_eq!(cpu.step(&mut bus), 2);
    assert!(cpu.regs.p.contains(Flags::Zero));
    // N and V would both be set by the absolute form
    assert!(!cpu.regs.p.contains(Flags::Negative));
    assert!(!cpu.regs.p.contains(Flags::Overflow));
}

#[test]
fn bit_absolute_still_copies_m_into_n_and_v() {
    let mut bus = TraceBus::default();
    bus.load(Word(0x0210), &[0xC0]);
    let mut cpu = boot(&mut bus, &[0x2C, 0x10, 0x02]); // BIT abs
    cpu.regs.a = Byte(0x00);

    cpu.step(&mut bus);
    assert!(cpu.regs.p.contains(Flags::Zero));
    assert!(cpu.regs.p.contains(Flags::Negative));
    assert!(cpu.regs.p.contains(Flags::Overflow));
}

#[test]
fn zero_page_indirect_addressing() {
    let mut bus = TraceBus::default();
    bus.load(Word(0x0010), &[0x34, 0x12]); // pointer -> $1234
    bus.load(Word(0x1234), &[0x77]);
    let mut cpu = boot(&mut bus, &[0xB2, 0x10, 0x92, 0x10]); // LDA (zp); STA (zp)

    assert_eq!(cpu.step(&mut bus), 5);
    assert_eq!(cpu.regs.a, Byte(0x77));

    cpu.regs.a = Byte(0x88);
    assert_eq!(cpu.step(&mut bus), 5);
    assert_eq!(bus.peek(Word(0x1234)), Byte(0x88));
}

#[test]
fn zero_page_indirect_pointer_wraps() {
    let mut bus = TraceBus::default();
    bus.load(Word(0x00FF), &[0x34]);
    bus.load(Word(0x0000), &[0x12]); // high byte wraps to $00
    bus.load(Word(0x1234), &[0x66]);
    let mut cpu = boot(&mut bus, &[0xB2, 0xFF]); // LDA ($FF)

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, Byte(0x66));
}

#[test]
fn jmp_absolute_indexed_indirect() {
    let mut bus = TraceBus::default();
    bus.load(Word(0x0214), &[0x00, 0x90]); // table entry -> $9000
    let mut cpu = boot(&mut bus, &[0x7C, 0x10, 0x02]); // JMP ($0210,X)
    cpu.regs.x = Byte(0x04);

    assert_eq!(cpu.step(&mut bus), 6);
    assert_eq!(cpu.regs.pc, Word(0x9000));
}

#[test]
fn former_jam_slots_fall_through_as_nops() {
    let mut bus = TraceBus::default();
    let mut cpu = boot(&mut bus, &[0x02, 0x42, 0xA9, 0x01]); // NOP #; LDA #1

    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(cpu.regs.pc, Word(0x0402)); // operand consumed

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, Byte(0x01));
}
