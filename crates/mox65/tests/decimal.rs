//! Decimal-mode arithmetic: NMOS vs CMOS flags and the CMOS penalty cycle.

use mox::{TraceBus, Word};
use mox65::instruction::mos6502::Nmos6502;
use mox65::instruction::rockwell65c02::Rockwell65c02;
use mox65::instruction::wdc65c02::Wdc65c02;
use mox65::{Byte, Cpu, Flags, InstructionSet};

const ORIGIN: Word = Word(0x0400);

fn boot<S: InstructionSet>(bus: &mut TraceBus, program: &[u8]) -> Cpu<TraceBus> {
    bus.load_with_reset(ORIGIN, program, ORIGIN);
    let mut cpu: Cpu<TraceBus> = Cpu::with_instruction_set::<S>();
    cpu.reset(bus);
    bus.clear_trace();
    cpu
}

#[test]
fn binary_adc_follows_the_standard_rules() {
    let mut bus = TraceBus::default();
    let mut cpu = boot::<Nmos6502>(&mut bus, &[0x69, 0x50]); // ADC #$50
    cpu.regs.a = Byte(0x50);

    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(cpu.regs.a, Byte(0xA0));
    assert!(cpu.regs.p.contains(Flags::Overflow));
    assert!(cpu.regs.p.contains(Flags::Negative));
    assert!(!cpu.regs.p.contains(Flags::Carry));
    assert!(!cpu.regs.p.contains(Flags::Zero));
}

#[test]
fn binary_sbc_borrows_through_carry() {
    let mut bus = TraceBus::default();
    let mut cpu = boot::<Nmos6502>(&mut bus, &[0xE9, 0x01]); // SBC #$01
    cpu.regs.a = Byte(0x00);
    cpu.regs.p.set_carry(true);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, Byte(0xFF));
    assert!(!cpu.regs.p.contains(Flags::Carry)); // borrow happened
    assert!(cpu.regs.p.contains(Flags::Negative));
}

#[test]
fn nmos_decimal_adc_takes_no_extra_cycle() {
    let mut bus = TraceBus::default();
    let mut cpu = boot::<Nmos6502>(&mut bus, &[0x69, 0x01]); // ADC #$01
    cpu.regs.a = Byte(0x99);
    cpu.regs.p.insert(Flags::Decimal);

    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(cpu.regs.a, Byte(0x00));
    assert!(cpu.regs.p.contains(Flags::Carry));
    // N/Z reflect the binary intermediate 0x9A, not the BCD result
    assert!(!cpu.regs.p.contains(Flags::Zero));
    assert!(cpu.regs.p.contains(Flags::Negative));
}

#[test]
fn wdc_decimal_adc_spends_a_cycle_at_007f() {
    let mut bus = TraceBus::default();
    let mut cpu = boot::<Wdc65c02>(&mut bus, &[0x69, 0x01]);
    cpu.regs.a = Byte(0x99);
    cpu.regs.p.insert(Flags::Decimal);

    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.regs.a, Byte(0x00));
    assert!(cpu.regs.p.contains(Flags::Carry));
    // CMOS flags come from the corrected result
    assert!(cpu.regs.p.contains(Flags::Zero));
    assert!(!cpu.regs.p.contains(Flags::Negative));
    assert_eq!(bus.addresses()[2], Word(0x007F));
}

#[test]
fn rockwell_decimal_immediate_penalty_reads_0059() {
    let mut bus = TraceBus::default();
    let mut cpu = boot::<Rockwell65c02>(&mut bus, &[0x69, 0x01]);
    cpu.regs.a = Byte(0x99);
    cpu.regs.p.insert(Flags::Decimal);

    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(bus.addresses()[2], Word(0x0059));
}

#[test]
fn cmos_decimal_penalty_uses_the_operand_address_otherwise() {
    let mut bus = TraceBus::default();
    bus.load(Word(0x0010), &[0x01]);
    let mut cpu = boot::<Wdc65c02>(&mut bus, &[0x65, 0x10]); // ADC $10
    cpu.regs.a = Byte(0x18);
    cpu.regs.p.insert(Flags::Decimal);

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.a, Byte(0x19));
    assert_eq!(bus.addresses()[3], Word(0x0010));
}

#[test]
fn decimal_sbc_differs_in_flags_between_families() {
    // BCD 0x00 - 0x01 = 0x99 with a borrow; binary intermediate is 0xFF
    let mut bus = TraceBus::default();
    let mut cpu = boot::<Nmos6502>(&mut bus, &[0xE9, 0x01]);
    cpu.regs.a = Byte(0x00);
    cpu.regs.p.insert(Flags::Decimal);
    cpu.regs.p.set_carry(true);

    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(cpu.regs.a, Byte(0x99));
    assert!(!cpu.regs.p.contains(Flags::Carry));
    assert!(cpu.regs.p.contains(Flags::Negative)); // binary 0xFF

    let mut bus = TraceBus::default();
    let mut cpu = boot::<Wdc65c02>(&mut bus, &[0xE9, 0x01]);
    cpu.regs.a = Byte(0x00);
    cpu.regs.p.insert(Flags::Decimal);
    cpu.regs.p.set_carry(true);

    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.regs.a, Byte(0x99));
    assert!(!cpu.regs.p.contains(Flags::Carry));
    assert!(cpu.regs.p.contains(Flags::Negative)); // BCD 0x99 is negative too
}

#[test]
fn decimal_mode_is_ignored_where_unsupported() {
    // CLD/SED round-trip, and D has no effect on CMP
    let mut bus = TraceBus::default();
    let mut cpu = boot::<Nmos6502>(&mut bus, &[0xF8, 0xC9, 0x10, 0xD8]);
    cpu.regs.a = Byte(0x10);

    cpu.step(&mut bus);
    assert!(cpu.regs.p.contains(Flags::Decimal));

    cpu.step(&mut bus);
    assert!(cpu.regs.p.contains(Flags::Zero));
    assert!(cpu.regs.p.contains(Flags::Carry));

    cpu.step(&mut bus);
    assert!(!cpu.regs.p.contains(Flags::Decimal));
}
