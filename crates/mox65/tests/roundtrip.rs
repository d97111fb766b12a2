//! Round-trip laws: stack pairs, subroutine linkage, and flag toggles.

use mox::{Bus, TraceBus, Word};
use mox65::instruction::mos6502::Nmos6502;
use mox65::{Byte, Cpu, Flags};

const ORIGIN: Word = Word(0x0400);

fn boot(bus: &mut TraceBus, program: &[u8]) -> Cpu<TraceBus> {
    bus.load_with_reset(ORIGIN, program, ORIGIN);
    let mut cpu: Cpu<TraceBus> = Cpu::with_instruction_set::<Nmos6502>();
    cpu.reset(bus);
    bus.clear_trace();
    cpu
}

#[test]
fn pha_pla_is_identity_on_a_with_fresh_nz() {
    let mut bus = TraceBus::default();
    let mut cpu = boot(&mut bus, &[0x48, 0xA9, 0x00, 0x68]); // PHA; LDA #0; PLA
    cpu.regs.a = Byte(0x80);

    let sp_before = cpu.regs.sp;
    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.regs.sp, sp_before - 1);

    cpu.step(&mut bus);
    assert!(cpu.regs.p.contains(Flags::Zero));

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.a, Byte(0x80));
    assert_eq!(cpu.regs.sp, sp_before);
    assert!(cpu.regs.p.contains(Flags::Negative));
    assert!(!cpu.regs.p.contains(Flags::Zero));
}

#[test]
fn php_plp_round_trips_p_with_forced_u_and_cleared_b() {
    let mut bus = TraceBus::default();
    let mut cpu = boot(&mut bus, &[0x08, 0x28]); // PHP; PLP
    cpu.regs.p = Flags::Carry | Flags::Decimal | Flags::Negative;

    cpu.step(&mut bus);
    let stacked = bus.peek(Word(0x01FD));
    assert_eq!(stacked & Flags::Break, Byte(0x10)); // pushed with B set
    assert_eq!(stacked & Flags::Unused, Byte(0x20));

    cpu.step(&mut bus);
    assert!(cpu.regs.p.contains(Flags::Carry));
    assert!(cpu.regs.p.contains(Flags::Decimal));
    assert!(cpu.regs.p.contains(Flags::Negative));
    assert!(cpu.regs.p.contains(Flags::Unused)); // U forced on
    assert!(!cpu.regs.p.contains(Flags::Break)); // B forced off
}

#[test]
fn jsr_rts_returns_to_the_following_instruction() {
    let mut bus = TraceBus::default();
    // $0400: JSR $0500 / $0403: LDA #$55    $0500: RTS
    let mut cpu = boot(&mut bus, &[0x20, 0x00, 0x05, 0xA9, 0x55]);
    bus.load(Word(0x0500), &[0x60]);

    assert_eq!(cpu.step(&mut bus), 6);
    assert_eq!(cpu.regs.pc, Word(0x0500));

    assert_eq!(cpu.step(&mut bus), 6);
    assert_eq!(cpu.regs.pc, Word(0x0403));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, Byte(0x55));
}

#[test]
fn rti_restores_flags_and_pc_from_the_frame() {
    let mut bus = TraceBus::default();
    let mut cpu = boot(&mut bus, &[0x40]); // RTI
    // Hand-build an interrupt frame: PC $1234, P with C|Z (plus B, which
    // must vanish on pull)
    cpu.regs.sp = Byte(0xFA);
    bus.load(Word(0x01FB), &[0x13, 0x34, 0x12]);

    assert_eq!(cpu.step(&mut bus), 6);
    assert_eq!(cpu.regs.pc, Word(0x1234));
    assert_eq!(cpu.regs.sp, Byte(0xFD));
    assert!(cpu.regs.p.contains(Flags::Carry));
    assert!(cpu.regs.p.contains(Flags::Zero));
    assert!(!cpu.regs.p.contains(Flags::Break));
    assert!(cpu.regs.p.contains(Flags::Unused));
}

#[test]
fn flag_instructions_toggle_deterministically() {
    let mut bus = TraceBus::default();
    let mut cpu = boot(
        &mut bus,
        &[0x38, 0x18, 0xF8, 0xD8, 0x78, 0x58, 0xB8], // SEC CLC SED CLD SEI CLI CLV
    );
    cpu.regs.p.insert(Flags::Overflow);

    cpu.step(&mut bus);
    assert!(cpu.regs.p.contains(Flags::Carry));
    cpu.step(&mut bus);
    assert!(!cpu.regs.p.contains(Flags::Carry));

    cpu.step(&mut bus);
    assert!(cpu.regs.p.contains(Flags::Decimal));
    cpu.step(&mut bus);
    assert!(!cpu.regs.p.contains(Flags::Decimal));

    cpu.step(&mut bus);
    assert!(cpu.regs.p.contains(Flags::IrqDisable));
    cpu.step(&mut bus);
    assert!(!cpu.regs.p.contains(Flags::IrqDisable));

    cpu.step(&mut bus);
    assert!(!cpu.regs.p.contains(Flags::Overflow));
}

#[test]
fn pushes_move_sp_down_by_the_bytes_pushed() {
    let mut bus = TraceBus::default();
    let mut cpu = boot(&mut bus, &[0x48, 0x08, 0x20, 0x00, 0x05]); // PHA PHP JSR

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.sp, Byte(0xFC));
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.sp, Byte(0xFB));
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.sp, Byte(0xF9));
}

#[test]
fn stack_wraps_within_page_one() {
    let mut bus = TraceBus::default();
    let mut cpu = boot(&mut bus, &[0x48, 0x48]); // PHA PHA
    cpu.regs.sp = Byte(0x00);
    cpu.regs.a = Byte(0xAA);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.sp, Byte(0xFF));
    assert_eq!(bus.peek(Word(0x0100)), Byte(0xAA));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.sp, Byte(0xFE));
    assert_eq!(bus.peek(Word(0x01FF)), Byte(0xAA));
}
