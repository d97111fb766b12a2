//! End-to-end programs checked cycle-by-cycle against the silicon traces.

use mox::{Bus, TraceBus, Word};
use mox65::instruction::mos6502::Nmos6502;
use mox65::instruction::wdc65c02::Wdc65c02;
use mox65::{Byte, Cpu, ExecStatus, Flags, InstructionSet};

const ORIGIN: Word = Word(0x0400);

fn boot<S: InstructionSet>(bus: &mut TraceBus, origin: Word, program: &[u8]) -> Cpu<TraceBus> {
    bus.load_with_reset(origin, program, origin);
    let mut cpu: Cpu<TraceBus> = Cpu::with_instruction_set::<S>();
    cpu.reset(bus);
    bus.clear_trace();
    cpu
}

#[test]
fn immediate_load_then_absolute_store() {
    for variant in [
        Cpu::with_variant(mox65::Variant::Nmos6502),
        Cpu::with_variant(mox65::Variant::Nmos6502Documented),
        Cpu::with_variant(mox65::Variant::Wdc65c02),
        Cpu::with_variant(mox65::Variant::Rockwell65c02),
    ] {
        let mut cpu = variant;
        let mut bus = TraceBus::default();
        bus.load_with_reset(ORIGIN, &[0xA9, 0x42, 0x8D, 0x00, 0x02], ORIGIN);
        cpu.reset(&mut bus);
        bus.clear_trace();

        assert_eq!(cpu.step(&mut bus), 2);
        assert_eq!(cpu.regs.a, Byte(0x42));
        assert!(!cpu.regs.p.contains(Flags::Negative));
        assert!(!cpu.regs.p.contains(Flags::Zero));
        assert_eq!(cpu.regs.pc, Word(0x0402));

        assert_eq!(cpu.step(&mut bus), 4);
        assert_eq!(bus.peek(Word(0x0200)), Byte(0x42));
        assert_eq!(cpu.regs.pc, Word(0x0405));
        assert_eq!(bus.cycles(), 6);
    }
}

#[test]
fn page_crossing_indexed_load_nmos_vs_cmos() {
    let mut bus = TraceBus::default();
    bus.load(Word(0x1310), &[0x99]);
    let mut cpu = boot::<Nmos6502>(&mut bus, ORIGIN, &[0xBD, 0xF0, 0x12]);
    cpu.regs.x = Byte(0x20);

    assert_eq!(cpu.step(&mut bus), 5);
    assert_eq!(cpu.regs.a, Byte(0x99));
    assert_eq!(bus.addresses()[3], Word(0x1210)); // uncorrected page

    let mut bus = TraceBus::default();
    bus.load(Word(0x1310), &[0x99]);
    let mut cpu = boot::<Wdc65c02>(&mut bus, ORIGIN, &[0xBD, 0xF0, 0x12]);
    cpu.regs.x = Byte(0x20);

    assert_eq!(cpu.step(&mut bus), 5);
    assert_eq!(cpu.regs.a, Byte(0x99));
    assert_eq!(bus.addresses()[3], Word(0x0402)); // the high operand byte
}

#[test]
fn jmp_indirect_page_wrap_bug_and_fix() {
    let mut bus = TraceBus::default();
    bus.load(Word(0x12FF), &[0x34]);
    bus.load(Word(0x1200), &[0x56]);
    bus.load(Word(0x1300), &[0x78]);
    let mut cpu = boot::<Nmos6502>(&mut bus, ORIGIN, &[0x6C, 0xFF, 0x12]);

    let nmos_cycles = cpu.step(&mut bus);
    assert_eq!(nmos_cycles, 5);
    assert_eq!(cpu.regs.pc, Word(0x5634)); // high byte came from $1200

    let mut bus = TraceBus::default();
    bus.load(Word(0x12FF), &[0x34]);
    bus.load(Word(0x1200), &[0x56]);
    bus.load(Word(0x1300), &[0x78]);
    let mut cpu = boot::<Wdc65c02>(&mut bus, ORIGIN, &[0x6C, 0xFF, 0x12]);

    let cmos_cycles = cpu.step(&mut bus);
    assert_eq!(cmos_cycles, nmos_cycles + 1);
    assert_eq!(cpu.regs.pc, Word(0x7834)); // correct read of $1300
}

#[test]
fn branch_across_page_boundary_trace() {
    let mut bus = TraceBus::default();
    let mut cpu = boot::<Nmos6502>(&mut bus, Word(0x04FE), &[0xF0, 0x02]); // BEQ +2
    cpu.regs.p.insert(Flags::Zero);

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, Word(0x0502));
    assert_eq!(
        bus.addresses(),
        [
            Word(0x04FE), // opcode
            Word(0x04FF), // offset
            Word(0x0500), // first penalty: instruction after the branch
            Word(0x0402), // second penalty: pre-branch page, target low byte
        ]
    );
}

#[test]
fn brk_decimal_flag_nmos_vs_cmos() {
    let mut bus = TraceBus::default();
    bus.load(Word(0xFFFE), &[0x00, 0x80]);
    let mut cpu = boot::<Nmos6502>(&mut bus, ORIGIN, &[0x00, 0x00]);
    cpu.regs.p.insert(Flags::Decimal);

    assert_eq!(cpu.step(&mut bus), 7);
    assert_eq!(cpu.regs.pc, Word(0x8000));
    assert!(cpu.regs.p.contains(Flags::Decimal)); // NMOS leaves D alone
    assert!(cpu.regs.p.contains(Flags::IrqDisable));
    let stacked = bus.peek(Word(0x01FB));
    assert_eq!(stacked & Flags::Break, Byte(0x10));
    assert_eq!(stacked & Flags::Unused, Byte(0x20));
    assert_eq!(stacked & Flags::Decimal, Byte(0x08));

    let mut bus = TraceBus::default();
    bus.load(Word(0xFFFE), &[0x00, 0x80]);
    let mut cpu = boot::<Wdc65c02>(&mut bus, ORIGIN, &[0x00, 0x00]);
    cpu.regs.p.insert(Flags::Decimal);

    assert_eq!(cpu.step(&mut bus), 7);
    assert_eq!(cpu.regs.pc, Word(0x8000));
    assert!(!cpu.regs.p.contains(Flags::Decimal)); // 65C02 clears D
    assert!(cpu.regs.p.contains(Flags::IrqDisable));
    let stacked = bus.peek(Word(0x01FB));
    assert_eq!(stacked & Flags::Break, Byte(0x10));
    assert_eq!(stacked & Flags::Decimal, Byte(0x08)); // stacked copy keeps D
}

#[test]
fn wai_wakes_for_irq_despite_the_i_flag() {
    let mut bus = TraceBus::default();
    bus.load(Word(0xFFFE), &[0x00, 0x80]);
    let mut cpu = boot::<Wdc65c02>(&mut bus, ORIGIN, &[0xCB]); // WAI
    cpu.regs.p.insert(Flags::Decimal);
    assert!(cpu.regs.p.contains(Flags::IrqDisable));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.status, ExecStatus::Waiting);
    assert_eq!(cpu.step(&mut bus), 0); // parked

    cpu.signal_irq();
    assert!(cpu.handle_pending_interrupt(&mut bus));

    assert_eq!(cpu.regs.status, ExecStatus::Running);
    assert_eq!(cpu.regs.pc, Word(0x8000));
    assert_eq!(cpu.regs.sp, Byte(0xFA));
    assert!(cpu.regs.p.contains(Flags::IrqDisable));
    assert!(!cpu.regs.p.contains(Flags::Decimal)); // cleared on entry
    // Stacked P has B clear, U set
    let stacked = bus.peek(Word(0x01FB));
    assert_eq!(stacked & Flags::Break, Byte(0x00));
    assert_eq!(stacked & Flags::Unused, Byte(0x20));
}
