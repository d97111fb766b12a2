//! Prints the exact bus trace of a page-crossing indexed load on both
//! processor families, cycle by cycle.

use mox::{TraceBus, Word};
use mox65::instruction::{mos6502::Nmos6502, wdc65c02::Wdc65c02};
use mox65::{Byte, Cpu, InstructionSet, Variant};

const ORIGIN: Word = Word(0x0400);

fn trace_one<S: InstructionSet>(label: &str) {
    let mut bus = TraceBus::default();
    // LDA $12F0,X with X=$20 crosses into page $13
    bus.load_with_reset(ORIGIN, &[0xBD, 0xF0, 0x12], ORIGIN);
    bus.load(Word(0x1310), &[0x99]);

    let mut cpu: Cpu<TraceBus> = Cpu::with_instruction_set::<S>();
    cpu.reset(&mut bus);
    cpu.regs.x = Byte(0x20);
    bus.clear_trace();

    let cycles = cpu.step(&mut bus);

    println!("{label}: {cycles} cycles, A=${:02X}", u8::from(cpu.regs.a));
    for (cycle, activity) in bus.trace().iter().enumerate() {
        let direction = if activity.is_read() { "R" } else { "W" };
        println!(
            "  cycle {} {direction} ${:04X} = ${:02X} ({:?})",
            cycle + 1,
            u16::from(activity.addr),
            u8::from(activity.value),
            activity.access,
        );
    }
}

fn main() {
    env_logger::init();

    trace_one::<Nmos6502>("NMOS 6502");
    trace_one::<Wdc65c02>("WDC 65C02");

    // The runtime selector builds the same cores
    let cpu: Cpu<TraceBus> = Cpu::with_variant(Variant::Rockwell65c02);
    println!("runtime-selected variant: {:?}", cpu.variant());
}
