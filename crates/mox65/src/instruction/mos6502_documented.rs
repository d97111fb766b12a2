//! NMOS 6502 with the undocumented opcodes stubbed out.
//!
//! Hosts that never want undocumented behavior (halts included) get NOP
//! stubs instead: each stub keeps the read skeleton of its addressing mode
//! so operand bytes are still consumed, but no register or memory effect
//! and no store ever happens. The undocumented opcodes that already decode
//! to NOP shapes in the base table stay as they are.

use crate::instruction::{InstructionSet, Schedule, ScheduleTable, sched};
use crate::processor::cpu::Variant;
use crate::processor::micro::*;
use mox::Bus;

use super::mos6502::Nmos6502;

const JAM_SLOTS: &[u8] = &[
    0x02, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2,
];
const IMMEDIATE_SLOTS: &[u8] = &[0x0B, 0x2B, 0x4B, 0x6B, 0x8B, 0xAB, 0xCB, 0xEB];
const ZERO_PAGE_SLOTS: &[u8] = &[0x07, 0x27, 0x47, 0x67, 0x87, 0xA7, 0xC7, 0xE7];
const ZERO_PAGE_X_SLOTS: &[u8] = &[0x17, 0x37, 0x57, 0x77, 0xD7, 0xF7];
const ZERO_PAGE_Y_SLOTS: &[u8] = &[0x97, 0xB7];
const ABSOLUTE_SLOTS: &[u8] = &[0x0F, 0x2F, 0x4F, 0x6F, 0x8F, 0xAF, 0xCF, 0xEF];
const ABSOLUTE_X_SLOTS: &[u8] = &[0x1F, 0x3F, 0x5F, 0x7F, 0x9C, 0xDF, 0xFF];
const ABSOLUTE_Y_SLOTS: &[u8] = &[
    0x1B, 0x3B, 0x5B, 0x7B, 0x9B, 0x9E, 0x9F, 0xBB, 0xBF, 0xDB, 0xFB,
];
const INDEXED_INDIRECT_SLOTS: &[u8] = &[0x03, 0x23, 0x43, 0x63, 0x83, 0xA3, 0xC3, 0xE3];
const INDIRECT_INDEXED_SLOTS: &[u8] = &[0x13, 0x33, 0x53, 0x73, 0x93, 0xB3, 0xD3, 0xF3];

fn stub_all<B: Bus>(
    table: ScheduleTable<B>,
    opcodes: &[u8],
    schedule: Schedule<B>,
) -> ScheduleTable<B> {
    opcodes
        .iter()
        .fold(table, |table, &opcode| table.with(opcode, schedule))
}

pub struct Nmos6502Documented;

impl Nmos6502Documented {
    #[must_use]
    pub fn base_table<B: Bus>() -> ScheduleTable<B> {
        let mut table = Nmos6502::base_table::<B>();

        table = stub_all(table, JAM_SLOTS, sched![fetch_opcode, nop]);
        table = stub_all(table, IMMEDIATE_SLOTS, sched![fetch_opcode, nop_read::<Imm, _>]);
        table = stub_all(
            table,
            ZERO_PAGE_SLOTS,
            sched![fetch_opcode, fetch_zero_page_address, nop_read::<Mem, _>],
        );
        table = stub_all(
            table,
            ZERO_PAGE_X_SLOTS,
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                nop_read::<Mem, _>
            ],
        );
        table = stub_all(
            table,
            ZERO_PAGE_Y_SLOTS,
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_y_zero_page,
                nop_read::<Mem, _>
            ],
        );
        table = stub_all(
            table,
            ABSOLUTE_SLOTS,
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                nop_read::<Mem, _>
            ],
        );
        table = stub_all(
            table,
            ABSOLUTE_X_SLOTS,
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                nop_read::<Mem, _>
            ],
        );
        table = stub_all(
            table,
            ABSOLUTE_Y_SLOTS,
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_checked,
                nop_read::<Mem, _>
            ],
        );
        table = stub_all(
            table,
            INDEXED_INDIRECT_SLOTS,
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                nop_read::<Mem, _>
            ],
        );
        stub_all(
            table,
            INDIRECT_INDEXED_SLOTS,
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_checked,
                nop_read::<Mem, _>
            ],
        )
    }
}

impl InstructionSet for Nmos6502Documented {
    const VARIANT: Variant = Variant::Nmos6502Documented;
    const CLEARS_DECIMAL_ON_INTERRUPT: bool = false;

    fn schedules<B: Bus>() -> ScheduleTable<B> {
        Self::base_table::<B>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mox::{Byte, SimpleBus, Word};

    #[test]
    fn jam_slots_keep_running() {
        let mut bus = SimpleBus::default();
        let mut cpu = crate::Cpu::with_program::<Nmos6502Documented>(
            &mut bus,
            Word(0x0400),
            &[0x02, 0xA9, 0x42],
            Word(0x0400),
        );

        assert_eq!(cpu.step(&mut bus), 2);
        assert_eq!(cpu.regs.status, crate::ExecStatus::Running);

        cpu.step(&mut bus);
        assert_eq!(cpu.regs.a, Byte(0x42));
    }

    #[test]
    fn stubbed_stores_leave_memory_alone() {
        let mut bus = SimpleBus::default();
        // SAX $10 would store A&X on the full NMOS table
        let mut cpu = crate::Cpu::with_program::<Nmos6502Documented>(
            &mut bus,
            Word(0x0400),
            &[0x87, 0x10],
            Word(0x0400),
        );
        cpu.regs.a = Byte(0xFF);
        cpu.regs.x = Byte(0xFF);

        assert_eq!(cpu.step(&mut bus), 3);
        assert_eq!(bus.peek(Word(0x0010)), Byte(0x00));
    }

    #[test]
    fn stubbed_rmw_combos_keep_register_state() {
        let mut bus = SimpleBus::default();
        bus.load(Word(0x0010), &[0x81]);
        // SLO $10 would shift memory and OR into A on the full table
        let mut cpu = crate::Cpu::with_program::<Nmos6502Documented>(
            &mut bus,
            Word(0x0400),
            &[0x07, 0x10],
            Word(0x0400),
        );

        cpu.step(&mut bus);
        assert_eq!(cpu.regs.a, Byte(0x00));
        assert_eq!(bus.peek(Word(0x0010)), Byte(0x81));
        assert!(!cpu.regs.p.contains(crate::Flags::Carry));
    }
}
