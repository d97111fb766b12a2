//! The Rockwell 65C02 schedule table.
//!
//! Derived from the WDC table: adds the RMB/SMB zero-page bit ops and the
//! BBR/BBS bit branches. WAI and STP do not exist on this part, so `$CB`
//! and `$DB` fall back to the undefined-column single-cycle NOP, and the
//! immediate-mode decimal penalty reads `$0059`.

use crate::instruction::{InstructionSet, ScheduleTable, sched};
use crate::processor::cpu::Variant;
use crate::processor::micro::*;
use mox::Bus;

use super::wdc65c02::Wdc65c02;

macro_rules! zp_bit_op {
    ($modify:ty) => {
        sched![
            fetch_opcode,
            fetch_zero_page_address,
            read_to_value,
            rmw_cmos::<$modify, _>,
            write_value
        ]
    };
}

macro_rules! bit_branch {
    ($bit:literal, $set:literal) => {
        sched![
            fetch_opcode,
            fetch_zero_page_address,
            read_to_value,
            dummy_read_effective,
            branch_on_bit::<$bit, $set, _>
        ]
    };
}

pub struct Rockwell65c02;

impl Rockwell65c02 {
    #[must_use]
    pub fn base_table<B: Bus>() -> ScheduleTable<B> {
        Wdc65c02::base_table::<B>()
            // RMB0-RMB7
            .with(0x07, zp_bit_op!(Rmb<0>))
            .with(0x17, zp_bit_op!(Rmb<1>))
            .with(0x27, zp_bit_op!(Rmb<2>))
            .with(0x37, zp_bit_op!(Rmb<3>))
            .with(0x47, zp_bit_op!(Rmb<4>))
            .with(0x57, zp_bit_op!(Rmb<5>))
            .with(0x67, zp_bit_op!(Rmb<6>))
            .with(0x77, zp_bit_op!(Rmb<7>))
            // SMB0-SMB7
            .with(0x87, zp_bit_op!(Smb<0>))
            .with(0x97, zp_bit_op!(Smb<1>))
            .with(0xA7, zp_bit_op!(Smb<2>))
            .with(0xB7, zp_bit_op!(Smb<3>))
            .with(0xC7, zp_bit_op!(Smb<4>))
            .with(0xD7, zp_bit_op!(Smb<5>))
            .with(0xE7, zp_bit_op!(Smb<6>))
            .with(0xF7, zp_bit_op!(Smb<7>))
            // BBR0-BBR7
            .with(0x0F, bit_branch!(0, false))
            .with(0x1F, bit_branch!(1, false))
            .with(0x2F, bit_branch!(2, false))
            .with(0x3F, bit_branch!(3, false))
            .with(0x4F, bit_branch!(4, false))
            .with(0x5F, bit_branch!(5, false))
            .with(0x6F, bit_branch!(6, false))
            .with(0x7F, bit_branch!(7, false))
            // BBS0-BBS7
            .with(0x8F, bit_branch!(0, true))
            .with(0x9F, bit_branch!(1, true))
            .with(0xAF, bit_branch!(2, true))
            .with(0xBF, bit_branch!(3, true))
            .with(0xCF, bit_branch!(4, true))
            .with(0xDF, bit_branch!(5, true))
            .with(0xEF, bit_branch!(6, true))
            .with(0xFF, bit_branch!(7, true))
            // No WAI/STP on this part
            .with(0xCB, sched![fetch_opcode, nop_single])
            .with(0xDB, sched![fetch_opcode, nop_single])
            // Rockwell's immediate decimal penalty address differs
            .with(0x69, sched![fetch_opcode, adc::<Imm, RockwellBcd, _>])
            .with(0xE9, sched![fetch_opcode, sbc::<Imm, RockwellBcd, _>])
    }
}

impl InstructionSet for Rockwell65c02 {
    const VARIANT: Variant = Variant::Rockwell65c02;
    const CLEARS_DECIMAL_ON_INTERRUPT: bool = true;

    fn schedules<B: Bus>() -> ScheduleTable<B> {
        Self::base_table::<B>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mox::{Byte, SimpleBus, Word};

    #[test]
    fn bit_op_cycle_counts() {
        let table = Rockwell65c02::base_table::<SimpleBus>();
        assert_eq!(table.schedule(Byte(0x07)).cycles(), 5); // RMB0 zp
        assert_eq!(table.schedule(Byte(0xF7)).cycles(), 5); // SMB7 zp
        assert_eq!(table.schedule(Byte(0x0F)).cycles(), 5); // BBR0 (+penalties)
        assert_eq!(table.schedule(Byte(0xCB)).cycles(), 2); // no WAI here
    }

    #[test]
    fn rmb_and_smb_flip_single_bits_in_memory() {
        let mut bus = SimpleBus::default();
        bus.load(Word(0x0010), &[0b1111_1111]);
        // RMB3 $10; SMB0 $10 would re-set bit 0, so use a fresh cell
        let mut cpu = crate::Cpu::with_program::<Rockwell65c02>(
            &mut bus,
            Word(0x0400),
            &[0x37, 0x10, 0x87, 0x20],
            Word(0x0400),
        );

        assert_eq!(cpu.step(&mut bus), 5);
        assert_eq!(bus.peek(Word(0x0010)), Byte(0b1111_0111));

        assert_eq!(cpu.step(&mut bus), 5);
        assert_eq!(bus.peek(Word(0x0020)), Byte(0b0000_0001));
    }

    #[test]
    fn bbs_branches_on_a_set_bit() {
        let mut bus = SimpleBus::default();
        bus.load(Word(0x0010), &[0b0000_1000]);
        // BBS3 $10, +4
        let mut cpu = crate::Cpu::with_program::<Rockwell65c02>(
            &mut bus,
            Word(0x0400),
            &[0xBF, 0x10, 0x04],
            Word(0x0400),
        );

        let cycles = cpu.step(&mut bus);
        assert_eq!(cycles, 6);
        assert_eq!(cpu.regs.pc, Word(0x0407));
    }

    #[test]
    fn bbr_falls_through_on_a_set_bit() {
        let mut bus = SimpleBus::default();
        bus.load(Word(0x0010), &[0b0000_1000]);
        // BBR3 $10, +4
        let mut cpu = crate::Cpu::with_program::<Rockwell65c02>(
            &mut bus,
            Word(0x0400),
            &[0x3F, 0x10, 0x04],
            Word(0x0400),
        );

        let cycles = cpu.step(&mut bus);
        assert_eq!(cycles, 5);
        assert_eq!(cpu.regs.pc, Word(0x0403));
    }
}
