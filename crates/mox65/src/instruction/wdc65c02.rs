//! The WDC 65C02 schedule table.
//!
//! Derived from the NMOS base: bug fixes (JMP indirect, RMW dummy reads,
//! decimal flags), the CMOS page-cross penalty target, the added opcodes
//! (STZ, BRA, PHX/PLX/PHY/PLY, TRB/TSB, BIT forms, INC/DEC A, `(zp)`
//! addressing, JMP `(abs,X)`, WAI/STP), and the WDC-documented NOP cycle
//! shapes for every undefined opcode.

use crate::instruction::{InstructionSet, ScheduleTable, sched};
use crate::processor::cpu::Variant;
use crate::processor::micro::*;
use mox::Bus;

use super::mos6502::Nmos6502;

/// Undefined columns that read as single-cycle NOPs on the 65C02. `$x7`
/// and `$xF` stay here too: the bit ops live only on the Rockwell part.
const SINGLE_CYCLE_NOPS: &[u8] = &[
    0x03, 0x13, 0x23, 0x33, 0x43, 0x53, 0x63, 0x73, 0x83, 0x93, 0xA3, 0xB3, 0xC3, 0xD3, 0xE3,
    0xF3, // $x3
    0x0B, 0x1B, 0x2B, 0x3B, 0x4B, 0x5B, 0x6B, 0x7B, 0x8B, 0x9B, 0xAB, 0xBB, 0xEB,
    0xFB, // $xB less WAI/STP
    0x07, 0x17, 0x27, 0x37, 0x47, 0x57, 0x67, 0x77, 0x87, 0x97, 0xA7, 0xB7, 0xC7, 0xD7, 0xE7,
    0xF7, // $x7
    0x0F, 0x1F, 0x2F, 0x3F, 0x4F, 0x5F, 0x6F, 0x7F, 0x8F, 0x9F, 0xAF, 0xBF, 0xCF, 0xDF, 0xEF,
    0xFF, // $xF
];

pub struct Wdc65c02;

impl Wdc65c02 {
    #[must_use]
    pub fn base_table<B: Bus>() -> ScheduleTable<B> {
        let table = Nmos6502::base_table::<B>()
            // BRK clears decimal mode
            .with(
                0x00,
                sched![
                    fetch_opcode,
                    brk_padding,
                    push_pch,
                    push_pcl,
                    push_p_brk,
                    brk_vector_low_cmos,
                    brk_vector_high
                ],
            )
            // Former JAM slots in $x2 become two-cycle immediate skips
            .with(0x02, sched![fetch_opcode, nop_read::<Imm, _>])
            .with(0x22, sched![fetch_opcode, nop_read::<Imm, _>])
            .with(0x42, sched![fetch_opcode, nop_read::<Imm, _>])
            .with(0x62, sched![fetch_opcode, nop_read::<Imm, _>])
            // (zp) addressing
            .with(
                0x12,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    read_pointer_high,
                    ora::<Mem, _>
                ],
            )
            .with(
                0x32,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    read_pointer_high,
                    and::<Mem, _>
                ],
            )
            .with(
                0x52,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    read_pointer_high,
                    eor::<Mem, _>
                ],
            )
            .with(
                0x72,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    read_pointer_high,
                    adc::<Mem, WdcBcd, _>
                ],
            )
            .with(
                0x92,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    read_pointer_high,
                    sta
                ],
            )
            .with(
                0xB2,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    read_pointer_high,
                    lda::<Mem, _>
                ],
            )
            .with(
                0xD2,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    read_pointer_high,
                    cmp::<Mem, _>
                ],
            )
            .with(
                0xF2,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    read_pointer_high,
                    sbc::<Mem, WdcBcd, _>
                ],
            )
            // TSB/TRB
            .with(
                0x04,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    read_to_value,
                    rmw_cmos::<Tsb, _>,
                    write_value
                ],
            )
            .with(
                0x0C,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    fetch_address_high,
                    read_to_value,
                    rmw_cmos::<Tsb, _>,
                    write_value
                ],
            )
            .with(
                0x14,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    read_to_value,
                    rmw_cmos::<Trb, _>,
                    write_value
                ],
            )
            .with(
                0x1C,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    fetch_address_high,
                    read_to_value,
                    rmw_cmos::<Trb, _>,
                    write_value
                ],
            )
            // INC/DEC accumulator
            .with(0x1A, sched![fetch_opcode, inc_a])
            .with(0x3A, sched![fetch_opcode, dec_a])
            // Stack transfers
            .with(0x5A, sched![fetch_opcode, dummy_read_pc, push_y])
            .with(0x7A, sched![fetch_opcode, dummy_read_pc, stack_bump, pull_y])
            .with(0xDA, sched![fetch_opcode, dummy_read_pc, push_x])
            .with(0xFA, sched![fetch_opcode, dummy_read_pc, stack_bump, pull_x])
            // BRA and BIT additions
            .with(0x80, sched![fetch_opcode, branch::<Always, _>])
            .with(0x89, sched![fetch_opcode, bit_imm])
            .with(
                0x34,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    index_x_zero_page,
                    bit::<Mem, _>
                ],
            )
            .with(
                0x3C,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_checked_cmos,
                    bit::<Mem, _>
                ],
            )
            // STZ
            .with(0x64, sched![fetch_opcode, fetch_zero_page_address, stz])
            .with(
                0x74,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    index_x_zero_page,
                    stz
                ],
            )
            .with(
                0x9C,
                sched![fetch_opcode, fetch_address_low, fetch_address_high, stz],
            )
            .with(
                0x9E,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_unchecked,
                    dummy_read_operand,
                    stz
                ],
            )
            // JMP indirect: page-wrap bug fixed at the cost of a cycle
            .with(
                0x6C,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    fetch_address_high,
                    dummy_read_operand,
                    jmp_indirect_low,
                    jmp_indirect_high
                ],
            )
            // JMP (abs,X)
            .with(
                0x7C,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    jmp_indexed_pointer,
                    dummy_read_operand,
                    jmp_indirect_low,
                    jmp_indirect_high
                ],
            )
            // WAI/STP
            .with(0xCB, sched![fetch_opcode, dummy_read_pc, wait])
            .with(0xDB, sched![fetch_opcode, dummy_read_pc, stop])
            // Decimal ADC/SBC: CMOS flag rules plus the penalty cycle
            .with(0x69, sched![fetch_opcode, adc::<Imm, WdcBcd, _>])
            .with(
                0x65,
                sched![fetch_opcode, fetch_zero_page_address, adc::<Mem, WdcBcd, _>],
            )
            .with(
                0x75,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    index_x_zero_page,
                    adc::<Mem, WdcBcd, _>
                ],
            )
            .with(
                0x6D,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    fetch_address_high,
                    adc::<Mem, WdcBcd, _>
                ],
            )
            .with(
                0x7D,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_checked_cmos,
                    adc::<Mem, WdcBcd, _>
                ],
            )
            .with(
                0x79,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_y_checked_cmos,
                    adc::<Mem, WdcBcd, _>
                ],
            )
            .with(
                0x61,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    index_x_pointer,
                    read_pointer_low,
                    read_pointer_high,
                    adc::<Mem, WdcBcd, _>
                ],
            )
            .with(
                0x71,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    index_y_indirect_checked_cmos,
                    adc::<Mem, WdcBcd, _>
                ],
            )
            .with(0xE9, sched![fetch_opcode, sbc::<Imm, WdcBcd, _>])
            .with(
                0xE5,
                sched![fetch_opcode, fetch_zero_page_address, sbc::<Mem, WdcBcd, _>],
            )
            .with(
                0xF5,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    index_x_zero_page,
                    sbc::<Mem, WdcBcd, _>
                ],
            )
            .with(
                0xED,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    fetch_address_high,
                    sbc::<Mem, WdcBcd, _>
                ],
            )
            .with(
                0xFD,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_checked_cmos,
                    sbc::<Mem, WdcBcd, _>
                ],
            )
            .with(
                0xF9,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_y_checked_cmos,
                    sbc::<Mem, WdcBcd, _>
                ],
            )
            .with(
                0xE1,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    index_x_pointer,
                    read_pointer_low,
                    read_pointer_high,
                    sbc::<Mem, WdcBcd, _>
                ],
            )
            .with(
                0xF1,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    index_y_indirect_checked_cmos,
                    sbc::<Mem, WdcBcd, _>
                ],
            )
            // Indexed reads: penalty re-reads the high operand byte
            .with(
                0x1D,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_checked_cmos,
                    ora::<Mem, _>
                ],
            )
            .with(
                0x19,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_y_checked_cmos,
                    ora::<Mem, _>
                ],
            )
            .with(
                0x11,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    index_y_indirect_checked_cmos,
                    ora::<Mem, _>
                ],
            )
            .with(
                0x3D,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_checked_cmos,
                    and::<Mem, _>
                ],
            )
            .with(
                0x39,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_y_checked_cmos,
                    and::<Mem, _>
                ],
            )
            .with(
                0x31,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    index_y_indirect_checked_cmos,
                    and::<Mem, _>
                ],
            )
            .with(
                0x5D,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_checked_cmos,
                    eor::<Mem, _>
                ],
            )
            .with(
                0x59,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_y_checked_cmos,
                    eor::<Mem, _>
                ],
            )
            .with(
                0x51,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    index_y_indirect_checked_cmos,
                    eor::<Mem, _>
                ],
            )
            .with(
                0xBD,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_checked_cmos,
                    lda::<Mem, _>
                ],
            )
            .with(
                0xB9,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_y_checked_cmos,
                    lda::<Mem, _>
                ],
            )
            .with(
                0xB1,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    index_y_indirect_checked_cmos,
                    lda::<Mem, _>
                ],
            )
            .with(
                0xBC,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_checked_cmos,
                    ldy::<Mem, _>
                ],
            )
            .with(
                0xBE,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_y_checked_cmos,
                    ldx::<Mem, _>
                ],
            )
            .with(
                0xDD,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_checked_cmos,
                    cmp::<Mem, _>
                ],
            )
            .with(
                0xD9,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_y_checked_cmos,
                    cmp::<Mem, _>
                ],
            )
            .with(
                0xD1,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    index_y_indirect_checked_cmos,
                    cmp::<Mem, _>
                ],
            )
            // Indexed stores: the fixed dummy cycle also moves to the
            // operand address
            .with(
                0x9D,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_unchecked,
                    dummy_read_operand,
                    sta
                ],
            )
            .with(
                0x99,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_y_unchecked,
                    dummy_read_operand,
                    sta
                ],
            )
            .with(
                0x91,
                sched![
                    fetch_opcode,
                    fetch_pointer,
                    read_pointer_low,
                    index_y_indirect_unchecked,
                    dummy_read_operand,
                    sta
                ],
            )
            // RMW: the NMOS false store becomes a second read
            .with(
                0x06,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    read_to_value,
                    rmw_cmos::<Asl, _>,
                    write_value
                ],
            )
            .with(
                0x16,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    index_x_zero_page,
                    read_to_value,
                    rmw_cmos::<Asl, _>,
                    write_value
                ],
            )
            .with(
                0x0E,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    fetch_address_high,
                    read_to_value,
                    rmw_cmos::<Asl, _>,
                    write_value
                ],
            )
            .with(
                0x1E,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_checked_cmos,
                    read_to_value,
                    rmw_cmos::<Asl, _>,
                    write_value
                ],
            )
            .with(
                0x26,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    read_to_value,
                    rmw_cmos::<Rol, _>,
                    write_value
                ],
            )
            .with(
                0x36,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    index_x_zero_page,
                    read_to_value,
                    rmw_cmos::<Rol, _>,
                    write_value
                ],
            )
            .with(
                0x2E,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    fetch_address_high,
                    read_to_value,
                    rmw_cmos::<Rol, _>,
                    write_value
                ],
            )
            .with(
                0x3E,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_checked_cmos,
                    read_to_value,
                    rmw_cmos::<Rol, _>,
                    write_value
                ],
            )
            .with(
                0x46,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    read_to_value,
                    rmw_cmos::<Lsr, _>,
                    write_value
                ],
            )
            .with(
                0x56,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    index_x_zero_page,
                    read_to_value,
                    rmw_cmos::<Lsr, _>,
                    write_value
                ],
            )
            .with(
                0x4E,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    fetch_address_high,
                    read_to_value,
                    rmw_cmos::<Lsr, _>,
                    write_value
                ],
            )
            .with(
                0x5E,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_checked_cmos,
                    read_to_value,
                    rmw_cmos::<Lsr, _>,
                    write_value
                ],
            )
            .with(
                0x66,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    read_to_value,
                    rmw_cmos::<Ror, _>,
                    write_value
                ],
            )
            .with(
                0x76,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    index_x_zero_page,
                    read_to_value,
                    rmw_cmos::<Ror, _>,
                    write_value
                ],
            )
            .with(
                0x6E,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    fetch_address_high,
                    read_to_value,
                    rmw_cmos::<Ror, _>,
                    write_value
                ],
            )
            .with(
                0x7E,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_checked_cmos,
                    read_to_value,
                    rmw_cmos::<Ror, _>,
                    write_value
                ],
            )
            .with(
                0xC6,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    read_to_value,
                    rmw_cmos::<Dec, _>,
                    write_value
                ],
            )
            .with(
                0xD6,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    index_x_zero_page,
                    read_to_value,
                    rmw_cmos::<Dec, _>,
                    write_value
                ],
            )
            .with(
                0xCE,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    fetch_address_high,
                    read_to_value,
                    rmw_cmos::<Dec, _>,
                    write_value
                ],
            )
            // INC/DEC abs,X keep the seventh cycle even without a crossing
            .with(
                0xDE,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_unchecked,
                    dummy_read_operand,
                    read_to_value,
                    rmw_cmos::<Dec, _>,
                    write_value
                ],
            )
            .with(
                0xE6,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    read_to_value,
                    rmw_cmos::<Inc, _>,
                    write_value
                ],
            )
            .with(
                0xF6,
                sched![
                    fetch_opcode,
                    fetch_zero_page_address,
                    index_x_zero_page,
                    read_to_value,
                    rmw_cmos::<Inc, _>,
                    write_value
                ],
            )
            .with(
                0xEE,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    fetch_address_high,
                    read_to_value,
                    rmw_cmos::<Inc, _>,
                    write_value
                ],
            )
            .with(
                0xFE,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    index_x_unchecked,
                    dummy_read_operand,
                    read_to_value,
                    rmw_cmos::<Inc, _>,
                    write_value
                ],
            )
            // WDC-documented NOP shapes for the remaining undefined slots
            .with(
                0x5C,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    fetch_address_high,
                    wide_nop_read,
                    wide_nop_read,
                    wide_nop_read,
                    wide_nop_read,
                    wide_nop_finish
                ],
            )
            .with(
                0xDC,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    fetch_address_high,
                    wide_nop_read,
                    wide_nop_read,
                    wide_nop_read,
                    wide_nop_read,
                    wide_nop_finish
                ],
            )
            .with(
                0xFC,
                sched![
                    fetch_opcode,
                    fetch_address_low,
                    fetch_address_high,
                    wide_nop_read,
                    wide_nop_read,
                    wide_nop_read,
                    wide_nop_read,
                    wide_nop_finish
                ],
            );

        SINGLE_CYCLE_NOPS
            .iter()
            .fold(table, |table, &opcode| table.with(opcode, sched![nop_single]))
    }
}

impl InstructionSet for Wdc65c02 {
    const VARIANT: Variant = Variant::Wdc65c02;
    const CLEARS_DECIMAL_ON_INTERRUPT: bool = true;

    fn schedules<B: Bus>() -> ScheduleTable<B> {
        Self::base_table::<B>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mox::{Byte, SimpleBus};

    #[test]
    fn added_opcode_cycle_counts() {
        let table = Wdc65c02::base_table::<SimpleBus>();
        let expectations: &[(u8, u8)] = &[
            (0x64, 3), // STZ zp
            (0x9E, 5), // STZ abs,X
            (0x04, 5), // TSB zp
            (0x1C, 6), // TRB abs
            (0x80, 2), // BRA (+penalties at runtime)
            (0x6C, 6), // JMP (abs), fixed
            (0x7C, 6), // JMP (abs,X)
            (0xB2, 5), // LDA (zp)
            (0x92, 5), // STA (zp)
            (0x1E, 6), // ASL abs,X (+p at runtime)
            (0xDE, 7), // DEC abs,X
            (0xCB, 3), // WAI
            (0xDB, 3), // STP
            (0x5C, 8), // 8-cycle NOP
            (0x02, 2), // immediate skip
            (0x44, 3), // zp skip
            (0x03, 1), // single-cycle NOP column
            (0xEB, 1), // SBC duplicate is gone
        ];
        for &(opcode, cycles) in expectations {
            assert_eq!(
                table.schedule(Byte(opcode)).cycles(),
                cycles,
                "opcode {opcode:02X}"
            );
        }
    }

    #[test]
    fn undocumented_nmos_behavior_is_absent() {
        let table = Wdc65c02::base_table::<SimpleBus>();
        // The whole $x3/$x7/$xB/$xF grid decodes to one-cycle NOPs
        for &opcode in super::SINGLE_CYCLE_NOPS {
            assert_eq!(table.schedule(Byte(opcode)).cycles(), 1);
        }
    }
}
