//! The original NMOS MOS 6502 schedule table, undocumented opcodes live.

use crate::instruction::{InstructionSet, ScheduleTable, sched};
use crate::processor::cpu::Variant;
use crate::processor::micro::*;
use mox::Bus;

pub struct Nmos6502;

impl Nmos6502 {
    /// Builds the canonical NMOS table: every documented opcode plus the
    /// undocumented set (LAX/SAX/RMW combos, the unstable stores, and the
    /// JAM halts).
    #[must_use]
    pub fn base_table<B: Bus>() -> ScheduleTable<B> {
        ScheduleTable::new([
            // 0x00 BRK
            sched![
                fetch_opcode,
                brk_padding,
                push_pch,
                push_pcl,
                push_p_brk,
                brk_vector_low,
                brk_vector_high
            ],
            // 0x01 ORA (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                ora::<Mem, _>
            ],
            // 0x02 JAM
            sched![fetch_opcode, jam],
            // 0x03 SLO (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                read_to_value,
                rmw_nmos::<Slo, _>,
                write_value
            ],
            // 0x04 NOP zp
            sched![fetch_opcode, fetch_zero_page_address, nop_read::<Mem, _>],
            // 0x05 ORA zp
            sched![fetch_opcode, fetch_zero_page_address, ora::<Mem, _>],
            // 0x06 ASL zp
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                read_to_value,
                rmw_nmos::<Asl, _>,
                write_value
            ],
            // 0x07 SLO zp
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                read_to_value,
                rmw_nmos::<Slo, _>,
                write_value
            ],
            // 0x08 PHP
            sched![fetch_opcode, dummy_read_pc, push_p],
            // 0x09 ORA #
            sched![fetch_opcode, ora::<Imm, _>],
            // 0x0A ASL A
            sched![fetch_opcode, asl_a],
            // 0x0B ANC #
            sched![fetch_opcode, anc::<Imm, _>],
            // 0x0C NOP abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                nop_read::<Mem, _>
            ],
            // 0x0D ORA abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                ora::<Mem, _>
            ],
            // 0x0E ASL abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                read_to_value,
                rmw_nmos::<Asl, _>,
                write_value
            ],
            // 0x0F SLO abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                read_to_value,
                rmw_nmos::<Slo, _>,
                write_value
            ],
            // 0x10 BPL
            sched![fetch_opcode, branch::<Plus, _>],
            // 0x11 ORA (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_checked,
                ora::<Mem, _>
            ],
            // 0x12 JAM
            sched![fetch_opcode, jam],
            // 0x13 SLO (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Slo, _>,
                write_value
            ],
            // 0x14 NOP zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                nop_read::<Mem, _>
            ],
            // 0x15 ORA zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                ora::<Mem, _>
            ],
            // 0x16 ASL zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                read_to_value,
                rmw_nmos::<Asl, _>,
                write_value
            ],
            // 0x17 SLO zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                read_to_value,
                rmw_nmos::<Slo, _>,
                write_value
            ],
            // 0x18 CLC
            sched![fetch_opcode, clc],
            // 0x19 ORA abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_checked,
                ora::<Mem, _>
            ],
            // 0x1A NOP (undocumented)
            sched![fetch_opcode, nop],
            // 0x1B SLO abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Slo, _>,
                write_value
            ],
            // 0x1C NOP abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                nop_read::<Mem, _>
            ],
            // 0x1D ORA abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                ora::<Mem, _>
            ],
            // 0x1E ASL abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Asl, _>,
                write_value
            ],
            // 0x1F SLO abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Slo, _>,
                write_value
            ],
            // 0x20 JSR
            sched![
                fetch_opcode,
                fetch_address_low,
                stack_bump,
                push_pch,
                push_pcl,
                jsr_finish
            ],
            // 0x21 AND (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                and::<Mem, _>
            ],
            // 0x22 JAM
            sched![fetch_opcode, jam],
            // 0x23 RLA (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                read_to_value,
                rmw_nmos::<Rla, _>,
                write_value
            ],
            // 0x24 BIT zp
            sched![fetch_opcode, fetch_zero_page_address, bit::<Mem, _>],
            // 0x25 AND zp
            sched![fetch_opcode, fetch_zero_page_address, and::<Mem, _>],
            // 0x26 ROL zp
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                read_to_value,
                rmw_nmos::<Rol, _>,
                write_value
            ],
            // 0x27 RLA zp
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                read_to_value,
                rmw_nmos::<Rla, _>,
                write_value
            ],
            // 0x28 PLP
            sched![fetch_opcode, dummy_read_pc, stack_bump, pull_p],
            // 0x29 AND #
            sched![fetch_opcode, and::<Imm, _>],
            // 0x2A ROL A
            sched![fetch_opcode, rol_a],
            // 0x2B ANC #
            sched![fetch_opcode, anc::<Imm, _>],
            // 0x2C BIT abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                bit::<Mem, _>
            ],
            // 0x2D AND abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                and::<Mem, _>
            ],
            // 0x2E ROL abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                read_to_value,
                rmw_nmos::<Rol, _>,
                write_value
            ],
            // 0x2F RLA abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                read_to_value,
                rmw_nmos::<Rla, _>,
                write_value
            ],
            // 0x30 BMI
            sched![fetch_opcode, branch::<Minus, _>],
            // 0x31 AND (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_checked,
                and::<Mem, _>
            ],
            // 0x32 JAM
            sched![fetch_opcode, jam],
            // 0x33 RLA (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Rla, _>,
                write_value
            ],
            // 0x34 NOP zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                nop_read::<Mem, _>
            ],
            // 0x35 AND zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                and::<Mem, _>
            ],
            // 0x36 ROL zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                read_to_value,
                rmw_nmos::<Rol, _>,
                write_value
            ],
            // 0x37 RLA zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                read_to_value,
                rmw_nmos::<Rla, _>,
                write_value
            ],
            // 0x38 SEC
            sched![fetch_opcode, sec],
            // 0x39 AND abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_checked,
                and::<Mem, _>
            ],
            // 0x3A NOP (undocumented)
            sched![fetch_opcode, nop],
            // 0x3B RLA abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Rla, _>,
                write_value
            ],
            // 0x3C NOP abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                nop_read::<Mem, _>
            ],
            // 0x3D AND abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                and::<Mem, _>
            ],
            // 0x3E ROL abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Rol, _>,
                write_value
            ],
            // 0x3F RLA abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Rla, _>,
                write_value
            ],
            // 0x40 RTI
            sched![
                fetch_opcode,
                dummy_read_pc,
                stack_bump,
                pull_p_rti,
                pull_pcl,
                rti_restore_pc
            ],
            // 0x41 EOR (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                eor::<Mem, _>
            ],
            // 0x42 JAM
            sched![fetch_opcode, jam],
            // 0x43 SRE (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                read_to_value,
                rmw_nmos::<Sre, _>,
                write_value
            ],
            // 0x44 NOP zp
            sched![fetch_opcode, fetch_zero_page_address, nop_read::<Mem, _>],
            // 0x45 EOR zp
            sched![fetch_opcode, fetch_zero_page_address, eor::<Mem, _>],
            // 0x46 LSR zp
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                read_to_value,
                rmw_nmos::<Lsr, _>,
                write_value
            ],
            // 0x47 SRE zp
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                read_to_value,
                rmw_nmos::<Sre, _>,
                write_value
            ],
            // 0x48 PHA
            sched![fetch_opcode, dummy_read_pc, push_a],
            // 0x49 EOR #
            sched![fetch_opcode, eor::<Imm, _>],
            // 0x4A LSR A
            sched![fetch_opcode, lsr_a],
            // 0x4B ALR #
            sched![fetch_opcode, alr::<Imm, _>],
            // 0x4C JMP abs
            sched![fetch_opcode, fetch_address_low, jmp_absolute],
            // 0x4D EOR abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                eor::<Mem, _>
            ],
            // 0x4E LSR abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                read_to_value,
                rmw_nmos::<Lsr, _>,
                write_value
            ],
            // 0x4F SRE abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                read_to_value,
                rmw_nmos::<Sre, _>,
                write_value
            ],
            // 0x50 BVC
            sched![fetch_opcode, branch::<OverflowClear, _>],
            // 0x51 EOR (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_checked,
                eor::<Mem, _>
            ],
            // 0x52 JAM
            sched![fetch_opcode, jam],
            // 0x53 SRE (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Sre, _>,
                write_value
            ],
            // 0x54 NOP zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                nop_read::<Mem, _>
            ],
            // 0x55 EOR zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                eor::<Mem, _>
            ],
            // 0x56 LSR zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                read_to_value,
                rmw_nmos::<Lsr, _>,
                write_value
            ],
            // 0x57 SRE zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                read_to_value,
                rmw_nmos::<Sre, _>,
                write_value
            ],
            // 0x58 CLI
            sched![fetch_opcode, cli],
            // 0x59 EOR abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_checked,
                eor::<Mem, _>
            ],
            // 0x5A NOP (undocumented)
            sched![fetch_opcode, nop],
            // 0x5B SRE abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Sre, _>,
                write_value
            ],
            // 0x5C NOP abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                nop_read::<Mem, _>
            ],
            // 0x5D EOR abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                eor::<Mem, _>
            ],
            // 0x5E LSR abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Lsr, _>,
                write_value
            ],
            // 0x5F SRE abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Sre, _>,
                write_value
            ],
            // 0x60 RTS
            sched![
                fetch_opcode,
                dummy_read_pc,
                stack_bump,
                pull_pcl,
                rts_restore_pc,
                rts_finish
            ],
            // 0x61 ADC (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                adc::<Mem, NmosBcd, _>
            ],
            // 0x62 JAM
            sched![fetch_opcode, jam],
            // 0x63 RRA (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                read_to_value,
                rmw_nmos::<Rra, _>,
                write_value
            ],
            // 0x64 NOP zp
            sched![fetch_opcode, fetch_zero_page_address, nop_read::<Mem, _>],
            // 0x65 ADC zp
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                adc::<Mem, NmosBcd, _>
            ],
            // 0x66 ROR zp
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                read_to_value,
                rmw_nmos::<Ror, _>,
                write_value
            ],
            // 0x67 RRA zp
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                read_to_value,
                rmw_nmos::<Rra, _>,
                write_value
            ],
            // 0x68 PLA
            sched![fetch_opcode, dummy_read_pc, stack_bump, pull_a],
            // 0x69 ADC #
            sched![fetch_opcode, adc::<Imm, NmosBcd, _>],
            // 0x6A ROR A
            sched![fetch_opcode, ror_a],
            // 0x6B ARR #
            sched![fetch_opcode, arr::<Imm, _>],
            // 0x6C JMP (abs), page-wrap bug
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                jmp_indirect_low,
                jmp_indirect_high_wrapped
            ],
            // 0x6D ADC abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                adc::<Mem, NmosBcd, _>
            ],
            // 0x6E ROR abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                read_to_value,
                rmw_nmos::<Ror, _>,
                write_value
            ],
            // 0x6F RRA abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                read_to_value,
                rmw_nmos::<Rra, _>,
                write_value
            ],
            // 0x70 BVS
            sched![fetch_opcode, branch::<OverflowSet, _>],
            // 0x71 ADC (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_checked,
                adc::<Mem, NmosBcd, _>
            ],
            // 0x72 JAM
            sched![fetch_opcode, jam],
            // 0x73 RRA (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Rra, _>,
                write_value
            ],
            // 0x74 NOP zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                nop_read::<Mem, _>
            ],
            // 0x75 ADC zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                adc::<Mem, NmosBcd, _>
            ],
            // 0x76 ROR zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                read_to_value,
                rmw_nmos::<Ror, _>,
                write_value
            ],
            // 0x77 RRA zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                read_to_value,
                rmw_nmos::<Rra, _>,
                write_value
            ],
            // 0x78 SEI
            sched![fetch_opcode, sei],
            // 0x79 ADC abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_checked,
                adc::<Mem, NmosBcd, _>
            ],
            // 0x7A NOP (undocumented)
            sched![fetch_opcode, nop],
            // 0x7B RRA abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Rra, _>,
                write_value
            ],
            // 0x7C NOP abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                nop_read::<Mem, _>
            ],
            // 0x7D ADC abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                adc::<Mem, NmosBcd, _>
            ],
            // 0x7E ROR abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Ror, _>,
                write_value
            ],
            // 0x7F RRA abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Rra, _>,
                write_value
            ],
            // 0x80 NOP #
            sched![fetch_opcode, nop_read::<Imm, _>],
            // 0x81 STA (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                sta
            ],
            // 0x82 NOP #
            sched![fetch_opcode, nop_read::<Imm, _>],
            // 0x83 SAX (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                sax
            ],
            // 0x84 STY zp
            sched![fetch_opcode, fetch_zero_page_address, sty],
            // 0x85 STA zp
            sched![fetch_opcode, fetch_zero_page_address, sta],
            // 0x86 STX zp
            sched![fetch_opcode, fetch_zero_page_address, stx],
            // 0x87 SAX zp
            sched![fetch_opcode, fetch_zero_page_address, sax],
            // 0x88 DEY
            sched![fetch_opcode, dey],
            // 0x89 NOP #
            sched![fetch_opcode, nop_read::<Imm, _>],
            // 0x8A TXA
            sched![fetch_opcode, txa],
            // 0x8B ANE # (unstable)
            sched![fetch_opcode, ane::<Imm, _>],
            // 0x8C STY abs
            sched![fetch_opcode, fetch_address_low, fetch_address_high, sty],
            // 0x8D STA abs
            sched![fetch_opcode, fetch_address_low, fetch_address_high, sta],
            // 0x8E STX abs
            sched![fetch_opcode, fetch_address_low, fetch_address_high, stx],
            // 0x8F SAX abs
            sched![fetch_opcode, fetch_address_low, fetch_address_high, sax],
            // 0x90 BCC
            sched![fetch_opcode, branch::<CarryClear, _>],
            // 0x91 STA (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_unchecked,
                dummy_read_crossed,
                sta
            ],
            // 0x92 JAM
            sched![fetch_opcode, jam],
            // 0x93 SHA (zp),Y (unstable)
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_unchecked,
                dummy_read_crossed,
                sha
            ],
            // 0x94 STY zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                sty
            ],
            // 0x95 STA zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                sta
            ],
            // 0x96 STX zp,Y
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_y_zero_page,
                stx
            ],
            // 0x97 SAX zp,Y
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_y_zero_page,
                sax
            ],
            // 0x98 TYA
            sched![fetch_opcode, tya],
            // 0x99 STA abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_unchecked,
                dummy_read_crossed,
                sta
            ],
            // 0x9A TXS
            sched![fetch_opcode, txs],
            // 0x9B TAS abs,Y (unstable)
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_unchecked,
                dummy_read_crossed,
                tas
            ],
            // 0x9C SHY abs,X (unstable)
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_unchecked,
                dummy_read_crossed,
                shy
            ],
            // 0x9D STA abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_unchecked,
                dummy_read_crossed,
                sta
            ],
            // 0x9E SHX abs,Y (unstable)
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_unchecked,
                dummy_read_crossed,
                shx
            ],
            // 0x9F SHA abs,Y (unstable)
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_unchecked,
                dummy_read_crossed,
                sha
            ],
            // 0xA0 LDY #
            sched![fetch_opcode, ldy::<Imm, _>],
            // 0xA1 LDA (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                lda::<Mem, _>
            ],
            // 0xA2 LDX #
            sched![fetch_opcode, ldx::<Imm, _>],
            // 0xA3 LAX (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                lax::<Mem, _>
            ],
            // 0xA4 LDY zp
            sched![fetch_opcode, fetch_zero_page_address, ldy::<Mem, _>],
            // 0xA5 LDA zp
            sched![fetch_opcode, fetch_zero_page_address, lda::<Mem, _>],
            // 0xA6 LDX zp
            sched![fetch_opcode, fetch_zero_page_address, ldx::<Mem, _>],
            // 0xA7 LAX zp
            sched![fetch_opcode, fetch_zero_page_address, lax::<Mem, _>],
            // 0xA8 TAY
            sched![fetch_opcode, tay],
            // 0xA9 LDA #
            sched![fetch_opcode, lda::<Imm, _>],
            // 0xAA TAX
            sched![fetch_opcode, tax],
            // 0xAB LXA # (unstable)
            sched![fetch_opcode, lxa::<Imm, _>],
            // 0xAC LDY abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                ldy::<Mem, _>
            ],
            // 0xAD LDA abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                lda::<Mem, _>
            ],
            // 0xAE LDX abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                ldx::<Mem, _>
            ],
            // 0xAF LAX abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                lax::<Mem, _>
            ],
            // 0xB0 BCS
            sched![fetch_opcode, branch::<CarrySet, _>],
            // 0xB1 LDA (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_checked,
                lda::<Mem, _>
            ],
            // 0xB2 JAM
            sched![fetch_opcode, jam],
            // 0xB3 LAX (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_checked,
                lax::<Mem, _>
            ],
            // 0xB4 LDY zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                ldy::<Mem, _>
            ],
            // 0xB5 LDA zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                lda::<Mem, _>
            ],
            // 0xB6 LDX zp,Y
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_y_zero_page,
                ldx::<Mem, _>
            ],
            // 0xB7 LAX zp,Y
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_y_zero_page,
                lax::<Mem, _>
            ],
            // 0xB8 CLV
            sched![fetch_opcode, clv],
            // 0xB9 LDA abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_checked,
                lda::<Mem, _>
            ],
            // 0xBA TSX
            sched![fetch_opcode, tsx],
            // 0xBB LAS abs,Y (unstable)
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_checked,
                las::<Mem, _>
            ],
            // 0xBC LDY abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                ldy::<Mem, _>
            ],
            // 0xBD LDA abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                lda::<Mem, _>
            ],
            // 0xBE LDX abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_checked,
                ldx::<Mem, _>
            ],
            // 0xBF LAX abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_checked,
                lax::<Mem, _>
            ],
            // 0xC0 CPY #
            sched![fetch_opcode, cpy::<Imm, _>],
            // 0xC1 CMP (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                cmp::<Mem, _>
            ],
            // 0xC2 NOP #
            sched![fetch_opcode, nop_read::<Imm, _>],
            // 0xC3 DCP (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                read_to_value,
                rmw_nmos::<Dcp, _>,
                write_value
            ],
            // 0xC4 CPY zp
            sched![fetch_opcode, fetch_zero_page_address, cpy::<Mem, _>],
            // 0xC5 CMP zp
            sched![fetch_opcode, fetch_zero_page_address, cmp::<Mem, _>],
            // 0xC6 DEC zp
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                read_to_value,
                rmw_nmos::<Dec, _>,
                write_value
            ],
            // 0xC7 DCP zp
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                read_to_value,
                rmw_nmos::<Dcp, _>,
                write_value
            ],
            // 0xC8 INY
            sched![fetch_opcode, iny],
            // 0xC9 CMP #
            sched![fetch_opcode, cmp::<Imm, _>],
            // 0xCA DEX
            sched![fetch_opcode, dex],
            // 0xCB SBX #
            sched![fetch_opcode, sbx::<Imm, _>],
            // 0xCC CPY abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                cpy::<Mem, _>
            ],
            // 0xCD CMP abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                cmp::<Mem, _>
            ],
            // 0xCE DEC abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                read_to_value,
                rmw_nmos::<Dec, _>,
                write_value
            ],
            // 0xCF DCP abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                read_to_value,
                rmw_nmos::<Dcp, _>,
                write_value
            ],
            // 0xD0 BNE
            sched![fetch_opcode, branch::<NotEqual, _>],
            // 0xD1 CMP (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_checked,
                cmp::<Mem, _>
            ],
            // 0xD2 JAM
            sched![fetch_opcode, jam],
            // 0xD3 DCP (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Dcp, _>,
                write_value
            ],
            // 0xD4 NOP zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                nop_read::<Mem, _>
            ],
            // 0xD5 CMP zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                cmp::<Mem, _>
            ],
            // 0xD6 DEC zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                read_to_value,
                rmw_nmos::<Dec, _>,
                write_value
            ],
            // 0xD7 DCP zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                read_to_value,
                rmw_nmos::<Dcp, _>,
                write_value
            ],
            // 0xD8 CLD
            sched![fetch_opcode, cld],
            // 0xD9 CMP abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_checked,
                cmp::<Mem, _>
            ],
            // 0xDA NOP (undocumented)
            sched![fetch_opcode, nop],
            // 0xDB DCP abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Dcp, _>,
                write_value
            ],
            // 0xDC NOP abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                nop_read::<Mem, _>
            ],
            // 0xDD CMP abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                cmp::<Mem, _>
            ],
            // 0xDE DEC abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Dec, _>,
                write_value
            ],
            // 0xDF DCP abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Dcp, _>,
                write_value
            ],
            // 0xE0 CPX #
            sched![fetch_opcode, cpx::<Imm, _>],
            // 0xE1 SBC (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                sbc::<Mem, NmosBcd, _>
            ],
            // 0xE2 NOP #
            sched![fetch_opcode, nop_read::<Imm, _>],
            // 0xE3 ISC (zp,X)
            sched![
                fetch_opcode,
                fetch_pointer,
                index_x_pointer,
                read_pointer_low,
                read_pointer_high,
                read_to_value,
                rmw_nmos::<Isc, _>,
                write_value
            ],
            // 0xE4 CPX zp
            sched![fetch_opcode, fetch_zero_page_address, cpx::<Mem, _>],
            // 0xE5 SBC zp
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                sbc::<Mem, NmosBcd, _>
            ],
            // 0xE6 INC zp
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                read_to_value,
                rmw_nmos::<Inc, _>,
                write_value
            ],
            // 0xE7 ISC zp
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                read_to_value,
                rmw_nmos::<Isc, _>,
                write_value
            ],
            // 0xE8 INX
            sched![fetch_opcode, inx],
            // 0xE9 SBC #
            sched![fetch_opcode, sbc::<Imm, NmosBcd, _>],
            // 0xEA NOP
            sched![fetch_opcode, nop],
            // 0xEB SBC # (undocumented duplicate)
            sched![fetch_opcode, sbc::<Imm, NmosBcd, _>],
            // 0xEC CPX abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                cpx::<Mem, _>
            ],
            // 0xED SBC abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                sbc::<Mem, NmosBcd, _>
            ],
            // 0xEE INC abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                read_to_value,
                rmw_nmos::<Inc, _>,
                write_value
            ],
            // 0xEF ISC abs
            sched![
                fetch_opcode,
                fetch_address_low,
                fetch_address_high,
                read_to_value,
                rmw_nmos::<Isc, _>,
                write_value
            ],
            // 0xF0 BEQ
            sched![fetch_opcode, branch::<Equal, _>],
            // 0xF1 SBC (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_checked,
                sbc::<Mem, NmosBcd, _>
            ],
            // 0xF2 JAM
            sched![fetch_opcode, jam],
            // 0xF3 ISC (zp),Y
            sched![
                fetch_opcode,
                fetch_pointer,
                read_pointer_low,
                index_y_indirect_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Isc, _>,
                write_value
            ],
            // 0xF4 NOP zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                nop_read::<Mem, _>
            ],
            // 0xF5 SBC zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                sbc::<Mem, NmosBcd, _>
            ],
            // 0xF6 INC zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                read_to_value,
                rmw_nmos::<Inc, _>,
                write_value
            ],
            // 0xF7 ISC zp,X
            sched![
                fetch_opcode,
                fetch_zero_page_address,
                index_x_zero_page,
                read_to_value,
                rmw_nmos::<Isc, _>,
                write_value
            ],
            // 0xF8 SED
            sched![fetch_opcode, sed],
            // 0xF9 SBC abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_checked,
                sbc::<Mem, NmosBcd, _>
            ],
            // 0xFA NOP (undocumented)
            sched![fetch_opcode, nop],
            // 0xFB ISC abs,Y
            sched![
                fetch_opcode,
                fetch_address_low,
                index_y_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Isc, _>,
                write_value
            ],
            // 0xFC NOP abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                nop_read::<Mem, _>
            ],
            // 0xFD SBC abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_checked,
                sbc::<Mem, NmosBcd, _>
            ],
            // 0xFE INC abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Inc, _>,
                write_value
            ],
            // 0xFF ISC abs,X
            sched![
                fetch_opcode,
                fetch_address_low,
                index_x_unchecked,
                dummy_read_crossed,
                read_to_value,
                rmw_nmos::<Isc, _>,
                write_value
            ],
        ])
    }
}

impl InstructionSet for Nmos6502 {
    const VARIANT: Variant = Variant::Nmos6502;
    const CLEARS_DECIMAL_ON_INTERRUPT: bool = false;

    fn schedules<B: Bus>() -> ScheduleTable<B> {
        Self::base_table::<B>()
    }
}
