//! Processor status register (P) flags.

use bitflags::bitflags;
use core::ops::{BitAnd, BitOr};
use mox::Byte;

bitflags! {
    /// Processor status register (P register).
    ///
    /// # Bit Layout
    ///
    /// ```text
    /// 7 6 5 4 3 2 1 0
    /// N V U B D I Z C
    /// ```
    ///
    /// - N (Negative): bit 7 of the last result
    /// - V (Overflow): signed overflow
    /// - U (Unused): reads as 1 in every stacked copy
    /// - B (Break): set only in copies pushed by BRK/PHP
    /// - D (Decimal): BCD mode for ADC/SBC
    /// - I (IrqDisable): masks IRQ when set
    /// - Z (Zero): last result was zero
    /// - C (Carry): carry out / no borrow
    #[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Flags: u8 {
        const Carry = 0b0000_0001;
        const Zero = 0b0000_0010;
        const IrqDisable = 0b0000_0100;
        const Decimal = 0b0000_1000;
        const Break = 0b0001_0000;
        const Unused = 0b0010_0000;
        const Overflow = 0b0100_0000;
        const Negative = 0b1000_0000;
    }
}

impl Flags {
    #[inline]
    pub fn set_carry(&mut self, carry: bool) {
        self.set(Flags::Carry, carry);
    }

    #[inline]
    pub fn set_zero(&mut self, zero: bool) {
        self.set(Flags::Zero, zero);
    }

    #[inline]
    pub fn set_overflow(&mut self, overflow: bool) {
        self.set(Flags::Overflow, overflow);
    }

    #[inline]
    pub fn set_negative(&mut self, negative: bool) {
        self.set(Flags::Negative, negative);
    }

    /// Sets N and Z from a result byte, the way nearly every instruction does.
    #[inline]
    pub fn set_nz(&mut self, value: Byte) {
        self.set(Flags::Zero, value == Byte::ZERO);
        self.set(Flags::Negative, value.is_negative());
    }

    /// Returns a flag as 0 or 1.
    #[must_use]
    #[inline]
    pub fn bit(self, flag: Flags) -> u8 {
        u8::from(self.contains(flag))
    }

    /// The value a push driven by software (BRK/PHP) places on the stack.
    #[must_use]
    #[inline]
    pub fn stacked_by_software(self) -> Byte {
        Byte((self | Flags::Break | Flags::Unused).bits())
    }

    /// The value a hardware interrupt entry (IRQ/NMI) places on the stack.
    #[must_use]
    #[inline]
    pub fn stacked_by_interrupt(self) -> Byte {
        Byte(((self | Flags::Unused) & !Flags::Break).bits())
    }

    /// Reconstructs P from a pulled stack byte: U forced on, B forced off.
    #[must_use]
    #[inline]
    pub fn from_stacked(value: Byte) -> Flags {
        (Flags::from_bits_truncate(value.0) | Flags::Unused) & !Flags::Break
    }
}

impl From<Byte> for Flags {
    fn from(byte: Byte) -> Self {
        Flags::from_bits_truncate(byte.0)
    }
}

impl From<Flags> for Byte {
    fn from(flags: Flags) -> Self {
        Byte(flags.bits())
    }
}

impl BitAnd<Flags> for Byte {
    type Output = Byte;

    fn bitand(self, rhs: Flags) -> Byte {
        Byte(self.0 & rhs.bits())
    }
}

impl BitOr<Flags> for Byte {
    type Output = Byte;

    fn bitor(self, rhs: Flags) -> Byte {
        Byte(self.0 | rhs.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_nz_tracks_result() {
        let mut p = Flags::empty();
        p.set_nz(Byte(0x00));
        assert!(p.contains(Flags::Zero) && !p.contains(Flags::Negative));

        p.set_nz(Byte(0x80));
        assert!(!p.contains(Flags::Zero) && p.contains(Flags::Negative));
    }

    #[test]
    fn stacked_copies_mask_break_and_unused() {
        let p = Flags::Carry | Flags::Decimal;
        assert_eq!(p.stacked_by_software(), Byte(0b0011_1001));
        assert_eq!(p.stacked_by_interrupt(), Byte(0b0010_1001));
    }

    #[test]
    fn pull_forces_unused_on_and_break_off() {
        let pulled = Flags::from_stacked(Byte(0b0001_0001));
        assert!(pulled.contains(Flags::Unused));
        assert!(!pulled.contains(Flags::Break));
        assert!(pulled.contains(Flags::Carry));
    }
}
