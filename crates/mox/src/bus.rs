//! Memory and I/O bus abstraction.
//!
//! The CPU core drives exactly one [`Bus::read`] or [`Bus::write`] per
//! executed cycle; the access type tells the collaborator what kind of
//! cycle it is. [`Bus::peek`] exists so the execution driver can pre-decode
//! the next opcode without spending a cycle — implementations that cannot
//! provide a side-effect-free read may alias it to `read` at the cost of an
//! off-by-one against silicon cycle traces.

pub mod simple_bus;
pub mod trace_bus;

use crate::{Byte, Word};
pub use simple_bus::SimpleBus;
pub use trace_bus::{BusActivity, TraceBus};

/// High-level purpose of a bus access combined with its direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AccessType {
    /// Normal data read.
    #[default]
    DataRead,
    /// Normal data write.
    DataWrite,
    /// Instruction opcode fetch (read).
    OpcodeFetch,
    /// Operand byte fetch (read).
    OperandFetch,
    /// Stack read (pull).
    StackRead,
    /// Stack write (push).
    StackWrite,
    /// Read of an interrupt vector entry ($FFFA-$FFFF).
    InterruptVectorRead,
    /// Throw-away read whose value the core ignores (penalty and internal
    /// cycles), issued because the silicon keeps the bus busy every cycle.
    DummyRead,
    /// Throw-away write of the unmodified value during NMOS read-modify-write.
    DummyWrite,
}

impl AccessType {
    /// Returns `true` if this access reads from the bus.
    #[must_use]
    pub const fn is_read(self) -> bool {
        !self.is_write()
    }

    /// Returns `true` if this access writes to the bus.
    #[must_use]
    pub const fn is_write(self) -> bool {
        matches!(
            self,
            AccessType::DataWrite | AccessType::StackWrite | AccessType::DummyWrite
        )
    }
}

/// Memory and I/O collaborator driven by a CPU core.
///
/// One `read` or `write` call is one bus cycle; implementations may count,
/// log, or time them. `peek` must not be observable by the guest.
pub trait Bus {
    /// Read a byte. Records one bus cycle.
    fn read<A>(&mut self, addr: A, access: AccessType) -> Byte
    where
        A: Into<Word>;

    /// Read the byte `read` would return, with no side effects. Used only
    /// for opcode pre-decode; never counts as a cycle.
    fn peek<A>(&self, addr: A) -> Byte
    where
        A: Into<Word>;

    /// Store a byte. Records one bus cycle.
    fn write<A, V>(&mut self, addr: A, value: V, access: AccessType)
    where
        A: Into<Word>,
        V: Into<Byte>;

    /// Write a contiguous block of bytes starting at `start`.
    ///
    /// Default implementation issues repeated [`write`](Self::write) calls
    /// and wraps addresses at 16-bit boundaries. Override this when the bus
    /// can push larger buffers directly.
    fn write_block<A>(&mut self, start: A, data: &[u8], access: AccessType)
    where
        A: Into<Word>,
    {
        let mut addr = start.into();
        for &byte in data {
            self.write(addr, Byte(byte), access);
            addr += 1u16;
        }
    }

    /// Convenience helper to set the CPU reset vector.
    fn set_reset_vector<A>(&mut self, target: A)
    where
        A: Into<Word>,
    {
        let target = target.into();
        self.write(Word(0xFFFC), target.lo(), AccessType::DataWrite);
        self.write(Word(0xFFFD), target.hi(), AccessType::DataWrite);
    }
}
