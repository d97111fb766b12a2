//! Core primitives for the mox emulation project.
//!
//! This crate holds the pieces every member of the project shares: the
//! wrapping-arithmetic [`Byte`] and [`Word`] newtypes, the [`Nibble`] digit
//! type used by BCD arithmetic, and the [`Bus`] contract a CPU core drives.

#![no_std]

extern crate alloc;

pub mod bus;
pub use bus::{AccessType, Bus, BusActivity, SimpleBus, TraceBus};
pub mod byte;
pub use byte::Byte;
pub mod nibble;
pub use nibble::Nibble;
pub mod word;
pub use word::Word;
