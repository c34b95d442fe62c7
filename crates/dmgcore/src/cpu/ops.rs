//! Opcode bodies referenced by the dispatch tables.
//!
//! Each body is a free function with the [`Operation`] signature. Register
//! operands are const generic parameters using the opcode encoding
//! (`r`: 0=B..7=A with 6=(HL), `rp`: BC/DE/HL/SP, `rp2`: BC/DE/HL/AF,
//! `cc`: NZ/Z/NC/C), so one body covers a whole opcode column while each
//! table slot still holds a plain function pointer.
//!
//! The return value reports whether a conditional instruction took its
//! branch; unconditional bodies always return `true`.

mod alu;
mod cb;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

pub(super) use alu::*;
pub(super) use cb::*;
pub(super) use control::*;
pub(super) use incdec::*;
pub(super) use ld::*;
pub(super) use stack::*;
pub(super) use system::*;

use super::{Bus, Cpu};

pub(crate) type Operation = fn(&mut Cpu, &mut dyn Bus) -> bool;
