//! Optional execution tracing.
//!
//! A [`TraceSink`] installed with [`Runtime::set_trace`] receives one
//! callback per executed instruction, per produced output, and at halt.
//! All callbacks default to no-ops; a runtime without a sink does no
//! tracing work.

#[cfg(doc)]
use crate::runtime::Runtime;

use crate::instruction::Opcode;

pub trait TraceSink {
    /// Called before each instruction executes, with the address it was
    /// fetched from.
    fn instr(&mut self, _ip: i64, _opcode: Opcode) {}

    /// Called for each value an Output instruction produces.
    fn output(&mut self, _value: i64) {}

    /// Called once when the machine halts.
    fn halt(&mut self, _ip: i64) {}
}
