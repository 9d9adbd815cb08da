/*
    An instruction word packs an opcode into its low two decimal digits
    and one addressing-mode digit per parameter above them, little-endian:
    `ABCDE` = opcode `DE`, first parameter mode `C`, second `B`, third `A`.
    Missing digits are mode 0. `1002` is therefore MUL with modes
    (position, immediate, position).

    Modes are decoded eagerly into a fixed array indexed by parameter
    position, so resolution order cannot misalign them.
*/

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::error::runtime::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum Opcode {
    Add = 1,         //  1 ADD  a b c   M(c) = a + b
    Mul = 2,         //  2 MUL  a b c   M(c) = a * b
    Input = 3,       //  3 IN   c       M(c) = next input
    Output = 4,      //  4 OUT  a       append a to output
    JumpIfTrue = 5,  //  5 JIT  a b     if a != 0 then ip = b
    JumpIfFalse = 6, //  6 JIF  a b     if a == 0 then ip = b
    LessThan = 7,    //  7 LT   a b c   M(c) = if a < b {1} else {0}
    Equals = 8,      //  8 EQ   a b c   M(c) = if a == b {1} else {0}
    AdjustBase = 9,  //  9 ARB  a       relative_base += a
    Halt = 99,       // 99 HALT
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum Mode {
    Position = 0,
    Immediate = 1,
    Relative = 2,
}

/// One decoded instruction word. No instruction takes more than three
/// parameters, so modes for absent parameters sit unused at Position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub modes: [Mode; 3],
}

impl Instruction {
    /// Splits a fetched word into opcode and per-parameter modes. `at` is
    /// the address the word was fetched from, carried into errors.
    pub fn decode(word: i64, at: i64) -> RuntimeResult<Self> {
        let opcode = Opcode::from_i64(word % 100)
            .ok_or(DecodeError::UnknownOpcode { word, at })?;

        let mut digits = word / 100;
        let mut modes = [Mode::Position; 3];
        for mode in modes.iter_mut() {
            let digit = digits % 10;
            digits /= 10;
            *mode = Mode::from_i64(digit)
                .ok_or(DecodeError::UnknownMode { word, digit, at })?;
        }

        Ok(Self { opcode, modes })
    }
}
