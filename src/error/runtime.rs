use std::fmt;
use super::IntcodeError;

/// Every runtime fault is fatal for the current `run()` call. None of
/// these are recovered internally; the engine surfaces them and the
/// orchestrator decides what to do with the wreck.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    ExternalError(String, String),
    Decode(DecodeError),
    Address(AddressError),
    /// An Input instruction fired with an empty queue and no provider.
    InputExhausted { at: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecodeError {
    /// The low two digits of the word are not a recognized opcode.
    UnknownOpcode { word: i64, at: i64 },
    /// A mode digit outside {0, 1, 2}.
    UnknownMode { word: i64, digit: i64, at: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddressError {
    /// A Position- or Relative-mode computation produced an address < 0.
    Negative { addr: i64 },
    /// Immediate mode on a write/destination parameter.
    WriteInImmediateMode { word: i64, at: i64 },
}

impl IntcodeError for RuntimeError {}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self, f)
    }
}

impl From<DecodeError> for RuntimeError {
    fn from(e: DecodeError) -> Self {
        RuntimeError::Decode(e)
    }
}

impl From<AddressError> for RuntimeError {
    fn from(e: AddressError) -> Self {
        RuntimeError::Address(e)
    }
}

pub type RuntimeResult<T = ()> = Result<T, RuntimeError>;
