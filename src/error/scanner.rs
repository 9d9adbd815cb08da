use std::fmt;
use super::IntcodeError;

#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    ExternalError(String, String),
    /// Input that is not a signed decimal integer, a comma or whitespace,
    /// or an integer literal that does not fit in an i64.
    UnexpectedToken { slice: String, offset: usize },
    /// Two numbers with no separating comma.
    MissingSeparator { offset: usize },
    /// A comma with no number after it (includes a leading comma).
    DanglingSeparator { offset: usize },
    EmptyProgram,
}

impl IntcodeError for ScanError {}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self, f)
    }
}

pub type ScanResult<O = ()> = Result<O, ScanError>;
