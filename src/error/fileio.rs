use std::fmt;
use super::IntcodeError;

#[derive(Debug, Clone, PartialEq)]
pub enum FileIOError {
    ExternalError(String, String),
    MalformedHeader(MalformedHeaderError),
    /// The bincode payload after the header did not decode to a program.
    MalformedPayload(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MalformedHeaderError {
    Magic,
    Version,
}

impl fmt::Display for FileIOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self, f)
    }
}

impl IntcodeError for FileIOError {}

pub type FileIOResult<O = ()> = Result<O, FileIOError>;
