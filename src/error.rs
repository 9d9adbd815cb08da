use std::fmt;

pub mod fileio;
pub mod runtime;
pub mod scanner;

/// Marker for every error type in the crate. Anything that can abort a
/// parse, an image load or a run implements this, so callers holding a
/// mixed bag of engines can report failures uniformly.
pub trait IntcodeError: fmt::Debug + fmt::Display {}
