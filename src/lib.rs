mod instruction;
mod runtime;
mod scanner;
mod tape;
mod trace;
pub mod error;
pub mod fileio;

pub use instruction::{Instruction, Mode, Opcode};
pub use runtime::{Run, Runtime, Status};
pub use scanner::{parse_program, TokenKind};
pub use tape::Tape;
pub use trace::TraceSink;

use error::runtime::{RuntimeError, RuntimeResult};

pub const INTCODE_VER: &'static str = "0.1.0";

/// Parses `source` and runs it to halt with a pre-loaded input queue,
/// returning everything the program output.
pub fn run(source: &str, inputs: Vec<i64>) -> RuntimeResult<Vec<i64>> {
    let program = match parse_program(source) {
        Ok(p) => p,
        Err(e) => return Err(RuntimeError::ExternalError("ScanError".into(), e.to_string())),
    };
    let mut runtime = Runtime::new(program, inputs, false);
    match runtime.run()? {
        Run::Complete(output) => Ok(output),
        _ => unreachable!("run-to-halt mode only returns Complete"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_parses_and_executes() {
        assert_eq!(run("3,1,4,1,99", vec![77]), Ok(vec![77]));
    }

    #[test]
    fn run_wraps_scan_failures() {
        assert!(matches!(
            run("1,oops,99", vec![]),
            Err(RuntimeError::ExternalError(_, _))
        ));
    }
}
