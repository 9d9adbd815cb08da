/*
    # Execution engine
    A program runs in a fetch, decode, resolve, execute loop. The word at
    the instruction pointer is split into an opcode and per-parameter
    addressing modes, parameters are resolved against the tape, and the
    instruction's behavior decides the next instruction pointer.

    ## Suspension
    The engine never blocks. In run-to-next-output mode a `run()` call
    returns to the caller the moment an Output instruction fires, and the
    next `run()` call picks up at the following instruction. All waiting
    lives with the caller; the engine is re-entered, never concurrent.
*/

use std::collections::VecDeque;
use std::mem;

use crate::error::runtime::*;
use crate::instruction::{Instruction, Mode, Opcode};
use crate::tape::Tape;
use crate::trace::TraceSink;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    SuspendedOnOutput,
    Halted,
}

/// What a single `run()` call came back with.
#[derive(Debug, PartialEq)]
pub enum Run {
    /// Run-to-halt mode only: the machine halted, carrying the full
    /// output history.
    Complete(Vec<i64>),
    /// Run-to-next-output mode only: one Output fired; the machine is
    /// suspended and `run()` may be called again.
    Output(i64),
    /// Run-to-next-output mode, or any re-entry after halt: the machine
    /// is halted. Carries a final output only if one was produced and
    /// never handed out.
    Halted(Option<i64>),
}

pub struct Runtime {
    tape: Tape,
    ip: i64,
    relative_base: i64,
    status: Status,
    inputs: VecDeque<i64>,
    provider: Option<Box<dyn FnMut() -> i64>>,
    output: Vec<i64>,
    suspend_on_output: bool,
    trace: Option<Box<dyn TraceSink>>,
}

impl Runtime {
    /// A machine fed from a pre-loaded FIFO queue. More inputs can be
    /// appended between runs with [`Runtime::push_input`].
    pub fn new(program: Vec<i64>, inputs: Vec<i64>, suspend_on_output: bool) -> Self {
        Self {
            tape: Tape::new(program),
            ip: 0,
            relative_base: 0,
            status: Status::Running,
            inputs: inputs.into(),
            provider: None,
            output: Vec::new(),
            suspend_on_output,
            trace: None,
        }
    }

    /// A machine that asks `provider` for a value whenever an Input
    /// instruction finds the queue empty. With a provider installed the
    /// machine cannot underflow.
    pub fn with_provider(
        program: Vec<i64>,
        provider: impl FnMut() -> i64 + 'static,
        suspend_on_output: bool,
    ) -> Self {
        let mut runtime = Self::new(program, Vec::new(), suspend_on_output);
        runtime.provider = Some(Box::new(provider));
        runtime
    }

    pub fn set_trace(&mut self, sink: impl TraceSink + 'static) {
        self.trace = Some(Box::new(sink));
    }

    /// Queues a value for a later Input instruction. Queued values are
    /// consumed before any provider is consulted.
    pub fn push_input(&mut self, value: i64) {
        self.inputs.push_back(value);
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn ip(&self) -> i64 {
        self.ip
    }

    pub fn relative_base(&self) -> i64 {
        self.relative_base
    }

    /// Raw memory, for hosts inspecting a stopped machine.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Runs the machine. In run-to-halt mode this returns
    /// [`Run::Complete`] with everything the program output. In
    /// run-to-next-output mode it returns [`Run::Output`] as soon as one
    /// Output instruction fires, or [`Run::Halted`] when the program
    /// ends. Running a halted machine is a no-op reporting
    /// `Halted(None)`.
    pub fn run(&mut self) -> RuntimeResult<Run> {
        if self.status == Status::Halted {
            return Ok(Run::Halted(None));
        }
        self.status = Status::Running;

        loop {
            let word = self.tape.read(self.ip)?;
            let instr = Instruction::decode(word, self.ip)?;
            if let Some(trace) = &mut self.trace {
                trace.instr(self.ip, instr.opcode);
            }

            match instr.opcode {
                Opcode::Add => {
                    let a = self.read_param(&instr, 0)?;
                    let b = self.read_param(&instr, 1)?;
                    let c = self.write_addr(&instr, 2, word)?;
                    self.tape.write(c, a + b)?;
                    self.ip += 4;
                }
                Opcode::Mul => {
                    let a = self.read_param(&instr, 0)?;
                    let b = self.read_param(&instr, 1)?;
                    let c = self.write_addr(&instr, 2, word)?;
                    self.tape.write(c, a * b)?;
                    self.ip += 4;
                }
                Opcode::Input => {
                    let c = self.write_addr(&instr, 0, word)?;
                    let value = self.next_input()?;
                    self.tape.write(c, value)?;
                    self.ip += 2;
                }
                Opcode::Output => {
                    let value = self.read_param(&instr, 0)?;
                    self.output.push(value);
                    if let Some(trace) = &mut self.trace {
                        trace.output(value);
                    }
                    self.ip += 2;
                    if self.suspend_on_output {
                        self.status = Status::SuspendedOnOutput;
                        self.output.clear();
                        return Ok(Run::Output(value));
                    }
                }
                Opcode::JumpIfTrue => {
                    let a = self.read_param(&instr, 0)?;
                    let b = self.read_param(&instr, 1)?;
                    self.ip = if a != 0 { b } else { self.ip + 3 };
                }
                Opcode::JumpIfFalse => {
                    let a = self.read_param(&instr, 0)?;
                    let b = self.read_param(&instr, 1)?;
                    self.ip = if a == 0 { b } else { self.ip + 3 };
                }
                Opcode::LessThan => {
                    let a = self.read_param(&instr, 0)?;
                    let b = self.read_param(&instr, 1)?;
                    let c = self.write_addr(&instr, 2, word)?;
                    self.tape.write(c, (a < b) as i64)?;
                    self.ip += 4;
                }
                Opcode::Equals => {
                    let a = self.read_param(&instr, 0)?;
                    let b = self.read_param(&instr, 1)?;
                    let c = self.write_addr(&instr, 2, word)?;
                    self.tape.write(c, (a == b) as i64)?;
                    self.ip += 4;
                }
                Opcode::AdjustBase => {
                    let a = self.read_param(&instr, 0)?;
                    self.relative_base += a;
                    self.ip += 2;
                }
                Opcode::Halt => {
                    self.status = Status::Halted;
                    if let Some(trace) = &mut self.trace {
                        trace.halt(self.ip);
                    }
                    return Ok(if self.suspend_on_output {
                        Run::Halted(self.output.pop())
                    } else {
                        Run::Complete(mem::take(&mut self.output))
                    });
                }
            }
        }
    }

    fn read_param(&mut self, instr: &Instruction, param: usize) -> RuntimeResult<i64> {
        let raw = self.tape.read(self.ip + 1 + param as i64)?;
        match instr.modes[param] {
            Mode::Position => self.tape.read(raw),
            Mode::Immediate => Ok(raw),
            Mode::Relative => self.tape.read(self.relative_base + raw),
        }
    }

    // Destination parameters are never dereferenced: the raw word is the
    // address, offset by the relative base in relative mode. Immediate
    // mode has no meaning for a destination.
    fn write_addr(&mut self, instr: &Instruction, param: usize, word: i64) -> RuntimeResult<i64> {
        let raw = self.tape.read(self.ip + 1 + param as i64)?;
        match instr.modes[param] {
            Mode::Position => Ok(raw),
            Mode::Relative => Ok(self.relative_base + raw),
            Mode::Immediate => {
                Err(AddressError::WriteInImmediateMode { word, at: self.ip }.into())
            }
        }
    }

    fn next_input(&mut self) -> RuntimeResult<i64> {
        if let Some(value) = self.inputs.pop_front() {
            return Ok(value);
        }
        match &mut self.provider {
            Some(provider) => Ok(provider()),
            None => Err(RuntimeError::InputExhausted { at: self.ip }),
        }
    }
}
