mod error;
use colored::Colorize;
use error::*;
use intcode::{fileio, parse_program, Run, Runtime};
use std::{
    fs::{read, OpenOptions},
    io::{ErrorKind, Write},
};

fn main() {
    if let Err(e) = cli() {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}

fn cli() -> CLIResult {
    let mut args = std::env::args();
    args.next(); // Ignore program name
    match args.next() {
        Some(arg) => {
            if &arg == "build" {
                let file = args.next().ok_or(CLIError::InsufficientArguments)?;
                let program = load_program(&file)?;
                let binary = fileio::ser(&program);
                let (save_as, _) = file.rsplit_once('.').unwrap_or((&file, ""));
                let mut file = OpenOptions::new()
                    .write(true)
                    .truncate(true)
                    .create(true)
                    .open(format!("{}.img", save_as))
                    .map_err(|e| CLIError::ExternalError("io::Error".into(), e.to_string()))?;
                file.write_all(&binary)
                    .map_err(|e| CLIError::ExternalError("io::Error".into(), e.to_string()))?;
                Ok(())
            } else if &arg == "run" {
                let file = args.next().ok_or(CLIError::InsufficientArguments)?;
                let program = load_program(&file)?;
                let inputs = args
                    .map(|a| a.parse::<i64>().map_err(|_| CLIError::BadInput(a.clone())))
                    .collect::<CLIResult<Vec<i64>>>()?;

                let mut runtime = Runtime::new(program, inputs, false);
                match runtime.run() {
                    Ok(Run::Complete(output)) => {
                        for value in output {
                            println!("{}", value);
                        }
                        Ok(())
                    }
                    Ok(_) => Ok(()), // run-to-halt mode never suspends
                    Err(e) => Err(CLIError::ExternalError(
                        "RuntimeError".into(),
                        e.to_string(),
                    )),
                }
            } else {
                Err(CLIError::UnknownArgument(arg))
            }
        }

        None => Err(CLIError::InsufficientArguments),
    }
}

// A program file is either a binary image (sniffed by its magic) or
// plain comma-separated text.
fn load_program(file: &str) -> CLIResult<Vec<i64>> {
    let bytes = match read(file) {
        Ok(b) => b,
        Err(e) => match e.kind() {
            ErrorKind::NotFound => return Err(CLIError::NotFound),
            _ => return Err(CLIError::ExternalError("io::Error".into(), e.to_string())),
        },
    };

    if fileio::is_image(&bytes) {
        fileio::de(&bytes)
            .map_err(|e| CLIError::ExternalError("FileIOError".into(), e.to_string()))
    } else {
        let text = String::from_utf8(bytes)
            .map_err(|e| CLIError::ExternalError("Utf8Error".into(), e.to_string()))?;
        parse_program(&text)
            .map_err(|e| CLIError::ExternalError("ScanError".into(), e.to_string()))
    }
}
