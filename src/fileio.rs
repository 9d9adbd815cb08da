use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::{error::fileio::*, INTCODE_VER};

const IMAGE_MAGIC: &'static str = "INTCODEIMG";

/// Payload of a program image: the parsed word sequence, ready to seed a
/// tape without going back through the scanner.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Image {
    pub program: Vec<i64>,
}

pub fn ser(program: &[i64]) -> Vec<u8> {
    let mut output = vec![];
    output.extend(format!("{}\n{}\n", IMAGE_MAGIC, INTCODE_VER).as_bytes()); // Image header
    let image = Image {
        program: program.to_vec(),
    };
    output.extend(bincode::serialize(&image).unwrap());
    output
}

pub fn de(input: &[u8]) -> FileIOResult<Vec<i64>> {
    let mut input = input.iter();

    consume(
        &mut input,
        format!("{}\n", IMAGE_MAGIC).as_str(),
        MalformedHeaderError::Magic,
    )?;
    consume(
        &mut input,
        format!("{}\n", INTCODE_VER).as_str(),
        MalformedHeaderError::Version,
    )?;

    let payload = input.as_slice();
    let image: Image = bincode::deserialize(payload)
        .map_err(|e| FileIOError::MalformedPayload(e.to_string()))?;
    Ok(image.program)
}

/// Whether `input` starts with the image magic, so callers can fall back
/// to parsing program text.
pub fn is_image(input: &[u8]) -> bool {
    input.starts_with(IMAGE_MAGIC.as_bytes())
}

fn consume(input: &mut Iter<u8>, expected: &str, kind: MalformedHeaderError) -> FileIOResult<()> {
    for i in expected.as_bytes() {
        if input.next() != Some(i) {
            return Err(FileIOError::MalformedHeader(kind));
        }
    }

    Ok(())
}
