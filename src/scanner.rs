use logos::Logos;

use crate::error::scanner::*;

#[derive(PartialEq, Debug, Clone, Logos)]
pub enum TokenKind {
    // Signed decimal literal. Overflowing an i64 turns the slice into an
    // Error token rather than a wrapped value.
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Number(i64),
    #[token(",")]
    Comma,

    #[error]
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Error,
}

/// Parses the conventional program serialization: signed decimal
/// integers separated by commas, with whitespace (including newlines)
/// ignored anywhere between tokens.
pub fn parse_program(source: &str) -> ScanResult<Vec<i64>> {
    let mut lexer = TokenKind::lexer(source);
    let mut program = Vec::new();
    let mut expect_number = true;

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        match token {
            TokenKind::Number(n) => {
                if !expect_number {
                    return Err(ScanError::MissingSeparator { offset });
                }
                program.push(n);
                expect_number = false;
            }
            TokenKind::Comma => {
                if expect_number {
                    return Err(ScanError::DanglingSeparator { offset });
                }
                expect_number = true;
            }
            TokenKind::Error => {
                return Err(ScanError::UnexpectedToken {
                    slice: lexer.slice().to_string(),
                    offset,
                });
            }
        }
    }

    if program.is_empty() {
        return Err(ScanError::EmptyProgram);
    }
    if expect_number {
        return Err(ScanError::DanglingSeparator {
            offset: source.len(),
        });
    }
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_program() {
        assert_eq!(parse_program("1,0,0,0,99"), Ok(vec![1, 0, 0, 0, 99]));
    }

    #[test]
    fn whitespace_and_newlines_are_ignored() {
        assert_eq!(
            parse_program(" 1101, 100 ,-1,\n4,0\n"),
            Ok(vec![1101, 100, -1, 4, 0])
        );
    }

    #[test]
    fn single_number_is_a_program() {
        assert_eq!(parse_program("99"), Ok(vec![99]));
    }

    #[test]
    fn rejects_adjacent_numbers() {
        assert_eq!(
            parse_program("1 2"),
            Err(ScanError::MissingSeparator { offset: 2 })
        );
    }

    #[test]
    fn rejects_leading_and_doubled_commas() {
        assert_eq!(
            parse_program(",1"),
            Err(ScanError::DanglingSeparator { offset: 0 })
        );
        assert_eq!(
            parse_program("1,,2"),
            Err(ScanError::DanglingSeparator { offset: 2 })
        );
    }

    #[test]
    fn rejects_trailing_comma() {
        assert_eq!(
            parse_program("1,2,"),
            Err(ScanError::DanglingSeparator { offset: 4 })
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_program("1,x,3"),
            Err(ScanError::UnexpectedToken {
                slice: "x".into(),
                offset: 2
            })
        );
    }

    #[test]
    fn rejects_literals_that_overflow() {
        assert!(matches!(
            parse_program("99999999999999999999"),
            Err(ScanError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn rejects_empty_source() {
        assert_eq!(parse_program(""), Err(ScanError::EmptyProgram));
        assert_eq!(parse_program("  \n"), Err(ScanError::EmptyProgram));
    }
}
