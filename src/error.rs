use crate::token::{Pos, TokenKind};
use color_print::cprintln;
use thiserror::Error;

// Unified error type for the compiler. Every variant carries the
// position of the offending token so the diagnostic can point at it.
#[derive(Debug, Error)]
pub enum Error {
    // Lex errors
    #[error("Illegal character: `{0}`, expected `!=`")]
    IllegalChar(char, Pos),

    #[error("Illegal character in string: `{0}`")]
    IllegalStringChar(char, Pos),

    #[error("Unterminated string")]
    UnterminatedString(Pos),

    #[error("Malformed number: digit required after `.`")]
    MalformedNumber(Pos),

    #[error("Unknown token: `{0}`")]
    UnknownToken(char, Pos),

    // Parse errors
    #[error("Expected {expected:?}, got {got:?} (`{text}`)")]
    UnexpectedToken {
        expected: TokenKind,
        got: TokenKind,
        text: String,
        pos: Pos,
    },

    #[error("Invalid statement at `{0}` ({1:?})")]
    InvalidStatement(String, TokenKind, Pos),

    #[error("Expected comparison operator at `{0}`")]
    ExpectedComparison(String, Pos),

    #[error("Unexpected token in expression: `{0}`")]
    UnexpectedPrimary(String, Pos),

    // Semantic errors
    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String, Pos),

    #[error("Undefined variable: `{0}`")]
    UndefinedVariable(String, Pos),

    #[error("Undefined label: `{0}`")]
    UndefinedLabel(String, Pos),
}

impl Error {
    pub fn pos(&self) -> Pos {
        match self {
            Error::IllegalChar(_, pos) => *pos,
            Error::IllegalStringChar(_, pos) => *pos,
            Error::UnterminatedString(pos) => *pos,
            Error::MalformedNumber(pos) => *pos,
            Error::UnknownToken(_, pos) => *pos,
            Error::UnexpectedToken { pos, .. } => *pos,
            Error::InvalidStatement(_, _, pos) => *pos,
            Error::ExpectedComparison(_, pos) => *pos,
            Error::UnexpectedPrimary(_, pos) => *pos,
            Error::RedefinedLabel(_, pos) => *pos,
            Error::UndefinedVariable(_, pos) => *pos,
            Error::UndefinedLabel(_, pos) => *pos,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, source: &str) {
        let pos = self.pos();

        cprintln!("<red,bold>error</>: {}", self);
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, pos);
        cprintln!("      <blue>|</>");

        let line_content = source.lines().nth(pos.line - 1).unwrap_or("");

        cprintln!(" <blue>{:>4} |</> {}", pos.line, line_content);
        cprintln!("      <blue>|</>");
    }
}
