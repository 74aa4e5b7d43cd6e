// lexer.rs

use crate::error::Error;
use crate::token::{Pos, Token, TokenKind};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        // Terminate with a newline so every statement ends cleanly.
        let mut chars: Vec<char> = source.chars().collect();
        chars.push('\n');
        Lexer {
            chars,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn char(&self) -> char {
        self.chars.get(self.pos).copied().unwrap_or('\0')
    }

    fn peek(&self) -> char {
        self.chars.get(self.pos + 1).copied().unwrap_or('\0')
    }

    fn next_char(&mut self) {
        if self.char() == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        self.pos += 1;
    }

    fn here(&self) -> Pos {
        Pos {
            line: self.line,
            col: self.col,
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.char(), ' ' | '\t' | '\r') {
            self.next_char();
        }
    }

    fn skip_comment(&mut self) {
        // '#' through end of line; the newline itself stays a token.
        if self.char() == '#' {
            while self.char() != '\n' {
                self.next_char();
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();
        self.skip_comment();
        let pos = self.here();

        let token = match self.char() {
            // 1. Single character operators
            '+' => Token::new("+", TokenKind::Plus, pos),
            '-' => Token::new("-", TokenKind::Minus, pos),
            '*' => Token::new("*", TokenKind::Star, pos),
            '/' => Token::new("/", TokenKind::Slash, pos),

            // 2. Operators with a one character lookahead
            '=' => {
                if self.peek() == '=' {
                    self.next_char();
                    Token::new("==", TokenKind::EqualEqual, pos)
                } else {
                    Token::new("=", TokenKind::Equal, pos)
                }
            }
            '>' => {
                if self.peek() == '=' {
                    self.next_char();
                    Token::new(">=", TokenKind::RAngleEqual, pos)
                } else {
                    Token::new(">", TokenKind::RAngle, pos)
                }
            }
            '<' => {
                if self.peek() == '=' {
                    self.next_char();
                    Token::new("<=", TokenKind::LAngleEqual, pos)
                } else {
                    Token::new("<", TokenKind::LAngle, pos)
                }
            }
            '!' => {
                if self.peek() == '=' {
                    self.next_char();
                    Token::new("!=", TokenKind::ExclEqual, pos)
                } else {
                    return Err(Error::IllegalChar('!', pos));
                }
            }

            // 3. String literal
            '"' => {
                self.next_char();
                let start = self.pos;
                while self.char() != '"' {
                    match self.char() {
                        '\0' => return Err(Error::UnterminatedString(pos)),
                        c @ ('\r' | '\t' | '\n' | '%') => {
                            return Err(Error::IllegalStringChar(c, self.here()))
                        }
                        '/' if self.peek() == '/' => {
                            return Err(Error::IllegalStringChar('/', self.here()))
                        }
                        _ => self.next_char(),
                    }
                }
                let text: String = self.chars[start..self.pos].iter().collect();
                Token::new(text, TokenKind::Str, pos)
            }

            // 4. Number literal
            c if c.is_ascii_digit() => {
                let start = self.pos;
                while self.peek().is_ascii_digit() {
                    self.next_char();
                }
                if self.peek() == '.' {
                    self.next_char();
                    // The decimal point requires at least one digit after it.
                    if !self.peek().is_ascii_digit() {
                        return Err(Error::MalformedNumber(self.here()));
                    }
                    while self.peek().is_ascii_digit() {
                        self.next_char();
                    }
                }
                let text: String = self.chars[start..=self.pos].iter().collect();
                Token::new(text, TokenKind::Number, pos)
            }

            // 5. Identifier or keyword
            c if c.is_ascii_alphabetic() => {
                let start = self.pos;
                while self.peek().is_ascii_alphanumeric() {
                    self.next_char();
                }
                let text: String = self.chars[start..=self.pos].iter().collect();
                match TokenKind::keyword(&text) {
                    Some(kind) => Token::new(text, kind, pos),
                    None => Token::new(text, TokenKind::Ident, pos),
                }
            }

            // 6. Statement separator and end of input
            '\n' => Token::new("\n", TokenKind::Newline, pos),
            '\0' => Token::new("", TokenKind::Eof, pos),

            // 7. Error
            c => return Err(Error::UnknownToken(c, pos)),
        };

        self.next_char();
        Ok(token)
    }
}
