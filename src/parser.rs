// parser.rs

use crate::emitter::Emitter;
use crate::error::Error;
use crate::lexer::Lexer;
use crate::token::{Pos, Token, TokenKind};
use indexmap::{IndexMap, IndexSet};

// program    ::= {statement}
// statement  ::= "PRINT" (expression | string) nl
//              | "IF" comparison "THEN" nl {statement} "ENDIF" nl
//              | "WHILE" comparison "REPEAT" nl {statement} "ENDWHILE" nl
//              | "LABEL" ident nl
//              | "GOTO" ident nl
//              | "LET" ident "=" expression nl
//              | "INPUT" ident nl
// comparison ::= expression (("==" | "!=" | ">" | ">=" | "<" | "<=") expression)+
// expression ::= term {("-" | "+") term}
// term       ::= unary {("/" | "*") unary}
// unary      ::= ["+" | "-"] primary
// primary    ::= number | ident
// nl         ::= '\n'+

/// Recognizes the grammar top-down and emits the C translation in the
/// same pass; there is no intermediate syntax tree.
pub struct Parser<'a> {
    lexer: Lexer,
    emitter: &'a mut Emitter,
    current: Token,
    peek: Token,

    symbols: IndexSet<String>,
    labels_declared: IndexMap<String, Pos>,
    labels_gotoed: IndexMap<String, Pos>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer, emitter: &'a mut Emitter) -> Result<Self, Error> {
        let mut parser = Parser {
            lexer,
            emitter,
            current: Token::default(),
            peek: Token::default(),
            symbols: IndexSet::new(),
            labels_declared: IndexMap::new(),
            labels_gotoed: IndexMap::new(),
        };
        // Prime the two-token lookahead.
        parser.next_token()?;
        parser.next_token()?;
        Ok(parser)
    }

    /// Variables declared via LET or INPUT, in order of first sight.
    pub fn symbols(&self) -> &IndexSet<String> {
        &self.symbols
    }

    /// Labels declared via LABEL, in source order.
    pub fn labels_declared(&self) -> impl Iterator<Item = &String> {
        self.labels_declared.keys()
    }
}

// ------------------------------------------------------------------------
// Helpers
// ------------------------------------------------------------------------

impl Parser<'_> {
    fn check_token(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[allow(dead_code)]
    fn check_peek(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Current token must be of the given kind; consume it.
    fn match_token(&mut self, kind: TokenKind) -> Result<(), Error> {
        if !self.check_token(kind) {
            return Err(Error::UnexpectedToken {
                expected: kind,
                got: self.current.kind,
                text: self.current.text.clone(),
                pos: self.current.pos,
            });
        }
        self.next_token()
    }

    /// Shift the lookahead by one token.
    fn next_token(&mut self) -> Result<(), Error> {
        let next = self.lexer.next_token()?;
        self.current = std::mem::replace(&mut self.peek, next);
        Ok(())
    }
}

// ------------------------------------------------------------------------
// Grammar rules
// ------------------------------------------------------------------------

impl Parser<'_> {
    /// Program
    /// `{statement}`
    pub fn program(&mut self) -> Result<(), Error> {
        self.emitter.header_line("#include <stdio.h>");
        self.emitter.header_line("int main(void){");

        // Strip blank lines before the program begins.
        while self.check_token(TokenKind::Newline) {
            self.next_token()?;
        }

        while !self.check_token(TokenKind::Eof) {
            self.statement()?;
        }

        self.emitter.emit_line("return 0;");
        self.emitter.emit_line("}");

        // Jumps may legitimately appear before the label they target, so
        // GOTO targets are only checked once the whole program is parsed.
        for (label, pos) in &self.labels_gotoed {
            if !self.labels_declared.contains_key(label) {
                return Err(Error::UndefinedLabel(label.clone(), *pos));
            }
        }
        Ok(())
    }

    /// Statement
    /// `"PRINT" (expression | string)` | `"IF" comparison "THEN" nl {statement} "ENDIF"` |
    /// `"WHILE" comparison "REPEAT" nl {statement} "ENDWHILE"` | `"LABEL" ident` |
    /// `"GOTO" ident` | `"LET" ident "=" expression` | `"INPUT" ident`
    fn statement(&mut self) -> Result<(), Error> {
        match self.current.kind {
            TokenKind::KwPrint => {
                self.next_token()?;
                if self.check_token(TokenKind::Str) {
                    self.emitter
                        .emit_line(&format!("printf(\"{}\\n\");", self.current.text));
                    self.next_token()?;
                } else {
                    // Print the expression result as a float.
                    self.emitter.emit("printf(\"%.2f\\n\", (float)(");
                    self.expression()?;
                    self.emitter.emit_line("));");
                }
            }

            TokenKind::KwIf => {
                self.next_token()?;
                self.emitter.emit("if(");
                self.comparison()?;

                self.match_token(TokenKind::KwThen)?;
                self.nl()?;
                self.emitter.emit_line("){");

                while !self.check_token(TokenKind::KwEndIf) {
                    self.statement()?;
                }
                self.match_token(TokenKind::KwEndIf)?;
                self.emitter.emit_line("}");
            }

            TokenKind::KwWhile => {
                self.next_token()?;
                self.emitter.emit("while(");
                self.comparison()?;

                self.match_token(TokenKind::KwRepeat)?;
                self.nl()?;
                self.emitter.emit_line("){");

                while !self.check_token(TokenKind::KwEndWhile) {
                    self.statement()?;
                }
                self.match_token(TokenKind::KwEndWhile)?;
                self.emitter.emit_line("}");
            }

            TokenKind::KwLabel => {
                self.next_token()?;
                let name = self.current.text.clone();
                if self.labels_declared.contains_key(&name) {
                    return Err(Error::RedefinedLabel(name, self.current.pos));
                }
                self.labels_declared.insert(name.clone(), self.current.pos);
                self.emitter.emit_line(&format!("{}:", name));
                self.match_token(TokenKind::Ident)?;
            }

            TokenKind::KwGoto => {
                self.next_token()?;
                let name = self.current.text.clone();
                // Record the jump; existence is checked after the program.
                self.labels_gotoed
                    .entry(name.clone())
                    .or_insert(self.current.pos);
                self.emitter.emit_line(&format!("goto {};", name));
                self.match_token(TokenKind::Ident)?;
            }

            TokenKind::KwLet => {
                self.next_token()?;
                let name = self.current.text.clone();
                if self.symbols.insert(name.clone()) {
                    self.emitter.header_line(&format!("float {};", name));
                }
                self.emitter.emit(&format!("{} = ", name));
                self.match_token(TokenKind::Ident)?;
                self.match_token(TokenKind::Equal)?;
                self.expression()?;
                self.emitter.emit_line(";");
            }

            TokenKind::KwInput => {
                self.next_token()?;
                let name = self.current.text.clone();
                if self.symbols.insert(name.clone()) {
                    self.emitter.header_line(&format!("float {};", name));
                }
                // Guarded read: on invalid input, zero the variable and
                // discard the rest of the line.
                self.emitter
                    .emit_line(&format!("if(0 == scanf(\"%f\", &{})) {{", name));
                self.emitter.emit_line(&format!("{} = 0;", name));
                self.emitter.emit_line("scanf(\"%*s\");");
                self.emitter.emit_line("}");
                self.match_token(TokenKind::Ident)?;
            }

            _ => {
                return Err(Error::InvalidStatement(
                    self.current.text.clone(),
                    self.current.kind,
                    self.current.pos,
                ));
            }
        }

        self.nl()
    }

    /// Newline
    /// `'\n'+`
    fn nl(&mut self) -> Result<(), Error> {
        self.match_token(TokenKind::Newline)?;
        while self.check_token(TokenKind::Newline) {
            self.next_token()?;
        }
        Ok(())
    }

    /// Comparison
    /// `expression (("==" | "!=" | ">" | ">=" | "<" | "<=") expression)+`
    fn comparison(&mut self) -> Result<(), Error> {
        self.expression()?;

        // At least one comparison operator is required.
        if !self.current.kind.is_comparison() {
            return Err(Error::ExpectedComparison(
                self.current.text.clone(),
                self.current.pos,
            ));
        }
        while self.current.kind.is_comparison() {
            self.emitter.emit(&self.current.text);
            self.next_token()?;
            self.expression()?;
        }
        Ok(())
    }

    /// Expression
    /// `term {("-" | "+") term}`
    fn expression(&mut self) -> Result<(), Error> {
        self.term()?;
        while self.check_token(TokenKind::Plus) || self.check_token(TokenKind::Minus) {
            self.emitter.emit(&self.current.text);
            self.next_token()?;
            self.term()?;
        }
        Ok(())
    }

    /// Term
    /// `unary {("/" | "*") unary}`
    fn term(&mut self) -> Result<(), Error> {
        self.unary()?;
        while self.check_token(TokenKind::Star) || self.check_token(TokenKind::Slash) {
            self.emitter.emit(&self.current.text);
            self.next_token()?;
            self.unary()?;
        }
        Ok(())
    }

    /// Unary
    /// `["+" | "-"] primary`
    fn unary(&mut self) -> Result<(), Error> {
        if self.check_token(TokenKind::Plus) || self.check_token(TokenKind::Minus) {
            self.emitter.emit(&self.current.text);
            self.next_token()?;
        }
        self.primary()
    }

    /// Primary
    /// `number | ident`
    fn primary(&mut self) -> Result<(), Error> {
        match self.current.kind {
            TokenKind::Number => {
                self.emitter.emit(&self.current.text);
                self.next_token()
            }
            TokenKind::Ident => {
                if !self.symbols.contains(&self.current.text) {
                    return Err(Error::UndefinedVariable(
                        self.current.text.clone(),
                        self.current.pos,
                    ));
                }
                self.emitter.emit(&self.current.text);
                self.next_token()
            }
            _ => Err(Error::UnexpectedPrimary(
                self.current.text.clone(),
                self.current.pos,
            )),
        }
    }
}
