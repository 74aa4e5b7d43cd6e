// token.rs

use bimap::BiMap;
use once_cell::sync::Lazy;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub pos: Pos,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind, pos: Pos) -> Self {
        Token {
            text: text.into(),
            kind,
            pos,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenKind {
    // Structural
    #[default]
    Eof,
    Newline, // statement separator
    Number,
    Ident,
    Str,

    // Keywords
    KwLabel,    // "LABEL"
    KwGoto,     // "GOTO"
    KwPrint,    // "PRINT"
    KwInput,    // "INPUT"
    KwLet,      // "LET"
    KwIf,       // "IF"
    KwThen,     // "THEN"
    KwEndIf,    // "ENDIF"
    KwWhile,    // "WHILE"
    KwRepeat,   // "REPEAT"
    KwEndWhile, // "ENDWHILE"

    // Operators
    Equal,       // '='
    Plus,        // '+'
    Minus,       // '-'
    Star,        // '*'
    Slash,       // '/'
    EqualEqual,  // '=='
    ExclEqual,   // '!='
    LAngle,      // '<'
    LAngleEqual, // '<='
    RAngle,      // '>'
    RAngleEqual, // '>='
}

static KEYWORDS: Lazy<BiMap<TokenKind, &'static str>> = Lazy::new(|| {
    let mut map: BiMap<TokenKind, &'static str> = BiMap::new();
    map.insert(TokenKind::KwLabel, "LABEL");
    map.insert(TokenKind::KwGoto, "GOTO");
    map.insert(TokenKind::KwPrint, "PRINT");
    map.insert(TokenKind::KwInput, "INPUT");
    map.insert(TokenKind::KwLet, "LET");
    map.insert(TokenKind::KwIf, "IF");
    map.insert(TokenKind::KwThen, "THEN");
    map.insert(TokenKind::KwEndIf, "ENDIF");
    map.insert(TokenKind::KwWhile, "WHILE");
    map.insert(TokenKind::KwRepeat, "REPEAT");
    map.insert(TokenKind::KwEndWhile, "ENDWHILE");
    map
});

impl TokenKind {
    /// Look the exact text up in the reserved word table. Case sensitive.
    pub fn keyword(s: &str) -> Option<TokenKind> {
        KEYWORDS.get_by_right(s).copied()
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenKind::EqualEqual
                | TokenKind::ExclEqual
                | TokenKind::LAngle
                | TokenKind::LAngleEqual
                | TokenKind::RAngle
                | TokenKind::RAngleEqual
        )
    }
}

/// 1-based position of a token's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub line: usize,
    pub col: usize,
}

impl Default for Pos {
    fn default() -> Self {
        Pos { line: 1, col: 1 }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
