use tinybc::error::Error;
use tinybc::lexer::Lexer;
use tinybc::token::{Pos, TokenKind};

fn case(code: &str, expects: Vec<TokenKind>) {
    let mut lexer = Lexer::new(code);
    let mut kinds = Vec::new();
    loop {
        let token = lexer.next_token().expect("lexing failed");
        kinds.push(token.kind);
        if token.kind == TokenKind::Eof {
            break;
        }
    }
    for (idx, kind) in kinds.iter().enumerate() {
        println!("{:>2}: {:?}", idx, kind);
    }
    assert_eq!(kinds, expects);
}

// The lexer appends a newline to the source, so every stream ends with
// Newline, Eof.

#[test]
fn operators() {
    use TokenKind::*;
    case(
        "+- */ >= <= == != > < =",
        vec![
            Plus,
            Minus,
            Star,
            Slash,
            RAngleEqual,
            LAngleEqual,
            EqualEqual,
            ExclEqual,
            RAngle,
            LAngle,
            Equal,
            Newline,
            Eof,
        ],
    );
}

#[test]
fn keywords_and_idents() {
    use TokenKind::*;
    case(
        "LET foo = 3.14\nPRINT foo",
        vec![
            KwLet,
            Ident,
            Equal,
            Number,
            Newline,
            KwPrint,
            Ident,
            Newline,
            Eof,
        ],
    );
}

#[test]
fn comments_produce_no_tokens() {
    use TokenKind::*;
    case(
        "PRINT 1 # this is a comment\nPRINT 2",
        vec![KwPrint, Number, Newline, KwPrint, Number, Newline, Eof],
    );
}

#[test]
fn blank_lines() {
    use TokenKind::*;
    case("\n\nPRINT 1", vec![Newline, Newline, KwPrint, Number, Newline, Eof]);
}

#[test]
fn string_text_excludes_quotes() {
    let token = Lexer::new("\"hello world\"").next_token().unwrap();
    assert_eq!(token.kind, TokenKind::Str);
    assert_eq!(token.text, "hello world");
}

#[test]
fn equality_lexeme_is_two_chars() {
    let token = Lexer::new("==").next_token().unwrap();
    assert_eq!(token.text, "==");
}

#[test]
fn number_lexeme_keeps_fraction() {
    let token = Lexer::new("9.125").next_token().unwrap();
    assert_eq!(token.text, "9.125");
}

#[test]
fn positions_are_line_and_column() {
    let mut lexer = Lexer::new("LET a = 1\nPRINT a");
    let first = lexer.next_token().unwrap();
    assert_eq!(first.pos, Pos { line: 1, col: 1 });
    for _ in 0..4 {
        lexer.next_token().unwrap();
    }
    let print = lexer.next_token().unwrap();
    assert_eq!(print.kind, TokenKind::KwPrint);
    assert_eq!(print.pos, Pos { line: 2, col: 1 });
}

// ---- Lexical errors ----

#[test]
fn bang_alone_is_illegal() {
    let err = Lexer::new("!").next_token().unwrap_err();
    assert!(matches!(err, Error::IllegalChar('!', _)));
}

#[test]
fn tab_in_string() {
    let err = Lexer::new("\"a\tb\"").next_token().unwrap_err();
    assert!(matches!(err, Error::IllegalStringChar('\t', _)));
}

#[test]
fn percent_in_string() {
    let err = Lexer::new("\"100%\"").next_token().unwrap_err();
    assert!(matches!(err, Error::IllegalStringChar('%', _)));
}

#[test]
fn comment_marker_in_string() {
    let err = Lexer::new("\"a//b\"").next_token().unwrap_err();
    assert!(matches!(err, Error::IllegalStringChar('/', _)));
}

#[test]
fn single_slash_in_string_is_fine() {
    let token = Lexer::new("\"a/b\"").next_token().unwrap();
    assert_eq!(token.text, "a/b");
}

#[test]
fn unclosed_string_fails_at_line_end() {
    let err = Lexer::new("\"abc").next_token().unwrap_err();
    assert!(matches!(err, Error::IllegalStringChar('\n', _)));
}

#[test]
fn trailing_decimal_point() {
    let err = Lexer::new("123.").next_token().unwrap_err();
    assert!(matches!(err, Error::MalformedNumber(_)));
}

#[test]
fn unknown_token() {
    let err = Lexer::new("(1)").next_token().unwrap_err();
    assert!(matches!(err, Error::UnknownToken('(', _)));
}
