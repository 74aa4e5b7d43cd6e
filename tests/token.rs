use tinybc::token::{TokenKind, TokenKind::*};

fn assert(code: &str, expect: TokenKind) {
    use tinybc::lexer::Lexer;
    let token = Lexer::new(code).next_token().unwrap();
    assert_eq!(token.kind, expect);
}

macro_rules! case {
    ($name:ident, $code:expr, $expect:expr) => {
        #[test]
        fn $name() {
            assert($code, $expect);
        }
    };
}

// ---- Double-char operators ----
case!(equal_equal, "==", EqualEqual);
case!(excl_equal, "!=", ExclEqual);
case!(langle_equal, "<=", LAngleEqual);
case!(rangle_equal, ">=", RAngleEqual);

// ---- Single-char operators ----
case!(equal, "=", Equal);
case!(plus, "+", Plus);
case!(minus, "-", Minus);
case!(star, "*", Star);
case!(slash, "/", Slash);
case!(langle, "<", LAngle);
case!(rangle, ">", RAngle);

// ---- Keywords ----
case!(kw_label, "LABEL", KwLabel);
case!(kw_goto, "GOTO", KwGoto);
case!(kw_print, "PRINT", KwPrint);
case!(kw_input, "INPUT", KwInput);
case!(kw_let, "LET", KwLet);
case!(kw_if, "IF", KwIf);
case!(kw_then, "THEN", KwThen);
case!(kw_endif, "ENDIF", KwEndIf);
case!(kw_while, "WHILE", KwWhile);
case!(kw_repeat, "REPEAT", KwRepeat);
case!(kw_endwhile, "ENDWHILE", KwEndWhile);

// ---- Literals / identifiers ----
case!(number, "32313", Number);
case!(number_fractional, "3.13", Number);
case!(ident, "foobar", Ident);
case!(ident_alnum, "x1", Ident);
case!(string, "\"foobar\"", Str);
case!(newline, "\n", Newline);

// Keywords are case sensitive; lower case is an identifier.
case!(lowercase_keyword, "print", Ident);
