//! Lexer for Go source.
//!
//! Produces span-based tokens without storing text. Only the subset of Go
//! needed to read type declarations is distinguished; operators and other
//! punctuation the declaration parser never inspects lex as `Garbage`.
//!
//! Consecutive unrecognized characters coalesce into a single `Garbage`
//! token. Garbage is harmless inside skipped declarations (function bodies,
//! constant expressions) and an error anywhere the parser needs a type.

use logos::Logos;

use crate::source_map::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("*")]
    Star,

    #[token(".")]
    Dot,

    #[token("...")]
    Ellipsis,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("=")]
    Equals,

    #[token("~")]
    Tilde,

    /// Channel direction.
    #[token("<-")]
    Arrow,

    #[token("package")]
    Package,

    #[token("import")]
    Import,

    #[token("type")]
    Type,

    #[token("struct")]
    Struct,

    #[token("interface")]
    Interface,

    #[token("map")]
    Map,

    #[token("chan")]
    Chan,

    #[token("func")]
    Func,

    #[token("const")]
    Const,

    #[token("var")]
    Var,

    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Ident,

    #[regex(r"[0-9][0-9a-zA-Z_.]*")]
    Number,

    /// Interpreted (`"..."`) or raw (`` `...` ``) string literal.
    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    #[regex(r"`[^`]*`")]
    String,

    #[regex(r"'(?:[^'\\\n]|\\.)*'")]
    Rune,

    #[regex(r"[ \t\r\f]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    /// Coalesced unrecognized input.
    Garbage,

    /// End of input. Never produced by the lexer itself.
    Eof,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::Newline | Self::LineComment | Self::BlockComment
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }

    pub fn is_open_bracket(self) -> bool {
        matches!(self, Self::ParenOpen | Self::BracketOpen | Self::BraceOpen)
    }

    pub fn is_close_bracket(self) -> bool {
        matches!(
            self,
            Self::ParenClose | Self::BracketClose | Self::BraceClose
        )
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes source into a vector of span-based tokens, trivia included.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Garbage, Span::new(start, end)));
                }
                tokens.push(Token::new(kind, lexer.span().into()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        Span::new(start, source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span.range()]
}
