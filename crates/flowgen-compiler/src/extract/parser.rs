//! Recursive-descent reader for Go type declarations.
//!
//! Only `type` declarations are read. Imports, functions, variables and
//! constants are skipped by bracket balancing, so their bodies may contain
//! anything the lexer can tokenize.
//!
//! Trivia is folded into the significant tokens before parsing: each token
//! knows whether a line break precedes it (Go's implicit semicolons), the
//! comment group directly above it, and the comment trailing it on its line.

use flowgen_core::{SourceBody, SourceDecl, SourceField, TypeRef};
use log::debug;

use super::lexer::{Token, TokenKind, lex, token_text};
use super::literal::unquote;
use crate::error::SyntaxError;
use crate::source_map::{SourceId, Span};

/// Go's predeclared type names. `any` is handled separately.
const PREDECLARED: &[&str] = &[
    "bool",
    "byte",
    "comparable",
    "complex64",
    "complex128",
    "error",
    "float32",
    "float64",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "rune",
    "string",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
];

/// A significant token with the surrounding trivia folded in.
#[derive(Debug, Clone)]
struct Lexeme {
    kind: TokenKind,
    span: Span,
    /// A line break separates this token from the previous one.
    newline_before: bool,
    /// Comment group ending on the line directly above.
    doc: Vec<String>,
    /// Comment following this token on the same line.
    trailing: Option<String>,
}

type PResult<T> = Result<T, SyntaxError>;

pub struct Parser<'s> {
    source: &'s str,
    source_id: SourceId,
    /// Always ends with an `Eof` lexeme.
    lexemes: Vec<Lexeme>,
    pos: usize,
    decls: Vec<SourceDecl>,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str, source_id: SourceId) -> Self {
        let lexemes = fold_trivia(source, &lex(source));
        Self {
            source,
            source_id,
            lexemes,
            pos: 0,
            decls: Vec::new(),
        }
    }

    /// Read every type declaration of the file, in source order.
    pub fn parse(mut self) -> PResult<Vec<SourceDecl>> {
        use TokenKind::*;
        loop {
            match self.kind() {
                Eof => break,
                Type => self.type_decl()?,
                Import | Var | Const => self.skip_spec_decl(),
                Func => self.skip_func_decl(),
                // package clause, stray semicolons
                _ => self.bump(),
            }
        }
        Ok(self.decls)
    }

    fn type_decl(&mut self) -> PResult<()> {
        let keyword_doc = self.current().doc.clone();
        self.bump();
        if self.kind() != TokenKind::ParenOpen {
            return self.type_spec(keyword_doc);
        }

        self.bump();
        loop {
            match self.kind() {
                TokenKind::ParenClose => {
                    self.bump();
                    return Ok(());
                }
                TokenKind::Semicolon => self.bump(),
                TokenKind::Eof => return Err(self.error_here("unterminated type group")),
                _ => {
                    let doc = self.current().doc.clone();
                    self.type_spec(doc)?;
                }
            }
        }
    }

    fn type_spec(&mut self, doc: Vec<String>) -> PResult<()> {
        let name = self.ident("type name")?;

        // Generic declarations stay in the model as opaque `generic` aliases.
        if self.kind() == TokenKind::BracketOpen && self.starts_type_params() {
            debug!("generic type `{name}` kept opaque");
            self.skip_balanced();
            self.parse_type()?;
            let body = SourceBody::Alias(TypeRef::primitive("generic"));
            self.decls.push(SourceDecl { name, doc, body });
            return Ok(());
        }

        if self.kind() == TokenKind::Equals {
            self.bump();
        }

        let body = if self.kind() == TokenKind::Struct {
            SourceBody::Struct(self.struct_body()?)
        } else {
            SourceBody::Alias(self.parse_type()?)
        };
        self.decls.push(SourceDecl { name, doc, body });
        Ok(())
    }

    /// `type Name[` is a generic declaration rather than an array type when
    /// the bracket opens a parameter list: `[T any]`, `[K, V any]`, `[S ~[]E]`.
    fn starts_type_params(&self) -> bool {
        use TokenKind::*;
        self.nth(1).kind == Ident
            && matches!(
                self.nth(2).kind,
                Ident | Comma | Tilde | Interface | BracketOpen | Map | Chan | Func | Struct
            )
    }

    fn struct_body(&mut self) -> PResult<Vec<SourceField>> {
        self.expect(TokenKind::Struct, "`struct`")?;
        self.expect(TokenKind::BraceOpen, "`{`")?;

        let mut fields = Vec::new();
        loop {
            match self.kind() {
                TokenKind::BraceClose => {
                    self.bump();
                    return Ok(fields);
                }
                TokenKind::Semicolon => self.bump(),
                TokenKind::Eof => return Err(self.error_here("unterminated struct")),
                _ => self.field_decl(&mut fields)?,
            }
        }
    }

    fn field_decl(&mut self, fields: &mut Vec<SourceField>) -> PResult<()> {
        let doc = self.current().doc.clone();

        let mut declared = if self.is_embedded_field() {
            vec![SourceField::embedded(self.parse_type()?)]
        } else {
            let mut names = vec![self.ident("field name")?];
            while self.kind() == TokenKind::Comma {
                self.bump();
                names.push(self.ident("field name")?);
            }
            let ty = self.parse_type()?;
            names
                .iter()
                .map(|name| SourceField::named(name, ty.clone()))
                .collect()
        };

        let tag = if self.kind() == TokenKind::String && !self.current().newline_before {
            let tag = unquote(self.text()).ok_or_else(|| self.error_here("malformed struct tag"))?;
            self.bump();
            Some(tag)
        } else {
            None
        };

        if !self.at_field_end() {
            return Err(self.error_here(format!("unexpected {} in field", self.describe())));
        }

        let comment = self.previous().trailing.clone();
        for field in &mut declared {
            field.doc = doc.clone();
            field.tag = tag.clone();
            field.comment = comment.clone();
        }
        fields.extend(declared);
        Ok(())
    }

    /// Embedded fields are a bare type on their own: `Base`, `*Base`,
    /// `pkg.Base`, `Base[T]`, optionally followed by a tag.
    fn is_embedded_field(&self) -> bool {
        match self.kind() {
            TokenKind::Star => true,
            TokenKind::Ident => {
                let next = self.nth(1);
                if next.newline_before {
                    return true;
                }
                match next.kind {
                    TokenKind::Dot | TokenKind::String | TokenKind::Semicolon | TokenKind::BraceClose => {
                        true
                    }
                    TokenKind::BracketOpen => self.ends_field_after_bracket(1),
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Whether the bracket group starting `offset` tokens ahead is the last
    /// thing in the field (type arguments) rather than a slice or array prefix.
    fn ends_field_after_bracket(&self, offset: usize) -> bool {
        let mut depth = 0usize;
        let mut idx = self.pos + offset;
        while idx < self.lexemes.len() {
            let kind = self.lexemes[idx].kind;
            if kind.is_open_bracket() {
                depth += 1;
            } else if kind.is_close_bracket() {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            } else if kind == TokenKind::Eof {
                return true;
            }
            idx += 1;
        }
        let after = &self.lexemes[(idx + 1).min(self.lexemes.len() - 1)];
        after.newline_before
            || matches!(
                after.kind,
                TokenKind::String | TokenKind::Semicolon | TokenKind::BraceClose | TokenKind::Eof
            )
    }

    fn at_field_end(&self) -> bool {
        self.current().newline_before
            || matches!(
                self.kind(),
                TokenKind::Semicolon | TokenKind::BraceClose | TokenKind::Eof
            )
    }

    fn parse_type(&mut self) -> PResult<TypeRef> {
        use TokenKind::*;
        match self.kind() {
            Star => {
                self.bump();
                Ok(TypeRef::pointer(self.parse_type()?))
            }
            BracketOpen => self.slice_or_array(),
            Map => {
                self.bump();
                self.expect(BracketOpen, "`[`")?;
                let key = self.parse_type()?;
                self.expect(BracketClose, "`]`")?;
                let value = self.parse_type()?;
                Ok(TypeRef::map(key, value))
            }
            Chan => {
                self.bump();
                if self.kind() == Arrow {
                    self.bump();
                }
                self.parse_type()?;
                Ok(TypeRef::primitive("chan"))
            }
            Arrow => {
                self.bump();
                self.expect(Chan, "`chan`")?;
                self.parse_type()?;
                Ok(TypeRef::primitive("chan"))
            }
            Func => {
                self.bump();
                self.func_signature()?;
                Ok(TypeRef::primitive("func"))
            }
            Struct => {
                self.struct_body()?;
                Ok(TypeRef::primitive("struct"))
            }
            Interface => {
                self.bump();
                if self.kind() != BraceOpen {
                    return Err(self.error_here(format!("expected `{{`, found {}", self.describe())));
                }
                self.skip_balanced();
                Ok(TypeRef::primitive("interface"))
            }
            ParenOpen => {
                self.bump();
                let ty = self.parse_type()?;
                self.expect(ParenClose, "`)`")?;
                Ok(ty)
            }
            Ident => self.type_name(),
            _ => Err(self.error_here(format!("expected type, found {}", self.describe()))),
        }
    }

    fn type_name(&mut self) -> PResult<TypeRef> {
        let first = self.ident("type name")?;

        let ty = if self.kind() == TokenKind::Dot && !self.current().newline_before {
            self.bump();
            let name = self.ident("type name after `.`")?;
            TypeRef::opaque(&first, &name)
        } else if first == "any" {
            TypeRef::primitive("interface")
        } else if PREDECLARED.contains(&first.as_str()) {
            TypeRef::primitive(&first)
        } else {
            TypeRef::named(&first)
        };

        // Type arguments of an instantiated generic are not kept.
        if self.kind() == TokenKind::BracketOpen && !self.current().newline_before {
            self.skip_balanced();
        }
        Ok(ty)
    }

    fn slice_or_array(&mut self) -> PResult<TypeRef> {
        self.expect(TokenKind::BracketOpen, "`[`")?;
        match self.kind() {
            TokenKind::BracketClose => {
                self.bump();
                Ok(TypeRef::slice(self.parse_type()?))
            }
            TokenKind::Ellipsis => {
                self.bump();
                self.expect(TokenKind::BracketClose, "`]`")?;
                Ok(TypeRef::array(Some("..."), self.parse_type()?))
            }
            _ => {
                let start = self.current().span.start;
                let mut end = start;
                let mut depth = 0usize;
                loop {
                    let kind = self.kind();
                    match kind {
                        TokenKind::Eof => return Err(self.error_here("unterminated array length")),
                        TokenKind::BracketClose if depth == 0 => break,
                        _ if kind.is_open_bracket() => depth += 1,
                        _ if kind.is_close_bracket() => depth = depth.saturating_sub(1),
                        _ => {}
                    }
                    end = self.current().span.end;
                    self.bump();
                }
                let len = self.source[start as usize..end as usize].trim().to_owned();
                self.bump();
                Ok(TypeRef::array(Some(&len), self.parse_type()?))
            }
        }
    }

    /// Parameters and results of a function type. Only consumed.
    fn func_signature(&mut self) -> PResult<()> {
        use TokenKind::*;
        if self.kind() != ParenOpen {
            return Err(self.error_here(format!("expected `(`, found {}", self.describe())));
        }
        self.skip_balanced();
        if self.current().newline_before {
            return Ok(());
        }
        match self.kind() {
            ParenOpen => self.skip_balanced(),
            Ident | Star | BracketOpen | Map | Chan | Func | Struct | Interface | Arrow => {
                self.parse_type()?;
            }
            _ => {}
        }
        Ok(())
    }

    fn skip_spec_decl(&mut self) {
        self.bump();
        if self.kind() == TokenKind::ParenOpen {
            self.skip_balanced();
            return;
        }
        loop {
            match self.kind() {
                TokenKind::Eof | TokenKind::Semicolon => return,
                kind if kind.is_open_bracket() => self.skip_balanced(),
                _ => self.bump(),
            }
            if self.current().newline_before {
                return;
            }
        }
    }

    /// Skip `func (recv) Name[T any](params) results { body }`.
    fn skip_func_decl(&mut self) {
        use TokenKind::*;
        self.bump();
        loop {
            match self.kind() {
                Eof | Semicolon => return,
                BraceOpen => {
                    self.skip_balanced();
                    return;
                }
                Struct | Interface if self.nth(1).kind == BraceOpen => {
                    self.bump();
                    self.skip_balanced();
                }
                kind if kind.is_open_bracket() => self.skip_balanced(),
                _ => self.bump(),
            }
            if self.current().newline_before {
                return;
            }
        }
    }

    /// Consume a bracket group, starting at its opening bracket.
    fn skip_balanced(&mut self) {
        let mut depth = 0usize;
        loop {
            let kind = self.kind();
            if kind == TokenKind::Eof {
                return;
            }
            if kind.is_open_bracket() {
                depth += 1;
            } else if kind.is_close_bracket() {
                depth = depth.saturating_sub(1);
            }
            self.bump();
            if depth == 0 {
                return;
            }
        }
    }

    fn current(&self) -> &Lexeme {
        self.nth(0)
    }

    fn nth(&self, n: usize) -> &Lexeme {
        let idx = (self.pos + n).min(self.lexemes.len() - 1);
        &self.lexemes[idx]
    }

    fn previous(&self) -> &Lexeme {
        &self.lexemes[self.pos.saturating_sub(1)]
    }

    fn kind(&self) -> TokenKind {
        self.current().kind
    }

    fn text(&self) -> &'s str {
        &self.source[self.current().span.range()]
    }

    fn bump(&mut self) {
        if self.pos + 1 < self.lexemes.len() {
            self.pos += 1;
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> PResult<Span> {
        if self.kind() != kind {
            return Err(self.error_here(format!("expected {what}, found {}", self.describe())));
        }
        let span = self.current().span;
        self.bump();
        Ok(span)
    }

    fn ident(&mut self, what: &str) -> PResult<String> {
        let span = self.expect(TokenKind::Ident, what)?;
        Ok(self.source[span.range()].to_owned())
    }

    fn describe(&self) -> String {
        match self.kind() {
            TokenKind::Eof => "end of file".to_owned(),
            _ => format!("`{}`", self.text()),
        }
    }

    fn error_here(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(self.source_id, self.current().span, message)
    }
}

/// Fold trivia tokens into the significant tokens around them.
fn fold_trivia(source: &str, tokens: &[Token]) -> Vec<Lexeme> {
    let mut lexemes: Vec<Lexeme> = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut newline_before = false;
    // Line breaks since the last comment of the pending group.
    let mut gap = 0usize;
    let mut group: Vec<String> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Whitespace => {}
            TokenKind::Newline => {
                newline_before = true;
                gap += 1;
            }
            TokenKind::LineComment | TokenKind::BlockComment => {
                let lines = comment_lines(token_text(source, token));
                if !newline_before && group.is_empty() {
                    if let Some(last) = lexemes.last_mut() {
                        if last.trailing.is_none() {
                            last.trailing = Some(lines.join(" ").trim().to_owned());
                            continue;
                        }
                    }
                }
                if gap > 1 {
                    group.clear();
                }
                group.extend(lines);
                gap = 0;
            }
            kind => {
                let doc = if gap == 1 && !group.is_empty() {
                    trim_blank_lines(std::mem::take(&mut group))
                } else {
                    group.clear();
                    Vec::new()
                };
                lexemes.push(Lexeme {
                    kind,
                    span: token.span,
                    newline_before,
                    doc,
                    trailing: None,
                });
                newline_before = false;
                gap = 0;
            }
        }
    }

    lexemes.push(Lexeme {
        kind: TokenKind::Eof,
        span: Span::new(source.len(), source.len()),
        newline_before: true,
        doc: Vec::new(),
        trailing: None,
    });
    lexemes
}

/// Comment text without markers, one entry per line.
fn comment_lines(text: &str) -> Vec<String> {
    if let Some(body) = text.strip_prefix("//") {
        let body = body.strip_prefix(' ').unwrap_or(body);
        return vec![body.trim_end().to_owned()];
    }
    let body = text.strip_prefix("/*").unwrap_or(text);
    let body = body.strip_suffix("*/").unwrap_or(body);
    body.lines().map(|line| line.trim().to_owned()).collect()
}

fn trim_blank_lines(mut lines: Vec<String>) -> Vec<String> {
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|l| l.trim().is_empty()).count();
    lines.drain(..leading);
    lines
}
