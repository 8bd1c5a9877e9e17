//! Go source extraction.
//!
//! Turns Go source text into `SourceDecl` records: one per type declaration,
//! with raw documentation and unparsed field tags. Interpretation of tags and
//! directives happens later, in `annotate`.

mod lexer;
mod literal;
mod parser;


use flowgen_core::SourceDecl;
use log::debug;

use crate::error::SyntaxError;
use crate::source_map::{SourceId, SourceMap};

pub use lexer::{Token, TokenKind, lex, token_text};
pub use literal::unquote;
pub use parser::Parser;

/// Extract the type declarations of one Go file.
pub fn extract(source: &str, source_id: SourceId) -> Result<Vec<SourceDecl>, SyntaxError> {
    Parser::new(source, source_id).parse()
}

/// Extract every source of a run, in registration order.
pub fn extract_all(sources: &SourceMap) -> Result<Vec<SourceDecl>, SyntaxError> {
    let mut decls = Vec::new();
    for source in sources.iter() {
        let extracted = extract(source.content, source.id)?;
        debug!(
            "extracted {} declarations from {}",
            extracted.len(),
            source.kind.display_name()
        );
        decls.extend(extracted);
    }
    Ok(decls)
}
