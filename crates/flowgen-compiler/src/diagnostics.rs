//! Builder-pattern printer for rendering translation errors.
//!
//! Syntax errors are shown with the offending source line when the sources
//! of the run are available. Other errors concern the model rather than a
//! position in the text and render as a single line.

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::error::{Error, SyntaxError};
use crate::source_map::{SourceMap, Span};

/// Builder for rendering an error with various options.
pub struct DiagnosticsPrinter<'e, 's> {
    error: &'e Error,
    sources: Option<&'s SourceMap>,
    colored: bool,
}

impl<'e, 's> DiagnosticsPrinter<'e, 's> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            sources: None,
            colored: false,
        }
    }

    pub fn sources(mut self, sources: &'s SourceMap) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        match self.error {
            Error::Syntax(err) => self
                .render_snippet(err)
                .unwrap_or_else(|| format!("error: {err}")),
            other => format!("error: {other}"),
        }
    }

    fn render_snippet(&self, err: &SyntaxError) -> Option<String> {
        let source = self.sources?.get(err.source_id)?;
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let range = adjust_range(err.span, source.content.len());
        let snippet = Snippet::source(source.content)
            .line_start(1)
            .path(source.kind.display_name())
            .annotation(AnnotationKind::Primary.span(range).label(&err.message));
        let report = vec![Level::ERROR.primary_title(&err.message).element(snippet)];
        Some(renderer.render(&report).to_string())
    }
}

fn adjust_range(span: Span, limit: usize) -> std::ops::Range<usize> {
    let start = (span.start as usize).min(limit);
    let end = (span.end as usize).min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}

impl Error {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}
