//! Output rendering methods.

use super::{DO_NOT_EDIT, Emitter};
use crate::emit::FieldLine;

impl Emitter<'_> {
    pub(super) fn emit_header(&mut self) {
        let c = self.c();
        self.output.push_str(&format!(
            "{}// @flow{}\n\n{}// {}{}\n\n",
            c.comment, c.reset, c.comment, DO_NOT_EDIT, c.reset
        ));
    }

    /// Emit documentation lines as `//` comments.
    pub(super) fn emit_doc(&mut self, indent: &str, lines: &[String]) {
        let c = self.c();
        for line in lines {
            let sep = if line.is_empty() { "" } else { " " };
            self.output
                .push_str(&format!("{indent}{}//{sep}{line}{}\n", c.comment, c.reset));
        }
    }

    fn emit_decl_head(&mut self, name: &str, opaque: bool) {
        let c = self.c();
        if self.config.export {
            self.output.push_str(&format!("{}export{} ", c.syntax, c.reset));
        }
        if opaque {
            self.output.push_str(&format!("{}opaque{} ", c.syntax, c.reset));
        }
        self.output.push_str(&format!(
            "{}type{} {}{}{} {}={} ",
            c.syntax, c.reset, c.name, name, c.reset, c.syntax, c.reset
        ));
    }

    /// Emit `export type Name = target` with proper coloring.
    pub(super) fn emit_type_decl(&mut self, name: &str, target: &str, opaque: bool) {
        self.emit_decl_head(name, opaque);
        self.output.push_str(&format!("{target}\n\n"));
    }

    /// Emit an object shape: `{ ... }`, or `{| ... |}` when exact.
    pub(super) fn emit_object(&mut self, name: &str, exact: bool, fields: &[FieldLine]) {
        let c = self.c();
        let (open, close) = if exact { ("{|", "|}") } else { ("{", "}") };
        self.emit_decl_head(name, false);

        if fields.is_empty() {
            self.output
                .push_str(&format!("{}{open}{close}{}\n\n", c.syntax, c.reset));
            return;
        }

        self.output.push_str(&format!("{}{open}{}\n", c.syntax, c.reset));
        for field in fields {
            self.emit_doc("\t", &field.doc);
            let opt_marker = if field.optional { "?" } else { "" };
            self.output.push_str(&format!(
                "\t{}{}{opt_marker}:{} {}{},{}",
                field.name, c.syntax, c.reset, field.ty, c.syntax, c.reset
            ));
            if let Some(comment) = &field.comment {
                self.output
                    .push_str(&format!("\t{}// {comment}{}", c.comment, c.reset));
            }
            self.output.push('\n');
        }
        self.output
            .push_str(&format!("{}{close}{}\n\n", c.syntax, c.reset));
    }
}
