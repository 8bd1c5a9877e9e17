//! Test utilities.

use flowgen_core::SourceDecl;

use crate::extract::extract;
use crate::source_map::SourceId;
use crate::typegen::flow::Config;
use crate::{Error, Translator};

pub fn decls(source: &str) -> Vec<SourceDecl> {
    extract(source, SourceId::default()).expect("valid Go source")
}

/// Flow output of `source` without the file header.
pub fn flow(source: &str) -> String {
    flow_with(Translator::new(), source)
}

pub fn flow_with(translator: Translator, source: &str) -> String {
    translator
        .flow_config(Config::new().header(false))
        .translate(&decls(source))
        .expect("translation succeeds")
}

pub fn flow_error(source: &str) -> Error {
    Translator::new()
        .translate(&decls(source))
        .expect_err("translation fails")
}
