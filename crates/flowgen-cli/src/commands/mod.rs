pub mod check;
pub mod dump;
pub mod generate;
pub mod source_loader;

#[cfg(test)]
mod source_loader_tests;

use std::fmt::Display;
use std::path::PathBuf;

use flowgen_compiler::{Error, SourceMap, Translator, UntaggedFields};

/// Where Go sources come from.
pub struct SourceArgs {
    pub paths: Vec<PathBuf>,
    pub recursive: bool,
}

/// Options shaping the type model.
pub struct ModelArgs {
    pub exported_only: bool,
    pub include_untagged: bool,
}

impl ModelArgs {
    pub fn translator(&self) -> Translator {
        let untagged = if self.include_untagged {
            UntaggedFields::UseIdent
        } else {
            UntaggedFields::Skip
        };
        Translator::new()
            .exported_only(self.exported_only)
            .untagged(untagged)
    }
}

/// Print `error: {message}` and exit with status 1.
pub fn fail(message: impl Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

/// Render a translation error against the run's sources and exit with status 1.
pub fn fail_with(err: &Error, sources: &SourceMap, color: bool) -> ! {
    eprintln!("{}", err.printer().sources(sources).colored(color).render());
    std::process::exit(1);
}
