use flowgen_compiler::Error;
use flowgen_compiler::extract::extract_all;
use log::info;

use super::source_loader::load_sources;
use super::{ModelArgs, SourceArgs, fail, fail_with};

pub struct CheckArgs {
    pub sources: SourceArgs,
    pub model: ModelArgs,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let sources = load_sources(&args.sources).unwrap_or_else(|e| fail(e));

    let translator = args.model.translator();
    let result = extract_all(&sources)
        .map_err(Error::from)
        .and_then(|decls| translator.catalogue(&decls));

    match result {
        Ok(catalogue) => info!("{} declarations translate cleanly", catalogue.len()),
        Err(err) => fail_with(&err, &sources, args.color),
    }

    // Silent on success (like cargo check)
}
