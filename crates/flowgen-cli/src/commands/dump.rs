use flowgen_compiler::Error;
use flowgen_compiler::extract::extract_all;
use flowgen_core::source::to_json;

use super::source_loader::load_sources;
use super::{ModelArgs, SourceArgs, fail, fail_with};

/// What `dump` prints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpStage {
    /// Declarations as extracted, readable by `generate --from-json`.
    #[default]
    Source,
    /// The type model with parsed directives and embedding references.
    Model,
}

pub struct DumpArgs {
    pub sources: SourceArgs,
    pub stage: DumpStage,
    pub model: ModelArgs,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let sources = load_sources(&args.sources).unwrap_or_else(|e| fail(e));
    let decls = extract_all(&sources)
        .unwrap_or_else(|e| fail_with(&Error::from(e), &sources, args.color));

    let json = match args.stage {
        DumpStage::Source => to_json(&decls),
        DumpStage::Model => {
            let model = args
                .model
                .translator()
                .model(&decls)
                .unwrap_or_else(|e| fail_with(&e, &sources, args.color));
            serde_json::to_string_pretty(&model)
        }
    };

    match json {
        Ok(json) => println!("{json}"),
        Err(e) => fail(e),
    }
}
