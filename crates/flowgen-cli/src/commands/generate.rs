use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flowgen_compiler::typegen::flow::Config;
use flowgen_compiler::{Error, SourceMap, Translator};
use flowgen_core::SourceDecl;
use log::info;

use super::source_loader::{load_json, load_sources};
use super::{ModelArgs, SourceArgs, fail, fail_with};

/// File name used when the output is a directory.
pub const MODELS_FILE: &str = "models.js";

pub struct GenerateArgs {
    pub sources: SourceArgs,
    pub from_json: Option<PathBuf>,
    pub model: ModelArgs,
    pub output: Option<PathBuf>,
    pub header: bool,
    pub export: bool,
    /// Highlight Flow text written to stdout.
    pub color_output: bool,
    pub color_diagnostics: bool,
}

/// Pipeline input of one run.
pub enum Input {
    Go(SourceMap),
    Json(Vec<SourceDecl>),
}

impl Input {
    pub fn translate(&self, translator: &Translator) -> Result<String, Error> {
        match self {
            Input::Go(sources) => translator.translate_sources(sources),
            Input::Json(decls) => translator.translate(decls),
        }
    }

    fn sources(&self) -> SourceMap {
        match self {
            Input::Go(sources) => sources.clone(),
            Input::Json(_) => SourceMap::new(),
        }
    }
}

pub fn run(args: GenerateArgs) {
    let input = match &args.from_json {
        Some(path) => load_json(path).map(Input::Json),
        None => load_sources(&args.sources).map(Input::Go),
    }
    .unwrap_or_else(|e| fail(e));

    let target = output_path(args.output.as_deref());
    let config = Config::new()
        .header(args.header)
        .export(args.export)
        .colored(args.color_output && target.is_none());
    let translator = args.model.translator().flow_config(config);

    // Nothing is written unless the whole run succeeds.
    let output = input
        .translate(&translator)
        .unwrap_or_else(|e| fail_with(&e, &input.sources(), args.color_diagnostics));

    match target {
        None => print!("{output}"),
        Some(path) => {
            if let Err(e) = write_output(&path, &output) {
                fail(format_args!("failed to write '{}': {e}", path.display()));
            }
            info!("wrote {}", path.display());
        }
    }
}

/// Resolve the output destination; `None` means stdout.
///
/// A path ending in `.js` is the output file; any other path is a directory
/// that receives `models.js`.
pub fn output_path(output: Option<&Path>) -> Option<PathBuf> {
    let output = output?;
    if output.as_os_str() == "-" {
        return None;
    }
    if output.extension().is_some_and(|ext| ext == "js") {
        return Some(output.to_path_buf());
    }
    Some(output.join(MODELS_FILE))
}

/// Write `content` to `path`, creating missing parent directories.
pub fn write_output(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
