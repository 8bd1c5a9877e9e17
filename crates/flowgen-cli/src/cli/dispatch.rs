//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::io;
use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::{DumpArgs, DumpStage};
use crate::commands::generate::GenerateArgs;
use crate::commands::{ModelArgs, SourceArgs};

pub struct GenerateParams {
    pub paths: Vec<PathBuf>,
    pub from_json: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub no_recursive: bool,
    pub exported_only: bool,
    pub include_untagged: bool,
    pub no_header: bool,
    pub no_export: bool,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            // Input
            paths: parse_paths(m),
            from_json: m.get_one::<PathBuf>("from_json").cloned(),
            no_recursive: m.get_flag("no_recursive"),

            // Model options
            exported_only: m.get_flag("exported_only"),
            include_untagged: m.get_flag("include_untagged"),

            // Output
            output: m.get_one::<PathBuf>("output").cloned(),
            no_header: m.get_flag("no_header"),
            no_export: m.get_flag("no_export"),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            sources: SourceArgs {
                paths: p.paths,
                recursive: !p.no_recursive,
            },
            from_json: p.from_json,
            model: ModelArgs {
                exported_only: p.exported_only,
                include_untagged: p.include_untagged,
            },
            output: p.output,
            header: !p.no_header,
            export: !p.no_export,
            color_output: p.color.enabled_for(&io::stdout()),
            color_diagnostics: p.color.enabled_for(&io::stderr()),
        }
    }
}

pub struct CheckParams {
    pub paths: Vec<PathBuf>,
    pub no_recursive: bool,
    pub exported_only: bool,
    pub include_untagged: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            paths: parse_paths(m),
            no_recursive: m.get_flag("no_recursive"),
            exported_only: m.get_flag("exported_only"),
            include_untagged: m.get_flag("include_untagged"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            sources: SourceArgs {
                paths: p.paths,
                recursive: !p.no_recursive,
            },
            model: ModelArgs {
                exported_only: p.exported_only,
                include_untagged: p.include_untagged,
            },
            color: p.color.enabled_for(&io::stderr()),
        }
    }
}

pub struct DumpParams {
    pub paths: Vec<PathBuf>,
    pub no_recursive: bool,
    pub stage: DumpStage,
    pub exported_only: bool,
    pub include_untagged: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let stage = match m.get_one::<String>("stage").map(|s| s.as_str()) {
            Some("model") => DumpStage::Model,
            _ => DumpStage::Source,
        };
        Self {
            paths: parse_paths(m),
            no_recursive: m.get_flag("no_recursive"),
            stage,
            exported_only: m.get_flag("exported_only"),
            include_untagged: m.get_flag("include_untagged"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            sources: SourceArgs {
                paths: p.paths,
                recursive: !p.no_recursive,
            },
            stage: p.stage,
            model: ModelArgs {
                exported_only: p.exported_only,
                include_untagged: p.include_untagged,
            },
            color: p.color.enabled_for(&io::stderr()),
        }
    }
}

fn parse_paths(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("paths")
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
