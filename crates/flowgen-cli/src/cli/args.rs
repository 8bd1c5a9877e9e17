//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Go files or package directories (positional, repeatable).
pub fn paths_arg() -> Arg {
    Arg::new("paths")
        .value_name("PATH")
        .num_args(0..)
        .value_parser(value_parser!(PathBuf))
        .help("Go files or package directories (default: current directory, \"-\" for stdin)")
}

/// Output file or directory (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("OUT")
        .value_parser(value_parser!(PathBuf))
        .help("Output .js file, or directory to write models.js into (default: stdout)")
}

/// Only the given directories, not their subdirectories (--no-recursive).
pub fn no_recursive_arg() -> Arg {
    Arg::new("no_recursive")
        .long("no-recursive")
        .action(ArgAction::SetTrue)
        .help("Do not descend into subdirectories")
}

/// Ignore unexported declarations (--exported-only).
pub fn exported_only_arg() -> Arg {
    Arg::new("exported_only")
        .long("exported-only")
        .action(ArgAction::SetTrue)
        .help("Skip declarations whose names are not exported")
}

/// Emit exported fields without a json tag (--include-untagged).
pub fn include_untagged_arg() -> Arg {
    Arg::new("include_untagged")
        .long("include-untagged")
        .action(ArgAction::SetTrue)
        .help("Emit exported fields without a json tag under their Go name")
}

/// Omit the `@flow` header (--no-header).
pub fn no_header_arg() -> Arg {
    Arg::new("no_header")
        .long("no-header")
        .action(ArgAction::SetTrue)
        .help("Omit the @flow pragma and do-not-edit banner")
}

/// Don't export types (--no-export).
pub fn no_export_arg() -> Arg {
    Arg::new("no_export")
        .long("no-export")
        .action(ArgAction::SetTrue)
        .help("Don't export types")
}

/// Read extracted declarations from JSON (--from-json).
pub fn from_json_arg() -> Arg {
    Arg::new("from_json")
        .long("from-json")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("paths")
        .help("Read declarations from a `dump --stage source` JSON file (\"-\" for stdin)")
}

/// Dump stage (--stage).
pub fn stage_arg() -> Arg {
    Arg::new("stage")
        .long("stage")
        .value_name("STAGE")
        .default_value("source")
        .value_parser(["source", "model"])
        .help("What to dump: extracted declarations or the built model")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for info, -vv for debug, -vvv for trace)")
}
