//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Model options are shared by every command that runs the pipeline.

use clap::Command;

use super::args::*;

/// Add the options that shape the type model.
fn with_model_args(cmd: Command) -> Command {
    cmd.arg(no_recursive_arg())
        .arg(exported_only_arg())
        .arg(include_untagged_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("flowgen")
        .about("Generate Flow type declarations from Go structs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(generate_command())
        .subcommand(check_command())
        .subcommand(dump_command())
}

/// Translate Go sources to a Flow module.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Generate Flow types from Go sources")
        .override_usage(
            "\
  flowgen generate [PATH]... [-o <OUT>]
  flowgen generate --from-json <FILE> [-o <OUT>]",
        )
        .after_help(
            r#"EXAMPLES:
  flowgen generate ./models               # package directory, stdout
  flowgen generate ./models -o web/src    # writes web/src/models.js
  flowgen generate a.go b.go -o types.js  # explicit files and output
  flowgen generate --from-json decls.json # previously dumped declarations"#,
        )
        .arg(paths_arg())
        .arg(from_json_arg())
        .arg(output_arg())
        .arg(no_header_arg())
        .arg(no_export_arg())
        .arg(color_arg());

    with_model_args(cmd)
}

/// Validate Go sources without writing output.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Check that Go sources translate")
        .override_usage("  flowgen check [PATH]...")
        .after_help(
            r#"EXAMPLES:
  flowgen check                 # current directory
  flowgen check ./models        # package directory"#,
        )
        .arg(paths_arg())
        .arg(color_arg());

    with_model_args(cmd)
}

/// Print pipeline input or the built model as JSON.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show extracted declarations or the type model as JSON")
        .override_usage("  flowgen dump [PATH]... [--stage <STAGE>]")
        .after_help(
            r#"EXAMPLES:
  flowgen dump ./models                 # extracted declarations
  flowgen dump ./models --stage model   # model with parsed directives"#,
        )
        .arg(paths_arg())
        .arg(stage_arg())
        .arg(color_arg());

    with_model_args(cmd)
}
