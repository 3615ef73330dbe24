use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the built-in dialects from mdbridge-babel/src/dialects
// We need to duplicate this here since build scripts can't access the library
const AVAILABLE_DIALECTS: &[&str] = &["host", "rich"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let dialects = clap::builder::PossibleValuesParser::new(AVAILABLE_DIALECTS);

    let mut cmd = Command::new("mdbridge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert notes between vault markdown and rich editor markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-dialects")
                .long("list-dialects")
                .help("List available dialects")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdbridge.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between dialects (default command)")
                .arg(input_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_parser(dialects.clone())
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_parser(dialects)
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("to-rich")
                .about("Convert a vault note to rich editor markdown")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("to-host")
                .about("Convert rich editor markdown back to a vault note")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("links")
                .about("List the links of a vault note")
                .arg(input_arg())
                .arg(
                    Arg::new("vault")
                        .long("vault")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("type")
                .about("Replay text through the tag recognizer")
                .arg(
                    Arg::new("text")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::Other),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdbridge", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdbridge", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdbridge", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
