// Command-line interface for mdbridge
//
// This binary converts notes between the vault's markdown (tab indentation, [[bracket]] links) and
// the rich editor's markdown (space indentation, standard links, whitespace entities).
// The conversions themselves live in the mdbridge-babel crate; this crate only reads files,
// loads configuration and prints.
//
// Usage:
//  mdbridge <input> --to <dialect> [--from <dialect>] [--output <file>]  - Convert (default)
//  mdbridge convert <input> --to <dialect> [--from <dialect>] [-o <file>] - Same as above
//  mdbridge to-rich <input> [-o <file>]       - Vault note to editor markdown
//  mdbridge to-host <input> [-o <file>]       - Editor markdown back to a vault note
//  mdbridge links <input> [--vault <dir>]     - List the links of a vault note
//  mdbridge type <text>                       - Replay keystrokes through the tag recognizer
//  mdbridge --list-dialects                   - List available dialects
//
// Extra Parameters:
//
// Configuration keys can be overridden with --extra-<key> <value>, e.g.
//  mdbridge to-rich note.md --extra-indent-string "    "
//  mdbridge to-host note.mdx --extra-convert-embeds false

mod report;

use clap::{Arg, ArgAction, Command, ValueHint};
use mdbridge_babel::common::resolve::FsResolver;
use mdbridge_babel::{handle_key, DialectRegistry, EditSurface, TagRecognizer, TranscodeRules};
use mdbridge_config::{BridgeConfig, Loader};
use std::collections::HashMap;
use std::fs;

const SUBCOMMANDS: &[&str] = &["convert", "to-rich", "to-host", "links", "type", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with("--"));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

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

fn build_cli() -> Command {
    Command::new("mdbridge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert notes between vault markdown and rich editor markdown")
        .long_about(
            "mdbridge converts notes between a vault's markdown dialect and a rich-text editor's.\n\n\
            Dialects:\n  \
            - host: vault markdown, tab indentation, [[bracket]] links (.md, .markdown)\n  \
            - rich: editor markdown, space indentation, standard links (.mdx)\n\n\
            Extra Parameters:\n  \
            Use --extra-<key> <value> to override a configuration value:\n  \
            indent-string, convert-embeds, collapse-tag-links, tag-scheme.\n\n\
            Examples:\n  \
            mdbridge note.md --to rich                # Convert to editor markdown (stdout)\n  \
            mdbridge note.mdx --to host -o note.md    # Convert back to a vault note\n  \
            mdbridge links note.md --vault .          # List links, resolved in the vault\n  \
            mdbridge type 'see #project/x '           # Try the tag recognizer"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .long_about(
                    "Convert a note between dialects.\n\n\
                    The source dialect is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    mdbridge convert note.md --to rich           # Vault note to editor markdown\n  \
                    mdbridge convert draft.txt --from rich --to host\n  \
                    mdbridge note.md --to rich                   # 'convert' is optional"
                )
                .arg(input_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source dialect (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target dialect (required)")
                        .required(true)
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
                .long_about(
                    "List every link of a vault note as the editor sees it.\n\n\
                    Each line holds the link kind (internal, external, tag), its target and its\n\
                    label. With --vault, internal targets are resolved against the files of the\n\
                    vault and the resolved path is appended."
                )
                .arg(input_arg())
                .arg(
                    Arg::new("vault")
                        .long("vault")
                        .value_name("DIR")
                        .help("Vault root used to resolve internal links")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the links as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("type")
                .about("Replay text keystroke by keystroke through the tag recognizer")
                .long_about(
                    "Types the given text into an empty editor surface with the tag recognizer\n\
                    attached, then prints the resulting rich markdown and its vault form.\n\
                    A newline in the text starts a new paragraph."
                )
                .arg(
                    Arg::new("text")
                        .help("Text to type")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that is not a flag or a subcommand is taken as the input file
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-dialects") {
        handle_list_dialects_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration override: {err}");
        std::process::exit(1);
    }
    for key in extra_params.keys() {
        log::warn!("ignoring unknown parameter --extra-{key}");
    }
    let rules = TranscodeRules::from(&config);
    let registry = DialectRegistry::with_rules(rules.clone());

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").expect("to is required");

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => match registry.detect_dialect_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect dialect from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, &from, to, output);
        }
        Some(("to-rich", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, "host", "rich", output);
        }
        Some(("to-host", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, "rich", "host", output);
        }
        Some(("links", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let vault = sub_matches.get_one::<String>("vault").map(|s| s.as_str());
            handle_links_command(input, vault, sub_matches.get_flag("json"), &rules);
        }
        Some(("type", sub_matches)) => {
            let text = sub_matches
                .get_one::<String>("text")
                .expect("text is required");
            handle_type_command(text, &registry, &rules);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    // RUST_LOG, when set, takes precedence over the default level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            log::info!("wrote {path}");
        }
        None => print!("{text}"),
    }
}

/// Handle the convert command (and its to-rich / to-host shortcuts)
fn handle_convert_command(
    registry: &DialectRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
) {
    // Validate dialects exist
    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let source = read_input(input);

    let result = registry.convert(&source, from, to).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });

    write_output(output, &result);
}

/// Handle the links command
fn handle_links_command(input: &str, vault: Option<&str>, json: bool, rules: &TranscodeRules) {
    let source = read_input(input);

    let resolver = vault.map(FsResolver::new);
    // the note's own path inside the vault, for resolving relative targets
    let base = vault
        .and_then(|root| pathdiff::diff_paths(input, root))
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default();

    let entries = report::collect_links(&source, rules, resolver.as_ref(), &base);

    if json {
        let text = serde_json::to_string_pretty(&entries).unwrap_or_else(|e| {
            eprintln!("Error serializing links: {e}");
            std::process::exit(1);
        });
        println!("{text}");
    } else {
        print!("{}", report::render_text(&entries));
    }
}

/// Handle the type command
fn handle_type_command(text: &str, registry: &DialectRegistry, rules: &TranscodeRules) {
    let mut recognizer = TagRecognizer::from_rules(rules);
    recognizer.attach();

    let mut surface = EditSurface::new();
    for ch in text.chars() {
        handle_key(&mut recognizer, &mut surface, ch);
    }
    recognizer.detach();

    let rich = surface.to_markdown();
    let host = registry.import(&rich, "rich").unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });

    println!("rich:\n{rich}\n");
    println!("host:\n{host}");
}

/// Handle the list-dialects command
fn handle_list_dialects_command() {
    let registry = DialectRegistry::default();
    println!("Available dialects:\n");
    for name in registry.list_dialects() {
        if let Ok(dialect) = registry.get(&name) {
            let extensions = dialect.file_extensions().join(", ");
            println!("  {name:<6} {} [{extensions}]", dialect.description());
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> BridgeConfig {
    let loader = Loader::new().with_optional_file("mdbridge.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut BridgeConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("indent-string") {
        config.transcode.indent_string = raw;
    }
    if let Some(raw) = extra_params.remove("convert-embeds") {
        config.transcode.convert_embeds = parse_bool_arg("convert-embeds", &raw);
    }
    if let Some(raw) = extra_params.remove("collapse-tag-links") {
        config.transcode.collapse_tag_links = parse_bool_arg("collapse-tag-links", &raw);
    }
    if let Some(raw) = extra_params.remove("tag-scheme") {
        config.tags.scheme = raw;
    }
}

fn parse_bool_arg(key: &str, raw: &str) -> bool {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => {
            eprintln!("Invalid boolean value '{raw}' for --extra-{key}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_with_values() {
        let (cleaned, extras) = parse_extra_args(&args(&[
            "mdbridge",
            "note.md",
            "--extra-indent-string",
            "    ",
            "--to",
            "rich",
        ]));
        assert_eq!(cleaned, args(&["mdbridge", "note.md", "--to", "rich"]));
        assert_eq!(extras.get("indent-string").map(String::as_str), Some("    "));
    }

    #[test]
    fn test_parse_extra_args_boolean_flag() {
        let (cleaned, extras) =
            parse_extra_args(&args(&["mdbridge", "--extra-convert-embeds", "--to", "rich"]));
        assert_eq!(cleaned, args(&["mdbridge", "--to", "rich"]));
        assert_eq!(extras.get("convert-embeds").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_apply_config_overrides() {
        let mut config = mdbridge_config::load_defaults().unwrap();
        let mut extras = HashMap::new();
        extras.insert("indent-string".to_string(), "    ".to_string());
        extras.insert("collapse-tag-links".to_string(), "off".to_string());
        extras.insert("tag-scheme".to_string(), "label".to_string());
        extras.insert("unknown".to_string(), "x".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert_eq!(config.transcode.indent_string, "    ");
        assert!(!config.transcode.collapse_tag_links);
        assert_eq!(config.tags.scheme, "label");
        assert_eq!(extras.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_overrides_fail_validation() {
        for (key, value) in [("tag-scheme", ""), ("tag-scheme", "1x"), ("indent-string", "\t")] {
            let mut config = mdbridge_config::load_defaults().unwrap();
            let mut extras = HashMap::from([(key.to_string(), value.to_string())]);
            apply_config_overrides(&mut config, &mut extras);
            assert!(config.validate().is_err(), "{key}={value:?} was accepted");
        }
    }

    #[test]
    fn test_parse_bool_arg() {
        assert!(parse_bool_arg("k", "TRUE"));
        assert!(parse_bool_arg("k", "1"));
        assert!(!parse_bool_arg("k", "no"));
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let matches = build_cli()
            .try_get_matches_from(["mdbridge", "links", "note.md", "--vault", "."])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "links");
        assert_eq!(sub.get_one::<String>("vault").map(String::as_str), Some("."));
    }
}
