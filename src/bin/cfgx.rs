//! Command-line interface for cfg-explorer
//!
//! This binary parses expressions against the fixed expression grammar and prints the
//! parse tree, the derivation trace or a serialized report.
//!
//! Usage:
//!   cfgx parse `<input>` [--format `<format>`]   - Parse one input
//!   cfgx examples [`<label>`] [--format `<format>`] - Parse the built-in examples
//!   cfgx grammar                              - Show the grammar
//!   cfgx formats                              - List output formats

use cfg_explorer::expr::grammar::{DISPLAYED_GRAMMAR, IMPLEMENTED_GRAMMAR};
use cfg_explorer::expr::processor::{available_formats, process, OutputFormat};
use cfg_explorer::expr::samples::{self, EXAMPLES};
use cfg_explorer::ParseOptions;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

const EXIT_REJECTED: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (treeviz, tag, trace, derivation, json, yaml)")
        .default_value("treeviz")
}

fn main() {
    let matches = Command::new("cfgx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse arithmetic expressions with a recursive-descent parser")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser decisions (RUST_LOG overrides)")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a single input string")
                .arg(
                    Arg::new("input")
                        .help("Expression to parse, e.g. \"id + id * id\"")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg())
                .arg(
                    Arg::new("max-failure-steps")
                        .long("max-failure-steps")
                        .help("Derivation steps kept when the input is rejected")
                        .value_parser(value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("examples")
                .about("Parse the built-in examples")
                .arg(
                    Arg::new("label")
                        .help("Only parse the example with this label, e.g. \"nested\"")
                        .index(1),
                )
                .arg(format_arg()),
        )
        .subcommand(Command::new("grammar").about("Show the grammar"))
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("examples", examples_matches)) => handle_examples_command(examples_matches),
        Some(("grammar", _)) => handle_grammar_command(),
        Some(("formats", _)) => handle_formats_command(),
        _ => unreachable!(),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn output_format(matches: &ArgMatches) -> OutputFormat {
    let name = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("treeviz");
    name.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(EXIT_USAGE);
    })
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) {
    let input = matches
        .get_one::<String>("input")
        .expect("input is a required argument");
    let format = output_format(matches);
    let mut options = ParseOptions::default();
    if let Some(limit) = matches.get_one::<usize>("max-failure-steps") {
        options.failure_step_limit = *limit;
    }

    match process(input, format, options) {
        Ok(processed) => {
            println!("{}", processed.output.trim_end());
            if !processed.accepted {
                std::process::exit(EXIT_REJECTED);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_REJECTED);
        }
    }
}

/// Handle the examples command
fn handle_examples_command(matches: &ArgMatches) {
    let format = output_format(matches);
    let selected = match matches.get_one::<String>("label") {
        Some(label) => match samples::find(label) {
            Some(example) => std::slice::from_ref(example),
            None => {
                let labels: Vec<&str> = EXAMPLES.iter().map(|e| e.label).collect();
                eprintln!(
                    "Error: no example named '{}' (available: {})",
                    label,
                    labels.join(", ")
                );
                std::process::exit(EXIT_USAGE);
            }
        },
        None => EXAMPLES,
    };

    for example in selected {
        println!("== {}: {}", example.label, example.value);
        match process(example.value, format, ParseOptions::default()) {
            Ok(processed) => println!("{}\n", processed.output.trim_end()),
            Err(e) => println!("{}\n", e),
        }
    }
}

/// Handle the grammar command
fn handle_grammar_command() {
    println!("Grammar:");
    for production in DISPLAYED_GRAMMAR {
        println!("  {}", production);
    }
    println!("\nExpanded by the parser as:");
    for production in IMPLEMENTED_GRAMMAR {
        println!("  {}", production);
    }
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available output formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
