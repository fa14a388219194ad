//! Command-line interface for nested-numbering
//! Prints outline labels for a list of levels, or numbers an indented outline file.
//!
//! Usage:
//!   nestnum labels `<level>`...             - Print one label per requested level
//!   nestnum render `<path>`                 - Number each non-blank line of an outline
//!
//! Shared options: --config `<file>`, --level N=STYLE, --full, --no-indent,
//! --prefix, --suffix, --strict, --format text|json

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use nested_numbering::config::Loader;
use nested_numbering::numbering::{number_outline, NumberingOptions, OutlineLine, Sequencer};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nested_numbering=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = Command::new("nestnum")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate hierarchical outline numbering")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .args(session_args())
        .subcommand(
            Command::new("labels")
                .about("Print one label per requested level, in order")
                .arg(
                    Arg::new("levels")
                        .help("Levels to number (1 = outermost)")
                        .required(true)
                        .num_args(1..)
                        .value_parser(value_parser!(usize))
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Number each non-blank line of an indented outline file")
                .arg(
                    Arg::new("path")
                        .help("Path to the outline file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("indent-width")
                        .long("indent-width")
                        .short('w')
                        .help("Spaces per nesting level in the input")
                        .value_parser(value_parser!(usize))
                        .default_value("4"),
                ),
        )
        .get_matches();

    let options = load_options(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let format = matches.get_one::<String>("format").unwrap();

    match matches.subcommand() {
        Some(("labels", labels_matches)) => {
            let levels: Vec<usize> = labels_matches
                .get_many::<usize>("levels")
                .unwrap()
                .copied()
                .collect();
            handle_labels_command(options, &levels, format);
        }
        Some(("render", render_matches)) => {
            let path = render_matches.get_one::<String>("path").unwrap();
            let indent_width = *render_matches.get_one::<usize>("indent-width").unwrap();
            handle_render_command(options, path, indent_width, format);
        }
        _ => unreachable!(),
    }
}

/// Options shared by every subcommand
fn session_args() -> Vec<Arg> {
    vec![
        Arg::new("config")
            .long("config")
            .short('c')
            .global(true)
            .help("TOML file layered over the built-in defaults"),
        Arg::new("level")
            .long("level")
            .short('l')
            .global(true)
            .action(ArgAction::Append)
            .value_name("N=STYLE")
            .help("Style of a level, e.g. 1=A. or 3=a) (repeatable)"),
        Arg::new("full")
            .long("full")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Render the full dotted path (A.1.a.)"),
        Arg::new("no-indent")
            .long("no-indent")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Disable indentation of nested labels"),
        Arg::new("prefix")
            .long("prefix")
            .global(true)
            .allow_hyphen_values(true)
            .help("Text written before every label"),
        Arg::new("suffix")
            .long("suffix")
            .global(true)
            .allow_hyphen_values(true)
            .help("Text written after every label"),
        Arg::new("strict")
            .long("strict")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Reject unknown styles and levels outside 1..=5"),
        Arg::new("format")
            .long("format")
            .short('f')
            .global(true)
            .value_parser(["text", "json"])
            .default_value("text")
            .help("Output format"),
    ]
}

/// Layer the config file and command-line overrides over the defaults
fn load_options(matches: &ArgMatches) -> Result<NumberingOptions, String> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    if let Some(specs) = matches.get_many::<String>("level") {
        for spec in specs {
            let (level, style) = parse_level_spec(spec)?;
            loader = loader
                .set_override(&format!("level{}", level), style)
                .map_err(|e| e.to_string())?;
        }
    }

    for flag in ["full", "strict"] {
        if matches.get_flag(flag) {
            loader = loader.set_override(flag, true).map_err(|e| e.to_string())?;
        }
    }
    if matches.get_flag("no-indent") {
        loader = loader
            .set_override("indentation", false)
            .map_err(|e| e.to_string())?;
    }
    for affix in ["prefix", "suffix"] {
        if let Some(value) = matches.get_one::<String>(affix) {
            loader = loader
                .set_override(affix, value.as_str())
                .map_err(|e| e.to_string())?;
        }
    }

    loader.build().map_err(|e| e.to_string())
}

/// Split `N=STYLE` into a level in 1..=5 and its style string
fn parse_level_spec(spec: &str) -> Result<(usize, &str), String> {
    let (level, style) = spec
        .split_once('=')
        .ok_or_else(|| format!("invalid --level '{}': expected N=STYLE", spec))?;
    let level: usize = level
        .trim()
        .parse()
        .map_err(|_| format!("invalid --level '{}': '{}' is not a level", spec, level))?;
    if !(1..=5).contains(&level) {
        return Err(format!("invalid --level '{}': level must be 1..=5", spec));
    }
    Ok((level, style))
}

#[derive(Serialize)]
struct LabelOutput {
    level: usize,
    label: String,
}

/// Handle the labels command
fn handle_labels_command(options: NumberingOptions, levels: &[usize], format: &str) {
    let strict = options.strict;
    let mut sequencer = Sequencer::new(options);

    let mut output = Vec::with_capacity(levels.len());
    for &level in levels {
        let label = if strict {
            sequencer.try_new_item(level).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            })
        } else {
            sequencer.new_item(level)
        };
        output.push(LabelOutput { level, label });
    }

    if format == "json" {
        print_json(&output);
    } else {
        for item in output {
            println!("{}", item.label);
        }
    }
}

/// Handle the render command
fn handle_render_command(options: NumberingOptions, path: &str, indent_width: usize, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let mut sequencer = Sequencer::new(options);
    let lines = number_outline(&source, &mut sequencer, indent_width).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if format == "json" {
        let items: Vec<_> = lines
            .into_iter()
            .filter_map(|line| match line {
                OutlineLine::Item(item) => Some(item),
                OutlineLine::Blank => None,
            })
            .collect();
        print_json(&items);
    } else {
        for line in lines {
            match line {
                OutlineLine::Item(item) => println!("{}", item.render()),
                OutlineLine::Blank => println!(),
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}
