//! ufoscript CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use log::debug;
use ufoscript_language::PrettyConfig;
use ufoscript_outline::{LabelProvider, OutlineConfig};
use ufoscript_parser::ParserConfig;
use ufoscript_runtime::serialize::{report_to_json, save_report};
use ufoscript_runtime::{CheckSummary, Checker, JsonReport};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    show_help: bool,
    show_version: bool,
    outline: bool,
    icons: bool,
    format: bool,
    compact: bool,
    json: bool,
    json_out: Option<PathBuf>,
    strict: bool,
    fail_fast: bool,
    quiet: bool,
    max_depth: Option<usize>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-o" | "--outline" => config.outline = true,
            "--icons" => config.icons = true,
            "-f" | "--format" => config.format = true,
            "--compact" => config.compact = true,
            "--json" => config.json = true,
            "--strict" => config.strict = true,
            "--fail-fast" => config.fail_fast = true,
            "-q" | "--quiet" => config.quiet = true,
            "--json-out" => {
                i += 1;
                if i >= args.len() {
                    return Err("--json-out requires a path".into());
                }
                config.json_out = Some(PathBuf::from(&args[i]));
            }
            "--max-depth" => {
                i += 1;
                if i >= args.len() {
                    return Err("--max-depth requires a value".into());
                }
                config.max_depth = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --max-depth value: {}", args[i]))?,
                );
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

/// Returns Ok(false) if any file had errors.
fn run(args: Vec<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(true);
    }

    if config.show_version {
        println!("ufoscript {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    if config.files.is_empty() {
        return Err("no input files (try --help)".into());
    }
    if config.json_out.is_some() && config.files.len() > 1 {
        return Err("--json-out takes a single input file".into());
    }

    let mut parser_config = ParserConfig::default()
        .with_report_unresolved(config.strict)
        .with_stop_on_first_error(config.fail_fast);
    if let Some(depth) = config.max_depth {
        parser_config = parser_config.with_max_depth(depth);
    }
    debug!("parser configuration: {parser_config:?}");

    let checker = Checker::new(parser_config)?;
    let labels = LabelProvider::default();
    let outline_config = OutlineConfig::default().with_icons(config.icons);
    let pretty_config = if config.compact {
        PrettyConfig::compact()
    } else {
        PrettyConfig::default()
    };

    let mut summary = CheckSummary::default();
    for file in &config.files {
        let report = checker.check_file(file)?;
        summary.add(&report);

        if !config.quiet && !report.diagnostics.is_empty() {
            eprint!("{}", report.render_diagnostics());
        }

        if config.json || config.json_out.is_some() {
            let outline = config
                .outline
                .then(|| report.outline(&labels, &outline_config));
            let json = JsonReport::new(&report, outline);
            match &config.json_out {
                Some(path) => save_report(&json, path)?,
                None => println!("{}", report_to_json(&json)?),
            }
            continue;
        }

        if config.outline {
            if config.files.len() > 1 {
                println!("\x1b[1m{}\x1b[0m", file.display());
            }
            print!("{}", report.outline(&labels, &outline_config).render(&outline_config));
        }

        if config.format {
            print!("{}", report.format(&pretty_config));
        }
    }

    if !config.quiet {
        let colour = if summary.is_clean() { "32" } else { "31" };
        eprintln!(
            "\x1b[{colour}m{} file(s) checked: {} error(s), {} warning(s)\x1b[0m",
            summary.files, summary.errors, summary.warnings
        );
    }

    Ok(summary.is_clean())
}

fn print_help() {
    println!(
        "\x1b[1mufoscript\x1b[0m - Checker and formatter for UFO:AI script files

\x1b[1mUSAGE:\x1b[0m
    ufoscript [OPTIONS] FILES...

\x1b[1mARGUMENTS:\x1b[0m
    FILES...    Script files (.ufo) to check

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -o, --outline       Print the node outline of each file
        --icons         Show icon paths in the outline
    -f, --format        Print each file re-formatted
        --compact       Use the compact format style
        --json          Print a JSON report per file
        --json-out P    Write the JSON report to P (single file only)
    -q, --quiet         Only set the exit status

\x1b[1mPARSER OPTIONS:\x1b[0m
    --strict            Report block keywords unknown in their scope
    --fail-fast         Stop each file at its first error
    --max-depth N       Maximum brace nesting (default 32)

\x1b[1mLOGGING:\x1b[0m
    RUST_LOG=debug      Log each block as it is parsed
    RUST_LOG=trace      Also log property fallbacks

\x1b[1mEXAMPLES:\x1b[0m
    ufoscript base/ufos/ui/*.ufo          Check every UI script
    ufoscript -o ui/options.ufo           Show the outline of a window file
    ufoscript --strict --json items.ufo   Machine-readable report"
    );
}
