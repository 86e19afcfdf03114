//! cunits: Decode a JavaScript string literal or template token.
//!
//! Usage:
//!   cunits string '"a\x40z"'
//!   cunits template --format json '`A${'
//!   echo "'\u{10000}'" | cunits string
//!
//! Prints one row per UTF-16 code unit, with the source slice it came from.

mod render;

use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use codeunits_core::text::utf16_span_to_utf8_range;
use codeunits_scanner::{parse_string_literal, parse_template_token, ParseError};
use std::io::{IsTerminal, Read};
use std::process;

#[derive(ClapParser, Debug)]
#[command(
    name = "cunits",
    about = "Decode JavaScript string literals and template tokens into UTF-16 code units",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table, global = true)]
    format: Format,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a string literal, quotes included.
    String {
        /// The token; `-` or nothing reads it from stdin.
        #[arg(value_name = "TOKEN")]
        token: Option<String>,
    },
    /// Decode a template token, including its `` ` ``, `${` or `}` delimiters.
    Template {
        /// The token; `-` or nothing reads it from stdin.
        #[arg(value_name = "TOKEN")]
        token: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Table,
    Json,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let exit_code = run(&cli, std::io::stdin());
    process::exit(exit_code);
}

/// Install a stderr subscriber when `RUST_LOG` is set,
/// e.g. `RUST_LOG=codeunits_scanner=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(cli: &Cli, stdin: impl Read) -> i32 {
    let (token, is_template) = match &cli.command {
        Command::String { token } => (token, false),
        Command::Template { token } => (token, true),
    };
    let source = match read_token(token.as_deref(), stdin) {
        Ok(source) => source,
        Err(e) => {
            print_error(&format!("Failed to read token from stdin: {}", e));
            return 2;
        }
    };
    tracing::debug!(len = source.len(), is_template, "decoding token");

    let output = if is_template {
        parse_template_token(&source).map(|token| render::template_token(&token, cli.format))
    } else {
        parse_string_literal(&source).map(|literal| render::string_literal(&literal, cli.format))
    };

    match output {
        Ok(Ok(text)) => {
            println!("{}", text);
            0
        }
        Ok(Err(e)) => {
            print_error(&format!("Failed to serialize output: {}", e));
            2
        }
        Err(err) => {
            eprintln!("{:?}", report(&source, &err));
            1
        }
    }
}

/// The token from the command line, or stdin without its final line break.
fn read_token(token: Option<&str>, mut stdin: impl Read) -> std::io::Result<String> {
    match token {
        Some(token) if token != "-" => Ok(token.to_string()),
        _ => {
            let mut input = String::new();
            stdin.read_to_string(&mut input)?;
            Ok(trim_final_line_break(&input).to_string())
        }
    }
}

/// Strip one trailing `\r\n` or `\n`.
fn trim_final_line_break(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}

/// Build a labelled report pointing at the offending element.
fn report(source: &str, err: &ParseError) -> miette::Report {
    let range = utf16_span_to_utf8_range(source, err.span());
    miette::miette!(
        code = format!("CU{}", err.code()),
        labels = vec![miette::LabeledSpan::at(range, "here")],
        "{} at position {}",
        err,
        err.pos
    )
    .with_source_code(source.to_string())
}

fn print_error(msg: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}
