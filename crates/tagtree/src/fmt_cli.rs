//! `fmt-cli`: core logic of the `tagtree-fmt` binary.
//!
//! Reads a JSON document from a file or stdin, parses it with the tolerant
//! reader, and re-serializes it with the pretty printer:
//!
//! ```text
//! tagtree-fmt [--indent N] [--precision N] [--out PATH] [--strict] [--timing] [PATH]
//! ```

use std::io::{self, Read};
use std::path::PathBuf;

use tagtree_json::{JsonError, JsonReader, JsonWriter, ParseError, ReaderOptions, WriterOptions};
use tagtree_util::{FsError, Timer};
use thiserror::Error;

pub const USAGE: &str =
    "usage: tagtree-fmt [--indent N] [--precision N] [--out PATH] [--strict] [--timing] [PATH]";

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{flag} expects a value")]
    MissingArgument { flag: String },
    #[error("{flag} expects a number, got {value:?}")]
    InvalidNumber { flag: String, value: String },
    #[error("unknown option {0}")]
    UnknownOption(String),
    #[error("more than one input path given")]
    ExtraInput,
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
    #[error(transparent)]
    Fs(#[from] FsError),
    #[error(transparent)]
    Json(#[from] JsonError),
}

// ── Arguments ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FmtArgs {
    pub indent: Option<usize>,
    pub precision: Option<usize>,
    pub out: Option<PathBuf>,
    pub strict: bool,
    pub timing: bool,
    /// `None` reads stdin.
    pub input: Option<PathBuf>,
}

impl FmtArgs {
    /// Parses arguments, not including the program name.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = FmtArgs::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--indent" => parsed.indent = Some(number(&arg, args.next())?),
                "--precision" => parsed.precision = Some(number(&arg, args.next())?),
                "--out" => match args.next() {
                    Some(path) => parsed.out = Some(PathBuf::from(path)),
                    None => return Err(CliError::MissingArgument { flag: arg.clone() }),
                },
                "--strict" => parsed.strict = true,
                "--timing" => parsed.timing = true,
                flag if flag.starts_with("--") => return Err(CliError::UnknownOption(arg.clone())),
                _ => {
                    if parsed.input.is_some() {
                        return Err(CliError::ExtraInput);
                    }
                    parsed.input = Some(PathBuf::from(&arg));
                }
            }
        }
        Ok(parsed)
    }

    pub fn writer_options(&self) -> WriterOptions {
        let mut options = WriterOptions::default();
        if let Some(width) = self.indent {
            options = options.with_indent_width(width);
        }
        if let Some(precision) = self.precision {
            options = options.with_float_precision(precision);
        }
        options
    }
}

fn number(flag: &str, value: Option<String>) -> Result<usize, CliError> {
    let value = value.ok_or_else(|| CliError::MissingArgument {
        flag: flag.to_string(),
    })?;
    value.parse().map_err(|_| CliError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}

// ── Formatting ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct FmtReport {
    /// The re-serialized document.
    pub output: String,
    /// Problems met while reading; empty in strict mode.
    pub errors: Vec<ParseError>,
}

/// Parses `text` and re-serializes it per `args`.
///
/// In strict mode the first parse error is returned instead of a report.
pub fn format_text(text: &str, args: &FmtArgs) -> Result<FmtReport, CliError> {
    let reader = JsonReader::with_options(ReaderOptions::default());

    let mut timer = Timer::new("parse", true);
    let parsed = reader.parse(text);
    timer.pause();
    if args.timing {
        timer.log_elapsed();
    }
    tracing::debug!(keys = parsed.object.len(), errors = parsed.error_count(), "parsed document");

    let (object, errors) = if args.strict {
        (parsed.into_result()?, Vec::new())
    } else {
        (parsed.object, parsed.errors)
    };

    let mut timer = Timer::new("serialize", true);
    let output = JsonWriter::with_options(args.writer_options()).encode(&object);
    timer.pause();
    if args.timing {
        timer.log_elapsed();
    }

    Ok(FmtReport { output, errors })
}

/// Reads the input named by `args`, formats it, and writes the result to
/// `--out` when given. The report is returned either way.
pub fn run(args: &FmtArgs) -> Result<FmtReport, CliError> {
    let text = match &args.input {
        Some(path) => tagtree_util::read_text(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let report = format_text(&text, args)?;
    if let Some(path) = &args.out {
        tagtree_util::write_text(path, &report.output)?;
        tracing::info!(path = %path.display(), bytes = report.output.len(), "wrote document");
    }
    Ok(report)
}
