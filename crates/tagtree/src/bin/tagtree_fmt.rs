//! `tagtree-fmt`: parse a JSON document leniently and pretty-print it.
//!
//! Usage:
//!   tagtree-fmt [--indent N] [--precision N] [--out PATH] [--strict] [--timing] [PATH]
//!
//! Reads stdin when no PATH is given. Log output is controlled by `RUST_LOG`.

use std::io::{self, Write};

use tagtree::fmt_cli::{run, CliError, FmtArgs, USAGE};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = match FmtArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    match run(&args) {
        Ok(report) => {
            if !report.errors.is_empty() {
                eprintln!("{} parse error(s)", report.errors.len());
                for err in &report.errors {
                    eprintln!("  {err}");
                }
            }
            if args.out.is_none() {
                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", report.output) {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Err(CliError::Json(e)) => {
            eprintln!("strict mode: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
