use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;

use mcm_dp::{read_dimensions, DpEngine, MatrixChainProblem};

/// Exit status for unreadable or malformed input.
const EXIT_INVALID_INPUT: i32 = 1;
/// Exit status for bad command-line arguments.
const EXIT_USAGE: i32 = 2;

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("mcm: {err}");
            Options::print_help();
            process::exit(EXIT_USAGE);
        }
    };
    if options.help {
        Options::print_help();
        return;
    }

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let result = match &options.path {
        Some(path) => File::open(path)
            .map_err(mcm_dp::Error::from)
            .and_then(|file| min_cost(BufReader::new(file))),
        None => min_cost(io::stdin().lock()),
    };
    let code = report(result, &mut io::stdout(), &mut io::stderr());
    if code != 0 {
        process::exit(code);
    }
}

fn min_cost<R: BufRead>(reader: R) -> mcm_dp::Result<u128> {
    let dims = read_dimensions(reader)?;

    #[cfg(feature = "tracing")]
    tracing::info!(matrices = dims.matrices(), "read dimension sequence");

    Ok(DpEngine::new(MatrixChainProblem::new(dims)).run())
}

/// Print the cost as a single line, or the error, and return the exit status.
fn report<O: Write, E: Write>(result: mcm_dp::Result<u128>, out: &mut O, err: &mut E) -> i32 {
    match result {
        Ok(cost) => {
            let _ = writeln!(out, "{cost}");
            0
        }
        Err(e) => {
            let _ = writeln!(err, "mcm: {e}");
            EXIT_INVALID_INPUT
        }
    }
}

#[derive(Debug, Default, PartialEq)]
struct Options {
    path: Option<String>,
    help: bool,
}

impl Options {
    fn parse<I, T>(args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut options = Options::default();

        for arg in args {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                options.help = true;
            } else if arg.starts_with('-') && arg != "-" {
                return Err(format!("unrecognized argument '{arg}'"));
            } else if options.path.is_some() {
                return Err(format!("unexpected extra argument '{arg}'"));
            } else if arg != "-" {
                options.path = Some(arg);
            }
        }

        Ok(options)
    }

    fn print_help() {
        println!(
            "\
Usage: mcm [PATH]

Reads a matrix count n followed by n+1 dimensions, one integer per line,
from PATH (or stdin when PATH is omitted or '-') and prints the minimum
number of scalar multiplications needed to multiply the chain.

Options:
  -h, --help    Print this help message

Examples:
  printf '3\\n10\\n100\\n5\\n50\\n' | mcm
  RUST_LOG=debug mcm chain.txt      (with the `tracing` feature)
"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, String> {
        Options::parse(args.iter().copied())
    }

    #[test]
    fn no_arguments_reads_stdin() {
        assert_eq!(parse(&[]).unwrap(), Options::default());
        assert_eq!(parse(&["-"]).unwrap(), Options::default());
    }

    #[test]
    fn path_and_help_flags() {
        assert_eq!(parse(&["chain.txt"]).unwrap().path.as_deref(), Some("chain.txt"));
        assert!(parse(&["--help"]).unwrap().help);
        assert!(parse(&["-h"]).unwrap().help);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(parse(&["--verbose"]).unwrap_err().contains("--verbose"));
        assert!(parse(&["a.txt", "b.txt"]).unwrap_err().contains("b.txt"));
    }

    #[test]
    fn success_prints_one_line() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let result = min_cost("3\n10\n100\n5\n50\n".as_bytes());
        assert_eq!(report(result, &mut out, &mut err), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "7500\n");
        assert!(err.is_empty());
    }

    #[test]
    fn invalid_input_exits_with_one() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let result = min_cost("2\n10\n".as_bytes());
        assert_eq!(report(result, &mut out, &mut err), EXIT_INVALID_INPUT);
        assert!(out.is_empty());
        let msg = String::from_utf8(err).unwrap();
        assert!(msg.starts_with("mcm: invalid input:"), "{msg}");
    }
}
