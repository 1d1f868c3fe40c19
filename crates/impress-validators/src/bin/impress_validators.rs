//! impress-validators CLI
//!
//! Checks values against a named format, one verdict per value.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use impress_validators::Format;

/// Validate strings against a named format (isbn10, eth-address, email, ...)
#[derive(Parser, Debug)]
#[command(name = "impress-validators", version, about, long_about = None)]
struct Cli {
    /// Format name; see --list
    #[arg(required_unless_present = "list")]
    format: Option<String>,

    /// Values to check. Reads one value per line from stdin when omitted.
    values: Vec<String>,

    /// Print every known format name and exit
    #[arg(long)]
    list: bool,

    /// Emit one JSON object per value instead of plain text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging. Repeat for more (-v, -vv). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Verdict<'a> {
    format: Format,
    value: &'a str,
    valid: bool,
}

/// Outcome of a run, mapped onto the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    AllValid,
    SomeInvalid,
    Failed,
}

impl Status {
    fn code(self) -> u8 {
        match self {
            Status::AllValid => 0,
            Status::SomeInvalid => 1,
            Status::Failed => 2,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let status = execute(&cli, io::stdin().lock(), &mut io::stdout().lock());
    ExitCode::from(status.code())
}

/// Run the CLI and fold any error into [`Status::Failed`].
fn execute<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> Status {
    match run(cli, input, out) {
        Ok(status) => status,
        Err(e) => {
            tracing::error!("{}", e);
            Status::Failed
        }
    }
}

fn run<R: BufRead, W: Write>(
    cli: &Cli,
    input: R,
    out: &mut W,
) -> Result<Status, Box<dyn std::error::Error>> {
    if cli.list {
        for format in Format::all() {
            writeln!(out, "{}", format)?;
        }
        return Ok(Status::AllValid);
    }

    let format: Format = cli.format.as_deref().unwrap_or_default().parse()?;
    tracing::debug!(%format, "validating");

    let values: Vec<String> = if cli.values.is_empty() {
        input.lines().collect::<Result<_, _>>()?
    } else {
        cli.values.clone()
    };

    let mut all_valid = true;
    for value in &values {
        let valid = format.validate(value);
        tracing::debug!(value = %value, valid, "checked");
        all_valid &= valid;

        if cli.json {
            let verdict = Verdict {
                format,
                value,
                valid,
            };
            writeln!(out, "{}", serde_json::to_string(&verdict)?)?;
        } else {
            let label = if valid { "valid" } else { "invalid" };
            writeln!(out, "{}\t{}", label, value)?;
        }
    }

    Ok(if all_valid {
        Status::AllValid
    } else {
        Status::SomeInvalid
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(args: &[&str], stdin: &str) -> (Status, String) {
        let argv = std::iter::once("impress-validators").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        let status = execute(&cli, stdin.as_bytes(), &mut out);
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_prints_every_format() {
        let (status, out) = run_with(&["--list"], "");
        assert_eq!(status, Status::AllValid);
        let names: Vec<&str> = out.lines().collect();
        assert_eq!(names.len(), Format::all().len());
        assert!(names.contains(&"isbn10"));
        assert!(names.contains(&"eth-address"));
    }

    #[test]
    fn test_all_valid_arguments_exit_zero() {
        let (status, out) = run_with(&["isbn10", "3836221195", "3 401 01319 X"], "");
        assert_eq!(status, Status::AllValid);
        assert_eq!(status.code(), 0);
        assert_eq!(out, "valid\t3836221195\nvalid\t3 401 01319 X\n");
    }

    #[test]
    fn test_invalid_value_exits_one() {
        let (status, out) = run_with(&["isbn13", "978-3-8362-2119-1", "3-8362-2119-5"], "");
        assert_eq!(status, Status::SomeInvalid);
        assert_eq!(status.code(), 1);
        assert_eq!(out, "valid\t978-3-8362-2119-1\ninvalid\t3-8362-2119-5\n");
    }

    #[test]
    fn test_unknown_format_exits_two() {
        let (status, out) = run_with(&["isbn11", "123"], "");
        assert_eq!(status, Status::Failed);
        assert_eq!(status.code(), 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_reads_stdin_when_no_values_given() {
        let (status, out) = run_with(&["--json", "isbn10"], "3836221195\n3423214121\n");
        assert_eq!(status, Status::SomeInvalid);

        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            serde_json::json!({"format": "isbn10", "value": "3836221195", "valid": true})
        );
        assert_eq!(
            lines[1],
            serde_json::json!({"format": "isbn10", "value": "3423214121", "valid": false})
        );
    }

    #[test]
    fn test_arguments_take_precedence_over_stdin() {
        let address = "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb";
        let (status, out) = run_with(&["eth-address", address], "junk\n");
        assert_eq!(status, Status::AllValid);
        assert_eq!(out, format!("valid\t{}\n", address));
    }

    #[test]
    fn test_format_is_required_without_list() {
        assert!(Cli::try_parse_from(["impress-validators"]).is_err());
    }
}
