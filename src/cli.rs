use clap::error::ErrorKind;
use clap::Parser;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "

License: MIT
Rust Edition: 2024"
);

#[derive(Parser, Debug)]
#[command(name = "pick")]
#[command(about = "Select and reorder lines from stdin with 1-based, Python-slice-like subscripts")]
#[command(long_about = "Pick reads all of standard input, then writes the lines selected by the
expression to standard output, in the order the expression names them.

Line numbers are 1-based. The expression is a comma-separated mix of
Python-like subscripts/slices and dash ranges.

PYTHON-LIKE SUBSCRIPTS (1-based):
  cat ... | pick 1            Pick the first line
  cat ... | pick -1           Pick the last line
  cat ... | pick :            Pick all lines
  cat ... | pick ::           Pick all lines
  cat ... | pick 2:           Pick all lines except the first line
  cat ... | pick :-1          Pick all lines except the last line
  cat ... | pick ::-1         Pick all lines (in reverse order)
  cat ... | pick 3:1:-1       Pick the first 3 lines (in reverse order)
  cat ... | pick ::2          Pick every other line

DASH RANGES (inclusive, direction inferred):
  cat ... | pick 1-3          Pick the first 3 lines
  cat ... | pick 5-10         Pick the 5th to 10th lines
  cat ... | pick 10-1         Pick the 10th to 1st lines (in reverse order)

COMMA-SEPARATED MIX:
  cat ... | pick 1,3::,5-7    Pick the 1st, then all except the first two,
                              then the 5th to 7th lines

Out-of-range dash-range endpoints truncate silently, so 'pick 1-1000000'
prints the whole input.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = LONG_VERSION)]
pub struct Cli {
    /// Selection expression (e.g. '1', '-1', '2:', '::-1', '5-10', '1,3::,5-7')
    #[arg(value_name = "EXPRESSION", allow_hyphen_values = true)]
    pub expression: String,
}

/// Parse process arguments, handling help and usage errors here so `main`
/// only ever sees a valid expression.
///
/// Exit codes: explicit -h/--help/--version exits 0; a wrong argument count
/// or unknown flag prints the usage and exits 1.
pub fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}
