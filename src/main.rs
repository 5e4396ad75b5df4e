use std::io;
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use sift::config::Config;

/// sift — grep-style line search with merged context windows.
#[derive(Parser)]
#[command(name = "sift", version, about)]
struct Cli {
    /// Pattern to search for (a regex unless -F is given).
    pattern: Option<String>,

    /// Files to search; "-" or no files means standard input.
    files: Vec<String>,

    /// Print N lines of trailing context after each match.
    #[arg(short = 'A', long, default_value_t = 0, value_name = "N")]
    after: usize,

    /// Print N lines of leading context before each match.
    #[arg(short = 'B', long, default_value_t = 0, value_name = "N")]
    before: usize,

    /// Print N lines around each match (floor for both -A and -B).
    #[arg(short = 'C', long = "around", default_value_t = 0, value_name = "N")]
    around: usize,

    /// Print only the total count of matching lines.
    #[arg(short, long)]
    count: bool,

    /// Ignore case distinctions in the pattern and the data.
    #[arg(short, long)]
    ignore_case: bool,

    /// Select lines that do NOT match the pattern.
    #[arg(short = 'v', long)]
    invert_match: bool,

    /// Match the pattern as a literal substring, not a regex.
    #[arg(short = 'F', long)]
    fixed_strings: bool,

    /// Prefix each output line with its 1-based line number.
    #[arg(short = 'n', long)]
    line_number: bool,

    /// Print shell completions for the given shell.
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();

    // Shell completions
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "sift", &mut io::stdout());
        return;
    }

    // The pattern is checked by hand so a missing one exits 1 with a
    // usage line, rather than clap's default required-argument exit.
    let Some(pattern) = cli.pattern else {
        eprintln!("Usage: sift [OPTIONS] PATTERN [FILE...]");
        process::exit(1);
    };

    let files = if cli.files.is_empty() {
        vec![sift::STDIN.to_string()]
    } else {
        cli.files
    };

    let cfg = Config {
        pattern,
        files,
        after: cli.after,
        before: cli.before,
        context: cli.around,
        count_only: cli.count,
        ignore_case: cli.ignore_case,
        invert_match: cli.invert_match,
        fixed: cli.fixed_strings,
        line_number: cli.line_number,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = sift::run(&cfg, &mut out) {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}
