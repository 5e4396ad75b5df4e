#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions, // Rust naming conventions
    clippy::struct_excessive_bools,  // Config mirrors the CLI's mode flags
    clippy::missing_errors_doc,      // the SiftError variants are self-describing
)]

pub mod config;
pub mod error;
pub(crate) mod matcher;
pub(crate) mod select;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use config::Config;
use error::SiftError;

/// Input identifier meaning "read standard input".
pub const STDIN: &str = "-";

/// The single entry point. Builds the predicate once, then processes
/// each input source in order, writing matched and context lines to
/// `out`. In count-only mode nothing is written per source; the grand
/// total goes out once at the end.
///
/// Any open or read failure aborts the remaining sources — there is no
/// partial-success mode.
pub fn run(cfg: &Config, out: &mut impl Write) -> Result<(), SiftError> {
    let matcher = matcher::build(cfg)?;

    let mut total = 0;

    for name in &cfg.files {
        // The file handle lives for exactly one iteration; it is
        // released on every exit path before the next source opens.
        let lines = if name == STDIN {
            read_lines(io::stdin().lock(), name)?
        } else {
            let file = File::open(name).map_err(|e| SiftError::SourceOpen {
                path: name.clone(),
                source: e,
            })?;
            read_lines(BufReader::new(file), name)?
        };

        total += select::select(&lines, &matcher, cfg, out);
    }

    if cfg.count_only {
        let _ = writeln!(out, "{total}");
    }

    Ok(())
}

/// Materialize every line of one source. Line terminators are stripped;
/// the selector re-adds them on output.
fn read_lines(reader: impl BufRead, name: &str) -> Result<Vec<String>, SiftError> {
    reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| SiftError::SourceRead {
            path: name.to_string(),
            source: e,
        })
}
