use std::io::Write;

use crate::config::Config;
use crate::matcher::Matcher;

/// Decide which lines of one source to emit and write them to `out`,
/// returning the number of matching lines (verdicts counted after the
/// invert-match flip).
///
/// Two passes over the materialized lines: the first applies the
/// predicate and unions the context window of every match into a print
/// set, the second emits the print set in ascending line order.
/// Overlapping windows from separate matches merge with no duplication.
pub fn select(lines: &[String], matcher: &Matcher, cfg: &Config, out: &mut impl Write) -> usize {
    let mut match_count = 0;
    let mut to_print = vec![false; lines.len()];

    for (i, line) in lines.iter().enumerate() {
        let mut matched = matcher.is_match(line);
        if cfg.invert_match {
            matched = !matched;
        }
        if !matched {
            continue;
        }
        match_count += 1;

        // Counting never needs windows.
        if cfg.count_only {
            continue;
        }

        // Window clamped to the bounds of the line sequence.
        let start = i.saturating_sub(cfg.span_before());
        let end = i.saturating_add(cfg.span_after()).min(lines.len() - 1);
        for flag in &mut to_print[start..=end] {
            *flag = true;
        }
    }

    if !cfg.count_only {
        for (i, line) in lines.iter().enumerate() {
            if !to_print[i] {
                continue;
            }
            // Write failures (e.g. a closed pipe) are deliberately
            // dropped; the count is still meaningful.
            if cfg.line_number {
                let _ = writeln!(out, "{}:{line}", i + 1);
            } else {
                let _ = writeln!(out, "{line}");
            }
        }
    }

    match_count
}
