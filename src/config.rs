/// Operating parameters for one invocation. Built once by the CLI front
/// end from parsed flags; read-only everywhere downstream.
#[derive(Debug, Clone)]
pub struct Config {
    /// The pattern to search for (regex unless `fixed` is set).
    pub pattern: String,
    /// Input identifiers, in processing order. `"-"` means stdin.
    pub files: Vec<String>,
    /// Lines of trailing context after each match (`-A`).
    pub after: usize,
    /// Lines of leading context before each match (`-B`).
    pub before: usize,
    /// Floor applied to both leading and trailing context (`-C`).
    pub context: usize,
    /// Print only the total count of matching lines (`-c`).
    pub count_only: bool,
    /// Ignore case distinctions in pattern and data (`-i`).
    pub ignore_case: bool,
    /// Select lines that do NOT match (`-v`).
    pub invert_match: bool,
    /// Match the pattern as a literal substring, not a regex (`-F`).
    pub fixed: bool,
    /// Prefix each output line with its 1-based line number (`-n`).
    pub line_number: bool,
}

impl Config {
    /// A configuration with the given pattern, reading stdin, all flags
    /// at their defaults.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            files: vec![crate::STDIN.to_string()],
            after: 0,
            before: 0,
            context: 0,
            count_only: false,
            ignore_case: false,
            invert_match: false,
            fixed: false,
            line_number: false,
        }
    }

    /// Leading window size. `--around` acts as a floor for `--before`.
    #[must_use]
    pub fn span_before(&self) -> usize {
        self.before.max(self.context)
    }

    /// Trailing window size. `--around` acts as a floor for `--after`.
    #[must_use]
    pub fn span_after(&self) -> usize {
        self.after.max(self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_default_to_zero() {
        let cfg = Config::new("x");
        assert_eq!(cfg.span_before(), 0);
        assert_eq!(cfg.span_after(), 0);
    }

    #[test]
    fn around_floors_each_side_independently() {
        // -B 1 -C 3 yields a leading span of 3, not 1.
        let mut cfg = Config::new("x");
        cfg.before = 1;
        cfg.context = 3;
        assert_eq!(cfg.span_before(), 3);
        assert_eq!(cfg.span_after(), 3);
    }

    #[test]
    fn explicit_side_wins_over_smaller_around() {
        let mut cfg = Config::new("x");
        cfg.after = 5;
        cfg.context = 2;
        assert_eq!(cfg.span_after(), 5);
        assert_eq!(cfg.span_before(), 2);
    }
}
