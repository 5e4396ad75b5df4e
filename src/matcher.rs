use regex::Regex;

use crate::config::Config;
use crate::error::SiftError;

/// A compiled per-line predicate. Built once per invocation and reused
/// across every line of every source; holds no per-line state.
#[derive(Debug)]
pub enum Matcher {
    /// Literal substring containment. With `fold_case` the needle is
    /// already lowercased and each line is lowercased before the check —
    /// plain lowercasing, not locale-aware folding.
    Fixed { needle: String, fold_case: bool },
    /// Unanchored leftmost regex match anywhere in the line.
    Pattern(Regex),
}

/// Build the predicate described by the configuration.
pub fn build(cfg: &Config) -> Result<Matcher, SiftError> {
    if cfg.fixed {
        let needle = if cfg.ignore_case {
            cfg.pattern.to_lowercase()
        } else {
            cfg.pattern.clone()
        };
        return Ok(Matcher::Fixed {
            needle,
            fold_case: cfg.ignore_case,
        });
    }

    let pattern = if cfg.ignore_case {
        format!("(?i){}", cfg.pattern)
    } else {
        cfg.pattern.clone()
    };

    let re = Regex::new(&pattern).map_err(|e| SiftError::InvalidPattern {
        reason: e.to_string(),
    })?;
    Ok(Matcher::Pattern(re))
}

impl Matcher {
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        match self {
            Self::Fixed {
                needle,
                fold_case: false,
            } => line.contains(needle.as_str()),
            Self::Fixed {
                needle,
                fold_case: true,
            } => line.to_lowercase().contains(needle.as_str()),
            Self::Pattern(re) => re.is_match(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(pattern: &str, ignore_case: bool) -> Matcher {
        let mut cfg = Config::new(pattern);
        cfg.fixed = true;
        cfg.ignore_case = ignore_case;
        build(&cfg).unwrap()
    }

    #[test]
    fn fixed_is_substring_containment() {
        let m = fixed("foo", false);
        for line in ["foo", "foo bar", "a foo b", "xfoox"] {
            assert_eq!(m.is_match(line), line.contains("foo"), "line: {line}");
        }
        assert!(!m.is_match("bar"));
        assert!(!m.is_match("FOO"));
    }

    #[test]
    fn fixed_ignore_case_lowercases_both_sides() {
        let m = fixed("FOO", true);
        assert!(m.is_match("foo bar"));
        assert!(m.is_match("FoO bar"));
        assert!(!m.is_match("f o o"));
    }

    #[test]
    fn fixed_treats_metacharacters_literally() {
        let m = fixed("a.b", false);
        assert!(m.is_match("a.b"));
        assert!(!m.is_match("axb"));
    }

    #[test]
    fn regex_matches_anywhere_in_line() {
        let m = build(&Config::new("o+")).unwrap();
        assert!(m.is_match("foo"));
        assert!(m.is_match("o"));
        assert!(!m.is_match("bar"));
    }

    #[test]
    fn regex_ignore_case() {
        let mut cfg = Config::new("hello");
        cfg.ignore_case = true;
        let m = build(&cfg).unwrap();
        assert!(m.is_match("HELLO world"));
        assert!(m.is_match("say Hello"));
    }

    #[test]
    fn invalid_regex_is_an_error() {
        let err = build(&Config::new("(")).unwrap_err();
        assert!(matches!(err, SiftError::InvalidPattern { .. }));
        assert!(err.to_string().starts_with("invalid pattern:"));
    }

    #[test]
    fn invalid_regex_is_fine_in_fixed_mode() {
        let m = fixed("(", false);
        assert!(m.is_match("f(x)"));
    }
}
