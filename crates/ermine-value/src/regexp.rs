//! Regular expression values
//!
//! A regexp carries its pattern and flag string plus a mutable `last_index`
//! cursor, so in-progress global-match state survives cloning. Matching is
//! backed by the `regex` crate where the pattern translates; patterns it
//! cannot compile still round-trip through clone with matching disabled.

use regex::Regex;
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A regular expression object
pub struct JsRegExp {
    pattern: String,
    flags: String,
    global: bool,
    ignore_case: bool,
    multiline: bool,
    dot_all: bool,
    sticky: bool,
    /// The compiled matcher (if compilation succeeded)
    native: Option<Regex>,
    /// Byte position where the next global/sticky match starts
    last_index: AtomicUsize,
}

impl JsRegExp {
    /// Create a new regexp from a pattern and a flag string (`gimsy`
    /// subset; unknown flag characters are kept in `flags()` but ignored).
    pub fn new(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let flags = flags.into();
        let global = flags.contains('g');
        let ignore_case = flags.contains('i');
        let multiline = flags.contains('m');
        let dot_all = flags.contains('s');
        let sticky = flags.contains('y');
        let native = compile_native(&pattern, ignore_case, multiline, dot_all);

        Self {
            pattern,
            flags,
            global,
            ignore_case,
            multiline,
            dot_all,
            sticky,
            native,
            last_index: AtomicUsize::new(0),
        }
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The flag string as given.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Whether the `g` flag is set.
    pub fn global(&self) -> bool {
        self.global
    }

    /// Whether the `i` flag is set.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Whether the `m` flag is set.
    pub fn multiline(&self) -> bool {
        self.multiline
    }

    /// Whether the `s` flag is set.
    pub fn dot_all(&self) -> bool {
        self.dot_all
    }

    /// Whether the `y` flag is set.
    pub fn sticky(&self) -> bool {
        self.sticky
    }

    /// Whether the pattern compiled to a native matcher.
    pub fn is_compiled(&self) -> bool {
        self.native.is_some()
    }

    /// Current match cursor (byte offset).
    pub fn last_index(&self) -> usize {
        self.last_index.load(Ordering::Relaxed)
    }

    /// Set the match cursor.
    pub fn set_last_index(&self, index: usize) {
        self.last_index.store(index, Ordering::Relaxed);
    }

    /// Find the next match, honoring `last_index` for global and sticky
    /// regexps. On a hit the cursor advances past the match; on a miss it
    /// resets to zero. Offsets are byte positions into `input`.
    pub fn exec(&self, input: &str) -> Option<Range<usize>> {
        let native = self.native.as_ref()?;
        let use_cursor = self.global || self.sticky;
        let start = if use_cursor { self.last_index() } else { 0 };

        if start > input.len() {
            self.set_last_index(0);
            return None;
        }

        let found = native.find_at(input, start);
        let found = match found {
            Some(m) if self.sticky && m.start() != start => None,
            other => other,
        };

        match found {
            Some(m) => {
                if use_cursor {
                    self.set_last_index(m.end());
                }
                Some(m.range())
            }
            None => {
                if use_cursor {
                    self.set_last_index(0);
                }
                None
            }
        }
    }

    /// Whether the pattern matches anywhere, ignoring `last_index`.
    pub fn is_match(&self, input: &str) -> bool {
        self.native.as_ref().is_some_and(|re| re.is_match(input))
    }
}

/// Compile the pattern with inline flags for the subset the `regex` crate
/// understands.
fn compile_native(pattern: &str, ignore_case: bool, multiline: bool, dot_all: bool) -> Option<Regex> {
    let mut inline = String::new();
    if ignore_case {
        inline.push('i');
    }
    if multiline {
        inline.push('m');
    }
    if dot_all {
        inline.push('s');
    }

    let full = if inline.is_empty() {
        pattern.to_string()
    } else {
        format!("(?{inline}){pattern}")
    };

    Regex::new(&full).ok()
}

impl std::fmt::Debug for JsRegExp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/{}", self.pattern, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parsed() {
        let re = JsRegExp::new("a+", "gi");
        assert!(re.global());
        assert!(re.ignore_case());
        assert!(!re.multiline());
        assert_eq!(re.flags(), "gi");
        assert_eq!(re.pattern(), "a+");
    }

    #[test]
    fn test_global_exec_advances_cursor() {
        let re = JsRegExp::new("a", "g");
        assert_eq!(re.exec("abca"), Some(0..1));
        assert_eq!(re.last_index(), 1);
        assert_eq!(re.exec("abca"), Some(3..4));
        assert_eq!(re.last_index(), 4);
        // Exhausted: miss resets the cursor
        assert_eq!(re.exec("abca"), None);
        assert_eq!(re.last_index(), 0);
    }

    #[test]
    fn test_non_global_ignores_cursor() {
        let re = JsRegExp::new("b", "");
        re.set_last_index(3);
        assert_eq!(re.exec("abc"), Some(1..2));
        assert_eq!(re.last_index(), 3); // Untouched
    }

    #[test]
    fn test_sticky_requires_match_at_cursor() {
        let re = JsRegExp::new("b", "y");
        assert_eq!(re.exec("abc"), None);
        re.set_last_index(1);
        assert_eq!(re.exec("abc"), Some(1..2));
    }

    #[test]
    fn test_case_insensitive() {
        let re = JsRegExp::new("hello", "i");
        assert!(re.is_match("say HELLO"));
    }

    #[test]
    fn test_bad_pattern_degrades() {
        let re = JsRegExp::new("(unclosed", "g");
        assert!(!re.is_compiled());
        assert!(re.exec("x").is_none());
        assert!(!re.is_match("x"));
        // Pattern and flags still round-trip
        assert_eq!(re.pattern(), "(unclosed");
        assert_eq!(re.flags(), "g");
    }
}
