//! Regular expression literal values.

use std::cell::OnceCell;
use std::fmt;

use regex::{Regex, RegexBuilder};

/// The flag set of a regular expression literal.
///
/// Only `g`, `i` and `m` exist in the document format. Flags are normalized:
/// order and repetition in the source do not matter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RegExpFlags {
    /// `g`: global matching
    pub global: bool,
    /// `i`: case-insensitive matching
    pub ignore_case: bool,
    /// `m`: `^` and `$` match at line boundaries
    pub multiline: bool,
}

impl RegExpFlags {
    /// Records a flag character. Returns `false` if `ch` is not a flag.
    pub fn insert(&mut self, ch: char) -> bool {
        match ch {
            'g' => self.global = true,
            'i' => self.ignore_case = true,
            'm' => self.multiline = true,
            _ => return false,
        }
        true
    }

    /// Builds a flag set from a flag string, ignoring unknown characters.
    pub fn from_chars(flags: &str) -> Self {
        let mut set = Self::default();
        for ch in flags.chars() {
            set.insert(ch);
        }
        set
    }
}

impl fmt::Display for RegExpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.global {
            f.write_str("g")?;
        }
        if self.ignore_case {
            f.write_str("i")?;
        }
        if self.multiline {
            f.write_str("m")?;
        }
        Ok(())
    }
}

/// A regular expression literal.
///
/// The literal is kept as written; the pattern is only compiled the first
/// time [`RegExpValue::regex`] is called. Patterns the `regex` crate cannot
/// express (backreferences, look-around) still deserialize and render, they
/// just have no compiled form.
///
/// # Examples
///
/// ```
/// use core_types::{RegExpFlags, RegExpValue};
///
/// let re = RegExpValue::new("ab+", RegExpFlags::from_chars("mig"));
/// assert_eq!(re.flags().to_string(), "gim");
/// assert!(re.regex().unwrap().is_match("xABBy"));
///
/// let backref = RegExpValue::new(r"(a)\1", RegExpFlags::default());
/// assert!(backref.regex().is_none());
/// assert_eq!(backref.to_string(), r"/(a)\1/");
/// ```
#[derive(Debug, Clone)]
pub struct RegExpValue {
    source: String,
    flags: RegExpFlags,
    compiled: OnceCell<Option<Regex>>,
}

impl RegExpValue {
    /// Creates a literal from its pattern text and flags.
    pub fn new(source: impl Into<String>, flags: RegExpFlags) -> Self {
        Self {
            source: source.into(),
            flags,
            compiled: OnceCell::new(),
        }
    }

    /// The pattern text exactly as written between the slashes.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The normalized flag set.
    pub fn flags(&self) -> RegExpFlags {
        self.flags
    }

    /// The compiled pattern, or `None` if the engine rejects it.
    pub fn regex(&self) -> Option<&Regex> {
        self.compiled
            .get_or_init(|| {
                RegexBuilder::new(&self.source)
                    .case_insensitive(self.flags.ignore_case)
                    .multi_line(self.flags.multiline)
                    .unicode(true)
                    .build()
                    .ok()
            })
            .as_ref()
    }
}

impl PartialEq for RegExpValue {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Display for RegExpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}
