use regex::{NoExpand, RegexBuilder};
use std::borrow::Cow;

/// The constant (SearchPattern, ReplacementText) pair defining one
/// substitution rule.
///
/// The pattern is a regular expression anchored textually: it runs from a
/// fixed start anchor (the function header) to a fixed end anchor (the
/// closing brace of a timer callback followed by a semicolon). The match is
/// purely lexical over raw text; any change to the target's shape since the
/// pattern was authored makes it match nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchSpec<'a> {
    pub pattern: &'a str,
    pub replacement: &'a str,
}

impl<'a> PatchSpec<'a> {
    pub const fn new(pattern: &'a str, replacement: &'a str) -> Self {
        Self {
            pattern,
            replacement,
        }
    }

    /// Replace every non-overlapping match of the pattern with the
    /// replacement text.
    ///
    /// The pattern is compiled with dot-matches-newline so `.` can cross line
    /// boundaries. The replacement is inserted verbatim via [`NoExpand`]; the
    /// hardcoded JS body contains `${...}` template syntax that must not be
    /// treated as capture-group references.
    ///
    /// Zero matches returns the input unchanged with no error and no signal
    /// to the caller.
    pub fn apply<'s>(&self, source: &'s str) -> Result<Cow<'s, str>, regex::Error> {
        let re = RegexBuilder::new(self.pattern)
            .dot_matches_new_line(true)
            .build()?;

        Ok(re.replace_all(source, NoExpand(self.replacement)))
    }
}
