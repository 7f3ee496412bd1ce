//! Match rules over email addresses.

use std::fmt;

/// Character class used by wildcard fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII word characters (`[0-9A-Za-z_]`) plus `+`, as found in local parts.
    Word,
    /// ASCII lowercase letters.
    Lower,
}

impl CharClass {
    /// Returns true if `c` belongs to this class.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Word => c.is_ascii_alphanumeric() || c == '_' || c == '+',
            CharClass::Lower => c.is_ascii_lowercase(),
        }
    }

    fn expression(self) -> &'static str {
        match self {
            CharClass::Word => r"[\w+]",
            CharClass::Lower => "([a-z]+)",
        }
    }
}

/// One segment of a [`MatchRule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// One or more characters of the given class.
    Wildcard(CharClass),
    /// Caller-supplied text, matched exactly.
    Literal(String),
}

impl Fragment {
    /// Wildcard used for the local part when the filter leaves it out.
    pub fn local_default() -> Self {
        Fragment::Wildcard(CharClass::Word)
    }

    /// Wildcard used for the domain name and suffix when the filter leaves them out.
    pub fn domain_default() -> Self {
        Fragment::Wildcard(CharClass::Lower)
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Fragment::Literal(text.into())
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Fragment::Wildcard(_))
    }

    /// True if `head` ends with this fragment.
    fn ends(&self, head: &str) -> bool {
        match self {
            Fragment::Literal(text) => head.ends_with(text.as_str()),
            Fragment::Wildcard(class) => head.chars().next_back().is_some_and(|c| class.contains(c)),
        }
    }

    /// True if `tail` starts with this fragment.
    fn starts(&self, tail: &str) -> bool {
        match self {
            Fragment::Literal(text) => tail.starts_with(text.as_str()),
            Fragment::Wildcard(class) => tail.chars().next().is_some_and(|c| class.contains(c)),
        }
    }

    /// Strips this fragment from the front of `tail`.
    ///
    /// A wildcard takes its longest run. Neither class contains `@` or `.`,
    /// so a shorter run could never be followed by a separator.
    fn strip<'a>(&self, tail: &'a str) -> Option<&'a str> {
        match self {
            Fragment::Literal(text) => tail.strip_prefix(text.as_str()),
            Fragment::Wildcard(class) => {
                let end = tail
                    .find(|c: char| !class.contains(c))
                    .unwrap_or(tail.len());
                (end > 0).then(|| &tail[end..])
            }
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Wildcard(class) => f.write_str(class.expression()),
            Fragment::Literal(text) => f.write_str(text),
        }
    }
}

/// Three-part rule of the shape `local @ domain_name . domain_suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRule {
    pub local: Fragment,
    pub domain_name: Fragment,
    pub domain_suffix: Fragment,
}

impl Default for MatchRule {
    fn default() -> Self {
        Self {
            local: Fragment::local_default(),
            domain_name: Fragment::domain_default(),
            domain_suffix: Fragment::domain_default(),
        }
    }
}

impl MatchRule {
    /// Returns true if the rule occurs anywhere inside `email`.
    ///
    /// Every `@` in the email is tried as the separator. Runs after distinct
    /// separators never overlap, so the scan is linear in the email length.
    pub fn matches(&self, email: &str) -> bool {
        email.match_indices('@').any(|(at, _)| {
            self.local.ends(&email[..at])
                && self
                    .domain_name
                    .strip(&email[at + 1..])
                    .and_then(|rest| rest.strip_prefix('.'))
                    .is_some_and(|rest| self.domain_suffix.starts(rest))
        })
    }

    /// Renders the rule as a single expression string, for logs.
    pub fn expression(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}.{}", self.local, self.domain_name, self.domain_suffix)
    }
}
