//! PR title naming conventions.
//!
//! A title is accepted when it matches at least one pattern in
//! [`TITLE_PATTERNS`]. Patterns are unanchored searches, so a convention may
//! be satisfied by any substring of the title.
//!
//! `change-ticket` and `incident-ticket` use character classes: `[CHG]{3}`
//! accepts any three letters drawn from `C`, `H`, `G` (e.g. `HHH`), not only
//! the literal `CHG`. This matches the conventions as they have been
//! enforced so far.

use crate::error::{Result, TitleGateError};
use regex::Regex;

/// A named title convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitlePattern {
    /// Stable name, reported in logs.
    pub name: &'static str,

    /// Regular expression searched for in the title.
    pub regex: &'static str,
}

/// Accepted PR title conventions.
pub const TITLE_PATTERNS: &[TitlePattern] = &[
    // ABCDEFGH-1 followed by a space and text
    TitlePattern {
        name: "project-key-single-digit",
        regex: r"[A-Za-z]{8}-(\d{1}) .+",
    },
    // ARCHTECH-12 Formats
    TitlePattern {
        name: "project-key-digit-groups",
        regex: r"[A-Za-z]{8}-(\d{1})+ .+",
    },
    // ARCHTECH-1234 Formats
    TitlePattern {
        name: "project-key-four-digits",
        regex: r"[A-Za-z]{8}-\d{4} .+",
    },
    // CHG1234567890 rollout
    TitlePattern {
        name: "change-ticket",
        regex: r"[CHG]{3}\d{10} .+",
    },
    // INC0025427287 outage
    TitlePattern {
        name: "incident-ticket",
        regex: r"[INC]{3}\d{10} .+",
    },
    TitlePattern {
        name: "promotion-dev-to-uat",
        regex: r"DEV.to.UAT.*",
    },
    TitlePattern {
        name: "promotion-uat-to-prd",
        regex: r"UAT.to.PRD.*",
    },
    TitlePattern {
        name: "promotion-prd-to-dev",
        regex: r"PRD.to.DEV.*",
    },
    // Test Pull Request ARCHTECH-1
    TitlePattern {
        name: "short-form-key",
        regex: r"ARCHTECH-\d{1}",
    },
];

/// Compiled title conventions.
#[derive(Debug, Clone)]
pub struct TitleValidator {
    patterns: Vec<(&'static str, Regex)>,
}

impl TitleValidator {
    /// Compile the built-in conventions.
    pub fn new() -> Result<Self> {
        Self::with_patterns(TITLE_PATTERNS)
    }

    /// Compile a custom set of conventions.
    pub fn with_patterns(patterns: &[TitlePattern]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p.regex)
                    .map(|re| (p.name, re))
                    .map_err(|source| TitleGateError::InvalidPattern {
                        name: p.name.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Whether the title matches at least one convention.
    pub fn matches(&self, title: &str) -> bool {
        self.matching_pattern(title).is_some()
    }

    /// Name of the first convention the title matches.
    pub fn matching_pattern(&self, title: &str) -> Option<&'static str> {
        self.patterns
            .iter()
            .find(|(_, re)| re.is_match(title))
            .map(|(name, _)| *name)
    }
}
