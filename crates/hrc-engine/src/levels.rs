//! # Levels - Matching Rules for Outline Lines
//!
//! A [`LevelConfig`] describes how one outline level is recognised and how its
//! identifier is produced. Configurations are built once from a user-facing
//! [`LevelSpec`] via [`LevelConfig::compile`] (or [`compile_levels`] for a full
//! set) and are read-only for the duration of a run.
//!
//! ## Identifier policies
//!
//! Every level takes its identifier from exactly one source:
//!
//! - [`IdentifierPolicy::CaptureGroup`] - the text of capture group 1 of the
//!   level's pattern. Compilation rejects patterns that do not have exactly one
//!   capturing group.
//! - [`IdentifierPolicy::AutoIncrement`] - a counter that advances on every
//!   match and resets to its seed whenever the ancestor context changes.
//!
//! ## Anchoring
//!
//! Patterns always match at the start of a line. Every pattern is wrapped as
//! `^(?:pattern)` before compilation, so each alternative of a `|` pattern is
//! anchored and the capture-group count is unchanged.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default marker character used in rewritten lines.
pub const DEFAULT_MARKER_CHAR: char = '*';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("no levels configured")]
    NoLevels,

    #[error("level {level}: pattern is required")]
    EmptyPattern { level: usize },

    #[error("level {level}: invalid pattern `{pattern}`: {message}")]
    InvalidPattern {
        level: usize,
        pattern: String,
        message: String,
    },

    #[error("level {level}: pattern must contain exactly one capturing group, found {found}")]
    CaptureGroupCount { level: usize, found: usize },

    #[error("level {level}: item type name is required")]
    EmptyItemType { level: usize },

    #[error("level {level}: marker must be one or more `*` characters, got `{marker}`")]
    InvalidMarker { level: usize, marker: String },

    #[error("level {level}: start value `{seed}` is not valid for a {kind} counter")]
    InvalidSeed {
        level: usize,
        kind: CounterKind,
        seed: String,
    },
}

/// Alphabet an auto-increment counter counts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CounterKind {
    /// `1`, `2`, `3`, ...
    #[default]
    Numeric,
    /// `a`, `b`, ..., `z`, `aa`, ...
    AlphaLower,
    /// `A`, `B`, ..., `Z`, `AA`, ...
    AlphaUpper,
}

impl CounterKind {
    /// Seed used when a level does not specify its own start value.
    pub fn default_seed(self) -> &'static str {
        match self {
            CounterKind::Numeric => "1",
            CounterKind::AlphaLower => "a",
            CounterKind::AlphaUpper => "A",
        }
    }

    fn accepts_seed(self, seed: &str) -> bool {
        !seed.is_empty()
            && match self {
                CounterKind::Numeric => seed.chars().all(|c| c.is_ascii_digit()),
                CounterKind::AlphaLower => seed.chars().all(|c| c.is_ascii_lowercase()),
                CounterKind::AlphaUpper => seed.chars().all(|c| c.is_ascii_uppercase()),
            }
    }
}

impl std::fmt::Display for CounterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CounterKind::Numeric => "numeric",
            CounterKind::AlphaLower => "alpha-lower",
            CounterKind::AlphaUpper => "alpha-upper",
        };
        f.write_str(name)
    }
}

/// Where a level's identifier comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierPolicy {
    /// Use the text of capture group 1.
    CaptureGroup,
    /// Use a counter seeded with `seed`.
    AutoIncrement { kind: CounterKind, seed: String },
}

/// The marker token configured on level 1, e.g. `**`.
///
/// Only its character and length matter: the rewritten marker for a line at
/// depth `d` is the character repeated `count + d - 1` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerToken {
    pub ch: char,
    pub count: usize,
}

impl MarkerToken {
    /// Parses a marker token, accepting one or more `*` characters.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() || !token.chars().all(|c| c == DEFAULT_MARKER_CHAR) {
            return None;
        }
        Some(Self {
            ch: DEFAULT_MARKER_CHAR,
            count: token.chars().count(),
        })
    }
}

/// Identifier settings as supplied by a user, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierSpec {
    CaptureGroup,
    AutoIncrement {
        kind: CounterKind,
        start: Option<String>,
    },
}

/// Unvalidated description of one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSpec {
    pub pattern: String,
    pub item_type: String,
    /// Marker token; only read for level 1.
    pub marker: Option<String>,
    pub identifier: IdentifierSpec,
}

/// A validated, compiled level.
#[derive(Debug, Clone)]
pub struct LevelConfig {
    /// 1-based position of this level.
    pub index: usize,
    pub original_pattern: String,
    pub anchored_pattern: String,
    pub matcher: Regex,
    pub item_type: String,
    /// Present on level 1 only.
    pub marker: Option<MarkerToken>,
    pub policy: IdentifierPolicy,
}

impl LevelConfig {
    /// Validates `spec` and compiles its pattern as level `index` (1-based).
    pub fn compile(index: usize, spec: &LevelSpec) -> Result<Self, LevelError> {
        let original_pattern = spec.pattern.trim();
        if original_pattern.is_empty() {
            return Err(LevelError::EmptyPattern { level: index });
        }

        let anchored_pattern = anchor(original_pattern);
        let matcher = Regex::new(&anchored_pattern).map_err(|e| LevelError::InvalidPattern {
            level: index,
            pattern: anchored_pattern.clone(),
            message: e.to_string(),
        })?;

        let policy = match &spec.identifier {
            IdentifierSpec::CaptureGroup => {
                // captures_len counts the implicit whole-match group
                let found = matcher.captures_len() - 1;
                if found != 1 {
                    return Err(LevelError::CaptureGroupCount {
                        level: index,
                        found,
                    });
                }
                IdentifierPolicy::CaptureGroup
            }
            IdentifierSpec::AutoIncrement { kind, start } => {
                let seed = start
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_else(|| kind.default_seed());
                if !kind.accepts_seed(seed) {
                    return Err(LevelError::InvalidSeed {
                        level: index,
                        kind: *kind,
                        seed: seed.to_string(),
                    });
                }
                IdentifierPolicy::AutoIncrement {
                    kind: *kind,
                    seed: seed.to_string(),
                }
            }
        };

        let item_type = spec.item_type.trim();
        if item_type.is_empty() {
            return Err(LevelError::EmptyItemType { level: index });
        }

        let marker = if index == 1 {
            let raw = spec.marker.as_deref().unwrap_or_default();
            Some(
                MarkerToken::parse(raw).ok_or_else(|| LevelError::InvalidMarker {
                    level: index,
                    marker: raw.to_string(),
                })?,
            )
        } else {
            None
        };

        Ok(Self {
            index,
            original_pattern: original_pattern.to_string(),
            anchored_pattern,
            matcher,
            item_type: item_type.to_string(),
            marker,
            policy,
        })
    }
}

/// Compiles an ordered list of level specs, numbering them from 1.
pub fn compile_levels(specs: &[LevelSpec]) -> Result<Vec<LevelConfig>, LevelError> {
    if specs.is_empty() {
        return Err(LevelError::NoLevels);
    }
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| LevelConfig::compile(i + 1, spec))
        .collect()
}

/// Anchors every alternative of `pattern` at the start of the line.
fn anchor(pattern: &str) -> String {
    format!("^(?:{pattern})")
}
