// src/models/policy.rs
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user-selected rule governing how a character class is rewritten.
///
/// `Off` is the default for every class and guarantees no mutation. The
/// persisted form is the kebab-case name; an unrecognized stored value is
/// a decode error rather than a silent fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplacementPolicy {
    #[default]
    Off,
    Blank,
    Space,
    Hyphen,
    HyphenSpace,
}

impl ReplacementPolicy {
    /// The text substituted for each matched character. Never contains a
    /// troublesome character itself, so rewriting is stable under
    /// re-application.
    #[must_use]
    pub const fn replacement(self) -> &'static str {
        match self {
            Self::Off | Self::Blank => "",
            Self::Space => " ",
            Self::Hyphen => "-",
            Self::HyphenSpace => " - ",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Blank => "blank",
            Self::Space => "space",
            Self::Hyphen => "hyphen",
            Self::HyphenSpace => "hyphen-space",
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplacementPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "blank" => Ok(Self::Blank),
            "space" => Ok(Self::Space),
            "hyphen" => Ok(Self::Hyphen),
            "hyphen-space" => Ok(Self::HyphenSpace),
            _ => Err(anyhow!(
                "unknown replacement policy '{s}' (expected one of: off, blank, \
                 space, hyphen, hyphen-space)"
            )),
        }
    }
}
