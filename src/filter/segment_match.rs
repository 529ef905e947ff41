use std::fmt::{Debug, Formatter};
use std::str::FromStr;

use anyhow::{anyhow, bail};
use regex::Regex;

/// Strategy for matching a single coordinate segment (a group id, a scope, ...).
///
/// Every strategy is a pure function of the candidate string. An absent candidate only matches
///  `Any`.
#[derive(Clone)]
pub enum SegmentMatch {
    Exact(String),
    Any,
    Glob {
        pattern: String,
        regex: Regex,
    },
}

impl SegmentMatch {
    pub fn exact(segment: &str) -> SegmentMatch {
        SegmentMatch::Exact(segment.to_string())
    }

    /// `*` matches any (possibly empty) run of characters, everything else is literal
    pub fn glob(pattern: &str) -> anyhow::Result<SegmentMatch> {
        let translated = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = Regex::new(&format!("^{}$", translated))?;

        Ok(SegmentMatch::Glob {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn parse(strategy: MatchStrategy, segment: &str) -> anyhow::Result<SegmentMatch> {
        match strategy {
            MatchStrategy::Exact => Ok(SegmentMatch::exact(segment)),
            MatchStrategy::Any => Ok(SegmentMatch::Any),
            MatchStrategy::Glob => SegmentMatch::glob(segment),
        }
    }

    pub fn matches(&self, candidate: Option<&str>) -> bool {
        match (self, candidate) {
            (SegmentMatch::Any, _) => true,
            (_, None) => false,
            (SegmentMatch::Exact(segment), Some(candidate)) => segment == candidate,
            (SegmentMatch::Glob { regex, .. }, Some(candidate)) => regex.is_match(candidate),
        }
    }
}

impl PartialEq for SegmentMatch {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SegmentMatch::Exact(a), SegmentMatch::Exact(b)) => a == b,
            (SegmentMatch::Any, SegmentMatch::Any) => true,
            (SegmentMatch::Glob { pattern: a, .. }, SegmentMatch::Glob { pattern: b, .. }) => a == b,
            _ => false,
        }
    }
}
impl Eq for SegmentMatch {}

impl Debug for SegmentMatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentMatch::Exact(segment) => write!(f, "Exact({:?})", segment),
            SegmentMatch::Any => write!(f, "Any"),
            SegmentMatch::Glob { pattern, .. } => write!(f, "Glob({:?})", pattern),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum MatchStrategy {
    #[default]
    Exact,
    Any,
    Glob,
}

impl FromStr for MatchStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(MatchStrategy::Exact),
            "any" => Ok(MatchStrategy::Any),
            "glob" => Ok(MatchStrategy::Glob),
            "" => bail!("empty match strategy"),
            other => Err(anyhow!("unknown match strategy {:?} - expected one of exact, any, glob", other)),
        }
    }
}
