use std::fmt;

/// Errors related to resource lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    AssetNotFound(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::AssetNotFound(id) => write!(f, "asset {id:?} not found"),
        }
    }
}

impl std::error::Error for LookupError {}

/// Errors from parsing calculator options given as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownRateBasis(String),
    UnknownGranularity(String),
    UnknownContributionPolicy(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownRateBasis(s) => {
                write!(f, "unknown rate basis {s:?} (expected annual, monthly or daily)")
            }
            ParseError::UnknownGranularity(s) => {
                write!(f, "unknown granularity {s:?} (expected monthly or daily)")
            }
            ParseError::UnknownContributionPolicy(s) => {
                write!(
                    f,
                    "unknown contribution policy {s:?} (expected lump-sum or periodic)"
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
