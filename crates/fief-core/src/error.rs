//! Error types for vocabulary parsing.

use std::fmt;

/// Errors from parsing a board-vocabulary name.
///
/// Returned by the `FromStr` impls of [`Terrain`](crate::Terrain) and
/// [`Symbol`](crate::Symbol) when a name is not in the fixed domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The name is not a known terrain type.
    UnknownTerrain {
        /// The offending name.
        value: String,
    },
    /// The name is not a known map symbol.
    UnknownSymbol {
        /// The offending name.
        value: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTerrain { value } => write!(f, "invalid terrain type: {value}"),
            Self::UnknownSymbol { value } => write!(f, "invalid map symbol: {value}"),
        }
    }
}

impl std::error::Error for ParseError {}
