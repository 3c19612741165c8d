//! The fixed map-symbol domain.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Special feature printed on a board space.
///
/// Most spaces carry no symbol; the ones that do draw it from this fixed
/// domain. Parsing accepts the shorthand `magic` some board files use for
/// the magic source.
///
/// # Examples
///
/// ```
/// use fief_core::Symbol;
///
/// assert_eq!("mine".parse::<Symbol>().unwrap(), Symbol::Mine);
/// assert_eq!("magic".parse::<Symbol>().unwrap(), Symbol::MagicSource);
/// assert_eq!(Symbol::MagicSource.as_str(), "magic_source");
/// assert!("lost_tribes".parse::<Symbol>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A cavern entrance.
    Cavern,
    /// A source of magic (spelled `magic` in some board files).
    MagicSource,
    /// A mine.
    Mine,
}

impl Symbol {
    /// Canonical lowercase name, as used in board files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cavern => "cavern",
            Self::MagicSource => "magic_source",
            Self::Mine => "mine",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cavern" => Ok(Self::Cavern),
            "magic_source" | "magic" => Ok(Self::MagicSource),
            "mine" => Ok(Self::Mine),
            _ => Err(ParseError::UnknownSymbol {
                value: s.to_string(),
            }),
        }
    }
}
