//! The fixed terrain domain.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Geographic category of a board space.
///
/// The domain is fixed: board definitions may only name these five types.
/// Parsing accepts the alternate spellings some board files use (`mesa`
/// for hills, singular `mountain`); [`Terrain::as_str`] always yields the
/// canonical name.
///
/// # Examples
///
/// ```
/// use fief_core::Terrain;
///
/// let t: Terrain = "swamp".parse().unwrap();
/// assert_eq!(t, Terrain::Swamp);
///
/// // Alternate spelling from older board files.
/// let m: Terrain = "mesa".parse().unwrap();
/// assert_eq!(m, Terrain::Hills);
/// assert_eq!(m.as_str(), "hills");
///
/// assert!("abbey".parse::<Terrain>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// Farmland.
    Farm,
    /// Hills (spelled `mesa` in some board files).
    Hills,
    /// Swamp.
    Swamp,
    /// Mountains. Seeds one immovable mountain token at construction and
    /// never hosts lost tribes.
    Mountains,
    /// Water.
    Water,
}

impl Terrain {
    /// Canonical lowercase name, as used in board files and token keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Farm => "farm",
            Self::Hills => "hills",
            Self::Swamp => "swamp",
            Self::Mountains => "mountains",
            Self::Water => "water",
        }
    }

    /// Token kind seeded on mountain spaces.
    pub fn token_kind(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Terrain {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "farm" => Ok(Self::Farm),
            "hills" | "mesa" => Ok(Self::Hills),
            "swamp" => Ok(Self::Swamp),
            "mountains" | "mountain" => Ok(Self::Mountains),
            "water" => Ok(Self::Water),
            _ => Err(ParseError::UnknownTerrain {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_names() {
        for (name, expect) in [
            ("farm", Terrain::Farm),
            ("hills", Terrain::Hills),
            ("swamp", Terrain::Swamp),
            ("mountains", Terrain::Mountains),
            ("water", Terrain::Water),
        ] {
            assert_eq!(name.parse::<Terrain>().unwrap(), expect);
            assert_eq!(expect.as_str(), name);
        }
    }

    #[test]
    fn parse_alternate_spellings() {
        assert_eq!("mesa".parse::<Terrain>().unwrap(), Terrain::Hills);
        assert_eq!("mountain".parse::<Terrain>().unwrap(), Terrain::Mountains);
    }

    #[test]
    fn parse_rejects_unknown_and_miscased() {
        for bad in ["Farm", "abbey", "swamps", ""] {
            let err = bad.parse::<Terrain>().unwrap_err();
            assert_eq!(
                err,
                ParseError::UnknownTerrain {
                    value: bad.to_string()
                }
            );
        }
    }
}
