//! Space ownership.

use std::fmt;

/// Token kind and owner name of the native-tribe occupant.
pub const LOST_TRIBES: &str = "lost_tribes";

/// Who holds a board space.
///
/// A space is either unclaimed (`Option::<Owner>::None` at the space
/// level), held by the pre-seeded lost tribes, or held by a named player.
/// [`Owner::as_str`] doubles as the owner's token kind: the tokens an
/// owner occupies a space with are keyed by this name.
///
/// # Examples
///
/// ```
/// use fief_core::Owner;
///
/// let tribes = Owner::LostTribes;
/// assert_eq!(tribes.as_str(), "lost_tribes");
///
/// let red = Owner::player("red");
/// assert_eq!(red.as_str(), "red");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    /// The unclaimed native-tribe occupant seeded at board setup.
    LostTribes,
    /// A player, identified by name.
    Player(String),
}

impl Owner {
    /// Construct a player owner from any string-ish name.
    pub fn player(name: impl Into<String>) -> Self {
        Self::Player(name.into())
    }

    /// Owner name; also the key this owner's tokens are stored under.
    pub fn as_str(&self) -> &str {
        match self {
            Self::LostTribes => LOST_TRIBES,
            Self::Player(name) => name,
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
