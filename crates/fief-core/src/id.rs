//! The [`SpaceId`] newtype.

use std::fmt;

/// Identifies a space on a game board.
///
/// Board definitions number their spaces with positive integers; `SpaceId`
/// wraps the raw number so it cannot be confused with token counts or
/// player indices. Positivity is enforced where a space is constructed,
/// not here — the newtype itself is a plain transparent wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpaceId(pub u32);

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SpaceId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
