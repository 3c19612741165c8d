//! The [`Space`] entity and its checked mutation operations.

use crate::error::SpaceError;
use fief_core::owner::LOST_TRIBES;
use fief_core::{Owner, SpaceId, Symbol, Terrain};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::fmt;

/// Lost tribes defend a space with exactly two tokens.
const LOST_TRIBES_SEED: u32 = 2;

/// Mountain spaces carry one immovable terrain token.
const MOUNTAIN_SEED: u32 = 1;

/// One cell of a territory-conquest board.
///
/// A space is constructed once from validated inputs and then mutated only
/// through the checked operations: [`add_tokens`](Space::add_tokens),
/// [`remove_tokens`](Space::remove_tokens),
/// [`remove_all_tokens`](Space::remove_all_tokens),
/// [`change_owner`](Space::change_owner), and
/// [`add_neighbour`](Space::add_neighbour). Identity (`id`), geography
/// (`terrain`, `is_edge`, `symbol`) and the adjacency capability are fixed
/// at construction.
///
/// Tokens are a multiset keyed by kind; a kind's stored count is always at
/// least 1 — removing the last token of a kind drops the entry entirely.
/// Iteration order over tokens is insertion order, which keeps the
/// [`Display`](fmt::Display) report deterministic.
///
/// Ownership and token bookkeeping are coupled only at construction (the
/// lost-tribes seeding below); afterwards [`change_owner`](Space::change_owner)
/// never touches the tokens.
///
/// # Construction-time seeding
///
/// - `lost_tribes` ⇒ the owner is set to [`Owner::LostTribes`] and two
///   `lost_tribes` tokens are placed.
/// - mountains terrain ⇒ one `mountains` token is placed. Lost tribes on
///   mountains are rejected outright.
///
/// # Examples
///
/// ```
/// use fief_core::{Owner, SpaceId, Terrain};
/// use fief_space::Space;
///
/// // A mountain space starts with its terrain token and no owner.
/// let peak = Space::new(SpaceId(1), Terrain::Mountains, false, false, None).unwrap();
/// assert_eq!(peak.owner(), None);
/// assert_eq!(peak.token_count("mountains"), 1);
///
/// // A lost-tribes swamp starts occupied.
/// let swamp = Space::new(SpaceId(2), Terrain::Swamp, false, true, None).unwrap();
/// assert_eq!(swamp.owner(), Some(&Owner::LostTribes));
/// assert_eq!(swamp.token_count("lost_tribes"), 2);
///
/// // Token arithmetic accumulates and removes by exact amounts.
/// let mut farm = Space::new(SpaceId(3), Terrain::Farm, true, false, None).unwrap();
/// farm.add_tokens("orc", 5).unwrap();
/// assert_eq!(farm.remove_tokens("orc", 2).unwrap(), 2);
/// assert_eq!(farm.token_count("orc"), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Space {
    id: SpaceId,
    terrain: Terrain,
    is_edge: bool,
    owner: Option<Owner>,
    symbol: Option<Symbol>,
    tokens: IndexMap<String, u32>,
    neighbours: Option<SmallVec<[SpaceId; 6]>>,
}

impl Space {
    /// Create a space without the adjacency capability.
    ///
    /// Validation runs before any state is built: the ID must be at least
    /// 1, and `lost_tribes` is rejected on mountains terrain. On success
    /// the token map holds exactly the seeded entries implied by `terrain`
    /// and `lost_tribes`, and nothing else.
    pub fn new(
        id: SpaceId,
        terrain: Terrain,
        is_edge: bool,
        lost_tribes: bool,
        symbol: Option<Symbol>,
    ) -> Result<Self, SpaceError> {
        Self::build(id, terrain, is_edge, lost_tribes, symbol, false)
    }

    /// Create a space that tracks its neighbours.
    ///
    /// Same contract as [`Space::new`]; the neighbour list starts empty and
    /// grows through [`add_neighbour`](Space::add_neighbour).
    ///
    /// ```
    /// use fief_core::{SpaceId, Terrain};
    /// use fief_space::Space;
    ///
    /// let mut s = Space::with_adjacency(SpaceId(4), Terrain::Water, true, false, None).unwrap();
    /// s.add_neighbour(SpaceId(3)).unwrap();
    /// s.add_neighbour(SpaceId(5)).unwrap();
    /// assert_eq!(s.neighbours(), Some(&[SpaceId(3), SpaceId(5)][..]));
    /// ```
    pub fn with_adjacency(
        id: SpaceId,
        terrain: Terrain,
        is_edge: bool,
        lost_tribes: bool,
        symbol: Option<Symbol>,
    ) -> Result<Self, SpaceError> {
        Self::build(id, terrain, is_edge, lost_tribes, symbol, true)
    }

    fn build(
        id: SpaceId,
        terrain: Terrain,
        is_edge: bool,
        lost_tribes: bool,
        symbol: Option<Symbol>,
        adjacency: bool,
    ) -> Result<Self, SpaceError> {
        if id.0 < 1 {
            return Err(SpaceError::NonPositiveId { id });
        }
        if terrain == Terrain::Mountains && lost_tribes {
            return Err(SpaceError::TribesOnMountains);
        }

        let mut space = Self {
            id,
            terrain,
            is_edge,
            owner: None,
            symbol,
            tokens: IndexMap::new(),
            neighbours: adjacency.then(SmallVec::new),
        };

        if lost_tribes {
            space.owner = Some(Owner::LostTribes);
            space.add_tokens(LOST_TRIBES, LOST_TRIBES_SEED)?;
        }
        if terrain == Terrain::Mountains {
            space.add_tokens(terrain.token_kind(), MOUNTAIN_SEED)?;
        }
        Ok(space)
    }

    /// Board-unique identifier.
    pub fn id(&self) -> SpaceId {
        self.id
    }

    /// Terrain category.
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// Whether the space sits on the board's outer rim.
    pub fn is_edge(&self) -> bool {
        self.is_edge
    }

    /// Current owner, or `None` while unclaimed.
    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    /// Map symbol, or `None` when the space has no special feature.
    pub fn symbol(&self) -> Option<Symbol> {
        self.symbol
    }

    /// Tokens on the space, in insertion order.
    pub fn tokens(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.tokens.iter().map(|(kind, &count)| (kind.as_str(), count))
    }

    /// Count of a single token kind; 0 when the kind is absent.
    pub fn token_count(&self, kind: &str) -> u32 {
        self.tokens.get(kind).copied().unwrap_or(0)
    }

    /// Total tokens of all kinds on the space.
    pub fn total_tokens(&self) -> u32 {
        self.tokens.values().sum()
    }

    /// Tokens held by the current owner; 0 while unclaimed.
    pub fn owner_tokens(&self) -> u32 {
        self.owner
            .as_ref()
            .map_or(0, |owner| self.token_count(owner.as_str()))
    }

    /// Whether this space tracks neighbours.
    pub fn has_adjacency(&self) -> bool {
        self.neighbours.is_some()
    }

    /// Neighbour IDs in the order they were added, or `None` for a space
    /// built without the adjacency capability.
    pub fn neighbours(&self) -> Option<&[SpaceId]> {
        self.neighbours.as_deref()
    }

    /// Place `count` tokens of `kind` on the space.
    ///
    /// A kind already present accumulates: two calls sum their counts.
    /// There is no upper bound. A zero count is rejected and nothing
    /// changes.
    pub fn add_tokens(&mut self, kind: impl Into<String>, count: u32) -> Result<(), SpaceError> {
        let kind = kind.into();
        if count == 0 {
            return Err(SpaceError::ZeroTokenCount { kind });
        }
        *self.tokens.entry(kind).or_insert(0) += count;
        Ok(())
    }

    /// Remove `count` tokens of `kind`, returning the amount removed.
    ///
    /// Removing exactly the stored count drops the kind from the space;
    /// removing less decrements it. Asking for more than is present fails
    /// and leaves the space unchanged, as does a zero count or an absent
    /// kind.
    pub fn remove_tokens(&mut self, kind: &str, count: u32) -> Result<u32, SpaceError> {
        if count == 0 {
            return Err(SpaceError::ZeroTokenCount {
                kind: kind.to_string(),
            });
        }
        let present = match self.tokens.get(kind) {
            Some(&n) => n,
            None => {
                return Err(SpaceError::TokenNotPresent {
                    kind: kind.to_string(),
                })
            }
        };
        if count > present {
            return Err(SpaceError::RemoveExceedsCount {
                kind: kind.to_string(),
                requested: count,
                present,
            });
        }
        if count == present {
            self.tokens.shift_remove(kind);
        } else {
            // Existing keys keep their position in the iteration order.
            self.tokens.insert(kind.to_string(), present - count);
        }
        Ok(count)
    }

    /// Remove every token of `kind`, returning how many were removed.
    pub fn remove_all_tokens(&mut self, kind: &str) -> Result<u32, SpaceError> {
        self.tokens
            .shift_remove(kind)
            .ok_or_else(|| SpaceError::TokenNotPresent {
                kind: kind.to_string(),
            })
    }

    /// Hand the space to `new_owner`, or release it with `None`.
    ///
    /// Tokens are untouched: ownership and token bookkeeping are coupled
    /// only by construction-time seeding.
    pub fn change_owner(&mut self, new_owner: Option<Owner>) {
        self.owner = new_owner;
    }

    /// Append a neighbour ID to the adjacency list.
    ///
    /// Only spaces built with [`Space::with_adjacency`] accept neighbours.
    /// Self-references are rejected; duplicates are not (a board file may
    /// legitimately repeat an edge).
    pub fn add_neighbour(&mut self, neighbour: SpaceId) -> Result<(), SpaceError> {
        let Some(list) = self.neighbours.as_mut() else {
            return Err(SpaceError::NoAdjacency);
        };
        if neighbour == self.id {
            return Err(SpaceError::SelfNeighbour { id: neighbour });
        }
        list.push(neighbour);
        Ok(())
    }
}

impl fmt::Display for Space {
    /// Deterministic multi-line report: identity, ownership, geography,
    /// every token kind in insertion order, and (when tracked) the
    /// neighbour list. A presentation convenience, not a wire format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "space: {}", self.id)?;
        writeln!(f, "terrain: {}", self.terrain)?;
        writeln!(f, "is_edge: {}", self.is_edge)?;
        match &self.owner {
            Some(owner) => writeln!(f, "owner: {owner}")?,
            None => writeln!(f, "owner: none")?,
        }
        writeln!(f, "owner_tokens: {}", self.owner_tokens())?;
        match self.symbol {
            Some(symbol) => writeln!(f, "symbol: {symbol}")?,
            None => writeln!(f, "symbol: none")?,
        }
        writeln!(f, "tokens:")?;
        for (kind, count) in self.tokens() {
            writeln!(f, "  {kind}: {count}")?;
        }
        if let Some(neighbours) = &self.neighbours {
            write!(f, "neighbours:")?;
            for n in neighbours {
                write!(f, " {n}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
