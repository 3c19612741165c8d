//! Fief: board-space modelling for territory-conquest games.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the fief sub-crates. For most users, adding `fief` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fief::prelude::*;
//!
//! // A lost-tribes swamp on the board's rim.
//! let mut swamp = Space::with_adjacency(
//!     SpaceId(2),
//!     Terrain::Swamp,
//!     true,
//!     true,
//!     Some(Symbol::Cavern),
//! )
//! .unwrap();
//! swamp.add_neighbour(SpaceId(1)).unwrap();
//! swamp.add_neighbour(SpaceId(3)).unwrap();
//! assert_eq!(swamp.owner(), Some(&Owner::LostTribes));
//! assert_eq!(swamp.token_count("lost_tribes"), 2);
//!
//! // A player clears the tribes and takes the space.
//! swamp.remove_all_tokens("lost_tribes").unwrap();
//! swamp.change_owner(Some(Owner::player("red")));
//! swamp.add_tokens("red", 3).unwrap();
//! assert_eq!(swamp.owner_tokens(), 3);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fief-core` | IDs, terrain/symbol vocabulary, ownership |
//! | [`space`] | `fief-space` | The `Space` entity and its operations |
//! | [`board`] | `fief-board` | Board records, tabular loading, JSON documents |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core identifiers and board vocabulary (`fief-core`).
///
/// Contains [`types::SpaceId`], the [`types::Terrain`] and
/// [`types::Symbol`] domains, and [`types::Owner`].
pub use fief_core as types;

/// The board-space entity (`fief-space`).
///
/// [`space::Space`] and its checked mutation operations.
pub use fief_space as space;

/// Board-definition loading (`fief-board`).
///
/// [`board::SpaceRecord`], [`board::Board`], the tabular parser
/// [`board::parse_table`], and the file converter [`board::convert`].
pub use fief_board as board;

/// Common imports for typical fief usage.
///
/// ```rust
/// use fief::prelude::*;
/// ```
pub mod prelude {
    pub use fief_board::{Board, BoardError, SpaceRecord};
    pub use fief_core::{Owner, ParseError, SpaceId, Symbol, Terrain};
    pub use fief_space::{Space, SpaceError};
}
