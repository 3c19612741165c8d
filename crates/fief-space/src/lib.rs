//! The board-space entity for fief.
//!
//! This crate defines [`Space`] — one cell of a territory-conquest board,
//! owning its token multiset, owner, terrain, map symbol, and (optionally)
//! a neighbour list. Every mutation goes through a checked operation, and
//! every check runs before any state changes, so a failed call leaves the
//! space exactly as it was.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod space;

pub use error::SpaceError;
pub use space::Space;
