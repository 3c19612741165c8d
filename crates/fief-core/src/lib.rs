//! Core identifiers and board vocabulary for the fief workspace.
//!
//! This is the leaf crate with zero dependencies. It defines the fixed
//! domains a board is described in — [`Terrain`], [`Symbol`], [`Owner`] —
//! and the [`SpaceId`] newtype, so that every other crate shares one
//! process-wide vocabulary instead of re-declaring ad-hoc string sets.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod owner;
pub mod symbol;
pub mod terrain;

pub use error::ParseError;
pub use id::SpaceId;
pub use owner::Owner;
pub use symbol::Symbol;
pub use terrain::Terrain;
