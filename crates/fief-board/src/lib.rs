//! Board-definition loading for fief.
//!
//! A board arrives as a tabular (CSV-compatible) description, one row per
//! space. This crate parses that into string-typed [`SpaceRecord`]s — the
//! boundary format spaces are constructed from — collects them into a
//! [`Board`] document, and writes the document as indented, key-sorted
//! JSON. [`convert`] wires the whole path together; the `fief-board`
//! binary exposes it on the command line.
//!
//! Field values stay strings until [`SpaceRecord::to_space`] parses them,
//! which is where wrong-fundamental-type failures (a non-integer ID, a
//! non-boolean flag) are caught and reported distinctly from domain-rule
//! violations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod error;
pub mod record;
pub mod table;

pub use board::{convert, Board};
pub use error::BoardError;
pub use record::SpaceRecord;
pub use table::parse_table;
