//! Error types for board loading and conversion.

use fief_core::ParseError;
use fief_space::SpaceError;
use std::fmt;
use std::io;

/// Errors from reading, converting, or writing a board definition.
///
/// Two classes share this enum. [`NotAnInteger`](BoardError::NotAnInteger)
/// and [`NotABoolean`](BoardError::NotABoolean) report a value of the
/// wrong fundamental type inside a string field — the only place such
/// failures can still occur once the entity API is statically typed.
/// Everything else is a domain-rule violation: right type, illegal value
/// or combination.
#[derive(Debug)]
pub enum BoardError {
    /// An input or output path lacks the expected file extension.
    Extension {
        /// The offending path.
        path: String,
        /// The extension that was required.
        expected: &'static str,
    },
    /// The tabular input has no header row.
    EmptyTable,
    /// A required column is missing from the header row.
    MissingColumn {
        /// The missing column name.
        column: &'static str,
    },
    /// A data row has more cells than the header has columns.
    RowWidth {
        /// 1-based line number of the offending row.
        line: usize,
        /// Cells found in the row.
        cells: usize,
        /// Columns declared by the header.
        columns: usize,
    },
    /// Two rows share a `space_id`; ids are unique per board.
    DuplicateSpaceId {
        /// The repeated id, as written.
        id: String,
    },
    /// A field that must hold an integer holds something else.
    NotAnInteger {
        /// Which field.
        field: String,
        /// The offending value.
        value: String,
    },
    /// A field that must hold a boolean holds something else.
    NotABoolean {
        /// Which field.
        field: String,
        /// The offending value.
        value: String,
    },
    /// An integer field is outside the representable id range.
    OutOfRange {
        /// Which field.
        field: String,
        /// The parsed value.
        value: i64,
    },
    /// A record carries more than one map symbol; a space holds at most one.
    MultipleSymbols {
        /// How many symbols the record carries.
        count: usize,
    },
    /// A terrain or symbol name is not in its fixed domain.
    Vocabulary(ParseError),
    /// Space construction or mutation rejected the record's values.
    Space(SpaceError),
    /// A record failed to convert; `key` names it in the board document.
    Record {
        /// The `space_<id>` key of the failing record.
        key: String,
        /// The underlying failure.
        source: Box<BoardError>,
    },
    /// An I/O error while reading or writing board files.
    Io(io::Error),
    /// The board document could not be (de)serialized.
    Json(serde_json::Error),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extension { path, expected } => {
                write!(f, "'{path}' must have a .{expected} extension")
            }
            Self::EmptyTable => write!(f, "board table has no header row"),
            Self::MissingColumn { column } => {
                write!(f, "required column '{column}' missing from header")
            }
            Self::RowWidth {
                line,
                cells,
                columns,
            } => write!(
                f,
                "line {line}: row has {cells} cells but the header has {columns} columns"
            ),
            Self::DuplicateSpaceId { id } => write!(f, "duplicate space_id '{id}'"),
            Self::NotAnInteger { field, value } => {
                write!(f, "{field}: '{value}' is not an integer")
            }
            Self::NotABoolean { field, value } => {
                write!(f, "{field}: '{value}' is not a boolean")
            }
            Self::OutOfRange { field, value } => {
                write!(f, "{field}: {value} is outside the id range")
            }
            Self::MultipleSymbols { count } => {
                write!(f, "record carries {count} symbols, a space holds at most one")
            }
            Self::Vocabulary(e) => write!(f, "{e}"),
            Self::Space(e) => write!(f, "{e}"),
            Self::Record { key, source } => write!(f, "{key}: {source}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Vocabulary(e) => Some(e),
            Self::Space(e) => Some(e),
            Self::Record { source, .. } => Some(source.as_ref()),
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for BoardError {
    fn from(e: ParseError) -> Self {
        Self::Vocabulary(e)
    }
}

impl From<SpaceError> for BoardError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<io::Error> for BoardError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
