//! The board document and its JSON serialization.

use crate::error::BoardError;
use crate::record::SpaceRecord;
use crate::table::parse_table;
use fief_space::Space;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// A complete serialized board: one record per space, keyed `space_<id>`.
///
/// The backing map is a `BTreeMap`, so iteration and JSON output are
/// key-sorted — the document is byte-for-byte deterministic for a given
/// set of records.
///
/// # Examples
///
/// ```
/// use fief_board::{Board, SpaceRecord};
///
/// let board = Board::from_records(vec![SpaceRecord {
///     id: "1".to_string(),
///     terrain: "farm".to_string(),
///     is_edge: "True".to_string(),
///     lost_tribes: "False".to_string(),
///     symbols: None,
///     neighbors: vec![],
/// }]);
///
/// let mut buf = Vec::new();
/// board.to_json_writer(&mut buf).unwrap();
/// let text = String::from_utf8(buf).unwrap();
/// assert!(text.starts_with("{\n    \"space_1\": {"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    spaces: BTreeMap<String, SpaceRecord>,
}

impl Board {
    /// Collect records into a board document, keyed by [`SpaceRecord::key`].
    pub fn from_records(records: Vec<SpaceRecord>) -> Self {
        let spaces = records
            .into_iter()
            .map(|record| (record.key(), record))
            .collect();
        Self { spaces }
    }

    /// Read a board document from JSON.
    ///
    /// Generic over `R: Read` so tests can use byte slices and production
    /// code can use `BufReader<File>`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, BoardError> {
        let spaces = serde_json::from_reader(reader)?;
        Ok(Self { spaces })
    }

    /// Write the document as indented, key-sorted JSON.
    ///
    /// Four-space indentation, matching the long-standing on-disk board
    /// format.
    pub fn to_json_writer<W: Write>(&self, writer: W) -> Result<(), BoardError> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.spaces.serialize(&mut ser)?;
        Ok(())
    }

    /// Records in key order.
    pub fn records(&self) -> impl Iterator<Item = (&str, &SpaceRecord)> + '_ {
        self.spaces
            .iter()
            .map(|(key, record)| (key.as_str(), record))
    }

    /// Look up a record by its `space_<id>` key.
    pub fn get(&self, key: &str) -> Option<&SpaceRecord> {
        self.spaces.get(key)
    }

    /// Number of spaces in the document.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Whether the document holds no spaces.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Construct every space in the document, in key order.
    ///
    /// A failing record is reported with its `space_<id>` key so a caller
    /// rejecting a malformed board can say which space was at fault.
    pub fn spaces(&self) -> Result<Vec<Space>, BoardError> {
        self.spaces
            .iter()
            .map(|(key, record)| {
                record.to_space().map_err(|source| BoardError::Record {
                    key: key.clone(),
                    source: Box::new(source),
                })
            })
            .collect()
    }
}

/// Convert a tabular board description file into a JSON board document.
///
/// The input must end in `.csv` and the output in `.json`; both are
/// checked before any I/O happens. Reads once, writes once, and returns
/// the document that was written.
pub fn convert(input: &Path, output: &Path) -> Result<Board, BoardError> {
    require_extension(input, "csv")?;
    require_extension(output, "json")?;

    let text = fs::read_to_string(input)?;
    let board = Board::from_records(parse_table(&text)?);

    let file = fs::File::create(output)?;
    let mut writer = BufWriter::new(file);
    board.to_json_writer(&mut writer)?;
    writer.flush()?;
    Ok(board)
}

fn require_extension(path: &Path, expected: &'static str) -> Result<(), BoardError> {
    if path.extension().and_then(|e| e.to_str()) == Some(expected) {
        Ok(())
    } else {
        Err(BoardError::Extension {
            path: path.display().to_string(),
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fief_core::SpaceId;

    fn record(id: &str, terrain: &str, neighbors: &[&str]) -> SpaceRecord {
        SpaceRecord {
            id: id.to_string(),
            terrain: terrain.to_string(),
            is_edge: "False".to_string(),
            lost_tribes: "False".to_string(),
            symbols: None,
            neighbors: neighbors.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn keys_are_sorted_lexicographically() {
        let board = Board::from_records(vec![
            record("2", "farm", &[]),
            record("10", "water", &[]),
            record("1", "swamp", &[]),
        ]);
        let keys: Vec<&str> = board.records().map(|(key, _)| key).collect();
        assert_eq!(keys, ["space_1", "space_10", "space_2"]);
    }

    #[test]
    fn json_output_is_indented_and_key_sorted() {
        let board = Board::from_records(vec![record("1", "farm", &["2"])]);
        let mut buf = Vec::new();
        board.to_json_writer(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "{\n\
             \x20   \"space_1\": {\n\
             \x20       \"id\": \"1\",\n\
             \x20       \"terrain\": \"farm\",\n\
             \x20       \"is_edge\": \"False\",\n\
             \x20       \"lost_tribes\": \"False\",\n\
             \x20       \"neighbors\": [\n\
             \x20           \"2\"\n\
             \x20       ]\n\
             \x20   }\n\
             }"
        );
    }

    #[test]
    fn json_round_trips() {
        let board = Board::from_records(vec![
            record("1", "farm", &["2"]),
            record("2", "mountains", &["1"]),
        ]);
        let mut buf = Vec::new();
        board.to_json_writer(&mut buf).unwrap();
        let reread = Board::from_json_reader(buf.as_slice()).unwrap();
        assert_eq!(reread, board);
    }

    #[test]
    fn spaces_builds_every_record() {
        let board = Board::from_records(vec![
            record("1", "farm", &["2"]),
            record("2", "mountains", &["1"]),
        ]);
        let spaces = board.spaces().unwrap();
        assert_eq!(spaces.len(), 2);
        assert_eq!(spaces[0].id(), SpaceId(1));
        assert_eq!(spaces[1].token_count("mountains"), 1);
    }

    #[test]
    fn failing_record_is_named_by_key() {
        let board = Board::from_records(vec![
            record("1", "farm", &[]),
            record("2", "abbey", &[]),
        ]);
        let err = board.spaces().unwrap_err();
        assert!(matches!(err, BoardError::Record { ref key, .. } if key == "space_2"));
    }
}
