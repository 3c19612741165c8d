//! The string-typed boundary record a space is constructed from.

use crate::error::BoardError;
use fief_core::{SpaceId, Symbol, Terrain};
use fief_space::Space;
use serde::{Deserialize, Serialize};

/// One space as it appears in a serialized board document.
///
/// Every scalar field is a string — the wire format keeps the tabular
/// input's untyped cells, and typing happens in
/// [`to_space`](SpaceRecord::to_space). `symbols` is omitted from JSON
/// when the space has none; `neighbors` is always present, possibly
/// empty. Field names are the wire spelling.
///
/// # Examples
///
/// ```
/// use fief_board::SpaceRecord;
///
/// let record = SpaceRecord {
///     id: "1".to_string(),
///     terrain: "swamp".to_string(),
///     is_edge: "True".to_string(),
///     lost_tribes: "True".to_string(),
///     symbols: None,
///     neighbors: vec!["2".to_string(), "5".to_string()],
/// };
/// let space = record.to_space().unwrap();
/// assert_eq!(space.token_count("lost_tribes"), 2);
/// assert_eq!(space.neighbours().unwrap().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceRecord {
    /// Space ID, integer-as-string.
    pub id: String,
    /// Terrain name.
    pub terrain: String,
    /// Edge flag, boolean-as-string.
    pub is_edge: String,
    /// Native-tribe flag, boolean-as-string.
    pub lost_tribes: String,
    /// Map symbols; absent when the space has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Vec<String>>,
    /// Neighbour IDs, integers-as-strings.
    #[serde(default)]
    pub neighbors: Vec<String>,
}

impl SpaceRecord {
    /// The key this record is stored under in a board document.
    pub fn key(&self) -> String {
        format!("space_{}", self.id)
    }

    /// Parse and validate every field, then construct the space.
    ///
    /// The space is built adjacency-capable and the record's neighbours
    /// are appended in order. Failures distinguish wrong fundamental
    /// types (`NotAnInteger`, `NotABoolean`) from domain-rule violations
    /// (unknown vocabulary, non-positive id, tribes on mountains, ...).
    pub fn to_space(&self) -> Result<Space, BoardError> {
        let id = SpaceId(parse_integer("id", &self.id)?);
        let terrain: Terrain = self.terrain.trim().parse()?;
        let is_edge = parse_boolean("is_edge", &self.is_edge)?;
        let lost_tribes = parse_boolean("lost_tribes", &self.lost_tribes)?;
        let symbol = match self.symbols.as_deref() {
            None | Some([]) => None,
            Some([only]) => Some(only.trim().parse::<Symbol>()?),
            Some(many) => return Err(BoardError::MultipleSymbols { count: many.len() }),
        };

        let mut space = Space::with_adjacency(id, terrain, is_edge, lost_tribes, symbol)?;
        for neighbour in &self.neighbors {
            space.add_neighbour(SpaceId(parse_integer("neighbor", neighbour)?))?;
        }
        Ok(space)
    }
}

/// Parse an integer-as-string field into the id range.
fn parse_integer(field: &str, value: &str) -> Result<u32, BoardError> {
    let raw: i64 = value
        .trim()
        .parse()
        .map_err(|_| BoardError::NotAnInteger {
            field: field.to_string(),
            value: value.to_string(),
        })?;
    u32::try_from(raw).map_err(|_| BoardError::OutOfRange {
        field: field.to_string(),
        value: raw,
    })
}

/// Parse a boolean-as-string field; `True`/`False` in any case.
fn parse_boolean(field: &str, value: &str) -> Result<bool, BoardError> {
    let v = value.trim();
    if v.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if v.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(BoardError::NotABoolean {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fief_core::{Owner, ParseError};
    use fief_space::SpaceError;

    fn record(id: &str, terrain: &str) -> SpaceRecord {
        SpaceRecord {
            id: id.to_string(),
            terrain: terrain.to_string(),
            is_edge: "False".to_string(),
            lost_tribes: "False".to_string(),
            symbols: None,
            neighbors: Vec::new(),
        }
    }

    #[test]
    fn converts_full_record() {
        let mut r = record("3", "mountains");
        r.symbols = Some(vec!["mine".to_string()]);
        r.neighbors = vec!["2".to_string(), "4".to_string()];
        let space = r.to_space().unwrap();
        assert_eq!(space.id(), SpaceId(3));
        assert_eq!(space.symbol(), Some(Symbol::Mine));
        assert_eq!(space.token_count("mountains"), 1);
        assert_eq!(space.neighbours(), Some(&[SpaceId(2), SpaceId(4)][..]));
    }

    #[test]
    fn lost_tribes_record_seeds_occupation() {
        let mut r = record("1", "swamp");
        r.lost_tribes = "True".to_string();
        let space = r.to_space().unwrap();
        assert_eq!(space.owner(), Some(&Owner::LostTribes));
        assert_eq!(space.token_count("lost_tribes"), 2);
    }

    #[test]
    fn non_integer_id_is_a_type_failure() {
        for bad in ["abc", "3.5", ""] {
            let err = record(bad, "farm").to_space().unwrap_err();
            assert!(
                matches!(err, BoardError::NotAnInteger { ref field, .. } if field == "id"),
                "{bad}: {err:?}"
            );
        }
    }

    #[test]
    fn negative_id_is_out_of_range() {
        let err = record("-1", "farm").to_space().unwrap_err();
        assert!(matches!(
            err,
            BoardError::OutOfRange { value: -1, .. }
        ));
    }

    #[test]
    fn zero_id_is_rejected_by_the_space() {
        let err = record("0", "farm").to_space().unwrap_err();
        assert!(matches!(
            err,
            BoardError::Space(SpaceError::NonPositiveId { id: SpaceId(0) })
        ));
    }

    #[test]
    fn unknown_terrain_is_a_vocabulary_failure() {
        let err = record("1", "abbey").to_space().unwrap_err();
        assert!(matches!(
            err,
            BoardError::Vocabulary(ParseError::UnknownTerrain { .. })
        ));
    }

    #[test]
    fn non_boolean_flag_is_a_type_failure() {
        let mut r = record("1", "farm");
        r.is_edge = "1".to_string();
        let err = r.to_space().unwrap_err();
        assert!(matches!(err, BoardError::NotABoolean { ref field, .. } if field == "is_edge"));
    }

    #[test]
    fn tribes_on_mountains_record_fails() {
        let mut r = record("1", "mountains");
        r.lost_tribes = "True".to_string();
        let err = r.to_space().unwrap_err();
        assert!(matches!(
            err,
            BoardError::Space(SpaceError::TribesOnMountains)
        ));
    }

    #[test]
    fn negative_neighbour_is_out_of_range() {
        let mut r = record("1", "farm");
        r.neighbors = vec!["-1".to_string()];
        let err = r.to_space().unwrap_err();
        assert!(
            matches!(err, BoardError::OutOfRange { ref field, value: -1 } if field == "neighbor")
        );
    }

    #[test]
    fn fractional_neighbour_is_a_type_failure() {
        let mut r = record("1", "farm");
        r.neighbors = vec!["3.5".to_string()];
        let err = r.to_space().unwrap_err();
        assert!(matches!(err, BoardError::NotAnInteger { ref field, .. } if field == "neighbor"));
    }

    #[test]
    fn two_symbols_rejected() {
        let mut r = record("1", "farm");
        r.symbols = Some(vec!["mine".to_string(), "cavern".to_string()]);
        let err = r.to_space().unwrap_err();
        assert!(matches!(err, BoardError::MultipleSymbols { count: 2 }));
    }

    #[test]
    fn empty_symbol_list_means_no_symbol() {
        let mut r = record("1", "farm");
        r.symbols = Some(Vec::new());
        assert_eq!(r.to_space().unwrap().symbol(), None);
    }
}
