//! Tabular (CSV-compatible) board description parsing.
//!
//! The board format needs no quoting — every cell is a bare name, number,
//! or boolean — so rows are split on commas directly, in the same spirit
//! as the replay codecs this crate's I/O is modelled on.

use crate::error::BoardError;
use crate::record::SpaceRecord;
use std::collections::HashSet;

/// Parse a tabular board description into one record per space.
///
/// The header row must carry `space_id`, `terrain`, `lost_tribes`, and
/// `is_edge`; any number of `symbol_*` and `neighbor_*` columns are
/// recognized by prefix. Blank lines are skipped, cells are trimmed (so
/// `\r\n` input works), and a short row reads its missing trailing cells
/// as empty. Empty neighbour cells — and the `0` filler some board files
/// use for them — contribute no neighbour.
///
/// Cell values are not typed here; they stay strings for
/// [`SpaceRecord::to_space`] to parse.
///
/// # Examples
///
/// ```
/// let table = "\
/// space_id,terrain,lost_tribes,is_edge,symbol_1,neighbor_1,neighbor_2
/// 1,farm,False,True,,2,
/// 2,mountains,False,False,mine,1,0
/// ";
/// let records = fief_board::parse_table(table).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].neighbors, vec!["2".to_string()]);
/// assert_eq!(records[1].symbols, Some(vec!["mine".to_string()]));
/// ```
pub fn parse_table(text: &str) -> Result<Vec<SpaceRecord>, BoardError> {
    let mut lines = text.lines().enumerate();
    let header = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => break line,
            None => return Err(BoardError::EmptyTable),
        }
    };

    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let col = |name: &'static str| -> Result<usize, BoardError> {
        columns
            .iter()
            .position(|c| *c == name)
            .ok_or(BoardError::MissingColumn { column: name })
    };
    let id_col = col("space_id")?;
    let terrain_col = col("terrain")?;
    let tribes_col = col("lost_tribes")?;
    let edge_col = col("is_edge")?;

    let symbol_cols: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.starts_with("symbol"))
        .map(|(i, _)| i)
        .collect();
    let neighbour_cols: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.starts_with("neighbor"))
        .map(|(i, _)| i)
        .collect();

    let mut seen_ids = HashSet::new();
    let mut records = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        if cells.len() > columns.len() {
            return Err(BoardError::RowWidth {
                line: index + 1,
                cells: cells.len(),
                columns: columns.len(),
            });
        }
        let cell = |i: usize| cells.get(i).copied().unwrap_or("");

        let id = cell(id_col);
        if !seen_ids.insert(id.to_string()) {
            return Err(BoardError::DuplicateSpaceId { id: id.to_string() });
        }

        let symbols: Vec<String> = symbol_cols
            .iter()
            .map(|&i| cell(i))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let neighbors: Vec<String> = neighbour_cols
            .iter()
            .map(|&i| cell(i))
            .filter(|s| !s.is_empty() && *s != "0")
            .map(str::to_string)
            .collect();

        records.push(SpaceRecord {
            id: id.to_string(),
            terrain: cell(terrain_col).to_string(),
            is_edge: cell(edge_col).to_string(),
            lost_tribes: cell(tribes_col).to_string(),
            symbols: (!symbols.is_empty()).then_some(symbols),
            neighbors,
        });
    }
    Ok(records)
}
