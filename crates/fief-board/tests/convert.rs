//! File-to-file conversion: write a CSV board description, convert it,
//! and read the emitted JSON document back.

use fief_board::{convert, Board, BoardError};
use fief_core::{Owner, SpaceId, Symbol, Terrain};
use std::fs;

const BOARD_CSV: &str = "\
space_id,terrain,lost_tribes,is_edge,symbol_1,neighbor_1,neighbor_2,neighbor_3
1,farm,False,True,,2,4,
2,swamp,True,True,cavern,1,3,
3,mountains,False,True,mine,2,4,
4,water,False,False,,1,2,3
";

#[test]
fn csv_converts_to_key_sorted_json() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("board.csv");
    let out_path = dir.path().join("board.json");
    fs::write(&in_path, BOARD_CSV).unwrap();

    let board = convert(&in_path, &out_path).unwrap();
    assert_eq!(board.len(), 4);

    // The file on disk parses back into the same document.
    let file = fs::File::open(&out_path).unwrap();
    let reread = Board::from_json_reader(file).unwrap();
    assert_eq!(reread, board);

    // Key-sorted, 4-space-indented text.
    let text = fs::read_to_string(&out_path).unwrap();
    assert!(text.starts_with("{\n    \"space_1\": {"));
    let p1 = text.find("\"space_1\"").unwrap();
    let p3 = text.find("\"space_3\"").unwrap();
    let p4 = text.find("\"space_4\"").unwrap();
    assert!(p1 < p3 && p3 < p4);

    // Symbols are omitted for plain spaces, present where the table set them.
    let farm = board.get("space_1").unwrap();
    assert_eq!(farm.symbols, None);
    let peak = board.get("space_3").unwrap();
    assert_eq!(peak.symbols, Some(vec!["mine".to_string()]));
}

#[test]
fn converted_records_construct_working_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("board.csv");
    let out_path = dir.path().join("board.json");
    fs::write(&in_path, BOARD_CSV).unwrap();

    let board = convert(&in_path, &out_path).unwrap();
    let spaces = board.spaces().unwrap();
    assert_eq!(spaces.len(), 4);

    let swamp = &spaces[1];
    assert_eq!(swamp.id(), SpaceId(2));
    assert_eq!(swamp.terrain(), Terrain::Swamp);
    assert_eq!(swamp.owner(), Some(&Owner::LostTribes));
    assert_eq!(swamp.token_count("lost_tribes"), 2);
    assert_eq!(swamp.symbol(), Some(Symbol::Cavern));
    assert_eq!(swamp.neighbours(), Some(&[SpaceId(1), SpaceId(3)][..]));

    let peak = &spaces[2];
    assert_eq!(peak.token_count("mountains"), 1);
    assert!(peak.is_edge());
}

#[test]
fn wrong_input_extension_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("board.txt");
    let out_path = dir.path().join("board.json");
    fs::write(&in_path, BOARD_CSV).unwrap();

    let err = convert(&in_path, &out_path).unwrap_err();
    assert!(matches!(err, BoardError::Extension { expected: "csv", .. }));
    assert!(!out_path.exists());
}

#[test]
fn wrong_output_extension_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("board.csv");
    fs::write(&in_path, BOARD_CSV).unwrap();

    let err = convert(&in_path, &dir.path().join("board.yaml")).unwrap_err();
    assert!(matches!(err, BoardError::Extension { expected: "json", .. }));
}

#[test]
fn malformed_table_surfaces_before_any_write() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("board.csv");
    let out_path = dir.path().join("board.json");
    fs::write(&in_path, "space_id,terrain\n1,farm\n").unwrap();

    let err = convert(&in_path, &out_path).unwrap_err();
    assert!(matches!(err, BoardError::MissingColumn { .. }));
    assert!(!out_path.exists());
}
