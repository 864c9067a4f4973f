//! End-to-end requests through `AnalysisHost` with editor positions.

mod common;

use common::{fixture, FILE, PATH, SOURCE};
use strata::base::{FileId, LineCol, Loc};
use strata::ide::{AnalysisHost, NavigationTarget, ReferenceOptions};

fn host() -> AnalysisHost {
    let f = fixture();
    let mut host = AnalysisHost::new(f.table);
    host.set_file(FILE, PATH, SOURCE, f.tree);
    host
}

fn target(start: (u32, u32), end: (u32, u32)) -> NavigationTarget {
    NavigationTarget {
        file: FILE,
        path: PATH.to_string(),
        start: LineCol::new(start.0, start.1),
        end: LineCol::new(end.0, end.1),
    }
}

#[test]
fn test_goto_definition_through_alias() {
    let analysis = host().analysis();
    // `Geo::Origin`, cursor inside `Origin`.
    let targets = analysis.goto_definition(FILE, LineCol::new(12, 7)).unwrap();
    assert_eq!(targets, vec![target((1, 8), (1, 13))]);
}

#[test]
fn test_goto_definition_on_argument() {
    let analysis = host().analysis();
    let targets = analysis.goto_definition(FILE, LineCol::new(3, 19)).unwrap();
    assert_eq!(targets, vec![target((3, 19), (3, 20))]);
}

#[test]
fn test_position_outside_file_finds_nothing() {
    let analysis = host().analysis();
    assert!(analysis.goto_definition(FILE, LineCol::new(50, 0)).unwrap().is_empty());
    assert!(analysis.goto_definition(FILE, LineCol::new(0, 80)).unwrap().is_empty());
    assert!(analysis.hover(FILE, LineCol::new(50, 0)).unwrap().is_none());
}

#[test]
fn test_huge_column_finds_nothing() {
    let analysis = host().analysis();
    let pos = LineCol::new(3, u32::MAX);
    assert!(analysis.goto_definition(FILE, pos).unwrap().is_empty());
    assert!(analysis.hover(FILE, pos).unwrap().is_none());
    assert!(analysis.references(FILE, pos, ReferenceOptions::default()).unwrap().is_empty());
}

#[test]
fn test_column_past_newline_does_not_reach_next_line() {
    let analysis = host().analysis();
    // Line 11 is `end`; one past its newline would be `Geo` on line 12.
    assert!(analysis.goto_definition(FILE, LineCol::new(11, 4)).unwrap().is_empty());
}

#[test]
fn test_unknown_file_finds_nothing() {
    let analysis = host().analysis();
    assert!(analysis.goto_definition(FileId(9), LineCol::new(0, 0)).unwrap().is_empty());
}

#[test]
fn test_hover_at_position() {
    let analysis = host().analysis();
    let result = analysis.hover(FILE, LineCol::new(6, 4)).unwrap().unwrap();
    assert_eq!(result.contents, "def count: Integer");
}

#[test]
fn test_references_to_class_variable() {
    let analysis = host().analysis();
    let pos = LineCol::new(7, 8);

    let all = analysis.references(FILE, pos, ReferenceOptions::default()).unwrap();
    assert_eq!(all, vec![target((2, 4), (2, 11)), target((7, 6), (7, 13))]);

    let uses = analysis
        .references(FILE, pos, ReferenceOptions { include_declaration: false })
        .unwrap();
    assert_eq!(uses, vec![target((7, 6), (7, 13))]);
}

#[test]
fn test_references_to_argument_stay_local() {
    let analysis = host().analysis();
    let pos = LineCol::new(3, 19);

    let all = analysis.references(FILE, pos, ReferenceOptions::default()).unwrap();
    assert_eq!(all, vec![target((3, 19), (3, 20))]);

    let uses = analysis
        .references(FILE, pos, ReferenceOptions { include_declaration: false })
        .unwrap();
    assert!(uses.is_empty());
}

#[test]
fn test_unregistered_files_are_not_rendered() {
    let analysis = host().analysis();
    assert!(analysis.navigation_target(Loc::from_offsets(FileId(3), 0, 1)).is_none());
    assert!(analysis.navigation_target(Loc::detached()).is_none());
    assert_eq!(
        analysis.navigation_target(Loc::from_offsets(FILE, 0, 6)),
        Some(target((0, 0), (0, 6)))
    );
}

#[test]
fn test_snapshots_survive_edits() {
    let mut host = host();
    let before = host.analysis();

    host.remove_file(FILE);
    let after = host.analysis();

    assert_eq!(before.goto_definition(FILE, LineCol::new(12, 7)).unwrap().len(), 1);
    assert!(after.goto_definition(FILE, LineCol::new(12, 7)).unwrap().is_empty());
    assert!(after.source_root().is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn test_navigation_target_serializes_without_file_id() {
    let json = serde_json::to_value(target((1, 8), (1, 13))).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "path": PATH,
            "start": { "line": 1, "col": 8 },
            "end": { "line": 1, "col": 13 },
        })
    );
}
