//! Piece tests - templates, translation and the pivot rotation formula

use std::collections::HashSet;

use tetris_engine::core::piece::{template_cells, template_pivot};
use tetris_engine::core::Piece;
use tetris_engine::types::{Coord, PieceKind};

fn coords(pairs: [(i32, i32); 4]) -> [Coord; 4] {
    pairs.map(Coord::from)
}

// ============== Template Tests ==============

#[test]
fn test_i_template_is_horizontal() {
    assert_eq!(
        template_cells(PieceKind::I),
        coords([(0, 0), (0, 1), (0, 2), (0, 3)])
    );
    assert_eq!(template_pivot(PieceKind::I), Some(Coord::new(0, 1)));
}

#[test]
fn test_o_template_has_no_pivot() {
    assert_eq!(
        template_cells(PieceKind::O),
        coords([(0, 0), (0, 1), (1, 0), (1, 1)])
    );
    assert_eq!(template_pivot(PieceKind::O), None);
}

#[test]
fn test_three_wide_templates_share_pivot() {
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(template_pivot(kind), Some(Coord::new(1, 1)), "{:?}", kind);
        let cells = template_cells(kind);
        assert!(cells.iter().all(|c| (0..=1).contains(&c.row)));
        assert!(cells.iter().all(|c| (0..=2).contains(&c.col)));
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_rotation_formula_applies_to_every_cell() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        piece.translate(7, 3);
        let Some(pivot) = piece.pivot() else {
            continue;
        };
        let proposal = piece.rotate().unwrap();
        for (old, new) in piece.cells().iter().zip(proposal.iter()) {
            assert_eq!(new.row, (old.col - pivot.col) + pivot.row);
            assert_eq!(new.col, -(old.row - pivot.row) + pivot.col);
        }
    }
}

#[test]
fn test_rotate_j_clockwise() {
    // J: corner top-left, rotates to corner top-right of a vertical bar
    let piece = Piece::new(PieceKind::J);
    assert_eq!(
        piece.rotate(),
        Some(coords([(0, 2), (0, 1), (1, 1), (2, 1)]))
    );
}

#[test]
fn test_rotate_s_clockwise() {
    let piece = Piece::new(PieceKind::S);
    assert_eq!(
        piece.rotate(),
        Some(coords([(1, 2), (2, 2), (0, 1), (1, 1)]))
    );
}

#[test]
fn test_rotation_keeps_four_distinct_cells() {
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind);
        if let Some(proposal) = piece.rotate() {
            let unique: HashSet<Coord> = proposal.iter().copied().collect();
            assert_eq!(unique.len(), 4, "{:?}", kind);
        }
    }
}

#[test]
fn test_rotate_is_a_proposal() {
    let mut piece = Piece::new(PieceKind::L);
    piece.translate(4, 4);
    let before = piece;
    let _ = piece.rotate();
    assert_eq!(piece, before);
}

// ============== Translation Tests ==============

#[test]
fn test_translate_preserves_order() {
    let mut piece = Piece::new(PieceKind::Z);
    let template = *piece.cells();
    piece.translate(-2, 4);
    for (moved, original) in piece.cells().iter().zip(template.iter()) {
        assert_eq!(*moved, original.offset(-2, 4));
    }
}

#[test]
fn test_translate_round_trip() {
    let mut piece = Piece::new(PieceKind::T);
    let start = piece;
    piece.translate(0, -1);
    piece.translate(0, 1);
    assert_eq!(piece, start);
}

#[test]
fn test_cells_at_matches_translate() {
    let mut piece = Piece::new(PieceKind::I);
    let projected = piece.cells_at(3, 2);
    piece.translate(3, 2);
    assert_eq!(piece.cells(), &projected);
}

#[test]
fn test_occupies() {
    let piece = Piece::new(PieceKind::O);
    assert!(piece.occupies(Coord::new(1, 1)));
    assert!(!piece.occupies(Coord::new(2, 1)));
}
