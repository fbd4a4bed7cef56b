#![allow(clippy::float_cmp)]

use super::*;
use crate::piece::GridIndex;

fn sample_piece() -> Piece {
    Piece::new(Point::new(40.0, 30.0), Size::new(100.0, 75.0), Point::new(200.0, 150.0), GridIndex::new(2, 2))
}

// =============================================================
// Scale::between
// =============================================================

#[test]
fn between_computes_independent_axes() {
    let s = Scale::between(Size::new(400.0, 300.0), Size::new(800.0, 150.0)).unwrap();
    assert_eq!(s.x, 2.0);
    assert_eq!(s.y, 0.5);
}

#[test]
fn between_same_size_is_identity() {
    let s = Scale::between(Size::new(640.0, 480.0), Size::new(640.0, 480.0)).unwrap();
    assert_eq!(s, Scale { x: 1.0, y: 1.0 });
}

#[test]
fn between_from_degenerate_size_is_none() {
    assert!(Scale::between(Size::new(0.0, 300.0), Size::new(800.0, 600.0)).is_none());
    assert!(Scale::between(Size::new(400.0, 0.0), Size::new(800.0, 600.0)).is_none());
}

#[test]
fn between_to_degenerate_size_is_none() {
    assert!(Scale::between(Size::new(400.0, 300.0), Size::new(0.0, 0.0)).is_none());
    assert!(Scale::between(Size::new(400.0, 300.0), Size::new(800.0, 0.0)).is_none());
}

// =============================================================
// rescale
// =============================================================

#[test]
fn rescale_multiplies_x_fields_by_sx_and_y_fields_by_sy() {
    let p = rescale(sample_piece(), Scale { x: 2.0, y: 0.5 });
    assert_eq!(p.position, Point::new(80.0, 15.0));
    assert_eq!(p.size, Size::new(200.0, 37.5));
    assert_eq!(p.solved_position, Point::new(400.0, 75.0));
}

#[test]
fn rescale_keeps_grid_index_and_flags() {
    let mut original = sample_piece();
    original.solved = true;
    original.dimmed = true;
    let p = rescale(original, Scale { x: 1.5, y: 1.5 });
    assert_eq!(p.grid_index(), GridIndex::new(2, 2));
    assert!(p.solved);
    assert!(p.dimmed);
}

#[test]
fn rescale_round_trip_restores_geometry() {
    let p = rescale(rescale(sample_piece(), Scale { x: 2.0, y: 4.0 }), Scale { x: 0.5, y: 0.25 });
    assert_eq!(p, sample_piece());
}
