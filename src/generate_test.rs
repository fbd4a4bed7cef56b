#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn grid(across: u32, down: u32) -> GridSize {
    GridSize::new(across, down).unwrap()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x0005_EED5)
}

// =============================================================
// Cell geometry
// =============================================================

#[test]
fn cell_size_divides_surface() {
    let c = cell_size(Size::new(1200.0, 900.0), grid(12, 9));
    assert_eq!(c, Size::new(100.0, 100.0));
}

#[test]
fn scatter_band_insets_surface() {
    let (min, max) = scatter_band(1000.0, 100.0);
    assert_eq!(min, 100.0);
    assert_eq!(max, 800.0);
}

// =============================================================
// generate: coverage
// =============================================================

#[test]
fn generates_across_times_down_pieces() {
    let pieces = generate(Size::new(600.0, 400.0), grid(6, 4), StartLayout::Scattered, &mut rng());
    assert_eq!(pieces.len(), 24);
}

#[test]
fn every_grid_cell_appears_exactly_once() {
    let pieces = generate(Size::new(600.0, 400.0), grid(5, 3), StartLayout::Scattered, &mut rng());
    let cells: HashSet<GridIndex> = pieces.iter().map(Piece::grid_index).collect();
    assert_eq!(cells.len(), 15);
    for row in 0..3 {
        for col in 0..5 {
            assert!(cells.contains(&GridIndex::new(col, row)));
        }
    }
}

#[test]
fn pieces_are_row_major() {
    let pieces = generate(Size::new(300.0, 200.0), grid(3, 2), StartLayout::Scattered, &mut rng());
    assert_eq!(pieces[0].grid_index(), GridIndex::new(0, 0));
    assert_eq!(pieces[1].grid_index(), GridIndex::new(1, 0));
    assert_eq!(pieces[3].grid_index(), GridIndex::new(0, 1));
}

#[test]
fn generated_pieces_start_unsolved() {
    let pieces = generate(Size::new(300.0, 200.0), grid(3, 2), StartLayout::Scattered, &mut rng());
    assert!(pieces.iter().all(|p| !p.solved && !p.dimmed));
}

// =============================================================
// generate: solved positions
// =============================================================

#[test]
fn solved_position_is_col_times_cell_width() {
    let surface = Size::new(700.0, 450.0);
    let pieces = generate(surface, grid(7, 3), StartLayout::Scattered, &mut rng());
    let cell = cell_size(surface, grid(7, 3));
    for p in &pieces {
        let g = p.grid_index();
        assert_eq!(p.solved_position.x, f64::from(g.col) * cell.w);
        assert_eq!(p.solved_position.y, f64::from(g.row) * cell.h);
        assert_eq!(p.size, cell);
    }
}

#[test]
fn two_by_two_on_200_square() {
    let pieces = generate(Size::new(200.0, 200.0), grid(2, 2), StartLayout::Scattered, &mut rng());
    assert_eq!(pieces[0].solved_position, Point::new(0.0, 0.0));
    assert_eq!(pieces[3].solved_position, Point::new(100.0, 100.0));
    assert_eq!(pieces[3].size, Size::new(100.0, 100.0));
}

// =============================================================
// generate: start positions
// =============================================================

#[test]
fn scattered_starts_stay_inside_band() {
    let surface = Size::new(1200.0, 900.0);
    for seed in 0..20 {
        let mut r = StdRng::seed_from_u64(seed);
        let pieces = generate(surface, grid(12, 9), StartLayout::Scattered, &mut r);
        for p in &pieces {
            assert!(p.position.x >= 0.1 * surface.w);
            assert!(p.position.x <= 0.9 * surface.w - p.size.w);
            assert!(p.position.y >= 0.1 * surface.h);
            assert!(p.position.y <= 0.9 * surface.h - p.size.h);
        }
    }
}

#[test]
fn scattered_starts_vary() {
    let pieces = generate(Size::new(1200.0, 900.0), grid(4, 4), StartLayout::Scattered, &mut rng());
    let first = pieces[0].position;
    assert!(pieces.iter().any(|p| p.position != first));
}

#[test]
fn same_seed_gives_same_layout() {
    let a = generate(Size::new(800.0, 600.0), grid(4, 3), StartLayout::Scattered, &mut rng());
    let b = generate(Size::new(800.0, 600.0), grid(4, 3), StartLayout::Scattered, &mut rng());
    assert_eq!(a, b);
}

#[test]
fn solved_layout_starts_on_target() {
    let pieces = generate(Size::new(800.0, 600.0), grid(4, 3), StartLayout::Solved, &mut rng());
    assert!(pieces.iter().all(|p| p.position == p.solved_position && !p.solved));
}

#[test]
fn single_column_grid_does_not_panic() {
    let pieces = generate(Size::new(300.0, 300.0), grid(1, 1), StartLayout::Scattered, &mut rng());
    assert_eq!(pieces.len(), 1);
    assert!(pieces[0].position.x.is_finite());
}
