//! Property-based invariants for the grid and the view transform:
//!
//! 1. Neighbor counts stay in 0..=8.
//! 2. Neighbor counts move with a wrapping translation of the live set.
//! 3. Stepping commutes with a wrapping translation.
//! 4. Zoom never leaves [MIN_ZOOM, MAX_ZOOM].
//! 5. A cell's drawn centre maps back to the same cell under any pan/zoom.
//! 6. Toggling k distinct cells gives population k.

use std::collections::BTreeSet;

use life_canvas::application::{MAX_ZOOM, MIN_ZOOM};
use life_canvas::{Grid, ViewTransform};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn live_set_strategy() -> impl Strategy<Value = (usize, usize, BTreeSet<(usize, usize)>)> {
    (3usize..=16, 3usize..=16).prop_flat_map(|(cols, rows)| {
        let cells = prop::collection::btree_set((0..cols, 0..rows), 0..=(cols * rows / 4));
        (Just(cols), Just(rows), cells)
    })
}

fn build(cols: usize, rows: usize, live: &BTreeSet<(usize, usize)>) -> Grid {
    let mut grid = Grid::new(cols, rows);
    for &(c, r) in live {
        grid.toggle(grid.address(c as i64, r as i64).unwrap());
    }
    grid
}

fn shifted(
    cols: usize,
    rows: usize,
    live: &BTreeSet<(usize, usize)>,
    dc: usize,
    dr: usize,
) -> BTreeSet<(usize, usize)> {
    live.iter().map(|&(c, r)| ((c + dc) % cols, (r + dr) % rows)).collect()
}

proptest! {
    #[test]
    fn neighbor_count_in_range((cols, rows, live) in live_set_strategy()) {
        let grid = build(cols, rows, &live);
        for r in 0..rows {
            for c in 0..cols {
                prop_assert!(grid.count_neighbors(c, r) <= 8);
            }
        }
    }

    #[test]
    fn neighbor_count_translation_invariant(
        (cols, rows, live) in live_set_strategy(),
        dc in 0usize..16,
        dr in 0usize..16,
    ) {
        let grid = build(cols, rows, &live);
        let moved = build(cols, rows, &shifted(cols, rows, &live, dc, dr));
        for r in 0..rows {
            for c in 0..cols {
                prop_assert_eq!(
                    grid.count_neighbors(c, r),
                    moved.count_neighbors((c + dc) % cols, (r + dr) % rows)
                );
            }
        }
    }

    #[test]
    fn step_commutes_with_wrap_translation(
        (cols, rows, live) in live_set_strategy(),
        dc in 0usize..16,
        dr in 0usize..16,
    ) {
        let stepped_then_moved = {
            let next = build(cols, rows, &live).step();
            let set: BTreeSet<_> = next.live_cells().map(|a| (a.col, a.row)).collect();
            build(cols, rows, &shifted(cols, rows, &set, dc, dr))
        };
        let moved_then_stepped = build(cols, rows, &shifted(cols, rows, &live, dc, dr)).step();
        prop_assert_eq!(stepped_then_moved, moved_then_stepped);
    }

    #[test]
    fn zoom_stays_clamped(steps in prop::collection::vec(any::<bool>(), 0..200)) {
        let mut view = ViewTransform::new(10.0);
        for zoom_in in steps {
            if zoom_in { view.zoom_in() } else { view.zoom_out() }
            prop_assert!(view.zoom() >= MIN_ZOOM && view.zoom() <= MAX_ZOOM);
        }
    }

    #[test]
    fn cell_centre_round_trips(
        col in -50i64..300,
        row in -50i64..300,
        pan_x in -2000.0f32..2000.0,
        pan_y in -2000.0f32..2000.0,
        factor in 0.1f32..10.0,
        origin_x in 0.0f32..50.0,
        origin_y in 0.0f32..50.0,
    ) {
        let mut view = ViewTransform::new(10.0);
        view.pan(pan_x, pan_y);
        view.zoom_by(factor);
        let half = view.cell_size() * view.zoom() / 2.0;
        let (x, y) = view.grid_to_screen(col, row, origin_x, origin_y);
        prop_assert_eq!(view.screen_to_grid(x + half, y + half, origin_x, origin_y), (col, row));
    }

    #[test]
    fn population_counts_distinct_toggles((cols, rows, live) in live_set_strategy()) {
        prop_assert_eq!(build(cols, rows, &live).population(), live.len());
    }
}
