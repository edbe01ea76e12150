//! Property tests for encoding, hazard expansion and path following

mod common;

use common::layout;
use exitmatrix::follower::step_cap;
use exitmatrix::hazard::{danger_zone, expanded};
use exitmatrix::{decode, encode, follow_path, CellKind, Grid, PolicyTable, Position, RouteError, Symbol};
use ndarray::Array3;
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = CellKind> {
    prop_oneof![
        4 => Just(CellKind::Open),
        1 => Just(CellKind::Fire),
        1 => Just(CellKind::Obstacle),
        1 => Just(CellKind::Exit),
    ]
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(arb_kind(), rows * cols)
            .prop_map(move |cells| Grid::from_cells(rows, cols, cells).unwrap())
    })
}

/// Grid plus a policy of matching shape and an in-bounds start
fn arb_walk() -> impl Strategy<Value = (Grid, PolicyTable, Position)> {
    arb_grid().prop_flat_map(|grid| {
        let (rows, cols) = (grid.rows, grid.cols);
        (
            Just(grid),
            prop::collection::vec(-10.0f64..10.0, rows * cols * 4),
            0..rows,
            0..cols,
        )
            .prop_map(move |(grid, prefs, row, col)| {
                let values = Array3::from_shape_vec((rows, cols, 4), prefs).unwrap();
                (grid, PolicyTable::from_array(values).unwrap(), Position::new(row, col))
            })
    })
}

/// Rows of `.`, `F`, `0` with exactly one `U` and one `S`
fn arb_layout() -> impl Strategy<Value = Vec<String>> {
    (1usize..7, 2usize..7).prop_flat_map(|(rows, cols)| {
        let n = rows * cols;
        (
            prop::collection::vec(prop::sample::select(vec!['.', 'F', '0']), n),
            0..n,
            1..n,
        )
            .prop_map(move |(mut cells, u, offset)| {
                let s = (u + offset) % n;
                cells[u] = 'U';
                cells[s] = 'S';
                cells.chunks(cols).map(|row| row.iter().collect::<String>()).collect::<Vec<_>>()
            })
    })
}

proptest! {
    #[test]
    fn expansion_is_idempotent(grid in arb_grid()) {
        let once = expanded(&grid);
        prop_assert_eq!(expanded(&once), once);
    }

    #[test]
    fn expansion_marks_exactly_fire_adjacent_open_cells(grid in arb_grid()) {
        let after = expanded(&grid);
        let zone = danger_zone(&grid);

        for id in 0..grid.rows * grid.cols {
            let p = grid.get_coords(id);
            let before = grid.get(p);
            let near_fire = grid.neighbors(p).any(|n| grid.get(n) == CellKind::Fire);

            if before.is_terminal() {
                prop_assert_eq!(after.get(p), before);
            } else if near_fire {
                prop_assert_eq!(after.value(p), -5);
                prop_assert!(zone.contains(&p));
            } else {
                prop_assert_eq!(after.get(p), before);
            }
        }
    }

    #[test]
    fn decode_restores_markers_and_plain_cells(rows in arb_layout()) {
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let input = layout(&refs);
        let encoded = encode(&input).unwrap();
        let symbols = decode(&encoded.grid);

        prop_assert_eq!(input[encoded.occupant.row][encoded.occupant.col].as_str(), "U");
        prop_assert_eq!(input[encoded.exit.row][encoded.exit.col].as_str(), "S");
        for (r, row) in input.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let expected = match cell.as_str() {
                    "U" => Symbol::Open,
                    other => Symbol::parse(other).unwrap(),
                };
                prop_assert_eq!(symbols[r][c], expected);
            }
        }
    }

    #[test]
    fn follow_path_terminates_on_terminal_cell((grid, policy, start) in arb_walk()) {
        match follow_path(&grid, start, &policy) {
            Ok(path) if grid.is_terminal(start) => prop_assert!(path.is_empty()),
            Ok(path) => {
                prop_assert_eq!(path[0], start);
                let last = *path.last().unwrap();
                prop_assert!([100, -10, -100].contains(&grid.value(last)));
                prop_assert!(path[..path.len() - 1].iter().all(|&p| !grid.is_terminal(p)));
                prop_assert!(path.len() - 1 <= step_cap(&grid));
            }
            Err(RouteError::NoPathFound { start: s, steps, .. }) => {
                prop_assert_eq!(s, start);
                prop_assert_eq!(steps, step_cap(&grid));
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }
}
