mod common;

use common::{layout, policy_from_fn, pos, RIGHT, UP};
use exitmatrix::layout::to_compact;
use exitmatrix::pipeline::RouteRequest;
use exitmatrix::{plan_route, PolicyTable, RouteContext, RouteError, RouteResponse};

fn right_then_up(rows: usize, cols: usize) -> PolicyTable {
    policy_from_fn(rows, cols, move |_, col| if col + 1 < cols { RIGHT } else { UP })
}

#[test]
fn plans_and_renders_route_to_exit() {
    let outcome = plan_route(&layout(&["..S", "...", "U.."]), &right_then_up(3, 3)).unwrap();

    assert!(outcome.reaches_exit());
    assert_eq!(outcome.danger_cells, 0);
    assert_eq!(to_compact(&outcome.layout()), "..S|..P|UPP");
}

#[test]
fn hazards_are_rendered_around_fire() {
    let outcome = plan_route(&layout(&["...S", ".F..", "U..."]), &right_then_up(3, 4)).unwrap();

    // route runs along the bottom row then up the last column
    assert_eq!(to_compact(&outcome.layout()), ".Z.S|ZFZP|UPPP");
    assert_eq!(outcome.danger_cells, 4);
    assert_eq!(outcome.path.first(), Some(&pos(2, 0)));
}

#[test]
fn occupant_marker_wins_over_hazard_and_path() {
    let outcome = plan_route(&layout(&["UF", ".S"]), &PolicyTable::uniform(2, 2, RIGHT)).unwrap();

    // walks straight into the fire
    assert_eq!(outcome.path, vec![pos(0, 0), pos(0, 1)]);
    assert!(!outcome.reaches_exit());
    assert_eq!(to_compact(&outcome.layout()), "UP|.S");
}

#[test]
fn failure_returns_no_grid() {
    let result = plan_route(&layout(&["U.", ".S"]), &PolicyTable::uniform(2, 2, UP));
    assert!(matches!(result, Err(RouteError::NoPathFound { .. })));

    let result = plan_route(&layout(&["U.", ".S"]), &PolicyTable::uniform(3, 3, UP));
    assert!(matches!(result, Err(RouteError::PolicyDimensionMismatch { .. })));
}

#[test]
fn context_holds_danger_zone() {
    let ctx = RouteContext::from_layout(&layout(&["U.F", "..S"])).unwrap();

    assert_eq!(ctx.occupant, pos(0, 0));
    assert_eq!(ctx.exit, pos(1, 2));
    assert_eq!(ctx.danger.iter().copied().collect::<Vec<_>>(), vec![pos(0, 1)]);
}

#[test]
fn response_body_matches_service_shape() {
    let request: RouteRequest =
        serde_json::from_str(r#"{"layout": [[".", ".", "S"], [".", ".", "."], ["U", ".", "."]]}"#).unwrap();
    let outcome = plan_route(&request.layout, &right_then_up(3, 3)).unwrap();
    let response = RouteResponse::from(&outcome);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["status"], "successful");
    assert_eq!(json["updated_space"][2][0], "U");
    assert_eq!(json["updated_space"][1][2], "P");
}

#[test]
fn shared_policy_serves_concurrent_requests() {
    let policy = &right_then_up(3, 3);
    let layouts = [
        layout(&["..S", "...", "U.."]),
        layout(&["..S", ".U.", "..."]),
        layout(&["U.S", "...", "..."]),
    ];

    std::thread::scope(|s| {
        let handles: Vec<_> = layouts
            .iter()
            .map(|l| s.spawn(move || plan_route(l, policy).map(|o| o.reaches_exit())))
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().unwrap());
        }
    });
}
