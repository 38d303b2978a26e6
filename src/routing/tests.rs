// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use rstest::{fixture, rstest};

use super::{
    find_routes, find_routes_with_options, RoutedLayout, RoutingError, SearchOptions, TerminalEnd,
};
use crate::model::{Cell, CellKind, Face, Grid, GridPoint, Route};

fn gp(x: i32, y: i32) -> GridPoint {
    GridPoint::new(x, y)
}

fn corner(rotation: u8) -> Cell {
    Cell::new(CellKind::CornerWire, rotation)
}

fn straight(rotation: u8) -> Cell {
    Cell::new(CellKind::StraightWire, rotation)
}

/// 3x3 grid with two components in opposite corners.
#[fixture]
fn two_components() -> Grid {
    let mut grid = Grid::new(3, 3);
    grid.set(gp(0, 0), Cell::blocking()).unwrap();
    grid.set(gp(2, 2), Cell::blocking()).unwrap();
    grid
}

fn route_between_components(grid: Grid) -> Vec<(Route, Grid)> {
    find_routes(gp(0, 0), Face::S, gp(2, 2), Face::N, grid)
        .expect("terminals face into the grid")
        .map(RoutedLayout::into_parts)
        .collect()
}

fn assert_self_avoiding(route: &Route) {
    let unique = route.points().iter().collect::<BTreeSet<_>>();
    assert_eq!(unique.len(), route.len(), "route revisits a cell: {:?}", route.points());
}

#[rstest]
fn shortest_route_between_components_comes_first(two_components: Grid) {
    let results = route_between_components(two_components);
    let (route, grid) = results.first().expect("at least one route");

    assert_eq!(route.points(), &[gp(0, 1), gp(1, 1), gp(2, 1)]);
    assert_eq!(route.start_face(), Face::N);
    assert_eq!(route.end_face(), Some(Face::N));

    assert_eq!(grid.get(gp(0, 1)), Ok(corner(1)));
    assert_eq!(grid.get(gp(1, 1)), Ok(straight(2)));
    assert_eq!(grid.get(gp(2, 1)), Ok(corner(3)));
    assert_eq!(grid.get(gp(0, 0)), Ok(Cell::blocking()));
    assert_eq!(grid.get(gp(2, 2)), Ok(Cell::blocking()));
    assert_eq!(grid.occupied_len(), 5);
}

#[rstest]
fn results_are_distinct_self_avoiding_and_shortest_first(two_components: Grid) {
    let results = route_between_components(two_components);
    assert!(results.len() > 1);

    let mut seen = BTreeSet::new();
    let mut previous_len = 0;
    for (route, grid) in &results {
        assert_self_avoiding(route);
        assert!(route.len() >= previous_len);
        previous_len = route.len();
        assert!(seen.insert(route.points().to_vec()), "duplicate route {:?}", route.points());

        assert_eq!(route.first(), gp(0, 1));
        assert_eq!(route.last(), gp(2, 1));
        for point in route.points() {
            assert!(grid.get(*point).expect("in bounds").kind().is_wire());
        }
        assert_eq!(grid.occupied_len(), route.len() + 2);
    }
}

#[rstest]
fn consecutive_cells_connect_to_each_other(two_components: Grid) {
    for (route, grid) in route_between_components(two_components) {
        let points = route.points();
        for (index, point) in points.iter().enumerate() {
            let cell = grid.get(*point).expect("in bounds");
            assert!(cell.connects(route.entry_face_at(index)), "{point} entry");
        }
        let last = grid.get(route.last()).expect("in bounds");
        assert!(last.connects(Face::S));
    }
}

#[rstest]
fn crossing_an_existing_vertical_wire_bridges_it(mut two_components: Grid) {
    two_components.set(gp(1, 1), straight(1)).unwrap();

    let results = route_between_components(two_components);
    let (route, grid) = results.first().expect("bridged route");
    assert_eq!(route.points(), &[gp(0, 1), gp(1, 1), gp(2, 1)]);
    assert_eq!(grid.get(gp(1, 1)), Ok(Cell::bridge()));

    let mut through_center = 0;
    for (route, grid) in &results {
        let Some(index) = route.points().iter().position(|point| *point == gp(1, 1)) else {
            assert_eq!(grid.get(gp(1, 1)), Ok(straight(1)));
            continue;
        };
        through_center += 1;
        assert_eq!(grid.get(gp(1, 1)), Ok(Cell::bridge()));
        let entry = route.entry_face_at(index);
        assert!(matches!(entry, Face::E | Face::W), "crossed vertically: {:?}", route.points());
    }
    assert!(through_center > 0);
}

#[rstest]
fn bridged_cell_cannot_be_crossed_again(mut two_components: Grid) {
    two_components.set(gp(1, 1), straight(1)).unwrap();
    let results = route_between_components(two_components);
    let (_, bridged) = results.first().expect("bridged route");

    let mut vertical = Route::new(gp(1, 0), Face::N);
    assert!(!vertical.extend(Face::S, bridged));
    assert_eq!(vertical.len(), 1);
}

#[test]
fn single_free_cell_between_perpendicular_terminals() {
    let grid = Grid::new(1, 1);
    let results = find_routes(gp(-1, 0), Face::E, gp(0, -1), Face::S, grid)
        .expect("terminals face into the grid")
        .collect::<Vec<_>>();

    assert_eq!(results.len(), 1);
    let (route, grid) = results.into_iter().next().unwrap().into_parts();
    assert_eq!(route.points(), &[gp(0, 0)]);
    assert_eq!(route.end_face(), Some(Face::S));
    assert_eq!(grid.get(gp(0, 0)), Ok(corner(0)));
}

#[test]
fn open_two_by_two_grid_has_exactly_two_routes() {
    let grid = Grid::new(2, 2);
    let routes = find_routes(gp(-1, 0), Face::E, gp(2, 1), Face::W, grid)
        .expect("terminals face into the grid")
        .map(RoutedLayout::into_parts)
        .collect::<Vec<_>>();

    let points = routes.iter().map(|(route, _)| route.points().to_vec()).collect::<Vec<_>>();
    assert_eq!(
        points,
        vec![vec![gp(0, 0), gp(1, 0), gp(1, 1)], vec![gp(0, 0), gp(0, 1), gp(1, 1)]]
    );

    let (_, east_first) = &routes[0];
    assert_eq!(east_first.get(gp(0, 0)), Ok(straight(2)));
    assert_eq!(east_first.get(gp(1, 0)), Ok(corner(3)));
    assert_eq!(east_first.get(gp(1, 1)), Ok(corner(1)));

    let (_, south_first) = &routes[1];
    assert_eq!(south_first.get(gp(0, 0)), Ok(corner(3)));
    assert_eq!(south_first.get(gp(0, 1)), Ok(corner(1)));
    assert_eq!(south_first.get(gp(1, 1)), Ok(straight(2)));
}

#[test]
fn walled_off_terminals_yield_nothing() {
    let mut grid = Grid::new(3, 1);
    grid.set(gp(1, 0), Cell::blocking()).unwrap();

    let mut search = find_routes(gp(-1, 0), Face::E, gp(3, 0), Face::W, grid).expect("search");
    assert!(search.next().is_none());
    assert_eq!(search.found(), 0);
    assert_eq!(search.expanded(), 1);
}

#[test]
fn target_entered_from_the_end_terminal_is_not_completed() {
    let grid = Grid::new(1, 3);
    let search = find_routes(gp(1, 2), Face::W, gp(0, 2), Face::N, grid).expect("search");
    assert_eq!(search.count(), 0);
}

#[rstest]
#[case::start_faces_away(gp(-1, 0), Face::N, gp(2, 2), Face::N, TerminalEnd::Start)]
#[case::end_faces_away(gp(0, 0), Face::S, gp(2, 2), Face::S, TerminalEnd::End)]
#[case::start_at_coordinate_limit(gp(i32::MAX, 0), Face::E, gp(2, 2), Face::N, TerminalEnd::Start)]
#[case::end_at_coordinate_limit(gp(0, 0), Face::S, gp(2, i32::MIN), Face::N, TerminalEnd::End)]
fn terminals_facing_out_of_the_grid_are_rejected(
    two_components: Grid,
    #[case] start: GridPoint,
    #[case] start_face: Face,
    #[case] end: GridPoint,
    #[case] end_face: Face,
    #[case] terminal: TerminalEnd,
) {
    let err = find_routes(start, start_face, end, end_face, two_components).unwrap_err();
    let (point, face) = match terminal {
        TerminalEnd::Start => (start, start_face),
        TerminalEnd::End => (end, end_face),
    };
    assert_eq!(
        err,
        RoutingError::TerminalOutOfBounds { terminal, point, face, width: 3, height: 3 }
    );
}

#[rstest]
#[case::perpendicular(1, 1)]
#[case::parallel(2, 0)]
fn existing_straight_wire_on_the_target_cell(#[case] rotation: u8, #[case] expected: usize) {
    let mut grid = Grid::new(3, 1);
    grid.set(gp(2, 0), straight(rotation)).unwrap();

    let results = find_routes(gp(-1, 0), Face::E, gp(3, 0), Face::W, grid)
        .expect("search")
        .collect::<Vec<_>>();

    assert_eq!(results.len(), expected);
    for layout in &results {
        assert_eq!(layout.route().points(), &[gp(0, 0), gp(1, 0), gp(2, 0)]);
        assert_eq!(layout.grid().get(gp(2, 0)), Ok(Cell::bridge()));
        assert_eq!(layout.grid().get(gp(0, 0)), Ok(straight(2)));
    }
}

#[rstest]
fn max_route_len_prunes_longer_routes(two_components: Grid) {
    let options = SearchOptions { max_route_len: Some(3) };
    let search =
        find_routes_with_options(gp(0, 0), Face::S, gp(2, 2), Face::N, two_components, options)
            .expect("search");
    let results = search.collect::<Vec<_>>();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].route().len(), 3);
}

#[rstest]
fn every_route_around_the_components_is_found(two_components: Grid) {
    let points = route_between_components(two_components)
        .into_iter()
        .map(|(route, _)| route.points().to_vec())
        .collect::<Vec<_>>();

    assert_eq!(
        points,
        vec![
            vec![gp(0, 1), gp(1, 1), gp(2, 1)],
            vec![gp(0, 1), gp(1, 1), gp(1, 0), gp(2, 0), gp(2, 1)],
            vec![gp(0, 1), gp(0, 2), gp(1, 2), gp(1, 1), gp(2, 1)],
            vec![gp(0, 1), gp(0, 2), gp(1, 2), gp(1, 1), gp(1, 0), gp(2, 0), gp(2, 1)],
        ]
    );
}

#[test]
fn open_four_by_four_grid_enumerates_all_routes() {
    let grid = Grid::new(4, 4);
    let search = find_routes(gp(-1, 0), Face::E, gp(4, 3), Face::W, grid).expect("search");
    assert_eq!(search.count(), 184);
}
