//! Property-based tests for generated mazes.
//!
//! Every maze is built from a seeded generator so failures can be replayed.

use maze_3d_generator::cell::Position;
use maze_3d_generator::constants::*;
use maze_3d_generator::gen::{Maze, MazeConfig};
use pathfinding::prelude::connected_components;
use proptest::prelude::*;
use std::collections::HashSet;

fn build(
    length: usize,
    width: usize,
    height: usize,
    horizontal_bias: f64,
    vertical_bias: f64,
    seed: u64,
) -> Maze {
    let mut maze = Maze::from_config(MazeConfig {
        length,
        width,
        height,
        horizontal_bias,
        vertical_bias,
        seed: Some(seed),
    })
    .unwrap();
    maze.build();
    maze
}

proptest! {
    /// Property: every cell is reachable and the passages form a spanning tree.
    #[test]
    fn prop_spanning_tree(
        length in 1usize..7,
        width in 1usize..7,
        height in 1usize..5,
        horizontal_bias in 0.05f64..0.95,
        vertical_bias in 0.05f64..0.95,
        seed in any::<u64>(),
    ) {
        let maze = build(length, width, height, horizontal_bias, vertical_bias, seed);
        prop_assert!(maze.is_fully_connected());
        prop_assert_eq!(maze.passages().len(), length * width * height - 1);
    }

    /// Property: each set of a lower floor has exactly one way up.
    #[test]
    fn prop_one_way_up_per_component(
        length in 1usize..6,
        width in 1usize..6,
        height in 2usize..5,
        seed in any::<u64>(),
    ) {
        let maze = build(length, width, height, 0.5, 0.5, seed);
        let dimensions = maze.dimensions();

        for floor in 0..height - 1 {
            let cells = dimensions.floor_positions(floor).collect::<Vec<_>>();
            let components = connected_components(&cells, |p| {
                maze.neighbours(p)
                    .unwrap()
                    .into_iter()
                    .filter(|n| n.floor == floor)
                    .collect::<Vec<_>>()
            });
            for component in components {
                let ups = maze
                    .passages()
                    .iter()
                    .filter(|p| {
                        p.direction() == Direction::Up && component.contains(&p.from())
                    })
                    .count();
                prop_assert_eq!(ups, 1);
            }
        }
    }

    /// Property: passages are unique, adjacent and only lead east, south or up.
    #[test]
    fn prop_passages_are_simple(
        length in 1usize..6,
        width in 1usize..6,
        height in 1usize..4,
        seed in any::<u64>(),
    ) {
        let maze = build(length, width, height, 0.5, 0.5, seed);
        let dimensions = maze.dimensions();
        let mut seen = HashSet::new();
        for passage in maze.passages() {
            prop_assert!(seen.insert(*passage));
            prop_assert!(matches!(
                passage.direction(),
                Direction::East | Direction::South | Direction::Up
            ));
            prop_assert!(dimensions.contains(&passage.to()));
            let offset = passage.to().to_vec3() - passage.from().to_vec3();
            prop_assert_eq!(offset.abs().sum(), 1);
        }
    }

    /// Property: each wall bit is open exactly when a passage runs through it.
    #[test]
    fn prop_masks_follow_passages(
        length in 1usize..6,
        width in 1usize..6,
        height in 1usize..4,
        seed in any::<u64>(),
    ) {
        let maze = build(length, width, height, 0.5, 0.5, seed);
        let mut opened: HashSet<(Position, Direction)> = HashSet::new();
        for passage in maze.passages() {
            opened.insert((passage.from(), passage.direction()));
            opened.insert((passage.to(), passage.direction().opposite()));
        }
        for (position, mask) in maze.cells().iter() {
            prop_assert!(*mask <= ALL_WALLS);
            for direction in DIRECTIONS {
                let open = mask & direction.wall() == 0;
                prop_assert_eq!(open, opened.contains(&(position, *direction)));
            }
        }
    }
}

#[test]
fn test_smallest_cube_is_connected() {
    for seed in 0..200 {
        let maze = build(2, 2, 2, 0.5, 0.5, seed);
        assert!(maze.is_fully_connected(), "seed {}", seed);
        assert_eq!(maze.passages().len(), 7);
    }
}

#[test]
fn test_single_floor_scenario() {
    for seed in 0..50 {
        let first = build(3, 2, 1, 0.5, 0.5, seed);
        let second = build(3, 2, 1, 0.5, 0.5, seed);
        assert_eq!(first.passages(), second.passages());

        let touched = first
            .passages()
            .iter()
            .flat_map(|p| [p.from(), p.to()])
            .collect::<HashSet<_>>();
        assert_eq!(touched.len(), 6);
        assert_eq!(first.passages().len(), 5);
    }
}

#[test]
fn test_outer_walls_stay_closed() {
    let maze = build(6, 4, 3, 0.7, 0.7, 11);
    let dimensions = maze.dimensions();
    for (p, mask) in maze.cells().iter() {
        if p.floor == 0 {
            assert_eq!(mask & FLOOR, FLOOR);
        }
        if p.floor == dimensions.height - 1 {
            assert_eq!(mask & CEIL, CEIL);
        }
        if p.row == 0 {
            assert_eq!(mask & NORTH, NORTH);
        }
        if p.row == dimensions.width - 1 {
            assert_eq!(mask & SOUTH, SOUTH);
        }
        if p.column == 0 {
            assert_eq!(mask & WEST, WEST);
        }
        if p.column == dimensions.length - 1 {
            assert_eq!(mask & EAST, EAST);
        }
    }
}

#[test]
fn test_large_single_floor() {
    let maze = build(300, 300, 1, 0.5, 0.5, 1);
    assert!(maze.is_fully_connected());
    assert_eq!(maze.passages().len(), 300 * 300 - 1);
}
