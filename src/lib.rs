//! 3D maze generation with a floor-by-floor variant of Eller's algorithm.
//!
//! ```
//! use maze_3d_generator::gen::{Maze, MazeConfig};
//!
//! let mut maze = Maze::from_config(MazeConfig {
//!     seed: Some(0),
//!     ..Default::default()
//! })
//! .unwrap();
//! maze.build();
//! assert!(maze.is_fully_connected());
//! print!("{}", maze);
//! ```

pub mod carve;
pub mod cell;
pub mod constants;
pub mod disjoint_set;
pub mod error;
pub mod finalize;
pub mod gen;
pub mod grid;
pub mod masks;
pub mod passage;
pub mod render;
pub mod route;
