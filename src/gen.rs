use crate::carve::Carver;
use crate::cell::Position;
use crate::constants::{WallMask, ALL_WALLS};
use crate::error::MazeError;
use crate::grid::{Dimensions, Grid};
use crate::masks::resolve_masks;
use crate::passage::Passage;
use crate::render::render;
use log::debug;
use rand::{Rng, SeedableRng};
use std::fmt;

pub struct MazeConfig {
    pub length: usize,         // Number of columns (east-west)
    pub width: usize,          // Number of rows (north-south)
    pub height: usize,         // Number of floors
    pub horizontal_bias: f64,  // Likelihood of a passage between rooms of the same row
    pub vertical_bias: f64,    // Likelihood of a passage between rooms of the same column
    pub seed: Option<u64>,     // Seed value for random maze generation
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            length: 10,
            width: 5,
            height: 4,
            horizontal_bias: 0.5,
            vertical_bias: 0.5,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub struct Maze {
    dimensions: Dimensions,
    horizontal_bias: f64,
    vertical_bias: f64,
    seed: Option<u64>,
    cells: Grid<WallMask>,
    passages: Vec<Passage>,
    built: bool,
}

impl Maze {
    pub fn new(
        length: usize,
        width: usize,
        height: usize,
        horizontal_bias: f64,
        vertical_bias: f64,
    ) -> Result<Self, MazeError> {
        Maze::from_config(MazeConfig {
            length,
            width,
            height,
            horizontal_bias,
            vertical_bias,
            seed: None,
        })
    }

    pub fn from_config(config: MazeConfig) -> Result<Self, MazeError> {
        let dimensions = Dimensions::new(config.length, config.width, config.height)?;
        if !is_valid_bias(config.horizontal_bias) || !is_valid_bias(config.vertical_bias) {
            return Err(MazeError::InvalidBias {
                horizontal: config.horizontal_bias,
                vertical: config.vertical_bias,
            });
        }
        Ok(Maze {
            dimensions,
            horizontal_bias: config.horizontal_bias,
            vertical_bias: config.vertical_bias,
            seed: config.seed,
            cells: Grid::filled(dimensions, ALL_WALLS),
            passages: Vec::new(),
            built: false,
        })
    }

    /// Generates the maze from the configured seed, or from entropy when there is none.
    pub fn build(&mut self) {
        let mut rng: rand::rngs::StdRng = self
            .seed
            .map(SeedableRng::seed_from_u64)
            .unwrap_or_else(rand::rngs::StdRng::from_entropy);
        self.build_with_rng(&mut rng);
    }

    /// Generates the maze from the given random source.
    ///
    /// Calling it again discards the previous maze and starts over from closed cells.
    pub fn build_with_rng<R: Rng>(&mut self, rng: &mut R) {
        let carver = Carver::new(self.dimensions, self.horizontal_bias, self.vertical_bias);
        self.passages = carver.run(rng);
        self.cells = resolve_masks(self.dimensions, &self.passages);
        self.built = true;
        debug!(
            "built {} maze with {} passages",
            self.dimensions,
            self.passages.len()
        );
    }

    pub fn cell(&self, row: usize, column: usize, floor: usize) -> Result<WallMask, MazeError> {
        self.cells.get(&Position::new(row, column, floor)).copied()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn length(&self) -> usize {
        self.dimensions.length
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn cells(&self) -> &Grid<WallMask> {
        &self.cells
    }

    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Wall masks listed floor by floor, one row per line.
    pub fn format_masks(&self) -> String {
        let mut out = String::new();
        for floor in 0..self.dimensions.height {
            for row in 0..self.dimensions.width {
                for column in 0..self.dimensions.length {
                    let mask = self.cells[Position::new(row, column, floor)];
                    out.push_str(&format!("{}  ", mask));
                }
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.dimensions, &self.passages))
    }
}

fn is_valid_bias(bias: f64) -> bool {
    0.0 < bias && bias < 1.0
}
