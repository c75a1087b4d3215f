use crate::cell::Position;
use crate::error::MazeError;
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Dimensions {
    pub length: usize, // Number of columns
    pub width: usize,  // Number of rows
    pub height: usize, // Number of floors
}

impl Dimensions {
    pub fn new(length: usize, width: usize, height: usize) -> Result<Self, MazeError> {
        if length < 1 || width < 1 || height < 1 {
            return Err(MazeError::InvalidDimension {
                length,
                width,
                height,
            });
        }
        Ok(Dimensions {
            length,
            width,
            height,
        })
    }

    pub fn cell_count(&self) -> usize {
        self.length * self.width * self.height
    }

    pub fn contains(&self, position: &Position) -> bool {
        position.column < self.length && position.row < self.width && position.floor < self.height
    }

    /// Linear index of a position, floors stacked on top of rows.
    pub fn offset(&self, position: &Position) -> Result<usize, MazeError> {
        if !self.contains(position) {
            return Err(MazeError::OutOfBounds {
                position: *position,
                dimensions: *self,
            });
        }
        Ok(position.column
            + self.length * position.row
            + self.length * self.width * position.floor)
    }

    /// Every position of one floor in row-major order.
    pub fn floor_positions(&self, floor: usize) -> impl Iterator<Item = Position> + '_ {
        (0..self.width).flat_map(move |row| {
            (0..self.length).map(move |column| Position::new(row, column, floor))
        })
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |floor| self.floor_positions(floor))
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.width, self.height)
    }
}

/// Contiguous per-cell storage for a maze volume.
#[derive(Clone, Debug)]
pub struct Grid<T> {
    dimensions: Dimensions,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn filled(dimensions: Dimensions, value: T) -> Self {
        Grid {
            dimensions,
            cells: vec![value; dimensions.cell_count()],
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid whose cells are initialized from their linear index.
    pub fn from_fn<F>(dimensions: Dimensions, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Grid {
            dimensions,
            cells: (0..dimensions.cell_count()).map(f).collect(),
        }
    }

    pub fn get(&self, position: &Position) -> Result<&T, MazeError> {
        let offset = self.dimensions.offset(position)?;
        Ok(&self.cells[offset])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.dimensions.positions().zip(self.cells.iter())
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, position: Position) -> &T {
        match self.dimensions.offset(&position) {
            Ok(offset) => &self.cells[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, position: Position) -> &mut T {
        match self.dimensions.offset(&position) {
            Ok(offset) => &mut self.cells[offset],
            Err(err) => panic!("{}", err),
        }
    }
}
