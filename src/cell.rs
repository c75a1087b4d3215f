use crate::constants::Direction;
use nalgebra::Vector3;
use std::fmt;

#[derive(Ord, PartialOrd, PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Position {
    pub row: usize,
    pub column: usize,
    pub floor: usize,
}

impl Position {
    pub fn new(row: usize, column: usize, floor: usize) -> Self {
        Position { row, column, floor }
    }

    pub fn to_vec3(&self) -> Vector3<i64> {
        Vector3::new(self.row as i64, self.column as i64, self.floor as i64)
    }

    /// Steps one cell towards `direction`. Only the lower edges are checked here,
    /// the caller is responsible for the upper bounds.
    pub fn step(&self, direction: Direction) -> Option<Position> {
        let p = self.to_vec3() + direction.to_vec3();
        if p.x < 0 || p.y < 0 || p.z < 0 {
            return None;
        }
        Some(Position::new(p.x as usize, p.y as usize, p.z as usize))
    }

    pub fn east(&self) -> Position {
        Position::new(self.row, self.column + 1, self.floor)
    }

    pub fn south(&self) -> Position {
        Position::new(self.row + 1, self.column, self.floor)
    }

    pub fn up(&self) -> Position {
        Position::new(self.row, self.column, self.floor + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.column, self.floor)
    }
}
