use crate::cell::Position;
use crate::constants::{Direction, DIRECTIONS};
use crate::error::MazeError;
use crate::gen::Maze;
use pathfinding::prelude::{bfs, bfs_reach};

impl Maze {
    /// Directions whose wall has been removed in the given cell.
    pub fn open_directions(&self, position: &Position) -> Result<Vec<Direction>, MazeError> {
        let mask = *self.cells().get(position)?;
        Ok(DIRECTIONS
            .iter()
            .filter(|direction| mask & direction.wall() == 0)
            .copied()
            .collect())
    }

    /// Cells reachable from the given cell in a single step.
    pub fn neighbours(&self, position: &Position) -> Result<Vec<Position>, MazeError> {
        let dimensions = self.dimensions();
        Ok(self
            .open_directions(position)?
            .into_iter()
            .filter_map(|direction| position.step(direction))
            .filter(|next| dimensions.contains(next))
            .collect())
    }

    /// Shortest walk between two cells, both ends included.
    pub fn route(
        &self,
        from: &Position,
        to: &Position,
    ) -> Result<Option<Vec<Position>>, MazeError> {
        let dimensions = self.dimensions();
        for position in [from, to] {
            dimensions.offset(position)?;
        }
        Ok(bfs(
            from,
            |p| self.neighbours(p).unwrap_or_default(),
            |p| p == to,
        ))
    }

    pub fn is_fully_connected(&self) -> bool {
        let start = Position::new(0, 0, 0);
        let reached = bfs_reach(start, |p| self.neighbours(p).unwrap_or_default()).count();
        reached == self.dimensions().cell_count()
    }
}
