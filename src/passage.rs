use crate::cell::Position;
use crate::constants::Direction;

/// An opened wall, leading east, south or up from the cell it was opened in.
///
/// Only those three constructors exist, so both ends are always inside the
/// grid whenever `from` is and its neighbour in that direction is.
#[derive(Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub struct Passage {
    from: Position,
    to: Position,
    direction: Direction,
}

impl Passage {
    pub fn east(from: Position) -> Self {
        Passage {
            from,
            to: from.east(),
            direction: Direction::East,
        }
    }

    pub fn south(from: Position) -> Self {
        Passage {
            from,
            to: from.south(),
            direction: Direction::South,
        }
    }

    pub fn up(from: Position) -> Self {
        Passage {
            from,
            to: from.up(),
            direction: Direction::Up,
        }
    }

    pub fn from(&self) -> Position {
        self.from
    }

    pub fn to(&self) -> Position {
        self.to
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}
