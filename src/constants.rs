use nalgebra::Vector3;

pub type WallMask = u8;

pub const FLOOR: WallMask = 1;
pub const EAST: WallMask = 2;
pub const NORTH: WallMask = 4;
pub const WEST: WallMask = 8;
pub const SOUTH: WallMask = 16;
pub const CEIL: WallMask = 32;

/// Every wall closed.
pub const ALL_WALLS: WallMask = FLOOR | EAST | NORTH | WEST | SOUTH | CEIL;

// Rows grow southward, columns eastward, floors upward.
#[derive(Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Copy, Clone)]
pub enum Direction {
    Down,
    East,
    North,
    West,
    South,
    Up,
}

pub const DIRECTIONS: &[Direction; 6] = &[
    Direction::Down,
    Direction::East,
    Direction::North,
    Direction::West,
    Direction::South,
    Direction::Up,
];

impl Direction {
    /// Offset as (row, column, floor).
    pub fn to_vec3(&self) -> Vector3<i64> {
        match self {
            Direction::Down => Vector3::new(0, 0, -1),
            Direction::East => Vector3::new(0, 1, 0),
            Direction::North => Vector3::new(-1, 0, 0),
            Direction::West => Vector3::new(0, -1, 0),
            Direction::South => Vector3::new(1, 0, 0),
            Direction::Up => Vector3::new(0, 0, 1),
        }
    }

    /// The wall a cell must lose to open towards this direction.
    pub fn wall(&self) -> WallMask {
        match self {
            Direction::Down => FLOOR,
            Direction::East => EAST,
            Direction::North => NORTH,
            Direction::West => WEST,
            Direction::South => SOUTH,
            Direction::Up => CEIL,
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::Up => Direction::Down,
        }
    }
}
