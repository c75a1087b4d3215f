use crate::constants::{WallMask, ALL_WALLS};
use crate::grid::{Dimensions, Grid};
use crate::passage::Passage;

/// Closes every wall, then knocks out both sides of each logged passage.
pub fn resolve_masks(dimensions: Dimensions, passages: &[Passage]) -> Grid<WallMask> {
    let mut masks = Grid::filled(dimensions, ALL_WALLS);
    for passage in passages {
        masks[passage.from()] &= !passage.direction().wall();
        masks[passage.to()] &= !passage.direction().opposite().wall();
    }
    masks
}
