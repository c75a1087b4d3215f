use crate::cell::Position;
use crate::disjoint_set::{DisjointSetTracker, Label};
use crate::grid::{Dimensions, Grid};
use crate::passage::Passage;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

/// State of one generation run: set labels, per-floor sets and the passage log.
pub struct Carver {
    pub(crate) dimensions: Dimensions,
    pub(crate) horizontal_bias: f64,
    pub(crate) vertical_bias: f64,
    pub(crate) labels: Grid<Label>,
    pub(crate) tracker: DisjointSetTracker,
    pub(crate) passages: Vec<Passage>,
}

impl Carver {
    pub fn new(dimensions: Dimensions, horizontal_bias: f64, vertical_bias: f64) -> Self {
        Carver {
            dimensions,
            horizontal_bias,
            vertical_bias,
            // Each cell starts in its own set, named by its index in the whole volume
            labels: Grid::from_fn(dimensions, |index| index),
            tracker: DisjointSetTracker::default(),
            passages: Vec::with_capacity(dimensions.cell_count()),
        }
    }

    /// Runs every floor and returns the passage log.
    pub fn run<R: Rng>(mut self, rng: &mut R) -> Vec<Passage> {
        let last_floor = self.dimensions.height - 1;
        for floor in 0..last_floor {
            self.carve(floor, rng);
            self.connect_up(floor, rng);
        }
        self.finalize(last_floor, rng);
        self.passages
    }

    /// Randomly opens east and south walls of one floor without closing a loop.
    pub fn carve<R: Rng>(&mut self, floor: usize, rng: &mut R) {
        for row in 0..self.dimensions.width {
            for column in 0..self.dimensions.length {
                let here = Position::new(row, column, floor);
                let representative = self.visit(here);

                if column + 1 < self.dimensions.length {
                    self.try_east(here, representative, rng);
                }

                if row + 1 < self.dimensions.width {
                    let south = here.south();
                    let south_representative = self.tracker.resolve(self.labels[south]);
                    if rng.gen::<f64>() < self.vertical_bias
                        && representative != south_representative
                    {
                        // The southern cell registers itself once the scan reaches it
                        self.labels[south] = representative;
                        self.open(Passage::south(here));
                    }
                }
            }
        }
    }

    /// Opens exactly one passage up from every set of the floor, then forgets the sets.
    pub fn connect_up<R: Rng>(&mut self, floor: usize, rng: &mut R) {
        let mut ups = Vec::with_capacity(self.tracker.len());
        for (_, members) in self.tracker.iter() {
            if let Some(member) = members.choose(rng) {
                ups.push(Passage::up(*member));
            }
        }
        debug!("floor {}: {} sets connected upward", floor, ups.len());
        for passage in ups {
            self.open(passage);
        }
        self.tracker.clear();
    }

    /// Resolves the stored label of a cell and files the cell under it.
    pub(crate) fn visit(&mut self, position: Position) -> Label {
        let representative = self.tracker.resolve(self.labels[position]);
        self.tracker.register(representative, position);
        representative
    }

    pub(crate) fn try_east<R: Rng>(&mut self, here: Position, representative: Label, rng: &mut R) {
        let draw = rng.gen::<f64>();
        if draw < self.horizontal_bias {
            self.join_east(here, representative);
        }
    }

    /// Opens the eastern wall unless both cells already share a set.
    pub(crate) fn join_east(&mut self, here: Position, representative: Label) -> bool {
        let east = here.east();
        let east_representative = self.tracker.resolve(self.labels[east]);
        if representative == east_representative {
            return false;
        }
        self.tracker.union(representative, east_representative);
        self.labels[east] = representative;
        self.open(Passage::east(here));
        true
    }

    pub(crate) fn open(&mut self, passage: Passage) {
        trace!("open {:?} from {}", passage.direction(), passage.from());
        self.passages.push(passage);
    }
}
