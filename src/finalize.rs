use crate::carve::Carver;
use crate::cell::Position;
use crate::disjoint_set::Label;
use crate::passage::Passage;
use log::debug;
use rand::Rng;
use std::collections::BTreeSet;

impl Carver {
    /// Carves the top floor so that every set reaches the last row, then merges
    /// whatever is still apart along that row.
    pub fn finalize<R: Rng>(&mut self, floor: usize, rng: &mut R) {
        let last_row = self.dimensions.width - 1;
        let mut gone_south: BTreeSet<Label> = BTreeSet::new();

        for row in 0..last_row {
            gone_south.clear();
            for column in 0..self.dimensions.length {
                let here = Position::new(row, column, floor);
                let representative = self.visit(here);

                if column + 1 < self.dimensions.length {
                    self.try_east(here, representative, rng);
                }

                let south = here.south();
                let south_representative = self.tracker.resolve(self.labels[south]);
                let draw = rng.gen::<f64>();
                if (draw < self.vertical_bias || !gone_south.contains(&representative))
                    && representative != south_representative
                {
                    self.tracker.union(representative, south_representative);
                    self.labels[south] = representative;
                    self.open(Passage::south(here));
                    gone_south.insert(representative);
                }
            }
        }

        let mut forced = 0;
        for column in 0..self.dimensions.length {
            let here = Position::new(last_row, column, floor);
            let representative = self.visit(here);
            if column + 1 < self.dimensions.length && self.join_east(here, representative) {
                forced += 1;
            }
        }
        debug!(
            "floor {}: {} passages forced on the last row, {} set(s) left",
            floor,
            forced,
            self.tracker.len()
        );
        self.tracker.clear();
    }
}
