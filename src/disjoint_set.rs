use crate::cell::Position;
use std::collections::btree_map::Iter;
use std::collections::BTreeMap;
use std::mem;

pub type Label = usize;

/// Per-floor bookkeeping of which cells are already connected.
///
/// Every label ever seen on the floor maps directly to a live representative,
/// and every representative knows the labels that map to it. A union only
/// touches the labels and positions of the two sets involved.
#[derive(Debug, Clone, Default)]
pub struct DisjointSetTracker {
    merged: BTreeMap<Label, Label>,
    aliases: BTreeMap<Label, Vec<Label>>,
    room_sets: BTreeMap<Label, Vec<Position>>,
}

impl DisjointSetTracker {
    pub fn resolve(&mut self, label: Label) -> Label {
        if let Some(representative) = self.merged.get(&label) {
            return *representative;
        }
        self.merged.insert(label, label);
        self.aliases.insert(label, vec![label]);
        label
    }

    pub fn register(&mut self, representative: Label, position: Position) {
        self.room_sets
            .entry(representative)
            .or_default()
            .push(position);
    }

    pub fn union(&mut self, keep: Label, absorbed: Label) {
        if keep == absorbed {
            return;
        }
        if let Some(positions) = self.room_sets.remove(&absorbed) {
            append_smaller(self.room_sets.entry(keep).or_default(), positions);
        }
        let labels = self.aliases.remove(&absorbed).unwrap_or_else(|| vec![absorbed]);
        for label in labels.iter() {
            self.merged.insert(*label, keep);
        }
        append_smaller(self.aliases.entry(keep).or_insert_with(|| vec![keep]), labels);
    }

    #[cfg(test)]
    pub fn members(&self, representative: Label) -> Option<&[Position]> {
        self.room_sets.get(&representative).map(Vec::as_slice)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Label, Vec<Position>> {
        self.room_sets.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.room_sets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.room_sets.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.merged.clear();
        self.aliases.clear();
        self.room_sets.clear();
    }
}

// Copies whichever list is shorter onto the longer one, keeping the result in `target`.
fn append_smaller<T>(target: &mut Vec<T>, mut other: Vec<T>) {
    if other.len() > target.len() {
        mem::swap(target, &mut other);
    }
    target.extend(other);
}
