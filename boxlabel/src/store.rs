use crate::model::{Bounds, InitialRegion, Payload, RectPayload, RegionId};
use std::collections::BTreeMap;

/// Authoritative `id -> label` mapping plus the id counter.
///
/// Geometry is not kept here; it lives on the rendering surface and is joined
/// back in by [`RegionStore::synchronize`].
#[derive(Clone, Debug)]
pub struct RegionStore<L> {
    labels: BTreeMap<RegionId, L>,
    next_id: RegionId,
}

impl<L> Default for RegionStore<L> {
    fn default() -> Self {
        RegionStore {
            labels: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<L: Clone + Default> RegionStore<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> RegionId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Id the next allocation will hand out.
    pub fn next_id(&self) -> RegionId {
        self.next_id
    }

    /// Replace all labels with `initial`. Ids continue from the counter so they
    /// cannot collide with anything still bound on the surface.
    pub fn seed(&mut self, initial: &[InitialRegion<L>]) -> Vec<(RegionId, Bounds)> {
        self.labels.clear();
        let mut out = Vec::with_capacity(initial.len());
        for r in initial {
            let id = self.allocate();
            self.labels.insert(id, r.label.clone());
            out.push((id, r.bounds()));
        }
        log::debug!("seeded {} regions, next id {}", out.len(), self.next_id);
        out
    }

    pub fn put(&mut self, id: RegionId, label: L) -> Option<L> {
        self.labels.insert(id, label)
    }

    pub fn get(&self, id: RegionId) -> Option<&L> {
        self.labels.get(&id)
    }

    pub fn get_mut(&mut self, id: RegionId) -> Option<&mut L> {
        self.labels.get_mut(&id)
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.labels.contains_key(&id)
    }

    pub fn remove(&mut self, id: RegionId) -> Option<L> {
        self.labels.remove(&id)
    }

    /// Empty the mapping and restart ids at zero. Callers must wipe the
    /// surface in the same step.
    pub fn clear(&mut self) {
        self.labels.clear();
        self.next_id = 0;
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.labels.keys().copied()
    }

    /// Join live geometry with stored labels, in `live` order.
    pub fn synchronize(&self, live: &[(RegionId, Bounds)]) -> Payload<L> {
        let rects = live
            .iter()
            .map(|&(id, bounds)| {
                let label = match self.labels.get(&id) {
                    Some(l) => l.clone(),
                    None => {
                        log::warn!("region {} has geometry but no label", id);
                        L::default()
                    }
                };
                RectPayload::new(bounds, label)
            })
            .collect();
        Payload { rects }
    }
}
