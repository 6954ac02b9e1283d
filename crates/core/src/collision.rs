//! Collision index - live obstacles and the per-pass hit set
//!
//! Obstacles live in an arena of slots. A handle is the slot index plus the
//! slot's generation, so moving an obstacle never invalidates its handle and a
//! reused slot never aliases an old handle.
//!
//! The hit set is keyed by handle, not by coordinates: a projectile marks the
//! obstacle it struck, and the owning debris task later takes that mark even
//! though the obstacle has moved in between.

use std::collections::BTreeSet;
use std::fmt;

use tui_debris_types::Rect;

use crate::error::CollisionError;

/// Stable identity of an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId {
    index: u32,
    generation: u32,
}

impl ObstacleId {
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obstacle#{}.{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    rect: Option<Rect>,
}

#[derive(Debug, Clone)]
pub struct CollisionIndex {
    bounds: Rect,
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    hits: BTreeSet<ObstacleId>,
}

impl CollisionIndex {
    /// Create an empty index. Every stored rectangle is clipped to `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
            hits: BTreeSet::new(),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn insert(&mut self, rect: Rect) -> ObstacleId {
        let rect = rect.clipped_to(&self.bounds);
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.rect = Some(rect);
            return ObstacleId {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            rect: Some(rect),
        });
        ObstacleId {
            index,
            generation: 0,
        }
    }

    /// Remove an obstacle and any hit mark it carries.
    pub fn remove(&mut self, id: ObstacleId) -> Result<Rect, CollisionError> {
        let slot = self.slot_mut(id)?;
        let rect = slot.rect.take().ok_or(CollisionError::StaleObstacle(id))?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        self.hits.remove(&id);
        Ok(rect)
    }

    pub fn get(&self, id: ObstacleId) -> Result<Rect, CollisionError> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.rect)
            .ok_or(CollisionError::StaleObstacle(id))
    }

    /// Move an obstacle vertically, keeping its size and column.
    pub fn update_top(&mut self, id: ObstacleId, top: f64) -> Result<(), CollisionError> {
        let bounds = self.bounds;
        let slot = self.slot_mut(id)?;
        let rect = slot.rect.as_mut().ok_or(CollisionError::StaleObstacle(id))?;
        let moved = Rect { top, ..*rect };
        *rect = moved.clipped_to(&bounds);
        Ok(())
    }

    /// Does obstacle `id`, shrunk by `shrink` on every side, overlap `target`?
    pub fn overlaps(&self, id: ObstacleId, target: &Rect, shrink: f64) -> Result<bool, CollisionError> {
        let rect = self.get(id)?;
        Ok(overlaps(&rect, target, shrink))
    }

    /// First live obstacle (in slot order) overlapping `target`.
    pub fn first_overlapping(&self, target: &Rect, shrink: f64) -> Option<ObstacleId> {
        self.iter()
            .find(|(_, rect)| overlaps(rect, target, shrink))
            .map(|(id, _)| id)
    }

    /// Live obstacles in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ObstacleId, Rect)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.rect.map(|rect| {
                (
                    ObstacleId {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    rect,
                )
            })
        })
    }

    pub fn mark_hit(&mut self, id: ObstacleId) -> Result<(), CollisionError> {
        self.get(id)?;
        self.hits.insert(id);
        Ok(())
    }

    /// Take the hit mark of a single obstacle, leaving other marks in place.
    pub fn take_hit(&mut self, id: ObstacleId) -> Result<bool, CollisionError> {
        self.get(id)?;
        Ok(self.hits.remove(&id))
    }

    /// Take every pending hit mark.
    pub fn drain_hits(&mut self) -> BTreeSet<ObstacleId> {
        std::mem::take(&mut self.hits)
    }

    pub fn pending_hits(&self) -> usize {
        self.hits.len()
    }

    fn slot_mut(&mut self, id: ObstacleId) -> Result<&mut Slot, CollisionError> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .ok_or(CollisionError::StaleObstacle(id))
    }
}

/// Overlap test with `shrink` applied to `obstacle` only.
///
/// An obstacle shrunk below zero size never overlaps anything.
pub fn overlaps(obstacle: &Rect, target: &Rect, shrink: f64) -> bool {
    match obstacle.shrink(shrink) {
        Some(inner) => inner.intersects(target),
        None => false,
    }
}
