//! Bounded position history for drawing particle trails
//!
//! Storage is allocated once at construction; pushing past capacity
//! overwrites the oldest point in place.

use super::states::NVec2;

/// Default number of points kept per particle
pub const TRAIL_CAPACITY: usize = 200;

/// Largest accepted capacity; storage is reserved up front for every particle
pub const MAX_TRAIL_CAPACITY: usize = 100_000;

#[derive(Debug, Clone)]
pub struct Trail {
    points: Vec<NVec2>, // backing storage, never grows past capacity
    head: usize, // next write slot once full
    capacity: usize,
}

impl Trail {
    /// Create an empty trail holding at most `capacity` points (min 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    /// Append a point, evicting the oldest one when full
    pub fn push(&mut self, p: NVec2) {
        if self.points.len() < self.capacity {
            self.points.push(p);
        } else {
            self.points[self.head] = p;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recently pushed point
    pub fn latest(&self) -> Option<NVec2> {
        if self.points.is_empty() {
            return None;
        }
        let idx = (self.head + self.points.len() - 1) % self.points.len();
        Some(self.points[idx])
    }

    /// Points from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        let (newer, older) = self.points.split_at(self.head);
        older.iter().chain(newer.iter())
    }
}
