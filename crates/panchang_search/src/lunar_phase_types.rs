//! Types for new/full moon search and the new-moon bracket cache.

use std::collections::VecDeque;

use crate::config::DEFAULT_CACHE_CAPACITY;

/// Temporal direction of a search from the query JD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    Backward,
    Forward,
}

impl SearchDirection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Backward => "backward",
            Self::Forward => "forward",
        }
    }
}

/// Lunar phase searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarPhase {
    /// Amavasya: elongation 0.
    NewMoon,
    /// Purnima: elongation 180.
    FullMoon,
}

impl LunarPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "new moon",
            Self::FullMoon => "full moon",
        }
    }

    /// Moon-Sun elongation at the phase, degrees.
    pub const fn target_elongation_deg(self) -> f64 {
        match self {
            Self::NewMoon => 0.0,
            Self::FullMoon => 180.0,
        }
    }
}

/// The new moons on either side of a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewMoonBracket {
    pub query_jd: f64,
    pub backward_jd: f64,
    pub forward_jd: f64,
}

impl NewMoonBracket {
    /// Whether `jd` lies within `[backward_jd, forward_jd)`. The forward
    /// new moon opens the next month, so it is not part of this bracket.
    pub fn contains(&self, jd: f64) -> bool {
        self.backward_jd <= jd && jd < self.forward_jd
    }

    pub fn bound(&self, direction: SearchDirection) -> f64 {
        match direction {
            SearchDirection::Backward => self.backward_jd,
            SearchDirection::Forward => self.forward_jd,
        }
    }
}

/// Bounded FIFO of recently found new-moon brackets.
///
/// A hit is only returned for a query inside a cached bracket, so a miss is
/// always safe.
#[derive(Debug, Clone)]
pub struct NewMoonCache {
    entries: VecDeque<NewMoonBracket>,
    capacity: usize,
}

impl Default for NewMoonCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl NewMoonCache {
    /// Empty cache holding at most `capacity` brackets (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// First cached bracket containing `jd`.
    pub fn lookup(&self, jd: f64) -> Option<NewMoonBracket> {
        self.entries.iter().find(|b| b.contains(jd)).copied()
    }

    /// Append a bracket, returning the evicted oldest entry when full.
    pub fn insert(&mut self, bracket: NewMoonBracket) -> Option<NewMoonBracket> {
        self.entries.push_back(bracket);
        if self.entries.len() > self.capacity {
            self.entries.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
