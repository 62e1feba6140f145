//! Position trail sampling
//!
//! Fixed-capacity FIFO of past discrete positions, sampled every `delay`
//! ticks. The buffer is pre-filled with an origin sentinel so its length is
//! constant from construction onward; the renderer can always draw exactly
//! `capacity` points.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Sampled position history, oldest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailBuffer {
    points: VecDeque<IVec2>,
    delay: u32,
    ticks_since_sample: u32,
}

impl TrailBuffer {
    pub fn new(capacity: usize, delay: u32) -> Self {
        let mut points = VecDeque::with_capacity(capacity + 1);
        points.extend(std::iter::repeat_n(IVec2::ZERO, capacity));
        log::debug!("trail initialized with {capacity} slots, delay {delay}");
        Self {
            points,
            delay,
            ticks_since_sample: 0,
        }
    }

    /// Record `place` if the sampling interval has elapsed, otherwise just
    /// advance the tick counter. Length never changes.
    pub fn maybe_sample(&mut self, place: IVec2) {
        self.ticks_since_sample += 1;
        if self.ticks_since_sample >= self.delay {
            self.ticks_since_sample = 0;
            self.points.push_back(place);
            self.points.pop_front();
        }
    }

    /// Number of retained positions (always the configured capacity)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest-first view of the sampled positions
    pub fn iter(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.points.iter().copied()
    }
}
