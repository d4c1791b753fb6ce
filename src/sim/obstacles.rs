//! Pipe slots and their gap heights
//!
//! The world is an endless row of pipe slots. Slot `i` starts at world x
//! `i * stride`, where stride is pipe width plus spacing. Each slot gets a gap
//! height the first time it is asked for, and keeps it until the next run.

use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{WINDOW_AHEAD, WINDOW_BEHIND};
use crate::error::{SimError, SimResult};
use crate::tuning::GapStrategy;

/// Gap heights for every slot of the current run
#[derive(Debug, Clone)]
pub struct ObstacleCourse {
    strategy: GapStrategy,
    /// Session seed
    seed: u64,
    /// Run counter, bumped on every clear so each run gets a new course
    run: u32,
    /// Heights are drawn from [0, gap_range)
    gap_range: f32,
    /// Memoized heights (sequential strategy only)
    heights: Vec<f32>,
    /// Session stream for the sequential strategy, never reseeded
    rng: Pcg32,
}

impl ObstacleCourse {
    pub fn new(seed: u64, strategy: GapStrategy, gap_range: f32) -> Self {
        Self {
            strategy,
            seed,
            run: 0,
            gap_range,
            heights: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn strategy(&self) -> GapStrategy {
        self.strategy
    }

    /// Exclusive upper bound of gap heights
    pub fn gap_range(&self) -> f32 {
        self.gap_range
    }

    /// Number of memoized heights
    pub fn generated(&self) -> usize {
        self.heights.len()
    }

    /// Gap height (top pipe's bottom edge) for a slot.
    ///
    /// Fails for negative indices.
    pub fn gap_height(&mut self, index: i64) -> SimResult<f32> {
        let index = u32::try_from(index).map_err(|_| SimError::NegativeSlotIndex(index))?;
        Ok(self.height_at(index))
    }

    /// Gap height for a slot index known to be valid
    pub fn height_at(&mut self, index: u32) -> f32 {
        match self.strategy {
            GapStrategy::Sequential => {
                let index = index as usize;
                while self.heights.len() <= index {
                    let height = draw(&mut self.rng, self.gap_range);
                    self.heights.push(height);
                }
                self.heights[index]
            }
            GapStrategy::Hashed => {
                let mut rng = Pcg32::seed_from_u64(slot_seed(self.seed, self.run, index));
                draw(&mut rng, self.gap_range)
            }
        }
    }

    /// Forget every height and start a new run
    pub fn clear(&mut self) {
        self.heights.clear();
        self.run = self.run.wrapping_add(1);
    }

    /// Change the height range (screen resize); also starts a new run
    pub fn set_gap_range(&mut self, gap_range: f32) {
        self.gap_range = gap_range;
        self.clear();
    }
}

/// Uniform whole-pixel draw in [0, range); a degenerate range yields 0
fn draw(rng: &mut Pcg32, range: f32) -> f32 {
    if range > 0.0 {
        rng.random_range(0.0..range).floor()
    } else {
        0.0
    }
}

/// Mix session seed, run and slot index into a per-slot seed
fn slot_seed(seed: u64, run: u32, index: u32) -> u64 {
    (index as u64)
        .wrapping_mul(2654435761)
        .wrapping_add((run as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(seed)
}

/// Slots whose left edge lies in the visible window around `distance`.
///
/// The window reaches one screen width behind the scroll offset and one and a
/// half ahead of it. Negative slots are never returned.
pub fn slots_on_screen(distance: f32, screen_width: f32, stride: f32) -> Range<u32> {
    let low = ((distance - WINDOW_BEHIND * screen_width) / stride).ceil().max(0.0);
    let high = ((distance + WINDOW_AHEAD * screen_width) / stride).ceil().max(0.0);
    low as u32..high as u32
}

/// Screen-space x of a slot's left edge
#[inline]
pub fn slot_left(index: u32, distance: f32, stride: f32) -> f32 {
    index as f32 * stride - distance
}
