//! Block-synchronous parameter smoothing.
//!
//! Audio parameters change at control rate (once per block) but must not
//! produce discontinuities audible at sample rate. [`BlockRamp`] linearly
//! interpolates from the current value to a per-block target, reaching the
//! target exactly on the block's last sample. Linear interpolation is the
//! minimal-cost smoothing that eliminates clicks.
//!
//! ## Usage
//!
//! ```rust
//! use cuerda_core::BlockRamp;
//!
//! let mut delay_time = BlockRamp::new(0.0);
//!
//! // Once per block: aim at the new target
//! delay_time.set_block_target(100.0, 16);
//!
//! // Per sample: advance along the trajectory
//! for _ in 0..16 {
//!     let smoothed = delay_time.advance();
//!     // Use smoothed value for processing...
//! }
//! assert_eq!(delay_time.get(), 100.0);
//! ```
//!
//! On the very first block a voice processes there is no previous value to
//! ramp from; call [`instantize`](BlockRamp::instantize) to snap to the
//! target so the uninitialized default never produces an audible sweep.

/// A control-rate value with a per-block linear trajectory.
///
/// Unlike free-running exponential smoothers, the ramp is resynchronized to
/// the block boundary: [`set_block_target`](Self::set_block_target) computes
/// the per-sample increment so the value arrives at the target exactly when
/// the block ends. The trajectory is continuous across blocks unless
/// explicitly instantized.
#[derive(Debug, Clone)]
pub struct BlockRamp {
    /// Current sample-wise trajectory value
    current: f32,
    /// Target value at end of block
    target: f32,
    /// Increment per sample (can be positive or negative)
    increment: f32,
    /// Samples remaining until target reached
    samples_remaining: u32,
}

impl BlockRamp {
    /// Create a new ramp resting at `initial`.
    pub fn new(initial: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            increment: 0.0,
            samples_remaining: 0,
        }
    }

    /// Set the end-of-block target and recompute the per-sample increment.
    ///
    /// Call once per block, before consuming the trajectory. A `block_len`
    /// of zero snaps immediately.
    pub fn set_block_target(&mut self, target: f32, block_len: usize) {
        self.target = target;
        if block_len == 0 {
            self.current = target;
            self.increment = 0.0;
            self.samples_remaining = 0;
        } else {
            self.increment = (target - self.current) / block_len as f32;
            self.samples_remaining = block_len as u32;
        }
    }

    /// Snap current = target with zero increment.
    ///
    /// Used on the very first block so no ramp-in artifact occurs from an
    /// uninitialized default.
    #[inline]
    pub fn instantize(&mut self) {
        self.current = self.target;
        self.increment = 0.0;
        self.samples_remaining = 0;
    }

    /// Advance by one sample and return the trajectory value.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        if self.samples_remaining > 0 {
            self.current += self.increment;
            self.samples_remaining -= 1;
            if self.samples_remaining == 0 {
                self.current = self.target; // Snap to exact target
            }
        }
        self.current
    }

    /// The remaining trajectory as a finite lazy sequence of `len` samples.
    ///
    /// The iterator borrows the ramp mutably, so it cannot be restarted or
    /// consumed twice for the same block.
    pub fn trajectory(&mut self, len: usize) -> Trajectory<'_> {
        Trajectory {
            ramp: self,
            remaining: len,
        }
    }

    /// Get the current value without advancing.
    #[inline]
    pub fn get(&self) -> f32 {
        self.current
    }

    /// Get the target value.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }
}

impl Default for BlockRamp {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Finite per-block trajectory iterator returned by [`BlockRamp::trajectory`].
pub struct Trajectory<'a> {
    ramp: &'a mut BlockRamp,
    remaining: usize,
}

impl Iterator for Trajectory<'_> {
    type Item = f32;

    #[inline]
    fn next(&mut self) -> Option<f32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.ramp.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Trajectory<'_> {}
