//! Pooled delay lines for resonator voices.
//!
//! A [`DelayLine`] is a circular sample buffer supporting fractional-delay
//! interpolated reads and single-step writes. Its backing storage is owned
//! by a [`LinePool`] arena and handed out per voice, so buffers are reused
//! across voice instances instead of being reallocated on every note.
//!
//! # Capacity Classes
//!
//! Lines come in exactly two sizes, chosen from the sample rate at voice
//! init: [`CapacityClass::Short`] (2^14 samples) and [`CapacityClass::Long`]
//! (2^16 samples). The long class covers a 10 Hz fundamental at sample
//! rates above roughly 160 kHz.
//!
//! # Ownership
//!
//! [`LinePool::reserve`] transfers exclusive ownership of a zeroed buffer to
//! the caller as a [`DelayLine`] handle; [`LinePool::release`] consumes the
//! handle and returns the buffer to the free list of its class. A released
//! handle cannot be used again — the move makes use-after-return a compile
//! error. Pool exhaustion is fatal to voice construction and is the only
//! error this module reports.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec;
use alloc::vec::Vec;

/// The two supported delay-line capacities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityClass {
    /// 2^14 samples — sufficient below ~160 kHz sample rate.
    Short,
    /// 2^16 samples — for very high sample rates.
    Long,
}

impl CapacityClass {
    /// Buffer length in samples for this class.
    pub const fn capacity(self) -> usize {
        match self {
            CapacityClass::Short => 1 << 14,
            CapacityClass::Long => 1 << 16,
        }
    }
}

/// Error returned when a [`LinePool`] cannot satisfy a reservation.
///
/// Exhaustion is fatal to the requesting voice: it cannot run without its
/// lines and must not proceed to process audio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// No free line of the requested class remains in the pool.
    Exhausted(CapacityClass),
}

#[cfg(feature = "std")]
impl std::fmt::Display for PoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolError::Exhausted(class) => {
                write!(f, "delay-line pool exhausted for {class:?} class")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PoolError {}

/// A circular delay buffer with fractional-delay read.
///
/// Obtained from [`LinePool::reserve`]; the handle owns its storage
/// exclusively until it is consumed by [`LinePool::release`].
///
/// Reads are linearly interpolated, so the valid delay domain is
/// `[1.0, capacity - 1]` — one sample of headroom on either side of the
/// interpolation kernel. Delays outside that domain are a caller contract
/// violation; they are clamped (and flagged by a debug assertion) rather
/// than allowed to index out of bounds.
#[derive(Debug, PartialEq)]
pub struct DelayLine {
    buffer: Vec<f32>,
    write_pos: usize,
    class: CapacityClass,
}

impl DelayLine {
    fn new(buffer: Vec<f32>, class: CapacityClass) -> Self {
        debug_assert_eq!(buffer.len(), class.capacity());
        Self {
            buffer,
            write_pos: 0,
            class,
        }
    }

    /// The capacity class this line was reserved with.
    pub fn class(&self) -> CapacityClass {
        self.class
    }

    /// Buffer length in samples.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Read a sample `delay_samples` behind the write cursor, linearly
    /// interpolating between the two neighboring samples.
    #[inline]
    pub fn read(&self, delay_samples: f32) -> f32 {
        let len = self.buffer.len();
        debug_assert!(
            delay_samples >= 1.0 && delay_samples <= (len - 1) as f32,
            "fractional delay {delay_samples} outside [1, {}]",
            len - 1
        );
        let delay = delay_samples.clamp(1.0, (len - 2) as f32);

        let delay_int = delay as usize;
        let frac = delay - delay_int as f32;

        // Points at the sample written `delay_int + 1` writes ago; the
        // neighbor one step earlier in the buffer is one sample older.
        let read_pos = (self.write_pos + len - delay_int - 1) % len;
        let older_pos = (read_pos + len - 1) % len;

        let a = self.buffer[read_pos];
        let b = self.buffer[older_pos];
        a + (b - a) * frac
    }

    /// Append one sample and advance the write cursor, wrapping modulo
    /// capacity.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    /// Zero the buffer and rewind the cursor.
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }
}

/// Arena that owns delay-line storage, keyed by [`CapacityClass`].
///
/// All buffers are allocated up front in [`new`](Self::new);
/// [`reserve`](Self::reserve) and [`release`](Self::release) only move
/// buffers between the free lists and live handles. Concurrently live
/// handles never alias: each reservation pops a distinct buffer.
///
/// Reserve and release are voice-lifecycle operations — they must not be
/// called from the per-block audio path.
pub struct LinePool {
    short_free: Vec<Vec<f32>>,
    long_free: Vec<Vec<f32>>,
}

impl LinePool {
    /// Create a pool holding `short_lines` buffers of the short class and
    /// `long_lines` of the long class.
    pub fn new(short_lines: usize, long_lines: usize) -> Self {
        Self {
            short_free: (0..short_lines)
                .map(|_| vec![0.0; CapacityClass::Short.capacity()])
                .collect(),
            long_free: (0..long_lines)
                .map(|_| vec![0.0; CapacityClass::Long.capacity()])
                .collect(),
        }
    }

    /// Number of free lines remaining for `class`.
    pub fn available(&self, class: CapacityClass) -> usize {
        match class {
            CapacityClass::Short => self.short_free.len(),
            CapacityClass::Long => self.long_free.len(),
        }
    }

    /// Transfer exclusive ownership of a zeroed line to the caller.
    ///
    /// # Errors
    ///
    /// [`PoolError::Exhausted`] if no free line of `class` remains.
    pub fn reserve(&mut self, class: CapacityClass) -> Result<DelayLine, PoolError> {
        let free = match class {
            CapacityClass::Short => &mut self.short_free,
            CapacityClass::Long => &mut self.long_free,
        };
        let mut buffer = free.pop().ok_or(PoolError::Exhausted(class))?;
        buffer.fill(0.0);

        #[cfg(feature = "tracing")]
        tracing::debug!("line_pool: reserved {class:?} line, {} free", free.len());

        Ok(DelayLine::new(buffer, class))
    }

    /// Return a line to the free list of its class, consuming the handle.
    pub fn release(&mut self, line: DelayLine) {
        let DelayLine { buffer, class, .. } = line;
        match class {
            CapacityClass::Short => self.short_free.push(buffer),
            CapacityClass::Long => self.long_free.push(buffer),
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("line_pool: released {class:?} line");
    }
}
