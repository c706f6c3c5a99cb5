//! Cuerda Core - DSP primitives for per-voice resonator effects
//!
//! This crate provides the foundational building blocks for the cuerda
//! voice-effect layer, designed for real-time audio processing with zero
//! allocation in the audio path.
//!
//! # Core Abstractions
//!
//! ## Parameter Smoothing
//!
//! Control-rate parameters change once per block but must not produce
//! discontinuities audible at sample rate:
//!
//! - [`BlockRamp`] - Linear per-block ramp with an instantize snap for
//!   first use
//!
//! ## Delay Lines
//!
//! - [`DelayLine`] - Circular buffer with fractional-delay interpolated read
//! - [`LinePool`] - Arena that owns delay-line storage and hands out
//!   exclusive handles, keyed by [`CapacityClass`]
//!
//! ## Filters
//!
//! - [`Biquad`] - Second-order IIR filter with RBJ cookbook coefficients
//! - [`StereoBiquad`] - Two coefficient-sharing channels processed jointly
//!
//! ## Utilities
//!
//! - Equal-power panning: [`equal_power_gain`], [`balanced_mono_sum`],
//!   [`pan_to_stereo`]
//! - Math helpers: [`lerp`], [`flush_denormal`], [`semitones_to_hz`]
//! - Parameter metadata: [`ParamDescriptor`], [`ParamUnit`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cuerda-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths; storage
//!   acquisition happens only through [`LinePool`] outside the audio thread
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Ownership at the seams**: pool handles are consumed on release, so
//!   use-after-return does not compile

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod biquad;
pub mod block_ramp;
pub mod delay;
pub mod math;
pub mod pan;
pub mod param_info;

// Re-export main types at crate root
pub use biquad::{Biquad, StereoBiquad, highpass_coefficients, lowpass_coefficients};
pub use block_ramp::{BlockRamp, Trajectory};
pub use delay::{CapacityClass, DelayLine, LinePool, PoolError};
pub use math::{flush_denormal, lerp, semitones_to_hz};
pub use pan::{balanced_mono_sum, equal_power_gain, pan_to_stereo};
pub use param_info::{ParamDescriptor, ParamUnit};
