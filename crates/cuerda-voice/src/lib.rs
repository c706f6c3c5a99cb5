//! Cuerda Voice - per-voice resonator effects
//!
//! This crate provides the voice-effect layer built on cuerda-core:
//!
//! - [`VoiceConfig`] - Object-safe host abstraction (block size, sample
//!   rate, parameter resolution, tuning)
//! - [`VoiceEffect`] - The surface a voice effect exposes to its host
//! - [`StringResonator`] - Dual delay-line string resonator with a shared
//!   tone stage and stiffness pitch correction
//! - [`ReferenceConfig`] - Runnable host implementation for tests and
//!   simple DSP tasks
//!
//! ## Example
//!
//! ```rust
//! use cuerda_core::LinePool;
//! use cuerda_voice::{ReferenceConfig, StringResonator, VoiceConfig, VoiceEffect};
//!
//! let mut cfg = ReferenceConfig::new(48000.0);
//! let mut pool = LinePool::new(4, 0);
//! let mut resonator = StringResonator::new();
//!
//! cfg.init_params_from(&resonator);
//! resonator.init_voice_effect(&cfg, &mut pool).unwrap();
//!
//! let block = cfg.block_size();
//! let (in_l, in_r) = (vec![0.5; block], vec![0.5; block]);
//! let (mut out_l, mut out_r) = (vec![0.0; block], vec![0.0; block]);
//! resonator.process_stereo(&cfg, &in_l, &in_r, &mut out_l, &mut out_r, 69.0);
//!
//! resonator.deinit_voice_effect(&mut pool);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod config;
pub mod effect;
pub mod string_resonator;

// Re-export main types at crate root
pub use config::{MAX_PARAM_COUNT, ReferenceConfig, VoiceConfig};
pub use effect::VoiceEffect;
pub use string_resonator::{StringResonator, StringResonatorParam};

pub use cuerda_core::{LinePool, PoolError};
