//! Host configuration abstraction.
//!
//! A voice effect never owns its sample rate, parameter storage, or tuning
//! conventions — the host does. [`VoiceConfig`] is the object-safe trait
//! through which an effect resolves those at block rate, so the DSP core is
//! testable against a minimal synthetic host without a real engine behind
//! it.
//!
//! [`ReferenceConfig`] is that minimal host: flat parameter storage, fixed
//! block size, equal-tempered tuning. It was almost just a test fixture,
//! but it is enough to run a voice effect for simple offline DSP tasks, so
//! it ships as a public type.

use libm::exp2f;

use crate::effect::VoiceEffect;

/// Host capabilities a voice effect consumes.
///
/// All methods take `&self` and the trait is object-safe; effects receive
/// `&dyn VoiceConfig` at block rate. Parameter values arriving through
/// [`float_param`](Self::float_param) are already clamped to their declared
/// ranges by the host.
pub trait VoiceConfig {
    /// Fixed number of samples per `process_stereo` call.
    fn block_size(&self) -> usize;

    /// Sample rate in Hz.
    fn sample_rate(&self) -> f32;

    /// Resolved current value of the float parameter at `index`.
    fn float_param(&self, index: usize) -> f32;

    /// Resolved current value of the int parameter at `index`.
    fn int_param(&self, index: usize) -> i32;

    /// Frequency ratio for a pitch offset in semitones, ignoring any
    /// microtuning the host may apply elsewhere: `2^(semitones/12)` in the
    /// reference implementation.
    fn note_to_pitch_ignoring_tuning(&self, semitones: f32) -> f32;
}

/// Size of the flat parameter store in [`ReferenceConfig`].
pub const MAX_PARAM_COUNT: usize = 20;

/// A minimal runnable host: flat parameter storage, equal-tempered tuning,
/// fixed block size of 16 samples.
#[derive(Debug, Clone)]
pub struct ReferenceConfig {
    sample_rate: f32,
    params: [f32; MAX_PARAM_COUNT],
}

impl ReferenceConfig {
    /// Samples per processing block.
    pub const BLOCK_SIZE: usize = 16;

    /// Create a reference host at the given sample rate, all parameters
    /// zeroed.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            params: [0.0; MAX_PARAM_COUNT],
        }
    }

    /// Store a float parameter value, clamped to nothing — the caller is
    /// the host here and owns range validation.
    pub fn set_float_param(&mut self, index: usize, value: f32) {
        if index < MAX_PARAM_COUNT {
            self.params[index] = value;
        }
    }

    /// Load every float parameter's metadata default from an effect.
    pub fn init_params_from(&mut self, effect: &dyn VoiceEffect) {
        for index in 0..effect.num_float_params() {
            if let Some(desc) = effect.param_at(index) {
                self.set_float_param(index, desc.default);
            }
        }
    }
}

impl VoiceConfig for ReferenceConfig {
    fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }

    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn float_param(&self, index: usize) -> f32 {
        if index < MAX_PARAM_COUNT {
            self.params[index]
        } else {
            0.0
        }
    }

    fn int_param(&self, index: usize) -> i32 {
        self.float_param(index) as i32
    }

    fn note_to_pitch_ignoring_tuning(&self, semitones: f32) -> f32 {
        exp2f(semitones / 12.0)
    }
}
