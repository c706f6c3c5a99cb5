//! The host-facing surface of a voice effect.

use cuerda_core::{LinePool, ParamDescriptor, PoolError};

use crate::config::VoiceConfig;

/// Trait implemented by per-voice effects.
///
/// The lifecycle is `new → init_voice_effect → process_stereo* →
/// deinit_voice_effect`. Initialization happens once the sample rate is
/// known and is the only place storage is acquired; it is fallible because
/// the line pool can be exhausted, and a voice whose init failed must not
/// process audio. Deinit is explicit rather than a `Drop` impl because the
/// pool is an external collaborator the effect only borrows.
///
/// The trait is object-safe so hosts can hold `Box<dyn VoiceEffect>` slots.
pub trait VoiceEffect {
    /// Number of float parameters this effect declares.
    fn num_float_params(&self) -> usize;

    /// Number of int parameters this effect declares.
    fn num_int_params(&self) -> usize;

    /// Metadata for the float parameter at `index`, `None` out of range.
    fn param_at(&self, index: usize) -> Option<ParamDescriptor>;

    /// Metadata for the int parameter at `index`, `None` out of range.
    fn int_param_at(&self, index: usize) -> Option<ParamDescriptor> {
        let _ = index;
        None
    }

    /// One-time setup once the sample rate is known; acquires any delay-line
    /// storage from `pool`.
    ///
    /// # Errors
    ///
    /// [`PoolError::Exhausted`] if the pool cannot supply the required
    /// lines. The effect is left uninitialized and must not process audio.
    fn init_voice_effect(
        &mut self,
        cfg: &dyn VoiceConfig,
        pool: &mut LinePool,
    ) -> Result<(), PoolError>;

    /// Process one block of stereo audio.
    ///
    /// All four buffers are exactly `cfg.block_size()` samples. `pitch` is a
    /// MIDI note number (A440 = 69). Runs on the real-time thread: no
    /// allocation, no locking, no errors.
    fn process_stereo(
        &mut self,
        cfg: &dyn VoiceConfig,
        in_l: &[f32],
        in_r: &[f32],
        out_l: &mut [f32],
        out_r: &mut [f32],
        pitch: f32,
    );

    /// Return all reserved delay lines to `pool`. Called exactly once at
    /// voice teardown; a no-op on an uninitialized effect.
    fn deinit_voice_effect(&mut self, pool: &mut LinePool);

    /// Samples of ringout after input stops, for hosts that keep voices
    /// alive until their tail fades. Effects whose ringout is governed by a
    /// feedback parameter rather than a fixed structure report 0.
    fn tail_length(&self) -> usize {
        0
    }
}
