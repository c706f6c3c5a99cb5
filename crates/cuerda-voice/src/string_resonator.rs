//! Dual delay-line string resonator.
//!
//! Two independent "strings" — pooled delay lines tuned to a pitch — are
//! each excited by a pan-mixed feed of the stereo input plus feedback from
//! their own line, damped through a shared biquad tone stage, and panned
//! back out to stereo.
//!
//! The stiffness control darkens (negative) or brightens (positive) the
//! feedback path by steering the tone stage between a low-pass and a
//! high-pass. Because that filtering shifts the resonator's perceived
//! pitch, a hand-calibrated correction curve pre-compensates the delay
//! time so audible pitch tracks the nominal tuning at any stiffness.
//!
//! Delay times and the feedback coefficient are block-ramped so parameter
//! and pitch changes glide instead of clicking; the very first block snaps
//! so a fresh voice never sweeps in from a stale default.

use cuerda_core::{
    BlockRamp, CapacityClass, DelayLine, LinePool, ParamDescriptor, ParamUnit, PoolError,
    StereoBiquad, balanced_mono_sum, flush_denormal, highpass_coefficients, lerp,
    lowpass_coefficients, pan_to_stereo, semitones_to_hz,
};
use libm::sqrtf;

use crate::config::VoiceConfig;
use crate::effect::VoiceEffect;

/// MIDI note number of the A440 tuning reference.
const A440_NOTE: f32 = 69.0;
/// Frequency of the tuning reference in Hz.
const A440_HZ: f32 = 440.0;
/// Butterworth Q for the tone stage.
const TONE_Q: f32 = 0.707;

/// Float parameters of the [`StringResonator`], by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringResonatorParam {
    /// Pitch offset of string one in semitones.
    OffsetOne,
    /// Pitch offset of string two in semitones.
    OffsetTwo,
    /// Input/output pan of string one, bipolar.
    PanOne,
    /// Input/output pan of string two, bipolar.
    PanTwo,
    /// Feedback decay amount.
    Decay,
    /// Tone of the feedback path, bipolar: negative darkens (low-pass),
    /// positive brightens (high-pass), zero bypasses.
    Stiffness,
}

impl StringResonatorParam {
    /// Parameter for a float index, `None` out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::OffsetOne),
            1 => Some(Self::OffsetTwo),
            2 => Some(Self::PanOne),
            3 => Some(Self::PanTwo),
            4 => Some(Self::Decay),
            5 => Some(Self::Stiffness),
            _ => None,
        }
    }
}

/// Tone-stage topology for the current block.
///
/// The sign of the stiffness parameter cannot change within a block (it is
/// resolved once at block rate), so the branch is hoisted out of the sample
/// loop into a per-block tagged selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ToneMode {
    Bypass,
    LowPass,
    HighPass,
}

/// Dual delay-line string resonator voice effect.
///
/// ## Float Parameters
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Offset One | -48–48 st | 0 |
/// | 1 | Offset Two | -48–48 st | 0 |
/// | 2 | Pan One | -1–1 (L–R) | -1 |
/// | 3 | Pan Two | -1–1 (L–R) | 1 |
/// | 4 | Decay | 0–1 | 0.8 |
/// | 5 | Stiffness | -1–1 | 0 |
#[derive(Debug)]
pub struct StringResonator {
    lines: [Option<DelayLine>; 2],
    class: CapacityClass,
    first_block: bool,

    delay_one: BlockRamp,
    delay_two: BlockRamp,
    decay: BlockRamp,

    lp: StereoBiquad,
    hp: StereoBiquad,
    tone_mode: ToneMode,
}

impl StringResonator {
    /// Number of float parameters.
    pub const NUM_FLOAT_PARAMS: usize = 6;
    /// Number of int parameters.
    pub const NUM_INT_PARAMS: usize = 0;

    /// Create an uninitialized resonator; call
    /// [`init_voice_effect`](VoiceEffect::init_voice_effect) before
    /// processing.
    pub fn new() -> Self {
        Self {
            lines: [None, None],
            class: CapacityClass::Short,
            first_block: false,
            delay_one: BlockRamp::default(),
            delay_two: BlockRamp::default(),
            decay: BlockRamp::default(),
            lp: StereoBiquad::new(),
            hp: StereoBiquad::new(),
            tone_mode: ToneMode::Bypass,
        }
    }

    /// Metadata for one parameter.
    pub fn param_descriptor(param: StringResonatorParam) -> ParamDescriptor {
        use StringResonatorParam as P;
        match param {
            P::OffsetOne => ParamDescriptor::custom("Offset One", "Offs 1", -48.0, 48.0, 0.0)
                .with_unit(ParamUnit::Semitones)
                .with_step(1.0),
            P::OffsetTwo => ParamDescriptor::custom("Offset Two", "Offs 2", -48.0, 48.0, 0.0)
                .with_unit(ParamUnit::Semitones)
                .with_step(1.0),
            P::PanOne => ParamDescriptor::percent_bipolar("Pan One", "Pan 1", -1.0)
                .with_endpoint_labels("L", "R"),
            P::PanTwo => ParamDescriptor::percent_bipolar("Pan Two", "Pan 2", 1.0)
                .with_endpoint_labels("L", "R"),
            P::Decay => ParamDescriptor::custom("Decay", "Decay", 0.0, 1.0, 0.8),
            P::Stiffness => ParamDescriptor::percent_bipolar("Stiffness", "Stiff", 0.0),
        }
    }

    /// Capacity class for a sample rate: the short line covers 100 ms (a
    /// 10 Hz fundamental floor); above that the long line is needed.
    fn capacity_class_for(sample_rate: f32) -> CapacityClass {
        if sample_rate * 0.1 > CapacityClass::Short.capacity() as f32 {
            CapacityClass::Long
        } else {
            CapacityClass::Short
        }
    }

    /// Pitch correction in semitones for a stiffness setting.
    ///
    /// The tone stage drags the resonator's perceived pitch; these tables
    /// are the drift measured with a tuner at stiffness 0, ±0.25, ±0.5,
    /// ±0.75, ±1.0 on an A440 burst, converted to 12-TET semitones. The
    /// negated lookup is added to the target pitch before it becomes a line
    /// length. Changing the tone-stage cutoffs requires re-measuring these.
    fn stiffness_pitch_correction(tone: f32) -> f32 {
        if tone == 0.0 {
            return 0.0;
        }
        const DARK_RETUNES: [f32; 5] = [-0.0591202, -0.122405, -0.225738, -0.406056, -0.7590243];
        const BRIGHT_RETUNES: [f32; 5] = [0.02752047, 0.09026062, 0.31, 0.615, 0.87];

        let table = if tone < 0.0 {
            &DARK_RETUNES
        } else {
            &BRIGHT_RETUNES
        };
        let fidx = (4.0 * tone.abs()).clamp(0.0, 4.0);
        let idx = (fidx as usize).min(3);
        let frac = fidx - idx as f32;

        -lerp(table[idx], table[idx + 1], frac)
    }

    /// Select the tone-stage topology and retune the active filter.
    ///
    /// `pitch` is the corrected MIDI pitch the stage should track; cutoffs
    /// are computed in the same log-frequency units and kept below Nyquist.
    /// At stiffness exactly zero nothing is computed — the stage is bypassed
    /// for the whole block.
    fn retune_tone_stage(&mut self, tone: f32, pitch: f32, sample_rate: f32) {
        let nyquist_guard = sample_rate * 0.49;

        if tone == 0.0 {
            self.tone_mode = ToneMode::Bypass;
        } else if tone < 0.0 {
            self.tone_mode = ToneMode::LowPass;
            let cutoff = pitch - 40.0 * -tone;
            let hz = semitones_to_hz(cutoff).min(nyquist_guard);
            let (b0, b1, b2, a0, a1, a2) = lowpass_coefficients(hz, TONE_Q, sample_rate);
            self.lp.set_coefficients(b0, b1, b2, a0, a1, a2);
        } else {
            self.tone_mode = ToneMode::HighPass;
            // Narrower span than the low-pass side so about 60% of the
            // travel already clears the fundamental out of the feedback.
            const HP_SPAN_LO: f32 = -70.0;
            const HP_SPAN_HI: f32 = 10.0;
            let cutoff = tone * (HP_SPAN_HI - HP_SPAN_LO) + HP_SPAN_LO + pitch - 60.0;
            let hz = semitones_to_hz(cutoff).min(nyquist_guard);
            let (b0, b1, b2, a0, a1, a2) = highpass_coefficients(hz, TONE_Q, sample_rate);
            self.hp.set_coefficients(b0, b1, b2, a0, a1, a2);
        }
    }
}

impl Default for StringResonator {
    fn default() -> Self {
        Self::new()
    }
}

impl VoiceEffect for StringResonator {
    fn num_float_params(&self) -> usize {
        Self::NUM_FLOAT_PARAMS
    }

    fn num_int_params(&self) -> usize {
        Self::NUM_INT_PARAMS
    }

    fn param_at(&self, index: usize) -> Option<ParamDescriptor> {
        StringResonatorParam::from_index(index).map(Self::param_descriptor)
    }

    fn init_voice_effect(
        &mut self,
        cfg: &dyn VoiceConfig,
        pool: &mut LinePool,
    ) -> Result<(), PoolError> {
        let class = Self::capacity_class_for(cfg.sample_rate());

        let first = pool.reserve(class)?;
        let second = match pool.reserve(class) {
            Ok(line) => line,
            Err(e) => {
                pool.release(first);
                return Err(e);
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "string_resonator: init at {} Hz with {class:?} lines",
            cfg.sample_rate()
        );

        self.lines = [Some(first), Some(second)];
        self.class = class;
        self.first_block = true;
        Ok(())
    }

    fn process_stereo(
        &mut self,
        cfg: &dyn VoiceConfig,
        in_l: &[f32],
        in_r: &[f32],
        out_l: &mut [f32],
        out_r: &mut [f32],
        pitch: f32,
    ) {
        let block = cfg.block_size();
        debug_assert_eq!(in_l.len(), block);
        debug_assert_eq!(in_r.len(), block);
        debug_assert_eq!(out_l.len(), block);
        debug_assert_eq!(out_r.len(), block);

        out_l.copy_from_slice(in_l);
        out_r.copy_from_slice(in_r);

        use StringResonatorParam as P;
        // Pan params are bipolar; the pan math wants 0..1
        let pan_one = (cfg.float_param(P::PanOne as usize) + 1.0) / 2.0;
        let pan_two = (cfg.float_param(P::PanTwo as usize) + 1.0) / 2.0;

        let tone = cfg.float_param(P::Stiffness as usize);
        let correction = Self::stiffness_pitch_correction(tone);
        let pt_one = pitch + cfg.float_param(P::OffsetOne as usize) + correction;
        let pt_two = pitch + cfg.float_param(P::OffsetTwo as usize) + correction;

        let sample_rate = cfg.sample_rate();
        // Both strings share one coefficient set; it tracks string two.
        self.retune_tone_stage(tone, pt_two, sample_rate);

        // Samples per cycle at each corrected pitch
        let period_one =
            sample_rate / (A440_HZ * cfg.note_to_pitch_ignoring_tuning(pt_one - A440_NOTE));
        let period_two =
            sample_rate / (A440_HZ * cfg.note_to_pitch_ignoring_tuning(pt_two - A440_NOTE));
        self.delay_one.set_block_target(period_one, block);
        self.delay_two.set_block_target(period_two, block);

        // Empirically tuned loop-gain curve. The sub-unity ceiling keeps the
        // feedback loop from sustaining or growing even at full decay.
        let dcv = cfg.float_param(P::Decay as usize).clamp(0.0, 1.0) * 0.12 + 0.88;
        let dcv = sqrtf(dcv).min(0.99999);
        self.decay.set_block_target(dcv, block);

        if self.first_block {
            self.delay_one.instantize();
            self.delay_two.instantize();
            self.decay.instantize();
            self.first_block = false;
        }

        let Self {
            lines: [slot_one, slot_two],
            delay_one,
            delay_two,
            decay,
            lp,
            hp,
            tone_mode,
            ..
        } = self;
        let (Some(line_one), Some(line_two)) = (slot_one.as_mut(), slot_two.as_mut()) else {
            // Uninitialized voice: leave the dry copy in place
            return;
        };
        let mode = *tone_mode;

        for i in 0..block {
            let dt_one = delay_one.advance();
            let dt_two = delay_two.advance();
            let dc = decay.advance();

            let from_one = line_one.read(dt_one);
            let from_two = line_two.read(dt_two);

            let mut to_one = balanced_mono_sum(pan_one, in_l[i], in_r[i]) + dc * from_one;
            let mut to_two = balanced_mono_sum(pan_two, in_l[i], in_r[i]) + dc * from_two;

            match mode {
                ToneMode::Bypass => {}
                ToneMode::LowPass => (to_one, to_two) = lp.process_pair(to_one, to_two),
                ToneMode::HighPass => (to_one, to_two) = hp.process_pair(to_one, to_two),
            }

            let to_one = flush_denormal(to_one);
            let to_two = flush_denormal(to_two);
            line_one.write(to_one);
            line_two.write(to_two);

            let (l_one, r_one) = pan_to_stereo(pan_one, to_one);
            let (l_two, r_two) = pan_to_stereo(pan_two, to_two);
            out_l[i] = (l_one + l_two) / 2.0;
            out_r[i] = (r_one + r_two) / 2.0;
        }
    }

    fn deinit_voice_effect(&mut self, pool: &mut LinePool) {
        for slot in &mut self.lines {
            if let Some(line) = slot.take() {
                debug_assert_eq!(line.class(), self.class);
                pool.release(line);
            }
        }
        self.first_block = false;
    }
}
