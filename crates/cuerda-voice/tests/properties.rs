//! Property-based tests for the string resonator.
//!
//! Verifies the feedback-loop stability invariant and pitch-correction
//! behavior over randomized parameter settings using proptest.

use cuerda_core::LinePool;
use cuerda_voice::{ReferenceConfig, StringResonator, StringResonatorParam, VoiceEffect};
use proptest::prelude::*;

const SAMPLE_RATE: f32 = 48000.0;

fn render_blocks(
    decay: f32,
    stiffness: f32,
    input: f32,
    pitch: f32,
    blocks: usize,
) -> (f32, bool) {
    let mut cfg = ReferenceConfig::new(SAMPLE_RATE);
    let mut pool = LinePool::new(2, 0);
    let mut res = StringResonator::new();
    cfg.init_params_from(&res);
    cfg.set_float_param(StringResonatorParam::Decay as usize, decay);
    cfg.set_float_param(StringResonatorParam::Stiffness as usize, stiffness);
    res.init_voice_effect(&cfg, &mut pool).unwrap();

    let block = ReferenceConfig::BLOCK_SIZE;
    let in_l = vec![input; block];
    let in_r = vec![input; block];
    let mut out_l = vec![0.0; block];
    let mut out_r = vec![0.0; block];

    let mut peak = 0.0f32;
    let mut finite = true;
    for _ in 0..blocks {
        res.process_stereo(&cfg, &in_l, &in_r, &mut out_l, &mut out_r, pitch);
        for &s in out_l.iter().chain(out_r.iter()) {
            finite &= s.is_finite();
            peak = peak.max(s.abs());
        }
    }
    res.deinit_voice_effect(&mut pool);
    (peak, finite)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For any decay in [0,1] and constant input, the feedback loop must not
    /// grow unboundedly: the squared/capped loop gain stays below unity, so
    /// the geometric sum bounds the peak.
    #[test]
    fn feedback_is_bounded_for_any_decay(
        decay in 0.0f32..=1.0f32,
        input in -1.0f32..=1.0f32,
        pitch in 45.0f32..=90.0f32,
    ) {
        let (peak, finite) = render_blocks(decay, 0.0, input, pitch, 400);

        prop_assert!(finite, "output must stay finite");

        // Loop gain dc = min(sqrt(decay*0.12 + 0.88), 0.99999) < 1; the
        // steady-state peak is bounded by |mono input| / (1 - dc). Both
        // channels sum into one string at most as 2*|input|.
        let dc = (decay * 0.12 + 0.88).sqrt().min(0.99999);
        let bound = 2.0 * input.abs() / (1.0 - dc) + 1.0;
        prop_assert!(
            peak <= bound,
            "peak {peak} exceeded stability bound {bound} (decay={decay})"
        );
    }

    /// The tone stage is a unity-gain-bounded Butterworth section, so the
    /// loop stays stable and finite with any stiffness setting.
    #[test]
    fn filtered_feedback_stays_finite(
        decay in 0.0f32..=1.0f32,
        stiffness in -1.0f32..=1.0f32,
        pitch in 45.0f32..=90.0f32,
    ) {
        let (peak, finite) = render_blocks(decay, stiffness, 0.5, pitch, 300);
        prop_assert!(finite, "output must stay finite (stiffness={stiffness})");
        prop_assert!(peak < 1.0e6, "peak {peak} looks like a runaway loop");
    }
}
