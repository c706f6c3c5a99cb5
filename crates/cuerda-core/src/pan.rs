//! Equal-power panning.
//!
//! Pan positions are normalized to `[0, 1]` (0 = left, 1 = right). Gains
//! follow an equal-power law, evaluated with a polynomial `sin`
//! approximation instead of trigonometry at audio rate. The extremes and
//! the center are special-cased so they are exact rather than
//! approximation-accurate: a hard-left string must contribute the left
//! channel bit-for-bit.

use core::f32::consts::FRAC_PI_2;

/// Equal-power gain for an angle `theta` in `[0, π/2]`.
///
/// A fifth-order Taylor approximation of `sin(theta)` scaled by `√2`, so the
/// center position (`theta = π/4`) yields unity gain. Cheap enough to
/// evaluate per sample.
#[inline]
pub fn equal_power_gain(theta: f32) -> f32 {
    (theta + (theta * theta * theta) * (-0.166666667 + theta * theta * 0.00833333333)) * 1.414213562
}

/// Mix a stereo input down to one mono feed at a pan position.
///
/// Exact at the special positions: pan 0 returns `left`, pan 1 returns
/// `right`, pan 0.5 returns `left + right`. Elsewhere the two channels are
/// blended with equal-power gains.
#[inline]
pub fn balanced_mono_sum(pan: f32, left: f32, right: f32) -> f32 {
    if pan == 0.5 {
        left + right
    } else if pan == 0.0 {
        left
    } else if pan == 1.0 {
        right
    } else {
        let r_theta = pan * FRAC_PI_2;
        let l_theta = FRAC_PI_2 - r_theta;
        left * equal_power_gain(l_theta) + right * equal_power_gain(r_theta)
    }
}

/// Spread a mono signal to stereo at a pan position.
///
/// Exact at the special positions: pan 0 yields `(mono, 0)`, pan 1 yields
/// `(0, mono)`, pan 0.5 yields `(mono, mono)`.
#[inline]
pub fn pan_to_stereo(pan: f32, mono: f32) -> (f32, f32) {
    if pan == 0.5 {
        (mono, mono)
    } else if pan == 0.0 {
        (mono, 0.0)
    } else if pan == 1.0 {
        (0.0, mono)
    } else {
        let r_theta = pan * FRAC_PI_2;
        let l_theta = FRAC_PI_2 - r_theta;
        (mono * equal_power_gain(l_theta), mono * equal_power_gain(r_theta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_is_unity_at_center() {
        let g = equal_power_gain(FRAC_PI_2 / 2.0);
        assert!((g - 1.0).abs() < 1e-3, "Center gain should be ~1, got {g}");
    }

    #[test]
    fn gain_tracks_scaled_sine() {
        for i in 0..=16 {
            let theta = FRAC_PI_2 * i as f32 / 16.0;
            let exact = libm::sinf(theta) * core::f32::consts::SQRT_2;
            let approx = equal_power_gain(theta);
            assert!(
                (approx - exact).abs() < 2e-3,
                "theta={theta}: approx {approx} vs exact {exact}"
            );
        }
    }

    #[test]
    fn mono_sum_extremes_are_exact() {
        assert_eq!(balanced_mono_sum(0.0, 0.3, 0.9), 0.3);
        assert_eq!(balanced_mono_sum(1.0, 0.3, 0.9), 0.9);
        assert_eq!(balanced_mono_sum(0.5, 0.3, 0.9), 0.3 + 0.9);
    }

    #[test]
    fn pan_extremes_are_exact() {
        assert_eq!(pan_to_stereo(0.0, 0.7), (0.7, 0.0));
        assert_eq!(pan_to_stereo(1.0, 0.7), (0.0, 0.7));
        assert_eq!(pan_to_stereo(0.5, 0.7), (0.7, 0.7));
    }

    #[test]
    fn off_center_pan_preserves_power() {
        // Equal-power law: gL² + gR² ≈ 2 (the √2 scaling doubles the power sum)
        for pan in [0.1, 0.25, 0.4, 0.6, 0.75, 0.9] {
            let (l, r) = pan_to_stereo(pan, 1.0);
            let power = l * l + r * r;
            assert!(
                (power - 2.0).abs() < 0.01,
                "pan={pan}: power sum {power} should be ~2"
            );
        }
    }

    #[test]
    fn mono_sum_extreme_sits_sqrt2_below_curve() {
        // The exact special case drops the √2 equal-power scaling; hard-left
        // must be the untouched left channel, not a boosted one.
        let near_left = balanced_mono_sum(1e-4, 0.5, 0.5);
        let at_left = balanced_mono_sum(0.0, 0.5, 0.5);
        assert_eq!(at_left, 0.5);
        assert!((near_left - at_left * core::f32::consts::SQRT_2).abs() < 0.01);
    }
}
