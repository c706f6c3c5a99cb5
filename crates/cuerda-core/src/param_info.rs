//! Parameter metadata for voice-effect hosts.
//!
//! Effects describe each parameter with a [`ParamDescriptor`] — range,
//! default, unit, and display names — so a host can build controls,
//! validate values, and persist state without knowing the effect. The DSP
//! core itself only ever consumes the resolved numeric values; descriptors
//! are a setup-time concern.
//!
//! # Example
//!
//! ```rust
//! use cuerda_core::{ParamDescriptor, ParamUnit};
//!
//! let offset = ParamDescriptor::custom("Offset One", "Offs 1", -48.0, 48.0, 0.0)
//!     .with_unit(ParamUnit::Semitones);
//!
//! assert_eq!(offset.clamp(60.0), 48.0);
//! assert_eq!(offset.normalize(0.0), 0.5);
//! ```

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Semitones - for pitch offsets.
    Semitones,
    /// Percentage (%) - for normalized and bipolar parameters.
    Percent,
    /// Hertz (Hz) - for frequency parameters.
    Hertz,
    /// Milliseconds (ms) - for time parameters.
    Milliseconds,
    /// Decibels (dB) - for gain and level parameters.
    Decibels,
    /// No unit - for dimensionless parameters.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Semitones => " st",
            ParamUnit::Percent => "%",
            ParamUnit::Hertz => " Hz",
            ParamUnit::Milliseconds => " ms",
            ParamUnit::Decibels => " dB",
            ParamUnit::None => "",
        }
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// The `short_name` field should be 8 characters or less for compatibility
/// with hardware displays. Bipolar parameters whose extremes mean something
/// other than a number (a pan's "L"/"R") can attach endpoint labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Offset One").
    pub name: &'static str,

    /// Short name for hardware displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value.
    pub min: f32,

    /// Maximum allowed value.
    pub max: f32,

    /// Default value when the effect is initialized or reset.
    pub default: f32,

    /// Recommended step increment for encoder-based control.
    pub step: f32,

    /// Display label for the minimum endpoint (e.g., "L" on a pan).
    pub min_label: Option<&'static str>,

    /// Display label for the maximum endpoint (e.g., "R" on a pan).
    pub max_label: Option<&'static str>,
}

impl ParamDescriptor {
    /// Descriptor with a custom name and range, dimensionless by default.
    pub const fn custom(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.01,
            min_label: None,
            max_label: None,
        }
    }

    /// Bipolar percent parameter spanning `[-1, 1]`.
    ///
    /// Used for pans and other centered controls.
    pub const fn percent_bipolar(
        name: &'static str,
        short_name: &'static str,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Percent,
            min: -1.0,
            max: 1.0,
            default,
            step: 0.01,
            min_label: None,
            max_label: None,
        }
    }

    /// Sets the unit. Builder pattern.
    pub const fn with_unit(mut self, unit: ParamUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the encoder step. Builder pattern.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Sets display labels for the range endpoints. Builder pattern.
    pub const fn with_endpoint_labels(
        mut self,
        min_label: &'static str,
        max_label: &'static str,
    ) -> Self {
        self.min_label = Some(min_label);
        self.max_label = Some(max_label);
        self
    }

    /// Clamps a value to this parameter's valid range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Converts a plain value to normalized range (0.0 to 1.0).
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        (value - self.min) / range
    }

    /// Converts a normalized value (0.0 to 1.0) to the actual range.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        self.min + normalized * (self.max - self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_descriptor() {
        let desc = ParamDescriptor::custom("Decay", "Decay", 0.0, 1.0, 0.8);
        assert_eq!(desc.name, "Decay");
        assert_eq!(desc.min, 0.0);
        assert_eq!(desc.max, 1.0);
        assert_eq!(desc.default, 0.8);
        assert_eq!(desc.unit, ParamUnit::None);
    }

    #[test]
    fn test_percent_bipolar() {
        let desc = ParamDescriptor::percent_bipolar("Pan One", "Pan 1", -1.0)
            .with_endpoint_labels("L", "R");
        assert_eq!(desc.min, -1.0);
        assert_eq!(desc.max, 1.0);
        assert_eq!(desc.default, -1.0);
        assert_eq!(desc.min_label, Some("L"));
        assert_eq!(desc.max_label, Some("R"));
    }

    #[test]
    fn test_clamp() {
        let desc = ParamDescriptor::custom("Offset", "Offs", -48.0, 48.0, 0.0);
        assert_eq!(desc.clamp(0.0), 0.0);
        assert_eq!(desc.clamp(-100.0), -48.0);
        assert_eq!(desc.clamp(100.0), 48.0);
    }

    #[test]
    fn test_normalize_denormalize() {
        let desc = ParamDescriptor::percent_bipolar("Pan", "Pan", 0.0);
        assert_eq!(desc.normalize(-1.0), 0.0);
        assert_eq!(desc.normalize(0.0), 0.5);
        assert_eq!(desc.normalize(1.0), 1.0);
        assert_eq!(desc.denormalize(0.5), 0.0);

        // Round-trip
        let original = 0.3;
        let rt = desc.denormalize(desc.normalize(original));
        assert!((rt - original).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_range() {
        let desc = ParamDescriptor::custom("Fixed", "Fixed", 42.0, 42.0, 42.0);
        assert_eq!(desc.normalize(42.0), 0.0);
    }

    #[test]
    fn test_unit_suffix() {
        assert_eq!(ParamUnit::Semitones.suffix(), " st");
        assert_eq!(ParamUnit::Percent.suffix(), "%");
        assert_eq!(ParamUnit::None.suffix(), "");
    }
}
