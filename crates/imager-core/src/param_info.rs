//! Parameter metadata.
//!
//! A [`ParamDescriptor`] carries everything a host, a preset file, or a
//! command-line front end needs to know about one control value: display
//! names, unit, range, default, step grid, normalization curve, and a stable
//! numeric [`ParamId`] for automation.
//!
//! Three value kinds are modelled by [`ParamKind`]. All of them are stored as
//! `f32` so one atomic cell type can hold any parameter:
//!
//! - **Float**: continuous within `[min, max]`, snapped to `step` when `step > 0`
//! - **Toggle**: `0.0` or `1.0`, thresholded at `0.5`
//! - **Choice**: an index into a fixed label list
//!
//! # Example
//!
//! ```rust
//! use imager_core::{ParamDescriptor, ParamId, ParamUnit};
//!
//! let gain = ParamDescriptor::float("Gain", "Gain", ParamUnit::Decibels, -50.0, 50.0, 0.0)
//!     .with_step(1.0)
//!     .with_id(ParamId(100), "Gain");
//!
//! assert_eq!(gain.quantize(3.4), 3.0);
//! assert_eq!(gain.quantize(80.0), 50.0);
//! ```

/// Scaling curve for parameter normalization.
///
/// Determines how a plain value maps to normalized \[0.0, 1.0\] space.
///
/// - **Linear**: `normalized = (value - min) / (max - min)`
/// - **Logarithmic**: `normalized = ln(value/min) / ln(max/min)`
/// - **Power(exp)**: `normalized = ((value - min) / (max - min)).powf(1.0 / exp)`
///
/// A skew factor `s` (`normalized = proportion^s`) is `Power(1.0 / s)`:
/// a skew of 0.4 is `Power(2.5)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParamScale {
    /// Equal resolution across the range.
    #[default]
    Linear,
    /// More resolution at low values. Requires `min > 0.0`.
    Logarithmic,
    /// Power curve. `exp > 1.0` gives more resolution at the low end.
    Power(f32),
}

/// Stable parameter identifier for host automation.
///
/// Once assigned a `ParamId` never changes for a given parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for host communication.
///
/// ```rust
/// use imager_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
/// assert!(flags.contains(ParamFlags::STEPPED));
/// assert!(!flags.contains(ParamFlags::HIDDEN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Host can automate this parameter.
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter has discrete steps.
    pub const STEPPED: Self = Self(1 << 1);
    /// Parameter should be hidden from generic host UI.
    pub const HIDDEN: Self = Self(1 << 2);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// The value domain of a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    /// Continuous value in `[min, max]`.
    Float,
    /// Off (`0.0`) or on (`1.0`).
    Toggle,
    /// Index into a fixed list of labels.
    Choice(&'static [&'static str]),
}

/// Describes a single parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full display name.
    pub name: &'static str,
    /// Short name for narrow displays, at most 8 characters.
    pub short_name: &'static str,
    /// Unit used when formatting values.
    pub unit: ParamUnit,
    /// Value domain.
    pub kind: ParamKind,
    /// Minimum plain value.
    pub min: f32,
    /// Maximum plain value.
    pub max: f32,
    /// Value at construction.
    pub default: f32,
    /// Step grid. `0.0` means continuous.
    pub step: f32,
    /// Stable numeric ID for host automation.
    pub id: ParamId,
    /// Stable textual ID used by presets and the command line.
    pub string_id: &'static str,
    /// Normalization curve.
    pub scale: ParamScale,
    /// Host capability flags.
    pub flags: ParamFlags,
    /// Group name for host tree display. Empty means top-level.
    pub group: &'static str,
}

impl ParamDescriptor {
    /// Continuous parameter with no step grid.
    pub const fn float(
        name: &'static str,
        short_name: &'static str,
        unit: ParamUnit,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit,
            kind: ParamKind::Float,
            min,
            max,
            default,
            step: 0.0,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE,
            group: "",
        }
    }

    /// On/off parameter.
    pub const fn toggle(name: &'static str, short_name: &'static str, default: bool) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            kind: ParamKind::Toggle,
            min: 0.0,
            max: 1.0,
            default: if default { 1.0 } else { 0.0 },
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED),
            group: "",
        }
    }

    /// Discrete choice among `labels`; `default` is an index.
    pub const fn choice(
        name: &'static str,
        short_name: &'static str,
        labels: &'static [&'static str],
        default: usize,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            kind: ParamKind::Choice(labels),
            min: 0.0,
            max: (labels.len() - 1) as f32,
            default: default as f32,
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED),
            group: "",
        }
    }

    /// Sets the stable numeric and textual IDs.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the step grid.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Sets the normalization scale.
    pub const fn with_scale(mut self, scale: ParamScale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the host flags.
    pub const fn with_flags(mut self, flags: ParamFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the group.
    pub const fn with_group(mut self, group: &'static str) -> Self {
        self.group = group;
        self
    }

    /// Clamps a value to `[min, max]`.
    ///
    /// ```rust
    /// use imager_core::{ParamDescriptor, ParamUnit};
    ///
    /// let desc = ParamDescriptor::float("Width", "Width", ParamUnit::Percent, 0.0, 400.0, 100.0);
    /// assert_eq!(desc.clamp(-5.0), 0.0);
    /// assert_eq!(desc.clamp(500.0), 400.0);
    /// ```
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

    /// Clamps and snaps a value onto this parameter's domain.
    ///
    /// Toggles threshold at `0.5`, choices round to the nearest index, and
    /// floats with a non-zero step round to the nearest grid point measured
    /// from `min`. NaN maps to the default.
    ///
    /// ```rust
    /// use imager_core::ParamDescriptor;
    ///
    /// let mono = ParamDescriptor::toggle("Mono", "Mono", false);
    /// assert_eq!(mono.quantize(0.49), 0.0);
    /// assert_eq!(mono.quantize(0.5), 1.0);
    ///
    /// let mode = ParamDescriptor::choice("Mode", "Mode", &["A", "B", "C"], 0);
    /// assert_eq!(mode.quantize(1.6), 2.0);
    /// assert_eq!(mode.quantize(9.0), 2.0);
    /// ```
    pub fn quantize(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        match self.kind {
            ParamKind::Toggle => {
                if value >= 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
            ParamKind::Choice(_) => libm::roundf(self.clamp(value)),
            ParamKind::Float if self.step > 0.0 => {
                let steps = libm::roundf((self.clamp(value) - self.min) / self.step);
                self.clamp(self.min + steps * self.step)
            }
            ParamKind::Float => self.clamp(value),
        }
    }

    /// Label for a toggle or choice value. `None` for floats.
    ///
    /// ```rust
    /// use imager_core::ParamDescriptor;
    ///
    /// let mode = ParamDescriptor::choice("Mode", "Mode", &["Stereo", "Left"], 0);
    /// assert_eq!(mode.label(1.0), Some("Left"));
    /// ```
    pub fn label(&self, value: f32) -> Option<&'static str> {
        match self.kind {
            ParamKind::Float => None,
            ParamKind::Toggle => Some(if value >= 0.5 { "On" } else { "Off" }),
            ParamKind::Choice(labels) => labels.get(self.quantize(value) as usize).copied(),
        }
    }

    /// Parses a label back to a value. Case-insensitive; toggles also accept
    /// `true`/`false`.
    pub fn value_for_label(&self, label: &str) -> Option<f32> {
        match self.kind {
            ParamKind::Float => None,
            ParamKind::Toggle => {
                if label.eq_ignore_ascii_case("on") || label.eq_ignore_ascii_case("true") {
                    Some(1.0)
                } else if label.eq_ignore_ascii_case("off") || label.eq_ignore_ascii_case("false")
                {
                    Some(0.0)
                } else {
                    None
                }
            }
            ParamKind::Choice(labels) => labels
                .iter()
                .position(|l| l.eq_ignore_ascii_case(label))
                .map(|i| i as f32),
        }
    }

    /// Converts a plain value to normalized \[0.0, 1.0\], honoring [`ParamScale`].
    ///
    /// ```rust
    /// use imager_core::{ParamDescriptor, ParamUnit};
    ///
    /// let desc = ParamDescriptor::float("Balance", "Bal", ParamUnit::None, -50.0, 50.0, 0.0);
    /// assert_eq!(desc.normalize(0.0), 0.5);
    /// ```
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        let value = self.clamp(value);
        match self.scale {
            ParamScale::Linear => (value - self.min) / range,
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return 0.0;
                }
                libm::logf(value / self.min) / libm::logf(self.max / self.min)
            }
            ParamScale::Power(exp) => libm::powf((value - self.min) / range, 1.0 / exp),
        }
    }

    /// Converts a normalized value back to the plain range.
    ///
    /// Inverse of [`normalize`](Self::normalize).
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        let normalized = normalized.clamp(0.0, 1.0);
        match self.scale {
            ParamScale::Linear => self.min + normalized * (self.max - self.min),
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return self.min;
                }
                self.min * libm::powf(self.max / self.min, normalized)
            }
            ParamScale::Power(exp) => {
                self.min + libm::powf(normalized, exp) * (self.max - self.min)
            }
        }
    }
}

/// Unit type for parameter display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Decibels.
    Decibels,
    /// Hertz.
    Hertz,
    /// Percentage.
    Percent,
    /// Dimensionless.
    None,
}

impl ParamUnit {
    /// Suffix appended to a formatted value.
    ///
    /// ```rust
    /// use imager_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Decibels.suffix(), " dB");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Decibels => " dB",
            ParamUnit::Hertz => " Hz",
            ParamUnit::Percent => "%",
            ParamUnit::None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: &[&str] = &["Stereo", "Left", "Right", "Swap"];

    fn width() -> ParamDescriptor {
        ParamDescriptor::float("Width", "Width", ParamUnit::Percent, 0.0, 400.0, 100.0)
            .with_step(1.0)
            .with_scale(ParamScale::Power(2.5))
    }

    #[test]
    fn float_quantize_snaps_to_grid() {
        let desc = width();
        assert_eq!(desc.quantize(99.6), 100.0);
        assert_eq!(desc.quantize(-3.0), 0.0);
        assert_eq!(desc.quantize(1000.0), 400.0);
    }

    #[test]
    fn continuous_float_only_clamps() {
        let desc = ParamDescriptor::float("X", "X", ParamUnit::None, 0.0, 1.0, 0.5);
        assert_eq!(desc.quantize(0.123), 0.123);
    }

    #[test]
    fn nan_quantizes_to_default() {
        assert_eq!(width().quantize(f32::NAN), 100.0);
    }

    #[test]
    fn toggle_and_choice_are_stepped() {
        let toggle = ParamDescriptor::toggle("Mute", "Mute", false);
        let choice = ParamDescriptor::choice("Mode", "Mode", MODES, 0);
        assert!(toggle.flags.contains(ParamFlags::STEPPED));
        assert!(choice.flags.contains(ParamFlags::STEPPED));
        assert_eq!(choice.max, 3.0);
    }

    #[test]
    fn choice_labels_roundtrip() {
        let choice = ParamDescriptor::choice("Mode", "Mode", MODES, 0);
        for (i, label) in MODES.iter().enumerate() {
            assert_eq!(choice.label(i as f32), Some(*label));
            assert_eq!(choice.value_for_label(label), Some(i as f32));
        }
        assert_eq!(choice.value_for_label("swap"), Some(3.0));
        assert_eq!(choice.value_for_label("Center"), None);
    }

    #[test]
    fn toggle_labels() {
        let toggle = ParamDescriptor::toggle("DC", "DC", true);
        assert_eq!(toggle.default, 1.0);
        assert_eq!(toggle.label(1.0), Some("On"));
        assert_eq!(toggle.label(0.0), Some("Off"));
        assert_eq!(toggle.value_for_label("TRUE"), Some(1.0));
        assert_eq!(toggle.value_for_label("maybe"), None);
        assert_eq!(width().label(10.0), None);
    }

    #[test]
    fn linear_normalization() {
        let desc = ParamDescriptor::float("Bal", "Bal", ParamUnit::None, -50.0, 50.0, 0.0);
        assert_eq!(desc.normalize(-50.0), 0.0);
        assert_eq!(desc.normalize(50.0), 1.0);
        assert_eq!(desc.denormalize(0.25), -25.0);
    }

    #[test]
    fn power_scale_matches_skew() {
        let desc = width();
        // Skew 0.4: half travel lands at 400 * 0.5^2.5.
        let half = desc.denormalize(0.5);
        assert!((half - 400.0 * libm::powf(0.5, 2.5)).abs() < 1e-3, "got {half}");
        let rt = desc.normalize(half);
        assert!((rt - 0.5).abs() < 1e-5);
        // Unity width sits well past a quarter of travel.
        assert!(desc.normalize(100.0) > 0.5);
    }

    #[test]
    fn logarithmic_roundtrip() {
        let desc = ParamDescriptor::float("Freq", "Freq", ParamUnit::Hertz, 20.0, 500.0, 120.0)
            .with_scale(ParamScale::Logarithmic);
        for &v in &[20.0, 120.0, 500.0] {
            let rt = desc.denormalize(desc.normalize(v));
            assert!((rt - v).abs() / v < 1e-4, "{v} -> {rt}");
        }
    }

    #[test]
    fn zero_range_normalizes_to_zero() {
        let desc = ParamDescriptor::float("Fixed", "Fixed", ParamUnit::None, 1.0, 1.0, 1.0);
        assert_eq!(desc.normalize(1.0), 0.0);
    }

    #[test]
    fn builders_set_fields() {
        let desc = ParamDescriptor::toggle("Mono", "Mono", false)
            .with_id(ParamId(7), "Mono")
            .with_group("stereo")
            .with_flags(ParamFlags::HIDDEN);
        assert_eq!(desc.id, ParamId(7));
        assert_eq!(desc.string_id, "Mono");
        assert_eq!(desc.group, "stereo");
        assert!(desc.flags.contains(ParamFlags::HIDDEN));
        assert!(!desc.flags.contains(ParamFlags::AUTOMATABLE));
    }
}
