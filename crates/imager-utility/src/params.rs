//! The utility parameter set.
//!
//! Fourteen parameters, each addressed on the audio path by [`ParamKey`]
//! and on the control side by its string id. Values live in lock-free
//! atomic cells behind a cloneable [`ParameterSet`] handle; the processor
//! reads a [`ParamSnapshot`] once at the start of every block.
//!
//! | Id | Kind | Range | Default |
//! |----|------|-------|---------|
//! | `Gain` | dB | -50 to 50, step 1 | 0 |
//! | `Balance` | float | -50 to 50, step 1 | 0 |
//! | `Width` | % | 0 to 400, step 1, skewed | 100 |
//! | `MidSide` | float | -100 to 100, step 1 | 0 |
//! | `Mute` | toggle | | Off |
//! | `DC` | toggle | | Off |
//! | `Mono` | toggle | | Off |
//! | `BassMono` | toggle | | Off |
//! | `BassMonoCrossover` | Hz | 20 to 500, step 1 | 120 |
//! | `BassMonoPreview` | toggle | | Off |
//! | `InvertPhaseLeft` | toggle | | Off |
//! | `InvertPhaseRight` | toggle | | Off |
//! | `Mode` | choice | Stereo/Left/Right/Swap | Stereo |
//! | `MidSideMode` | toggle | | Off |

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use imager_core::{ParamDescriptor, ParamId, ParamKind, ParamScale, ParamUnit};

use crate::error::UtilityError;
use crate::ops::ChannelMode;
use crate::stereo_field::StereoField;

/// Number of parameters.
pub const PARAM_COUNT: usize = 14;

/// Typed parameter address. Discriminants index [`DESCRIPTORS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKey {
    /// Output gain in dB.
    Gain = 0,
    /// Left/right balance.
    Balance = 1,
    /// Stereo width in percent.
    Width = 2,
    /// Mid/side balance.
    MidSide = 3,
    /// Silence the output.
    Mute = 4,
    /// DC offset removal.
    Dc = 5,
    /// Collapse to mono.
    Mono = 6,
    /// Collapse only the low band to mono.
    BassMono = 7,
    /// Bass mono crossover in Hz.
    BassMonoCrossover = 8,
    /// Solo the mono low band.
    BassMonoPreview = 9,
    /// Invert left polarity.
    InvertPhaseLeft = 10,
    /// Invert right polarity.
    InvertPhaseRight = 11,
    /// Channel routing.
    Mode = 12,
    /// Use mid/side balance instead of width.
    MidSideMode = 13,
}

impl ParamKey {
    /// Every key in table order.
    pub const ALL: [Self; PARAM_COUNT] = [
        Self::Gain,
        Self::Balance,
        Self::Width,
        Self::MidSide,
        Self::Mute,
        Self::Dc,
        Self::Mono,
        Self::BassMono,
        Self::BassMonoCrossover,
        Self::BassMonoPreview,
        Self::InvertPhaseLeft,
        Self::InvertPhaseRight,
        Self::Mode,
        Self::MidSideMode,
    ];

    /// Position in [`DESCRIPTORS`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Static descriptor for this key.
    #[inline]
    pub fn descriptor(self) -> &'static ParamDescriptor {
        &DESCRIPTORS[self.index()]
    }

    /// Stable string id, e.g. `"BassMonoCrossover"`.
    pub fn string_id(self) -> &'static str {
        self.descriptor().string_id
    }

    /// Looks a key up by string id, ignoring ASCII case.
    pub fn from_string_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.string_id().eq_ignore_ascii_case(id))
    }

    /// Looks a key up by stable numeric id.
    pub fn from_param_id(id: ParamId) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.descriptor().id == id)
    }
}

/// Parameter descriptors, indexed by [`ParamKey`].
pub static DESCRIPTORS: [ParamDescriptor; PARAM_COUNT] = [
    ParamDescriptor::float("Gain", "Gain", ParamUnit::Decibels, -50.0, 50.0, 0.0)
        .with_step(1.0)
        .with_id(ParamId(100), "Gain")
        .with_group("Output"),
    ParamDescriptor::float("Balance", "Balance", ParamUnit::None, -50.0, 50.0, 0.0)
        .with_step(1.0)
        .with_id(ParamId(101), "Balance")
        .with_group("Output"),
    ParamDescriptor::float("Width", "Width", ParamUnit::Percent, 0.0, 400.0, 100.0)
        .with_step(1.0)
        .with_scale(ParamScale::Power(2.5))
        .with_id(ParamId(102), "Width")
        .with_group("Stereo"),
    ParamDescriptor::float("Mid/Side", "M/S", ParamUnit::None, -100.0, 100.0, 0.0)
        .with_step(1.0)
        .with_id(ParamId(103), "MidSide")
        .with_group("Stereo"),
    ParamDescriptor::toggle("Mute", "Mute", false)
        .with_id(ParamId(104), "Mute")
        .with_group("Output"),
    ParamDescriptor::toggle("DC Filter", "DC", false)
        .with_id(ParamId(105), "DC")
        .with_group("Output"),
    ParamDescriptor::toggle("Mono", "Mono", false)
        .with_id(ParamId(106), "Mono")
        .with_group("Stereo"),
    ParamDescriptor::toggle("Bass Mono", "BassMono", false)
        .with_id(ParamId(107), "BassMono")
        .with_group("Bass Mono"),
    ParamDescriptor::float("Bass Mono Crossover", "Xover", ParamUnit::Hertz, 20.0, 500.0, 120.0)
        .with_step(1.0)
        .with_id(ParamId(108), "BassMonoCrossover")
        .with_group("Bass Mono"),
    ParamDescriptor::toggle("Bass Mono Preview", "Preview", false)
        .with_id(ParamId(109), "BassMonoPreview")
        .with_group("Bass Mono"),
    ParamDescriptor::toggle("Invert Left", "Inv L", false)
        .with_id(ParamId(110), "InvertPhaseLeft")
        .with_group("Input"),
    ParamDescriptor::toggle("Invert Right", "Inv R", false)
        .with_id(ParamId(111), "InvertPhaseRight")
        .with_group("Input"),
    ParamDescriptor::choice("Mode", "Mode", ChannelMode::LABELS, 0)
        .with_id(ParamId(112), "Mode")
        .with_group("Input"),
    ParamDescriptor::toggle("Mid/Side Mode", "M/S Mode", false)
        .with_id(ParamId(113), "MidSideMode")
        .with_group("Stereo"),
];

/// Every parameter value for one block, read at block start.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ParamSnapshot {
    /// Output gain in dB.
    pub gain_db: f32,
    /// Balance, -50 to 50.
    pub balance: f32,
    /// Width, 0 to 400 %.
    pub width: f32,
    /// Mid/side balance, -100 to 100.
    pub mid_side: f32,
    /// Silence the output.
    pub mute: bool,
    /// Remove DC.
    pub dc: bool,
    /// Collapse to mono.
    pub mono: bool,
    /// Collapse the low band to mono.
    pub bass_mono: bool,
    /// Bass mono crossover in Hz.
    pub crossover_hz: f32,
    /// Solo the mono low band.
    pub bass_mono_preview: bool,
    /// Invert left polarity.
    pub invert_left: bool,
    /// Invert right polarity.
    pub invert_right: bool,
    /// Channel routing.
    pub mode: ChannelMode,
    /// Mid/side balance instead of width.
    pub mid_side_mode: bool,
}

impl ParamSnapshot {
    /// Builds a snapshot from raw values in table order.
    pub fn from_values(values: &[f32; PARAM_COUNT]) -> Self {
        let flag = |key: ParamKey| values[key.index()] >= 0.5;
        Self {
            gain_db: values[ParamKey::Gain.index()],
            balance: values[ParamKey::Balance.index()],
            width: values[ParamKey::Width.index()],
            mid_side: values[ParamKey::MidSide.index()],
            mute: flag(ParamKey::Mute),
            dc: flag(ParamKey::Dc),
            mono: flag(ParamKey::Mono),
            bass_mono: flag(ParamKey::BassMono),
            crossover_hz: values[ParamKey::BassMonoCrossover.index()],
            bass_mono_preview: flag(ParamKey::BassMonoPreview),
            invert_left: flag(ParamKey::InvertPhaseLeft),
            invert_right: flag(ParamKey::InvertPhaseRight),
            mode: ChannelMode::from_index(values[ParamKey::Mode.index()]),
            mid_side_mode: flag(ParamKey::MidSideMode),
        }
    }

    /// The stereo-field transform selected by this snapshot.
    pub fn stereo_field(&self) -> StereoField {
        StereoField::from_params(self.mid_side_mode, self.width, self.mid_side)
    }
}

impl Default for ParamSnapshot {
    fn default() -> Self {
        Self::from_values(&core::array::from_fn(|i| DESCRIPTORS[i].default))
    }
}

struct ParameterSetData {
    /// f32 bit patterns, indexed by [`ParamKey`].
    values: [AtomicU32; PARAM_COUNT],
}

/// Shared, lock-free parameter storage.
///
/// Clones share the same cells: a control thread writes through one handle
/// while the audio thread reads through another. Every write is clamped and
/// snapped to the parameter's step grid before it is stored.
#[derive(Clone)]
pub struct ParameterSet {
    inner: Arc<ParameterSetData>,
}

impl ParameterSet {
    /// A set holding every default value.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ParameterSetData {
                values: core::array::from_fn(|i| AtomicU32::new(DESCRIPTORS[i].default.to_bits())),
            }),
        }
    }

    /// Descriptors in table order.
    pub fn descriptors(&self) -> &'static [ParamDescriptor; PARAM_COUNT] {
        &DESCRIPTORS
    }

    /// Current plain value.
    #[inline]
    pub fn get(&self, key: ParamKey) -> f32 {
        f32::from_bits(self.inner.values[key.index()].load(Ordering::Acquire))
    }

    /// Current value of a toggle.
    #[inline]
    pub fn get_bool(&self, key: ParamKey) -> bool {
        self.get(key) >= 0.5
    }

    /// Current channel mode.
    pub fn mode(&self) -> ChannelMode {
        ChannelMode::from_index(self.get(ParamKey::Mode))
    }

    /// Stores `value` after clamping and quantizing it. Returns the value
    /// actually stored.
    pub fn set(&self, key: ParamKey, value: f32) -> f32 {
        let stored = key.descriptor().quantize(value);
        self.inner.values[key.index()].store(stored.to_bits(), Ordering::Release);
        stored
    }

    /// Stores a toggle.
    pub fn set_bool(&self, key: ParamKey, on: bool) {
        self.set(key, if on { 1.0 } else { 0.0 });
    }

    /// Stores a channel mode.
    pub fn set_mode(&self, mode: ChannelMode) {
        self.set(ParamKey::Mode, mode as u8 as f32);
    }

    /// Current value in the normalized 0–1 domain.
    pub fn get_normalized(&self, key: ParamKey) -> f32 {
        key.descriptor().normalize(self.get(key))
    }

    /// Stores a normalized 0–1 value.
    pub fn set_normalized(&self, key: ParamKey, normalized: f32) -> f32 {
        self.set(key, key.descriptor().denormalize(normalized))
    }

    /// Value by string id, or `None` for an unknown id.
    pub fn get_by_id(&self, id: &str) -> Option<f32> {
        ParamKey::from_string_id(id).map(|key| self.get(key))
    }

    /// Stores a value by string id.
    pub fn set_by_id(&self, id: &str, value: f32) -> Result<f32, UtilityError> {
        let key = ParamKey::from_string_id(id)
            .ok_or_else(|| UtilityError::UnknownParameter(id.to_string()))?;
        Ok(self.set(key, value))
    }

    /// Stores a value given as text: a number, or a label such as `On`,
    /// `Off` or `Swap`.
    pub fn set_from_str(&self, id: &str, text: &str) -> Result<f32, UtilityError> {
        let key = ParamKey::from_string_id(id)
            .ok_or_else(|| UtilityError::UnknownParameter(id.to_string()))?;
        let desc = key.descriptor();
        let text = text.trim();
        let value = match text.parse::<f32>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => desc.value_for_label(text),
        }
        .ok_or_else(|| UtilityError::InvalidValue {
            param: desc.string_id.to_string(),
            value: text.to_string(),
        })?;
        Ok(self.set(key, value))
    }

    /// Human-readable value, e.g. `"-6 dB"`, `"On"` or `"Swap"`.
    pub fn display(&self, key: ParamKey) -> String {
        let desc = key.descriptor();
        let value = self.get(key);
        match desc.kind {
            ParamKind::Toggle | ParamKind::Choice(_) => {
                desc.label(value).unwrap_or_default().to_string()
            }
            ParamKind::Float => format!("{value}{}", desc.unit.suffix()),
        }
    }

    /// Restores every default.
    pub fn reset_to_defaults(&self) {
        for key in ParamKey::ALL {
            self.set(key, key.descriptor().default);
        }
    }

    /// `(key, value)` for every parameter in table order.
    pub fn values(&self) -> impl Iterator<Item = (ParamKey, f32)> + '_ {
        ParamKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    /// Reads every value for one block.
    pub fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot::from_values(&core::array::from_fn(|i| self.get(ParamKey::ALL[i])))
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ParameterSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.values().map(|(key, value)| (key.string_id(), value)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_keys() {
        for key in ParamKey::ALL {
            assert_eq!(DESCRIPTORS[key.index()].string_id, key.string_id());
            assert_eq!(ParamKey::from_string_id(key.string_id()), Some(key));
            assert_eq!(ParamKey::from_param_id(key.descriptor().id), Some(key));
        }
    }

    #[test]
    fn string_ids_are_unique() {
        let mut ids: Vec<&str> = DESCRIPTORS.iter().map(|d| d.string_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PARAM_COUNT);
    }

    #[test]
    fn defaults() {
        let params = ParameterSet::new();
        assert_eq!(params.get(ParamKey::Gain), 0.0);
        assert_eq!(params.get(ParamKey::Width), 100.0);
        assert_eq!(params.get(ParamKey::BassMonoCrossover), 120.0);
        assert_eq!(params.mode(), ChannelMode::Stereo);
        assert!(!params.get_bool(ParamKey::Mute));
        assert_eq!(params.snapshot(), ParamSnapshot::default());
    }

    #[test]
    fn set_clamps_and_steps() {
        let params = ParameterSet::new();
        assert_eq!(params.set(ParamKey::Gain, 80.0), 50.0);
        assert_eq!(params.set(ParamKey::Gain, -3.4), -3.0);
        assert_eq!(params.set(ParamKey::BassMonoCrossover, 5.0), 20.0);
        assert_eq!(params.set(ParamKey::Mute, 0.7), 1.0);
        assert_eq!(params.set(ParamKey::Mode, 2.6), 3.0);
        assert_eq!(params.mode(), ChannelMode::Swap);
    }

    #[test]
    fn clones_share_cells() {
        let control = ParameterSet::new();
        let audio = control.clone();
        control.set(ParamKey::Width, 250.0);
        assert_eq!(audio.get(ParamKey::Width), 250.0);
    }

    #[test]
    fn string_access() {
        let params = ParameterSet::new();
        assert_eq!(params.set_by_id("balance", -12.0), Ok(-12.0));
        assert_eq!(params.get_by_id("Balance"), Some(-12.0));
        assert_eq!(params.get_by_id("Reverb"), None);
        assert_eq!(
            params.set_by_id("Reverb", 1.0),
            Err(UtilityError::UnknownParameter("Reverb".to_string()))
        );
    }

    #[test]
    fn set_from_text() {
        let params = ParameterSet::new();
        assert_eq!(params.set_from_str("Mode", "swap"), Ok(3.0));
        assert_eq!(params.set_from_str("BassMono", "On"), Ok(1.0));
        assert_eq!(params.set_from_str("Gain", " -6 "), Ok(-6.0));
        assert!(matches!(
            params.set_from_str("Width", "wide"),
            Err(UtilityError::InvalidValue { .. })
        ));
    }

    #[test]
    fn display_values() {
        let params = ParameterSet::new();
        params.set(ParamKey::Gain, -6.0);
        assert_eq!(params.display(ParamKey::Gain), "-6 dB");
        assert_eq!(params.display(ParamKey::Mute), "Off");
        params.set_mode(ChannelMode::Left);
        assert_eq!(params.display(ParamKey::Mode), "Left");
    }

    #[test]
    fn width_is_skewed() {
        let params = ParameterSet::new();
        params.set_normalized(ParamKey::Width, 0.5);
        let width = params.get(ParamKey::Width);
        // 400 * 0.5^2.5 ≈ 70.7, on the 1 % grid.
        assert_eq!(width, 71.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let params = ParameterSet::new();
        params.set(ParamKey::Gain, 12.0);
        params.set_bool(ParamKey::Mono, true);
        params.reset_to_defaults();
        assert_eq!(params.snapshot(), ParamSnapshot::default());
    }

    #[test]
    fn snapshot_selects_field() {
        let params = ParameterSet::new();
        params.set(ParamKey::Width, 0.0);
        assert_eq!(params.snapshot().stereo_field(), StereoField::Width(0.0));
        params.set_bool(ParamKey::MidSideMode, true);
        params.set(ParamKey::MidSide, 50.0);
        assert_eq!(params.snapshot().stereo_field(), StereoField::MidSide(0.5));
    }
}
