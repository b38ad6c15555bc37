//! Factory presets bundled with the library.
//!
//! Always available without external files. Each one is a small, checkable
//! starting point: a mono fold-down for compatibility checks, a bass mono
//! setup, width extremes and routing tricks.

use crate::Preset;

/// Ids of every factory preset, in listing order.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "init",
    "mono_check",
    "bass_mono_120",
    "wide",
    "side_only",
    "swap",
    "left_only",
    "bass_preview",
];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init", INIT_PRESET),
    ("mono_check", MONO_CHECK_PRESET),
    ("bass_mono_120", BASS_MONO_120_PRESET),
    ("wide", WIDE_PRESET),
    ("side_only", SIDE_ONLY_PRESET),
    ("swap", SWAP_PRESET),
    ("left_only", LEFT_ONLY_PRESET),
    ("bass_preview", BASS_PREVIEW_PRESET),
];

/// Every parameter at its default.
const INIT_PRESET: &str = r#"
name = "Init"
description = "Transparent pass-through, every parameter at its default"

[params]
"#;

const MONO_CHECK_PRESET: &str = r#"
name = "Mono Check"
description = "Sum to mono to check phase compatibility"

[params]
Mono = true
"#;

const BASS_MONO_120_PRESET: &str = r#"
name = "Bass Mono 120"
description = "Everything below 120 Hz summed to mono, highs untouched"

[params]
BassMono = true
BassMonoCrossover = 120.0
"#;

const WIDE_PRESET: &str = r#"
name = "Wide"
description = "Side signal doubled, low end kept mono below 100 Hz"

[params]
Width = 200.0
BassMono = true
BassMonoCrossover = 100.0
"#;

const SIDE_ONLY_PRESET: &str = r#"
name = "Side Only"
description = "Mid removed, only the stereo difference remains"

[params]
MidSideMode = true
MidSide = 100.0
"#;

const SWAP_PRESET: &str = r#"
name = "Swap"
description = "Left and right exchanged"

[params]
Mode = "Swap"
"#;

const LEFT_ONLY_PRESET: &str = r#"
name = "Left Only"
description = "Left channel only, right channel silenced"

[params]
Mode = "Left"
"#;

/// Solo the summed low band to tune the crossover by ear.
const BASS_PREVIEW_PRESET: &str = r#"
name = "Bass Preview"
description = "Monitor only the mono low band below the crossover"

[params]
BassMono = true
BassMonoCrossover = 120.0
BassMonoPreview = true
"#;

/// All factory presets in listing order.
///
/// # Example
///
/// ```rust
/// use imager_config::factory_presets;
///
/// for preset in factory_presets() {
///     println!("{}: {}", preset.name, preset.description.as_deref().unwrap_or(""));
/// }
/// ```
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Looks a factory preset up by id (`"bass_mono_120"`) or display name
/// (`"Bass Mono 120"`), ignoring case.
///
/// ```rust
/// use imager_config::get_factory_preset;
///
/// let preset = get_factory_preset("mono check").unwrap();
/// assert_eq!(preset.name, "Mono Check");
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    if let Some((_, toml)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(name))
    {
        return Preset::from_toml(toml).ok();
    }

    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// Factory preset ids.
pub fn factory_preset_names() -> &'static [&'static str] {
    FACTORY_PRESET_NAMES
}

/// `true` if `name` matches a factory preset id or display name.
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}
