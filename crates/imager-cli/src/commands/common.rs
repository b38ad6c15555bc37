//! Shared CLI helpers used across multiple commands.

use imager_config::Preset;

/// Parse a `key=value` string for clap's `value_parser`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!(
            "Invalid parameter format: '{}' (expected Id=value)",
            s
        )),
    }
}

/// Load a preset by path, user or system preset name, or factory preset.
pub fn load_preset(name: &str) -> anyhow::Result<Preset> {
    imager_config::load_preset(name).map_err(|e| {
        anyhow::anyhow!(
            "{}. Use 'imager presets list' to see available presets.",
            e
        )
    })
}

/// Root-mean-square level of `samples`.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

/// Largest absolute sample.
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}
