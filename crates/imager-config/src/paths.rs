//! Platform-specific paths for presets and configuration.
//!
//! # Directory Structure
//!
//! - **User presets**: `~/.config/imager/presets/` (Linux), `~/Library/Application Support/imager/presets/` (macOS), `%APPDATA%\imager\presets\` (Windows)
//! - **User config**: the parent of the user presets directory
//! - **System presets**: `/usr/share/imager/presets/` (Linux), `/Library/Application Support/imager/presets/` (macOS)
//!
//! # Example
//!
//! ```rust,no_run
//! use imager_config::paths;
//!
//! // File path, then user and system directories, then factory presets
//! let preset = paths::load_preset("bass_mono_120").unwrap();
//! println!("{}", preset.name);
//! ```

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::factory_presets::get_factory_preset;
use crate::preset::Preset;

/// Application name used for directory paths.
const APP_NAME: &str = "imager";

/// Subdirectory name for presets.
const PRESETS_SUBDIR: &str = "presets";

/// Returns the user-specific presets directory.
///
/// Falls back to `./imager/presets` if the config directory cannot be
/// determined.
pub fn user_presets_dir() -> PathBuf {
    user_config_dir().join(PRESETS_SUBDIR)
}

/// Returns the user-specific configuration directory.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the system-wide presets directory. Usually read-only.
pub fn system_presets_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        PathBuf::from("/usr/share").join(APP_NAME).join(PRESETS_SUBDIR)
    }
    #[cfg(target_os = "macos")]
    {
        PathBuf::from("/Library/Application Support")
            .join(APP_NAME)
            .join(PRESETS_SUBDIR)
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
            .join(PRESETS_SUBDIR)
    }
}

/// Find a preset file by name.
///
/// Searches in order:
/// 1. `name` itself, if it is an existing file
/// 2. The user presets directory
/// 3. The system presets directory
///
/// The `.toml` extension is added when missing.
pub fn find_preset(name: &str) -> Option<PathBuf> {
    find_preset_in(name, &[user_presets_dir(), system_presets_dir()])
}

fn find_preset_in(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };

    dirs.iter()
        .map(|dir| dir.join(&filename))
        .find(|candidate| candidate.is_file())
}

/// Loads a preset from a file path, a user or system preset name, or a
/// factory preset id or name, in that order.
pub fn load_preset(name: &str) -> Result<Preset, ConfigError> {
    if let Some(path) = find_preset(name) {
        return Preset::load(path);
    }
    get_factory_preset(name).ok_or_else(|| ConfigError::PresetNotFound(name.to_string()))
}

/// Ensure the user presets directory exists.
pub fn ensure_user_presets_dir() -> Result<PathBuf, ConfigError> {
    ensure_dir(user_presets_dir())
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf, ConfigError> {
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
    }
    Ok(dir)
}

/// Preset files in the user presets directory.
pub fn list_user_presets() -> Vec<PathBuf> {
    list_presets_in_dir(&user_presets_dir())
}

/// Preset files in the system presets directory.
pub fn list_system_presets() -> Vec<PathBuf> {
    list_presets_in_dir(&system_presets_dir())
}

/// User presets followed by system presets. Duplicate names are kept.
pub fn list_all_presets() -> Vec<PathBuf> {
    let mut presets = list_user_presets();
    presets.extend(list_system_presets());
    presets
}

/// `.toml` files directly inside `dir`, sorted. Empty if `dir` is unreadable.
pub fn list_presets_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut presets: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    presets.sort();
    presets
}

/// The file stem of `path`.
///
/// ```rust
/// use imager_config::paths::preset_name_from_path;
/// use std::path::Path;
///
/// let name = preset_name_from_path(Path::new("/path/to/wide_mix.toml"));
/// assert_eq!(name, Some("wide_mix".to_string()));
/// ```
pub fn preset_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
