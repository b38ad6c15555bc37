//! Preset management commands.

use crate::commands::common::{load_preset, parse_key_val};
use clap::{Args, Subcommand};
use imager_config::{
    Preset, ensure_user_presets_dir, factory_presets, list_user_presets, user_presets_dir,
};
use imager_utility::{ParamKey, ParameterSet};
use std::path::PathBuf;

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List available presets (factory and user)
    List {
        /// Show only factory presets
        #[arg(long)]
        factory: bool,

        /// Show only user presets
        #[arg(long)]
        user: bool,
    },

    /// Show details of a preset
    Show {
        /// Preset name or path
        name: String,

        /// Print the preset as TOML
        #[arg(long)]
        toml: bool,
    },

    /// Save parameter values as a preset
    Save {
        /// Name for the new preset
        name: String,

        /// Output file (defaults to the user presets directory)
        path: Option<PathBuf>,

        /// Start from an existing preset
        #[arg(long)]
        from: Option<String>,

        /// Parameter value (e.g., "Width=150")
        #[arg(long = "set", value_name = "ID=VALUE", value_parser = parse_key_val)]
        set: Vec<(String, String)>,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite if the file already exists
        #[arg(long)]
        force: bool,
    },

    /// Show preset directories
    Paths,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List { factory, user } => list_presets(factory, user),
        PresetsCommand::Show { name, toml } => show_preset(&name, toml),
        PresetsCommand::Save {
            name,
            path,
            from,
            set,
            description,
            force,
        } => save_preset(
            &name,
            path,
            from.as_deref(),
            &set,
            description.as_deref(),
            force,
        ),
        PresetsCommand::Paths => show_paths(),
    }
}

fn list_presets(factory_only: bool, user_only: bool) -> anyhow::Result<()> {
    if !user_only {
        println!("Factory Presets:");
        println!("================");
        for preset in factory_presets() {
            let desc = preset.description.as_deref().unwrap_or("");
            println!("  {:20} - {}", preset.name, desc);
        }
        println!();
    }

    if !factory_only {
        println!("User Presets:");
        println!("=============");
        let user_presets = list_user_presets();
        if user_presets.is_empty() {
            println!("  (none)");
            println!();
            println!("  Create a preset with: imager presets save <name> --set Width=150\n");
        } else {
            for path in user_presets {
                let name = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("unknown");

                match Preset::load(&path) {
                    Ok(preset) => {
                        let desc = preset.description.as_deref().unwrap_or("");
                        println!("  {:20} - {}", name, desc);
                    }
                    Err(_) => {
                        println!("  {:20} - (error loading)", name);
                    }
                }
            }
        }
        println!();
    }

    Ok(())
}

fn show_preset(name: &str, as_toml: bool) -> anyhow::Result<()> {
    let preset = load_preset(name)?;

    if as_toml {
        print!("{}", preset.to_toml()?);
        return Ok(());
    }

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(desc) = &preset.description {
        println!("Description: {}", desc);
        println!();
    }

    // Resolved through a parameter set so labels and quantization show as
    // the processor will see them.
    let params = ParameterSet::new();
    preset.apply(&params)?;

    println!("Parameters ({} set):", preset.len());
    for key in ParamKey::ALL {
        let marker = if preset.get(key.string_id()).is_some() {
            "*"
        } else {
            " "
        };
        println!("  {} {:20} {}", marker, key.string_id(), params.display(key));
    }
    println!();

    let settings = preset.processor_settings()?;
    println!("Settings:");
    println!("  pan_rule     {}", settings.pan_rule.name());
    println!("  gain_ramp_ms {}", settings.gain_ramp_ms);
    println!("  dc_cutoff_hz {}", settings.dc_cutoff_hz);

    Ok(())
}

fn save_preset(
    name: &str,
    path: Option<PathBuf>,
    from: Option<&str>,
    set: &[(String, String)],
    description: Option<&str>,
    force: bool,
) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path,
        None => ensure_user_presets_dir()?.join(format!("{name}.toml")),
    };

    if path.exists() && !force {
        anyhow::bail!(
            "Preset file '{}' already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let params = ParameterSet::new();
    let mut settings = None;
    if let Some(source) = from {
        let base = load_preset(source)?;
        base.apply(&params)?;
        settings = Some(base.settings);
    }
    for (id, value) in set {
        params.set_from_str(id, value)?;
    }

    let mut preset = Preset::capture(name, &params);
    if let Some(desc) = description {
        preset = preset.with_description(desc);
    }
    if let Some(settings) = settings {
        preset = preset.with_settings(settings);
    }

    preset.save(&path)?;
    println!("Saved preset '{}' to {}", name, path.display());

    Ok(())
}

fn show_paths() -> anyhow::Result<()> {
    println!("User presets:   {}", user_presets_dir().display());
    println!("System presets: {}", imager_config::system_presets_dir().display());
    Ok(())
}
