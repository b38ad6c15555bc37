//! File-based processing command.

use crate::commands::common::{load_preset, parse_key_val, peak, rms};
use crate::wav::{WavSpec, read_wav, write_wav};
use clap::Args;
use imager_utility::{
    ParamKey, ParameterSet, ProcessSpec, ProcessorSettings, UtilityProcessor, linear_to_db,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file (mono or stereo)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Preset name or TOML file, applied before any --set
    #[arg(short, long)]
    preset: Option<String>,

    /// Parameter override (e.g., "Width=150", "Mode=Swap", "BassMono=on")
    #[arg(long = "set", value_name = "ID=VALUE", value_parser = parse_key_val)]
    set: Vec<(String, String)>,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32", value_parser = parse_bit_depth)]
    bit_depth: u16,
}

fn parse_bit_depth(s: &str) -> Result<u16, String> {
    match s.parse::<u16>() {
        Ok(bits @ (16 | 24 | 32)) => Ok(bits),
        _ => Err(format!("unsupported bit depth '{s}' (expected 16, 24 or 32)")),
    }
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let (input, spec) = read_wav(&args.input)?;
    let frames = input.first().map_or(0, Vec::len);

    println!(
        "  {} frames, {} channel(s), {} Hz, {:.2}s",
        frames,
        spec.channels,
        spec.sample_rate,
        frames as f32 / spec.sample_rate as f32
    );

    let params = ParameterSet::new();
    let mut settings = ProcessorSettings::default();

    if let Some(name) = &args.preset {
        let preset = load_preset(name)?;
        println!("Loading preset: {}", preset.name);
        preset.apply(&params)?;
        settings = preset.processor_settings()?;
    }

    for (id, value) in &args.set {
        params.set_from_str(id, value)?;
    }

    let changed: Vec<String> = ParamKey::ALL
        .into_iter()
        .filter(|&key| params.get(key) != key.descriptor().default)
        .map(|key| format!("{}={}", key.string_id(), params.display(key)))
        .collect();
    if changed.is_empty() {
        println!("Parameters: all defaults");
    } else {
        println!("Parameters: {}", changed.join(", "));
    }

    let mut processor = UtilityProcessor::with_settings(params, settings);
    processor.prepare(ProcessSpec::new(
        spec.sample_rate as f32,
        args.block_size,
        input.len(),
    ))?;

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let mut output = input.clone();
    let mut start = 0;
    while start < frames {
        let end = (start + args.block_size).min(frames);
        let mut block: Vec<&mut [f32]> = output
            .iter_mut()
            .map(|channel| &mut channel[start..end])
            .collect();
        processor.process(&mut block);
        pb.set_position(end as u64);
        start = end;
    }
    pb.finish_with_message("done");
    processor.release();

    println!("\nStats:");
    for (i, (dry, wet)) in input.iter().zip(&output).enumerate() {
        let label = match (input.len(), i) {
            (1, _) => "Mono",
            (_, 0) => "Left",
            _ => "Right",
        };
        println!(
            "  {label:5} in:  RMS {:.1} dB, Peak {:.1} dB",
            linear_to_db(rms(dry)),
            linear_to_db(peak(dry))
        );
        println!(
            "  {label:5} out: RMS {:.1} dB, Peak {:.1} dB",
            linear_to_db(rms(wet)),
            linear_to_db(peak(wet))
        );
    }

    let out_spec = WavSpec {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: args.bit_depth,
    };

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &output, out_spec)?;
    println!("Done!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_depths() {
        assert_eq!(parse_bit_depth("16"), Ok(16));
        assert_eq!(parse_bit_depth("24"), Ok(24));
        assert_eq!(parse_bit_depth("32"), Ok(32));
        assert!(parse_bit_depth("8").is_err());
        assert!(parse_bit_depth("loud").is_err());
    }
}
