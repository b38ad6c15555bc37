//! Parameter listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use imager_utility::{DESCRIPTORS, ParamDescriptor, ParamKind};
use serde::Serialize;

#[derive(Args)]
pub struct ParamsArgs {
    /// Print the table as JSON
    #[arg(long)]
    json: bool,
}

/// One row of the listing.
#[derive(Debug, Serialize)]
struct ParamRow {
    id: &'static str,
    param_id: u32,
    name: &'static str,
    group: &'static str,
    kind: &'static str,
    min: f32,
    max: f32,
    step: f32,
    default: f32,
    unit: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    labels: Vec<&'static str>,
}

impl From<&ParamDescriptor> for ParamRow {
    fn from(desc: &ParamDescriptor) -> Self {
        let (kind, labels) = match desc.kind {
            ParamKind::Float => ("float", Vec::new()),
            ParamKind::Toggle => ("toggle", vec!["Off", "On"]),
            ParamKind::Choice(labels) => ("choice", labels.to_vec()),
        };
        Self {
            id: desc.string_id,
            param_id: desc.id.0,
            name: desc.name,
            group: desc.group,
            kind,
            min: desc.min,
            max: desc.max,
            step: desc.step,
            default: desc.default,
            unit: desc.unit.suffix().trim(),
            labels,
        }
    }
}

impl ParamRow {
    fn range(&self) -> String {
        if self.labels.is_empty() {
            format!("{} to {}{}", self.min, self.max, suffix(self.unit))
        } else {
            self.labels.join(" / ")
        }
    }

    fn default_display(&self) -> String {
        self.labels.get(self.default as usize).map_or_else(
            || format!("{}{}", self.default, suffix(self.unit)),
            |label| (*label).to_string(),
        )
    }
}

fn suffix(unit: &str) -> String {
    match unit {
        "" => String::new(),
        "%" => "%".to_string(),
        other => format!(" {other}"),
    }
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    let rows: Vec<ParamRow> = DESCRIPTORS.iter().map(ParamRow::from).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Parameters");
    println!("==========");
    println!();
    println!(
        "  {:20}  {:5}  {:10}  {:26}  {}",
        "Id", "Num", "Group", "Range", "Default"
    );
    println!(
        "  {:20}  {:5}  {:10}  {:26}  {}",
        "--", "---", "-----", "-----", "-------"
    );
    for row in &rows {
        println!(
            "  {:20}  {:5}  {:10}  {:26}  {}",
            row.id,
            row.param_id,
            row.group,
            row.range(),
            row.default_display()
        );
    }
    println!();
    println!("Set values with: imager process in.wav out.wav --set Width=150 --set Mode=Swap");

    Ok(())
}
