//! Print spelled major scales.
//!
//! Without roots prints the major scale of every pitch of the chromatic
//! scale from C3.

use std::error::Error;

use clap::Parser;
use pitch_score::{
    notation::PitchNotation,
    primitives::{build_major_scale, chromatic_scale, MajorScale, Pitch},
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "pitch-score")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Roots as MIDI numbers (60) or scientific notation (C3, A4#, B4b)
    roots: Vec<String>,

    /// Print scales for every chromatic step from each root up to its octave
    #[arg(long)]
    chromatic: bool,

    /// Output JSON instead of plain lines
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ScaleReport {
    root: String,
    names: Vec<String>,
    midi: Vec<i32>,
}
impl From<&MajorScale> for ScaleReport {
    fn from(scale: &MajorScale) -> Self {
        Self {
            root: scale.root().name.clone(),
            names: scale.names().into_iter().map(String::from).collect(),
            midi: scale.pitches().iter().map(Pitch::midi).collect(),
        }
    }
}

fn parse_root(arg: &str) -> PitchNotation {
    match arg.parse::<i32>() {
        Ok(midi) => PitchNotation::Midi(midi),
        Err(_) => PitchNotation::Scientific(arg.to_string()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let (args, chromatic) = match cli.roots.is_empty() {
        true => (vec!["C3".to_string()], true),
        false => (cli.roots, cli.chromatic),
    };

    let mut roots = Vec::new();
    for arg in args.iter() {
        let root = parse_root(arg).into_pitch()?;
        match chromatic {
            true => roots.extend(chromatic_scale(root)?),
            false => roots.push(root),
        }
    }
    log::info!("building {} major scales", roots.len());

    let scales = roots
        .into_iter()
        .map(build_major_scale)
        .collect::<Result<Vec<_>, _>>()?;
    match cli.json {
        true => {
            let reports: Vec<ScaleReport> =
                scales.iter().map(ScaleReport::from).collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        false => {
            for scale in scales.iter() {
                println!("{scale}");
            }
        }
    }
    Ok(())
}
