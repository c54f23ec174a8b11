// Copyright (C) 2026 The parisplay authors
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
mod config;
mod encoder;
mod player;
mod schedule;
mod synth;
mod util;
mod wav;

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::{crate_version, Args, Parser, Subcommand};
use tracing::info;

use config::Settings;
use synth::Params;

#[derive(Parser)]
#[clap(
    version = crate_version!(),
    about = "A PARIS timing-schedule tone player and exporter."
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

/// Synthesis options shared by the play and export commands. Command line
/// flags override the settings file, which overrides the built-in defaults.
#[derive(Args)]
struct SynthArgs {
    /// The path to a YAML settings file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// The tone frequency in Hz.
    #[arg(short, long)]
    frequency: Option<f64>,
    /// The output sample rate in Hz.
    #[arg(short, long)]
    sample_rate: Option<u32>,
    /// The output volume, from 0.0 to 1.0.
    #[arg(short, long)]
    volume: Option<f64>,
    /// The click suppression ramp in milliseconds.
    #[arg(short, long)]
    ramp: Option<f64>,
}

impl SynthArgs {
    /// Resolves the effective parameters and settings.
    fn resolve(&self) -> Result<(Params, Settings), Box<dyn Error>> {
        let settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        let mut params = settings.params();
        if let Some(frequency) = self.frequency {
            params.frequency = frequency;
        }
        if let Some(sample_rate) = self.sample_rate {
            params.sample_rate = sample_rate;
        }
        if let Some(volume) = self.volume {
            params.volume = volume;
        }
        if let Some(ramp) = self.ramp {
            params.ramp = ramp;
        }
        Ok((params, settings))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parses a schedule file and prints a summary of it.
    Info {
        /// The path to the schedule file.
        schedule: PathBuf,
    },
    /// Synthesizes a schedule and plays it through the system player.
    Play {
        /// The path to the schedule file.
        schedule: PathBuf,
        /// The player program to use. Defaults to the first platform player
        /// found on the PATH.
        #[arg(short, long)]
        player: Option<String>,
        #[command(flatten)]
        synth: SynthArgs,
    },
    /// Synthesizes a schedule and writes it to a WAV file.
    ExportWav {
        /// The path to the schedule file.
        schedule: PathBuf,
        /// The path of the WAV file to write.
        output: PathBuf,
        #[command(flatten)]
        synth: SynthArgs,
    },
    /// Synthesizes a schedule and encodes it to an MP3 file using an
    /// external encoder (ffmpeg or lame).
    ExportMp3 {
        /// The path to the schedule file.
        schedule: PathBuf,
        /// The path of the MP3 file to write.
        output: PathBuf,
        #[command(flatten)]
        synth: SynthArgs,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { schedule } => {
            let segments = schedule::load_schedule(&schedule)?;

            let total_ms: u64 = segments.iter().map(|s| s.duration_ms).sum();
            let tone_ms: u64 = segments
                .iter()
                .filter(|s| s.active)
                .map(|s| s.duration_ms)
                .sum();
            println!("Schedule: {}", schedule.display());
            println!("- Rows: {}", segments.len());
            println!(
                "- Tone: {}",
                util::duration_minutes_seconds(Duration::from_millis(tone_ms))
            );
            println!(
                "- Total: {}",
                util::duration_minutes_seconds(Duration::from_millis(total_ms))
            );
        }
        Commands::Play {
            schedule,
            player,
            synth,
        } => {
            let segments = schedule::load_schedule(&schedule)?;
            let (params, settings) = synth.resolve()?;
            let pcm = synth::synthesize(&segments, &params);

            let device = player::get_device(player.as_deref().or(settings.player()))?;

            let dir = tempfile::Builder::new().prefix("parisplay-").tempdir()?;
            let wav_path = dir.path().join("preview.wav");
            wav::write_wav(&wav_path, &pcm)?;

            info!(
                device = format!("{}", device),
                duration = format!("{:.2}s", pcm.duration_secs()),
                "Playing schedule."
            );
            let mut handle = device.play(&wav_path)?;
            handle.wait()?;
        }
        Commands::ExportWav {
            schedule,
            output,
            synth,
        } => {
            let segments = schedule::load_schedule(&schedule)?;
            let (params, _) = synth.resolve()?;
            let pcm = synth::synthesize(&segments, &params);
            wav::write_wav(&output, &pcm)?;
            println!(
                "WAV written: {} ({:.2}s)",
                output.display(),
                pcm.duration_secs()
            );
        }
        Commands::ExportMp3 {
            schedule,
            output,
            synth,
        } => {
            let segments = schedule::load_schedule(&schedule)?;
            let (params, _) = synth.resolve()?;
            let pcm = synth::synthesize(&segments, &params);
            encoder::export_mp3(&pcm, &output)?;
            println!(
                "MP3 written: {} ({:.2}s)",
                output.display(),
                pcm.duration_secs()
            );
        }
    }

    Ok(())
}
