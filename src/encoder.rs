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
use std::error::Error;
use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::synth::Pcm;
use crate::wav;

/// The lossy encoders probed on the PATH, in preference order.
enum Encoder {
    Ffmpeg,
    Lame,
}

impl Encoder {
    fn detect() -> Result<Encoder, Box<dyn Error>> {
        if which::which("ffmpeg").is_ok() {
            return Ok(Encoder::Ffmpeg);
        }
        if which::which("lame").is_ok() {
            return Ok(Encoder::Lame);
        }
        Err("MP3 export needs ffmpeg or lame on the PATH".into())
    }
}

/// Exports a PCM buffer as MP3 by writing a temporary WAV and handing it to
/// an external encoder. The core contract ends at the WAV; everything past
/// that is the encoder's business.
pub fn export_mp3(pcm: &Pcm, output: &Path) -> Result<(), Box<dyn Error>> {
    let encoder = Encoder::detect()?;

    let dir = tempfile::Builder::new().prefix("parisplay-").tempdir()?;
    let wav_path = dir.path().join("export.wav");
    wav::write_wav(&wav_path, pcm)?;

    let status = match encoder {
        Encoder::Ffmpeg => {
            info!(output = output.display().to_string(), "Encoding with ffmpeg.");
            Command::new("ffmpeg")
                .arg("-y")
                .args(["-loglevel", "error"])
                .arg("-i")
                .arg(&wav_path)
                .arg(output)
                .status()?
        }
        Encoder::Lame => {
            info!(output = output.display().to_string(), "Encoding with lame.");
            Command::new("lame")
                .arg("--quiet")
                .arg(&wav_path)
                .arg(output)
                .status()?
        }
    };

    if !status.success() {
        return Err(format!("MP3 encoder exited with {}", status).into());
    }
    Ok(())
}
