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
use std::{
    error::Error,
    fmt,
    path::Path,
    process::{Child, Command, Stdio},
};

use tracing::{debug, info};

use crate::player::Handle;

/// Player programs probed in order when none is configured.
#[cfg(target_os = "macos")]
const PLAYER_CANDIDATES: &[&str] = &["afplay"];
#[cfg(not(target_os = "macos"))]
const PLAYER_CANDIDATES: &[&str] = &["aplay", "paplay"];

/// Plays WAV files by spawning a command line system player.
pub struct Device {
    program: String,
}

impl Device {
    /// Creates a device around the given player program.
    pub fn new(program: &str) -> Device {
        Device {
            program: program.to_string(),
        }
    }

    /// Finds the first available platform player on the PATH.
    pub fn detect() -> Result<Device, Box<dyn Error>> {
        for candidate in PLAYER_CANDIDATES {
            if which::which(candidate).is_ok() {
                debug!(program = candidate, "Found system player.");
                return Ok(Device::new(candidate));
            }
        }
        Err(format!(
            "no system audio player found (looked for {})",
            PLAYER_CANDIDATES.join(", ")
        )
        .into())
    }
}

impl crate::player::Device for Device {
    fn play(&self, path: &Path) -> Result<Box<dyn Handle>, Box<dyn Error>> {
        info!(
            program = self.program,
            file = path.display().to_string(),
            "Playing."
        );
        let child = Command::new(&self.program)
            .arg(path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(Box::new(CommandHandle { child }))
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Command)", self.program)
    }
}

struct CommandHandle {
    child: Child,
}

impl Handle for CommandHandle {
    fn stop(&mut self) -> Result<(), Box<dyn Error>> {
        // Already exited playbacks need no signal.
        if self.child.try_wait()?.is_none() {
            self.child.kill()?;
            self.child.wait()?;
        }
        Ok(())
    }

    fn wait(&mut self) -> Result<(), Box<dyn Error>> {
        let status = self.child.wait()?;
        if !status.success() {
            return Err(format!("player exited with {}", status).into());
        }
        Ok(())
    }
}
