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
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use tracing::info;

use crate::player::Handle;

/// A mock device. Doesn't actually play anything.
#[derive(Clone)]
pub struct Device {
    name: String,
    is_playing: Arc<AtomicBool>,
    last_path: Arc<Mutex<Option<PathBuf>>>,
}

impl Device {
    /// Gets the given mock device.
    pub fn get(name: &str) -> Device {
        Device {
            name: name.to_string(),
            is_playing: Arc::new(AtomicBool::new(false)),
            last_path: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns true if the device is currently playing.
    #[cfg(test)]
    pub fn is_playing(&self) -> bool {
        self.is_playing.load(Ordering::Relaxed)
    }

    /// Returns the path most recently handed to play.
    #[cfg(test)]
    pub fn last_path(&self) -> Option<PathBuf> {
        self.last_path.lock().expect("Error getting lock").clone()
    }
}

impl crate::player::Device for Device {
    fn play(&self, path: &Path) -> Result<Box<dyn Handle>, Box<dyn Error>> {
        info!(
            device = self.name,
            file = path.display().to_string(),
            "Playing (mock)."
        );
        self.is_playing.store(true, Ordering::Relaxed);
        *self.last_path.lock().expect("Error getting lock") = Some(path.to_path_buf());
        Ok(Box::new(MockHandle {
            is_playing: self.is_playing.clone(),
        }))
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Mock)", self.name)
    }
}

struct MockHandle {
    is_playing: Arc<AtomicBool>,
}

impl Handle for MockHandle {
    fn stop(&mut self) -> Result<(), Box<dyn Error>> {
        self.is_playing.store(false, Ordering::Relaxed);
        Ok(())
    }

    fn wait(&mut self) -> Result<(), Box<dyn Error>> {
        self.is_playing.store(false, Ordering::Relaxed);
        Ok(())
    }
}
