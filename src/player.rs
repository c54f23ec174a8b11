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
use std::{error::Error, fmt, path::Path, sync::Arc};

pub mod command;
pub mod mock;

/// A handle to an in-flight playback. It's the caller's responsibility to
/// either wait on the handle or stop it.
pub trait Handle: Send {
    /// Stops playback. Stopping an already finished playback is a no-op.
    fn stop(&mut self) -> Result<(), Box<dyn Error>>;

    /// Blocks until playback finishes on its own.
    fn wait(&mut self) -> Result<(), Box<dyn Error>>;
}

pub trait Device: fmt::Display + Send + Sync {
    /// Starts playing the given WAV file, returning a handle the caller can
    /// stop or wait on.
    fn play(&self, path: &Path) -> Result<Box<dyn Handle>, Box<dyn Error>>;
}

/// Gets a playback device. A name starting with `mock` returns a mock device;
/// any other name is treated as a player program on the PATH. With no name,
/// the platform default players are probed.
pub fn get_device(name: Option<&str>) -> Result<Arc<dyn Device>, Box<dyn Error>> {
    match name {
        Some(name) if name.starts_with("mock") => Ok(Arc::new(mock::Device::get(name))),
        Some(name) => Ok(Arc::new(command::Device::new(name))),
        None => Ok(Arc::new(command::Device::detect()?)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_device_dispatches_mock_names() {
        let device = get_device(Some("mock-player")).expect("expected device");
        assert_eq!(format!("{}", device), "mock-player (Mock)");
    }

    #[test]
    fn test_get_device_uses_explicit_program() {
        let device = get_device(Some("my-player")).expect("expected device");
        assert_eq!(format!("{}", device), "my-player (Command)");
    }
}
