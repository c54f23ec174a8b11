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
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::synth::Params;

mod error;

pub use error::ConfigError;

/// A YAML representation of the synthesis and playback settings. Every field
/// is optional; unset fields fall back to the built-in defaults.
#[derive(Deserialize, Clone, Default)]
pub struct Settings {
    /// The tone frequency in Hz.
    frequency: Option<f64>,

    /// The output sample rate in Hz.
    sample_rate: Option<u32>,

    /// The output volume, from 0.0 to 1.0.
    volume: Option<f64>,

    /// The click-suppression ramp time in milliseconds.
    ramp: Option<f64>,

    /// The system player program to use for playback.
    player: Option<String>,
}

impl Settings {
    /// Loads settings from a YAML file.
    pub fn load(path: &Path) -> Result<Settings, ConfigError> {
        Ok(serde_yml::from_str(&fs::read_to_string(path)?)?)
    }

    /// Produces synthesis parameters, with unset fields taking the defaults.
    /// Values are not range-checked here; synthesis clamps them.
    pub fn params(&self) -> Params {
        let default = Params::default();
        Params {
            frequency: self.frequency.unwrap_or(default.frequency),
            sample_rate: self.sample_rate.unwrap_or(default.sample_rate),
            volume: self.volume.unwrap_or(default.volume),
            ramp: self.ramp.unwrap_or(default.ramp),
        }
    }

    /// Returns the configured player program, if any.
    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.params(), Params::default());
        assert_eq!(settings.player(), None);
    }

    #[test]
    fn test_settings_load() {
        let dir = tempfile::tempdir().expect("expected temp dir");
        let path = dir.path().join("settings.yaml");
        fs::write(
            &path,
            "frequency: 600\n\
             sample_rate: 22050\n\
             volume: 0.25\n\
             player: paplay\n",
        )
        .expect("expected write");

        let settings = Settings::load(&path).expect("expected settings");
        let params = settings.params();
        assert_eq!(params.frequency, 600.0);
        assert_eq!(params.sample_rate, 22050);
        assert_eq!(params.volume, 0.25);
        // Unset ramp falls back to the default.
        assert_eq!(params.ramp, 5.0);
        assert_eq!(settings.player(), Some("paplay"));
    }

    #[test]
    fn test_settings_load_errors() {
        let dir = tempfile::tempdir().expect("expected temp dir");

        let missing = Settings::load(&dir.path().join("absent.yaml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));

        let path = dir.path().join("broken.yaml");
        fs::write(&path, "frequency: [not, a, number]\n").expect("expected write");
        let broken = Settings::load(&path);
        assert!(matches!(broken, Err(ConfigError::Parse(_))));
    }
}
