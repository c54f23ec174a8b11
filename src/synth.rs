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
use std::f64::consts::PI;

use crate::schedule::Segment;

const FREQUENCY_RANGE: (f64, f64) = (50.0, 6000.0);
const SAMPLE_RATE_RANGE: (u32, u32) = (8000, 192000);
const VOLUME_RANGE: (f64, f64) = (0.0, 1.0);
const RAMP_RANGE: (f64, f64) = (0.0, 50.0);

const PCM_FULL_SCALE: f64 = 32767.0;

/// Acoustic parameters for synthesis. Out-of-range values are saturated into
/// the documented ranges before use, never rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// The tone frequency in Hz, clamped to [50, 6000].
    pub frequency: f64,
    /// The output sample rate in Hz, clamped to [8000, 192000].
    pub sample_rate: u32,
    /// The output volume, clamped to [0.0, 1.0].
    pub volume: f64,
    /// The click-suppression ramp in milliseconds, clamped to [0, 50].
    pub ramp: f64,
}

impl Default for Params {
    fn default() -> Params {
        Params {
            frequency: 700.0,
            sample_rate: 44100,
            volume: 0.6,
            ramp: 5.0,
        }
    }
}

impl Params {
    /// Returns a copy with every field saturated into its documented range.
    pub fn clamped(&self) -> Params {
        Params {
            frequency: self.frequency.clamp(FREQUENCY_RANGE.0, FREQUENCY_RANGE.1),
            sample_rate: self.sample_rate.clamp(SAMPLE_RATE_RANGE.0, SAMPLE_RATE_RANGE.1),
            volume: self.volume.clamp(VOLUME_RANGE.0, VOLUME_RANGE.1),
            ramp: self.ramp.clamp(RAMP_RANGE.0, RAMP_RANGE.1),
        }
    }
}

/// A synthesized PCM buffer: mono, 16-bit signed little-endian samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcm {
    /// The raw sample bytes.
    pub bytes: Vec<u8>,
    /// The total number of samples in the buffer.
    pub samples: u64,
    /// The effective (clamped) sample rate the buffer was rendered at.
    pub sample_rate: u32,
}

impl Pcm {
    /// The playback length of the buffer in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples as f64 / self.sample_rate as f64
    }
}

/// Renders a segment schedule into a PCM buffer.
///
/// The sine phase is driven by a running sample index shared across all
/// segments, silence included, so a tone resuming after silence continues
/// the phase of real elapsed time rather than restarting at zero. Segments
/// that round to zero samples contribute nothing and do not advance the
/// index.
pub fn synthesize(segments: &[Segment], params: &Params) -> Pcm {
    let params = params.clamped();
    let sample_rate = f64::from(params.sample_rate);
    let ramp_samples = (sample_rate * params.ramp / 1000.0) as u64;

    let mut bytes: Vec<u8> = Vec::new();
    let mut t: u64 = 0;
    for segment in segments {
        // Ties round to even, so exact-.5 lengths land on the even sample count.
        let seg_len =
            (sample_rate * segment.duration_ms as f64 / 1000.0).round_ties_even() as u64;
        if seg_len == 0 {
            continue;
        }

        if segment.active {
            for n in 0..seg_len {
                let env = envelope(n, seg_len, ramp_samples);
                let amplitude =
                    params.volume * env * (2.0 * PI * params.frequency * t as f64 / sample_rate).sin();
                // Truncation toward zero, not rounding.
                let sample = (amplitude.clamp(-1.0, 1.0) * PCM_FULL_SCALE) as i16;
                bytes.extend_from_slice(&sample.to_le_bytes());
                t += 1;
            }
        } else {
            bytes.resize(bytes.len() + seg_len as usize * 2, 0);
            t += seg_len;
        }
    }

    Pcm {
        bytes,
        samples: t,
        sample_rate: params.sample_rate,
    }
}

/// Raised-cosine fade applied at tone segment edges to suppress clicks.
///
/// The fade-in branch is checked before the fade-out branch, so a segment
/// shorter than two ramps gets a single continuous taper instead of a
/// doubled attenuation. A zero ramp disables shaping entirely.
fn envelope(n: u64, seg_len: u64, ramp_samples: u64) -> f64 {
    if ramp_samples == 0 {
        return 1.0;
    }
    if n < ramp_samples {
        0.5 * (1.0 - (PI * n as f64 / ramp_samples as f64).cos())
    } else if seg_len - n <= ramp_samples {
        let k = seg_len - n;
        0.5 * (1.0 - (PI * k as f64 / ramp_samples as f64).cos())
    } else {
        1.0
    }
}
