//! Sine amplitude source.

use std::f64::consts::TAU;

/// Infinite sine wave as a stream of amplitudes.
///
/// Bound it with [`Iterator::take`] or [`Sine::samples_for`].
#[derive(Debug, Clone)]
pub struct Sine {
    amplitude: f64,
    phase: f64,
    increment: f64,
}

impl Sine {
    /// Creates a sine at `frequency` Hz scaled by `amplitude`.
    ///
    /// A sample rate of 0 produces silence.
    pub fn new(frequency: f64, amplitude: f64, sample_rate: u32) -> Self {
        let increment = if sample_rate == 0 {
            0.0
        } else {
            TAU * frequency / sample_rate as f64
        };

        Self {
            amplitude,
            phase: 0.0,
            increment,
        }
    }

    /// Number of samples covering `duration_seconds` at `sample_rate`.
    pub fn samples_for(duration_seconds: f64, sample_rate: u32) -> usize {
        (duration_seconds.max(0.0) * sample_rate as f64).round() as usize
    }
}

impl Iterator for Sine {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = self.amplitude * self.phase.sin();
        self.phase = (self.phase + self.increment).rem_euclid(TAU);
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_quarter_period() {
        // 2 kHz at 8 kHz: four samples per cycle
        let samples: Vec<f64> = Sine::new(2000.0, 1.0, 8000).take(5).collect();
        let expected = [0.0, 1.0, 0.0, -1.0, 0.0];
        for (got, want) in samples.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got {}, want {}", got, want);
        }
    }

    #[test]
    fn test_sine_amplitude_scaling() {
        let peak = Sine::new(440.0, 0.25, 44100)
            .take(44100)
            .fold(0.0f64, |acc, s| acc.max(s.abs()));
        assert!(peak <= 0.25 + 1e-12);
        assert!(peak > 0.24);
    }

    #[test]
    fn test_sine_zero_rate_is_silent() {
        assert!(Sine::new(440.0, 1.0, 0).take(16).all(|s| s == 0.0));
    }

    #[test]
    fn test_samples_for() {
        assert_eq!(Sine::samples_for(1.0, 8000), 8000);
        assert_eq!(Sine::samples_for(0.5, 44100), 22050);
        assert_eq!(Sine::samples_for(-1.0, 44100), 0);
    }
}
