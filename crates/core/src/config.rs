//! Simulation parameters.
//!
//! All constants the generator consumes live in one immutable
//! [`SimulationConfig`] that is passed explicitly into the pure
//! calculation functions -- there are no ambient globals. The `Default`
//! values reproduce the reference dataset.

use serde::{Deserialize, Serialize};

use crate::radiance::RadiationConstants;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Immutable parameters for one synthesis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seed for the deterministic random stream.
    pub seed: u64,

    /// Simulation start, seconds since the Unix epoch.
    pub start_time: i64,

    /// Total simulated duration in seconds.
    pub total_time: i64,

    /// Mean eruption inter-arrival time in seconds (about one per year).
    pub eruption_mean_s: f64,

    /// Eruption inter-arrival standard deviation in seconds (two 30-day
    /// months).
    pub eruption_spread_s: f64,

    /// Mean flyover inter-arrival time in seconds (two overpasses per day).
    pub flyover_mean_s: f64,

    /// Flyover inter-arrival standard deviation in seconds.
    pub flyover_spread_s: f64,

    /// Flyover rejection cutoff, expressed as a multiple of the spread.
    /// Raw deviates at or beyond this magnitude are redrawn.
    pub flyover_cutoff: f64,

    /// Site longitude in degrees.
    pub longitude: f64,

    /// Site latitude in degrees.
    pub latitude: f64,

    /// Channel wavelengths in micrometers. Two channels sit at 3.959 um
    /// because the real instrument carries them at different dynamic
    /// ranges.
    pub wavelengths_um: [f64; 5],

    /// Planck radiation constants.
    pub radiation: RadiationConstants,

    /// Baseline surface temperature in degrees Celsius.
    pub baseline_temperature_c: f64,

    /// Absolute zero in degrees Celsius, used for the Kelvin conversion.
    pub absolute_zero_c: f64,

    /// Temperature increment applied while an eruption is ongoing, in
    /// the same units as the baseline.
    pub eruption_delta_t: f64,

    /// Fixed line coordinate of the hotspot pixel.
    pub pixel_line: i32,

    /// Fixed sample coordinate of the hotspot pixel.
    pub pixel_sample: i32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            seed: 123,
            start_time: 49 * 365 * SECONDS_PER_DAY,
            total_time: 5 * 365 * SECONDS_PER_DAY,
            eruption_mean_s: 365.0 * 24.0 * 3600.0,
            eruption_spread_s: 2.0 * 30.0 * 24.0 * 3600.0,
            flyover_mean_s: 24.0 * 3600.0 / 2.0,
            flyover_spread_s: 5.0 * 60.0,
            flyover_cutoff: 10.0,
            longitude: -155.3,
            latitude: 19.4,
            wavelengths_um: [3.959, 3.959, 1.64, 11.03, 12.02],
            radiation: RadiationConstants::default(),
            baseline_temperature_c: 27.0,
            absolute_zero_c: -273.15,
            eruption_delta_t: 1400.0,
            pixel_line: 6900,
            pixel_sample: 420,
        }
    }
}

impl SimulationConfig {
    /// Last clock value still inside the simulated window.
    #[must_use]
    pub fn horizon(&self) -> i64 {
        self.start_time + self.total_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_spans_five_years_from_2019() {
        let config = SimulationConfig::default();
        assert_eq!(config.start_time, 1545264000);
        assert_eq!(config.total_time, 157680000);
        assert_eq!(config.horizon(), 1545264000 + 157680000);
    }

    #[test]
    fn default_samplers_match_reference_cadence() {
        let config = SimulationConfig::default();
        // Two flyovers per day, one eruption per year.
        assert_eq!(config.flyover_mean_s, 43200.0);
        assert_eq!(config.eruption_mean_s, 31536000.0);
        assert_eq!(config.eruption_spread_s, 5184000.0);
    }
}
