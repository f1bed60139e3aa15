//! The event/flyover simulation loop.
//!
//! A single clock walks forward through the simulated window. Each
//! iteration schedules the next eruption, records exactly one satellite
//! overpass for it (elevated-temperature radiances plus the derived
//! thermal index), then advances the clock past the recorded flyover and
//! waits for the next event. Known simplifications, kept on purpose:
//!
//! - One observation per eruption. The recording pass runs once, so an
//!   event never produces a sustained anomaly across multiple overpasses.
//! - Sampled offsets are not clamped, so a deep-tail eruption draw can
//!   move the clock backward relative to the previous row.

use std::io::Write;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calendar;
use crate::config::SimulationConfig;
use crate::error::SynthResult;
use crate::models::{ConstantBaseline, FixedGeometry, GeometryModel, TemperatureModel};
use crate::output::{Observation, TableWriter};
use crate::radiance::{normalized_thermal_index, spectral_radiance};
use crate::sampling::IntervalSampler;

/// Summary of one synthesis run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Eruption events that fell inside the simulated window.
    pub events_recorded: u64,
    /// Observation rows written to the table.
    pub rows_written: u64,
    /// Clock value when the horizon check tripped.
    pub final_clock: i64,
}

/// Drives the clock, the samplers, and the radiance calculation.
pub struct Simulator<T, G> {
    config: SimulationConfig,
    temperature: T,
    geometry: G,
    rng: ChaCha8Rng,
}

impl Simulator<ConstantBaseline, FixedGeometry> {
    /// Simulator with the reference constant-baseline and fixed-geometry
    /// models taken from the configuration.
    #[must_use]
    pub fn with_reference_models(config: SimulationConfig) -> Self {
        let baseline =
            ConstantBaseline::new(config.baseline_temperature_c, config.absolute_zero_c);
        Simulator::new(config, baseline, FixedGeometry)
    }
}

impl<T: TemperatureModel, G: GeometryModel> Simulator<T, G> {
    /// Simulator with caller-supplied environment models. The random
    /// stream is seeded here; constructing two simulators from the same
    /// configuration replays the identical run.
    #[must_use]
    pub fn new(config: SimulationConfig, temperature: T, geometry: G) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Simulator {
            config,
            temperature,
            geometry,
            rng,
        }
    }

    /// Run the simulation to the horizon, appending rows to `table`.
    ///
    /// The horizon is checked twice per event: once before the newly
    /// scheduled eruption is processed and once before its flyover row is
    /// emitted, so no row ever carries a timestamp past the window.
    pub fn run<W: Write>(&mut self, table: &mut TableWriter<W>) -> SynthResult<RunStats> {
        let eruption = IntervalSampler::eruption(&self.config);
        let flyover = IntervalSampler::flyover(&self.config);
        let horizon = self.config.horizon();

        let mut stats = RunStats::default();
        let mut clock = self.config.start_time;

        loop {
            // Awaiting the next event.
            clock += eruption.sample(&mut self.rng)?;
            if clock > horizon {
                break;
            }
            debug!(clock, "eruption event scheduled");
            stats.events_recorded += 1;

            // Recording pass: one flyover for this event.
            let mut flyover_offset = 0_i64;
            if clock + flyover_offset <= horizon {
                let row = self.observe(clock)?;
                table.write_row(&row)?;
                stats.rows_written += 1;

                flyover_offset += flyover.sample(&mut self.rng)?;
            }

            clock += flyover_offset;
        }

        stats.final_clock = clock;
        info!(
            events = stats.events_recorded,
            rows = stats.rows_written,
            "synthesis run complete"
        );
        Ok(stats)
    }

    /// Build the observation row for one detected overpass at `clock`.
    fn observe(&self, clock: i64) -> SynthResult<Observation> {
        let date = calendar::decompose(clock);

        let baseline = self.temperature.surface_temperature(&date);
        let event_temperature = baseline + self.config.eruption_delta_t;

        let mut radiances = [0.0_f64; 5];
        for (band, wavelength) in radiances.iter_mut().zip(self.config.wavelengths_um) {
            *band = spectral_radiance(event_temperature, wavelength, &self.config.radiation)?;
        }

        // The index pairs the second 4 um channel with the 12 um channel.
        let nti = normalized_thermal_index(radiances[1], radiances[4])?;

        Ok(Observation {
            timestamp: clock,
            date,
            longitude: self.config.longitude,
            latitude: self.config.latitude,
            radiances,
            geometry: self.geometry.angles(&date),
            pixel_line: self.config.pixel_line,
            pixel_sample: self.config.pixel_sample,
            nti,
        })
    }
}
