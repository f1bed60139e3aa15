//! Gaussian inter-arrival samplers.
//!
//! Both point processes (eruptions, flyovers) draw delays from the same
//! Box-Muller shape: two uniforms in [0, 1) make one normal deviate,
//! which is scaled by a spread, shifted by a mean, and truncated to whole
//! seconds. The flyover instance additionally rejects raw deviates beyond
//! a fixed cutoff -- a safety bound against pathological tail draws that
//! essentially never triggers.
//!
//! Sampled offsets are deliberately *not* clipped to be non-negative; the
//! distributions occasionally yield a negative delay and the simulation
//! preserves that as a documented modeling quirk.

use std::f64::consts::TAU;

use rand::Rng;

use crate::config::SimulationConfig;
use crate::error::{SynthError, SynthResult};

/// Upper bound on rejection-loop retries before a sample attempt is
/// declared exhausted.
pub const MAX_DRAWS: u32 = 1000;

/// One configured Gaussian inter-arrival sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalSampler {
    mean_s: f64,
    spread_s: f64,
    cutoff: Option<f64>,
}

impl IntervalSampler {
    /// Sampler with no rejection filtering.
    #[must_use]
    pub fn new(mean_s: f64, spread_s: f64) -> Self {
        IntervalSampler {
            mean_s,
            spread_s,
            cutoff: None,
        }
    }

    /// Sampler that redraws whenever the raw deviate's magnitude reaches
    /// `cutoff` (expressed in units of the spread).
    #[must_use]
    pub fn with_cutoff(mean_s: f64, spread_s: f64, cutoff: f64) -> Self {
        IntervalSampler {
            mean_s,
            spread_s,
            cutoff: Some(cutoff),
        }
    }

    /// Eruption inter-arrival sampler: roughly one event per year.
    #[must_use]
    pub fn eruption(config: &SimulationConfig) -> Self {
        IntervalSampler::new(config.eruption_mean_s, config.eruption_spread_s)
    }

    /// Flyover inter-arrival sampler: roughly two overpasses per day,
    /// tail-bounded at `flyover_cutoff` spreads.
    #[must_use]
    pub fn flyover(config: &SimulationConfig) -> Self {
        IntervalSampler::with_cutoff(
            config.flyover_mean_s,
            config.flyover_spread_s,
            config.flyover_cutoff,
        )
    }

    /// Draw one inter-arrival delay in whole seconds.
    ///
    /// The polar transform `sqrt(-2 ln u2) * sin(2 pi u1)` turns two
    /// uniforms into a standard normal deviate. A draw of `u2 == 0`
    /// (where the log diverges) is redrawn, as is any deviate the cutoff
    /// rejects; the retry loop is bounded by [`MAX_DRAWS`] and fails with
    /// [`SynthError::SamplingExhausted`] rather than spinning forever.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> SynthResult<i64> {
        for _ in 0..MAX_DRAWS {
            let u1: f64 = rng.random();
            let u2: f64 = rng.random();
            if u2 == 0.0 {
                continue;
            }

            let deviate = (-2.0 * u2.ln()).sqrt() * (TAU * u1).sin();
            if let Some(cutoff) = self.cutoff {
                if deviate.abs() >= cutoff {
                    continue;
                }
            }

            // Truncation toward zero, matching integer-seconds accounting.
            return Ok((deviate * self.spread_s + self.mean_s) as i64);
        }

        Err(SynthError::SamplingExhausted {
            attempts: MAX_DRAWS,
        })
    }
}
