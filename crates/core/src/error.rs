//! Synthesizer error types

use std::io;
use thiserror::Error;

/// Result type for synthesizer operations
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while generating the observation table
#[derive(Error, Debug)]
pub enum SynthError {
    /// Output table could not be written
    #[error("failed to write observation table: {0}")]
    Io(#[from] io::Error),

    /// The rejection loop in an interval sampler never produced an
    /// accepted deviate within the retry budget
    #[error("interval sampler exhausted {attempts} draws without an accepted deviate")]
    SamplingExhausted { attempts: u32 },

    /// Planck's law is undefined for a non-positive wavelength-temperature
    /// product
    #[error("spectral radiance undefined for wavelength x temperature = {product}")]
    RadianceDomain { product: f64 },

    /// The thermal index denominator vanished
    #[error("thermal index undefined: band radiances {band4} and {band12} sum to zero")]
    DegenerateIndex { band4: f64, band12: f64 },
}

impl SynthError {
    /// Check if this error indicates invalid physical input rather than a
    /// runtime failure
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            SynthError::RadianceDomain { .. } | SynthError::DegenerateIndex { .. }
        )
    }
}
