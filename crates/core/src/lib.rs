//! Synthetic Hot-Spot Observation Library
//!
//! Synthesizes a plausible multi-year record of satellite thermal-anomaly
//! detections, in the style of a volcanic hot-spot monitoring product.
//! Two Gaussian point-process samplers (eruption occurrence, satellite
//! flyover occurrence) drive a simulation clock, and each recorded event
//! gets per-band blackbody radiances plus a derived Normalized Thermal
//! Index, written as one fixed-width text table.
//!
//! The whole system is deterministic: a single seeded random stream backs
//! every draw, so identical seeds produce byte-identical output tables.

// Simplified calendar accounting (30-day months, 365-day years)
pub mod calendar;

// Simulation parameters and physical constants
pub mod config;

pub mod error;

// Pluggable surface-temperature and viewing-geometry stubs
pub mod models;

// Observation rows and fixed-width table writing
pub mod output;

// Planck-law radiance and the thermal index
pub mod radiance;

// Box-Muller interval samplers
pub mod sampling;

pub mod simulation;

// Re-export the main types
pub use calendar::{decompose, DateFields};
pub use config::SimulationConfig;
pub use error::{SynthError, SynthResult};
pub use models::{
    ConstantBaseline, FixedGeometry, GeometryModel, TemperatureModel, ViewingGeometry,
};
pub use output::{Observation, TableWriter};
pub use radiance::{normalized_thermal_index, spectral_radiance, RadiationConstants};
pub use sampling::IntervalSampler;
pub use simulation::{RunStats, Simulator};
