//! Pluggable environment models.
//!
//! The surface-temperature and viewing-geometry calculations are
//! deliberate stubs: the shipped implementations return constants, but
//! they sit behind traits keyed on the decomposed date so a seasonal or
//! diurnal model (or real orbital geometry) can be substituted without
//! touching the simulation loop.

use crate::calendar::DateFields;

/// Baseline surface temperature at a simulated instant, in Kelvin.
pub trait TemperatureModel {
    fn surface_temperature(&self, at: &DateFields) -> f64;
}

/// Constant-baseline temperature: a fixed Celsius value converted to
/// Kelvin, ignoring season and time of day.
#[derive(Debug, Clone, Copy)]
pub struct ConstantBaseline {
    baseline_c: f64,
    absolute_zero_c: f64,
}

impl ConstantBaseline {
    #[must_use]
    pub fn new(baseline_c: f64, absolute_zero_c: f64) -> Self {
        ConstantBaseline {
            baseline_c,
            absolute_zero_c,
        }
    }
}

impl Default for ConstantBaseline {
    /// 27 degrees Celsius, the reference baseline.
    fn default() -> Self {
        ConstantBaseline::new(27.0, -273.15)
    }
}

impl TemperatureModel for ConstantBaseline {
    fn surface_temperature(&self, _at: &DateFields) -> f64 {
        self.baseline_c - self.absolute_zero_c
    }
}

/// Satellite and sun zenith/azimuth angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingGeometry {
    pub satellite_zenith: f64,
    pub satellite_azimuth: f64,
    pub sun_zenith: f64,
    pub sun_azimuth: f64,
}

/// Viewing and solar geometry at a simulated instant.
pub trait GeometryModel {
    fn angles(&self, at: &DateFields) -> ViewingGeometry;
}

/// Placeholder geometry: every angle fixed at 90 degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedGeometry;

impl GeometryModel for FixedGeometry {
    fn angles(&self, _at: &DateFields) -> ViewingGeometry {
        ViewingGeometry {
            satellite_zenith: 90.0,
            satellite_azimuth: 90.0,
            sun_zenith: 90.0,
            sun_azimuth: 90.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::decompose;

    #[test]
    fn constant_baseline_converts_to_kelvin() {
        let model = ConstantBaseline::default();
        let at = decompose(0);
        assert_eq!(model.surface_temperature(&at), 300.15);
    }

    #[test]
    fn baseline_ignores_the_date() {
        let model = ConstantBaseline::default();
        let midwinter = decompose(0);
        let midsummer = decompose(182 * 24 * 3600 + 14 * 3600);
        assert_eq!(
            model.surface_temperature(&midwinter),
            model.surface_temperature(&midsummer)
        );
    }

    #[test]
    fn fixed_geometry_is_all_ninety_degrees() {
        let at = decompose(123_456_789);
        let angles = FixedGeometry.angles(&at);
        assert_eq!(angles.satellite_zenith, 90.0);
        assert_eq!(angles.satellite_azimuth, 90.0);
        assert_eq!(angles.sun_zenith, 90.0);
        assert_eq!(angles.sun_azimuth, 90.0);
    }
}
