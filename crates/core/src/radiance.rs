//! Blackbody spectral radiance and the Normalized Thermal Index.

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

/// Radiances above this magnitude overfill the detector.
pub const SATURATION_CEILING: f64 = 99.99;

/// Marker value written in place of a saturated radiance.
pub const SATURATED_RADIANCE: f64 = -10.00;

/// Constants for the spectral radiance formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiationConstants {
    /// First radiation constant, W * um^4 / m^2.
    pub c1: f64,
    /// Second radiation constant, um * K.
    pub c2: f64,
}

impl Default for RadiationConstants {
    fn default() -> Self {
        RadiationConstants {
            c1: 3.74151e8,
            c2: 1.43879e4,
        }
    }
}

/// Theoretical spectral radiance of a perfect blackbody per Planck's law:
///
/// ```text
/// L = c1 / (lambda^5 * (exp(c2 / (lambda * T)) - 1))
/// ```
///
/// Radiances above [`SATURATION_CEILING`] overfill the detector and come
/// back as [`SATURATED_RADIANCE`] instead of the physically implausible
/// large value. A non-positive `wavelength * temperature` product is
/// outside the formula's domain and fails with
/// [`SynthError::RadianceDomain`]; the simulation only ever supplies
/// fixed positive constants, so that path never triggers in normal
/// operation.
pub fn spectral_radiance(
    temperature_k: f64,
    wavelength_um: f64,
    constants: &RadiationConstants,
) -> SynthResult<f64> {
    let product = wavelength_um * temperature_k;
    if product <= 0.0 {
        return Err(SynthError::RadianceDomain { product });
    }

    let candidate =
        constants.c1 / (wavelength_um.powi(5) * ((constants.c2 / product).exp() - 1.0));

    if candidate > SATURATION_CEILING {
        Ok(SATURATED_RADIANCE)
    } else {
        Ok(candidate)
    }
}

/// Normalized Thermal Index over the 4 um and 12 um channels:
/// `(band4 - band12) / (band4 + band12)`.
///
/// A vanishing denominator fails with [`SynthError::DegenerateIndex`]
/// rather than letting a non-finite value reach the output table. With
/// the reference constants the two bands never cancel (both are either
/// positive or the saturation sentinel), so the error path is a guard,
/// not an expected outcome.
pub fn normalized_thermal_index(band4: f64, band12: f64) -> SynthResult<f64> {
    let sum = band4 + band12;
    if sum == 0.0 {
        return Err(SynthError::DegenerateIndex { band4, band12 });
    }
    Ok((band4 - band12) / sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn planck_value_at_ambient_temperature() {
        let constants = RadiationConstants::default();
        // Hand-computed for T = 300 K, lambda = 11.03 um.
        let radiance = spectral_radiance(300.0, 11.03, &constants).unwrap();
        assert_relative_eq!(radiance, 30.023493410437254, max_relative = 1e-12);

        let radiance = spectral_radiance(300.0, 3.959, &constants).unwrap();
        assert_relative_eq!(radiance, 2.1088275081385772, max_relative = 1e-12);
    }

    #[test]
    fn eruption_temperature_saturates_every_band() {
        let constants = RadiationConstants::default();
        for wavelength in [3.959, 3.959, 1.64, 11.03, 12.02] {
            let radiance = spectral_radiance(1700.15, wavelength, &constants).unwrap();
            assert_eq!(
                radiance, SATURATED_RADIANCE,
                "band at {wavelength} um should overfill"
            );
        }
    }

    #[test]
    fn saturation_at_reference_check_point() {
        // 1673.15 K at 3.959 um computes to ~4.9e4, far past the ceiling.
        let constants = RadiationConstants::default();
        let radiance = spectral_radiance(1673.15, 3.959, &constants).unwrap();
        assert_eq!(radiance, SATURATED_RADIANCE);
    }

    #[test]
    fn non_positive_domain_is_rejected() {
        let constants = RadiationConstants::default();
        assert!(matches!(
            spectral_radiance(0.0, 3.959, &constants),
            Err(SynthError::RadianceDomain { .. })
        ));
        assert!(matches!(
            spectral_radiance(300.0, -1.0, &constants),
            Err(SynthError::RadianceDomain { .. })
        ));
    }

    #[test]
    fn thermal_index_of_equal_bands_is_zero() {
        assert_eq!(normalized_thermal_index(1.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn thermal_index_of_unequal_bands() {
        let nti = normalized_thermal_index(2.0, 1.0).unwrap();
        assert_relative_eq!(nti, 1.0 / 3.0, max_relative = 1e-15);
    }

    #[test]
    fn thermal_index_rejects_vanishing_denominator() {
        assert!(matches!(
            normalized_thermal_index(1.0, -1.0),
            Err(SynthError::DegenerateIndex { .. })
        ));
        assert!(matches!(
            normalized_thermal_index(0.0, 0.0),
            Err(SynthError::DegenerateIndex { .. })
        ));
    }

    #[test]
    fn saturated_bands_still_yield_an_index() {
        // Both channels saturated: difference is zero, sum is -20.
        let nti =
            normalized_thermal_index(SATURATED_RADIANCE, SATURATED_RADIANCE).unwrap();
        assert_eq!(nti, 0.0);
    }
}
