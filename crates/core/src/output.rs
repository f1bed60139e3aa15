//! Fixed-width observation table output.
//!
//! The table layout mirrors the monitoring product's flat file: one
//! header row naming the columns, then one line per detected overpass.
//! Column widths and decimal precisions are fixed; the signed float
//! columns (longitude, latitude, angles, NTI) carry a leading space for
//! non-negative values so the sign position lines up down the column.

use std::io::{self, Write};

use crate::calendar::DateFields;
use crate::models::ViewingGeometry;

/// Satellite identifier placeholder carried in every row.
pub const SATELLITE_ID: &str = "A";

/// One recorded overpass of the hotspot.
#[derive(Debug, Clone)]
pub struct Observation {
    /// Unix timestamp of the detection, seconds.
    pub timestamp: i64,
    /// Decomposed simplified-calendar fields for the same instant.
    pub date: DateFields,
    pub longitude: f64,
    pub latitude: f64,
    /// Per-band radiances for channels B21, B22, B6, B31, B32, in listing
    /// order. Saturated cells hold the -10.00 sentinel.
    pub radiances: [f64; 5],
    pub geometry: ViewingGeometry,
    pub pixel_line: i32,
    pub pixel_sample: i32,
    /// Normalized Thermal Index over the B22 and B32 channels.
    pub nti: f64,
}

/// Writes the observation table through any `io::Write` sink.
///
/// The header goes out on construction; call [`TableWriter::finish`] to
/// flush and recover the sink. Tests run this against in-memory buffers,
/// the generator against a buffered file.
pub struct TableWriter<W: Write> {
    out: W,
}

impl<W: Write> TableWriter<W> {
    /// Wrap a sink and write the header row.
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(
            out,
            "{:<10} {:<3} {:<4} {:<2} {:<2} {:<2} {:<2} {:<11} {:<10} \
             {:<7} {:<7} {:<7} {:<7} {:<7} {:<6} {:<6} {:<6} {:<6} {:<4} {:<4} {:<6}",
            "UNIX_Time",
            "Sat",
            "Year",
            "Mo",
            "Dy",
            "Hr",
            "Mn",
            "Longitude",
            "Latitude",
            "B21",
            "B22",
            "B6",
            "B31",
            "B32",
            "SatZen",
            "SatAzi",
            "SunZen",
            "SunAzi",
            "Line",
            "Samp",
            "NTI",
        )?;
        Ok(TableWriter { out })
    }

    /// Append one fixed-width observation line.
    pub fn write_row(&mut self, obs: &Observation) -> io::Result<()> {
        writeln!(
            self.out,
            "{:10}   {} {:4} {:02} {:02} {:02} {:02} {} {} \
             {:7.3} {:7.3} {:7.3} {:7.3} {:7.3} {} {} {} {} {:4} {:4} {}",
            obs.timestamp,
            SATELLITE_ID,
            obs.date.year,
            obs.date.month,
            obs.date.day,
            obs.date.hour,
            obs.date.minute,
            sign_space(obs.longitude, 10, 6),
            sign_space(obs.latitude, 10, 6),
            obs.radiances[0],
            obs.radiances[1],
            obs.radiances[2],
            obs.radiances[3],
            obs.radiances[4],
            sign_space(obs.geometry.satellite_zenith, 6, 2),
            sign_space(obs.geometry.satellite_azimuth, 6, 2),
            sign_space(obs.geometry.sun_zenith, 6, 2),
            sign_space(obs.geometry.sun_azimuth, 6, 2),
            obs.pixel_line,
            obs.pixel_sample,
            sign_space(obs.nti, 4, 2),
        )
    }

    /// Flush the sink and hand it back.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Format a float right-aligned in `width` with a leading space in the
/// sign position for non-negative values, so columns of mixed-sign data
/// stay aligned. Values wider than `width` are never truncated.
fn sign_space(value: f64, width: usize, precision: usize) -> String {
    let body = if value.is_sign_negative() {
        format!("{value:.precision$}")
    } else {
        format!(" {value:.precision$}")
    };
    format!("{body:>width$}")
}
