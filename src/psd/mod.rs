// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Detector noise power-spectral-density curves.
//!
//! A [`PsdCurve`] is loaded once from a two-column reference table (e.g. an
//! aLIGO design-sensitivity file) and is read-only afterwards; it can be
//! shared freely across threads. Queries between table points are linearly
//! interpolated; queries outside the table's support return `+inf` (infinite
//! noise, zero weight). Downstream code masks or zeroes out-of-band bins
//! rather than trusting extrapolated noise levels.

mod error;

pub use error::DataFormatError;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, trace};
use ndarray::{Array1, Zip};
use num_traits::Zero;
use rand::Rng;

use crate::c64;
use crate::noise::{create_white_noise, ConfigError};

/// A detector noise PSD, tabulated against frequency.
#[derive(Debug, Clone)]
pub struct PsdCurve {
    /// Table frequencies \[Hz\]. Strictly increasing, at least 2 points.
    frequencies: Array1<f64>,

    /// Noise power at each table frequency. Whether the column is a PSD or an
    /// ASD is the caller's convention; this type treats it as power.
    powers: Array1<f64>,
}

impl PsdCurve {
    /// Read a PSD curve from a whitespace-delimited two-column
    /// `(frequency, power)` table. Blank lines and lines starting with `#`
    /// are skipped. Extra columns are ignored.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<PsdCurve, DataFormatError> {
        fn inner(path: &Path) -> Result<PsdCurve, DataFormatError> {
            debug!("Reading PSD table {}", path.display());
            let file = BufReader::new(File::open(path)?);

            let mut frequencies = vec![];
            let mut powers = vec![];
            for (i, line) in file.lines().enumerate() {
                let line = line?;
                let row = i + 1;
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }

                let mut columns = trimmed.split_whitespace();
                let (freq_col, power_col) = match (columns.next(), columns.next()) {
                    (Some(f), Some(p)) => (f, p),
                    _ => return Err(DataFormatError::TooFewColumns { row }),
                };
                frequencies.push(parse_column(freq_col, row)?);
                powers.push(parse_column(power_col, row)?);
            }
            trace!("Read {} PSD table rows", frequencies.len());

            PsdCurve::from_columns(frequencies, powers)
        }
        inner(path.as_ref())
    }

    /// Build a PSD curve from in-memory columns. The frequencies must be
    /// strictly increasing and there must be at least 2 points; all values
    /// must be finite.
    pub fn from_columns(
        frequencies: Vec<f64>,
        powers: Vec<f64>,
    ) -> Result<PsdCurve, DataFormatError> {
        if frequencies.len() != powers.len() {
            return Err(DataFormatError::ColumnLengthMismatch {
                frequencies: frequencies.len(),
                powers: powers.len(),
            });
        }
        if frequencies.len() < 2 {
            return Err(DataFormatError::TooFewPoints {
                num: frequencies.len(),
            });
        }
        for (i, (&f, &p)) in frequencies.iter().zip(powers.iter()).enumerate() {
            if !f.is_finite() || !p.is_finite() {
                return Err(DataFormatError::NonFinite { row: i + 1 });
            }
        }
        if let Some(i) = frequencies.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(DataFormatError::NonMonotonic { row: i + 2 });
        }

        Ok(PsdCurve {
            frequencies: Array1::from_vec(frequencies),
            powers: Array1::from_vec(powers),
        })
    }

    /// The lowest tabulated frequency \[Hz\].
    pub fn min_frequency(&self) -> f64 {
        self.frequencies[0]
    }

    /// The highest tabulated frequency \[Hz\].
    pub fn max_frequency(&self) -> f64 {
        self.frequencies[self.frequencies.len() - 1]
    }

    /// The noise power at `frequency`, linearly interpolated between table
    /// points. Frequencies outside `[min_frequency, max_frequency]` give
    /// `+inf` (infinite noise, zero weight), never an error and never `NaN`.
    pub fn power_at(&self, frequency: f64) -> f64 {
        if frequency < self.min_frequency() || frequency > self.max_frequency() {
            return f64::INFINITY;
        }

        // Bisect for the bracketing table interval. The bounds check above
        // guarantees frequencies[lo] <= frequency <= frequencies[hi].
        let mut lo = 0;
        let mut hi = self.frequencies.len() - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.frequencies[mid] <= frequency {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        let f0 = self.frequencies[lo];
        let f1 = self.frequencies[lo + 1];
        let p0 = self.powers[lo];
        let p1 = self.powers[lo + 1];
        p0 + (p1 - p0) * (frequency - f0) / (f1 - f0)
    }

    /// Generate frequency-domain Gaussian noise colored by this PSD.
    ///
    /// White noise is drawn per bin and scaled by `sqrt(power_at(f))`. Bins
    /// whose frequency lies strictly outside the table's support are forced
    /// to exactly `0 + 0i` so the out-of-band `+inf` sentinel never reaches
    /// the output.
    ///
    /// Returns the frequency-domain strain of the realisation and its
    /// frequency axis.
    pub fn noise_realisation<R: Rng>(
        &self,
        sampling_frequency: f64,
        duration: f64,
        rng: &mut R,
    ) -> Result<(Array1<c64>, Array1<f64>), ConfigError> {
        let (white_noise, frequencies) = create_white_noise(sampling_frequency, duration, rng)?;

        let min = self.min_frequency();
        let max = self.max_frequency();
        let strain = Zip::from(&white_noise)
            .and(&frequencies)
            .map_collect(|&white, &f| {
                if f < min || f > max {
                    c64::zero()
                } else {
                    white * self.power_at(f).sqrt()
                }
            });

        Ok((strain, frequencies))
    }
}

fn parse_column(text: &str, row: usize) -> Result<f64, DataFormatError> {
    text.parse().map_err(|_| DataFormatError::Parse {
        row,
        text: text.to_string(),
    })
}
