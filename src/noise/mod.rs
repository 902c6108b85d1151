// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Frequency-series construction and white-noise synthesis.
//!
//! Everything here works on the one-sided frequency grid of a real time
//! series: `N/2 + 1` bins from DC to Nyquist with spacing `1/duration`, where
//! `N = sampling_frequency * duration` samples.

mod error;

pub use error::ConfigError;

use ndarray::Array1;
use num_traits::Zero;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::c64;
use crate::constants::INTEGER_SAMPLE_TOLERANCE;

/// The number of time-domain samples implied by a sampling frequency and a
/// duration. The product must be an integer to within
/// [`INTEGER_SAMPLE_TOLERANCE`]; anything else is a configuration mistake the
/// caller has to fix.
pub(crate) fn number_of_samples(
    sampling_frequency: f64,
    duration: f64,
) -> Result<usize, ConfigError> {
    if !(sampling_frequency > 0.0) || !(duration > 0.0) {
        return Err(ConfigError::NonPositive {
            sampling_frequency,
            duration,
        });
    }
    let num = sampling_frequency * duration;
    if (num - num.round()).abs() > INTEGER_SAMPLE_TOLERANCE {
        return Err(ConfigError::NonIntegerSampleCount {
            sampling_frequency,
            duration,
            product: num,
        });
    }
    Ok(num.round() as usize)
}

/// Create a frequency series with the correct length and spacing for a real
/// time series of `sampling_frequency * duration` samples: `N/2 + 1` bins
/// running from 0 to the Nyquist frequency with spacing `1/duration`.
pub fn create_frequency_series(
    sampling_frequency: f64,
    duration: f64,
) -> Result<Array1<f64>, ConfigError> {
    let number_of_samples = number_of_samples(sampling_frequency, duration)?;
    let number_of_frequencies = number_of_samples / 2 + 1;
    Ok(Array1::linspace(
        0.0,
        sampling_frequency / 2.0,
        number_of_frequencies,
    ))
}

/// Create white noise which can then be colored by a PSD.
///
/// Each bin gets independent Gaussian real and imaginary components with
/// standard deviation `0.5 * sqrt(duration)`, which gives unit variance per
/// sample after the inverse transform. The DC bin carries no content and is
/// forced to zero; so is the Nyquist bin when the sample count is even (an
/// odd-length time series has no Nyquist bin).
///
/// The random source is supplied by the caller; pass a seeded generator for
/// reproducible realisations.
pub fn create_white_noise<R: Rng>(
    sampling_frequency: f64,
    duration: f64,
    rng: &mut R,
) -> Result<(Array1<c64>, Array1<f64>), ConfigError> {
    let number_of_samples = number_of_samples(sampling_frequency, duration)?;
    let frequencies = create_frequency_series(sampling_frequency, duration)?;

    let norm = 0.5 * duration.sqrt();
    let mut white_noise: Array1<c64> = frequencies.mapv(|_| {
        let re: f64 = rng.sample(StandardNormal);
        let im: f64 = rng.sample(StandardNormal);
        c64::new(norm * re, norm * im)
    });

    white_noise[0] = c64::zero();
    if number_of_samples % 2 == 0 {
        let last = white_noise.len() - 1;
        white_noise[last] = c64::zero();
    }

    Ok((white_noise, frequencies))
}
