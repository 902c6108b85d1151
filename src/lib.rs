// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Numerical core for gravitational-wave burst analysis: detector noise
power-spectral-density modelling, colored-noise synthesis, burst waveform
generation and matched-filter signal-to-noise ratios.

This crate deliberately stops at the numbers. Interferometer simulation,
generative waveform models and plotting are the caller's business; what lives
here is the PSD-weighted inner product and everything needed to feed it.
 */

pub mod constants;
mod error;
pub mod noise;
pub mod psd;
pub mod snr;
pub mod waveform;

// Re-exports.
pub use error::BurstError;
pub use noise::{create_frequency_series, create_white_noise, ConfigError};
pub use psd::{DataFormatError, PsdCurve};
pub use snr::{compute_snr, noise_weighted_inner_product, SnrError, SnrResult};
pub use waveform::{
    FrequencyDomainStrain, GlitchSource, Polarisations, SourceModel, SourceParams,
    WaveformGenerator,
};

// External re-exports.
pub use num_complex::Complex64 as c64;
