// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision; SNR calculations are done in double
precision throughout.
 */

pub use std::f64::consts::{PI, TAU};

/// `sampling_frequency * duration` must be within this tolerance of an
/// integer to define a valid number of samples.
pub const INTEGER_SAMPLE_TOLERANCE: f64 = 1e-14;

/// Burst waveform amplitudes are referenced to a source at this luminosity
/// distance \[kpc\].
pub const REFERENCE_DISTANCE_KPC: f64 = 10.0;

/// Strain amplitude of a reference burst at [`REFERENCE_DISTANCE_KPC`].
pub const REFERENCE_STRAIN_AMPLITUDE: f64 = 1e-21;

/// Default central frequency of a glitch waveform \[Hz\].
pub const DEFAULT_GLITCH_CENTRAL_FREQ: f64 = 250.0;

/// Default fractional bandwidth of a glitch waveform.
pub const DEFAULT_GLITCH_BANDWIDTH: f64 = 0.5;

/// Reference level at which the glitch fractional bandwidth is measured
/// \[dB\].
pub const DEFAULT_GLITCH_BANDWIDTH_REF_DB: f64 = -6.0;
