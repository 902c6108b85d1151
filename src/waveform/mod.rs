// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Burst waveform generation.
//!
//! A [`WaveformGenerator`] pairs sampling parameters with a [`SourceModel`]
//! and produces time- and frequency-domain strain polarisations ready for
//! injection and matched filtering. Source models are a seam: anything that
//! can turn a time axis and parameters into plus/cross strain plugs in here,
//! so detector-side code never cares where a waveform came from.


use ndarray::{Array1, ArrayView1};
use realfft::RealFftPlanner;

use crate::c64;
use crate::constants::{
    DEFAULT_GLITCH_BANDWIDTH, DEFAULT_GLITCH_BANDWIDTH_REF_DB, DEFAULT_GLITCH_CENTRAL_FREQ,
    REFERENCE_DISTANCE_KPC, REFERENCE_STRAIN_AMPLITUDE, PI, TAU,
};
use crate::noise::{number_of_samples, ConfigError};

/// Time-domain strain, one series per polarisation.
#[derive(Debug, Clone)]
pub struct Polarisations {
    pub plus: Array1<f64>,
    pub cross: Array1<f64>,
}

/// Frequency-domain strain, one series per polarisation, on the one-sided
/// frequency grid of [`WaveformGenerator::frequency_array`].
#[derive(Debug, Clone)]
pub struct FrequencyDomainStrain {
    pub plus: Array1<c64>,
    pub cross: Array1<c64>,
}

/// Parameters a source model is called with.
#[derive(Debug, Clone, Copy)]
pub struct SourceParams {
    /// Distance to the source \[kpc\]. Waveform amplitudes are referenced to
    /// [`REFERENCE_DISTANCE_KPC`] and scale inversely with this.
    pub luminosity_distance: f64,
}

impl Default for SourceParams {
    fn default() -> Self {
        SourceParams {
            luminosity_distance: REFERENCE_DISTANCE_KPC,
        }
    }
}

/// Something that can produce time-domain strain polarisations on a given
/// time axis.
pub trait SourceModel {
    fn polarisations(&self, times: ArrayView1<f64>, params: &SourceParams) -> Polarisations;
}

/// A glitch-like burst: a Gaussian-modulated sinusoid (the quadrature
/// component of a Gaussian pulse).
///
/// The envelope width is set by the fractional bandwidth `bandwidth`,
/// measured `bandwidth_reference_db` below the spectral peak.
#[derive(Debug, Clone, Copy)]
pub struct GlitchSource {
    /// Carrier frequency \[Hz\].
    pub central_frequency: f64,

    /// Fractional bandwidth of the pulse spectrum.
    pub bandwidth: f64,

    /// Level below the spectral peak at which the bandwidth is measured
    /// \[dB\].
    pub bandwidth_reference_db: f64,
}

impl Default for GlitchSource {
    fn default() -> Self {
        GlitchSource {
            central_frequency: DEFAULT_GLITCH_CENTRAL_FREQ,
            bandwidth: DEFAULT_GLITCH_BANDWIDTH,
            bandwidth_reference_db: DEFAULT_GLITCH_BANDWIDTH_REF_DB,
        }
    }
}

impl SourceModel for GlitchSource {
    fn polarisations(&self, times: ArrayView1<f64>, params: &SourceParams) -> Polarisations {
        // Gaussian envelope coefficient such that the pulse spectrum is
        // `bandwidth_reference_db` down at the fractional bandwidth edges.
        let reference = 10f64.powf(self.bandwidth_reference_db / 20.0);
        let a = -(PI * self.central_frequency * self.bandwidth).powi(2) / (4.0 * reference.ln());

        let scaling = REFERENCE_STRAIN_AMPLITUDE
            * (REFERENCE_DISTANCE_KPC / params.luminosity_distance);
        let strain = times
            .mapv(|t| scaling * (-a * t * t).exp() * (TAU * self.central_frequency * t).sin());

        Polarisations {
            plus: strain.clone(),
            cross: strain,
        }
    }
}

/// Produces strain waveforms for a fixed sampling configuration.
pub struct WaveformGenerator {
    sampling_frequency: f64,
    duration: f64,
    number_of_samples: usize,
    source: Box<dyn SourceModel + Send + Sync>,
}

impl WaveformGenerator {
    /// Create a generator. The sampling frequency and duration must multiply
    /// to an integer number of samples.
    pub fn new(
        sampling_frequency: f64,
        duration: f64,
        source: Box<dyn SourceModel + Send + Sync>,
    ) -> Result<WaveformGenerator, ConfigError> {
        let number_of_samples = number_of_samples(sampling_frequency, duration)?;
        Ok(WaveformGenerator {
            sampling_frequency,
            duration,
            number_of_samples,
            source,
        })
    }

    pub fn sampling_frequency(&self) -> f64 {
        self.sampling_frequency
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// The time axis the source model is evaluated on: `N` samples starting
    /// at 0 with spacing `1/sampling_frequency`.
    pub fn time_array(&self) -> Array1<f64> {
        Array1::from_iter(
            (0..self.number_of_samples).map(|i| i as f64 / self.sampling_frequency),
        )
    }

    /// The one-sided frequency axis of [`frequency_domain_strain`]
    /// (`N/2 + 1` bins from 0 to Nyquist).
    ///
    /// [`frequency_domain_strain`]: WaveformGenerator::frequency_domain_strain
    pub fn frequency_array(&self) -> Array1<f64> {
        Array1::linspace(
            0.0,
            self.sampling_frequency / 2.0,
            self.number_of_samples / 2 + 1,
        )
    }

    /// Evaluate the source model on this generator's time axis.
    pub fn time_domain_strain(&self, params: &SourceParams) -> Polarisations {
        self.source.polarisations(self.time_array().view(), params)
    }

    /// The frequency-domain strain of the source: a one-sided real FFT of
    /// each polarisation divided by the sampling frequency, so the result is
    /// directly comparable with PSD-colored noise realisations.
    pub fn frequency_domain_strain(&self, params: &SourceParams) -> FrequencyDomainStrain {
        let td = self.time_domain_strain(params);
        FrequencyDomainStrain {
            plus: nfft(&td.plus, self.sampling_frequency),
            cross: nfft(&td.cross, self.sampling_frequency),
        }
    }
}

/// One-sided real FFT with the `rfft(h) / sampling_frequency` normalisation.
fn nfft(time_domain: &Array1<f64>, sampling_frequency: f64) -> Array1<c64> {
    let mut planner = RealFftPlanner::<f64>::new();
    let r2c = planner.plan_fft_forward(time_domain.len());
    let mut input = time_domain.to_vec();
    let mut spectrum = r2c.make_output_vec();
    // Both buffers are sized by the planner.
    r2c.process(&mut input, &mut spectrum).unwrap();

    Array1::from_vec(spectrum).mapv(|z| z / sampling_frequency)
}
