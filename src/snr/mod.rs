// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Matched-filter signal-to-noise ratios.
//!
//! The single numerical kernel here is the noise-weighted inner product
//!
//! ```text
//! <a|b> = 4 Re( sum_i conj(a_i) b_i / psd_i * df )
//! ```
//!
//! from which both statistics fall out: the optimal SNR is `sqrt(<h|h>)` and
//! the matched-filter SNR is `<d|h> / sqrt(<h|h>)`.

mod error;

pub use error::SnrError;

use itertools::izip;
use ndarray::{Array1, ArrayView1};
use num_traits::Zero;

use crate::c64;

/// The result of matched-filtering a candidate signal against data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnrResult {
    /// `<d|h> / sqrt(<h|h>)`. With the real-valued inner-product convention
    /// used here the imaginary part is zero; the complex type keeps the
    /// matched-filter phase convention available to callers.
    pub matched_filter_snr: c64,

    /// `sqrt(<h|h>)`, the SNR of the signal matched against itself. Always
    /// non-negative.
    pub optimal_snr: f64,
}

/// The noise-weighted inner product `4 Re( sum conj(a) * b / psd * df )`.
///
/// `df` is taken from the first two entries of `frequencies`, so the series
/// must be uniformly spaced and hold at least 2 bins. Bins where the PSD is
/// zero (or infinite) are *not* guarded here; masking them is the caller's
/// job, and an unmasked call propagates whatever `inf`/`NaN` arithmetic
/// produces.
pub fn noise_weighted_inner_product(
    a: ArrayView1<c64>,
    b: ArrayView1<c64>,
    frequencies: ArrayView1<f64>,
    psd: ArrayView1<f64>,
) -> Result<f64, SnrError> {
    if a.len() != b.len() || a.len() != frequencies.len() || a.len() != psd.len() {
        return Err(SnrError::DimensionMismatch {
            a: a.len(),
            b: b.len(),
            frequencies: frequencies.len(),
            psd: psd.len(),
        });
    }
    if frequencies.len() < 2 {
        return Err(SnrError::BandTooNarrow {
            num_bins: frequencies.len(),
        });
    }

    let df = frequencies[1] - frequencies[0];
    let mut integral = c64::zero();
    for (&a, &b, &psd) in izip!(a.iter(), b.iter(), psd.iter()) {
        integral += a.conj() * b / psd;
    }
    Ok(4.0 * (integral * df).re)
}

/// Compute the matched-filter and optimal SNR of `signal` against `data`.
///
/// `mask` selects the analysis band and is applied identically to all four
/// series; bins where the detector has no sensitivity (zero or infinite PSD)
/// must be masked out. All five inputs must have the same length.
///
/// Fails with [`SnrError::DegenerateSignal`] when `<h|h> <= 0`: a zero-power
/// signal leaves the matched-filter SNR undefined.
pub fn compute_snr(
    signal: ArrayView1<c64>,
    data: ArrayView1<c64>,
    frequencies: ArrayView1<f64>,
    psd: ArrayView1<f64>,
    mask: ArrayView1<bool>,
) -> Result<SnrResult, SnrError> {
    if signal.len() != data.len()
        || signal.len() != frequencies.len()
        || signal.len() != psd.len()
    {
        return Err(SnrError::DimensionMismatch {
            a: signal.len(),
            b: data.len(),
            frequencies: frequencies.len(),
            psd: psd.len(),
        });
    }
    if mask.len() != signal.len() {
        return Err(SnrError::MaskLengthMismatch {
            mask: mask.len(),
            expected: signal.len(),
        });
    }

    let mut h = vec![];
    let mut d = vec![];
    let mut masked_frequencies = vec![];
    let mut masked_psd = vec![];
    for (&keep, &s, &x, &f, &p) in izip!(
        mask.iter(),
        signal.iter(),
        data.iter(),
        frequencies.iter(),
        psd.iter()
    ) {
        if keep {
            h.push(s);
            d.push(x);
            masked_frequencies.push(f);
            masked_psd.push(p);
        }
    }
    let h = Array1::from_vec(h);
    let d = Array1::from_vec(d);
    let masked_frequencies = Array1::from_vec(masked_frequencies);
    let masked_psd = Array1::from_vec(masked_psd);

    let dh = noise_weighted_inner_product(
        d.view(),
        h.view(),
        masked_frequencies.view(),
        masked_psd.view(),
    )?;
    let hh = noise_weighted_inner_product(
        h.view(),
        h.view(),
        masked_frequencies.view(),
        masked_psd.view(),
    )?;

    if hh <= 0.0 {
        return Err(SnrError::DegenerateSignal { hh });
    }

    let optimal_snr = hh.sqrt();
    Ok(SnrResult {
        matched_filter_snr: c64::new(dh / optimal_snr, 0.0),
        optimal_snr,
    })
}
