// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnrError {
    #[error("Mismatched array lengths: a has {a}, b has {b}, frequencies has {frequencies}, psd has {psd}")]
    DimensionMismatch {
        a: usize,
        b: usize,
        frequencies: usize,
        psd: usize,
    },

    #[error("The frequency mask has {mask} entries but the series have {expected}")]
    MaskLengthMismatch { mask: usize, expected: usize },

    #[error("The analysis band holds {num_bins} bin(s); at least 2 are needed to define a frequency spacing")]
    BandTooNarrow { num_bins: usize },

    #[error("The signal has no power in the analysis band (<h|h> = {hh}); the matched-filter SNR is undefined")]
    DegenerateSignal { hh: f64 },
}
