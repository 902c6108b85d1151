// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors associated with reading a PSD reference table.
#[derive(Error, Debug)]
pub enum DataFormatError {
    #[error("PSD table row {row} has fewer than 2 columns")]
    TooFewColumns { row: usize },

    #[error("PSD table row {row}: could not parse '{text}' as a number")]
    Parse { row: usize, text: String },

    #[error("PSD table has {num} usable rows, but at least 2 are needed to interpolate")]
    TooFewPoints { num: usize },

    #[error("PSD table row {row}: frequency is not greater than the previous row's")]
    NonMonotonic { row: usize },

    #[error("PSD table row {row}: non-finite frequency or power")]
    NonFinite { row: usize },

    #[error("Frequency column has {frequencies} entries but power column has {powers}")]
    ColumnLengthMismatch { frequencies: usize, powers: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
