// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all errors this crate can produce.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BurstError {
    #[error("{0}")]
    Config(#[from] crate::noise::ConfigError),

    #[error("{0}")]
    DataFormat(#[from] crate::psd::DataFormatError),

    #[error("{0}")]
    Snr(#[from] crate::snr::SnrError),
}
