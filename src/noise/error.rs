// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("sampling_frequency ({sampling_frequency}) and duration ({duration}) must both be positive")]
    NonPositive {
        sampling_frequency: f64,
        duration: f64,
    },

    #[error("sampling_frequency ({sampling_frequency}) and duration ({duration}) must multiply to an integer number of samples, but their product is {product}")]
    NonIntegerSampleCount {
        sampling_frequency: f64,
        duration: f64,
        product: f64,
    },
}
