// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::*;
use ndarray::Array1;

use gw_burst::{c64, noise_weighted_inner_product};

fn inner_product(c: &mut Criterion) {
    // A 4 s segment at 4096 Hz.
    let n = 4 * 4096 / 2 + 1;
    let a = Array1::from_iter((0..n).map(|i| {
        let phase = 1e-3 * i as f64;
        c64::new(phase.cos(), phase.sin())
    }));
    let b = a.mapv(|z| z * c64::new(0.7, 0.1));
    let frequencies = Array1::from_iter((0..n).map(|i| i as f64 * 0.25));
    let psd = Array1::from_elem(n, 1e-46);

    c.bench_function("noise-weighted inner product, 4s at 4096Hz", |bench| {
        bench.iter(|| {
            noise_weighted_inner_product(a.view(), b.view(), frequencies.view(), psd.view())
                .unwrap()
        })
    });
}

criterion_group!(benches, inner_product);
criterion_main!(benches);
