// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seamcarve::{calculate_energy, PixelGrid, SeamCarver, SeamFinder};

fn picture(width: u32, height: u32) -> PixelGrid {
    let mut raw = Vec::with_capacity((width * height * 3) as usize);
    for i in 0..(width * height * 3) {
        raw.push((i % 251) as u8);
    }
    PixelGrid::from_raw(width, height, raw).expect("valid picture")
}

fn bench_energy_map(c: &mut Criterion) {
    let grid = picture(512, 384);
    c.bench_function("energy_map_512x384", |b| {
        b.iter(|| black_box(calculate_energy(black_box(&grid))));
    });
}

fn bench_find_seams(c: &mut Criterion) {
    let carver = SeamCarver::new(picture(512, 384));
    c.bench_function("find_vertical_seam_512x384", |b| {
        b.iter(|| black_box(carver.find_vertical_seam()));
    });
    c.bench_function("find_horizontal_seam_512x384", |b| {
        b.iter(|| black_box(carver.find_horizontal_seam()));
    });
}

fn bench_carve(c: &mut Criterion) {
    let grid = picture(256, 192);
    c.bench_function("carve_256x192_to_240x180", |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(grid.clone());
            carver.carve(240, 180).expect("carve");
            black_box(carver.width());
        });
    });
}

criterion_group!(benches, bench_energy_map, bench_find_seams, bench_carve);
criterion_main!(benches);
