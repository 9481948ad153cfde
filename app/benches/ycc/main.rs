/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use criterion::{criterion_group, criterion_main, Criterion};
use rgb_ycc::{
    rgb_to_ycbcr, rgb_to_ycbcr_reference, rgb_to_ycbcr_vec, rgb_to_ycbcr_with_mode,
    YccConversionMode, YccNarrowing, YccRounding,
};

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;

fn gradient() -> Vec<u8> {
    let mut rgb = vec![0u8; WIDTH as usize * HEIGHT as usize * 3];
    for (i, px) in rgb.chunks_exact_mut(3).enumerate() {
        let x = i % WIDTH as usize;
        let y = i / WIDTH as usize;
        px[0] = (x * 255 / (WIDTH as usize - 1)) as u8;
        px[1] = (y * 255 / (HEIGHT as usize - 1)) as u8;
        px[2] = ((x + y) % 256) as u8;
    }
    rgb
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let src_bytes = gradient();
    let mut ycbcr = vec![0u8; src_bytes.len()];

    c.bench_function("rgb-ycc RGB -> YCbCr wrapping", |b| {
        b.iter(|| {
            rgb_to_ycbcr(&src_bytes, &mut ycbcr, WIDTH, HEIGHT);
        })
    });

    c.bench_function("rgb-ycc RGB -> YCbCr saturating", |b| {
        let mode = YccConversionMode::new(YccRounding::Nearest, YccNarrowing::Saturating);
        b.iter(|| {
            rgb_to_ycbcr_with_mode(&src_bytes, &mut ycbcr, WIDTH, HEIGHT, mode).unwrap();
        })
    });

    c.bench_function("rgb-ycc RGB -> YCbCr reference", |b| {
        b.iter(|| {
            rgb_to_ycbcr_reference(&src_bytes, &mut ycbcr, WIDTH, HEIGHT).unwrap();
        })
    });

    c.bench_function("rgb-ycc RGB -> YCbCr allocating", |b| {
        b.iter(|| rgb_to_ycbcr_vec(&src_bytes, WIDTH, HEIGHT).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
