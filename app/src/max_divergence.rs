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
use rgb_ycc::{
    rgb_to_ycbcr_pixel, rgb_to_ycbcr_reference, rgb_to_ycbcr_with_mode, YccConversionMode,
    YccNarrowing, YccRounding,
};

const CHANNELS: usize = 3;

/// Converts one full blue plane of the RGB cube, `r` fixed, `g` along rows, `b` along columns
fn plane(r: u8) -> Vec<u8> {
    let mut source_rgb = vec![0u8; 256 * 256 * CHANNELS];
    for (i, px) in source_rgb.chunks_exact_mut(CHANNELS).enumerate() {
        px[0] = r;
        px[1] = (i / 256) as u8;
        px[2] = (i % 256) as u8;
    }
    source_rgb
}

pub(crate) fn search_for_max_divergences(mode: YccConversionMode) -> (u32, u32, u32) {
    let mut m_y = u32::MIN;
    let mut m_cb = u32::MIN;
    let mut m_cr = u32::MIN;

    let mut kernel = vec![0u8; 256 * 256 * CHANNELS];
    let mut reference = vec![0u8; 256 * 256 * CHANNELS];

    for r in 0..=255u8 {
        let source_rgb = plane(r);
        rgb_to_ycbcr_with_mode(&source_rgb, &mut kernel, 256, 256, mode).unwrap();
        rgb_to_ycbcr_reference(&source_rgb, &mut reference, 256, 256).unwrap();

        for (k, v) in kernel
            .chunks_exact(CHANNELS)
            .zip(reference.chunks_exact(CHANNELS))
        {
            m_y = (k[0] as i32 - v[0] as i32).unsigned_abs().max(m_y);
            m_cb = (k[1] as i32 - v[1] as i32).unsigned_abs().max(m_cb);
            m_cr = (k[2] as i32 - v[2] as i32).unsigned_abs().max(m_cr);
        }
    }
    (m_y, m_cb, m_cr)
}

/// Counts RGB triples whose chroma wraps around in the default kernel
pub(crate) fn count_wrapped_pixels() -> usize {
    let saturating = YccConversionMode::new(YccRounding::Nearest, YccNarrowing::Saturating);
    let mut count = 0usize;
    for r in 0..=255u8 {
        for g in 0..=255u8 {
            for b in 0..=255u8 {
                let wrapped = rgb_to_ycbcr_pixel(r, g, b);
                let mut clamped = [0u8; 3];
                rgb_to_ycbcr_with_mode(&[r, g, b], &mut clamped, 1, 1, saturating).unwrap();
                if wrapped != clamped {
                    count += 1;
                }
            }
        }
    }
    count
}

pub(crate) fn check_div() {
    for mode in [
        YccConversionMode::default(),
        YccConversionMode::new(YccRounding::Nearest, YccNarrowing::Saturating),
        YccConversionMode::clamped_truncation(),
    ] {
        let max_divergence = search_for_max_divergences(mode);
        println!("Max Divergence {} vs reference {:?}", mode, max_divergence);
    }
    println!("Pixels with wrapped chroma {}", count_wrapped_pixels());
}
