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
#![no_main]

use libfuzzer_sys::fuzz_target;
use rgb_ycc::{
    compare_within_tolerance, rgb_to_ycbcr, rgb_to_ycbcr_reference, rgb_to_ycbcr_vec,
    rgb_to_ycbcr_with_mode, YccConversionMode, YccNarrowing, YccRounding,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8, bool, bool)| {
    let rounding = if data.5 {
        YccRounding::Truncate
    } else {
        YccRounding::Nearest
    };
    let narrowing = if data.6 {
        YccNarrowing::Saturating
    } else {
        YccNarrowing::Wrapping
    };
    fuzz_ycc(
        data.0,
        data.1,
        [data.2, data.3, data.4],
        YccConversionMode::new(rounding, narrowing),
    );
});

fn fuzz_ycc(i_width: u8, i_height: u8, pixel: [u8; 3], mode: YccConversionMode) {
    let pixel_count = i_width as usize * i_height as usize;
    let source_rgb: Vec<u8> = pixel.iter().copied().cycle().take(pixel_count * 3).collect();

    let mut target = vec![0u8; pixel_count * 3];
    rgb_to_ycbcr_with_mode(
        &source_rgb,
        &mut target,
        i_width as u32,
        i_height as u32,
        mode,
    )
    .unwrap();

    let mut kernel = vec![0u8; pixel_count * 3];
    rgb_to_ycbcr(&source_rgb, &mut kernel, i_width as u32, i_height as u32);
    assert_eq!(
        kernel,
        rgb_to_ycbcr_vec(&source_rgb, i_width as u32, i_height as u32).unwrap()
    );

    let mut reference = vec![0u8; pixel_count * 3];
    rgb_to_ycbcr_reference(&source_rgb, &mut reference, i_width as u32, i_height as u32)
        .unwrap();
    compare_within_tolerance(&kernel, &reference, 1).unwrap();
}
