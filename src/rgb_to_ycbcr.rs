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
use crate::numerics::{narrow_channel, round_channel};
use crate::ycc_error::{check_rgb_source, check_ycc_destination};
use crate::ycc_support::{
    YccConversionMode, YccNarrowing, YccRounding, BT601_FULL_RANGE, CHROMA_BIAS,
};
use crate::YccError;

type InterleavedConverter = fn(&[u8], &mut [u8], u32, u32) -> Result<(), YccError>;

#[inline(always)]
fn ycbcr_pixel<const ROUNDING: u8, const NARROWING: u8>(r: u8, g: u8, b: u8) -> [u8; 3] {
    let t = BT601_FULL_RANGE;
    let r = r as f64;
    let g = g as f64;
    let b = b as f64;

    let y = t.yr * r + t.yg * g + t.yb * b;
    let cb = CHROMA_BIAS + t.cb_r * r + t.cb_g * g + t.cb_b * b;
    let cr = CHROMA_BIAS + t.cr_r * r + t.cr_g * g + t.cr_b * b;

    [
        narrow_channel::<NARROWING>(round_channel::<ROUNDING>(y)),
        narrow_channel::<NARROWING>(round_channel::<ROUNDING>(cb)),
        narrow_channel::<NARROWING>(round_channel::<ROUNDING>(cr)),
    ]
}

// Chroma terms are summed first and the bias added last.
#[inline(always)]
fn reference_pixel(r: u8, g: u8, b: u8) -> [u8; 3] {
    const TRUNCATE: u8 = YccRounding::Truncate as u8;
    const SATURATING: u8 = YccNarrowing::Saturating as u8;

    let t = BT601_FULL_RANGE;
    let r = r as f64;
    let g = g as f64;
    let b = b as f64;

    let y = t.yr * r + t.yg * g + t.yb * b;
    let cb = CHROMA_BIAS + (t.cb_r * r + t.cb_g * g + t.cb_b * b);
    let cr = CHROMA_BIAS + (t.cr_r * r + t.cr_g * g + t.cr_b * b);

    [
        narrow_channel::<SATURATING>(round_channel::<TRUNCATE>(y)),
        narrow_channel::<SATURATING>(round_channel::<TRUNCATE>(cb)),
        narrow_channel::<SATURATING>(round_channel::<TRUNCATE>(cr)),
    ]
}

#[inline(always)]
fn convert_interleaved(
    rgb: &[u8],
    ycbcr: &mut [u8],
    width: u32,
    height: u32,
    pixel: impl Fn(u8, u8, u8) -> [u8; 3],
) -> Result<(), YccError> {
    if width == 0 || height == 0 {
        return Ok(());
    }
    check_rgb_source(rgb, width, height)?;
    check_ycc_destination(ycbcr, width, height)?;

    for (dst, src) in ycbcr.chunks_exact_mut(3).zip(rgb.chunks_exact(3)) {
        let [y, cb, cr] = pixel(src[0], src[1], src[2]);
        dst[0] = y;
        dst[1] = cb;
        dst[2] = cr;
    }

    Ok(())
}

fn rgb_to_ycbcr_impl<const ROUNDING: u8, const NARROWING: u8>(
    rgb: &[u8],
    ycbcr: &mut [u8],
    width: u32,
    height: u32,
) -> Result<(), YccError> {
    convert_interleaved(
        rgb,
        ycbcr,
        width,
        height,
        ycbcr_pixel::<ROUNDING, NARROWING>,
    )
}

/// Converts a single RGB pixel to YCbCr with round half away from zero and wrapping narrowing.
#[inline]
pub fn rgb_to_ycbcr_pixel(r: u8, g: u8, b: u8) -> [u8; 3] {
    ycbcr_pixel::<{ YccRounding::Nearest as u8 }, { YccNarrowing::Wrapping as u8 }>(r, g, b)
}

/// Convert interleaved RGB image data to interleaved YCbCr.
///
/// Each channel is computed in double precision with full range BT.601 coefficients,
/// rounded half away from zero and narrowed through a signed 8-bit cell.
/// Out of range chroma wraps instead of saturating: pure blue produces Cb = 0, not 255.
///
/// If `width` or `height` is zero this returns immediately and `ycbcr` is left untouched,
/// whatever the lengths of the buffers.
///
/// # Arguments
///
/// * `rgb` - The input RGB image data slice, `width * height * 3` samples.
/// * `ycbcr` - A mutable slice receiving YCbCr samples, same length as `rgb`.
/// * `width` - The width of the image in pixels.
/// * `height` - The height of the image in pixels.
///
/// # Panics
///
/// This function panics if the lengths of `rgb` or `ycbcr` are not `width * height * 3`
/// for a non empty image, or if that size overflows `usize`.
///
pub fn rgb_to_ycbcr(rgb: &[u8], ycbcr: &mut [u8], width: u32, height: u32) {
    if let Err(err) = try_rgb_to_ycbcr(rgb, ycbcr, width, height) {
        panic!("{}", err);
    }
}

/// Checked form of [rgb_to_ycbcr], reports invalid buffer geometry instead of panicking.
pub fn try_rgb_to_ycbcr(
    rgb: &[u8],
    ycbcr: &mut [u8],
    width: u32,
    height: u32,
) -> Result<(), YccError> {
    rgb_to_ycbcr_with_mode(rgb, ycbcr, width, height, YccConversionMode::default())
}

/// Convert interleaved RGB image data to interleaved YCbCr with explicit rounding and narrowing.
///
/// [YccConversionMode::default] gives the same bytes as [rgb_to_ycbcr].
/// Zero `width` or `height` returns `Ok(())` without touching `ycbcr`.
///
/// # Arguments
///
/// * `rgb` - The input RGB image data slice, `width * height * 3` samples.
/// * `ycbcr` - A mutable slice receiving YCbCr samples, same length as `rgb`.
/// * `width` - The width of the image in pixels.
/// * `height` - The height of the image in pixels.
/// * `mode` - Rounding and narrowing, see [YccConversionMode].
///
pub fn rgb_to_ycbcr_with_mode(
    rgb: &[u8],
    ycbcr: &mut [u8],
    width: u32,
    height: u32,
    mode: YccConversionMode,
) -> Result<(), YccError> {
    let dispatcher: InterleavedConverter = match (mode.rounding, mode.narrowing) {
        (YccRounding::Nearest, YccNarrowing::Wrapping) => rgb_to_ycbcr_impl::<
            { YccRounding::Nearest as u8 },
            { YccNarrowing::Wrapping as u8 },
        >,
        (YccRounding::Nearest, YccNarrowing::Saturating) => rgb_to_ycbcr_impl::<
            { YccRounding::Nearest as u8 },
            { YccNarrowing::Saturating as u8 },
        >,
        (YccRounding::Truncate, YccNarrowing::Wrapping) => rgb_to_ycbcr_impl::<
            { YccRounding::Truncate as u8 },
            { YccNarrowing::Wrapping as u8 },
        >,
        (YccRounding::Truncate, YccNarrowing::Saturating) => rgb_to_ycbcr_impl::<
            { YccRounding::Truncate as u8 },
            { YccNarrowing::Saturating as u8 },
        >,
    };
    dispatcher(rgb, ycbcr, width, height)
}

/// Slow cross-check conversion: truncates toward zero and clamps to [0, 255].
///
/// Chroma is evaluated as `128 + (r, g, b terms)`, so results may differ from
/// [rgb_to_ycbcr] by one step, and by the full wrap for saturated chroma.
/// Zero `width` or `height` returns `Ok(())` without touching `ycbcr`.
pub fn rgb_to_ycbcr_reference(
    rgb: &[u8],
    ycbcr: &mut [u8],
    width: u32,
    height: u32,
) -> Result<(), YccError> {
    convert_interleaved(rgb, ycbcr, width, height, reference_pixel)
}
