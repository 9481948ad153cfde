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
use crate::rgb_to_ycbcr::rgb_to_ycbcr;
use crate::ycc_error::interleaved_len;

/// C entry point of [rgb_to_ycbcr] for hosts loading the crate as a shared library.
///
/// Non positive `width` or `height`, null pointers, or a size overflowing `usize`
/// return without touching any memory.
///
/// # Safety
///
/// `rgb` must be readable and `ycbcr` writable for `width * height * 3` bytes,
/// and the two regions must not overlap.
#[no_mangle]
pub unsafe extern "C" fn rgb_ycc_convert(
    rgb: *const u8,
    ycbcr: *mut u8,
    width: i32,
    height: i32,
) {
    if width <= 0 || height <= 0 || rgb.is_null() || ycbcr.is_null() {
        return;
    }
    let width = width as u32;
    let height = height as u32;
    let Ok(len) = interleaved_len(width, height) else {
        return;
    };
    let rgb = unsafe { std::slice::from_raw_parts(rgb, len) };
    let ycbcr = unsafe { std::slice::from_raw_parts_mut(ycbcr, len) };
    rgb_to_ycbcr(rgb, ycbcr, width, height);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_entry_converts() {
        let rgb = [255u8, 255, 255, 0, 0, 255];
        let mut ycbcr = [0u8; 6];
        unsafe { rgb_ycc_convert(rgb.as_ptr(), ycbcr.as_mut_ptr(), 2, 1) };
        assert_eq!(ycbcr, [255, 128, 128, 29, 0, 107]);
    }

    #[test]
    fn test_c_entry_ignores_degenerate_sizes() {
        let rgb = [1u8, 2, 3];
        let mut ycbcr = [9u8; 3];
        unsafe {
            rgb_ycc_convert(rgb.as_ptr(), ycbcr.as_mut_ptr(), 0, 1);
            rgb_ycc_convert(rgb.as_ptr(), ycbcr.as_mut_ptr(), 1, -4);
            rgb_ycc_convert(std::ptr::null(), ycbcr.as_mut_ptr(), 1, 1);
        }
        assert_eq!(ycbcr, [9, 9, 9]);
    }
}
