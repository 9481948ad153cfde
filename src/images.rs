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
use crate::rgb_to_ycbcr::rgb_to_ycbcr_with_mode;
use crate::ycc_error::{check_ycc_destination, interleaved_len};
use crate::ycc_support::YccConversionMode;
use crate::YccError;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn as_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

#[derive(Debug)]
/// Mutable interleaved YCbCr 4:4:4 image, three samples per pixel without row padding
pub struct YccImageMut<'a> {
    pub buffer: BufferStoreMut<'a, u8>,
    pub width: u32,
    pub height: u32,
}

impl<'a> YccImageMut<'a> {
    /// Allocates zeroed target image
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 3` overflows `usize`.
    pub fn alloc(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 3;
        YccImageMut {
            buffer: BufferStoreMut::Owned(vec![0u8; len]),
            width,
            height,
        }
    }

    /// Wraps caller owned storage
    pub fn borrowed(buffer: &'a mut [u8], width: u32, height: u32) -> Self {
        YccImageMut {
            buffer: BufferStoreMut::Borrowed(buffer),
            width,
            height,
        }
    }

    pub fn check_constraints(&self) -> Result<(), YccError> {
        check_ycc_destination(self.buffer.borrow(), self.width, self.height)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.borrow()
    }

    /// Copies out the Y samples as a gray plane, `width * height` bytes
    pub fn luma_plane(&self) -> Vec<u8> {
        self.buffer
            .borrow()
            .chunks_exact(3)
            .map(|pixel| pixel[0])
            .collect()
    }
}

/// Converts interleaved RGB into the target [YccImageMut].
///
/// # Arguments
///
/// * `image` - Target image, its dimensions describe `rgb` as well.
/// * `rgb` - The input RGB image data slice, `width * height * 3` samples.
/// * `mode` - Rounding and narrowing, see [YccConversionMode].
///
pub fn rgb_to_ycbcr_image(
    image: &mut YccImageMut,
    rgb: &[u8],
    mode: YccConversionMode,
) -> Result<(), YccError> {
    let width = image.width;
    let height = image.height;
    rgb_to_ycbcr_with_mode(rgb, image.buffer.as_mut(), width, height, mode)
}

/// Allocating conversion, returns a fresh YCbCr buffer of the same length as `rgb`.
///
/// Zero `width` or `height` gives an empty vector.
pub fn rgb_to_ycbcr_vec(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>, YccError> {
    if width == 0 || height == 0 {
        return Ok(Vec::new());
    }
    let mut ycbcr = vec![0u8; interleaved_len(width, height)?];
    rgb_to_ycbcr_with_mode(rgb, &mut ycbcr, width, height, YccConversionMode::default())?;
    Ok(ycbcr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgb_to_ycbcr::rgb_to_ycbcr;
    use crate::ycc_error::MismatchedSize;
    use rand::Rng;

    #[test]
    fn test_vec_matches_in_place_kernel() {
        let image_width = 23u32;
        let image_height = 11u32;
        let mut rgb = vec![0u8; image_width as usize * image_height as usize * 3];
        rand::rng().fill(&mut rgb[..]);

        let mut in_place = vec![0u8; rgb.len()];
        rgb_to_ycbcr(&rgb, &mut in_place, image_width, image_height);

        let allocated = rgb_to_ycbcr_vec(&rgb, image_width, image_height).unwrap();
        assert_eq!(allocated, in_place);
    }

    #[test]
    fn test_vec_zero_dimensions() {
        assert!(rgb_to_ycbcr_vec(&[], 0, 10).unwrap().is_empty());
        assert!(rgb_to_ycbcr_vec(&[], 10, 0).unwrap().is_empty());
    }

    #[test]
    fn test_vec_rejects_short_source() {
        assert_eq!(
            rgb_to_ycbcr_vec(&[0u8; 5], 1, 2),
            Err(YccError::SourceSizeMismatch(MismatchedSize {
                expected: 6,
                received: 5,
            }))
        );
    }

    #[test]
    fn test_image_luma_plane() {
        let rgb = [255u8, 255, 255, 0, 0, 0, 0, 0, 255, 255, 0, 0];
        let mut image = YccImageMut::alloc(2, 2);
        assert!(image.check_constraints().is_ok());
        rgb_to_ycbcr_image(&mut image, &rgb, YccConversionMode::default()).unwrap();
        assert_eq!(image.luma_plane(), vec![255, 0, 29, 76]);
        assert_eq!(&image.as_bytes()[..6], &[255, 128, 128, 0, 128, 128]);
    }

    #[test]
    fn test_borrowed_image_writes_through() {
        let mut storage = [0u8; 3];
        {
            let mut image = YccImageMut::borrowed(&mut storage, 1, 1);
            rgb_to_ycbcr_image(&mut image, &[0, 0, 0], YccConversionMode::default()).unwrap();
        }
        assert_eq!(storage, [0, 128, 128]);
    }

    #[test]
    fn test_borrowed_image_constraints() {
        let mut storage = [0u8; 4];
        let image = YccImageMut::borrowed(&mut storage, 1, 1);
        assert_eq!(
            image.check_constraints(),
            Err(YccError::DestinationSizeMismatch(MismatchedSize {
                expected: 3,
                received: 4,
            }))
        );
    }
}
