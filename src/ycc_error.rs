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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum YccError {
    SourceSizeMismatch(MismatchedSize),
    DestinationSizeMismatch(MismatchedSize),
    LengthMismatch(MismatchedSize),
    PointerOverflow,
}

impl Display for YccError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YccError::SourceSizeMismatch(size) => f.write_fmt(format_args!(
                "Source RGB size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            YccError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            YccError::LengthMismatch(size) => f.write_fmt(format_args!(
                "Compared buffers have different lengths: {} and {}",
                size.expected, size.received
            )),
            YccError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
        }
    }
}

impl Error for YccError {}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<usize, YccError> {
    v0.checked_mul(v1)
        .and_then(|product| product.checked_mul(v2))
        .ok_or(YccError::PointerOverflow)
}

/// Expected interleaved length for `width x height` three channel image.
#[inline]
pub(crate) fn interleaved_len(width: u32, height: u32) -> Result<usize, YccError> {
    check_overflow_v3(width as usize, height as usize, 3)
}

#[inline]
pub(crate) fn check_rgb_source(rgb: &[u8], width: u32, height: u32) -> Result<(), YccError> {
    let expected = interleaved_len(width, height)?;
    if rgb.len() != expected {
        return Err(YccError::SourceSizeMismatch(MismatchedSize {
            expected,
            received: rgb.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_ycc_destination(ycc: &[u8], width: u32, height: u32) -> Result<(), YccError> {
    let expected = interleaved_len(width, height)?;
    if ycc.len() != expected {
        return Err(YccError::DestinationSizeMismatch(MismatchedSize {
            expected,
            received: ycc.len(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            check_overflow_v3(usize::MAX, 2, 3),
            Err(YccError::PointerOverflow)
        );
        assert_eq!(check_overflow_v3(4, 2, 3), Ok(24));
    }

    #[test]
    fn test_source_and_destination_checks() {
        let buffer = vec![0u8; 2 * 3 * 3];
        assert!(check_rgb_source(&buffer, 2, 3).is_ok());
        assert!(check_ycc_destination(&buffer, 2, 3).is_ok());
        assert_eq!(
            check_rgb_source(&buffer, 3, 3),
            Err(YccError::SourceSizeMismatch(MismatchedSize {
                expected: 27,
                received: 18,
            }))
        );
        assert_eq!(
            check_ycc_destination(&buffer[..17], 2, 3),
            Err(YccError::DestinationSizeMismatch(MismatchedSize {
                expected: 18,
                received: 17,
            }))
        );
    }

    #[test]
    fn test_error_display_names_sizes() {
        let error = YccError::DestinationSizeMismatch(MismatchedSize {
            expected: 12,
            received: 9,
        });
        assert_eq!(
            error.to_string(),
            "Destination size mismatch: expected=12, received=9"
        );
    }
}
