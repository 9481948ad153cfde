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
#![forbid(unsafe_code)]
use crate::ycc_support::{YccNarrowing, YccRounding};
use num_traits::AsPrimitive;

#[inline(always)]
/// Brings a real valued channel to an integer with the requested rounding
pub(crate) fn round_channel<const ROUNDING: u8>(v: f64) -> i32 {
    let rounding: YccRounding = ROUNDING.into();
    let rounded = match rounding {
        YccRounding::Nearest => v.round(),
        YccRounding::Truncate => v.trunc(),
    };
    rounded as i32
}

#[inline(always)]
/// Stores an integer channel into an 8-bit sample.
/// Wrapping goes through a signed 8-bit cell, so 256 becomes 0 and -1 becomes 255.
pub(crate) fn narrow_channel<const NARROWING: u8>(v: i32) -> u8 {
    let narrowing: YccNarrowing = NARROWING.into();
    match narrowing {
        YccNarrowing::Wrapping => {
            let signed: i8 = v.as_();
            signed.as_()
        }
        YccNarrowing::Saturating => num_traits::clamp(v, 0, 255) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEAREST: u8 = YccRounding::Nearest as u8;
    const TRUNCATE: u8 = YccRounding::Truncate as u8;
    const WRAPPING: u8 = YccNarrowing::Wrapping as u8;
    const SATURATING: u8 = YccNarrowing::Saturating as u8;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_channel::<NEAREST>(0.5), 1);
        assert_eq!(round_channel::<NEAREST>(1.5), 2);
        assert_eq!(round_channel::<NEAREST>(2.5), 3);
        assert_eq!(round_channel::<NEAREST>(255.5), 256);
        assert_eq!(round_channel::<NEAREST>(127.49), 127);
        assert_eq!(round_channel::<NEAREST>(-0.5), -1);
    }

    #[test]
    fn test_truncate_toward_zero() {
        assert_eq!(round_channel::<TRUNCATE>(255.5), 255);
        assert_eq!(round_channel::<TRUNCATE>(84.97), 84);
        assert_eq!(round_channel::<TRUNCATE>(-0.7), 0);
    }

    #[test]
    fn test_wrapping_narrowing_keeps_low_byte() {
        assert_eq!(narrow_channel::<WRAPPING>(0), 0);
        assert_eq!(narrow_channel::<WRAPPING>(128), 128);
        assert_eq!(narrow_channel::<WRAPPING>(255), 255);
        assert_eq!(narrow_channel::<WRAPPING>(256), 0);
        assert_eq!(narrow_channel::<WRAPPING>(300), 44);
        assert_eq!(narrow_channel::<WRAPPING>(-1), 255);
        for v in -512i32..512 {
            assert_eq!(narrow_channel::<WRAPPING>(v), v.rem_euclid(256) as u8);
        }
    }

    #[test]
    fn test_saturating_narrowing_clamps() {
        assert_eq!(narrow_channel::<SATURATING>(256), 255);
        assert_eq!(narrow_channel::<SATURATING>(300), 255);
        assert_eq!(narrow_channel::<SATURATING>(-3), 0);
        assert_eq!(narrow_channel::<SATURATING>(77), 77);
    }
}
