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
/// Forward RGB to YCbCr matrix, one row per output channel.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct CbCrForwardTransform<T> {
    pub yr: T,
    pub yg: T,
    pub yb: T,
    pub cb_r: T,
    pub cb_g: T,
    pub cb_b: T,
    pub cr_r: T,
    pub cr_g: T,
    pub cr_b: T,
}

/// Full range BT.601 coefficients in the JFIF form, chroma centered on [CHROMA_BIAS].
pub const BT601_FULL_RANGE: CbCrForwardTransform<f64> = CbCrForwardTransform {
    yr: 0.299,
    yg: 0.587,
    yb: 0.114,
    cb_r: -0.168736,
    cb_g: -0.331264,
    cb_b: 0.5,
    cr_r: 0.5,
    cr_g: -0.418688,
    cr_b: -0.081312,
};

pub const CHROMA_BIAS: f64 = 128.;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
/// How the real valued channel is brought to an integer before narrowing
pub enum YccRounding {
    /// Round half away from zero
    #[default]
    Nearest = 0,
    /// Discard the fractional part, rounding toward zero
    Truncate = 1,
}

impl From<u8> for YccRounding {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YccRounding::Nearest,
            1 => YccRounding::Truncate,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
/// How an integer channel value is stored into an 8-bit sample
pub enum YccNarrowing {
    /// Keep the low 8 bits, two's complement wraparound. 256 is stored as 0.
    #[default]
    Wrapping = 0,
    /// Clamp into [0, 255]
    Saturating = 1,
}

impl From<u8> for YccNarrowing {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YccNarrowing::Wrapping,
            1 => YccNarrowing::Saturating,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

/// Rounding and narrowing applied to every channel.
///
/// Default is [YccRounding::Nearest] with [YccNarrowing::Wrapping], which reproduces
/// the reference kernel bit for bit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct YccConversionMode {
    pub rounding: YccRounding,
    pub narrowing: YccNarrowing,
}

impl YccConversionMode {
    pub const fn new(rounding: YccRounding, narrowing: YccNarrowing) -> Self {
        Self {
            rounding,
            narrowing,
        }
    }

    /// Truncating and clamping, the mode used by the slow cross-check path.
    pub const fn clamped_truncation() -> Self {
        Self::new(YccRounding::Truncate, YccNarrowing::Saturating)
    }
}

impl std::fmt::Display for YccConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rounding = match self.rounding {
            YccRounding::Nearest => "nearest",
            YccRounding::Truncate => "truncate",
        };
        let narrowing = match self.narrowing {
            YccNarrowing::Wrapping => "wrapping",
            YccNarrowing::Saturating => "saturating",
        };
        f.write_fmt(format_args!("{rounding}/{narrowing}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward_from_kr_kb(kr: f64, kb: f64) -> CbCrForwardTransform<f64> {
        let kg = 1. - kr - kb;
        CbCrForwardTransform {
            yr: kr,
            yg: kg,
            yb: kb,
            cb_r: -0.5 * kr / (1. - kb),
            cb_g: -0.5 * kg / (1. - kb),
            cb_b: 0.5,
            cr_r: 0.5,
            cr_g: -0.5 * kg / (1. - kr),
            cr_b: -0.5 * kb / (1. - kr),
        }
    }

    #[test]
    fn test_coefficients_match_bt601_derivation() {
        let derived = forward_from_kr_kb(0.299, 0.114);
        let fixed = BT601_FULL_RANGE;
        let pairs = [
            (derived.yr, fixed.yr),
            (derived.yg, fixed.yg),
            (derived.yb, fixed.yb),
            (derived.cb_r, fixed.cb_r),
            (derived.cb_g, fixed.cb_g),
            (derived.cb_b, fixed.cb_b),
            (derived.cr_r, fixed.cr_r),
            (derived.cr_g, fixed.cr_g),
            (derived.cr_b, fixed.cr_b),
        ];
        for (derived, fixed) in pairs {
            assert!(
                (derived - fixed).abs() < 1e-6,
                "Derived {derived} diverges from {fixed}"
            );
        }
    }

    #[test]
    fn test_rows_are_balanced() {
        let t = BT601_FULL_RANGE;
        assert!((t.yr + t.yg + t.yb - 1.).abs() < 1e-12);
        assert!((t.cb_r + t.cb_g + t.cb_b).abs() < 1e-12);
        assert!((t.cr_r + t.cr_g + t.cr_b).abs() < 1e-12);
    }

    #[test]
    fn test_default_mode_is_bit_exact_kernel() {
        let mode = YccConversionMode::default();
        assert_eq!(mode.rounding, YccRounding::Nearest);
        assert_eq!(mode.narrowing, YccNarrowing::Wrapping);
        assert_eq!(mode.to_string(), "nearest/wrapping");
        assert_eq!(
            YccConversionMode::clamped_truncation().to_string(),
            "truncate/saturating"
        );
    }

    #[test]
    fn test_mode_round_trips_through_u8() {
        assert_eq!(YccRounding::from(YccRounding::Truncate as u8), YccRounding::Truncate);
        assert_eq!(
            YccNarrowing::from(YccNarrowing::Saturating as u8),
            YccNarrowing::Saturating
        );
    }
}
