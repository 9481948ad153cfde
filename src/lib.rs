//! Bit-exact conversion of interleaved 8-bit RGB into interleaved YCbCr.
//!
//! The kernel uses full range BT.601 coefficients evaluated in double precision,
//! rounds half away from zero and stores every channel through a signed 8-bit cell,
//! so saturated chroma wraps to 0 instead of clamping to 255.
//! Other rounding and narrowing combinations are available through [YccConversionMode].

#[cfg(feature = "capi")]
mod capi;
mod divergence;
mod images;
mod numerics;
mod rgb_to_ycbcr;
mod ycc_error;
mod ycc_support;

#[cfg(feature = "capi")]
pub use capi::rgb_ycc_convert;

pub use ycc_error::{MismatchedSize, YccError};

pub use ycc_support::{
    CbCrForwardTransform, YccConversionMode, YccNarrowing, YccRounding, BT601_FULL_RANGE,
    CHROMA_BIAS,
};

pub use rgb_to_ycbcr::rgb_to_ycbcr;
pub use rgb_to_ycbcr::rgb_to_ycbcr_pixel;
pub use rgb_to_ycbcr::rgb_to_ycbcr_reference;
pub use rgb_to_ycbcr::rgb_to_ycbcr_with_mode;
pub use rgb_to_ycbcr::try_rgb_to_ycbcr;

pub use images::{rgb_to_ycbcr_image, rgb_to_ycbcr_vec, BufferStoreMut, YccImageMut};

pub use divergence::{
    compare_within_tolerance, ByteDifference, DivergenceReport, MAX_REPORTED_DIFFERENCES,
};
