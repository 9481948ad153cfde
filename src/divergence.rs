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
use crate::ycc_error::MismatchedSize;
use crate::YccError;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// How many differing positions [DivergenceReport] keeps for display
pub const MAX_REPORTED_DIFFERENCES: usize = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ByteDifference {
    pub index: usize,
    pub left: u8,
    pub right: u8,
    pub diff: u8,
}

/// Outcome of comparing two sample buffers against a tolerance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivergenceReport {
    /// No byte differs by more than the tolerance
    pub identical: bool,
    pub bytes_different: usize,
    /// First differing positions in index order, at most [MAX_REPORTED_DIFFERENCES]
    pub first_differences: Vec<ByteDifference>,
    /// Count of differing bytes per absolute difference
    pub histogram: BTreeMap<u8, usize>,
}

/// Compares two buffers byte by byte.
///
/// A byte is counted as different when `|left - right| > tolerance`.
pub fn compare_within_tolerance(
    left: &[u8],
    right: &[u8],
    tolerance: u8,
) -> Result<DivergenceReport, YccError> {
    if left.len() != right.len() {
        return Err(YccError::LengthMismatch(MismatchedSize {
            expected: left.len(),
            received: right.len(),
        }));
    }

    let mut first_differences = Vec::with_capacity(MAX_REPORTED_DIFFERENCES);
    let mut histogram = BTreeMap::new();
    let mut bytes_different = 0usize;

    for (index, (&l, &r)) in left.iter().zip(right.iter()).enumerate() {
        let diff = l.abs_diff(r);
        if diff <= tolerance {
            continue;
        }
        bytes_different += 1;
        *histogram.entry(diff).or_insert(0usize) += 1;
        if first_differences.len() < MAX_REPORTED_DIFFERENCES {
            first_differences.push(ByteDifference {
                index,
                left: l,
                right: r,
                diff,
            });
        }
    }

    Ok(DivergenceReport {
        identical: bytes_different == 0,
        bytes_different,
        first_differences,
        histogram,
    })
}

impl Display for DivergenceReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.first_differences.is_empty() {
            writeln!(
                f,
                "First {} differing values:",
                self.first_differences.len()
            )?;
            writeln!(f, "{:<8} {:<8} {:<8} {:<8}", "Index", "Left", "Right", "Diff")?;
            writeln!(f, "{}", "-".repeat(30))?;
            for d in &self.first_differences {
                writeln!(f, "{:<8} {:<8} {:<8} {:<8}", d.index, d.left, d.right, d.diff)?;
            }
            for (diff, count) in &self.histogram {
                writeln!(f, "{:<12}{:<10}", diff, count)?;
            }
        }
        write!(
            f,
            "Similarity Check: {}, Different Bytes: {}",
            self.identical, self.bytes_different
        )
    }
}
