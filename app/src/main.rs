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
mod max_divergence;
mod support;

use clap::Parser;
use rgb_ycc::{
    compare_within_tolerance, rgb_to_ycbcr, rgb_to_ycbcr_reference, YccImageMut,
};
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

/// Converts an image to YCbCr with the bit-exact kernel, cross-checks it against the
/// truncating reference and writes the luma plane as a grayscale JPEG.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input image, any format the `image` crate decodes
    #[arg(short, long)]
    input: PathBuf,
    /// Output grayscale JPEG
    #[arg(short, long)]
    output: PathBuf,
    /// Per byte tolerance when comparing kernel and reference
    #[arg(short, long, default_value_t = 1)]
    error: u8,
    /// Also sweep the whole RGB cube for the largest kernel/reference divergence
    #[arg(long, default_value_t = false)]
    sweep: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let (width, height, rgb) = support::load_rgb8(&args.input)?;
    let total_pixels = width as usize * height as usize;

    let mut reference = vec![0u8; rgb.len()];
    let start_time = Instant::now();
    rgb_to_ycbcr_reference(&rgb, &mut reference, width, height)?;
    let reference_time = start_time.elapsed();

    let mut image = YccImageMut::alloc(width, height);
    let start_time = Instant::now();
    rgb_to_ycbcr(&rgb, image.buffer.as_mut(), width, height);
    let kernel_time = start_time.elapsed();

    println!(
        "Converted {} pixels with the kernel in {:?} and with the reference in {:?}.",
        total_pixels, kernel_time, reference_time
    );

    let report = compare_within_tolerance(image.as_bytes(), &reference, args.error)?;
    println!("{}", report);

    support::save_luma_jpeg(&args.output, &image.luma_plane(), width, height)?;

    if args.sweep {
        max_divergence::check_div();
    }

    Ok(())
}
