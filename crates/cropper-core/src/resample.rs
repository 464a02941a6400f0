//! Area-averaging resize for RGB rasters.
//!
//! Shrinking axes average every source pixel under an output pixel's
//! footprint, weighted by coverage. Enlarging axes interpolate linearly
//! between the two nearest source pixels.

use image::RgbImage;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::geometry::Size;

const CHANNELS: usize = 3;

/// Contribution of source pixels to one output pixel along an axis.
struct Taps {
    start: usize,
    weights: Vec<f32>,
}

/// Resize `src` to exactly `target`.
pub fn resize_area(src: &RgbImage, target: Size) -> RgbImage {
    let (sw, sh) = src.dimensions();
    if (sw, sh) == (target.width, target.height) {
        return src.clone();
    }
    if sw == 0 || sh == 0 || target.is_empty() {
        return RgbImage::new(target.width, target.height);
    }

    let dw = target.width as usize;
    let dh = target.height as usize;
    let col_taps = axis_taps(sw as usize, dw);
    let row_taps = axis_taps(sh as usize, dh);

    // Horizontal pass: sh rows of dw pixels.
    let src_raw = src.as_raw();
    let src_stride = sw as usize * CHANNELS;
    let mut horizontal = vec![0.0f32; sh as usize * dw * CHANNELS];
    for_each_row(&mut horizontal, dw * CHANNELS, sh as usize * dw, |row, out| {
        let line = &src_raw[row * src_stride..(row + 1) * src_stride];
        for (col, taps) in col_taps.iter().enumerate() {
            let mut acc = [0.0f32; CHANNELS];
            for (k, &w) in taps.weights.iter().enumerate() {
                let px = &line[(taps.start + k) * CHANNELS..][..CHANNELS];
                for c in 0..CHANNELS {
                    acc[c] += px[c] as f32 * w;
                }
            }
            out[col * CHANNELS..][..CHANNELS].copy_from_slice(&acc);
        }
    });

    // Vertical pass: dh rows of dw pixels.
    let mid_stride = dw * CHANNELS;
    let mut out = vec![0u8; dh * dw * CHANNELS];
    for_each_row(&mut out, mid_stride, dh * dw, |row, line| {
        let taps = &row_taps[row];
        for (i, value) in line.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &w) in taps.weights.iter().enumerate() {
                acc += horizontal[(taps.start + k) * mid_stride + i] * w;
            }
            *value = acc.round().clamp(0.0, 255.0) as u8;
        }
    });

    RgbImage::from_raw(target.width, target.height, out)
        .unwrap_or_else(|| RgbImage::new(target.width, target.height))
}

/// Run `f(row_index, row)` over every row, in parallel for large outputs.
fn for_each_row<T, F>(buf: &mut [T], row_len: usize, pixel_count: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    if pixel_count >= PARALLEL_PIXEL_THRESHOLD {
        buf.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(row, line)| f(row, line));
    } else {
        buf.chunks_mut(row_len)
            .enumerate()
            .for_each(|(row, line)| f(row, line));
    }
}

fn axis_taps(src_len: usize, dst_len: usize) -> Vec<Taps> {
    let ratio = src_len as f64 / dst_len as f64;
    if ratio >= 1.0 {
        (0..dst_len).map(|o| area_taps(o, ratio, src_len)).collect()
    } else {
        (0..dst_len).map(|o| linear_taps(o, ratio, src_len)).collect()
    }
}

/// Coverage of each source pixel by `[o*ratio, (o+1)*ratio)`, normalized.
fn area_taps(o: usize, ratio: f64, src_len: usize) -> Taps {
    let lo = o as f64 * ratio;
    let hi = ((o + 1) as f64 * ratio).min(src_len as f64);
    let start = lo.floor() as usize;
    let end = (hi.ceil() as usize).min(src_len).max(start + 1);

    let mut weights: Vec<f32> = (start..end)
        .map(|i| {
            let cover = hi.min((i + 1) as f64) - lo.max(i as f64);
            cover.max(0.0) as f32
        })
        .collect();
    let total: f32 = weights.iter().sum();
    if total > 0.0 {
        weights.iter_mut().for_each(|w| *w /= total);
    } else {
        weights = vec![1.0];
    }
    Taps { start, weights }
}

/// Linear interpolation between the two source pixels nearest the output center.
fn linear_taps(o: usize, ratio: f64, src_len: usize) -> Taps {
    let center = ((o as f64 + 0.5) * ratio - 0.5).clamp(0.0, (src_len - 1) as f64);
    let i0 = center.floor() as usize;
    let t = (center - i0 as f64) as f32;
    if i0 + 1 >= src_len || t == 0.0 {
        Taps {
            start: i0,
            weights: vec![1.0],
        }
    } else {
        Taps {
            start: i0,
            weights: vec![1.0 - t, t],
        }
    }
}
