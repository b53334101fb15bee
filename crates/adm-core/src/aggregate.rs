use ndarray::{s, ArrayView2};

use crate::dwt::{Orientation, SubBandSet};

/// Pixel margin excluded on each side of an axis of length `len`:
/// `len * factor - 0.5`, truncated toward zero.
pub fn border(len: usize, factor: f64) -> usize {
    (len as f64 * factor - 0.5) as i64 as usize
}

/// Region surviving the border exclusion, as `(top, bottom, left, right)`.
pub fn scored_region(width: usize, height: usize, factor: f64) -> (usize, usize, usize, usize) {
    let left = border(width, factor);
    let top = border(height, factor);
    (top, height - top, left, width - left)
}

/// Cubic-norm contribution of one band.
///
/// Sums `|x|^3` over the border-excluded region and returns
/// `ceil(cbrt(sum)) + ceil(cbrt(area / 32))`.
pub fn sum_cube(band: ArrayView2<'_, i16>, border_factor: f64) -> f64 {
    let (h, w) = band.dim();
    let (top, bottom, left, right) = scored_region(w, h, border_factor);

    let sum: i64 = band
        .slice(s![top..bottom, left..right])
        .iter()
        .map(|&x| {
            let a = i64::from(x).abs();
            a * a * a
        })
        .sum();

    let area = ((bottom - top) * (right - left)) as f64;
    (sum as f64).cbrt().ceil() + (area / 32.0).cbrt().ceil()
}

/// Sum of [`sum_cube`] over the three detail bands of `bands`.
pub fn detail_contribution(bands: &SubBandSet, border_factor: f64) -> f64 {
    Orientation::ALL
        .into_iter()
        .map(|o| sum_cube(bands.band(o), border_factor))
        .sum()
}
