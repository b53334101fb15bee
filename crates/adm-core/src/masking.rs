use ndarray::{s, Array2, ArrayView2, ArrayViewMut2};

use crate::consts::{BIT_SHIFT, MASK_CENTER_WEIGHT, MASK_NEIGHBOR_WEIGHT};
use crate::dwt::{mirror_index, Orientation, ScaleDims, SubBandSet};

/// Q15 weights of the 3x3 masking neighbourhood: (centre, neighbour).
pub fn mask_weights() -> (i32, i32) {
    let one = f64::from(1u32 << BIT_SHIFT);
    (
        (MASK_CENTER_WEIGHT * one).round() as i32,
        (MASK_NEIGHBOR_WEIGHT * one).round() as i32,
    )
}

/// Build the per-pixel visibility threshold from CSF-filtered impairment.
///
/// For each orientation, the 3x3 weighted sum of absolute values (mirror
/// reflected at the edges) is shifted down by 15 and accumulated into a
/// single 16-bit threshold per pixel.
pub fn threshold_map(impairment: &SubBandSet, threshold: &mut Array2<i16>) {
    let dims = impairment.dims();
    let (center, neighbor) = mask_weights();
    let mut out = active_mut(threshold, dims);
    out.fill(0);

    for orientation in Orientation::ALL {
        let band = impairment.band(orientation);
        for i in 0..dims.height {
            for j in 0..dims.width {
                let mut sum = 0i32;
                for fi in 0..3 {
                    let row = mirror_index(i as isize - 1 + fi as isize, dims.height);
                    for fj in 0..3 {
                        let col = mirror_index(j as isize - 1 + fj as isize, dims.width);
                        let weight = if fi == 1 && fj == 1 { center } else { neighbor };
                        sum += weight * i32::from(band[[row, col]]).abs();
                    }
                }
                let cell = &mut out[[i, j]];
                *cell = cell.wrapping_add((sum >> BIT_SHIFT) as i16);
            }
        }
    }
}

/// Suppress restored detail below the threshold: `max(0, |x| - threshold)`.
pub fn apply_masking(restored: &SubBandSet, threshold: &Array2<i16>, masked: &mut SubBandSet) {
    let dims = restored.dims();
    masked.set_dims(dims);
    let thresh = active(threshold, dims);

    for orientation in Orientation::ALL {
        let input = restored.band(orientation);
        let mut output = masked.band_mut(orientation);
        for i in 0..dims.height {
            for j in 0..dims.width {
                let x = i32::from(input[[i, j]]).abs() - i32::from(thresh[[i, j]]);
                output[[i, j]] = x.max(0) as i16;
            }
        }
    }
}

fn active(buf: &Array2<i16>, dims: ScaleDims) -> ArrayView2<'_, i16> {
    buf.slice(s![..dims.height, ..dims.width])
}

fn active_mut(buf: &mut Array2<i16>, dims: ScaleDims) -> ArrayViewMut2<'_, i16> {
    buf.slice_mut(s![..dims.height, ..dims.width])
}
