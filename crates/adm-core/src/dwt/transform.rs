use ndarray::ArrayView2;

use crate::consts::{BIT_SHIFT, DB2_HI, DB2_LO};
use crate::error::Result;

use super::band::{try_vec, ScaleDims, SubBandSet};
use super::sample::Sample;

/// Daubechies-2 analysis filters in Q15 fixed point.
///
/// Computed once per pipeline and only ever read afterwards, so instances
/// may be copied freely between independent streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Db2Coefficients {
    pub lo: [i32; 4],
    pub hi: [i32; 4],
}

impl Db2Coefficients {
    pub fn fixed_point() -> Self {
        let scale = (1u32 << BIT_SHIFT) as f32;
        Self {
            lo: DB2_LO.map(|c| (c * scale).round() as i32),
            hi: DB2_HI.map(|c| (c * scale).round() as i32),
        }
    }

    pub fn taps(&self) -> usize {
        self.lo.len()
    }
}

impl Default for Db2Coefficients {
    fn default() -> Self {
        Self::fixed_point()
    }
}

/// Separable one-level 2-D DWT with symmetric boundary reflection.
///
/// Owns the two scratch rows (vertical low/high pass) sized for the widest
/// input it will be fed.
#[derive(Clone, Debug)]
pub struct WaveletTransform {
    coeffs: Db2Coefficients,
    temp_lo: Vec<i16>,
    temp_hi: Vec<i16>,
}

impl WaveletTransform {
    pub fn new(coeffs: Db2Coefficients, max_width: usize) -> Result<Self> {
        Ok(Self {
            coeffs,
            temp_lo: try_vec(max_width)?,
            temp_hi: try_vec(max_width)?,
        })
    }

    pub fn coefficients(&self) -> &Db2Coefficients {
        &self.coeffs
    }

    pub fn max_width(&self) -> usize {
        self.temp_lo.len()
    }

    /// Decompose `src` into `dst`, returning the ceiling-halved output size.
    ///
    /// Rows `2i-1 ..= 2i+2` feed output row `i` (vertical pass into the
    /// scratch rows), then columns `2j-1 ..= 2j+2` of each scratch row feed
    /// output column `j`. Every 1-D pass truncates with `>> 15`.
    pub fn forward<S: Sample>(&mut self, src: ArrayView2<'_, S>, dst: &mut SubBandSet) -> ScaleDims {
        let (h, w) = src.dim();
        assert!(
            w <= self.max_width(),
            "input width {w} exceeds transform capacity {}",
            self.max_width()
        );
        let out = ScaleDims::new(w, h).half();
        dst.set_dims(out);

        let lo = self.coeffs.lo;
        let hi = self.coeffs.hi;
        let temp_lo = &mut self.temp_lo[..w];
        let temp_hi = &mut self.temp_hi[..w];
        let (mut band_a, mut band_h, mut band_v, mut band_d) = dst.bands_mut();

        for i in 0..out.height {
            // Vertical pass.
            for j in 0..w {
                let mut sum_lo = 0i32;
                let mut sum_hi = 0i32;
                for k in 0..4 {
                    let row = mirror_index(2 * i as isize - 1 + k as isize, h);
                    let px = src[[row, j]].read();
                    sum_lo += lo[k] * px;
                    sum_hi += hi[k] * px;
                }
                temp_lo[j] = (sum_lo >> BIT_SHIFT) as i16;
                temp_hi[j] = (sum_hi >> BIT_SHIFT) as i16;
            }

            // Horizontal passes.
            for j in 0..out.width {
                let (lo_lo, lo_hi) = filter_pair(temp_lo, j, &lo, &hi);
                band_a[[i, j]] = lo_lo;
                band_v[[i, j]] = lo_hi;

                let (hi_lo, hi_hi) = filter_pair(temp_hi, j, &lo, &hi);
                band_h[[i, j]] = hi_lo;
                band_d[[i, j]] = hi_hi;
            }
        }

        out
    }
}

/// Low- and high-pass response of `row` centred on output column `j`.
#[inline]
fn filter_pair(row: &[i16], j: usize, lo: &[i32; 4], hi: &[i32; 4]) -> (i16, i16) {
    let n = row.len();
    let mut sum_lo = 0i32;
    let mut sum_hi = 0i32;
    for k in 0..4 {
        let col = mirror_index(2 * j as isize - 1 + k as isize, n);
        let px = i32::from(row[col]);
        sum_lo += lo[k] * px;
        sum_hi += hi[k] * px;
    }
    ((sum_lo >> BIT_SHIFT) as i16, (sum_hi >> BIT_SHIFT) as i16)
}

/// Mirror boundary handling: reflect index into [0, size).
///
/// `|idx|`, then `2*size - idx - 1` past the far edge. The reflection repeats
/// with period `2*size`, which keeps 4-tap windows in bounds even for
/// single-sample rows and columns.
pub fn mirror_index(idx: isize, size: usize) -> usize {
    if size <= 1 {
        return 0;
    }
    let period = 2 * size;
    let m = idx.unsigned_abs() % period;

    if m < size {
        m
    } else {
        2 * size - 1 - m
    }
}
