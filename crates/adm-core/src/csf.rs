use crate::consts::{BIT_SHIFT, CSF_AMPLITUDES, NUM_SCALES};
use crate::dwt::{Orientation, SubBandSet};

/// Q15 reciprocal visibility factors, `round(2^15 / Q[scale][class])`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CsfTable {
    factors: [[i32; 2]; NUM_SCALES],
}

impl CsfTable {
    pub fn new() -> Self {
        let one = f64::from(1u32 << BIT_SHIFT);
        let factors = CSF_AMPLITUDES.map(|row| row.map(|q| ((1.0 / f64::from(q)) * one).round() as i32));
        Self { factors }
    }

    /// Factor applied to `orientation` at `scale`.
    pub fn factor(&self, scale: usize, orientation: Orientation) -> i32 {
        self.factors[scale][orientation.csf_class()]
    }
}

impl Default for CsfTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Scale the three detail bands of `src` into `dst` by the visibility factor
/// of `scale`: `(factor * value) >> 15`.
pub fn apply_csf(table: &CsfTable, scale: usize, src: &SubBandSet, dst: &mut SubBandSet) {
    dst.set_dims(src.dims());
    for orientation in Orientation::ALL {
        let factor = table.factor(scale, orientation);
        let input = src.band(orientation);
        let mut output = dst.band_mut(orientation);
        output.zip_mut_with(&input, |out, &v| {
            *out = ((factor * i32::from(v)) >> BIT_SHIFT) as i16;
        });
    }
}
