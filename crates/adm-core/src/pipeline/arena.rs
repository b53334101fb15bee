use ndarray::{s, Array2, ArrayView2};

use crate::dwt::band::try_zeros;
use crate::dwt::{ScaleDims, SubBandSet};
use crate::error::Result;

/// Working buffers for one stream, sized once for scale 0.
///
/// Every stage reads and writes its own named buffer; later scales use the
/// top-left region selected by each set's active dims.
#[derive(Clone, Debug)]
pub struct WorkArena {
    capacity: ScaleDims,
    /// Reference approximation handed from the previous scale.
    pub ref_scale: Array2<i16>,
    /// Distorted approximation handed from the previous scale.
    pub dist_scale: Array2<i16>,
    pub ref_dwt: SubBandSet,
    pub dist_dwt: SubBandSet,
    pub restored: SubBandSet,
    pub impairment: SubBandSet,
    pub csf_ref: SubBandSet,
    pub csf_restored: SubBandSet,
    pub csf_impairment: SubBandSet,
    pub threshold: Array2<i16>,
    pub masked: SubBandSet,
}

impl WorkArena {
    /// Allocate all buffers for a `width` x `height` input.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let capacity = ScaleDims::new(width, height).half();
        let (rows, cols) = (capacity.height, capacity.width);
        Ok(Self {
            capacity,
            ref_scale: try_zeros(rows, cols)?,
            dist_scale: try_zeros(rows, cols)?,
            ref_dwt: SubBandSet::with_capacity(capacity)?,
            dist_dwt: SubBandSet::with_capacity(capacity)?,
            restored: SubBandSet::with_capacity(capacity)?,
            impairment: SubBandSet::with_capacity(capacity)?,
            csf_ref: SubBandSet::with_capacity(capacity)?,
            csf_restored: SubBandSet::with_capacity(capacity)?,
            csf_impairment: SubBandSet::with_capacity(capacity)?,
            threshold: try_zeros(rows, cols)?,
            masked: SubBandSet::with_capacity(capacity)?,
        })
    }

    /// Sub-band size at scale 0, the largest any buffer has to hold.
    pub fn capacity(&self) -> ScaleDims {
        self.capacity
    }

    /// Copy this scale's approximation bands into the next scale's input slots.
    pub fn handoff(&mut self) {
        let dims = self.ref_dwt.dims();
        debug_assert_eq!(dims, self.dist_dwt.dims());
        copy_into(&mut self.ref_scale, self.ref_dwt.approx(), dims);
        copy_into(&mut self.dist_scale, self.dist_dwt.approx(), dims);
    }

    /// Heap bytes held by the arena.
    pub fn byte_size(&self) -> usize {
        let planes = [&self.ref_scale, &self.dist_scale, &self.threshold]
            .iter()
            .map(|a| a.len() * std::mem::size_of::<i16>())
            .sum::<usize>();
        let sets = [
            &self.ref_dwt,
            &self.dist_dwt,
            &self.restored,
            &self.impairment,
            &self.csf_ref,
            &self.csf_restored,
            &self.csf_impairment,
            &self.masked,
        ]
        .iter()
        .map(|b| b.byte_size())
        .sum::<usize>();
        planes + sets
    }
}

fn copy_into(dst: &mut Array2<i16>, src: ArrayView2<'_, i16>, dims: ScaleDims) {
    dst.slice_mut(s![..dims.height, ..dims.width]).assign(&src);
}
