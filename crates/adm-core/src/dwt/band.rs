use std::fmt;

use ndarray::{s, Array2, ArrayView2, ArrayViewMut2};

use crate::consts::NUM_SCALES;
use crate::error::{AdmError, Result};

/// Detail orientation of a wavelet sub-band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// High-pass vertically, low-pass horizontally.
    Horizontal,
    /// Low-pass vertically, high-pass horizontally.
    Vertical,
    /// High-pass in both directions.
    Diagonal,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [Self::Horizontal, Self::Vertical, Self::Diagonal];

    /// Column of the CSF amplitude table this orientation reads.
    /// Horizontal and vertical detail share one visibility class.
    pub fn csf_class(self) -> usize {
        match self {
            Self::Horizontal | Self::Vertical => 0,
            Self::Diagonal => 1,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "Horizontal"),
            Self::Vertical => write!(f, "Vertical"),
            Self::Diagonal => write!(f, "Diagonal"),
        }
    }
}

/// Width and height of the sub-bands at one scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScaleDims {
    pub width: usize,
    pub height: usize,
}

impl ScaleDims {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Dimensions after one decomposition: ceiling halves, never below 1.
    pub fn half(self) -> Self {
        Self {
            width: self.width.div_ceil(2).max(1),
            height: self.height.div_ceil(2).max(1),
        }
    }

    pub fn area(self) -> usize {
        self.width * self.height
    }

    pub fn fits_within(self, capacity: ScaleDims) -> bool {
        self.width <= capacity.width && self.height <= capacity.height
    }

    /// Sub-band dimensions produced at each scale for a `width` x `height` input.
    pub fn pyramid(width: usize, height: usize) -> [ScaleDims; NUM_SCALES] {
        let mut dims = [ScaleDims::default(); NUM_SCALES];
        let mut current = ScaleDims::new(width, height);
        for slot in dims.iter_mut() {
            current = current.half();
            *slot = current;
        }
        dims
    }
}

impl fmt::Display for ScaleDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Allocate a zeroed buffer, reporting allocation failure instead of aborting.
pub(crate) fn try_vec<T: Clone + Default>(len: usize) -> Result<Vec<T>> {
    let bytes = len.saturating_mul(std::mem::size_of::<T>());
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| AdmError::OutOfMemory { bytes })?;
    buf.resize(len, T::default());
    Ok(buf)
}

/// 2-D counterpart of [`try_vec`].
pub(crate) fn try_zeros<T: Clone + Default>(rows: usize, cols: usize) -> Result<Array2<T>> {
    let len = rows
        .checked_mul(cols)
        .ok_or(AdmError::OutOfMemory { bytes: usize::MAX })?;
    let buf = try_vec(len)?;
    Array2::from_shape_vec((rows, cols), buf).map_err(|_| AdmError::OutOfMemory {
        bytes: len.saturating_mul(std::mem::size_of::<T>()),
    })
}

/// Four equally sized signed 16-bit sub-bands of one decomposition level.
///
/// Buffers are allocated once for the largest scale; `dims` selects the
/// active top-left region for the current scale. All four bands always share
/// the same capacity, active size and stride.
#[derive(Clone, Debug)]
pub struct SubBandSet {
    approx: Array2<i16>,
    horizontal: Array2<i16>,
    vertical: Array2<i16>,
    diagonal: Array2<i16>,
    dims: ScaleDims,
}

impl SubBandSet {
    pub fn with_capacity(capacity: ScaleDims) -> Result<Self> {
        let (rows, cols) = (capacity.height, capacity.width);
        Ok(Self {
            approx: try_zeros(rows, cols)?,
            horizontal: try_zeros(rows, cols)?,
            vertical: try_zeros(rows, cols)?,
            diagonal: try_zeros(rows, cols)?,
            dims: capacity,
        })
    }

    pub fn capacity(&self) -> ScaleDims {
        ScaleDims::new(self.approx.ncols(), self.approx.nrows())
    }

    /// Active dimensions for the current scale.
    pub fn dims(&self) -> ScaleDims {
        self.dims
    }

    /// Row stride in samples, shared by all four bands.
    pub fn stride(&self) -> usize {
        self.approx.ncols()
    }

    /// Select the active region. Panics if `dims` exceeds the allocation.
    pub fn set_dims(&mut self, dims: ScaleDims) {
        assert!(
            dims.fits_within(self.capacity()),
            "sub-band dims {dims} exceed capacity {}",
            self.capacity()
        );
        self.dims = dims;
    }

    pub fn approx(&self) -> ArrayView2<'_, i16> {
        let d = self.dims;
        self.approx.slice(s![..d.height, ..d.width])
    }

    pub fn band(&self, orientation: Orientation) -> ArrayView2<'_, i16> {
        let d = self.dims;
        let band = match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
            Orientation::Diagonal => &self.diagonal,
        };
        band.slice(s![..d.height, ..d.width])
    }

    pub fn band_mut(&mut self, orientation: Orientation) -> ArrayViewMut2<'_, i16> {
        let d = self.dims;
        let band = match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
            Orientation::Diagonal => &mut self.diagonal,
        };
        band.slice_mut(s![..d.height, ..d.width])
    }

    /// Mutable views of all four active bands: (approx, horizontal, vertical, diagonal).
    pub fn bands_mut(
        &mut self,
    ) -> (
        ArrayViewMut2<'_, i16>,
        ArrayViewMut2<'_, i16>,
        ArrayViewMut2<'_, i16>,
        ArrayViewMut2<'_, i16>,
    ) {
        let d = self.dims;
        (
            self.approx.slice_mut(s![..d.height, ..d.width]),
            self.horizontal.slice_mut(s![..d.height, ..d.width]),
            self.vertical.slice_mut(s![..d.height, ..d.width]),
            self.diagonal.slice_mut(s![..d.height, ..d.width]),
        )
    }

    /// Mutable views of the three detail bands: (horizontal, vertical, diagonal).
    pub fn details_mut(
        &mut self,
    ) -> (
        ArrayViewMut2<'_, i16>,
        ArrayViewMut2<'_, i16>,
        ArrayViewMut2<'_, i16>,
    ) {
        let d = self.dims;
        (
            self.horizontal.slice_mut(s![..d.height, ..d.width]),
            self.vertical.slice_mut(s![..d.height, ..d.width]),
            self.diagonal.slice_mut(s![..d.height, ..d.width]),
        )
    }

    /// Heap bytes held by the four bands.
    pub fn byte_size(&self) -> usize {
        4 * self.approx.len() * std::mem::size_of::<i16>()
    }
}
