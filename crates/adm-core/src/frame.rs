use std::fmt;

use ndarray::{Array2, ArrayView2, ShapeBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{AdmError, Result};

/// Planar pixel formats accepted for scoring. Only the luma plane is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    #[default]
    Yuv420p,
    Yuv422p,
    Yuv444p,
    Yuv420p10le,
    Yuv422p10le,
    Yuv444p10le,
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 6] = [
        Self::Yuv420p,
        Self::Yuv422p,
        Self::Yuv444p,
        Self::Yuv420p10le,
        Self::Yuv422p10le,
        Self::Yuv444p10le,
    ];

    /// Luma bit depth (8 or 10).
    pub fn bit_depth(self) -> u8 {
        match self {
            Self::Yuv420p | Self::Yuv422p | Self::Yuv444p => 8,
            Self::Yuv420p10le | Self::Yuv422p10le | Self::Yuv444p10le => 10,
        }
    }

    /// Bytes per stored sample (10-bit samples live in 16-bit containers).
    pub fn bytes_per_sample(self) -> usize {
        if self.bit_depth() <= 8 { 1 } else { 2 }
    }

    /// Horizontal and vertical chroma subsampling shifts.
    pub fn chroma_shift(self) -> (u32, u32) {
        match self {
            Self::Yuv420p | Self::Yuv420p10le => (1, 1),
            Self::Yuv422p | Self::Yuv422p10le => (1, 0),
            Self::Yuv444p | Self::Yuv444p10le => (0, 0),
        }
    }

    /// Size in bytes of one complete planar frame (Y + U + V).
    pub fn frame_byte_size(self, width: usize, height: usize) -> usize {
        let (sx, sy) = self.chroma_shift();
        let chroma_w = (width + (1 << sx) - 1) >> sx;
        let chroma_h = (height + (1 << sy) - 1) >> sy;
        (width * height + 2 * chroma_w * chroma_h) * self.bytes_per_sample()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Yuv420p => "yuv420p",
            Self::Yuv422p => "yuv422p",
            Self::Yuv444p => "yuv444p",
            Self::Yuv420p10le => "yuv420p10le",
            Self::Yuv422p10le => "yuv422p10le",
            Self::Yuv444p10le => "yuv444p10le",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PixelFormat {
    type Err = AdmError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|fmt| fmt.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AdmError::InvalidYuv(format!("unsupported pixel format '{s}'")))
    }
}

/// Borrowed samples of one plane, row stride carried by the view.
#[derive(Clone, Copy, Debug)]
pub enum PlaneSamples<'a> {
    U8(ArrayView2<'a, u8>),
    U16(ArrayView2<'a, u16>),
}

/// Read-only view of a single image plane owned by the caller.
#[derive(Clone, Copy, Debug)]
pub struct Plane<'a> {
    samples: PlaneSamples<'a>,
    bit_depth: u8,
    stride: usize,
}

impl<'a> Plane<'a> {
    /// Wrap 8-bit samples. `stride` is in samples.
    pub fn from_u8(data: &'a [u8], width: usize, height: usize, stride: usize) -> Result<Self> {
        let view = strided_view(data, width, height, stride)?;
        Ok(Self {
            samples: PlaneSamples::U8(view),
            bit_depth: 8,
            stride,
        })
    }

    /// Wrap 16-bit container samples (e.g. 10-bit video). `stride` is in samples.
    pub fn from_u16(
        data: &'a [u16],
        width: usize,
        height: usize,
        stride: usize,
        bit_depth: u8,
    ) -> Result<Self> {
        let view = strided_view(data, width, height, stride)?;
        Ok(Self {
            samples: PlaneSamples::U16(view),
            bit_depth,
            stride,
        })
    }

    pub fn width(&self) -> usize {
        match &self.samples {
            PlaneSamples::U8(v) => v.ncols(),
            PlaneSamples::U16(v) => v.ncols(),
        }
    }

    pub fn height(&self) -> usize {
        match &self.samples {
            PlaneSamples::U8(v) => v.nrows(),
            PlaneSamples::U16(v) => v.nrows(),
        }
    }

    pub fn bit_depth(&self) -> u8 {
        self.bit_depth
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn samples(&self) -> PlaneSamples<'a> {
        self.samples
    }
}

fn strided_view<T>(data: &[T], width: usize, height: usize, stride: usize) -> Result<ArrayView2<'_, T>> {
    if width == 0 || height == 0 {
        return Err(AdmError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(AdmError::InvalidStride { stride, width });
    }
    let needed = stride * (height - 1) + width;
    if data.len() < needed {
        return Err(AdmError::PlaneTooSmall {
            needed,
            actual: data.len(),
        });
    }
    ArrayView2::from_shape((height, width).strides((stride, 1)), &data[..needed]).map_err(|_| {
        AdmError::PlaneTooSmall {
            needed,
            actual: data.len(),
        }
    })
}

/// Owned luma samples, as read from a raw video file.
#[derive(Clone, Debug)]
pub enum LumaSamples {
    U8(Array2<u8>),
    U16(Array2<u16>),
}

/// A single owned luma plane plus its position in the source stream.
#[derive(Clone, Debug)]
pub struct LumaFrame {
    pub samples: LumaSamples,
    pub bit_depth: u8,
    pub frame_index: usize,
}

impl LumaFrame {
    pub fn width(&self) -> usize {
        match &self.samples {
            LumaSamples::U8(a) => a.ncols(),
            LumaSamples::U16(a) => a.ncols(),
        }
    }

    pub fn height(&self) -> usize {
        match &self.samples {
            LumaSamples::U8(a) => a.nrows(),
            LumaSamples::U16(a) => a.nrows(),
        }
    }

    /// Borrow as a [`Plane`] for scoring.
    pub fn plane(&self) -> Plane<'_> {
        let (samples, stride) = match &self.samples {
            LumaSamples::U8(a) => (PlaneSamples::U8(a.view()), a.ncols()),
            LumaSamples::U16(a) => (PlaneSamples::U16(a.view()), a.ncols()),
        };
        Plane {
            samples,
            bit_depth: self.bit_depth,
            stride,
        }
    }
}
