use std::fs::File;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use memmap2::Mmap;
use ndarray::Array2;

use crate::error::{AdmError, Result};
use crate::frame::{LumaFrame, LumaSamples, PixelFormat};

/// Memory-mapped reader for headerless planar YUV files.
///
/// Frames are stored back to back as Y, U, V planes. Only the luma plane is
/// ever extracted.
pub struct YuvReader {
    mmap: Mmap,
    width: usize,
    height: usize,
    format: PixelFormat,
    frame_size: usize,
}

impl YuvReader {
    /// Open a raw YUV file with the given geometry and sample format.
    pub fn open(path: &Path, width: usize, height: usize, format: PixelFormat) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AdmError::InvalidDimensions { width, height });
        }
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        let frame_size = format.frame_byte_size(width, height);
        if mmap.len() % frame_size != 0 {
            return Err(AdmError::InvalidYuv(format!(
                "{} bytes is not a whole number of {width}x{height} {format} frames ({frame_size} bytes each)",
                mmap.len()
            )));
        }

        Ok(Self {
            mmap,
            width,
            height,
            format,
            frame_size,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes per complete frame (all three planes).
    pub fn frame_byte_size(&self) -> usize {
        self.frame_size
    }

    pub fn frame_count(&self) -> usize {
        self.mmap.len() / self.frame_size
    }

    /// Raw bytes of one complete frame (zero-copy from the mapping).
    pub fn frame_raw(&self, index: usize) -> Result<&[u8]> {
        let total = self.frame_count();
        if index >= total {
            return Err(AdmError::FrameIndexOutOfRange { index, total });
        }
        let offset = index * self.frame_size;
        Ok(&self.mmap[offset..offset + self.frame_size])
    }

    /// Raw bytes of the luma plane of one frame.
    pub fn luma_raw(&self, index: usize) -> Result<&[u8]> {
        let luma_bytes = self.width * self.height * self.format.bytes_per_sample();
        Ok(&self.frame_raw(index)?[..luma_bytes])
    }

    /// Copy the luma plane of one frame out of the mapping.
    pub fn read_luma(&self, index: usize) -> Result<LumaFrame> {
        let raw = self.luma_raw(index)?;
        let shape = (self.height, self.width);

        let samples = if self.format.bytes_per_sample() == 1 {
            LumaSamples::U8(Array2::from_shape_vec(shape, raw.to_vec()).map_err(shape_error)?)
        } else {
            let mut buf = vec![0u16; self.width * self.height];
            LittleEndian::read_u16_into(raw, &mut buf);
            LumaSamples::U16(Array2::from_shape_vec(shape, buf).map_err(shape_error)?)
        };

        Ok(LumaFrame {
            samples,
            bit_depth: self.format.bit_depth(),
            frame_index: index,
        })
    }

    /// Iterator over the luma planes of all frames.
    pub fn frames(&self) -> impl Iterator<Item = Result<LumaFrame>> + '_ {
        (0..self.frame_count()).map(move |i| self.read_luma(i))
    }
}

fn shape_error(err: ndarray::ShapeError) -> AdmError {
    AdmError::InvalidYuv(format!("luma plane shape: {err}"))
}
