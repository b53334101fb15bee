#![allow(dead_code)]

use std::io::Write;

use adm_core::frame::{PixelFormat, Plane};
use adm_core::pipeline::{AdmConfig, AdmState, ScoreResult};
use tempfile::NamedTempFile;

/// Deterministic 8-bit test texture with detail in every orientation.
///
/// Values stay within [18, 238], so scaling or offsetting never clips.
pub fn texture_u8(width: usize, height: usize, seed: f32) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let (xf, yf) = (x as f32, y as f32);
            let v = 128.0 + 60.0 * (0.7 * xf + seed).sin() + 50.0 * (0.45 * yf + 0.3 * xf).cos();
            data.push(v.round() as u8);
        }
    }
    data
}

/// 10-bit counterpart of [`texture_u8`].
pub fn texture_u16(width: usize, height: usize, seed: f32) -> Vec<u16> {
    texture_u8(width, height, seed)
        .into_iter()
        .map(|v| u16::from(v) * 4)
        .collect()
}

pub fn flat_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height]
}

/// Score one 8-bit pair with a fresh state.
pub fn score_u8(width: usize, height: usize, reference: &[u8], distorted: &[u8]) -> ScoreResult {
    let mut state = AdmState::new(AdmConfig::new(width, height, PixelFormat::Yuv420p)).unwrap();
    let r = Plane::from_u8(reference, width, height, width).unwrap();
    let d = Plane::from_u8(distorted, width, height, width).unwrap();
    state.process(&r, &d).unwrap()
}

/// Raw planar file contents: the given luma planes with neutral chroma.
pub fn build_yuv(format: PixelFormat, width: usize, height: usize, lumas: &[Vec<u8>]) -> Vec<u8> {
    let frame_size = format.frame_byte_size(width, height);
    let luma_size = width * height;
    let mut buf = Vec::with_capacity(frame_size * lumas.len());
    for luma in lumas {
        assert_eq!(luma.len(), luma_size);
        buf.extend_from_slice(luma);
        buf.resize(buf.len() + frame_size - luma_size, 128);
    }
    buf
}

/// 10-bit little-endian counterpart of [`build_yuv`].
pub fn build_yuv16(format: PixelFormat, width: usize, height: usize, lumas: &[Vec<u16>]) -> Vec<u8> {
    let frame_size = format.frame_byte_size(width, height);
    let mut buf = Vec::with_capacity(frame_size * lumas.len());
    for luma in lumas {
        let start = buf.len();
        for v in luma {
            buf.extend_from_slice(&v.to_le_bytes());
        }
        while buf.len() < start + frame_size {
            buf.extend_from_slice(&512u16.to_le_bytes());
        }
    }
    buf
}

pub fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(bytes).unwrap();
    tmp.flush().unwrap();
    tmp
}
