mod common;

use adm_core::error::AdmError;
use adm_core::frame::{LumaSamples, PixelFormat};
use adm_core::io::yuv::YuvReader;

use common::{build_yuv, build_yuv16, texture_u16, texture_u8, write_temp};

#[test]
fn test_read_8bit_frames() {
    let lumas: Vec<Vec<u8>> = (0..3).map(|i| texture_u8(8, 6, i as f32)).collect();
    let tmp = write_temp(&build_yuv(PixelFormat::Yuv420p, 8, 6, &lumas));

    let reader = YuvReader::open(tmp.path(), 8, 6, PixelFormat::Yuv420p).unwrap();
    assert_eq!(reader.frame_count(), 3);
    assert_eq!(reader.frame_byte_size(), 72);
    assert_eq!((reader.width(), reader.height()), (8, 6));

    let frame = reader.read_luma(1).unwrap();
    assert_eq!(frame.frame_index, 1);
    assert_eq!(frame.bit_depth, 8);
    assert_eq!((frame.width(), frame.height()), (8, 6));
    match frame.samples {
        LumaSamples::U8(ref a) => assert_eq!(a.iter().copied().collect::<Vec<_>>(), lumas[1]),
        LumaSamples::U16(_) => panic!("expected 8-bit samples"),
    }
    assert_eq!(reader.luma_raw(2).unwrap(), &lumas[2][..]);
}

#[test]
fn test_read_10bit_frames() {
    let lumas: Vec<Vec<u16>> = (0..2).map(|i| texture_u16(6, 4, i as f32)).collect();
    let tmp = write_temp(&build_yuv16(PixelFormat::Yuv444p10le, 6, 4, &lumas));

    let reader = YuvReader::open(tmp.path(), 6, 4, PixelFormat::Yuv444p10le).unwrap();
    assert_eq!(reader.frame_count(), 2);

    let frame = reader.read_luma(0).unwrap();
    assert_eq!(frame.bit_depth, 10);
    match frame.samples {
        LumaSamples::U16(ref a) => assert_eq!(a.iter().copied().collect::<Vec<_>>(), lumas[0]),
        LumaSamples::U8(_) => panic!("expected 16-bit samples"),
    }
    assert_eq!(frame.plane().bit_depth(), 10);
}

#[test]
fn test_frames_iterator() {
    let lumas: Vec<Vec<u8>> = (0..4).map(|i| texture_u8(4, 4, i as f32)).collect();
    let tmp = write_temp(&build_yuv(PixelFormat::Yuv422p, 4, 4, &lumas));

    let reader = YuvReader::open(tmp.path(), 4, 4, PixelFormat::Yuv422p).unwrap();
    let indices: Vec<usize> = reader.frames().map(|f| f.unwrap().frame_index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn test_truncated_file_rejected() {
    let mut bytes = build_yuv(PixelFormat::Yuv420p, 4, 4, &[vec![0u8; 16]]);
    bytes.pop();
    let tmp = write_temp(&bytes);

    let result = YuvReader::open(tmp.path(), 4, 4, PixelFormat::Yuv420p);
    assert!(matches!(result, Err(AdmError::InvalidYuv(_))));
}

#[test]
fn test_frame_index_out_of_range() {
    let tmp = write_temp(&build_yuv(PixelFormat::Yuv420p, 4, 4, &[vec![1u8; 16]]));
    let reader = YuvReader::open(tmp.path(), 4, 4, PixelFormat::Yuv420p).unwrap();

    assert!(matches!(
        reader.read_luma(1),
        Err(AdmError::FrameIndexOutOfRange { index: 1, total: 1 })
    ));
}

#[test]
fn test_zero_geometry_rejected() {
    let tmp = write_temp(&[0u8; 24]);
    assert!(matches!(
        YuvReader::open(tmp.path(), 0, 4, PixelFormat::Yuv420p),
        Err(AdmError::InvalidDimensions { width: 0, height: 4 })
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = YuvReader::open(&dir.path().join("missing.yuv"), 4, 4, PixelFormat::Yuv420p);
    assert!(matches!(result, Err(AdmError::Io(_))));
}
