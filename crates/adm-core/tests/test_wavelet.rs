mod common;

use ndarray::{Array2, ArrayView2};

use adm_core::dwt::{mirror_index, Db2Coefficients, Orientation, ScaleDims, SubBandSet, WaveletTransform};

fn transform_for(width: usize, height: usize) -> (WaveletTransform, SubBandSet) {
    let wt = WaveletTransform::new(Db2Coefficients::fixed_point(), width).unwrap();
    let bands = SubBandSet::with_capacity(ScaleDims::new(width, height).half()).unwrap();
    (wt, bands)
}

#[test]
fn test_mirror_index_reflects_both_edges() {
    assert_eq!(mirror_index(-1, 5), 1);
    assert_eq!(mirror_index(-2, 5), 2);
    assert_eq!(mirror_index(0, 5), 0);
    assert_eq!(mirror_index(4, 5), 4);
    assert_eq!(mirror_index(5, 5), 4);
    assert_eq!(mirror_index(6, 5), 3);
}

#[test]
fn test_mirror_index_tiny_sizes_stay_in_bounds() {
    for idx in -3..6 {
        assert_eq!(mirror_index(idx, 1), 0);
        assert!(mirror_index(idx, 2) < 2, "idx {idx} escaped size 2");
    }
    assert_eq!(mirror_index(2, 2), 1);
    assert_eq!(mirror_index(3, 2), 0);
}

#[test]
fn test_fixed_point_coefficients() {
    let c = Db2Coefficients::fixed_point();
    assert_eq!(c.lo, [15826, 27411, 7345, -4240]);
    assert_eq!(c.hi, [-4240, -7345, 27411, -15826]);
    assert_eq!(c.taps(), 4);
    // High-pass taps cancel exactly, so flat regions carry no detail.
    assert_eq!(c.hi.iter().sum::<i32>(), 0);
}

#[test]
fn test_pyramid_halves_with_ceiling() {
    let dims = ScaleDims::pyramid(5, 5);
    assert_eq!(dims[0], ScaleDims::new(3, 3));
    assert_eq!(dims[1], ScaleDims::new(2, 2));
    assert_eq!(dims[2], ScaleDims::new(1, 1));
    assert_eq!(dims[3], ScaleDims::new(1, 1));

    let hd = ScaleDims::pyramid(1920, 1080);
    assert_eq!(hd[0], ScaleDims::new(960, 540));
    assert_eq!(hd[3], ScaleDims::new(120, 68));
    assert_eq!(hd[3].to_string(), "120x68");
}

#[test]
fn test_forward_output_size_for_odd_input() {
    let (mut wt, mut bands) = transform_for(5, 3);
    let src = Array2::<u8>::zeros((3, 5));
    let out = wt.forward(src.view(), &mut bands);
    assert_eq!(out, ScaleDims::new(3, 2));
    assert_eq!(bands.dims(), out);
    assert_eq!(bands.approx().dim(), (2, 3));
}

#[test]
fn test_flat_image_has_zero_detail() {
    let (mut wt, mut bands) = transform_for(8, 8);
    let src = Array2::<u8>::from_elem((8, 8), 100);
    wt.forward(src.view(), &mut bands);

    for o in Orientation::ALL {
        assert!(bands.band(o).iter().all(|&v| v == 0), "{o} band not zero");
    }
    // (46342 * 100) >> 15 = 141, then (46342 * 141) >> 15 = 199.
    assert!(bands.approx().iter().all(|&v| v == 199));
}

#[test]
fn test_column_edge_only_excites_vertical_band() {
    let (mut wt, mut bands) = transform_for(16, 8);
    let src = Array2::<u8>::from_shape_fn((8, 16), |(_, c)| if c < 7 { 10 } else { 200 });
    wt.forward(src.view(), &mut bands);

    assert!(bands.band(Orientation::Horizontal).iter().all(|&v| v == 0));
    assert!(bands.band(Orientation::Diagonal).iter().all(|&v| v == 0));
    assert!(bands.band(Orientation::Vertical).iter().any(|&v| v != 0));
}

#[test]
fn test_single_pixel_input() {
    let (mut wt, mut bands) = transform_for(1, 1);
    let src = Array2::<u8>::from_elem((1, 1), 7);
    let out = wt.forward(src.view(), &mut bands);
    assert_eq!(out, ScaleDims::new(1, 1));
    assert_eq!(bands.approx()[[0, 0]], 12);
    for o in Orientation::ALL {
        assert_eq!(bands.band(o)[[0, 0]], 0);
    }
}

#[test]
fn test_sample_containers_agree() {
    let data8 = common::texture_u8(12, 10, 0.0);
    let data16: Vec<u16> = data8.iter().map(|&v| u16::from(v)).collect();

    let (mut wt, mut bands8) = transform_for(12, 10);
    let (_, mut bands16) = transform_for(12, 10);
    wt.forward(ArrayView2::from_shape((10, 12), &data8).unwrap(), &mut bands8);
    wt.forward(ArrayView2::from_shape((10, 12), &data16).unwrap(), &mut bands16);

    assert_eq!(bands8.approx(), bands16.approx());
    for o in Orientation::ALL {
        assert_eq!(bands8.band(o), bands16.band(o));
    }
}

#[test]
fn test_sub_band_set_reuses_capacity() {
    let (mut wt, mut bands) = transform_for(10, 10);
    assert_eq!(bands.capacity(), ScaleDims::new(5, 5));

    let small = Array2::<u8>::from_elem((4, 4), 50);
    let out = wt.forward(small.view(), &mut bands);
    assert_eq!(out, ScaleDims::new(2, 2));
    assert_eq!(bands.capacity(), ScaleDims::new(5, 5));
    assert_eq!(bands.stride(), 5);
    assert_eq!(bands.band(Orientation::Diagonal).dim(), (2, 2));
}
