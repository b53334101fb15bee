use ndarray::Array2;

use adm_core::dwt::{Orientation, ScaleDims, SubBandSet};
use adm_core::masking::{apply_masking, mask_weights, threshold_map};

#[test]
fn test_mask_weights() {
    assert_eq!(mask_weights(), (2185, 1092));
}

#[test]
fn test_threshold_of_single_impulse() {
    let mut impairment = SubBandSet::with_capacity(ScaleDims::new(3, 3)).unwrap();
    impairment.band_mut(Orientation::Horizontal)[[1, 1]] = -300;
    let mut threshold = Array2::<i16>::from_elem((3, 3), 99);

    threshold_map(&impairment, &mut threshold);

    // Centre weight once.
    assert_eq!(threshold[[1, 1]], 20);
    // Index -1 reflects onto row/column 1, so the leading corner sees the
    // impulse four times and the leading edge midpoint twice.
    assert_eq!(threshold[[0, 0]], 39);
    assert_eq!(threshold[[0, 1]], 19);
    // Past the far edge the last sample repeats instead: one hit each.
    assert_eq!(threshold[[2, 2]], 9);
    assert_eq!(threshold[[1, 2]], 9);
}

#[test]
fn test_threshold_accumulates_orientations() {
    let mut impairment = SubBandSet::with_capacity(ScaleDims::new(3, 3)).unwrap();
    impairment.band_mut(Orientation::Horizontal)[[1, 1]] = 300;
    impairment.band_mut(Orientation::Diagonal)[[1, 1]] = 300;
    let mut threshold = Array2::<i16>::zeros((3, 3));

    threshold_map(&impairment, &mut threshold);
    assert_eq!(threshold[[1, 1]], 40);
}

#[test]
fn test_threshold_zero_without_impairment() {
    let impairment = SubBandSet::with_capacity(ScaleDims::new(4, 2)).unwrap();
    let mut threshold = Array2::<i16>::from_elem((2, 4), 7);
    threshold_map(&impairment, &mut threshold);
    assert!(threshold.iter().all(|&t| t == 0));
}

#[test]
fn test_masking_subtracts_threshold() {
    let mut restored = SubBandSet::with_capacity(ScaleDims::new(3, 1)).unwrap();
    {
        let mut h = restored.band_mut(Orientation::Horizontal);
        h[[0, 0]] = -50;
        h[[0, 1]] = 10;
        h[[0, 2]] = 25;
    }
    let threshold = Array2::<i16>::from_elem((1, 3), 20);
    let mut masked = SubBandSet::with_capacity(ScaleDims::new(3, 1)).unwrap();

    apply_masking(&restored, &threshold, &mut masked);

    let h = masked.band(Orientation::Horizontal);
    assert_eq!(h[[0, 0]], 30);
    assert_eq!(h[[0, 1]], 0);
    assert_eq!(h[[0, 2]], 5);
    assert!(masked.band(Orientation::Vertical).iter().all(|&v| v == 0));
}

#[test]
fn test_single_pixel_threshold() {
    let mut impairment = SubBandSet::with_capacity(ScaleDims::new(1, 1)).unwrap();
    impairment.band_mut(Orientation::Vertical)[[0, 0]] = 100;
    let mut threshold = Array2::<i16>::zeros((1, 1));

    threshold_map(&impairment, &mut threshold);
    // All nine taps land on the one pixel: (2185 + 8 * 1092) * 100 >> 15.
    assert_eq!(threshold[[0, 0]], (((2185 + 8 * 1092) * 100) >> 15) as i16);
}
