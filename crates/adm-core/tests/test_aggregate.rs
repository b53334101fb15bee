use ndarray::Array2;

use adm_core::aggregate::{border, detail_contribution, scored_region, sum_cube};
use adm_core::consts::ADM_BORDER_FACTOR;
use adm_core::dwt::{Orientation, ScaleDims, SubBandSet};

#[test]
fn test_border_truncates() {
    assert_eq!(border(1920, ADM_BORDER_FACTOR), 191);
    assert_eq!(border(20, ADM_BORDER_FACTOR), 1);
    assert_eq!(border(10, ADM_BORDER_FACTOR), 0);
    assert_eq!(border(5, ADM_BORDER_FACTOR), 0);
    assert_eq!(border(1, ADM_BORDER_FACTOR), 0);
}

#[test]
fn test_scored_region() {
    assert_eq!(scored_region(20, 10, ADM_BORDER_FACTOR), (0, 10, 1, 19));
    assert_eq!(scored_region(1, 1, ADM_BORDER_FACTOR), (0, 1, 0, 1));
}

#[test]
fn test_zero_band_keeps_area_term() {
    let band = Array2::<i16>::zeros((4, 4));
    // ceil(cbrt(16 / 32)) = 1.
    assert_eq!(sum_cube(band.view(), ADM_BORDER_FACTOR), 1.0);
}

#[test]
fn test_sum_cube_of_constant_band() {
    // 18x18 region of |2|^3: ceil(cbrt(2592)) + ceil(cbrt(324 / 32)) = 14 + 3.
    let positive = Array2::<i16>::from_elem((20, 20), 2);
    let negative = Array2::<i16>::from_elem((20, 20), -2);
    assert_eq!(sum_cube(positive.view(), ADM_BORDER_FACTOR), 17.0);
    assert_eq!(sum_cube(negative.view(), ADM_BORDER_FACTOR), 17.0);
}

#[test]
fn test_border_pixels_are_ignored() {
    let mut band = Array2::<i16>::zeros((20, 20));
    band[[0, 0]] = 100;
    band[[19, 19]] = -100;
    assert_eq!(sum_cube(band.view(), ADM_BORDER_FACTOR), 3.0);
}

#[test]
fn test_cubes_do_not_overflow() {
    let band = Array2::<i16>::from_elem((2, 2), i16::MAX);
    let expected = (4.0 * 32767f64.powi(3)).cbrt().ceil() + 1.0;
    assert_eq!(sum_cube(band.view(), ADM_BORDER_FACTOR), expected);
}

#[test]
fn test_detail_contribution_sums_three_bands() {
    let mut set = SubBandSet::with_capacity(ScaleDims::new(4, 4)).unwrap();
    set.band_mut(Orientation::Horizontal).fill(2);
    // Approximation is never scored.
    let (mut approx, _, _, _) = set.bands_mut();
    approx.fill(1000);

    let h = sum_cube(set.band(Orientation::Horizontal), ADM_BORDER_FACTOR);
    assert_eq!(detail_contribution(&set, ADM_BORDER_FACTOR), h + 1.0 + 1.0);
}
