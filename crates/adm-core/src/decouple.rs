use crate::consts::{DECOUPLE_ANGLE_DEGREES, DECOUPLE_EPSILON};
use crate::dwt::{Orientation, SubBandSet};

/// `cos^2` of the restoration angle limit, narrowed to f32 once.
pub fn cos_sq_angle_limit() -> f32 {
    let c = (DECOUPLE_ANGLE_DEGREES * std::f64::consts::PI / 180.0).cos();
    (c * c) as f32
}

/// Gain of distorted over reference detail, clamped to [0, 1].
#[inline]
pub fn detail_gain(reference: i32, distorted: i32) -> f32 {
    let k = f64::from(distorted) * (1.0 / f64::from(reference as f32 + DECOUPLE_EPSILON));
    (k as f32).clamp(0.0, 1.0)
}

/// True when the (horizontal, vertical) detail vectors point the same way
/// to within the angle limit.
#[inline]
pub fn within_angle(o_h: i32, o_v: i32, t_h: i32, t_v: i32, cos_sq: f32) -> bool {
    let dp = (i64::from(o_h) * i64::from(t_h) + i64::from(o_v) * i64::from(t_v)) as f32;
    let o_mag_sq = (i64::from(o_h) * i64::from(o_h) + i64::from(o_v) * i64::from(o_v)) as f32;
    let t_mag_sq = (i64::from(t_h) * i64::from(t_h) + i64::from(t_v) * i64::from(t_v)) as f32;
    dp >= 0.0 && dp * dp >= cos_sq * o_mag_sq * t_mag_sq
}

/// Split distorted detail into a restored part and an additive impairment.
///
/// Per pixel and orientation the restored candidate is the reference scaled
/// by the clamped gain. When the horizontal/vertical detail vectors agree in
/// direction the distorted values are taken as restored for all three
/// orientations. Both outputs are ceiled to i16; the impairment is taken
/// against the un-ceiled candidate. The approximation band is not touched.
pub fn decouple(
    reference: &SubBandSet,
    distorted: &SubBandSet,
    restored: &mut SubBandSet,
    impairment: &mut SubBandSet,
) {
    let dims = reference.dims();
    debug_assert_eq!(dims, distorted.dims());
    restored.set_dims(dims);
    impairment.set_dims(dims);

    let cos_sq = cos_sq_angle_limit();

    let ref_h = reference.band(Orientation::Horizontal);
    let ref_v = reference.band(Orientation::Vertical);
    let ref_d = reference.band(Orientation::Diagonal);
    let dist_h = distorted.band(Orientation::Horizontal);
    let dist_v = distorted.band(Orientation::Vertical);
    let dist_d = distorted.band(Orientation::Diagonal);

    let (mut r_h, mut r_v, mut r_d) = restored.details_mut();
    let (mut a_h, mut a_v, mut a_d) = impairment.details_mut();

    for i in 0..dims.height {
        for j in 0..dims.width {
            let oh = i32::from(ref_h[[i, j]]);
            let ov = i32::from(ref_v[[i, j]]);
            let od = i32::from(ref_d[[i, j]]);
            let th = i32::from(dist_h[[i, j]]);
            let tv = i32::from(dist_v[[i, j]]);
            let td = i32::from(dist_d[[i, j]]);

            let (tmph, tmpv, tmpd) = if within_angle(oh, ov, th, tv, cos_sq) {
                (th as f32, tv as f32, td as f32)
            } else {
                (
                    detail_gain(oh, th) * oh as f32,
                    detail_gain(ov, tv) * ov as f32,
                    detail_gain(od, td) * od as f32,
                )
            };

            r_h[[i, j]] = tmph.ceil() as i16;
            r_v[[i, j]] = tmpv.ceil() as i16;
            r_d[[i, j]] = tmpd.ceil() as i16;

            a_h[[i, j]] = (th as f32 - tmph).ceil() as i16;
            a_v[[i, j]] = (tv as f32 - tmpv).ceil() as i16;
            a_d[[i, j]] = (td as f32 - tmpd).ceil() as i16;
        }
    }
}
