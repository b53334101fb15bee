use num_traits::AsPrimitive;

/// Read strategy for the sample types the wavelet transform accepts.
///
/// Scale 0 reads the caller's 8-bit or 16-bit-container plane; later scales
/// read the previous scale's signed approximation band. The filter logic is
/// identical for all three, only the widening read differs.
pub trait Sample: Copy + AsPrimitive<i32> {
    #[inline(always)]
    fn read(self) -> i32 {
        self.as_()
    }
}

impl Sample for u8 {}
impl Sample for u16 {}
impl Sample for i16 {}
