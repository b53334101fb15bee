pub mod band;
pub mod sample;
pub mod transform;

pub use band::{Orientation, ScaleDims, SubBandSet};
pub use sample::Sample;
pub use transform::{mirror_index, Db2Coefficients, WaveletTransform};
