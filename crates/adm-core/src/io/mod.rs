pub mod stats;
pub mod yuv;
