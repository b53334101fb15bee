pub mod aggregate;
pub mod consts;
pub mod csf;
pub mod decouple;
pub mod dwt;
pub mod error;
pub mod frame;
pub mod io;
pub mod masking;
pub mod pipeline;
