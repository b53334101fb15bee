pub mod config;
pub mod info;
pub mod score;

use adm_core::error::AdmError;
use adm_core::frame::PixelFormat;

/// Clap value parser for `--format`.
pub fn parse_format(s: &str) -> Result<PixelFormat, AdmError> {
    s.parse()
}
