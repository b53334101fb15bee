use std::path::PathBuf;

use adm_core::dwt::ScaleDims;
use adm_core::frame::PixelFormat;
use adm_core::io::yuv::YuvReader;
use adm_core::pipeline::AdmConfig;
use anyhow::Result;
use clap::Args;

use super::parse_format;

#[derive(Args)]
pub struct InfoArgs {
    /// Raw planar YUV file
    pub file: PathBuf,

    /// Frame width in pixels
    #[arg(long)]
    pub width: usize,

    /// Frame height in pixels
    #[arg(long)]
    pub height: usize,

    /// Pixel format (yuv420p, yuv422p, yuv444p and their 10le variants)
    #[arg(long, default_value = "yuv420p", value_parser = parse_format)]
    pub format: PixelFormat,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let reader = YuvReader::open(&args.file, args.width, args.height, args.format)?;
    let config = AdmConfig::new(args.width, args.height, args.format);

    println!("File:        {}", args.file.display());
    println!("Frames:      {}", reader.frame_count());
    println!("Dimensions:  {}x{}", reader.width(), reader.height());
    println!("Format:      {}", reader.format());
    println!("Bit depth:   {}", reader.format().bit_depth());
    println!("Frame size:  {} bytes", reader.frame_byte_size());

    let total_mb = (reader.frame_byte_size() * reader.frame_count()) as f64 / (1024.0 * 1024.0);
    println!("Data size:   {:.1} MB", total_mb);

    let pyramid = ScaleDims::pyramid(args.width, args.height)
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    println!("Sub-bands:   {}", pyramid);
    println!("Noise floor: {:.6}", config.noise_floor());

    Ok(())
}
