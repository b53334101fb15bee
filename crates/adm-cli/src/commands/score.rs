use std::path::{Path, PathBuf};

use adm_core::frame::PixelFormat;
use adm_core::io::stats::StatsWriter;
use adm_core::io::yuv::YuvReader;
use adm_core::pipeline::{
    score_sequence, score_sequence_parallel, AdmConfig, AdmState, RunConfig, SequenceSummary,
    StatsConfig, StatsLabel,
};
use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use super::parse_format;
use crate::summary::{print_run_summary, print_score_summary};

#[derive(Clone, Copy, ValueEnum)]
pub enum StatsLabelArg {
    /// Legacy label expected by existing log parsers
    Vif,
    Adm,
}

impl From<StatsLabelArg> for StatsLabel {
    fn from(arg: StatsLabelArg) -> Self {
        match arg {
            StatsLabelArg::Vif => StatsLabel::Vif,
            StatsLabelArg::Adm => StatsLabel::Adm,
        }
    }
}

#[derive(Args)]
pub struct ScoreArgs {
    /// Reference (undistorted) raw YUV file
    pub reference: Option<PathBuf>,

    /// Distorted raw YUV file
    pub distorted: Option<PathBuf>,

    /// Run config file (TOML); replaces all other options
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Frame width in pixels
    #[arg(long, default_value = "1920")]
    pub width: usize,

    /// Frame height in pixels
    #[arg(long, default_value = "1080")]
    pub height: usize,

    /// Pixel format (yuv420p, yuv422p, yuv444p and their 10le variants)
    #[arg(long, default_value = "yuv420p", value_parser = parse_format)]
    pub format: PixelFormat,

    /// Write per-frame stats lines to this file (`-` for stdout)
    #[arg(long)]
    pub stats_file: Option<PathBuf>,

    /// Label printed before the score on each stats line
    #[arg(long, value_enum, default_value = "vif")]
    pub stats_label: StatsLabelArg,

    /// Score frame chunks in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Worker threads for --parallel (defaults to all cores)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Print every frame's score
    #[arg(long)]
    pub per_frame: bool,
}

pub fn run(args: &ScoreArgs) -> Result<()> {
    let config: RunConfig = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid run config")?
    } else {
        build_config_from_args(args)?
    };

    let adm = config.adm;
    let reference = YuvReader::open(&config.reference, adm.width, adm.height, adm.pixel_format)
        .with_context(|| format!("Failed to open reference {}", config.reference.display()))?;
    let distorted = YuvReader::open(&config.distorted, adm.width, adm.height, adm.pixel_format)
        .with_context(|| format!("Failed to open distorted {}", config.distorted.display()))?;

    print_run_summary(&config, reference.frame_count(), distorted.frame_count());

    let paired = reference.frame_count().min(distorted.frame_count());
    let pb = ProgressBar::new(paired as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Scoring frames");

    let summary = if config.parallel {
        score_parallel(&reference, &distorted, &adm, args.threads, &pb)?
    } else {
        let mut state = AdmState::new(adm)?;
        let summary = score_sequence(&reference, &distorted, &mut state, |_| pb.inc(1))?;
        state.finish();
        summary
    };
    pb.finish_with_message("Done");

    if let Some(ref path) = config.stats.file {
        write_stats(path, config.stats.label, &summary)?;
    }

    print_score_summary(&summary, args.per_frame);
    Ok(())
}

fn score_parallel(
    reference: &YuvReader,
    distorted: &YuvReader,
    adm: &AdmConfig,
    threads: Option<usize>,
    pb: &ProgressBar,
) -> Result<SequenceSummary> {
    let progress: &(dyn Fn(usize) + Sync) = &|done| pb.set_position(done as u64);
    let score = || score_sequence_parallel(reference, distorted, adm, Some(progress));

    let summary = match threads {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .context("Failed to build worker pool")?
            .install(score)?,
        None => score()?,
    };
    tracing::info!(frames = summary.frames.len(), "ADM AVG: {:.3}", summary.average);
    Ok(summary)
}

fn write_stats(path: &Path, label: StatsLabel, summary: &SequenceSummary) -> Result<()> {
    let mut writer = StatsWriter::create(path, label)
        .with_context(|| format!("Failed to create stats file {}", path.display()))?;
    for frame in &summary.frames {
        writer.write_frame(frame.frame_index, frame.result.score)?;
    }
    writer.finalize()?;
    Ok(())
}

fn build_config_from_args(args: &ScoreArgs) -> Result<RunConfig> {
    let (Some(reference), Some(distorted)) = (&args.reference, &args.distorted) else {
        bail!("Both reference and distorted files are required unless --config is given");
    };

    Ok(RunConfig {
        reference: reference.clone(),
        distorted: distorted.clone(),
        adm: AdmConfig::new(args.width, args.height, args.format),
        stats: StatsConfig {
            file: args.stats_file.clone(),
            label: args.stats_label.into(),
        },
        parallel: args.parallel,
    })
}
