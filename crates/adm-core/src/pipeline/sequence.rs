use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::consts::{PARALLEL_CHUNK_FRAMES, PARALLEL_FRAME_THRESHOLD};
use crate::error::{AdmError, Result};
use crate::io::yuv::YuvReader;

use super::config::AdmConfig;
use super::state::AdmState;
use super::types::{FrameScore, SequenceSummary};

/// Score every distorted frame that has a reference counterpart.
///
/// Frame `i` of `distorted` is paired with frame `i` of `reference`.
/// Distorted frames past the end of the reference are passed through
/// unscored. `on_frame` is called after each scored pair.
pub fn score_sequence(
    reference: &YuvReader,
    distorted: &YuvReader,
    state: &mut AdmState,
    mut on_frame: impl FnMut(&FrameScore),
) -> Result<SequenceSummary> {
    let paired = pair_count(reference, distorted, state.config())?;

    let mut frames = Vec::with_capacity(paired);
    for index in 0..paired {
        let score = score_pair(reference, distorted, state, index)?;
        on_frame(&score);
        frames.push(score);
    }

    let passed_through = report_pass_through(distorted.frame_count(), paired);
    Ok(SequenceSummary::new(frames, passed_through))
}

/// Parallel variant of [`score_sequence`].
///
/// Frames are split into contiguous chunks; each Rayon task owns a fresh
/// [`AdmState`] for its chunk. Scores are identical to the sequential path.
/// `on_progress` receives the number of frames scored so far.
pub fn score_sequence_parallel(
    reference: &YuvReader,
    distorted: &YuvReader,
    config: &AdmConfig,
    on_progress: Option<&(dyn Fn(usize) + Sync)>,
) -> Result<SequenceSummary> {
    let paired = pair_count(reference, distorted, config)?;

    if paired < PARALLEL_FRAME_THRESHOLD {
        let mut state = AdmState::new(*config)?;
        let mut done = 0usize;
        return score_sequence(reference, distorted, &mut state, |_| {
            done += 1;
            if let Some(progress) = on_progress {
                progress(done);
            }
        });
    }

    info!(
        frames = paired,
        chunk = PARALLEL_CHUNK_FRAMES,
        "Scoring frame chunks in parallel"
    );

    let indices: Vec<usize> = (0..paired).collect();
    let done = AtomicUsize::new(0);

    let chunks: Vec<Vec<FrameScore>> = indices
        .par_chunks(PARALLEL_CHUNK_FRAMES)
        .map(|chunk| {
            let mut state = AdmState::new(*config)?;
            chunk
                .iter()
                .map(|&index| {
                    let score = score_pair(reference, distorted, &mut state, index)?;
                    let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(progress) = on_progress {
                        progress(completed);
                    }
                    Ok(score)
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<_>>()?;

    let frames: Vec<FrameScore> = chunks.into_iter().flatten().collect();
    let passed_through = report_pass_through(distorted.frame_count(), paired);
    Ok(SequenceSummary::new(frames, passed_through))
}

fn pair_count(reference: &YuvReader, distorted: &YuvReader, config: &AdmConfig) -> Result<usize> {
    let expected = (config.width, config.height);
    for reader in [reference, distorted] {
        let actual = (reader.width(), reader.height());
        if actual != expected {
            return Err(AdmError::DimensionMismatch { expected, actual });
        }
        let depth = reader.format().bit_depth();
        if depth != config.pixel_format.bit_depth() {
            return Err(AdmError::FormatMismatch {
                expected: config.pixel_format.bit_depth(),
                actual: depth,
            });
        }
    }

    if distorted.frame_count() == 0 {
        return Err(AdmError::EmptySequence);
    }
    Ok(reference.frame_count().min(distorted.frame_count()))
}

fn score_pair(
    reference: &YuvReader,
    distorted: &YuvReader,
    state: &mut AdmState,
    index: usize,
) -> Result<FrameScore> {
    let ref_frame = reference.read_luma(index)?;
    let dist_frame = distorted.read_luma(index)?;
    let result = state.process(&ref_frame.plane(), &dist_frame.plane())?;
    Ok(FrameScore {
        frame_index: index,
        result,
    })
}

fn report_pass_through(distorted_frames: usize, paired: usize) -> usize {
    let passed = distorted_frames - paired;
    if passed > 0 {
        debug!(
            first = paired,
            count = passed,
            "Distorted frames without a reference passed through unscored"
        );
    }
    passed
}
