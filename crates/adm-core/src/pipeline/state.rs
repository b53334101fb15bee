use ndarray::s;
use tracing::{debug, info};

use crate::aggregate::detail_contribution;
use crate::consts::{ADM_BORDER_FACTOR, NUM_SCALES};
use crate::csf::{apply_csf, CsfTable};
use crate::decouple::decouple;
use crate::dwt::{Db2Coefficients, ScaleDims, SubBandSet, WaveletTransform};
use crate::error::{AdmError, Result};
use crate::frame::{Plane, PlaneSamples};
use crate::masking::{apply_masking, threshold_map};

use super::arena::WorkArena;
use super::config::AdmConfig;
use super::types::{ScaleScore, ScoreResult};

/// Long-lived ADM pipeline for one stream configuration.
///
/// Owns the working buffers, the fixed-point filter tables and the running
/// lifetime average. Buffers are rewritten on every call, so one state must
/// not score two frame pairs at once; use one state per worker instead.
#[derive(Debug)]
pub struct AdmState {
    config: AdmConfig,
    transform: WaveletTransform,
    csf: CsfTable,
    arena: WorkArena,
    frames: u64,
    score_sum: f64,
}

impl AdmState {
    /// Allocate all buffers for `config`. Fails without a partial state if
    /// any allocation fails.
    pub fn new(config: AdmConfig) -> Result<Self> {
        config.validate()?;
        let arena = WorkArena::new(config.width, config.height)?;
        let transform = WaveletTransform::new(Db2Coefficients::fixed_point(), config.width)?;

        debug!(
            width = config.width,
            height = config.height,
            format = %config.pixel_format,
            arena_bytes = arena.byte_size(),
            "ADM state allocated"
        );

        Ok(Self {
            config,
            transform,
            csf: CsfTable::new(),
            arena,
            frames: 0,
            score_sum: 0.0,
        })
    }

    pub fn config(&self) -> &AdmConfig {
        &self.config
    }

    pub fn coefficients(&self) -> &Db2Coefficients {
        self.transform.coefficients()
    }

    pub fn csf_table(&self) -> &CsfTable {
        &self.csf
    }

    /// Score one reference/distorted pair and fold it into the lifetime average.
    pub fn process(&mut self, reference: &Plane<'_>, distorted: &Plane<'_>) -> Result<ScoreResult> {
        self.check_plane(reference)?;
        self.check_plane(distorted)?;

        let result = self.compute(reference, distorted);
        self.frames += 1;
        self.score_sum += result.score;
        Ok(result)
    }

    /// Number of frame pairs scored so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Mean score over the stream's lifetime, 0.0 before the first frame.
    pub fn average(&self) -> f64 {
        if self.frames > 0 {
            self.score_sum / self.frames as f64
        } else {
            0.0
        }
    }

    /// Tear the stream down, releasing its buffers, and return the lifetime average.
    pub fn finish(self) -> f64 {
        let avg = self.average();
        if self.frames > 0 {
            info!(frames = self.frames, "ADM AVG: {avg:.3}");
        }
        avg
    }

    fn check_plane(&self, plane: &Plane<'_>) -> Result<()> {
        let expected = (self.config.width, self.config.height);
        let actual = (plane.width(), plane.height());
        if expected != actual {
            return Err(AdmError::DimensionMismatch { expected, actual });
        }

        let depth = self.config.pixel_format.bit_depth();
        let container_matches = match plane.samples() {
            PlaneSamples::U8(_) => depth <= 8,
            PlaneSamples::U16(_) => depth > 8,
        };
        if plane.bit_depth() != depth || !container_matches {
            return Err(AdmError::FormatMismatch {
                expected: depth,
                actual: plane.bit_depth(),
            });
        }
        Ok(())
    }

    fn compute(&mut self, reference: &Plane<'_>, distorted: &Plane<'_>) -> ScoreResult {
        let mut num = 0.0f64;
        let mut den = 0.0f64;
        let mut scales = [ScaleScore::default(); NUM_SCALES];
        let mut input_dims = ScaleDims::new(self.config.width, self.config.height);

        for (scale, slot) in scales.iter_mut().enumerate() {
            let arena = &mut self.arena;

            let dims = if scale == 0 {
                forward_plane(&mut self.transform, reference, &mut arena.ref_dwt);
                forward_plane(&mut self.transform, distorted, &mut arena.dist_dwt)
            } else {
                let (h, w) = (input_dims.height, input_dims.width);
                self.transform
                    .forward(arena.ref_scale.slice(s![..h, ..w]), &mut arena.ref_dwt);
                self.transform
                    .forward(arena.dist_scale.slice(s![..h, ..w]), &mut arena.dist_dwt)
            };

            decouple(
                &arena.ref_dwt,
                &arena.dist_dwt,
                &mut arena.restored,
                &mut arena.impairment,
            );

            apply_csf(&self.csf, scale, &arena.ref_dwt, &mut arena.csf_ref);
            apply_csf(&self.csf, scale, &arena.restored, &mut arena.csf_restored);
            apply_csf(&self.csf, scale, &arena.impairment, &mut arena.csf_impairment);

            threshold_map(&arena.csf_impairment, &mut arena.threshold);
            apply_masking(&arena.csf_restored, &arena.threshold, &mut arena.masked);

            let num_scale = detail_contribution(&arena.masked, ADM_BORDER_FACTOR);
            let den_scale = detail_contribution(&arena.csf_ref, ADM_BORDER_FACTOR);

            debug!(scale, dims = %dims, num_scale, den_scale, "ADM scale scored");

            num += num_scale;
            den += den_scale;
            *slot = ScaleScore {
                num: num_scale,
                den: den_scale,
            };

            arena.handoff();
            input_dims = dims;
        }

        fold_scores(num, den, self.config.noise_floor(), scales)
    }
}

fn forward_plane(transform: &mut WaveletTransform, plane: &Plane<'_>, dst: &mut SubBandSet) -> ScaleDims {
    match plane.samples() {
        PlaneSamples::U8(view) => transform.forward(view, dst),
        PlaneSamples::U16(view) => transform.forward(view, dst),
    }
}

/// Apply the noise floor to the summed numerator/denominator and form the score.
///
/// Sums below `limit` are zeroed; a zero denominator yields exactly 1.0.
pub fn fold_scores(num: f64, den: f64, limit: f64, scales: [ScaleScore; NUM_SCALES]) -> ScoreResult {
    let num = if num < limit { 0.0 } else { num };
    let den = if den < limit { 0.0 } else { den };
    let score = if den == 0.0 { 1.0 } else { num / den };
    ScoreResult {
        score,
        num,
        den,
        scales,
    }
}
