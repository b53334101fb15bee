use crate::consts::{NUM_SCALES, SCORE_METADATA_KEY};

/// Numerator and denominator contributed by one scale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleScore {
    pub num: f64,
    pub den: f64,
}

/// Per-frame ADM output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub num: f64,
    pub den: f64,
    pub scales: [ScaleScore; NUM_SCALES],
}

impl ScoreResult {
    /// Per-scale breakdown as `[num_0, den_0, num_1, den_1, ...]`.
    pub fn flattened(&self) -> [f64; 2 * NUM_SCALES] {
        let mut out = [0.0; 2 * NUM_SCALES];
        for (scale, s) in self.scales.iter().enumerate() {
            out[2 * scale] = s.num;
            out[2 * scale + 1] = s.den;
        }
        out
    }

    /// Frame metadata entry: key and score with 2 decimals.
    pub fn metadata(&self) -> (&'static str, String) {
        (SCORE_METADATA_KEY, format!("{:.2}", self.score))
    }
}

/// Score of one frame pair within a sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameScore {
    pub frame_index: usize,
    pub result: ScoreResult,
}

/// Outcome of scoring a whole sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SequenceSummary {
    /// Scored frames in frame order.
    pub frames: Vec<FrameScore>,
    /// Distorted frames with no reference counterpart, forwarded unscored.
    pub passed_through: usize,
    /// Mean score over `frames`, 0.0 when nothing was scored.
    pub average: f64,
}

impl SequenceSummary {
    pub fn new(frames: Vec<FrameScore>, passed_through: usize) -> Self {
        let average = if frames.is_empty() {
            0.0
        } else {
            frames.iter().map(|f| f.result.score).sum::<f64>() / frames.len() as f64
        };
        Self {
            frames,
            passed_through,
            average,
        }
    }
}
