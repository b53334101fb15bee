pub mod arena;
pub mod config;
mod sequence;
mod state;
mod types;

pub use config::{AdmConfig, RunConfig, StatsConfig, StatsLabel};
pub use sequence::{score_sequence, score_sequence_parallel};
pub use state::{fold_scores, AdmState};
pub use types::{FrameScore, ScaleScore, ScoreResult, SequenceSummary};
