/// Number of wavelet decomposition levels scored per frame.
pub const NUM_SCALES: usize = 4;

/// Fixed-point fraction bits (Q15) used by every integer filter stage.
pub const BIT_SHIFT: u32 = 15;

/// Daubechies-2 analysis low-pass filter.
pub const DB2_LO: [f32; 4] = [
    0.482_962_913_144_690,
    0.836_516_303_737_469,
    0.224_143_868_041_857,
    -0.129_409_522_550_921,
];

/// Daubechies-2 analysis high-pass filter (time-reversed, sign-alternated low-pass).
pub const DB2_HI: [f32; 4] = [
    -0.129_409_522_550_921,
    -0.224_143_868_041_857,
    0.836_516_303_737_469,
    -0.482_962_913_144_690,
];

/// Basis function amplitudes Q(lambda, theta) from Watson et al.,
/// "Visibility of Wavelet Quantization Noise" (1997), Table V, transposed.
///
/// Indexed `[scale][class]`, class 0 = horizontal/vertical, 1 = diagonal.
pub const CSF_AMPLITUDES: [[f32; 2]; NUM_SCALES] = [
    [57.534_645, 169.767_41],
    [31.265_896, 69.937_431],
    [23.056_629, 40.990_15],
    [21.895_033, 31.936_741],
];

/// Contrast masking neighbourhood weight for the centre pixel.
pub const MASK_CENTER_WEIGHT: f64 = 1.0 / 15.0;

/// Contrast masking neighbourhood weight for each of the 8 neighbours.
pub const MASK_NEIGHBOR_WEIGHT: f64 = 1.0 / 30.0;

/// Fraction of each edge excluded from the cubic-norm aggregation.
pub const ADM_BORDER_FACTOR: f64 = 0.1;

/// Guard added to the reference coefficient in the decoupler gain.
pub const DECOUPLE_EPSILON: f32 = 1e-30;

/// Maximum angle (degrees) between reference and distorted detail vectors
/// for the distorted detail to count as fully restored.
pub const DECOUPLE_ANGLE_DEGREES: f64 = 1.0;

/// Numerator/denominator noise floor at the reference resolution.
pub const NOISE_FLOOR: f64 = 1e-2;

/// Reference resolution (pixels) the noise floor is expressed against.
pub const NOISE_FLOOR_REFERENCE_PIXELS: f64 = 1920.0 * 1080.0;

/// Minimum number of frame pairs before sequence scoring fans out over
/// Rayon workers.
pub const PARALLEL_FRAME_THRESHOLD: usize = 4;

/// Frames handed to one worker (and one working-buffer arena) at a time
/// during parallel sequence scoring.
pub const PARALLEL_CHUNK_FRAMES: usize = 8;

/// Metadata key the per-frame score is published under.
pub const SCORE_METADATA_KEY: &str = "lavfi.adm.score";
