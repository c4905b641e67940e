/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Detail-enhancing 3x3 kernel: center +9, neighbors -1.
pub const SHARPEN_KERNEL: [[f32; 3]; 3] = [
    [-1.0, -1.0, -1.0],
    [-1.0, 9.0, -1.0],
    [-1.0, -1.0, -1.0],
];

/// 4-neighbor Laplacian kernel.
pub const LAPLACIAN_KERNEL: [[f32; 3]; 3] = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];

/// Default block size for the smoothed focus estimate. The smoothing
/// kernel is `block_size + 1` wide.
pub const DEFAULT_FOCUS_BLOCK_SIZE: usize = 16;

/// Upper bound of the sensitivity control.
pub const MAX_SENSITIVITY: u32 = 100;

/// Default sensitivity when a request does not carry one.
pub const DEFAULT_SENSITIVITY: u32 = 50;

/// Base of the selectivity factor: `selectivity = 1.5 - sensitivity / 100`.
pub const SELECTIVITY_BASE: f64 = 1.5;

/// Lower clamp of the adaptive threshold, as a multiple of the focus map mean.
pub const THRESHOLD_MIN_MEAN_FACTOR: f64 = 1.2;

/// Upper clamp of the adaptive threshold, as a multiple of the focus map mean.
pub const THRESHOLD_MAX_MEAN_FACTOR: f64 = 3.0;

/// Divisor applied to `(100 - sensitivity)` when deriving the low edge threshold.
pub const EDGE_SENSITIVITY_DIVISOR: f64 = 1.5;

/// Ratio between high and low hysteresis thresholds.
pub const EDGE_HIGH_LOW_RATIO: u32 = 3;

/// Default low-threshold base for webcam sources.
pub const DEFAULT_WEBCAM_EDGE_BASE: f64 = 50.0;

/// Default low-threshold base for file sources.
pub const DEFAULT_FILE_EDGE_BASE: f64 = 70.0;

/// Sensitivity above which webcam masks get an extra dilation.
pub const DEFAULT_WEBCAM_DILATION_CUTOFF: u32 = 60;

/// Sensitivity above which file masks get an extra dilation.
pub const DEFAULT_FILE_DILATION_CUTOFF: u32 = 70;

/// JPEG quality for webcam results.
pub const DEFAULT_WEBCAM_ENCODE_QUALITY: u8 = 95;

/// JPEG quality for file results.
pub const DEFAULT_FILE_ENCODE_QUALITY: u8 = 75;

/// Default overlay blend weight.
pub const DEFAULT_OVERLAY_ALPHA: f32 = 0.4;

/// Downscale targets for file sources as (sensitivity lower bound, max dimension).
/// The first entry whose bound is strictly exceeded wins.
pub const DOWNSCALE_STEPS: [(u32, usize); 3] = [(80, 720), (60, 640), (40, 576)];

/// Max dimension used when sensitivity does not exceed any `DOWNSCALE_STEPS` bound.
pub const DOWNSCALE_FLOOR_DIMENSION: usize = 512;
