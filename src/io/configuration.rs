//! Solver constants and runtime configuration defaults

/// Largest supported board edge length
///
/// The solve loop is O(N⁴) per run length in the worst case, which stays
/// comfortable up to this bound.
pub const MAX_BOARD_SIZE: usize = 16;

/// Region symbols accepted by the text puzzle format, in id order
pub const REGION_SYMBOLS: &str = "0123456789abcdef";

/// RGBA fill color per region id
pub const REGION_PALETTE: [[u8; 4]; MAX_BOARD_SIZE] = [
    [230, 120, 110, 255],
    [120, 180, 230, 255],
    [140, 210, 140, 255],
    [240, 200, 100, 255],
    [190, 140, 220, 255],
    [240, 160, 90, 255],
    [110, 200, 200, 255],
    [220, 140, 180, 255],
    [170, 170, 120, 255],
    [150, 150, 230, 255],
    [200, 230, 120, 255],
    [230, 180, 160, 255],
    [120, 160, 150, 255],
    [210, 210, 210, 255],
    [180, 130, 110, 255],
    [130, 130, 130, 255],
];

/// Overlay color for queen markers
pub const QUEEN_COLOR: [u8; 4] = [20, 20, 20, 255];

/// Overlay color for no-go markers
pub const NO_GO_COLOR: [u8; 4] = [60, 60, 60, 255];

/// Edge length of one cell in exported images, in pixels
pub const CELL_PIXELS: usize = 24;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to solved board image filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Suffix added to solve animation filenames
pub const STEPS_SUFFIX: &str = "_steps";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 400;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
