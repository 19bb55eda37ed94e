//! Domain constants and runtime configuration defaults

// Tile domain
/// Number of tile colors
pub const COLOR_COUNT: usize = 4;
/// Lowest tile number
pub const MIN_NUMBER: u8 = 1;
/// Highest tile number
pub const MAX_NUMBER: u8 = 13;
/// Number of distinct colored tile identities
pub const TILE_KINDS: usize = COLOR_COUNT * MAX_NUMBER as usize;

// Meld shapes
/// Shortest legal run
pub const MIN_RUN_LENGTH: usize = 3;
/// Legal group sizes, smallest first
pub const GROUP_SIZES: [usize; 2] = [3, 4];

// Standard set composition used by the dealer
/// Copies of each colored tile in a standard set
pub const COPIES_PER_TILE: usize = 2;
/// Jokers in a standard set
pub const JOKERS_PER_SET: usize = 2;

// Placement driver defaults
/// Largest reserve batch tried in a single round
pub const DEFAULT_MAX_BATCH_SIZE: usize = 3;

// Dealer defaults
/// Fixed seed for reproducible deals
pub const DEFAULT_SEED: u64 = 42;
/// Melds laid on a dealt board
pub const DEFAULT_DEAL_MELDS: usize = 10;
/// Tiles drawn into a dealt reserve
pub const DEFAULT_DEAL_RESERVE: usize = 14;

// Progress and logging
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Log level used when no verbosity flag or `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
