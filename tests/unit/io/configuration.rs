//! Tests for domain constants and runtime defaults

#[cfg(test)]
mod tests {
    use rummisolve::io::configuration::{
        COLOR_COUNT, COPIES_PER_TILE, DEFAULT_DEAL_MELDS, DEFAULT_DEAL_RESERVE, DEFAULT_LOG_LEVEL,
        DEFAULT_MAX_BATCH_SIZE, DEFAULT_SEED, GROUP_SIZES, JOKERS_PER_SET, MAX_NUMBER,
        MIN_NUMBER, MIN_RUN_LENGTH, PROGRESS_BAR_WIDTH, TILE_KINDS,
    };

    // Tests the tile domain matches a standard set
    // Verified by changing MAX_NUMBER to 12
    #[test]
    fn test_tile_domain() {
        assert_eq!(COLOR_COUNT, 4);
        assert_eq!((MIN_NUMBER, MAX_NUMBER), (1, 13));
        assert_eq!(TILE_KINDS, 52);
        assert_eq!(COPIES_PER_TILE * TILE_KINDS + JOKERS_PER_SET, 106);
    }

    // Tests meld shapes
    // Verified by allowing groups of two
    #[test]
    fn test_meld_shapes() {
        assert_eq!(MIN_RUN_LENGTH, 3);
        assert_eq!(GROUP_SIZES, [3, 4]);
        assert!(GROUP_SIZES.iter().all(|&size| size <= COLOR_COUNT));
    }

    // Tests runtime defaults
    // Verified by changing default values
    #[test]
    fn test_runtime_defaults() {
        assert_eq!(DEFAULT_MAX_BATCH_SIZE, 3);
        assert_eq!(DEFAULT_SEED, 42);
        assert_eq!(DEFAULT_DEAL_MELDS, 10);
        assert_eq!(DEFAULT_DEAL_RESERVE, 14);
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
        assert_eq!(DEFAULT_LOG_LEVEL, "warn");
    }
}
