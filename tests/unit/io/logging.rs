//! Tests for verbosity mapping and subscriber installation

#[cfg(test)]
mod tests {
    use aoc2023::io::configuration::DEFAULT_LOG_LEVEL;
    use aoc2023::io::logging::{init, level_for};

    // Tests each verbosity count selects a more detailed level
    // Verified by capping verbosity at debug
    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), DEFAULT_LOG_LEVEL);
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(u8::MAX), "trace");
    }

    // Tests a second installation is refused rather than panicking
    // Verified by calling the panicking init
    #[test]
    fn test_init_is_idempotent() {
        let _first = init(0);
        assert!(!init(2));
    }
}
