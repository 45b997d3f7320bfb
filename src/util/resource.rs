//! Host resources

/// Worker threads to run when none are configured: one per logical CPU
pub fn available_workers() -> usize {
    num_cpus::get().max(1)
}

/// Physical core count, reported alongside the worker count in debug logs
pub fn physical_cores() -> usize {
    num_cpus::get_physical().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_are_positive() {
        assert!(available_workers() >= 1);
        assert!(physical_cores() >= 1);
    }
}
