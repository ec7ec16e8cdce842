//! Click counter state.

/// Per-instance click count. Monotonic; resets only when the owning
/// gallery is rebuilt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickCounter {
    count: u32,
}

impl ClickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_and_increments_by_one() {
        let mut counter = ClickCounter::new();
        assert_eq!(counter.count(), 0);
        for expected in 1..=100 {
            counter.increment();
            assert_eq!(counter.count(), expected);
        }
    }
}
