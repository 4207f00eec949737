use chrono::Utc;

/// Source of wall-clock time for identifier generation.
///
/// Issuance reads the clock exactly once per certificate. Substituting a
/// [`FixedClock`] makes identifiers reproducible.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(1_234);
        assert_eq!(clock.now_millis(), 1_234);

        fn read<C: Clock>(clock: C) -> i64 {
            clock.now_millis()
        }
        assert_eq!(read(&clock), 1_234);
    }
}
