/// Source of "now" for token validity checks, in seconds since the epoch.
///
/// The middleware reads time through this seam so tests can pin it.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_close_to_wall_time() {
        let expected = chrono::Utc::now().timestamp();
        let now = SystemClock.now();
        assert!((now - expected).abs() <= 1);
    }

    #[test]
    fn fixed_clock_does_not_move() {
        let clock = FixedClock(42);
        assert_eq!(clock.now(), 42);
        assert_eq!(clock.now(), 42);
    }
}
