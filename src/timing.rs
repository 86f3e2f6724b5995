use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

static TIMING_ENABLED: AtomicBool = AtomicBool::new(false);

/// Turn stage timing on or off for the rest of the process
pub fn init(enabled: bool) {
    TIMING_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::Relaxed)
}

/// Log a timing message to stderr if timing is enabled
pub fn log(label: &str, duration: Duration) {
    if is_enabled() {
        eprintln!("[TIMING] {}: {:.3}ms", label, duration.as_secs_f64() * 1000.0);
    }
}

/// Logs the time since construction when dropped
pub struct TimingGuard {
    label: &'static str,
    start: Instant,
}

impl TimingGuard {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        log(self.label, self.start.elapsed());
    }
}

/// Time a block of code
#[macro_export]
macro_rules! time_block {
    ($label:expr, $block:expr) => {{
        let start = std::time::Instant::now();
        let result = $block;
        $crate::timing::log($label, start.elapsed());
        result
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn time_block_returns_block_value() {
        let value = crate::time_block!("sum", 2 + 3);
        assert_eq!(value, 5);
    }

    #[test]
    fn guard_can_be_dropped_while_disabled() {
        let guard = super::TimingGuard::new("noop");
        drop(guard);
    }
}
