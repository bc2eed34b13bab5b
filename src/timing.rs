//! Wall-clock timing for long-running targets.

use std::time::{Duration, Instant};

use tracing::info;

/// Measures one labelled step and logs how long it took.
///
/// ```rust
/// use worldbuild::Timer;
///
/// let t = Timer::start("Build world");
/// // ... run make ...
/// let elapsed = t.finish();
/// assert!(elapsed.as_secs() < 60);
/// ```
pub struct Timer {
    label: String,
    start: Instant,
}

impl Timer {
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    /// Log the elapsed time and return it.
    pub fn finish(self) -> Duration {
        let elapsed = self.start.elapsed();
        info!("{} took {}", self.label, format_duration(elapsed));
        elapsed
    }
}

/// Seconds below a minute, minutes above.
pub fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs >= 60.0 {
        format!("{:.1}m", secs / 60.0)
    } else {
        format!("{:.1}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
        assert_eq!(format_duration(Duration::from_secs(3600)), "60.0m");
    }
}
