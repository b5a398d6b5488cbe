use std::time::{Duration, Instant};

/// Default time a "Copied!" marker stays visible.
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Self-resetting "copied" flag for fire-and-forget clipboard writes.
///
/// Time is passed in explicitly so the flag can be driven by the UI tick.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    duration: Duration,
    copied: Option<(String, Instant)>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_FEEDBACK)
    }
}

impl CopyFeedback {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            copied: None,
        }
    }

    /// Marks `label` as just copied, replacing any previous marker.
    pub fn mark(&mut self, label: impl Into<String>, now: Instant) {
        self.copied = Some((label.into(), now));
    }

    /// Label currently flagged as copied, if the marker has not expired.
    #[must_use]
    pub fn active(&self, now: Instant) -> Option<&str> {
        match &self.copied {
            Some((label, at)) if now.duration_since(*at) < self.duration => Some(label),
            _ => None,
        }
    }

    /// Drops an expired marker. Returns `true` when something was reset.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.copied.is_some() && self.active(now).is_none() {
            self.copied = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resets_after_duration() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.mark("intd_prod_6f8a", start);

        assert_eq!(feedback.active(start + Duration::from_millis(1999)), Some("intd_prod_6f8a"));
        assert!(!feedback.expire(start + Duration::from_millis(1500)));
        assert!(feedback.active(start + Duration::from_secs(2)).is_none());
        assert!(feedback.expire(start + Duration::from_secs(2)));
        assert!(!feedback.expire(start + Duration::from_secs(3)));
    }

    #[test]
    fn new_copy_replaces_marker() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::new(Duration::from_millis(500));
        feedback.mark("a", start);
        feedback.mark("b", start + Duration::from_millis(400));
        assert_eq!(feedback.active(start + Duration::from_millis(800)), Some("b"));
    }
}
