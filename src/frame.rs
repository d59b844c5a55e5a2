//! Per-frame coalescing of high-rate input samples.

/// Pointer coordinates relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Converts a raw `scrollY` reading into a pixel offset.
pub fn scroll_offset(raw: f64) -> u32 {
    if raw.is_finite() && raw > 0.0 {
        raw.min(u32::MAX as f64).round() as u32
    } else {
        0
    }
}

/// Collapses any number of samples arriving within one animation frame into
/// a single commit carrying the latest sample.
///
/// `sample` reports whether the caller must schedule a frame callback; at most
/// one is outstanding at a time. The frame callback calls `on_frame` to take
/// the value to commit.
#[derive(Debug, Clone)]
pub struct FrameThrottle<T> {
    pending: Option<T>,
    scheduled: bool,
    detached: bool,
}

impl<T> Default for FrameThrottle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameThrottle<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            scheduled: false,
            detached: false,
        }
    }

    pub fn sample(&mut self, value: T) -> bool {
        if self.detached {
            return false;
        }
        self.pending = Some(value);
        if self.scheduled {
            false
        } else {
            self.scheduled = true;
            true
        }
    }

    pub fn on_frame(&mut self) -> Option<T> {
        self.scheduled = false;
        if self.detached {
            return None;
        }
        self.pending.take()
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Drops any pending sample and refuses new ones.
    pub fn detach(&mut self) {
        self.detached = true;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_many_samples_one_commit() {
        let mut throttle = FrameThrottle::new();
        let requested = (1..=25u32)
            .map(|y| throttle.sample(y * 10))
            .filter(|requested| *requested)
            .count();
        assert_eq!(requested, 1);
        assert!(throttle.is_scheduled());

        assert_eq!(throttle.on_frame(), Some(250));
        assert_eq!(throttle.on_frame(), None);
        assert!(!throttle.is_scheduled());
    }

    #[test]
    fn test_next_frame_after_commit() {
        let mut throttle = FrameThrottle::new();
        assert!(throttle.sample(PointerPosition::new(1, 2)));
        assert_eq!(throttle.on_frame(), Some(PointerPosition::new(1, 2)));

        assert!(throttle.sample(PointerPosition::new(3, 4)));
        assert!(!throttle.sample(PointerPosition::new(5, 6)));
        assert_eq!(throttle.on_frame(), Some(PointerPosition::new(5, 6)));
    }

    #[test]
    fn test_detached_throttle_commits_nothing() {
        let mut throttle = FrameThrottle::new();
        assert!(throttle.sample(40u32));
        throttle.detach();
        // the frame that was already requested still fires
        assert_eq!(throttle.on_frame(), None);
        assert!(!throttle.sample(80));
        assert_eq!(throttle.on_frame(), None);
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0.0), 0);
        assert_eq!(scroll_offset(-12.0), 0);
        assert_eq!(scroll_offset(120.4), 120);
        assert_eq!(scroll_offset(f64::NAN), 0);
        assert_eq!(scroll_offset(f64::INFINITY), 0);
    }
}
