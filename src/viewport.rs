//! Tracks which page region is "in view".
//!
//! The browser reports visibility changes per observed element. A region
//! becomes active when a report shows it at least `threshold` visible; the
//! most recent such report wins. Reports below the threshold never clear the
//! active region, so the last known region sticks while nothing qualifies.

use crate::section::SectionId;

pub const DEFAULT_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ObserverOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: normalize_threshold(threshold),
        }
    }
}

/// Clamps into `(0, 1]`; NaN falls back to the default.
fn normalize_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_THRESHOLD
    } else {
        threshold.clamp(f64::EPSILON, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct ActiveRegion {
    active: SectionId,
    threshold: f64,
    detached: bool,
}

impl Default for ActiveRegion {
    fn default() -> Self {
        Self::new(ObserverOptions::default())
    }
}

impl ActiveRegion {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            active: SectionId::default(),
            threshold: normalize_threshold(options.threshold),
            detached: false,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Applies one visibility report. Returns the new active region when the
    /// report changed it.
    pub fn observe(&mut self, id: &str, ratio: f64, is_intersecting: bool) -> Option<SectionId> {
        if self.detached || !is_intersecting || ratio < self.threshold {
            return None;
        }
        let section = match id.parse::<SectionId>() {
            Ok(section) => section,
            Err(e) => {
                log::debug!("ignoring visibility report: {e}");
                return None;
            }
        };
        if section == self.active {
            return None;
        }
        log::debug!("active section {} -> {}", self.active, section);
        self.active = section;
        Some(section)
    }

    /// Stops accepting reports. Called on unmount.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_hero() {
        let region = ActiveRegion::default();
        assert_eq!(region.active(), SectionId::Hero);
        assert_eq!(region.threshold(), 0.6);
    }

    #[test]
    fn test_every_section_becomes_active_once_visible() {
        let mut region = ActiveRegion::default();
        for section in SectionId::ALL.into_iter().rev() {
            region.observe(section.as_str(), 0.6, true);
            assert_eq!(region.active(), section);
        }
    }

    #[test]
    fn test_below_threshold_is_ignored() {
        let mut region = ActiveRegion::default();
        assert_eq!(region.observe("skills", 0.59, true), None);
        assert_eq!(region.active(), SectionId::Hero);
        assert_eq!(region.observe("skills", 0.75, true), Some(SectionId::Skills));
    }

    #[test]
    fn test_sticky_when_nothing_intersects() {
        let mut region = ActiveRegion::default();
        region.observe("projects", 1.0, true);
        assert_eq!(region.observe("projects", 0.0, false), None);
        assert_eq!(region.observe("about", 0.2, true), None);
        assert_eq!(region.active(), SectionId::Projects);
    }

    #[test]
    fn test_most_recent_report_wins() {
        let mut region = ActiveRegion::default();
        region.observe("about", 0.9, true);
        region.observe("projects", 0.6, true);
        assert_eq!(region.active(), SectionId::Projects);
        // repeated report for the current region is not a change
        assert_eq!(region.observe("projects", 0.8, true), None);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut region = ActiveRegion::default();
        assert_eq!(region.observe("footer", 1.0, true), None);
        assert_eq!(region.observe("", 1.0, true), None);
        assert_eq!(region.active(), SectionId::Hero);
    }

    #[test]
    fn test_custom_threshold() {
        let mut region = ActiveRegion::new(ObserverOptions::with_threshold(0.25));
        assert_eq!(region.observe("contact", 0.3, true), Some(SectionId::Contact));

        assert_eq!(ObserverOptions::with_threshold(3.0).threshold, 1.0);
        assert!(ObserverOptions::with_threshold(-1.0).threshold > 0.0);
        assert_eq!(ObserverOptions::with_threshold(f64::NAN).threshold, 0.6);
    }

    #[test]
    fn test_literal_options_are_clamped() {
        let mut region = ActiveRegion::new(ObserverOptions { threshold: 0.0 });
        assert!(region.threshold() > 0.0);
        assert_eq!(region.observe("contact", 0.0, true), None);

        let mut region = ActiveRegion::new(ObserverOptions { threshold: f64::NAN });
        assert_eq!(region.threshold(), DEFAULT_THRESHOLD);
        assert_eq!(region.observe("contact", 0.1, true), None);
        assert_eq!(region.observe("contact", 0.6, true), Some(SectionId::Contact));

        let region = ActiveRegion::new(ObserverOptions { threshold: 7.5 });
        assert_eq!(region.threshold(), 1.0);
    }

    #[test]
    fn test_detached_tracker_ignores_reports() {
        let mut region = ActiveRegion::default();
        region.detach();
        assert!(region.is_detached());
        assert_eq!(region.observe("about", 1.0, true), None);
        assert_eq!(region.active(), SectionId::Hero);
    }
}
