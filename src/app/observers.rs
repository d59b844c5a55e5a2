use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer_with_options, use_window,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};

use crate::{
    frame::{scroll_offset, FrameThrottle, PointerPosition},
    section::SectionId,
    viewport::{ActiveRegion, ObserverOptions, DEFAULT_THRESHOLD},
};

/// Page-wide handle on the active section, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct ActiveSection {
    region: StoredValue<ActiveRegion>,
    current: RwSignal<SectionId>,
}

impl ActiveSection {
    fn new(options: ObserverOptions) -> Self {
        let region = ActiveRegion::new(options);
        let current = RwSignal::new(region.active());
        Self {
            region: StoredValue::new(region),
            current,
        }
    }

    pub fn get(&self) -> SectionId {
        self.current.get()
    }

    fn threshold(&self) -> f64 {
        self.region
            .try_with_value(ActiveRegion::threshold)
            .unwrap_or(DEFAULT_THRESHOLD)
    }

    fn report(&self, id: SectionId, ratio: f64, is_intersecting: bool) {
        let changed = self
            .region
            .try_update_value(|r| r.observe(id.as_str(), ratio, is_intersecting))
            .flatten();
        if let Some(section) = changed {
            self.current.try_set(section);
        }
    }

    fn detach(&self) {
        self.region.try_update_value(ActiveRegion::detach);
    }
}

pub fn provide_active_section(options: ObserverOptions) -> ActiveSection {
    let active = ActiveSection::new(options);
    provide_context(active);
    on_cleanup(move || active.detach());
    active
}

/// Feeds visibility changes of one section element into the page's
/// [`ActiveSection`].
pub fn use_section_visibility(id: SectionId, target: NodeRef<html::Section>) {
    let active = expect_context::<ActiveSection>();
    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                active.report(id, entry.intersection_ratio(), entry.is_intersecting());
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![active.threshold()]),
    );
    on_cleanup(stop);
}

/// Latest scroll offset and pointer position, committed at most once per
/// animation frame each.
#[derive(Debug, Clone, Copy)]
pub struct ScrollSignal {
    pub offset: ReadSignal<u32>,
    pub pointer: ReadSignal<PointerPosition>,
}

pub fn use_scroll_signal() -> ScrollSignal {
    let (offset, set_offset) = signal(0u32);
    let (pointer, set_pointer) = signal(PointerPosition::default());
    let scroll = StoredValue::new(FrameThrottle::<u32>::new());
    let motion = StoredValue::new(FrameThrottle::<PointerPosition>::new());

    let stop_scroll = use_event_listener(use_window(), ev::scroll, move |_| {
        let y = scroll_offset(window().scroll_y().unwrap_or_default());
        if scroll.try_update_value(|t| t.sample(y)).unwrap_or(false) {
            request_animation_frame(move || {
                if let Some(y) = scroll.try_update_value(FrameThrottle::on_frame).flatten() {
                    set_offset.try_set(y);
                }
            });
        }
    });

    let stop_motion = use_event_listener(use_window(), ev::mousemove, move |ev| {
        let position = PointerPosition::new(ev.client_x(), ev.client_y());
        if motion.try_update_value(|t| t.sample(position)).unwrap_or(false) {
            request_animation_frame(move || {
                if let Some(p) = motion.try_update_value(FrameThrottle::on_frame).flatten() {
                    set_pointer.try_set(p);
                }
            });
        }
    });

    on_cleanup(move || {
        stop_scroll();
        stop_motion();
        scroll.try_update_value(FrameThrottle::detach);
        motion.try_update_value(FrameThrottle::detach);
    });

    ScrollSignal { offset, pointer }
}

/// Scrolls the section with the given id into view. Unknown ids and ids with
/// no element on the page are ignored.
pub fn scroll_to_section(id: &str) {
    let section = match id.parse::<SectionId>() {
        Ok(section) => section,
        Err(e) => {
            log::debug!("scroll request ignored: {e}");
            return;
        }
    };
    if let Some(el) = document().get_element_by_id(section.as_str()) {
        el.scroll_into_view();
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_no_commit_after_unmount() {
        let owner = Owner::new();
        let active = owner.with(|| provide_active_section(ObserverOptions::default()));

        active.report(SectionId::About, 0.8, true);
        assert_eq!(active.current.try_get_untracked(), Some(SectionId::About));

        owner.cleanup();
        active.report(SectionId::Contact, 1.0, true);
        assert_ne!(active.current.try_get_untracked(), Some(SectionId::Contact));
        assert_eq!(active.region.try_with_value(ActiveRegion::active), None);
    }

    #[test]
    fn test_report_respects_threshold() {
        let owner = Owner::new();
        owner.with(|| {
            let active = provide_active_section(ObserverOptions::with_threshold(0.9));
            active.report(SectionId::Skills, 0.7, true);
            assert_eq!(active.current.get_untracked(), SectionId::Hero);
            active.report(SectionId::Skills, 0.95, true);
            assert_eq!(active.current.get_untracked(), SectionId::Skills);
        });
    }

    #[test]
    fn test_scroll_signal_released_on_unmount() {
        let owner = Owner::new();
        let scroll = owner.with(use_scroll_signal);
        assert_eq!(scroll.offset.try_get_untracked(), Some(0));
        assert_eq!(scroll.pointer.try_get_untracked(), Some(PointerPosition::default()));

        owner.cleanup();
        assert_eq!(scroll.offset.try_get_untracked(), None);
        assert_eq!(scroll.pointer.try_get_untracked(), None);
    }
}
