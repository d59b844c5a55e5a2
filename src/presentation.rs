//! Visual parameters derived from the live page state.

use crate::{frame::PointerPosition, section::SectionId};

pub const CURSOR_SIZE: i32 = 24;
pub const STAR_COUNT: usize = 50;
const STAR_SEED: u64 = 0x5eed_cafe_f00d_d00d;

/// Everything the page recomputes per render from the active section, the
/// scroll offset and the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub backdrop_shift: f64,
    pub headline_shift: f64,
    pub cursor_left: i32,
    pub cursor_top: i32,
    pub cursor_scale: f64,
}

impl Presentation {
    pub fn derive(active: SectionId, scroll_offset: u32, pointer: PointerPosition) -> Self {
        let offset = f64::from(scroll_offset);
        Self {
            backdrop_shift: offset * 0.5,
            headline_shift: offset * -0.2,
            cursor_left: pointer.x - CURSOR_SIZE / 2,
            cursor_top: pointer.y - CURSOR_SIZE / 2,
            cursor_scale: if active == SectionId::Hero { 1.5 } else { 1.0 },
        }
    }

    pub fn backdrop_transform(&self) -> String {
        translate_y(self.backdrop_shift)
    }

    pub fn headline_transform(&self) -> String {
        translate_y(self.headline_shift)
    }

    pub fn cursor_transform(&self) -> String {
        format!("scale({})", self.cursor_scale)
    }
}

pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

pub fn nav_link_class(active: SectionId, link: SectionId) -> &'static str {
    if active == link {
        "text-purple-400 hover:text-purple-400 transition-colors duration-300 relative group"
    } else {
        "hover:text-purple-400 transition-colors duration-300 relative group"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            TimelineSide::Left
        } else {
            TimelineSide::Right
        }
    }

    pub fn row_class(self) -> &'static str {
        match self {
            TimelineSide::Left => "mb-12 flex items-center flex-row",
            TimelineSide::Right => "mb-12 flex items-center flex-row-reverse",
        }
    }

    pub fn content_class(self) -> &'static str {
        match self {
            TimelineSide::Left => "w-1/2 pr-8 text-right",
            TimelineSide::Right => "w-1/2 pl-8 text-left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub id: usize,
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
}

impl Star {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s",
            self.left, self.top, self.delay, self.duration
        )
    }
}

/// xorshift64*, enough to scatter stars. Seeded so the server-rendered and
/// hydrated backgrounds are identical.
struct Scatter(u64);

impl Scatter {
    fn unit(&mut self) -> f64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        let bits = self.0.wrapping_mul(0x2545_f491_4f6c_dd1d) >> 11;
        bits as f64 / (1u64 << 53) as f64
    }
}

pub fn starfield(count: usize) -> Vec<Star> {
    let mut scatter = Scatter(STAR_SEED);
    (0..count)
        .map(|id| Star {
            id,
            left: scatter.unit() * 100.0,
            top: scatter.unit() * 100.0,
            delay: scatter.unit() * 3.0,
            duration: 2.0 + scatter.unit() * 3.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_and_cursor() {
        let p = Presentation::derive(SectionId::Hero, 100, PointerPosition::new(50, 80));
        assert_eq!(p.backdrop_shift, 50.0);
        assert_eq!(p.headline_shift, -20.0);
        assert_eq!((p.cursor_left, p.cursor_top), (38, 68));
        assert_eq!(p.cursor_scale, 1.5);
        assert_eq!(p.backdrop_transform(), "translateY(50px)");
        assert_eq!(p.cursor_transform(), "scale(1.5)");

        let p = Presentation::derive(SectionId::Skills, 0, PointerPosition::default());
        assert_eq!(p.cursor_scale, 1.0);
        assert_eq!(p.backdrop_shift, 0.0);
        assert_eq!((p.cursor_left, p.cursor_top), (-12, -12));
    }

    #[test]
    fn test_nav_highlight() {
        let highlighted = SectionId::NAV
            .into_iter()
            .filter(|link| nav_link_class(SectionId::Skills, *link).starts_with("text-purple-400"))
            .collect::<Vec<_>>();
        assert_eq!(highlighted, vec![SectionId::Skills]);
    }

    #[test]
    fn test_timeline_alternates() {
        let sides: Vec<_> = (0..4).map(TimelineSide::for_index).collect();
        assert_eq!(
            sides,
            [
                TimelineSide::Left,
                TimelineSide::Right,
                TimelineSide::Left,
                TimelineSide::Right
            ]
        );
    }

    #[test]
    fn test_starfield_is_stable_and_in_range() {
        let stars = starfield(STAR_COUNT);
        assert_eq!(stars.len(), STAR_COUNT);
        assert_eq!(stars, starfield(STAR_COUNT));
        for (i, star) in stars.iter().enumerate() {
            assert_eq!(star.id, i);
            assert!((0.0..100.0).contains(&star.left));
            assert!((0.0..100.0).contains(&star.top));
            assert!((0.0..3.0).contains(&star.delay));
            assert!((2.0..5.0).contains(&star.duration));
        }
    }
}
