//! src/model/banner.rs
//! ============================================================================
//! # Banner: walking-letters title animation state
//!
//! The title's letters move in three positional groups: the first and last
//! letter walk together, the second and second-to-last walk in the opposite
//! direction, and the interior letters rock gently at half rate. The
//! animation only runs while the view sits "at the top" (first gallery
//! focused); elsewhere the banner freezes to its static layout.

use tracing::trace;

/// Movement group of one banner letter, derived from its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkGroup {
    /// First and last letter, one direction.
    Outer,
    /// Second and second-to-last letter, opposite direction.
    Inner,
    /// Everything in between, gentle rock.
    Rock,
}

impl WalkGroup {
    fn for_position(index: usize, len: usize) -> Self {
        let last = len.saturating_sub(1);
        if index == 0 || index == last {
            Self::Outer
        } else if index == 1 || index + 1 == last {
            Self::Inner
        } else {
            Self::Rock
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct BannerLetter {
    ch: char,
    group: WalkGroup,
}

/// Animated title banner state. Pure data; rendering lives in the view.
#[derive(Debug, Clone)]
pub struct Banner {
    letters: Vec<BannerLetter>,
    phase: u32,
    animating: bool,
}

impl Banner {
    pub fn new(title: &str) -> Self {
        let len = title.chars().count();
        let letters = title
            .chars()
            .enumerate()
            .map(|(i, ch)| BannerLetter {
                ch,
                group: WalkGroup::for_position(i, len),
            })
            .collect();

        Self {
            letters,
            phase: 0,
            animating: true,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Starts or stops the walk. Stopping resets the phase so every letter
    /// falls back to the static rest row.
    pub fn set_animating(&mut self, on: bool) {
        if self.animating != on {
            trace!("banner animation {}", if on { "resumed" } else { "stopped" });
        }
        self.animating = on;
        if !on {
            self.phase = 0;
        }
    }

    /// One animation step; a no-op while frozen.
    pub fn tick(&mut self) {
        if self.animating {
            self.phase = self.phase.wrapping_add(1);
        }
    }

    /// Vertical offset of the letter at `index`, in {-1, 0, 1}.
    pub fn offset(&self, index: usize) -> i8 {
        if !self.animating {
            return 0;
        }
        let Some(letter) = self.letters.get(index) else {
            return 0;
        };
        let dir: i8 = if self.phase % 2 == 0 { -1 } else { 1 };
        match letter.group {
            WalkGroup::Outer => dir,
            WalkGroup::Inner => -dir,
            // half-rate rock
            WalkGroup::Rock => {
                if self.phase % 4 < 2 {
                    0
                } else {
                    dir
                }
            }
        }
    }

    pub fn group(&self, index: usize) -> Option<WalkGroup> {
        self.letters.get(index).map(|l| l.group)
    }

    /// Letters with their current offsets, in order.
    pub fn letters(&self) -> impl Iterator<Item = (char, i8)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .map(|(i, l)| (l.ch, self.offset(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_is_positional() {
        // L-O-C-O-M-O-T-I-O-N: 0 and 9 outer, 1 and 8 inner, rest rock
        let b = Banner::new("LOCOMOTION");
        assert_eq!(b.group(0), Some(WalkGroup::Outer));
        assert_eq!(b.group(9), Some(WalkGroup::Outer));
        assert_eq!(b.group(1), Some(WalkGroup::Inner));
        assert_eq!(b.group(8), Some(WalkGroup::Inner));
        for i in 2..=7 {
            assert_eq!(b.group(i), Some(WalkGroup::Rock));
        }
    }

    #[test]
    fn short_titles_do_not_panic() {
        assert_eq!(Banner::new("A").group(0), Some(WalkGroup::Outer));
        let two = Banner::new("AB");
        assert_eq!(two.group(0), Some(WalkGroup::Outer));
        assert_eq!(two.group(1), Some(WalkGroup::Outer));
        assert!(Banner::new("").letters().next().is_none());
    }

    #[test]
    fn outer_and_inner_move_in_opposition() {
        let mut b = Banner::new("LOCOMOTION");
        for _ in 0..8 {
            b.tick();
            assert_eq!(b.offset(0), b.offset(9));
            assert_eq!(b.offset(1), b.offset(8));
            assert_eq!(b.offset(0), -b.offset(1));
        }
    }

    #[test]
    fn frozen_banner_is_static() {
        let mut b = Banner::new("LOCOMOTION");
        b.tick();
        b.set_animating(false);
        for i in 0..10 {
            assert_eq!(b.offset(i), 0);
        }
        // ticks while frozen do nothing
        b.tick();
        assert_eq!(b.offset(0), 0);
    }

    #[test]
    fn animation_resumes_after_freeze() {
        let mut b = Banner::new("LOCOMOTION");
        b.set_animating(false);
        b.set_animating(true);
        b.tick();
        assert!(b.is_animating());
        assert_ne!(b.offset(0), 0);
    }
}
