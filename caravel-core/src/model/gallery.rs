//! src/model/gallery.rs
//! ============================================================================
//! # GalleryState: the top-level collection of carousel instances
//!
//! Several independent carousels live in an ordered list with a focus
//! cursor. Keyboard navigation only ever reaches the focused instance, which
//! keeps multiple carousels correctly isolated.

use crate::model::carousel::Carousel;

#[derive(Debug, Default)]
pub struct GalleryState {
    carousels: Vec<Carousel>,
    focused: usize,
}

impl GalleryState {
    pub fn new(carousels: Vec<Carousel>) -> Self {
        Self {
            carousels,
            focused: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    #[inline]
    pub fn focused_index(&self) -> usize {
        self.focused
    }

    /// True while the first gallery is focused, the terminal counterpart of
    /// "not scrolled past the header" that gates the banner animation.
    #[inline]
    pub fn at_top(&self) -> bool {
        self.focused == 0
    }

    pub fn carousels(&self) -> &[Carousel] {
        &self.carousels
    }

    pub fn focused(&self) -> Option<&Carousel> {
        self.carousels.get(self.focused)
    }

    pub fn focused_mut(&mut self) -> Option<&mut Carousel> {
        self.carousels.get_mut(self.focused)
    }

    pub fn carousel_mut(&mut self, index: usize) -> Option<&mut Carousel> {
        self.carousels.get_mut(index)
    }

    /// Moves focus to the next gallery, clamped at the last one.
    pub fn focus_next(&mut self) {
        if self.focused + 1 < self.carousels.len() {
            self.focused += 1;
        }
    }

    /// Moves focus to the previous gallery, clamped at the first one.
    pub fn focus_prev(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    /// Jumps focus straight to gallery `index`; out-of-range is ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.carousels.len() {
            self.focused = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::carousel::Slide;

    fn galleries(n: usize) -> GalleryState {
        let carousels = (0..n)
            .map(|i| {
                Carousel::new(
                    format!("gallery-{i}"),
                    vec![Slide::image(format!("{i}.png"))],
                )
            })
            .collect();
        GalleryState::new(carousels)
    }

    #[test]
    fn focus_clamps_at_both_ends() {
        let mut g = galleries(3);
        g.focus_prev();
        assert_eq!(g.focused_index(), 0);
        g.focus_next();
        g.focus_next();
        g.focus_next();
        assert_eq!(g.focused_index(), 2);
    }

    #[test]
    fn jump_to_ignores_out_of_range() {
        let mut g = galleries(2);
        g.jump_to(1);
        assert_eq!(g.focused_index(), 1);
        g.jump_to(7);
        assert_eq!(g.focused_index(), 1);
    }

    #[test]
    fn at_top_only_for_first_gallery() {
        let mut g = galleries(2);
        assert!(g.at_top());
        g.focus_next();
        assert!(!g.at_top());
    }

    #[test]
    fn navigation_on_focused_leaves_others_untouched() {
        let carousels = vec![
            Carousel::new("a", vec![Slide::image("1.png"), Slide::image("2.png")]),
            Carousel::new("b", vec![Slide::image("3.png"), Slide::image("4.png")]),
        ];
        let mut g = GalleryState::new(carousels);
        g.focus_next();
        g.focused_mut().unwrap().next();

        assert_eq!(g.carousels()[0].current_index(), 0);
        assert_eq!(g.carousels()[1].current_index(), 1);
    }

    #[test]
    fn empty_gallery_state_has_no_focused_carousel() {
        let mut g = GalleryState::new(Vec::new());
        assert!(g.focused().is_none());
        g.focus_next();
        assert_eq!(g.focused_index(), 0);
    }
}
