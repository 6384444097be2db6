//! src/model/carousel.rs
//! ============================================================================
//! # Carousel: index cursor over an ordered slide sequence
//!
//! One carousel owns a fixed list of slides (images/videos), one indicator
//! per slide when there is more than one, and a single current-index cursor.
//! Navigation mutates the cursor and then runs one synchronization pass so
//! that exactly one slide and exactly one indicator are active, the caption
//! matches the active slide, and any video losing active status is paused
//! and rewound.
//!
//! Each instance is an explicit state record; a page with several carousels
//! holds several independent instances that share nothing.

use std::path::PathBuf;
use std::time::Duration;

use compact_str::CompactString;
use smallvec::SmallVec;
use tracing::debug;

/// What a slide displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video { duration: Duration },
}

/// Playback clock for video slides. Images never touch this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Playback {
    pub position: Duration,
    pub playing: bool,
}

/// One unit of carousel content.
///
/// Caption-like metadata comes in three tiers: an explicit caption, an alt
/// text, and an accessible label, checked in that order.
#[derive(Debug, Clone)]
pub struct Slide {
    pub path: PathBuf,
    pub kind: MediaKind,
    pub caption: Option<CompactString>,
    pub alt: Option<CompactString>,
    pub label: Option<CompactString>,
    pub active: bool,
    pub playback: Playback,
}

impl Slide {
    pub fn image(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: MediaKind::Image,
            caption: None,
            alt: None,
            label: None,
            active: false,
            playback: Playback::default(),
        }
    }

    pub fn video(path: impl Into<PathBuf>, duration: Duration) -> Self {
        Self {
            kind: MediaKind::Video { duration },
            ..Self::image(path)
        }
    }

    pub fn with_caption(mut self, caption: impl Into<CompactString>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<CompactString>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<CompactString>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[inline]
    pub fn is_video(&self) -> bool {
        matches!(self.kind, MediaKind::Video { .. })
    }

    /// First present caption-like field wins: caption, then alt, then label.
    /// Empty string when none is present.
    pub fn caption_text(&self) -> &str {
        self.caption
            .as_deref()
            .or(self.alt.as_deref())
            .or(self.label.as_deref())
            .unwrap_or("")
    }

    /// Losing active status pauses a video and rewinds it to the start.
    fn deactivate(&mut self) {
        self.active = false;
        if self.is_video() {
            self.playback.playing = false;
            self.playback.position = Duration::ZERO;
        }
    }
}

/// A clickable dot mirroring the active state of its slide by position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indicator {
    pub active: bool,
}

/// Carousel state record: slide list, indicator list, current index and the
/// resolved caption of the active slide.
#[derive(Debug, Clone)]
pub struct Carousel {
    name: CompactString,
    slides: Vec<Slide>,
    indicators: SmallVec<[Indicator; 8]>,
    current: usize,
    caption: CompactString,
    caption_visible: bool,
}

impl Carousel {
    /// Builds a carousel over `slides`.
    ///
    /// An empty slide list makes the instance inert: every operation is a
    /// no-op. Indicators are synthesized one per slide only when more than
    /// one slide exists, with the first marked active. One synchronization
    /// pass runs immediately so visuals match index 0 before any input.
    pub fn new(name: impl Into<CompactString>, slides: Vec<Slide>) -> Self {
        let indicators = if slides.len() > 1 {
            slides.iter().map(|_| Indicator::default()).collect()
        } else {
            SmallVec::new()
        };

        let mut carousel = Self {
            name: name.into(),
            slides,
            indicators,
            current: 0,
            caption: CompactString::new(""),
            caption_visible: false,
        };
        carousel.synchronize_visuals();
        carousel
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// An inert carousel has no slides and ignores every operation.
    #[inline]
    pub fn is_inert(&self) -> bool {
        self.slides.is_empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[inline]
    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    #[inline]
    pub fn has_indicators(&self) -> bool {
        !self.indicators.is_empty()
    }

    /// Arrow keys are only bound when navigation can change anything.
    #[inline]
    pub fn keys_bound(&self) -> bool {
        self.slides.len() > 1
    }

    pub fn active_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    /// Resolved caption of the active slide, `None` while hidden (empty).
    pub fn caption(&self) -> Option<&str> {
        self.caption_visible.then_some(self.caption.as_str())
    }

    /// Jumps to `index`. Out-of-range indices are rejected outright rather
    /// than trusted, so the cursor can never leave `[0, N-1]`.
    pub fn go_to(&mut self, index: usize) {
        if self.is_inert() {
            return;
        }
        if index >= self.slides.len() {
            debug!(
                "go_to({index}) rejected on '{}': only {} slides",
                self.name,
                self.slides.len()
            );
            return;
        }
        self.current = index;
        self.synchronize_visuals();
    }

    /// Advances by one, wrapping to 0 past the last slide.
    pub fn next(&mut self) {
        if self.is_inert() {
            return;
        }
        self.current = (self.current + 1) % self.slides.len();
        self.synchronize_visuals();
    }

    /// Steps back by one, wrapping to N-1 before the first slide. Computed
    /// additively so the intermediate never goes negative.
    pub fn prev(&mut self) {
        if self.is_inert() {
            return;
        }
        let n = self.slides.len();
        self.current = (self.current + n - 1) % n;
        self.synchronize_visuals();
    }

    /// Single synchronization pass establishing the active-state invariant:
    /// exactly one slide (and indicator, when present) is active, matching
    /// the current index. Videos losing active status are paused and rewound;
    /// the caption is recomputed from the active slide and hidden when empty.
    fn synchronize_visuals(&mut self) {
        for (i, slide) in self.slides.iter_mut().enumerate() {
            if i == self.current {
                slide.active = true;
            } else if slide.active {
                slide.deactivate();
            }
        }

        for (i, indicator) in self.indicators.iter_mut().enumerate() {
            indicator.active = i == self.current;
        }

        self.caption = self
            .slides
            .get(self.current)
            .map(|s| CompactString::from(s.caption_text()))
            .unwrap_or_default();
        self.caption_visible = !self.caption.is_empty();
    }

    /// Toggles play/pause on the active slide. Images ignore this.
    pub fn toggle_playback(&mut self) {
        if let Some(slide) = self.slides.get_mut(self.current)
            && slide.is_video()
        {
            slide.playback.playing = !slide.playback.playing;
        }
    }

    /// Advances the active video's playback clock by `dt`, clamping at the
    /// declared duration and stopping there.
    pub fn advance_playback(&mut self, dt: Duration) {
        if let Some(slide) = self.slides.get_mut(self.current)
            && let MediaKind::Video { duration } = slide.kind
            && slide.playback.playing
        {
            let position = slide.playback.position.saturating_add(dt);
            if position >= duration {
                slide.playback.position = duration;
                slide.playback.playing = false;
            } else {
                slide.playback.position = position;
            }
        }
    }
}
