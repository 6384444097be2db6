//! src/controller/event_loop.rs
//! ============================================================================
//! # Controller: key → action mapping and action application
//!
//! Key scoping rule: arrow keys and digits only reach the *focused* carousel,
//! and only when that carousel actually has something to navigate (more than
//! one slide). Every other instance ignores the keyboard entirely.

use std::time::Duration;

use crossterm::event::{Event as TerminalEvent, KeyCode, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::config::Config;
use crate::controller::actions::Action;
use crate::model::gallery::GalleryState;
use crate::model::ui_state::{RedrawFlag, UIMode, UIState};

pub struct Controller {
    tick_rate: Duration,
    autoplay: Option<Duration>,
    autoplay_elapsed: Duration,
}

impl Controller {
    pub fn new(config: &Config) -> Self {
        Self {
            tick_rate: config.tick_rate,
            autoplay: config.autoplay_interval,
            autoplay_elapsed: Duration::ZERO,
        }
    }

    #[inline]
    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Maps a terminal event to an action, honoring mode and key scoping.
    pub fn map_event(
        &self,
        event: &TerminalEvent,
        gallery: &GalleryState,
        ui: &UIState,
    ) -> Option<Action> {
        match event {
            TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => {
                // Quit and help work in every mode
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), KeyModifiers::NONE) => return Some(Action::Quit),
                    (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(Action::Quit),
                    (KeyCode::Char('h'), KeyModifiers::NONE) => return Some(Action::ToggleHelp),
                    // '?' arrives with SHIFT set on most layouts
                    (KeyCode::Char('?'), _) => return Some(Action::ToggleHelp),
                    (KeyCode::Esc, _) => return Some(Action::CloseOverlay),
                    _ => {}
                }

                // With the help overlay open, everything else is inert
                if ui.mode == UIMode::Help {
                    return None;
                }

                let focused = gallery.focused();
                match key.code {
                    // Slide navigation: bound only when the focused carousel
                    // has more than one slide
                    KeyCode::Left if focused.is_some_and(|c| c.keys_bound()) => {
                        Some(Action::PrevSlide)
                    }
                    KeyCode::Right if focused.is_some_and(|c| c.keys_bound()) => {
                        Some(Action::NextSlide)
                    }

                    // Indicator selection: digit k activates indicator k-1
                    KeyCode::Char(d @ '1'..='9') if focused.is_some_and(|c| c.has_indicators()) => {
                        Some(Action::GoToSlide(d as usize - '1' as usize))
                    }

                    // Gallery focus movement
                    KeyCode::Up | KeyCode::BackTab => Some(Action::FocusPrevGallery),
                    KeyCode::Down | KeyCode::Tab => Some(Action::FocusNextGallery),
                    KeyCode::Home => Some(Action::JumpToGallery(0)),
                    KeyCode::End if !gallery.is_empty() => {
                        Some(Action::JumpToGallery(gallery.len() - 1))
                    }

                    KeyCode::Char(' ') => Some(Action::TogglePlayback),

                    _ => None,
                }
            }

            TerminalEvent::Resize(width, height) => Some(Action::Resize(*width, *height)),

            _ => None,
        }
    }

    /// Applies an action to the model. Returns `false` when the application
    /// should terminate.
    pub fn apply(&mut self, action: Action, gallery: &mut GalleryState, ui: &mut UIState) -> bool {
        debug!("Applying action: {:?}", action);

        match action {
            Action::Quit => return false,

            Action::NextSlide => {
                if let Some(carousel) = gallery.focused_mut() {
                    carousel.next();
                    self.autoplay_elapsed = Duration::ZERO;
                    ui.request_redraw(RedrawFlag::Main);
                }
            }
            Action::PrevSlide => {
                if let Some(carousel) = gallery.focused_mut() {
                    carousel.prev();
                    self.autoplay_elapsed = Duration::ZERO;
                    ui.request_redraw(RedrawFlag::Main);
                }
            }
            Action::GoToSlide(index) => {
                if let Some(carousel) = gallery.focused_mut() {
                    carousel.go_to(index);
                    self.autoplay_elapsed = Duration::ZERO;
                    ui.request_redraw(RedrawFlag::Main);
                }
            }

            Action::FocusNextGallery => {
                gallery.focus_next();
                self.autoplay_elapsed = Duration::ZERO;
                ui.request_redraw(RedrawFlag::All);
            }
            Action::FocusPrevGallery => {
                gallery.focus_prev();
                self.autoplay_elapsed = Duration::ZERO;
                ui.request_redraw(RedrawFlag::All);
            }
            Action::JumpToGallery(index) => {
                gallery.jump_to(index);
                self.autoplay_elapsed = Duration::ZERO;
                ui.request_redraw(RedrawFlag::All);
            }

            Action::TogglePlayback => {
                if let Some(carousel) = gallery.focused_mut() {
                    carousel.toggle_playback();
                    ui.request_redraw(RedrawFlag::Main);
                }
            }

            Action::ToggleHelp => ui.toggle_help(),
            Action::CloseOverlay => {
                if ui.mode == UIMode::Help {
                    ui.toggle_help();
                }
            }
            Action::Resize(_, _) => ui.request_redraw(RedrawFlag::All),

            Action::Tick => self.tick(gallery, ui),
        }

        true
    }

    /// One UI tick: banner walk, playback clocks, autoplay.
    fn tick(&mut self, gallery: &mut GalleryState, ui: &mut UIState) {
        // banner animates only while the first gallery holds focus
        let was_animating = ui.banner.is_animating();
        ui.banner.set_animating(gallery.at_top());
        ui.banner.tick();
        if ui.banner.is_animating() || was_animating {
            ui.request_redraw(RedrawFlag::Main);
        }

        // playback clocks run on every instance's active video; a video
        // keeps playing while another gallery is focused
        for index in 0..gallery.len() {
            if let Some(carousel) = gallery.carousel_mut(index)
                && carousel.active_slide().is_some_and(|s| s.playback.playing)
            {
                carousel.advance_playback(self.tick_rate);
                ui.request_redraw(RedrawFlag::Main);
            }
        }

        // autoplay advances the focused carousel
        if let Some(interval) = self.autoplay {
            self.autoplay_elapsed += self.tick_rate;
            if self.autoplay_elapsed >= interval {
                self.autoplay_elapsed = Duration::ZERO;
                if let Some(carousel) = gallery.focused_mut()
                    && carousel.keys_bound()
                {
                    carousel.next();
                    ui.request_redraw(RedrawFlag::Main);
                }
            }
        }

        if ui.update_notification() {
            ui.request_redraw(RedrawFlag::Notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::carousel::{Carousel, Slide};
    use crossterm::event::{KeyEvent, KeyEventState};

    fn key(code: KeyCode) -> TerminalEvent {
        TerminalEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn gallery(slides_per: &[usize]) -> GalleryState {
        let carousels = slides_per
            .iter()
            .enumerate()
            .map(|(g, &n)| {
                let slides = (0..n)
                    .map(|i| Slide::image(format!("g{g}-{i}.png")))
                    .collect();
                Carousel::new(format!("gallery-{g}"), slides)
            })
            .collect();
        GalleryState::new(carousels)
    }

    fn setup(slides_per: &[usize]) -> (Controller, GalleryState, UIState) {
        let config = Config::default();
        (
            Controller::new(&config),
            gallery(slides_per),
            UIState::new("CARAVEL"),
        )
    }

    #[test]
    fn arrows_map_to_navigation_when_bound() {
        let (ctl, gallery, ui) = setup(&[3]);
        assert_eq!(
            ctl.map_event(&key(KeyCode::Right), &gallery, &ui),
            Some(Action::NextSlide)
        );
        assert_eq!(
            ctl.map_event(&key(KeyCode::Left), &gallery, &ui),
            Some(Action::PrevSlide)
        );
    }

    #[test]
    fn arrows_unbound_for_single_slide() {
        let (ctl, gallery, ui) = setup(&[1]);
        assert_eq!(ctl.map_event(&key(KeyCode::Right), &gallery, &ui), None);
        assert_eq!(ctl.map_event(&key(KeyCode::Left), &gallery, &ui), None);
    }

    #[test]
    fn digits_select_indicators_only_when_present() {
        let (ctl, gallery, ui) = setup(&[3]);
        assert_eq!(
            ctl.map_event(&key(KeyCode::Char('2')), &gallery, &ui),
            Some(Action::GoToSlide(1))
        );

        let (ctl, gallery, ui) = setup(&[1]);
        assert_eq!(ctl.map_event(&key(KeyCode::Char('2')), &gallery, &ui), None);
    }

    #[test]
    fn help_overlay_swallows_navigation() {
        let (ctl, gallery, mut ui) = setup(&[3]);
        ui.toggle_help();
        assert_eq!(ctl.map_event(&key(KeyCode::Right), &gallery, &ui), None);
        assert_eq!(
            ctl.map_event(&key(KeyCode::Esc), &gallery, &ui),
            Some(Action::CloseOverlay)
        );
    }

    #[test]
    fn question_mark_toggles_help_with_shift_held() {
        let (ctl, gallery, ui) = setup(&[3]);
        let event = TerminalEvent::Key(KeyEvent {
            code: KeyCode::Char('?'),
            modifiers: KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert_eq!(
            ctl.map_event(&event, &gallery, &ui),
            Some(Action::ToggleHelp)
        );
        assert_eq!(
            ctl.map_event(&key(KeyCode::Char('?')), &gallery, &ui),
            Some(Action::ToggleHelp)
        );
    }

    #[test]
    fn quit_keys_always_map() {
        let (ctl, gallery, ui) = setup(&[]);
        assert_eq!(
            ctl.map_event(&key(KeyCode::Char('q')), &gallery, &ui),
            Some(Action::Quit)
        );
    }

    #[test]
    fn apply_navigation_moves_focused_only() {
        let (mut ctl, mut gallery, mut ui) = setup(&[2, 2]);
        assert!(ctl.apply(Action::FocusNextGallery, &mut gallery, &mut ui));
        assert!(ctl.apply(Action::NextSlide, &mut gallery, &mut ui));
        assert_eq!(gallery.carousels()[0].current_index(), 0);
        assert_eq!(gallery.carousels()[1].current_index(), 1);
    }

    #[test]
    fn apply_quit_terminates() {
        let (mut ctl, mut gallery, mut ui) = setup(&[1]);
        assert!(!ctl.apply(Action::Quit, &mut gallery, &mut ui));
    }

    #[test]
    fn tick_freezes_banner_away_from_top() {
        let (mut ctl, mut gallery, mut ui) = setup(&[1, 1]);
        ctl.apply(Action::Tick, &mut gallery, &mut ui);
        assert!(ui.banner.is_animating());

        ctl.apply(Action::FocusNextGallery, &mut gallery, &mut ui);
        ctl.apply(Action::Tick, &mut gallery, &mut ui);
        assert!(!ui.banner.is_animating());

        ctl.apply(Action::FocusPrevGallery, &mut gallery, &mut ui);
        ctl.apply(Action::Tick, &mut gallery, &mut ui);
        assert!(ui.banner.is_animating());
    }

    #[test]
    fn autoplay_advances_on_interval() {
        let mut config = Config::default();
        config.tick_rate = Duration::from_millis(250);
        config.autoplay_interval = Some(Duration::from_millis(500));
        let mut ctl = Controller::new(&config);
        let mut gallery = gallery(&[3]);
        let mut ui = UIState::new("CARAVEL");

        ctl.apply(Action::Tick, &mut gallery, &mut ui);
        assert_eq!(gallery.carousels()[0].current_index(), 0);
        ctl.apply(Action::Tick, &mut gallery, &mut ui);
        assert_eq!(gallery.carousels()[0].current_index(), 1);
    }

    #[test]
    fn manual_navigation_restarts_autoplay_clock() {
        let mut config = Config::default();
        config.tick_rate = Duration::from_millis(250);
        config.autoplay_interval = Some(Duration::from_millis(500));
        let mut ctl = Controller::new(&config);
        let mut gallery = gallery(&[3]);
        let mut ui = UIState::new("CARAVEL");

        ctl.apply(Action::Tick, &mut gallery, &mut ui);
        ctl.apply(Action::NextSlide, &mut gallery, &mut ui);
        assert_eq!(gallery.carousels()[0].current_index(), 1);

        // clock was reset, so the very next tick must not advance again
        ctl.apply(Action::Tick, &mut gallery, &mut ui);
        assert_eq!(gallery.carousels()[0].current_index(), 1);
    }

    #[test]
    fn tick_advances_playing_video() {
        let mut gallery = GalleryState::new(vec![Carousel::new(
            "v",
            vec![Slide::video("clip.mp4", Duration::from_secs(10))],
        )]);
        let config = Config::default();
        let mut ctl = Controller::new(&config);
        let mut ui = UIState::new("CARAVEL");

        ctl.apply(Action::TogglePlayback, &mut gallery, &mut ui);
        ctl.apply(Action::Tick, &mut gallery, &mut ui);

        let position = gallery.carousels()[0].active_slide().unwrap().playback.position;
        assert_eq!(position, config.tick_rate);
    }
}
