//! src/view/components/status_bar.rs
//! ============================================================================
//! Single-row status bar: mode and focused gallery on the left, slide cursor
//! and playback state on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::model::carousel::MediaKind;
use crate::model::gallery::GalleryState;
use crate::model::ui_state::{UIMode, UIState};
use crate::view::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        gallery: &GalleryState,
        ui_state: &UIState,
        area: Rect,
    ) {
        let mode_str = match ui_state.mode {
            UIMode::Browse => "Browse",
            UIMode::Help => "Help",
        };

        let left_text = match gallery.focused() {
            Some(carousel) => format!(" {} | {}", mode_str, carousel.name()),
            None => format!(" {} | no galleries", mode_str),
        };

        let right_text = match gallery.focused() {
            Some(carousel) if !carousel.is_inert() => {
                let cursor = format!("Slide {}/{}", carousel.current_index() + 1, carousel.len());
                match carousel.active_slide() {
                    Some(slide) if slide.is_video() => {
                        let state = if slide.playback.playing {
                            "playing"
                        } else {
                            "paused"
                        };
                        let total = match slide.kind {
                            MediaKind::Video { duration } => duration.as_secs(),
                            MediaKind::Image => 0,
                        };
                        format!(
                            "{cursor} | {state} {:02}:{:02}/{:02}:{:02} ",
                            slide.playback.position.as_secs() / 60,
                            slide.playback.position.as_secs() % 60,
                            total / 60,
                            total % 60,
                        )
                    }
                    _ => format!("{cursor} "),
                }
            }
            _ => "q: quit | h: help ".to_string(),
        };

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Paragraph::new(left_text)
            .style(theme::status_bar_style())
            .alignment(Alignment::Left)
            .render(layout[0], frame.buffer_mut());

        Paragraph::new(right_text)
            .style(theme::status_bar_style())
            .alignment(Alignment::Right)
            .render(layout[1], frame.buffer_mut());
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
