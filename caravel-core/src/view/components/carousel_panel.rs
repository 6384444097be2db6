//! src/view/components/carousel_panel.rs
//! ============================================================================
//! The carousel widget itself: active slide box, caption row (absent while
//! the caption is empty), indicator dots and navigation hints. An inert
//! carousel renders a dim placeholder and nothing else.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
    Frame,
};

use crate::model::carousel::{Carousel, MediaKind, Slide};
use crate::view::theme;

pub struct CarouselPanel {
    show_captions: bool,
}

impl CarouselPanel {
    pub fn new(show_captions: bool) -> Self {
        Self { show_captions }
    }

    pub fn render(&self, frame: &mut Frame<'_>, carousel: &Carousel, focused: bool, area: Rect) {
        let border_style = if focused {
            theme::panel_focused_border_style()
        } else {
            theme::panel_border_style()
        };

        let block = Block::default()
            .title(format!(" {} ", carousel.name()))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, frame.buffer_mut());

        if carousel.is_inert() {
            Paragraph::new("no media")
                .style(theme::panel_border_style())
                .alignment(Alignment::Center)
                .render(inner, frame.buffer_mut());
            return;
        }

        let caption = self.show_captions.then(|| carousel.caption()).flatten();

        // slide area, optional caption row, dots row
        let caption_rows = u16::from(caption.is_some());
        let [slide_area, caption_area, dots_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(caption_rows),
            Constraint::Length(1),
        ])
        .areas(inner);

        if let Some(slide) = carousel.active_slide() {
            self.render_slide(frame, slide, slide_area);
        }

        if let Some(text) = caption {
            Paragraph::new(text)
                .style(theme::caption_style())
                .alignment(Alignment::Center)
                .render(caption_area, frame.buffer_mut());
        }

        self.render_dots(frame, carousel, dots_area);
    }

    fn render_slide(&self, frame: &mut Frame<'_>, slide: &Slide, area: Rect) {
        let name = slide
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match slide.kind {
            MediaKind::Image => {
                let lines = vec![
                    Line::from(""),
                    Line::from(Span::styled("🖼", theme::slide_style())),
                    Line::from(Span::styled(name, theme::slide_style())),
                ];
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .render(area, frame.buffer_mut());
            }
            MediaKind::Video { duration } => {
                let [info_area, progress_area] =
                    Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

                let state = if slide.playback.playing { "▶" } else { "⏸" };
                let lines = vec![
                    Line::from(""),
                    Line::from(Span::styled("🎞", theme::slide_style())),
                    Line::from(Span::styled(
                        format!("{state} {name}"),
                        theme::playback_style(),
                    )),
                ];
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .render(info_area, frame.buffer_mut());

                let ratio = if duration.is_zero() {
                    0.0
                } else {
                    (slide.playback.position.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
                };
                Gauge::default()
                    .ratio(ratio)
                    .label(format!(
                        "{:02}:{:02} / {:02}:{:02}",
                        slide.playback.position.as_secs() / 60,
                        slide.playback.position.as_secs() % 60,
                        duration.as_secs() / 60,
                        duration.as_secs() % 60,
                    ))
                    .gauge_style(theme::playback_style())
                    .render(progress_area, frame.buffer_mut());
            }
        }
    }

    /// Indicator dots with nav hints. A single-slide carousel has no
    /// indicators, so the row only shows when they exist.
    fn render_dots(&self, frame: &mut Frame<'_>, carousel: &Carousel, area: Rect) {
        if !carousel.has_indicators() {
            return;
        }

        let mut spans = vec![Span::styled("◀ ", theme::indicator_idle_style())];
        for indicator in carousel.indicators() {
            let (glyph, style) = if indicator.active {
                ("● ", theme::indicator_active_style())
            } else {
                ("○ ", theme::indicator_idle_style())
            };
            spans.push(Span::styled(glyph, style));
        }
        spans.push(Span::styled("▶", theme::indicator_idle_style()));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, frame.buffer_mut());
    }
}
