//! src/view/components/help_overlay.rs

use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use crate::view::theme;

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        Clear.render(area, frame.buffer_mut());

        let lines = vec![
            Line::from(""),
            Line::from("  ←/→        previous / next slide"),
            Line::from("  1-9        jump to slide (indicator)"),
            Line::from("  ↑/↓, Tab   previous / next gallery"),
            Line::from("  Home/End   first / last gallery"),
            Line::from("  Space      play / pause video"),
            Line::from("  h, ?       toggle this help"),
            Line::from("  Esc        close overlay"),
            Line::from("  q, Ctrl-C  quit"),
        ];

        Paragraph::new(lines)
            .style(theme::help_style())
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(theme::help_border_style()),
            )
            .render(area, frame.buffer_mut());
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}
