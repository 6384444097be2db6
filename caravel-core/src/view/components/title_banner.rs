//! src/view/components/title_banner.rs
//! ============================================================================
//! Walking-letters title banner. Each letter is painted one cell wide with a
//! vertical offset from its walk group; the middle of three rows is the rest
//! position. A frozen banner paints everything on the middle row in the
//! muted static style.

use ratatui::{
    layout::Rect,
    widgets::{Block, Widget},
    Frame,
};

use crate::model::banner::Banner;
use crate::view::theme;

/// Rows the banner needs: up, rest, down.
pub const BANNER_HEIGHT: u16 = 3;

pub struct TitleBanner;

impl TitleBanner {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, banner: &Banner, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        Block::default()
            .style(theme::slide_style())
            .render(area, frame.buffer_mut());

        let letters: Vec<(char, i8)> = banner.letters().collect();
        if letters.is_empty() {
            return;
        }

        let style = if banner.is_animating() {
            theme::banner_style()
        } else {
            theme::banner_static_style()
        };

        // letters spaced one cell apart, centered horizontally
        let width = (letters.len() * 2 - 1) as u16;
        let x0 = area.x + area.width.saturating_sub(width) / 2;
        let rest_row = area.y + (area.height / 2).min(area.height - 1);

        let buf = frame.buffer_mut();
        for (i, (ch, offset)) in letters.iter().enumerate() {
            let x = x0 + (i as u16) * 2;
            if x >= area.x + area.width {
                break;
            }
            let y = match offset {
                -1 => rest_row.saturating_sub(1).max(area.y),
                1 => (rest_row + 1).min(area.y + area.height - 1),
                _ => rest_row,
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(*ch).set_style(style);
            }
        }
    }
}

impl Default for TitleBanner {
    fn default() -> Self {
        Self::new()
    }
}
