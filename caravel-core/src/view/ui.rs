//! src/view/ui.rs
//! ============================================================
//! Frame renderer. Owns a layout cache keyed on the screen size
//! and the per-frame render statistics; all content state comes
//! in by reference.

use std::time::Instant;

use ratatui::{layout::{Constraint, Layout, Rect}, Frame};
use tracing::instrument;

use crate::config::Config;
use crate::model::gallery::GalleryState;
use crate::model::ui_state::{UIMode, UIState};
use crate::view::components::{
    carousel_panel::CarouselPanel, gallery_list::GalleryList, help_overlay::HelpOverlay,
    notification_overlay::NotificationOverlay, status_bar::StatusBar,
    title_banner::{TitleBanner, BANNER_HEIGHT},
};

pub struct UIRenderer {
    cache: LayoutCache,
    panel: CarouselPanel,
    stats: RenderStats,
}

#[derive(Default)]
struct LayoutCache {
    /// banner, gallery list, carousel panel, status bar
    areas: Option<[Rect; 4]>,
    screen: Rect,
    hit: u64,
    miss: u64,
}

#[derive(Default)]
pub struct RenderStats {
    pub frames: u64,
    pub slow: u64,
    pub total: std::time::Duration,
}

impl UIRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            cache: LayoutCache::default(),
            panel: CarouselPanel::new(config.show_captions),
            stats: RenderStats::default(),
        }
    }

    #[instrument(level = "trace", skip(self, f, gallery, ui))]
    pub fn render(&mut self, f: &mut Frame<'_>, gallery: &GalleryState, ui: &UIState) {
        let start = Instant::now();
        let [banner, list, panel, status] = self.update_layout_cache(f.area());

        TitleBanner::new().render(f, &ui.banner, banner);
        GalleryList::new().render(f, gallery, list);
        if let Some(carousel) = gallery.focused() {
            self.panel.render(f, carousel, true, panel);
        }
        StatusBar::new().render(f, gallery, ui, status);

        if ui.mode == UIMode::Help {
            let r = self.centered(f.area(), 60, 60);
            HelpOverlay::new().render(f, r);
        }

        if let Some(n) = &ui.notification {
            let r = self.notification_rect(f.area());
            NotificationOverlay::new().render(f, n, r);
        }

        // perf
        let dur = start.elapsed();
        self.stats.total += dur;
        if dur.as_millis() > 16 {
            self.stats.slow += 1;
        }
        self.stats.frames += 1;
        ui.increment_frame();
    }

    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }
}

/// layout / rectangles
impl UIRenderer {
    /// Returns the cached areas for `scr`, recomputing on any size change.
    /// An unfilled cache is always a miss, so a zero-sized first frame (which
    /// compares equal to the default screen) still computes its layout.
    fn update_layout_cache(&mut self, scr: Rect) -> [Rect; 4] {
        if self.cache.screen == scr
            && let Some(areas) = self.cache.areas
        {
            self.cache.hit += 1;
            return areas;
        }

        self.cache.screen = scr;
        self.cache.miss += 1;

        let [banner, main, status] = Layout::vertical([
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(scr);
        let [list, panel] =
            Layout::horizontal([Constraint::Percentage(25), Constraint::Percentage(75)])
                .areas(main);

        let areas = [banner, list, panel, status];
        self.cache.areas = Some(areas);
        areas
    }

    fn centered(&self, r: Rect, w_pct: u16, h_pct: u16) -> Rect {
        // widen before multiplying, u16 percentages overflow past ~1092 cells
        let w = ((u32::from(r.width) * u32::from(w_pct) / 100) as u16).min(r.width);
        let h = ((u32::from(r.height) * u32::from(h_pct) / 100) as u16).min(r.height);
        Rect {
            x: (r.width - w) / 2,
            y: (r.height - h) / 2,
            width: w,
            height: h,
        }
    }

    fn notification_rect(&self, scr: Rect) -> Rect {
        let w = (u32::from(scr.width) * 60 / 100) as u16;
        Rect {
            x: (scr.width - w) / 2,
            y: BANNER_HEIGHT,
            width: w,
            height: 3,
        }
    }
}

impl RenderStats {
    pub fn fps(&self) -> f64 {
        if self.frames > 0 {
            self.frames as f64 / self.total.as_secs_f64()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_cache_hits_on_same_screen() {
        let mut r = UIRenderer::new(&Config::default());
        r.update_layout_cache(Rect::new(0, 0, 100, 40));
        r.update_layout_cache(Rect::new(0, 0, 100, 40));
        assert_eq!(r.cache.hit, 1);
        assert_eq!(r.cache.miss, 1);
    }

    #[test]
    fn zero_sized_first_frame_renders_without_panic() {
        let backend = ratatui::backend::TestBackend::new(0, 0);
        let mut terminal = ratatui::Terminal::new(backend).expect("terminal");

        let mut r = UIRenderer::new(&Config::default());
        let gallery = GalleryState::new(Vec::new());
        let ui = UIState::new("CARAVEL");

        terminal
            .draw(|f| r.render(f, &gallery, &ui))
            .expect("draw");

        // a 0x0 screen equals the default cache key, but an unfilled
        // cache must still count as a miss
        assert_eq!(r.cache.miss, 1);
        assert!(r.cache.areas.is_some());
    }

    #[test]
    fn centered_rect_fits_wide_terminals() {
        let r = UIRenderer::new(&Config::default());
        let rect = r.centered(Rect::new(0, 0, 2000, 100), 60, 60);
        assert_eq!(rect.width, 1200);
        assert_eq!(rect.height, 60);
        assert_eq!(rect.x, 400);
    }

    #[test]
    fn layout_cache_invalidates_on_resize() {
        let mut r = UIRenderer::new(&Config::default());
        r.update_layout_cache(Rect::new(0, 0, 100, 40));
        r.update_layout_cache(Rect::new(0, 0, 120, 40));
        assert_eq!(r.cache.miss, 2);

        let [banner, _, _, status] = r.cache.areas.expect("areas");
        assert_eq!(banner.height, BANNER_HEIGHT);
        assert_eq!(status.height, 1);
    }
}
