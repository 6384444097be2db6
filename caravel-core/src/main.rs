//! src/main.rs
//! Terminal media carousel viewer

use std::{
    env,
    io::{self, Stdout},
    panic::PanicHookInfo,
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::{signal, sync::Notify, time};
use tracing::{error, info, warn};

use caravel_core::{
    Logger,
    config::Config,
    controller::{Action, Controller},
    media::loader,
    model::{gallery::GalleryState, ui_state::UIState},
    view::ui::UIRenderer,
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_handler();

    let app = App::new()
        .await
        .context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    gallery: GalleryState,
    ui: UIState,
    controller: Controller,
    renderer: UIRenderer,
    shutdown: Arc<Notify>,
}

impl App {
    async fn new() -> Result<Self> {
        Logger::init_tracing();
        info!("Starting media carousel viewer");

        // Load configuration
        let config = Config::load().await.unwrap_or_else(|e| {
            info!("Failed to load config, using defaults: {}", e);
            Config::default()
        });

        // Media root from the command line, current directory by default
        let media_root: PathBuf = env::args().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);
        let loaded = loader::load_galleries(&media_root)
            .await
            .with_context(|| format!("Failed to load galleries from {}", media_root.display()))?;

        let banner_title = loaded
            .title
            .unwrap_or_else(|| config.banner_title.clone());

        let gallery = GalleryState::new(loaded.carousels);
        let mut ui = UIState::new(&banner_title);
        if gallery.is_empty() {
            ui.show_warning(format!("No galleries found in {}", media_root.display()));
        }

        let controller = Controller::new(&config);
        let renderer = UIRenderer::new(&config);

        let terminal: AppTerminal = setup_terminal().context("Failed to initialize terminal")?;
        let shutdown: Arc<Notify> = Arc::new(Notify::new());

        info!(
            "Application initialized: {} galleries from {}",
            gallery.len(),
            media_root.display()
        );

        Ok(Self {
            terminal,
            gallery,
            ui,
            controller,
            renderer,
            shutdown,
        })
    }

    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler().await;
        info!("Starting event loop");

        let mut event_stream: EventStream = EventStream::new();
        let mut ticker = time::interval(self.controller.tick_rate());

        loop {
            self.render()?;

            tokio::select! {
                // Shutdown signal
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                // Terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(terminal_event)) = maybe_event
                        && let Some(action) = self.controller.map_event(
                            &terminal_event,
                            &self.gallery,
                            &self.ui,
                        )
                        && !self.controller.apply(action, &mut self.gallery, &mut self.ui)
                    {
                        info!("Quit action from terminal event");
                        break;
                    }
                }

                // Animation / autoplay / playback tick
                _ = ticker.tick() => {
                    self.controller.apply(Action::Tick, &mut self.gallery, &mut self.ui);
                }
            }
        }

        let stats = self.renderer.stats();
        info!(
            "Event loop terminated cleanly: {} frames, {} slow, {:.1} fps",
            stats.frames,
            stats.slow,
            stats.fps()
        );
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        if self.ui.needs_redraw() {
            self.terminal
                .draw(|frame: &mut Frame<'_>| {
                    self.renderer.render(frame, &self.gallery, &self.ui);
                })
                .context("Failed to draw terminal")?;

            self.ui.clear_redraw();
        }

        Ok(())
    }

    async fn setup_shutdown_handler(&self) {
        let shutdown: Arc<Notify> = self.shutdown.clone();

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                let mut sigterm =
                    signal(SignalKind::terminate()).expect("Failed to create SIGTERM handler");

                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = signal::ctrl_c() => info!("Received Ctrl+C"),
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                    return;
                }
                info!("Received Ctrl+C");
            }

            shutdown.notify_one();
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
