//! TUI rendering and terminal management (impure shell)

pub mod dump;
pub mod render;

pub use dump::{dump_layout, measure_all, DumpRecord};
pub use render::Status;

use crate::config::{ConfigError, ResolvedConfig};
use crate::host::{CollectionHost, TeapotDataSource};
use crate::layout::{LayoutConfig, Rect};
use crate::logging::LoggingError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running the demo
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Layout dump could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Scrollable teapot list
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    host: CollectionHost<TeapotDataSource>,
    /// Rows scrolled past the top of the content.
    scroll_y: f64,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize the demo on stdout
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(config: &ResolvedConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Self::with_terminal(terminal, config.data_source(), config.layout_config())
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q, Esc or Ctrl+C). Redraws only after
    /// an event.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Wrap an initialized terminal, laying the list out at its size.
    pub fn with_terminal(
        terminal: Terminal<B>,
        source: TeapotDataSource,
        config: LayoutConfig,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        let bounds = list_bounds(size.width, size.height);
        Ok(Self {
            terminal,
            host: CollectionHost::new(source, config, bounds),
            scroll_y: 0.0,
        })
    }

    /// The collection host driving the layout.
    pub fn host(&self) -> &CollectionHost<TeapotDataSource> {
        &self.host
    }

    /// Current scroll offset in rows.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// The terminal, for inspecting the backend.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let page = self.viewport_height().max(1.0);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1.0),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1.0),
            KeyCode::PageDown => self.scroll_by(page),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_y = 0.0,
            KeyCode::Char('G') | KeyCode::End => self.scroll_to_bottom(),
            KeyCode::Char('+') => self.change_sections(1),
            KeyCode::Char('-') => self.change_sections(-1),
            KeyCode::Char('r') => {
                let path = self.host.reset();
                info!(?path, "Layout reset");
                self.clamp_scroll();
            }
            _ => {}
        }
        false
    }

    /// Terminal resized: only the list width reaches the layout engine.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let path = self.host.set_bounds(list_bounds(width, height));
        debug!(width, height, ?path, "Terminal resized");
        self.clamp_scroll();
    }

    /// Lay out the visible rows and render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let mut items = self.host.visible_items(self.visible_rect());
        // Measurement may shrink the content below the current offset.
        if self.clamp_scroll() {
            items = self.host.visible_items(self.visible_rect());
        }

        let status = Status {
            items: self.host.engine().cache().len(),
            content_height: self.host.content_size().height,
            scroll_y: self.scroll_y,
        };

        self.terminal.draw(|frame| render::render(frame, &items, &status))?;
        Ok(())
    }

    fn viewport_height(&self) -> f64 {
        self.host.bounds().height()
    }

    fn visible_rect(&self) -> Rect {
        let bounds = self.host.bounds();
        Rect::new(0.0, self.scroll_y, bounds.width(), bounds.height())
    }

    fn max_scroll(&self) -> f64 {
        (self.host.content_size().height - self.viewport_height()).max(0.0)
    }

    fn scroll_by(&mut self, rows: f64) {
        self.scroll_y += rows;
        self.clamp_scroll();
    }

    /// Clamp the offset into `[0, max_scroll]`. Returns true if it moved.
    fn clamp_scroll(&mut self) -> bool {
        let clamped = self.scroll_y.clamp(0.0, self.max_scroll());
        let moved = clamped != self.scroll_y;
        self.scroll_y = clamped;
        moved
    }

    /// Jump to the end, re-measuring until the bottom stops moving.
    fn scroll_to_bottom(&mut self) {
        for _ in 0..=self.host.engine().cache().len() {
            self.scroll_y = self.max_scroll();
            self.host.layout_visible(self.visible_rect());
            if self.scroll_y == self.max_scroll() {
                break;
            }
        }
    }

    fn change_sections(&mut self, delta: isize) {
        let current = *self.host.source();
        let sections = current.sections().saturating_add_signed(delta);
        if sections == current.sections() {
            return;
        }
        let path = self.host.reload_data(current.with_sections(sections));
        info!(sections, ?path, "Data reloaded");
        self.clamp_scroll();
    }
}

/// Layout bounds for a terminal of `width` x `height`: the status bar row is
/// not part of the list.
fn list_bounds(width: u16, height: u16) -> Rect {
    Rect::new(
        0.0,
        0.0,
        f64::from(width),
        f64::from(height.saturating_sub(render::STATUS_BAR_HEIGHT)),
    )
}

/// Initialize and run the demo with a resolved configuration
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(config: &ResolvedConfig) -> Result<(), TuiError> {
    let mut app = TuiApp::new(config)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
