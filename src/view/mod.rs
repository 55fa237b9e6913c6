//! TUI rendering and terminal management (impure shell).
//!
//! The shell owns the terminal, the event loop, and the fetch channel.
//! All state mutation is delegated to the pure handlers in
//! [`crate::state`]; the shell's job is wiring events in, spawning the
//! fetches those handlers request, and drawing frames.

mod helpers;
pub mod layout;
pub mod overlay;
pub mod posts;
pub mod search_bar;
pub mod styles;
pub mod table;

pub use layout::render;
pub use styles::{ColorConfig, UiStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::fetch::{self, FetchUpdate, Fetcher};
use crate::model::FetchError;
use crate::state::{self, AppState, InputOutcome, ScreenRegions};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The HTTP client could not be constructed.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),
}

/// Rows of frame chrome above and below the table body: header, search
/// bar, status bar, table border, and the table's own header row.
const CHROME_ROWS: u16 = 8;

/// Main TUI application.
///
/// Generic over the backend so tests can drive it with `TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    fetcher: Fetcher,
    config: ResolvedConfig,
    bindings: KeyBindings,
    styles: UiStyles,
    tx: Sender<FetchUpdate>,
    rx: Receiver<FetchUpdate>,
    /// Clickable geometry of the last drawn frame.
    regions: ScreenRegions,
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the application around an existing terminal and issue the
    /// one-shot user-list fetch (the mount-time load; it is never
    /// re-triggered).
    pub fn with_terminal(
        terminal: Terminal<B>,
        config: ResolvedConfig,
        initial_search: Option<String>,
        styles: UiStyles,
    ) -> Result<Self, TuiError> {
        let fetcher = Fetcher::new()?;
        let (tx, rx) = mpsc::channel();

        let mut state = AppState::new();
        if let Some(term) = initial_search {
            state.search.set_term(term);
        }

        fetch::spawn_users_fetch(fetcher.clone(), config.users_url.clone(), tx.clone());
        info!(url = %config.users_url, "user list fetch issued");

        Ok(Self {
            terminal,
            state,
            fetcher,
            config,
            bindings: KeyBindings::default(),
            styles,
            tx,
            rx,
            regions: ScreenRegions::default(),
        })
    }

    /// The current application state, for assertions in tests.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the event loop until the user quits.
    ///
    /// Event-driven: key, mouse, and resize events redraw immediately;
    /// fetch completions are drained on the poll tick.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let tick = Duration::from_millis(self.config.tick_ms.max(10));

        self.draw()?;

        loop {
            if event::poll(tick)? {
                match event::read()? {
                    Event::Key(key) => {
                        let outcome = state::handle_key(&mut self.state, key, &self.bindings);
                        if self.apply(outcome) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        let outcome = state::handle_mouse(&mut self.state, mouse, &self.regions);
                        if self.apply(outcome) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            } else if self.drain_updates() {
                self.draw()?;
            }
        }
    }

    /// Act on an input outcome; returns true when the app should exit.
    fn apply(&mut self, outcome: InputOutcome) -> bool {
        match outcome {
            InputOutcome::Quit => true,
            InputOutcome::LoadPosts(user) => {
                fetch::spawn_posts_fetch(
                    self.fetcher.clone(),
                    self.config.posts_url.clone(),
                    user,
                    self.tx.clone(),
                );
                false
            }
            InputOutcome::Continue => false,
        }
    }

    /// Drain pending fetch completions; returns true when any arrived.
    fn drain_updates(&mut self) -> bool {
        let mut dirty = false;
        while let Ok(update) = self.rx.try_recv() {
            match update {
                FetchUpdate::Users(result) => self.state.resolve_users(result),
                FetchUpdate::Posts { user, result } => self.state.resolve_posts(user, result),
            }
            dirty = true;
        }
        dirty
    }

    /// Draw one frame, keeping the cursor row inside the viewport.
    fn draw(&mut self) -> Result<(), TuiError> {
        let visible = self
            .terminal
            .size()
            .map(|size| size.height.saturating_sub(CHROME_ROWS))
            .unwrap_or(0);
        self.state.cursor.adjust_scroll(visible as usize);

        let state = &self.state;
        let styles = &self.styles;
        let mut regions = ScreenRegions::default();
        self.terminal.draw(|frame| {
            regions = layout::render(frame, state, styles);
        })?;
        self.regions = regions;
        Ok(())
    }
}

/// Set up the terminal, run the application, and restore the terminal
/// on every exit path.
pub fn run_app(config: ResolvedConfig, initial_search: Option<String>) -> Result<(), TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let styles = UiStyles::new();
    let result = TuiApp::with_terminal(terminal, config, initial_search, styles)
        .and_then(|mut app| app.run());

    restore_terminal();
    result
}

/// Best-effort terminal restoration; failures here are ignored because
/// the process is exiting anyway.
fn restore_terminal() {
    let mut stdout: Stdout = io::stdout();
    let _ = stdout.execute(DisableMouseCapture);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}
