pub mod connection_input;
pub mod types;

use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use pgurl_core::{
    copy_to_clipboard, ClipboardWriter, Config, ConnectionFields, ConnectionString, CopyFeedback,
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub use connection_input::ConnectionInput;
pub use types::{ScreenState, TICK_RATE};

use super::{
    clipboard::SystemClipboard, utils::terminal_guard::TerminalGuard, UIHandler, UIRenderer,
};

pub struct UrlBuilderUI {
    pub connection_input: ConnectionInput,
    pub connection_string: ConnectionString,
    pub copy_feedback: CopyFeedback,
    pub current_screen: ScreenState,
    pub should_quit: bool,
    initial_fields: ConnectionFields,
    clipboard: Box<dyn ClipboardWriter>,
}

impl UrlBuilderUI {
    pub fn new(config: &Config) -> Self {
        Self::with_clipboard(
            config.initial_fields.clone(),
            Box::new(SystemClipboard::new()),
        )
    }

    pub fn with_clipboard(fields: ConnectionFields, clipboard: Box<dyn ClipboardWriter>) -> Self {
        let connection_string = fields.connection_string();
        Self {
            connection_input: ConnectionInput::new(fields.clone()),
            connection_string,
            copy_feedback: CopyFeedback::new(),
            current_screen: ScreenState::ConnectionForm,
            should_quit: false,
            initial_fields: fields,
            clipboard,
        }
    }

    /// Rebuilds the derived connection string. Call after every field change.
    pub fn recompose(&mut self) {
        self.connection_string = self.connection_input.fields.connection_string();
        log::debug!("Connection string: {}", self.connection_string.redacted());
    }

    pub fn copy_connection_string(&mut self) {
        copy_to_clipboard(
            self.clipboard.as_mut(),
            self.connection_string.as_str(),
            &mut self.copy_feedback,
            Instant::now(),
        );
    }

    pub fn reset_fields(&mut self) {
        self.connection_input.fields = self.initial_fields.clone();
        self.recompose();
    }

    /// Wakes up early when a "copied" reset is due before the next tick.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.copy_feedback.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(TICK_RATE),
            None => TICK_RATE,
        }
    }

    pub async fn run_ui(&mut self) -> Result<(), io::Error> {
        let _guard = TerminalGuard;
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        self.ui_loop(&mut terminal).await
    }

    async fn ui_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        loop {
            self.copy_feedback.tick(Instant::now());

            match self.current_screen {
                ScreenState::ConnectionForm => {
                    UIRenderer::render_connection_form_screen(self, terminal).await?
                }
                ScreenState::HelpPopup => UIRenderer::render_help_popup(self, terminal).await?,
            }

            if self.should_quit {
                return Ok(());
            }

            if !event::poll(self.poll_timeout(Instant::now()))? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match self.current_screen {
                    ScreenState::ConnectionForm => {
                        UIHandler::handle_input_event(self, key).await;
                    }
                    ScreenState::HelpPopup => {
                        UIHandler::handle_help_popup_input(self).await;
                    }
                }
            }
        }
    }
}
