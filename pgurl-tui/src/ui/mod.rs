mod clipboard;
mod components;
mod handlers;
mod screens;
mod utils;

use std::io;

pub use components::UrlBuilderUI;
use crossterm::event::KeyEvent;
use ratatui::{backend::Backend, Terminal};

pub trait UIHandler {
    async fn handle_help_popup_input(&mut self);
    async fn handle_input_event(&mut self, key: KeyEvent);
}

pub trait UIRenderer {
    async fn render_connection_form_screen<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> io::Result<()>;
    async fn render_help_popup<B: Backend>(&mut self, terminal: &mut Terminal<B>)
        -> io::Result<()>;
}
