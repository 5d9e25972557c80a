use arboard::Clipboard;
use pgurl_core::{errors::ClipboardError, ClipboardWriter};

/// System clipboard via arboard.
///
/// The handle is opened on first use and kept for the session: on X11 the
/// copied text is only served while the handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard not opened".into()))?;

        if let Err(e) = clipboard.set_text(text.to_owned()) {
            // reopen on the next attempt
            self.inner = None;
            return Err(ClipboardError::Write(e.to_string()));
        }

        Ok(())
    }
}
