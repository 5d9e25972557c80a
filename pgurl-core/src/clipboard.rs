use std::time::{Duration, Instant};

use crate::errors::ClipboardError;

/// How long the "copied" confirmation stays up after a successful copy.
pub const COPIED_RESET_DELAY: Duration = Duration::from_millis(2000);

#[cfg_attr(test, mockall::automock)]
pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Transient "copied" indicator.
///
/// Every successful copy schedules its own one-shot reset. Later copies do not
/// cancel earlier resets, so the indicator goes back to false at the first
/// pending deadline. Pending resets die with the value.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    copied: bool,
    pending_resets: Vec<Instant>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied = true;
        self.pending_resets.push(now + COPIED_RESET_DELAY);
    }

    /// Fires every reset whose deadline has passed. Returns true when at least
    /// one fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.pending_resets.len();
        self.pending_resets.retain(|deadline| *deadline > now);

        let fired = self.pending_resets.len() < before;
        if fired {
            self.copied = false;
        }
        fired
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_resets.iter().min().copied()
    }

    pub fn pending_resets(&self) -> usize {
        self.pending_resets.len()
    }
}

/// Writes `text` to the clipboard and raises the indicator on success.
///
/// Failures are logged and swallowed; the indicator is left as it was.
pub fn copy_to_clipboard<C>(
    clipboard: &mut C,
    text: &str,
    feedback: &mut CopyFeedback,
    now: Instant,
) -> bool
where
    C: ClipboardWriter + ?Sized,
{
    match clipboard.set_text(text) {
        Ok(()) => {
            feedback.mark_copied(now);
            log::info!("Copied connection string ({} characters)", text.chars().count());
            true
        }
        Err(e) => {
            log::error!("Failed to copy: {}", e);
            false
        }
    }
}
