use std::time::{Duration, Instant};

/// How long a notice stays visible before auto-dismissing.
pub const AUTO_DISMISS: Duration = Duration::from_secs(6);

/// Snackbar-style transient notification. A second `show` before the
/// first is dismissed simply replaces the text; there is no queue.
/// Notices older than [`AUTO_DISMISS`] are no longer reported by
/// `current`.
#[derive(Debug, Default, Clone)]
pub struct Notice {
    text: Option<String>,
    shown_at: Option<Instant>,
}

impl Notice {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
        self.shown_at = Some(Instant::now());
    }

    pub fn dismiss(&mut self) {
        self.text = None;
        self.shown_at = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.current_at(Instant::now())
    }

    fn current_at(&self, now: Instant) -> Option<&str> {
        let shown_at = self.shown_at?;
        if now.saturating_duration_since(shown_at) >= AUTO_DISMISS {
            return None;
        }
        self.text.as_deref()
    }

    /// Dismisses and returns the current text, for renderers that print
    /// each notice exactly once.
    pub fn take(&mut self) -> Option<String> {
        self.shown_at = None;
        self.text.take()
    }
}
