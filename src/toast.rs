use std::time::Duration;

use tracing::debug;

use crate::scheduler::{Deferred, Scheduler, TimerId};

/// How long a toast stays up after the most recent show.
pub const HIDE_AFTER: Duration = Duration::from_millis(1600);

/// The page's single notification element.
#[derive(Debug, Default)]
pub struct Toast {
    text: String,
    visible: bool,
    attached: bool,
    pending_hide: Option<TimerId>,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Visible and attached, i.e. something is on screen.
    pub fn is_displayed(&self) -> bool {
        self.attached && self.visible
    }

    pub fn pending_hide(&self) -> Option<TimerId> {
        self.pending_hide
    }

    /// Attach to the page once its layout exists. Later calls are no-ops.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Show `text` now and (re)arm the hide timer.
    ///
    /// The toast is a polite live region; in the terminal the debug record
    /// written here stands in for the screen-reader announcement. Any hide
    /// still pending from an earlier show is cancelled first, so at most one
    /// hide timer is ever outstanding.
    pub fn show(&mut self, text: impl Into<String>, scheduler: &mut impl Scheduler) {
        self.text = text.into();
        self.visible = true;
        debug!(text = %self.text, "toast shown, announced politely");

        if let Some(previous) = self.pending_hide.take() {
            scheduler.cancel(previous);
        }
        self.pending_hide = Some(scheduler.schedule(HIDE_AFTER, Deferred::HideToast));
    }

    /// Called when the hide timer fires.
    pub fn hide(&mut self) {
        self.visible = false;
        self.pending_hide = None;
    }
}
