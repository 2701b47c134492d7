//! Turns recognised chords into a toast and a delayed navigation.

use std::time::Duration;

use tracing::{debug, info};

use crate::key::KeyInput;
use crate::location::Location;
use crate::scheduler::{Deferred, Scheduler};
use crate::shortcut::{self, ShortcutEntry, SHORTCUTS};
use crate::toast::Toast;

/// Delay between showing the toast and leaving the page.
pub const NAVIGATE_AFTER: Duration = Duration::from_millis(200);

/// Whether the host should still run its own handling for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandleResult {
    /// Default action suppressed.
    Consumed,
    Ignored,
}

#[derive(Debug, Clone, Copy)]
pub struct ShortcutNavigator {
    entries: &'static [ShortcutEntry],
}

impl Default for ShortcutNavigator {
    fn default() -> Self {
        Self {
            entries: SHORTCUTS,
        }
    }
}

impl ShortcutNavigator {
    pub fn new(entries: &'static [ShortcutEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [ShortcutEntry] {
        self.entries
    }

    /// Handle one keydown.
    ///
    /// On a match the toast is shown before either timer is scheduled. The
    /// navigation timer is never cancelled, so two matches inside the delay
    /// navigate twice, in order.
    pub fn handle_keydown(
        &self,
        event: &KeyInput,
        toast: &mut Toast,
        scheduler: &mut impl Scheduler,
    ) -> KeyHandleResult {
        if !event.ctrl || !event.shift {
            return KeyHandleResult::Ignored;
        }

        let combo = shortcut::canonical_combo(&event.key);
        let Some(target) = shortcut::find(self.entries, &combo) else {
            debug!(%combo, "no shortcut bound");
            return KeyHandleResult::Ignored;
        };

        info!(%combo, label = target.label, href = target.href, "shortcut matched");
        toast.show(format!("Shortcut: {}", target.label), scheduler);
        scheduler.schedule(NAVIGATE_AFTER, Deferred::Navigate(target.href));

        KeyHandleResult::Consumed
    }

    /// Apply an action whose timer has fired.
    pub fn dispatch(&self, action: Deferred, toast: &mut Toast, location: &mut impl Location) {
        match action {
            Deferred::HideToast => toast.hide(),
            Deferred::Navigate(href) => location.assign(href),
        }
    }
}
