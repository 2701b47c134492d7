use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use shortcut_nav::{
    Deferred, History, KeyHandleResult, KeyInput, Location, Scheduler, ShortcutNavigator,
    TimerId, TimerQueue, Toast, HIDE_AFTER, NAVIGATE_AFTER, SHORTCUTS,
};

struct Browser {
    navigator: ShortcutNavigator,
    toast: Toast,
    timers: TimerQueue,
    history: History,
}

impl Browser {
    fn at(path: &str) -> Self {
        let mut toast = Toast::new();
        toast.attach();
        Self {
            navigator: ShortcutNavigator::default(),
            toast,
            timers: TimerQueue::new(),
            history: History::new(path),
        }
    }

    fn keydown(&mut self, event: &KeyInput) -> KeyHandleResult {
        self.navigator
            .handle_keydown(event, &mut self.toast, &mut self.timers)
    }

    fn wait(&mut self, ms: u64) {
        for action in self.timers.advance(Duration::from_millis(ms)) {
            self.navigator
                .dispatch(action, &mut self.toast, &mut self.history);
        }
    }
}

#[test]
fn table_has_distinct_combos() {
    let combos: HashSet<_> = SHORTCUTS.iter().map(|e| e.combo).collect();
    assert_eq!(combos.len(), SHORTCUTS.len());
}

#[test]
fn ctrl_shift_c_lands_on_cart() {
    let mut browser = Browser::at("/");
    assert_eq!(
        browser.keydown(&KeyInput::chord("c")),
        KeyHandleResult::Consumed
    );
    assert!(browser.toast.is_displayed());
    assert_eq!(browser.toast.text(), "Shortcut: Cart");

    browser.wait(NAVIGATE_AFTER.as_millis() as u64);
    assert_eq!(browser.history.pending(), Some("/cart/"));
    browser.history.commit();
    assert_eq!(browser.history.current(), "/cart/");
}

#[test]
fn shift_without_control_passes_through() {
    let mut browser = Browser::at("/");
    let result = browser.keydown(&KeyInput::new(false, true, "h"));
    assert_eq!(result, KeyHandleResult::Ignored);
    browser.wait(2000);
    assert!(!browser.toast.is_visible());
    assert!(browser.history.pending().is_none());
}

#[test]
fn toast_lasts_until_1600ms_after_last_match() {
    let mut browser = Browser::at("/");
    browser.keydown(&KeyInput::chord("d"));
    browser.wait(100);
    browser.keydown(&KeyInput::chord("D"));

    browser.wait(HIDE_AFTER.as_millis() as u64 - 1);
    assert!(browser.toast.is_visible());
    browser.wait(1);
    assert!(!browser.toast.is_visible());
}

type EventLog = Arc<Mutex<Vec<String>>>;

fn push(log: &EventLog, entry: String) {
    log.lock().expect("event log").push(entry);
}

/// Writes the message of every tracing event into a shared log.
struct CaptureLayer(EventLog);

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        push(&self.0, visitor.0);
    }
}

/// Records every call, into the same log as the tracing events, so the
/// order of effects can be checked.
#[derive(Default)]
struct Recorder {
    log: EventLog,
    scheduled: Vec<(Duration, Deferred)>,
    cancelled: Vec<TimerId>,
    inner: TimerQueue,
}

impl Scheduler for Recorder {
    fn schedule(&mut self, delay: Duration, action: Deferred) -> TimerId {
        push(&self.log, format!("schedule {action:?}"));
        self.scheduled.push((delay, action));
        self.inner.schedule(delay, action)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        push(&self.log, "cancel".to_string());
        self.cancelled.push(id);
        self.inner.cancel(id)
    }
}

#[test]
fn hide_is_scheduled_before_navigation() {
    let navigator = ShortcutNavigator::default();
    let mut toast = Toast::new();
    let mut recorder = Recorder::default();

    navigator.handle_keydown(&KeyInput::chord("p"), &mut toast, &mut recorder);
    assert_eq!(
        recorder.scheduled,
        vec![
            (HIDE_AFTER, Deferred::HideToast),
            (NAVIGATE_AFTER, Deferred::Navigate("/profile/")),
        ]
    );
    assert!(recorder.cancelled.is_empty());

    let first_hide = toast.pending_hide();
    navigator.handle_keydown(&KeyInput::chord("s"), &mut toast, &mut recorder);
    assert_eq!(recorder.cancelled, first_hide.into_iter().collect::<Vec<_>>());
}

#[test]
fn toast_is_shown_before_any_timer_is_scheduled() {
    let log = EventLog::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer(Arc::clone(&log)));
    let navigator = ShortcutNavigator::default();
    let mut toast = Toast::new();
    let mut recorder = Recorder {
        log: Arc::clone(&log),
        ..Recorder::default()
    };

    tracing::subscriber::with_default(subscriber, || {
        navigator.handle_keydown(&KeyInput::chord("w"), &mut toast, &mut recorder);
    });

    let entries = log.lock().expect("event log").clone();
    let position = |wanted: &str| {
        entries
            .iter()
            .position(|entry| entry.starts_with(wanted))
            .unwrap_or_else(|| panic!("{wanted:?} missing from {entries:?}"))
    };
    let shown = position("toast shown");
    assert!(shown < position("schedule HideToast"), "{entries:?}");
    assert!(shown < position("schedule Navigate"), "{entries:?}");
    assert!(toast.is_visible());
    assert_eq!(toast.text(), "Shortcut: Warehouse");
}

#[test]
fn location_trait_is_object_safe() {
    let mut history = History::new("/settings/");
    let location: &mut dyn Location = &mut history;
    location.assign("../profile/");
    assert_eq!(history.pending(), Some("/profile/"));
}
