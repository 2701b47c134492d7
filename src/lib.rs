//! Control+Shift chords that flash a toast and then navigate.
//!
//! The navigator core ([`navigator`], [`toast`], [`scheduler`], [`location`])
//! knows nothing about terminals; [`app`] and [`ui`] host it in a ratatui
//! interface where each location is a page.

pub mod app;
pub mod config;
pub mod error;
pub mod key;
pub mod location;
pub mod log;
pub mod navigator;
pub mod overlays;
pub mod pages;
pub mod scheduler;
pub mod shortcut;
pub mod toast;
pub mod ui;

pub use error::{Error, Result};
pub use key::KeyInput;
pub use location::{History, Location};
pub use navigator::{KeyHandleResult, ShortcutNavigator, NAVIGATE_AFTER};
pub use scheduler::{Deferred, Scheduler, TimerId, TimerQueue};
pub use shortcut::{ShortcutEntry, SHORTCUTS};
pub use toast::{Toast, HIDE_AFTER};
