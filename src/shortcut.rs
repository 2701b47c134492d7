//! The static shortcut table and chord lookup.

/// Prefix shared by every combo in the table.
pub const COMBO_PREFIX: &str = "Control+Shift+";

/// A chord bound to a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutEntry {
    /// Canonical combo, always `Control+Shift+<UPPERCASE_LETTER>`
    pub combo: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

impl ShortcutEntry {
    pub const fn new(combo: &'static str, label: &'static str, href: &'static str) -> Self {
        Self { combo, label, href }
    }

    /// The key part of the combo, e.g. `"C"` for `Control+Shift+C`.
    pub fn key(&self) -> &'static str {
        self.combo.strip_prefix(COMBO_PREFIX).unwrap_or(self.combo)
    }
}

pub const SHORTCUTS: &[ShortcutEntry] = &[
    ShortcutEntry::new("Control+Shift+H", "Home", "/"),
    ShortcutEntry::new("Control+Shift+C", "Cart", "/cart/"),
    ShortcutEntry::new("Control+Shift+R", "Analytics reports", "/analytics/reports/"),
    ShortcutEntry::new("Control+Shift+D", "PDF report", "/analytics/report/pdf/"),
    ShortcutEntry::new("Control+Shift+B", "Backup", "/analytics/backup/"),
    ShortcutEntry::new("Control+Shift+W", "Warehouse", "/warehouse/"),
    ShortcutEntry::new("Control+Shift+P", "Profile", "/profile/"),
    ShortcutEntry::new("Control+Shift+S", "Settings", "/settings/"),
];

/// Build the canonical combo for a key name pressed with Control and Shift.
pub fn canonical_combo(key: &str) -> String {
    format!("{COMBO_PREFIX}{}", key.to_uppercase())
}

/// First entry whose combo equals `combo` exactly, in table order.
pub fn find<'a>(entries: &'a [ShortcutEntry], combo: &str) -> Option<&'a ShortcutEntry> {
    entries.iter().find(|entry| entry.combo == combo)
}
