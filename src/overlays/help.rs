use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::util::{centered_rect, shortcut_line};
use crate::shortcut::ShortcutEntry;

pub fn render_help_overlay(frame: &mut Frame, entries: &[ShortcutEntry]) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "  Go to",
        Style::default().fg(Color::White),
    )));
    for entry in entries {
        lines.push(shortcut_line(
            &format!("Ctrl+Shift+{}", entry.key()),
            entry.label,
        ));
    }

    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "  Global",
        Style::default().fg(Color::White),
    )));
    for (key, desc) in [("?", "Toggle Help"), ("q", "Quit")] {
        lines.push(shortcut_line(key, desc));
    }

    lines.push(Line::from(""));

    let content_height = lines.len() as u16 + 2;
    let overlay_width = 40u16;
    let overlay_height = content_height.min(frame.area().height.saturating_sub(4));

    let overlay_area = centered_rect(frame.area(), overlay_width, overlay_height);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Shortcuts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}
