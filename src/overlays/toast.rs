use ratatui::{
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
    Frame,
};

use super::util::bottom_right_rect;
use crate::toast::Toast;

const BACKGROUND: Color = Color::Rgb(3, 3, 24);
const MARGIN: u16 = 1;

/// Draw the toast in the bottom-right corner if it is on screen.
pub fn render_toast(frame: &mut Frame, toast: &Toast) {
    if !toast.is_displayed() {
        return;
    }

    let padding = Padding::horizontal(1);
    // borders + padding
    let chrome = 2 + padding.left + padding.right;
    let width = toast.text().chars().count() as u16 + chrome;
    let area = bottom_right_rect(frame.area(), width, 3, MARGIN);
    frame.render_widget(Clear, area);

    let style = Style::default().fg(Color::White).bg(BACKGROUND);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray).bg(BACKGROUND))
        .style(style)
        .padding(padding);

    frame.render_widget(Paragraph::new(toast.text()).block(block), area);
}
