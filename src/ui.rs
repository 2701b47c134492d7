use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::overlays::{render_help_overlay, render_toast};
use crate::pages::Page;

pub fn render(frame: &mut Frame, app: &mut App) {
    let page = app.page();
    let title_color = match page {
        Page::Known { .. } => Color::White,
        Page::External { .. } => Color::Blue,
        Page::NotFound { .. } => Color::Red,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" shortcut-nav ");
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let body = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .split(inner)[0];

    let content = vec![
        Line::from(Span::styled(
            page.title().to_string(),
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            page.location().to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Ctrl+Shift+letter]", Style::default().fg(Color::Yellow)),
            Span::raw(" Go to page  "),
            Span::styled("[?]", Style::default().fg(Color::Yellow)),
            Span::raw(" Help"),
        ]),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), body);

    app.on_layout();

    if app.help_visible {
        render_help_overlay(frame, app.navigator.entries());
    }
    render_toast(frame, &app.document.toast);
}
